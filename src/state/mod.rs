//! State Module
//!
//! Assignment, solver-reported domains, and the session that ties them
//! together.

pub mod assignment;
pub mod domains;
pub mod session;

pub use assignment::{Assignment, Configuration};
pub use domains::{Domain, Domains};
pub use session::{Banner, PropagationOutcome, PropagationTicket, Session, SolutionView, SolveTicket};
