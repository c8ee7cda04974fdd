//! Solver Module
//!
//! Client side of the external constraint solver. The service exposes two
//! operations: `propagate` narrows per-variable domains for a partial
//! assignment, `solve` searches for one complete configuration.

mod http;
pub mod types;

pub use http::HttpSolver;
pub use types::{PropagateResponse, SolveOutcome, SolverRequest};

use async_trait::async_trait;

use crate::error::SolverError;
use crate::state::Assignment;

/// Anything that can answer `propagate` and `solve` for an assignment
#[async_trait]
pub trait SolverBackend: Send + Sync {
    /// Per-variable legal domains plus overall feasibility
    async fn propagate(&self, assignment: &Assignment) -> Result<PropagateResponse, SolverError>;

    /// One complete configuration honouring every fixed value, if any exists
    async fn solve(&self, assignment: &Assignment) -> Result<SolveOutcome, SolverError>;
}
