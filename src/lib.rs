//! Car Configurator Client
//!
//! Client half of an interactive product configurator:
//! - Closed catalog of variables and values, with effects and presets
//! - Reconciliation of displayed choices against solver-pruned domains
//! - Additive derived profile (power, acceleration, range, price)
//! - Propagate / solve round trips to an external constraint solver

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod orchestrator;
pub mod solver;
pub mod state;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use catalog::{Value, Variable};
pub use config::SolverConfig;
pub use engine::{aggregate, resolve, DerivedProfile};
pub use error::{CatalogError, ConfiguratorError, SolverError};
pub use orchestrator::Configurator;
pub use solver::{HttpSolver, SolverBackend};
pub use state::{Assignment, Domains, Session};
