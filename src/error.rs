use thiserror::Error;

use crate::catalog::Variable;

/// Rejections at the reference-data boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    #[error("Unknown value '{token}' for {variable}")]
    UnknownValue { variable: Variable, token: String },

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

/// Failures talking to the external solver service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("Solver service unreachable: {0}")]
    Transport(String),

    #[error("Solver {operation} returned HTTP {status}")]
    Status { operation: &'static str, status: u16 },

    #[error("Malformed {operation} response: {message}")]
    Decode { operation: &'static str, message: String },
}

impl SolverError {
    /// True when the service could not be contacted at all
    pub fn is_transport(&self) -> bool {
        matches!(self, SolverError::Transport(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfiguratorError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Solver(#[from] SolverError),
}

pub type ConfiguratorResult<T> = Result<T, ConfiguratorError>;
