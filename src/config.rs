//! Runtime configuration, read from the environment (after `.env`).

use std::env;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_SOLVER_URL: &str = "http://127.0.0.1:8000";
pub const SOLVER_URL_VAR: &str = "CONFIGURATOR_SOLVER_URL";
pub const TIMEOUT_VAR: &str = "CONFIGURATOR_TIMEOUT_SECS";

/// Where the solver service lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Base address of the solver service
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SOLVER_URL.to_string(),
            timeout: None,
        }
    }
}

impl SolverConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(SOLVER_URL_VAR).filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(0) => {}
                Ok(secs) => config.timeout = Some(Duration::from_secs(secs)),
                Err(_) => warn!("Ignoring invalid {}='{}'", TIMEOUT_VAR, raw),
            }
        }

        config
    }
}
