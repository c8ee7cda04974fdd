use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::{PropagateResponse, SolveOutcome, SolverBackend, SolverRequest};
use crate::config::SolverConfig;
use crate::error::SolverError;
use crate::state::Assignment;

/// Solver reached over HTTP (`POST {base}/propagate`, `POST {base}/solve`)
pub struct HttpSolver {
    client: Client,
    base_url: String,
}

impl HttpSolver {
    pub fn new(config: &SolverConfig) -> Result<Self, SolverError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SolverError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post(&self, operation: &'static str, assignment: &Assignment) -> Result<String, SolverError> {
        let url = format!("{}/{}", self.base_url, operation);
        let body = SolverRequest { assignments: *assignment };

        debug!("POST {} ({} variables fixed)", url, assignment.specified().count());

        let response = self.client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!("Solver {} request failed: {}", operation, e);
                SolverError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Solver {} answered {}", operation, status);
            return Err(SolverError::Status { operation, status: status.as_u16() });
        }

        response
            .text()
            .await
            .map_err(|e| SolverError::Transport(e.to_string()))
    }
}

#[async_trait]
impl SolverBackend for HttpSolver {
    async fn propagate(&self, assignment: &Assignment) -> Result<PropagateResponse, SolverError> {
        let body = self.post("propagate", assignment).await?;
        PropagateResponse::from_json(&body).map_err(|e| SolverError::Decode {
            operation: "propagate",
            message: e.to_string(),
        })
    }

    async fn solve(&self, assignment: &Assignment) -> Result<SolveOutcome, SolverError> {
        let body = self.post("solve", assignment).await?;
        SolveOutcome::from_json(&body).map_err(|e| SolverError::Decode {
            operation: "solve",
            message: e.to_string(),
        })
    }
}
