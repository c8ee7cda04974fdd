//! Wire types for the solver service.

use serde::{Deserialize, Serialize};

use crate::catalog::{Color, Drivetrain, Engine, Interior, Model, Pack, Transmission, Value};
use crate::state::{Assignment, Configuration, Domains};

/// Request body shared by `propagate` and `solve`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolverRequest {
    pub assignments: Assignment,
}

/// Domains as they appear on the wire. A variable the service leaves out is
/// an empty domain; an unknown token fails decoding.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct WireDomains {
    model: Vec<Model>,
    engine: Vec<Engine>,
    transmission: Vec<Transmission>,
    drivetrain: Vec<Drivetrain>,
    color: Vec<Color>,
    interior: Vec<Interior>,
    pack: Vec<Pack>,
}

impl From<WireDomains> for Domains {
    fn from(wire: WireDomains) -> Self {
        let values = wire.model.into_iter().map(Value::Model)
            .chain(wire.engine.into_iter().map(Value::Engine))
            .chain(wire.transmission.into_iter().map(Value::Transmission))
            .chain(wire.drivetrain.into_iter().map(Value::Drivetrain))
            .chain(wire.color.into_iter().map(Value::Color))
            .chain(wire.interior.into_iter().map(Value::Interior))
            .chain(wire.pack.into_iter().map(Value::Pack));
        values.collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
struct WirePropagateResponse {
    #[serde(default)]
    domains: WireDomains,
    valid: bool,
}

/// Decoded `propagate` response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropagateResponse {
    pub domains: Domains,
    pub valid: bool,
}

impl PropagateResponse {
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        let wire: WirePropagateResponse = serde_json::from_str(body)?;
        Ok(Self {
            domains: wire.domains.into(),
            valid: wire.valid,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
struct WireSolveResponse {
    status: String,
    #[serde(default)]
    configuration: Option<Configuration>,
}

/// Decoded `solve` response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    Complete(Configuration),
    Infeasible,
}

impl SolveOutcome {
    pub const INFEASIBLE_STATUS: &'static str = "INFEASIBLE";

    /// An infeasible status and a missing configuration mean the same thing.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        let wire: WireSolveResponse = serde_json::from_str(body)?;
        Ok(match wire.configuration {
            Some(configuration) if wire.status != Self::INFEASIBLE_STATUS => {
                SolveOutcome::Complete(configuration)
            }
            _ => SolveOutcome::Infeasible,
        })
    }

    pub fn configuration(&self) -> Option<&Configuration> {
        match self {
            SolveOutcome::Complete(c) => Some(c),
            SolveOutcome::Infeasible => None,
        }
    }
}
