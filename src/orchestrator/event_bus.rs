//! Configurator Event Bus
//!
//! Broadcast channel owned by the `Configurator`, so front-ends and tests can
//! follow what each round trip did without polling the session.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::catalog::Variable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ConfiguratorEvent {
    /// A propagation request left with this sequence number
    PropagationIssued { seq: u64 },
    /// The latest propagation response is now displayed
    DomainsApplied { seq: u64, valid: bool },
    /// Variables that silently lost their value during reconciliation
    SelectionNarrowed { variables: Vec<Variable> },
    /// A late response was dropped
    ResponseDiscarded { seq: u64, latest: u64 },
    PropagationFailed { seq: u64, error: String },
    PresetApplied { name: String },
    SolutionReady { complete: bool },
    SolutionFailed { error: String },
}

pub struct EventBus {
    tx: broadcast::Sender<ConfiguratorEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(256);
        Self { tx }
    }

    /// Publish an event to all subscribers
    pub fn publish(&self, event: ConfiguratorEvent) {
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConfiguratorEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
