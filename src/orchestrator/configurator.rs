//! Configurator - the single controller that owns the session.
//!
//! Each operation mutates the session under the lock, releases it for the
//! solver round trip, then re-acquires it to settle the response. The lock is
//! never held across a network call, so later edits can be issued while an
//! earlier request is still out; sequence numbers keep the late ones from
//! overwriting newer state.

use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

use super::event_bus::{ConfiguratorEvent, EventBus};
use crate::catalog::{Preset, Value, Variable};
use crate::engine::DerivedProfile;
use crate::error::{ConfiguratorResult, SolverError};
use crate::solver::{SolveOutcome, SolverBackend};
use crate::state::{Assignment, PropagationOutcome, PropagationTicket, Session};

pub struct Configurator {
    solver: Arc<dyn SolverBackend>,
    session: Mutex<Session>,
    events: EventBus,
}

impl Configurator {
    pub fn new(solver: Arc<dyn SolverBackend>) -> Self {
        Self {
            solver,
            session: Mutex::new(Session::new()),
            events: EventBus::new(),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConfiguratorEvent> {
        self.events.subscribe()
    }

    /// Copy of the current session, for rendering
    pub async fn snapshot(&self) -> Session {
        self.session.lock().await.clone()
    }

    pub async fn assignment(&self) -> Assignment {
        *self.session.lock().await.assignment()
    }

    /// Derived profile of the live assignment. Never waits on the network.
    pub async fn profile(&self) -> DerivedProfile {
        self.session.lock().await.profile()
    }

    pub async fn is_waiting(&self) -> bool {
        self.session.lock().await.is_waiting()
    }

    /// Populate the initial domains
    pub async fn start(&self) -> Result<PropagationOutcome, SolverError> {
        info!("Starting configurator session");
        self.propagate().await
    }

    /// Send the current assignment to `propagate` and settle the response
    pub async fn propagate(&self) -> Result<PropagationOutcome, SolverError> {
        let ticket = self.session.lock().await.begin_propagation();
        self.run_propagation(ticket).await
    }

    pub async fn select(&self, value: Value) -> ConfiguratorResult<PropagationOutcome> {
        debug!("Select {} = {}", value.variable(), value);
        let ticket = {
            let mut session = self.session.lock().await;
            session.select(value);
            session.begin_propagation()
        };
        Ok(self.run_propagation(ticket).await?)
    }

    /// Parse user text for `variable`; unknown tokens change nothing
    pub async fn select_token(&self, variable: Variable, token: &str) -> ConfiguratorResult<PropagationOutcome> {
        let value = Value::parse(variable, token)?;
        self.select(value).await
    }

    pub async fn clear(&self, variable: Variable) -> ConfiguratorResult<PropagationOutcome> {
        debug!("Clear {}", variable);
        let ticket = {
            let mut session = self.session.lock().await;
            session.clear(variable);
            session.begin_propagation()
        };
        Ok(self.run_propagation(ticket).await?)
    }

    /// Overwrite the whole assignment with a named preset, then propagate.
    /// An unknown name is reported and leaves the session untouched.
    pub async fn apply_preset(&self, name: &str) -> ConfiguratorResult<PropagationOutcome> {
        let preset = Preset::find(name).inspect_err(|e| warn!("{}", e))?;

        info!("Applying preset '{}'", preset.name);
        let ticket = {
            let mut session = self.session.lock().await;
            session.load_preset(preset);
            session.begin_propagation()
        };
        self.events.publish(ConfiguratorEvent::PresetApplied { name: preset.name.to_string() });

        Ok(self.run_propagation(ticket).await?)
    }

    pub async fn reset(&self) -> Result<PropagationOutcome, SolverError> {
        info!("Resetting configuration");
        let ticket = {
            let mut session = self.session.lock().await;
            session.reset();
            session.begin_propagation()
        };
        self.run_propagation(ticket).await
    }

    /// Ask for one complete configuration. Read-only: the assignment and
    /// domains are not touched. `Ok(None)` means an edit happened meanwhile
    /// and the answer was discarded.
    pub async fn solve(&self) -> Result<Option<SolveOutcome>, SolverError> {
        let ticket = self.session.lock().await.begin_solve();
        let result = self.solver.solve(&ticket.assignment).await;

        let settled = self.session.lock().await.finish_solve(ticket, result);
        match &settled {
            Ok(Some(outcome)) => {
                let complete = outcome.configuration().is_some();
                info!("Solve finished (complete configuration: {})", complete);
                self.events.publish(ConfiguratorEvent::SolutionReady { complete });
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Solve failed: {}", e);
                self.events.publish(ConfiguratorEvent::SolutionFailed { error: e.to_string() });
            }
        }
        settled
    }

    async fn run_propagation(&self, ticket: PropagationTicket) -> Result<PropagationOutcome, SolverError> {
        self.events.publish(ConfiguratorEvent::PropagationIssued { seq: ticket.seq });

        let result = self.solver.propagate(&ticket.assignment).await;
        let settled = self.session.lock().await.finish_propagation(ticket, result);

        match &settled {
            Ok(PropagationOutcome::Applied { seq, valid, narrowed }) => {
                if !narrowed.is_empty() {
                    self.events.publish(ConfiguratorEvent::SelectionNarrowed { variables: narrowed.clone() });
                }
                self.events.publish(ConfiguratorEvent::DomainsApplied { seq: *seq, valid: *valid });
            }
            Ok(PropagationOutcome::Superseded { seq, latest }) => {
                self.events.publish(ConfiguratorEvent::ResponseDiscarded { seq: *seq, latest: *latest });
            }
            Err(e) => {
                warn!("Propagation #{} failed: {}", ticket.seq, e);
                self.events.publish(ConfiguratorEvent::PropagationFailed {
                    seq: ticket.seq,
                    error: e.to_string(),
                });
            }
        }
        settled
    }
}
