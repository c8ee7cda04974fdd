//! Session State
//!
//! The one live assignment, the last domains received, and what the user is
//! currently shown. Owned by the `Configurator`; every mutation goes through
//! the operations below so that a late solver response can be recognised and
//! dropped.

use std::fmt;
use tracing::{debug, info, warn};

use super::{Assignment, Configuration, Domains};
use crate::catalog::{Preset, Value, Variable};
use crate::engine::{aggregate, resolve_all, DerivedProfile};
use crate::error::SolverError;
use crate::solver::{PropagateResponse, SolveOutcome};

/// Status line shown above the controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Banner {
    #[default]
    Idle,
    PresetApplied,
    /// The partial assignment can still be completed
    Feasible,
    /// No complete configuration extends the current choices
    Infeasible,
    /// The service answered with a non-success status or garbage
    PropagationFailed,
    /// The service could not be reached
    Unreachable,
}

impl Banner {
    pub fn message(&self) -> &'static str {
        match self {
            Banner::Idle => "Select options to get started.",
            Banner::PresetApplied => "Preset applied, checking constraints...",
            Banner::Feasible => "Partial configuration is compatible. Pick more options or request a complete configuration.",
            Banner::Infeasible => "Current choices are incompatible (no configuration possible).",
            Banner::PropagationFailed => "Propagation failed.",
            Banner::Unreachable => "Could not reach the solver service (is the backend running?).",
        }
    }

    pub fn is_alert(&self) -> bool {
        matches!(self, Banner::Infeasible | Banner::PropagationFailed | Banner::Unreachable)
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of the last `solve`, shown separately from the controls
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SolutionView {
    #[default]
    Empty,
    Found(Configuration),
    Unavailable,
    Failed(SolverError),
}

/// Snapshot taken when a propagation request is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropagationTicket {
    pub seq: u64,
    pub assignment: Assignment,
}

/// Snapshot taken when a solve request is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveTicket {
    pub generation: u64,
    pub assignment: Assignment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropagationOutcome {
    /// The response was for the latest request and is now displayed
    Applied {
        seq: u64,
        valid: bool,
        narrowed: Vec<Variable>,
    },
    /// A newer request was issued meanwhile; the response was dropped
    Superseded { seq: u64, latest: u64 },
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    assignment: Assignment,
    domains: Option<Domains>,
    banner: Banner,
    solution: SolutionView,
    /// Sequence number of the latest propagation issued
    issued: u64,
    in_flight: usize,
    /// Bumped on every user edit; invalidates in-flight solves
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Domains from the last applied response; `None` before the first one
    pub fn domains(&self) -> Option<&Domains> {
        self.domains.as_ref()
    }

    pub fn banner(&self) -> Banner {
        self.banner
    }

    pub fn solution(&self) -> &SolutionView {
        &self.solution
    }

    pub fn profile(&self) -> DerivedProfile {
        aggregate(&self.assignment)
    }

    /// A propagation has been issued and has not settled yet
    pub fn is_waiting(&self) -> bool {
        self.in_flight > 0
    }

    pub fn latest_seq(&self) -> u64 {
        self.issued
    }

    // ─── Edits ─────────────────────────────────────────────────────────

    pub(crate) fn select(&mut self, value: Value) {
        self.assignment.set(value);
        self.touch();
    }

    pub(crate) fn clear(&mut self, variable: Variable) {
        self.assignment.clear(variable);
        self.touch();
    }

    /// Overwrite every variable at once
    pub(crate) fn load_preset(&mut self, preset: &Preset) {
        self.assignment = preset.configuration.into();
        self.banner = Banner::PresetApplied;
        self.touch();
    }

    pub(crate) fn reset(&mut self) {
        self.assignment = Assignment::default();
        self.banner = Banner::Idle;
        self.touch();
    }

    fn touch(&mut self) {
        self.generation += 1;
        self.solution = SolutionView::Empty;
    }

    // ─── Propagation ───────────────────────────────────────────────────

    pub(crate) fn begin_propagation(&mut self) -> PropagationTicket {
        self.issued += 1;
        self.in_flight += 1;
        self.solution = SolutionView::Empty;

        PropagationTicket {
            seq: self.issued,
            assignment: self.assignment,
        }
    }

    /// Settle a propagation request. Only the latest request may change what
    /// is displayed; a failure leaves domains and selections untouched.
    pub(crate) fn finish_propagation(
        &mut self,
        ticket: PropagationTicket,
        result: Result<PropagateResponse, SolverError>,
    ) -> Result<PropagationOutcome, SolverError> {
        self.in_flight = self.in_flight.saturating_sub(1);

        if ticket.seq != self.issued {
            match &result {
                Ok(_) => debug!("Dropping propagation #{} (latest is #{})", ticket.seq, self.issued),
                Err(e) => warn!("Propagation #{} failed after being superseded: {}", ticket.seq, e),
            }
            return Ok(PropagationOutcome::Superseded {
                seq: ticket.seq,
                latest: self.issued,
            });
        }

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                self.banner = if e.is_transport() {
                    Banner::Unreachable
                } else {
                    Banner::PropagationFailed
                };
                return Err(e);
            }
        };

        let resolution = resolve_all(&response.domains, &self.assignment, &ticket.assignment);
        if !resolution.narrowed.is_empty() {
            debug!("Propagation #{} narrowed {:?}", ticket.seq, resolution.narrowed);
        }

        self.assignment = resolution.selection;
        self.domains = Some(response.domains);
        self.banner = if response.valid { Banner::Feasible } else { Banner::Infeasible };

        info!(
            "Propagation #{} applied (valid: {}, {} fixed)",
            ticket.seq,
            response.valid,
            self.assignment.specified().count()
        );

        Ok(PropagationOutcome::Applied {
            seq: ticket.seq,
            valid: response.valid,
            narrowed: resolution.narrowed,
        })
    }

    // ─── Solve ─────────────────────────────────────────────────────────

    pub(crate) fn begin_solve(&self) -> SolveTicket {
        SolveTicket {
            generation: self.generation,
            assignment: self.assignment,
        }
    }

    /// Settle a solve request. Returns `Ok(None)` when an edit happened while
    /// it was in flight and the result was discarded.
    pub(crate) fn finish_solve(
        &mut self,
        ticket: SolveTicket,
        result: Result<SolveOutcome, SolverError>,
    ) -> Result<Option<SolveOutcome>, SolverError> {
        if ticket.generation != self.generation {
            debug!("Discarding solve result for an outdated assignment");
            return Ok(None);
        }

        match result {
            Ok(outcome) => {
                self.solution = match outcome {
                    SolveOutcome::Complete(configuration) => SolutionView::Found(configuration),
                    SolveOutcome::Infeasible => SolutionView::Unavailable,
                };
                Ok(Some(outcome))
            }
            Err(e) => {
                self.solution = SolutionView::Failed(e.clone());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Drivetrain, Engine, Model, Pack};

    fn response(values: &[Value], valid: bool) -> PropagateResponse {
        PropagateResponse {
            domains: values.iter().copied().collect(),
            valid,
        }
    }

    #[test]
    fn test_apply_reconciles_and_writes_back() {
        let mut session = Session::new();
        session.select(Value::Model(Model::Civic));
        session.select(Value::Engine(Engine::Petrol30));

        let ticket = session.begin_propagation();
        assert!(session.is_waiting());

        let outcome = session
            .finish_propagation(
                ticket,
                Ok(response(&[Value::Model(Model::Civic), Value::Engine(Engine::Petrol15)], true)),
            )
            .unwrap();

        assert_eq!(
            outcome,
            PropagationOutcome::Applied { seq: 1, valid: true, narrowed: vec![Variable::Engine] }
        );
        assert_eq!(session.assignment().model, Some(Model::Civic));
        assert_eq!(session.assignment().engine, None);
        assert_eq!(session.banner(), Banner::Feasible);
        assert!(!session.is_waiting());
    }

    #[test]
    fn test_late_response_is_dropped() {
        let mut session = Session::new();
        session.select(Value::Model(Model::Golf));
        let first = session.begin_propagation();

        session.select(Value::Model(Model::Mustang));
        let second = session.begin_propagation();

        let applied = session
            .finish_propagation(second, Ok(response(&[Value::Model(Model::Mustang)], true)))
            .unwrap();
        assert!(matches!(applied, PropagationOutcome::Applied { seq: 2, .. }));

        let snapshot = (session.assignment, session.domains.clone(), session.banner);
        let late = session
            .finish_propagation(first, Ok(response(&[Value::Model(Model::Golf)], false)))
            .unwrap();

        assert_eq!(late, PropagationOutcome::Superseded { seq: 1, latest: 2 });
        assert_eq!((session.assignment, session.domains.clone(), session.banner), snapshot);
    }

    #[test]
    fn test_failure_leaves_state_untouched() {
        let mut session = Session::new();
        session.select(Value::Pack(Pack::Sport));
        let ticket = session.begin_propagation();
        session
            .finish_propagation(ticket, Ok(response(&[Value::Pack(Pack::Sport)], true)))
            .unwrap();

        let assignment = session.assignment;
        let domains = session.domains.clone();

        session.select(Value::Drivetrain(Drivetrain::Awd));
        let ticket = session.begin_propagation();
        let err = session
            .finish_propagation(ticket, Err(SolverError::Transport("connection refused".into())))
            .unwrap_err();

        assert!(err.is_transport());
        assert_eq!(session.banner(), Banner::Unreachable);
        assert_eq!(session.domains, domains);
        // The edit itself stands; nothing was cleared by the failure.
        assert_eq!(session.assignment.pack, assignment.pack);
        assert_eq!(session.assignment.drivetrain, Some(Drivetrain::Awd));
    }

    #[test]
    fn test_status_failure_banner() {
        let mut session = Session::new();
        let ticket = session.begin_propagation();
        let _ = session.finish_propagation(
            ticket,
            Err(SolverError::Status { operation: "propagate", status: 500 }),
        );
        assert_eq!(session.banner(), Banner::PropagationFailed);
        assert!(session.banner().is_alert());
    }

    #[test]
    fn test_solve_discarded_after_edit() {
        let mut session = Session::new();
        let ticket = session.begin_solve();
        session.select(Value::Model(Model::X3));

        let result = session.finish_solve(ticket, Ok(SolveOutcome::Infeasible)).unwrap();
        assert!(result.is_none());
        assert_eq!(session.solution(), &SolutionView::Empty);
    }

    #[test]
    fn test_solve_infeasible_and_cleared_by_propagation() {
        let mut session = Session::new();
        let ticket = session.begin_solve();
        session.finish_solve(ticket, Ok(SolveOutcome::Infeasible)).unwrap();
        assert_eq!(session.solution(), &SolutionView::Unavailable);

        session.begin_propagation();
        assert_eq!(session.solution(), &SolutionView::Empty);
    }

    #[test]
    fn test_preset_overwrites_everything() {
        let mut session = Session::new();
        session.select(Value::Model(Model::Civic));
        session.load_preset(Preset::find("offroad").unwrap());

        assert!(session.assignment().is_complete());
        assert_eq!(session.assignment().model, Some(Model::X3));
        assert_eq!(session.banner(), Banner::PresetApplied);
        assert!(session.profile().is_known());
    }
}
