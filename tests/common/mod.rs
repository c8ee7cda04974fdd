//! Shared test doubles for the solver service.
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, Mutex};

use car_configurator::catalog::{Color, Drivetrain, Engine, Interior, Model, Pack, Transmission};
use car_configurator::solver::{PropagateResponse, SolveOutcome, SolverBackend};
use car_configurator::state::{Assignment, Configuration, Domains};
use car_configurator::SolverError;

/// Brute-force solver over the full catalog with the dealership's
/// compatibility rules. Small enough (10 800 combinations) to enumerate.
#[derive(Default)]
pub struct CatalogSolver {
    pub propagate_calls: AtomicUsize,
    pub solve_calls: AtomicUsize,
}

impl CatalogSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allowed(c: &Configuration) -> bool {
        use Engine::*;
        use Model::*;

        let engine_ok = match c.engine {
            Petrol15 => matches!(c.model, Civic | Golf),
            Petrol20 => true,
            Petrol30 => matches!(c.model, X3 | Mustang),
            Diesel20 => c.model == Golf,
            Hybrid => matches!(c.model, Civic | Golf),
        };
        let drivetrain_ok = match c.model {
            Civic => c.drivetrain == Drivetrain::Fwd,
            Golf => c.drivetrain != Drivetrain::Rwd,
            Bmw330i | Mustang => c.drivetrain != Drivetrain::Fwd,
            X3 => c.drivetrain == Drivetrain::Awd,
        };
        let automatic_only = matches!(c.model, Bmw330i | X3) || c.drivetrain == Drivetrain::Awd;
        let transmission_ok = !(automatic_only && c.transmission == Transmission::Manual);
        let pack_ok = c.pack != Pack::Amg || matches!(c.model, Bmw330i | X3);
        let interior_ok = !(c.interior == Interior::PremiumLeather && c.pack == Pack::Base);

        engine_ok && drivetrain_ok && transmission_ok && pack_ok && interior_ok
    }

    /// Every allowed configuration keeping the fixed values of `assignment`
    pub fn completions(assignment: &Assignment) -> Vec<Configuration> {
        let mut out = Vec::new();
        for &model in Model::ALL {
            for &engine in Engine::ALL {
                for &transmission in Transmission::ALL {
                    for &drivetrain in Drivetrain::ALL {
                        for &color in Color::ALL {
                            for &interior in Interior::ALL {
                                for &pack in Pack::ALL {
                                    let c = Configuration { model, engine, transmission, drivetrain, color, interior, pack };
                                    if c.honours(assignment) && Self::allowed(&c) {
                                        out.push(c);
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        out
    }

    pub fn domains_for(assignment: &Assignment) -> PropagateResponse {
        let completions = Self::completions(assignment);
        let valid = !completions.is_empty();
        let domains: Domains = completions
            .iter()
            .flat_map(|c| car_configurator::Variable::ALL.map(|v| c.get(v)))
            .collect();
        PropagateResponse { domains, valid }
    }
}

#[async_trait]
impl SolverBackend for CatalogSolver {
    async fn propagate(&self, assignment: &Assignment) -> Result<PropagateResponse, SolverError> {
        self.propagate_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Self::domains_for(assignment))
    }

    async fn solve(&self, assignment: &Assignment) -> Result<SolveOutcome, SolverError> {
        self.solve_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Self::completions(assignment)
            .first()
            .copied()
            .map_or(SolveOutcome::Infeasible, SolveOutcome::Complete))
    }
}

/// Catalog solver that can be taken offline
#[derive(Default)]
pub struct FlakySolver {
    pub inner: CatalogSolver,
    pub offline: AtomicBool,
    pub status_error: AtomicBool,
}

impl FlakySolver {
    fn check(&self, operation: &'static str) -> Result<(), SolverError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(SolverError::Transport("connection refused".to_string()));
        }
        if self.status_error.load(Ordering::SeqCst) {
            return Err(SolverError::Status { operation, status: 500 });
        }
        Ok(())
    }
}

#[async_trait]
impl SolverBackend for FlakySolver {
    async fn propagate(&self, assignment: &Assignment) -> Result<PropagateResponse, SolverError> {
        self.check("propagate")?;
        self.inner.propagate(assignment).await
    }

    async fn solve(&self, assignment: &Assignment) -> Result<SolveOutcome, SolverError> {
        self.check("solve")?;
        self.inner.solve(assignment).await
    }
}

/// Holds every request until the test releases it, so responses can be
/// delivered in any order.
pub struct GatedSolver {
    inner: CatalogSolver,
    gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    arrivals: mpsc::UnboundedSender<Assignment>,
}

pub struct Gates {
    pub releases: Vec<Option<oneshot::Sender<()>>>,
    pub arrivals: mpsc::UnboundedReceiver<Assignment>,
}

impl Gates {
    /// Let request `index` (in arrival order) answer
    pub fn release(&mut self, index: usize) {
        if let Some(tx) = self.releases[index].take() {
            let _ = tx.send(());
        }
    }

    /// Wait until the next request has reached the solver
    pub async fn next_arrival(&mut self) -> Assignment {
        self.arrivals.recv().await.expect("solver dropped")
    }
}

impl GatedSolver {
    pub fn new(requests: usize) -> (Arc<Self>, Gates) {
        let (arrivals_tx, arrivals_rx) = mpsc::unbounded_channel();
        let (senders, receivers): (Vec<_>, VecDeque<_>) = (0..requests).map(|_| oneshot::channel()).unzip();

        let solver = Arc::new(Self {
            inner: CatalogSolver::new(),
            gates: Mutex::new(receivers),
            arrivals: arrivals_tx,
        });
        let gates = Gates {
            releases: senders.into_iter().map(Some).collect(),
            arrivals: arrivals_rx,
        };
        (solver, gates)
    }

    async fn wait(&self, assignment: &Assignment) {
        let gate = self.gates.lock().await.pop_front();
        let _ = self.arrivals.send(*assignment);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }
}

#[async_trait]
impl SolverBackend for GatedSolver {
    async fn propagate(&self, assignment: &Assignment) -> Result<PropagateResponse, SolverError> {
        self.wait(assignment).await;
        self.inner.propagate(assignment).await
    }

    async fn solve(&self, assignment: &Assignment) -> Result<SolveOutcome, SolverError> {
        self.wait(assignment).await;
        self.inner.solve(assignment).await
    }
}
