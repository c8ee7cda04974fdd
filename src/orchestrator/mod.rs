//! Orchestrator Module
//!
//! Drives the round trips to the solver and keeps the session consistent
//! with their results.

pub mod configurator;
pub mod event_bus;

pub use configurator::Configurator;
pub use event_bus::{ConfiguratorEvent, EventBus};
