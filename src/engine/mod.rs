//! Engine Module
//!
//! The two pure computations at the heart of the configurator: reconciling
//! displayed values against solver domains, and aggregating the derived
//! profile of an assignment.

pub mod aggregator;
pub mod reconciler;

pub use aggregator::{aggregate, DerivedProfile, MIN_ACCELERATION_SECS};
pub use reconciler::{resolve, resolve_all, Resolution};
