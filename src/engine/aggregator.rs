//! Profile Aggregator
//!
//! Sums the effect deltas of the engine, model, pack and drivetrain choices
//! into a derived profile.

use serde::Serialize;

use crate::catalog::{EffectDelta, EffectTable};
use crate::state::Assignment;

/// Fastest acceleration time any configuration may report, in seconds
pub const MIN_ACCELERATION_SECS: f64 = 3.5;

/// Derived numeric profile. `None` means "cannot compute", which is distinct
/// from a computed zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DerivedProfile {
    pub power: Option<f64>,
    pub acceleration: Option<f64>,
    pub range: Option<f64>,
    pub price: Option<f64>,
}

impl DerivedProfile {
    pub const UNKNOWN: DerivedProfile = DerivedProfile {
        power: None,
        acceleration: None,
        range: None,
        price: None,
    };

    pub fn is_known(&self) -> bool {
        self.power.is_some()
    }
}

pub fn aggregate(assignment: &Assignment) -> DerivedProfile {
    let engine = EffectTable::ENGINE_POLICY.apply(assignment.engine);
    let model = EffectTable::MODEL_POLICY.apply(assignment.model);
    let (Some(engine), Some(model)) = (engine, model) else {
        return DerivedProfile::UNKNOWN;
    };

    let pack = EffectTable::PACK_POLICY
        .apply(assignment.pack)
        .map(EffectTable::pack)
        .unwrap_or_default();
    let drivetrain = EffectTable::DRIVETRAIN_POLICY
        .apply(assignment.drivetrain)
        .map(EffectTable::drivetrain)
        .unwrap_or_default();

    let total = [EffectTable::engine(engine), EffectTable::model(model), pack, drivetrain]
        .into_iter()
        .fold(EffectDelta::default(), |acc, d| EffectDelta {
            power: acc.power + d.power,
            acceleration: acc.acceleration + d.acceleration,
            range: acc.range + d.range,
            price: acc.price + d.price,
        });

    DerivedProfile {
        power: Some(total.power),
        acceleration: Some(total.acceleration.max(MIN_ACCELERATION_SECS)),
        range: Some(total.range),
        price: Some(total.price),
    }
}
