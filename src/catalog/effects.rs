//! Effect Table
//!
//! Additive deltas contributed by the engine, model, pack and drivetrain
//! choices to the derived profile.

use serde::{Deserialize, Serialize};

use super::{Drivetrain, Engine, Model, Pack};

/// Contribution of one chosen value to the derived profile
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EffectDelta {
    /// Horsepower
    pub power: f64,
    /// 0-100 km/h time in seconds; negative deltas mean faster
    pub acceleration: f64,
    /// Range in km
    pub range: f64,
    /// Price in euros
    pub price: f64,
}

impl EffectDelta {
    const fn new(power: f64, acceleration: f64, range: f64, price: f64) -> Self {
        Self { power, acceleration, range, price }
    }
}

/// What an effect dimension contributes when its variable is unspecified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultPolicy<T> {
    /// No profile can be computed without a value
    Required,
    /// Fall back to a neutral value
    DefaultsTo(T),
}

impl<T: Copy> DefaultPolicy<T> {
    /// Resolve an optional choice against this policy
    pub fn apply(self, chosen: Option<T>) -> Option<T> {
        match (chosen, self) {
            (Some(value), _) => Some(value),
            (None, DefaultPolicy::DefaultsTo(default)) => Some(default),
            (None, DefaultPolicy::Required) => None,
        }
    }
}

pub struct EffectTable;

impl EffectTable {
    pub const ENGINE_POLICY: DefaultPolicy<Engine> = DefaultPolicy::Required;
    pub const MODEL_POLICY: DefaultPolicy<Model> = DefaultPolicy::Required;
    pub const PACK_POLICY: DefaultPolicy<Pack> = DefaultPolicy::DefaultsTo(Pack::Base);
    pub const DRIVETRAIN_POLICY: DefaultPolicy<Drivetrain> = DefaultPolicy::DefaultsTo(Drivetrain::Fwd);

    pub fn engine(engine: Engine) -> EffectDelta {
        match engine {
            Engine::Petrol15 => EffectDelta::new(130.0, 10.2, 620.0, 0.0),
            Engine::Petrol20 => EffectDelta::new(180.0, 8.1, 580.0, 3000.0),
            Engine::Petrol30 => EffectDelta::new(360.0, 5.1, 520.0, 8500.0),
            Engine::Diesel20 => EffectDelta::new(150.0, 9.5, 750.0, 2200.0),
            Engine::Hybrid => EffectDelta::new(160.0, 8.8, 680.0, 4500.0),
        }
    }

    pub fn model(model: Model) -> EffectDelta {
        match model {
            Model::Civic => EffectDelta::new(0.0, 0.0, 0.0, 28000.0),
            Model::Golf => EffectDelta::new(5.0, -0.2, 50.0, 32000.0),
            Model::Bmw330i => EffectDelta::new(10.0, -0.3, -40.0, 52000.0),
            Model::X3 => EffectDelta::new(15.0, -0.4, -100.0, 58000.0),
            Model::Mustang => EffectDelta::new(50.0, -1.0, -120.0, 65000.0),
        }
    }

    pub fn pack(pack: Pack) -> EffectDelta {
        match pack {
            Pack::Base => EffectDelta::new(0.0, 0.0, 0.0, 0.0),
            Pack::Sport => EffectDelta::new(10.0, -0.3, -20.0, 2500.0),
            Pack::Luxury => EffectDelta::new(0.0, 0.0, -10.0, 4500.0),
            Pack::Amg => EffectDelta::new(30.0, -0.6, -40.0, 6000.0),
        }
    }

    // Drivetrains never change power.
    pub fn drivetrain(drivetrain: Drivetrain) -> EffectDelta {
        match drivetrain {
            Drivetrain::Fwd => EffectDelta::new(0.0, 0.0, 0.0, 0.0),
            Drivetrain::Rwd => EffectDelta::new(0.0, -0.1, -15.0, 1200.0),
            Drivetrain::Awd => EffectDelta::new(0.0, 0.2, -50.0, 2500.0),
        }
    }
}
