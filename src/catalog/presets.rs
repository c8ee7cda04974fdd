//! Named, fully-specified configurations used as bulk-write sources.

use super::{Color, Drivetrain, Engine, Interior, Model, Pack, Transmission};
use crate::error::CatalogError;
use crate::state::Configuration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub configuration: Configuration,
}

pub const PRESETS: [Preset; 5] = [
    Preset {
        name: "urban",
        configuration: Configuration {
            model: Model::Civic,
            engine: Engine::Petrol15,
            transmission: Transmission::Manual,
            drivetrain: Drivetrain::Fwd,
            color: Color::Silver,
            interior: Interior::Cloth,
            pack: Pack::Base,
        },
    },
    Preset {
        name: "family",
        configuration: Configuration {
            model: Model::Golf,
            engine: Engine::Petrol20,
            transmission: Transmission::Automatic,
            drivetrain: Drivetrain::Fwd,
            color: Color::Gray,
            interior: Interior::Leather,
            pack: Pack::Sport,
        },
    },
    Preset {
        name: "executive",
        configuration: Configuration {
            model: Model::Bmw330i,
            engine: Engine::Petrol20,
            transmission: Transmission::Automatic,
            drivetrain: Drivetrain::Rwd,
            color: Color::Black,
            interior: Interior::PremiumLeather,
            pack: Pack::Luxury,
        },
    },
    Preset {
        name: "offroad",
        configuration: Configuration {
            model: Model::X3,
            engine: Engine::Petrol20,
            transmission: Transmission::Automatic,
            drivetrain: Drivetrain::Awd,
            color: Color::Blue,
            interior: Interior::Leather,
            pack: Pack::Sport,
        },
    },
    Preset {
        name: "performance",
        configuration: Configuration {
            model: Model::Mustang,
            engine: Engine::Petrol30,
            transmission: Transmission::Automatic,
            drivetrain: Drivetrain::Rwd,
            color: Color::Red,
            interior: Interior::PremiumLeather,
            pack: Pack::Amg,
        },
    },
];

impl Preset {
    pub fn find(name: &str) -> Result<&'static Preset, CatalogError> {
        PRESETS
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| CatalogError::UnknownPreset(name.to_string()))
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|p| p.name)
    }
}
