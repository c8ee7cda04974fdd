//! Catalog Module
//!
//! Static reference data for the configurator: the seven variables, the closed
//! set of values each one accepts, display labels, effect deltas, presets and
//! preview styling.

pub mod effects;
pub mod labels;
pub mod presets;
pub mod styling;

pub use effects::{DefaultPolicy, EffectDelta, EffectTable};
pub use labels::{label_for, short_model_name};
pub use presets::{Preset, PRESETS};
pub use styling::{PreviewStyle, RideSettings};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;

/// Declares a closed option enum whose serde form is the solver's wire token.
macro_rules! option_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $token:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in catalog order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn token(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }

            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($token => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}

option_enum!(
    /// Car model
    Model {
        Civic => "civic",
        Golf => "golf",
        Bmw330i => "330i",
        X3 => "x3",
        Mustang => "mustang",
    }
);

option_enum!(
    Engine {
        Petrol15 => "petrol_1_5",
        Petrol20 => "petrol_2_0",
        Petrol30 => "petrol_3_0",
        Diesel20 => "diesel_2_0",
        Hybrid => "hybrid",
    }
);

option_enum!(
    Transmission {
        Manual => "manual",
        Automatic => "automatic",
    }
);

option_enum!(
    Drivetrain {
        Fwd => "fwd",
        Rwd => "rwd",
        Awd => "awd",
    }
);

option_enum!(
    /// Body color
    Color {
        White => "white",
        Black => "black",
        Silver => "silver",
        Blue => "blue",
        Red => "red",
        Gray => "gray",
    }
);

option_enum!(
    Interior {
        Cloth => "cloth",
        Leather => "leather",
        PremiumLeather => "premium_leather",
    }
);

option_enum!(
    /// Options pack
    Pack {
        Base => "base",
        Sport => "sport",
        Luxury => "luxury",
        Amg => "amg",
    }
);

/// One configurable product dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    Model,
    Engine,
    Transmission,
    Drivetrain,
    Color,
    Interior,
    Pack,
}

impl Variable {
    /// Fixed display and report order
    pub const ALL: [Variable; 7] = [
        Variable::Model,
        Variable::Engine,
        Variable::Transmission,
        Variable::Drivetrain,
        Variable::Color,
        Variable::Interior,
        Variable::Pack,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Variable::Model => "model",
            Variable::Engine => "engine",
            Variable::Transmission => "transmission",
            Variable::Drivetrain => "drivetrain",
            Variable::Color => "color",
            Variable::Interior => "interior",
            Variable::Pack => "pack",
        }
    }

    pub fn parse(name: &str) -> Result<Self, CatalogError> {
        Variable::ALL
            .into_iter()
            .find(|v| v.as_str() == name)
            .ok_or_else(|| CatalogError::UnknownVariable(name.to_string()))
    }

    /// Every value this variable accepts, in catalog order
    pub fn values(self) -> Vec<Value> {
        match self {
            Variable::Model => Model::ALL.iter().copied().map(Value::Model).collect(),
            Variable::Engine => Engine::ALL.iter().copied().map(Value::Engine).collect(),
            Variable::Transmission => Transmission::ALL.iter().copied().map(Value::Transmission).collect(),
            Variable::Drivetrain => Drivetrain::ALL.iter().copied().map(Value::Drivetrain).collect(),
            Variable::Color => Color::ALL.iter().copied().map(Value::Color).collect(),
            Variable::Interior => Interior::ALL.iter().copied().map(Value::Interior).collect(),
            Variable::Pack => Pack::ALL.iter().copied().map(Value::Pack).collect(),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value scoped to exactly one variable.
///
/// Values of different variables never compare equal, and the variable a value
/// belongs to is always recoverable through [`Value::variable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    Model(Model),
    Engine(Engine),
    Transmission(Transmission),
    Drivetrain(Drivetrain),
    Color(Color),
    Interior(Interior),
    Pack(Pack),
}

impl Value {
    pub fn variable(&self) -> Variable {
        match self {
            Value::Model(_) => Variable::Model,
            Value::Engine(_) => Variable::Engine,
            Value::Transmission(_) => Variable::Transmission,
            Value::Drivetrain(_) => Variable::Drivetrain,
            Value::Color(_) => Variable::Color,
            Value::Interior(_) => Variable::Interior,
            Value::Pack(_) => Variable::Pack,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Value::Model(v) => v.token(),
            Value::Engine(v) => v.token(),
            Value::Transmission(v) => v.token(),
            Value::Drivetrain(v) => v.token(),
            Value::Color(v) => v.token(),
            Value::Interior(v) => v.token(),
            Value::Pack(v) => v.token(),
        }
    }

    /// Parse a wire token for the given variable, rejecting anything outside
    /// the catalog.
    pub fn parse(variable: Variable, token: &str) -> Result<Self, CatalogError> {
        let value = match variable {
            Variable::Model => Model::from_token(token).map(Value::Model),
            Variable::Engine => Engine::from_token(token).map(Value::Engine),
            Variable::Transmission => Transmission::from_token(token).map(Value::Transmission),
            Variable::Drivetrain => Drivetrain::from_token(token).map(Value::Drivetrain),
            Variable::Color => Color::from_token(token).map(Value::Color),
            Variable::Interior => Interior::from_token(token).map(Value::Interior),
            Variable::Pack => Pack::from_token(token).map(Value::Pack),
        };

        value.ok_or_else(|| CatalogError::UnknownValue {
            variable,
            token: token.to_string(),
        })
    }

    pub fn label(&self) -> &'static str {
        label_for(*self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
