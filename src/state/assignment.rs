use serde::{Deserialize, Serialize};

use crate::catalog::{Color, Drivetrain, Engine, Interior, Model, Pack, Transmission, Value, Variable};

/// The user's current choice per variable, possibly partial.
///
/// Serializes with every variable present; unspecified variables are written
/// as explicit `null`, which is what the solver service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Assignment {
    pub model: Option<Model>,
    pub engine: Option<Engine>,
    pub transmission: Option<Transmission>,
    pub drivetrain: Option<Drivetrain>,
    pub color: Option<Color>,
    pub interior: Option<Interior>,
    pub pack: Option<Pack>,
}

impl Assignment {
    pub fn get(&self, variable: Variable) -> Option<Value> {
        match variable {
            Variable::Model => self.model.map(Value::Model),
            Variable::Engine => self.engine.map(Value::Engine),
            Variable::Transmission => self.transmission.map(Value::Transmission),
            Variable::Drivetrain => self.drivetrain.map(Value::Drivetrain),
            Variable::Color => self.color.map(Value::Color),
            Variable::Interior => self.interior.map(Value::Interior),
            Variable::Pack => self.pack.map(Value::Pack),
        }
    }

    /// Assign a value to the variable it belongs to
    pub fn set(&mut self, value: Value) {
        match value {
            Value::Model(v) => self.model = Some(v),
            Value::Engine(v) => self.engine = Some(v),
            Value::Transmission(v) => self.transmission = Some(v),
            Value::Drivetrain(v) => self.drivetrain = Some(v),
            Value::Color(v) => self.color = Some(v),
            Value::Interior(v) => self.interior = Some(v),
            Value::Pack(v) => self.pack = Some(v),
        }
    }

    pub fn clear(&mut self, variable: Variable) {
        match variable {
            Variable::Model => self.model = None,
            Variable::Engine => self.engine = None,
            Variable::Transmission => self.transmission = None,
            Variable::Drivetrain => self.drivetrain = None,
            Variable::Color => self.color = None,
            Variable::Interior => self.interior = None,
            Variable::Pack => self.pack = None,
        }
    }

    /// Set or clear `variable`. A value belonging to another variable is ignored.
    pub fn put(&mut self, variable: Variable, value: Option<Value>) {
        match value {
            Some(value) if value.variable() == variable => self.set(value),
            Some(value) => {
                tracing::warn!("Ignoring {} value '{}' written to {}", value.variable(), value, variable);
            }
            None => self.clear(variable),
        }
    }

    /// Values currently chosen, in variable order
    pub fn specified(&self) -> impl Iterator<Item = Value> + '_ {
        Variable::ALL.into_iter().filter_map(move |v| self.get(v))
    }

    pub fn is_empty(&self) -> bool {
        self.specified().next().is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.to_configuration().is_some()
    }

    pub fn to_configuration(&self) -> Option<Configuration> {
        Some(Configuration {
            model: self.model?,
            engine: self.engine?,
            transmission: self.transmission?,
            drivetrain: self.drivetrain?,
            color: self.color?,
            interior: self.interior?,
            pack: self.pack?,
        })
    }
}

/// A fully-specified assignment: every variable carries a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub model: Model,
    pub engine: Engine,
    pub transmission: Transmission,
    pub drivetrain: Drivetrain,
    pub color: Color,
    pub interior: Interior,
    pub pack: Pack,
}

impl Configuration {
    pub fn get(&self, variable: Variable) -> Value {
        match variable {
            Variable::Model => Value::Model(self.model),
            Variable::Engine => Value::Engine(self.engine),
            Variable::Transmission => Value::Transmission(self.transmission),
            Variable::Drivetrain => Value::Drivetrain(self.drivetrain),
            Variable::Color => Value::Color(self.color),
            Variable::Interior => Value::Interior(self.interior),
            Variable::Pack => Value::Pack(self.pack),
        }
    }

    /// True when every value fixed in `assignment` is kept here
    pub fn honours(&self, assignment: &Assignment) -> bool {
        assignment.specified().all(|value| self.get(value.variable()) == value)
    }
}

impl From<Configuration> for Assignment {
    fn from(c: Configuration) -> Self {
        Self {
            model: Some(c.model),
            engine: Some(c.engine),
            transmission: Some(c.transmission),
            drivetrain: Some(c.drivetrain),
            color: Some(c.color),
            interior: Some(c.interior),
            pack: Some(c.pack),
        }
    }
}
