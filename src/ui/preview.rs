use crate::catalog::{short_model_name, PreviewStyle, Value, Variable};
use crate::state::Assignment;

const SEPARATOR: &str = " • ";

/// Variables listed on the badge, in this order
const BADGE_VARIABLES: [Variable; 5] = [
    Variable::Model,
    Variable::Engine,
    Variable::Transmission,
    Variable::Drivetrain,
    Variable::Pack,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub style: PreviewStyle,
    pub badge: String,
    pub details: String,
}

impl Preview {
    pub fn for_assignment(assignment: &Assignment) -> Self {
        Self {
            style: PreviewStyle::for_assignment(assignment),
            badge: badge(assignment),
            details: details(assignment),
        }
    }
}

fn badge(assignment: &Assignment) -> String {
    let parts: Vec<_> = BADGE_VARIABLES
        .into_iter()
        .filter_map(|v| assignment.get(v))
        .map(|value| value.label())
        .collect();

    if parts.is_empty() {
        "Select some options".to_string()
    } else {
        parts.join(SEPARATOR)
    }
}

fn details(assignment: &Assignment) -> String {
    let mut parts = Vec::new();
    if let Some(model) = assignment.model {
        parts.push(short_model_name(model).to_string());
    }
    if let Some(color) = assignment.color {
        parts.push(format!("Color {}", Value::Color(color).label()));
    }
    if let Some(interior) = assignment.interior {
        parts.push(format!("Interior {}", Value::Interior(interior).label()));
    }
    if let Some(pack) = assignment.pack {
        parts.push(format!("Pack {}", Value::Pack(pack).label()));
    }

    if parts.is_empty() {
        "The preview adapts to your choices (color, model, engine, pack).".to_string()
    } else {
        parts.join(SEPARATOR)
    }
}
