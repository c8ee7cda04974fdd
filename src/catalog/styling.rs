//! Preview styling lookup. Consumed only by the presentation layer.

use super::{Color, Drivetrain, Model, Pack};
use crate::state::Assignment;

const DEFAULT_TINT: &str = "#38bdf8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RideSettings {
    pub ride_height: &'static str,
    pub wheel_size: &'static str,
    pub wheel_offset: &'static str,
}

impl Default for RideSettings {
    fn default() -> Self {
        Self {
            ride_height: "0px",
            wheel_size: "52px",
            wheel_offset: "58px",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewStyle {
    pub body_color: &'static str,
    pub accent_color: &'static str,
    pub ride: RideSettings,
}

impl PreviewStyle {
    pub fn for_assignment(assignment: &Assignment) -> Self {
        Self {
            body_color: body_color(assignment.color),
            accent_color: accent_color(assignment),
            ride: ride_settings(assignment),
        }
    }
}

fn body_color(color: Option<Color>) -> &'static str {
    match color {
        Some(Color::White) => "#f5f5f5",
        Some(Color::Black) => "#1a1a1a",
        Some(Color::Silver) => "#c0c0c0",
        Some(Color::Blue) => "#0066cc",
        Some(Color::Red) => "#dc143c",
        Some(Color::Gray) => "#808080",
        None => DEFAULT_TINT,
    }
}

// Pack accents take precedence over model accents.
fn accent_color(assignment: &Assignment) -> &'static str {
    match (assignment.pack, assignment.model) {
        (Some(Pack::Amg), _) => "#ff0000",
        (Some(Pack::Luxury), _) => "#fbbf24",
        (Some(Pack::Sport), _) => "#ef4444",
        (_, Some(Model::Mustang)) => "#ff0000",
        (_, Some(Model::Bmw330i | Model::X3)) => "#0066cc",
        _ => DEFAULT_TINT,
    }
}

fn ride_settings(assignment: &Assignment) -> RideSettings {
    let mut ride = RideSettings::default();

    if assignment.model == Some(Model::Mustang) || assignment.pack == Some(Pack::Sport) {
        ride = RideSettings {
            ride_height: "6px",
            wheel_size: "50px",
            wheel_offset: "56px",
        };
    }
    if assignment.model == Some(Model::X3) || assignment.drivetrain == Some(Drivetrain::Awd) {
        ride = RideSettings {
            ride_height: "-2px",
            wheel_size: "54px",
            wheel_offset: "60px",
        };
    }
    ride
}
