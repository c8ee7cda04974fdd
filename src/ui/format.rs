//! Presentation of the derived profile. Rounding happens here and only here.

use crate::engine::DerivedProfile;

pub const UNKNOWN: &str = "—";

pub fn power(value: Option<f64>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |p| format!("{} hp", p.round() as i64))
}

pub fn acceleration(value: Option<f64>) -> String {
    match value {
        Some(secs) if secs != 0.0 => format!("{:.1} s", secs),
        _ => UNKNOWN.to_string(),
    }
}

pub fn range(value: Option<f64>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |r| format!("{} km", r.round() as i64))
}

/// Thousands of euros with one decimal; a zero price reads as unknown
pub fn price(value: Option<f64>) -> String {
    match value {
        Some(euros) if euros != 0.0 => format!("€{:.1}k", euros / 1000.0),
        _ => UNKNOWN.to_string(),
    }
}

/// The four profile fields, ready to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub power: String,
    pub acceleration: String,
    pub range: String,
    pub price: String,
}

impl From<&DerivedProfile> for ProfileView {
    fn from(profile: &DerivedProfile) -> Self {
        Self {
            power: power(profile.power),
            acceleration: acceleration(profile.acceleration),
            range: range(profile.range),
            price: price(profile.price),
        }
    }
}
