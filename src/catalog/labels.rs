//! Human-readable labels for catalog values.

use super::{Color, Drivetrain, Engine, Interior, Model, Pack, Transmission, Value};

pub fn label_for(value: Value) -> &'static str {
    match value {
        Value::Model(model) => match model {
            Model::Civic => "Honda Civic",
            Model::Golf => "Volkswagen Golf",
            Model::Bmw330i => "BMW 330i",
            Model::X3 => "BMW X3",
            Model::Mustang => "Ford Mustang",
        },
        Value::Engine(engine) => match engine {
            Engine::Petrol15 => "Petrol 1.5L (130 hp)",
            Engine::Petrol20 => "Petrol 2.0L (180 hp)",
            Engine::Petrol30 => "Petrol 3.0L (360 hp)",
            Engine::Diesel20 => "Diesel 2.0L (150 hp)",
            Engine::Hybrid => "Hybrid 2.0L",
        },
        Value::Transmission(transmission) => match transmission {
            Transmission::Manual => "6-speed manual",
            Transmission::Automatic => "8-speed automatic",
        },
        Value::Drivetrain(drivetrain) => match drivetrain {
            Drivetrain::Fwd => "Front-wheel drive (FWD)",
            Drivetrain::Rwd => "Rear-wheel drive (RWD)",
            Drivetrain::Awd => "All-wheel drive (AWD)",
        },
        Value::Color(color) => match color {
            Color::White => "Pure white",
            Color::Black => "Deep black",
            Color::Silver => "Metallic silver",
            Color::Blue => "Electric blue",
            Color::Red => "Bright red",
            Color::Gray => "Titanium gray",
        },
        Value::Interior(interior) => match interior {
            Interior::Cloth => "Cloth interior",
            Interior::Leather => "Standard leather",
            Interior::PremiumLeather => "Premium Nappa leather",
        },
        Value::Pack(pack) => match pack {
            Pack::Base => "Base pack",
            Pack::Sport => "Sport pack",
            Pack::Luxury => "Luxury pack",
            Pack::Amg => "AMG Performance pack",
        },
    }
}

/// Short model name used in the preview details line
pub fn short_model_name(model: Model) -> &'static str {
    match model {
        Model::Civic => "Civic",
        Model::Golf => "Golf",
        Model::Bmw330i => "330i",
        Model::X3 => "X3",
        Model::Mustang => "Mustang",
    }
}
