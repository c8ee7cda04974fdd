//! UI Module
//!
//! Turns a session into text for the terminal front-end.

pub mod format;
pub mod preview;
pub mod report;

pub use format::ProfileView;
pub use preview::Preview;
pub use report::{configuration_report, option_list, solution_report, OptionEntry};

use std::fmt::Write;

use crate::catalog::Variable;
use crate::state::Session;

/// Full text rendering of the session
pub fn render(session: &Session) -> String {
    let mut out = String::new();
    let banner = session.banner();
    let marker = if banner.is_alert() { "!!" } else { "--" };
    let _ = writeln!(out, "{} {}", marker, banner);
    if session.is_waiting() {
        let _ = writeln!(out, "   (waiting for the solver...)");
    }
    out.push('\n');

    for variable in Variable::ALL {
        let entries = option_list(variable, session.domains(), session.assignment());
        let current = entries
            .iter()
            .find(|e| e.selected)
            .map_or(report::UNSPECIFIED_LABEL, |e| e.label);
        let choices: Vec<String> = entries
            .iter()
            .filter_map(|e| e.value.map(|v| (v, e.enabled)))
            .map(|(v, enabled)| if enabled { v.token().to_string() } else { format!("({})", v.token()) })
            .collect();
        let _ = writeln!(out, "{:<13} {:<28} {}", variable.as_str(), current, choices.join(" "));
    }

    let preview = Preview::for_assignment(session.assignment());
    let _ = writeln!(out, "\n{}", preview.badge);
    let _ = writeln!(out, "{}", preview.details);
    let _ = writeln!(
        out,
        "body {} | accent {} | ride {}",
        preview.style.body_color, preview.style.accent_color, preview.style.ride.ride_height
    );

    let profile = ProfileView::from(&session.profile());
    let _ = writeln!(
        out,
        "\nPower {} | 0-100 {} | Range {} | Price {}",
        profile.power, profile.acceleration, profile.range, profile.price
    );

    if let Some(solution) = solution_report(session.solution()) {
        let _ = writeln!(out, "\n{}", solution);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_session() {
        let text = render(&Session::new());
        assert!(text.starts_with("-- Select options to get started."));
        assert!(text.contains("model"));
        assert!(text.contains("(civic)"));
        assert!(text.contains("Power — | 0-100 — | Range — | Price —"));
    }
}
