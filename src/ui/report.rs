//! Option lists and the solution report.

use crate::catalog::{Value, Variable};
use crate::state::{Assignment, Configuration, Domains, SolutionView};

pub const UNSPECIFIED_LABEL: &str = "-- (unspecified) --";

/// One selectable entry of a variable's control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    /// `None` is the "unspecified" entry
    pub value: Option<Value>,
    pub label: &'static str,
    pub enabled: bool,
    pub selected: bool,
}

/// Entries for `variable`: the unspecified entry first, then every catalog
/// value, enabled only when the current domain contains it.
pub fn option_list(variable: Variable, domains: Option<&Domains>, assignment: &Assignment) -> Vec<OptionEntry> {
    let selected = assignment.get(variable);

    let mut entries = vec![OptionEntry {
        value: None,
        label: UNSPECIFIED_LABEL,
        enabled: true,
        selected: selected.is_none(),
    }];

    entries.extend(variable.values().into_iter().map(|value| OptionEntry {
        value: Some(value),
        label: value.label(),
        enabled: domains.is_some_and(|d| d.contains(value)),
        selected: selected == Some(value),
    }));

    entries
}

pub fn configuration_report(configuration: &Configuration) -> String {
    let mut lines = vec!["Configuration found:".to_string()];
    for variable in Variable::ALL {
        let value = configuration.get(variable);
        lines.push(format!("- {} : {} ({})", variable, value.label(), value));
    }
    lines.join("\n")
}

/// Text for the solution panel; `None` when there is nothing to show
pub fn solution_report(solution: &SolutionView) -> Option<String> {
    match solution {
        SolutionView::Empty => None,
        SolutionView::Found(configuration) => Some(configuration_report(configuration)),
        SolutionView::Unavailable => {
            Some("No complete configuration is possible with these choices.".to_string())
        }
        SolutionView::Failed(e) if e.is_transport() => Some(
            "Could not communicate with the solver service (check that the backend is running).".to_string(),
        ),
        SolutionView::Failed(_) => Some("Solving failed.".to_string()),
    }
}
