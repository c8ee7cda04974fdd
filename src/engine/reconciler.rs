//! Domain Reconciler
//!
//! Decides which value each variable shows after a propagation response, given
//! the value the user just submitted, the value displayed when the response
//! arrived, and the domain the solver now reports.

use crate::catalog::{Value, Variable};
use crate::state::{Assignment, Domain, Domains};

/// Resolve the displayed value for one variable.
///
/// The freshly submitted value wins when it is still legal, then the value
/// that was displayed, otherwise the variable reverts to unspecified. Reverting
/// is a silent narrowing, not an error.
pub fn resolve(
    variable: Variable,
    domain: &Domain,
    prior_displayed: Option<Value>,
    fresh_assignment: Option<Value>,
) -> Option<Value> {
    let legal = |value: &Value| value.variable() == variable && domain.contains(value);

    fresh_assignment
        .filter(legal)
        .or_else(|| prior_displayed.filter(legal))
}

/// Result of reconciling a whole response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The value each variable now shows
    pub selection: Assignment,
    /// Variables that held a value on either side and now show none
    pub narrowed: Vec<Variable>,
}

/// Apply [`resolve`] to every variable independently, in variable order.
pub fn resolve_all(domains: &Domains, prior_displayed: &Assignment, fresh: &Assignment) -> Resolution {
    let mut selection = Assignment::default();
    let mut narrowed = Vec::new();

    for variable in Variable::ALL {
        let prior = prior_displayed.get(variable);
        let submitted = fresh.get(variable);
        let resolved = resolve(variable, domains.get(variable), prior, submitted);

        if resolved.is_none() && (prior.is_some() || submitted.is_some()) {
            narrowed.push(variable);
        }
        selection.put(variable, resolved);
    }

    Resolution { selection, narrowed }
}
