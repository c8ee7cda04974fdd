use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::{Value, Variable};

/// Values still reachable for one variable
pub type Domain = BTreeSet<Value>;

static EMPTY_DOMAIN: Domain = BTreeSet::new();

/// Per-variable domains as last reported by the solver.
///
/// Never computed locally: a `Domains` is only ever built from a solver
/// response and replaced wholesale on the next one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Domains {
    sets: BTreeMap<Variable, Domain>,
}

impl Domains {
    /// Domain of `variable`; a variable the solver did not mention is empty
    pub fn get(&self, variable: Variable) -> &Domain {
        self.sets.get(&variable).unwrap_or(&EMPTY_DOMAIN)
    }

    pub fn contains(&self, value: Value) -> bool {
        self.get(value.variable()).contains(&value)
    }

    pub fn insert(&mut self, value: Value) {
        self.sets.entry(value.variable()).or_default().insert(value);
    }

    /// True when no variable has any reachable value
    pub fn is_exhausted(&self) -> bool {
        self.sets.values().all(|d| d.is_empty())
    }
}

impl FromIterator<Value> for Domains {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut domains = Domains::default();
        for value in iter {
            domains.insert(value);
        }
        domains
    }
}
