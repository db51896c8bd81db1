use crate::entities::{Rule, RuleKind, Set};
use std::collections::HashSet;

/// Ids of the sets which may not be moved during a single optimization run.
///
/// Derived once per run from the FIXED rules and the sets locked to the background,
/// and carried alongside the arrangements instead of being stored on the sets themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedIds(HashSet<String>);

impl FixedIds {
    pub fn derive(sets: &[Set], rules: &[Rule]) -> Self {
        let by_rule = rules
            .iter()
            .filter(|r| r.kind == RuleKind::Fixed)
            .map(|r| r.set_a.clone());
        let locked = sets.iter().filter(|s| s.locked).map(|s| s.id.clone());
        FixedIds(by_rule.chain(locked).collect())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for FixedIds {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        FixedIds(iter.into_iter().collect())
    }
}
