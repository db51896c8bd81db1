use crate::entities::{Rule, Set};
use crate::opt::Canvas;

/// Immutable snapshot of a floor plan as handed to the optimizer.
/// Unlike [`Plan`](crate::entities::Plan), rules may reference sets which are not part of the snapshot.
#[derive(Clone, Debug)]
pub struct PlanInstance {
    pub name: String,
    pub canvas: Canvas,
    pub sets: Vec<Set>,
    pub rules: Vec<Rule>,
}

impl PlanInstance {
    pub fn set(&self, id: &str) -> Option<&Set> {
        self.sets.iter().find(|s| s.id == id)
    }

    /// Rules referencing at least one set which is not part of the snapshot
    pub fn dangling_rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(|r| {
            self.set(&r.set_a).is_none()
                || r.set_b.as_deref().is_some_and(|b| self.set(b).is_none())
        })
    }
}
