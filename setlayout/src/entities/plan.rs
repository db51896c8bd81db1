use crate::entities::{Rule, RuleKind, Set};
use crate::geometry::cutout::{Cutout, map_overlap_to_local_cutout};
use crate::geometry::primitives::{Rect, RectilinearPolygon};
use anyhow::{Context, Result, bail, ensure};
use itertools::Itertools;
use log::{debug, info};

/// All sets on a floor plan together with the rules between them.
/// Keeps rules consistent with the sets they reference.
#[derive(Clone, Debug, Default)]
pub struct Plan {
    sets: Vec<Set>,
    rules: Vec<Rule>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a plan, validating every set and rule as if they were added one by one.
    pub fn from_parts(sets: Vec<Set>, rules: Vec<Rule>) -> Result<Self> {
        let mut plan = Plan::new();
        for set in sets {
            plan.add_set(set)?;
        }
        for rule in rules {
            plan.add_rule(rule)?;
        }
        Ok(plan)
    }

    pub fn sets(&self) -> &[Set] {
        &self.sets
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn set(&self, id: &str) -> Option<&Set> {
        self.sets.iter().find(|s| s.id == id)
    }

    fn set_mut(&mut self, id: &str) -> Result<&mut Set> {
        self.sets
            .iter_mut()
            .find(|s| s.id == id)
            .with_context(|| format!("no set with id {id}"))
    }

    pub fn add_set(&mut self, set: Set) -> Result<()> {
        ensure!(
            set.width > 0.0 && set.height > 0.0,
            "set {} has invalid dimensions: {}x{}",
            set.id,
            set.width,
            set.height
        );
        ensure!(self.set(&set.id).is_none(), "duplicate set id: {}", set.id);
        self.sets.push(set);
        Ok(())
    }

    /// Removes a set together with every rule referencing it.
    /// Returns the removed set and rules.
    pub fn remove_set(&mut self, id: &str) -> Result<(Set, Vec<Rule>)> {
        let idx = self
            .sets
            .iter()
            .position(|s| s.id == id)
            .with_context(|| format!("no set with id {id}"))?;
        let set = self.sets.remove(idx);
        let (removed, kept): (Vec<Rule>, Vec<Rule>) =
            self.rules.drain(..).partition(|r| r.references(id));
        self.rules = kept;
        if !removed.is_empty() {
            debug!(
                "[PLAN] removing set {id} cascaded to rules [{}]",
                removed.iter().map(|r| &r.id).join(", ")
            );
        }
        Ok((set, removed))
    }

    pub fn add_rule(&mut self, rule: Rule) -> Result<()> {
        ensure!(
            self.rules.iter().all(|r| r.id != rule.id),
            "duplicate rule id: {}",
            rule.id
        );
        ensure!(
            self.set(&rule.set_a).is_some(),
            "rule {} references unknown set {}",
            rule.id,
            rule.set_a
        );
        match (&rule.kind, &rule.set_b) {
            (RuleKind::Fixed, None) => {}
            (RuleKind::Fixed, Some(_)) => bail!("fixed rule {} can only reference a single set", rule.id),
            (_, None) => bail!("rule {} ({}) requires two sets", rule.id, rule.kind),
            (kind, Some(set_b)) => {
                ensure!(
                    self.set(set_b).is_some(),
                    "rule {} references unknown set {set_b}",
                    rule.id
                );
                ensure!(
                    *set_b != rule.set_a,
                    "rule {} relates set {} to itself",
                    rule.id,
                    rule.set_a
                );
                if let RuleKind::Near { distance } | RuleKind::Separate { distance } = kind {
                    ensure!(
                        distance.is_finite() && *distance >= 0.0,
                        "rule {} has invalid distance: {distance}",
                        rule.id
                    );
                }
            }
        }
        self.rules.push(rule);
        Ok(())
    }

    pub fn remove_rule(&mut self, id: &str) -> Result<Rule> {
        let idx = self
            .rules
            .iter()
            .position(|r| r.id == id)
            .with_context(|| format!("no rule with id {id}"))?;
        Ok(self.rules.remove(idx))
    }

    pub fn move_set(&mut self, id: &str, x: f64, y: f64) -> Result<()> {
        let set = self.set_mut(id)?;
        set.x = x;
        set.y = y;
        Ok(())
    }

    /// Rotates the set clockwise to the next right angle, keeping its top-left corner in place.
    pub fn rotate_set(&mut self, id: &str) -> Result<()> {
        let set = self.set_mut(id)?;
        set.rotation = set.rotation.next();
        Ok(())
    }

    /// Cuts the footprint of `cutter_id` out of `target_id`.
    /// Only the target is modified. Returns the appended cutout, or `None` if both sets do not overlap.
    pub fn cut(&mut self, cutter_id: &str, target_id: &str, scale: f64) -> Result<Option<Cutout>> {
        ensure!(cutter_id != target_id, "a set cannot be cut by itself: {cutter_id}");
        let cutter_aabb = self
            .set(cutter_id)
            .with_context(|| format!("no set with id {cutter_id}"))?
            .aabb(scale);
        let target = self.set_mut(target_id)?;

        match Rect::intersection(cutter_aabb, target.aabb(scale)) {
            None => {
                info!("[PLAN] {cutter_id} does not overlap {target_id}, nothing to cut");
                Ok(None)
            }
            Some(overlap) => {
                let cutout = map_overlap_to_local_cutout(overlap, target, scale);
                target.cutouts.push(cutout);
                info!(
                    "[PLAN] cut {cutter_id} out of {target_id} ({} cutouts)",
                    target.cutouts.len()
                );
                Ok(Some(cutout))
            }
        }
    }

    /// Removes all cutouts of a set, restoring its original rectangle.
    pub fn restore(&mut self, target_id: &str) -> Result<Vec<Cutout>> {
        let target = self.set_mut(target_id)?;
        Ok(std::mem::take(&mut target.cutouts))
    }

    /// Copies the positions of an optimized arrangement back into the plan.
    pub fn apply_layout(&mut self, layout: &[Set]) -> Result<()> {
        for placed in layout {
            let set = self.set_mut(&placed.id)?;
            set.x = placed.x;
            set.y = placed.y;
        }
        Ok(())
    }

    pub fn outline(&self, id: &str) -> Result<RectilinearPolygon> {
        self.set(id)
            .map(Set::outline)
            .with_context(|| format!("no set with id {id}"))
    }
}
