use crate::entities::{PlanInstance, Rule, RuleKind, Set};
use crate::geometry::Rotation;
use crate::io::ext_repr::{ExtPlan, ExtRule, ExtRuleType, ExtSet};
use anyhow::{Context, Result, bail, ensure};
use itertools::Itertools;
use log::warn;

/// Imports a plan into the library.
///
/// Rules referencing sets which are not part of the plan are kept (they are skipped while scoring),
/// but structurally invalid sets and rules are rejected.
pub fn import(ext_plan: &ExtPlan) -> Result<PlanInstance> {
    let canvas = ext_plan.canvas;
    ensure!(
        canvas.scale.is_finite() && canvas.scale > 0.0,
        "canvas scale must be positive, got {}",
        canvas.scale
    );
    ensure!(
        canvas.width > 0.0 && canvas.height > 0.0,
        "canvas must have positive dimensions, got {}x{}",
        canvas.width,
        canvas.height
    );

    let sets = ext_plan
        .sets
        .iter()
        .map(import_set)
        .collect::<Result<Vec<Set>>>()?;

    let duplicates = sets.iter().map(|s| &s.id).duplicates().collect_vec();
    ensure!(duplicates.is_empty(), "duplicate set ids: {duplicates:?}");

    let rules = ext_plan
        .rules
        .iter()
        .map(import_rule)
        .collect::<Result<Vec<Rule>>>()?;

    let instance = PlanInstance {
        name: ext_plan.name.clone(),
        canvas,
        sets,
        rules,
    };

    for rule in instance.dangling_rules() {
        warn!("[IMPORT] rule {} references a set which is not on the plan, it will be ignored", rule.id);
    }

    Ok(instance)
}

pub fn import_set(ext_set: &ExtSet) -> Result<Set> {
    let ExtSet {
        id,
        x,
        y,
        width,
        height,
        rotation,
        cutouts,
        on_plan,
        locked,
        category,
        outline: _,
    } = ext_set;

    ensure!(
        width.is_finite() && height.is_finite() && *width > 0.0 && *height > 0.0,
        "set {id} has invalid dimensions: {width}x{height}"
    );
    ensure!(
        x.is_finite() && y.is_finite(),
        "set {id} has an invalid position: ({x}, {y})"
    );
    let rotation = Rotation::try_from(*rotation).with_context(|| format!("set {id}"))?;

    Ok(Set {
        id: id.clone(),
        x: *x,
        y: *y,
        width: *width,
        height: *height,
        rotation,
        cutouts: cutouts.clone(),
        on_plan: *on_plan,
        locked: *locked,
        category: *category,
    })
}

pub fn import_rule(ext_rule: &ExtRule) -> Result<Rule> {
    let ExtRule {
        id,
        rule_type,
        set_a,
        set_b,
        distance,
    } = ext_rule;

    let checked_distance = || -> Result<f64> {
        match distance {
            Some(d) if d.is_finite() && *d >= 0.0 => Ok(*d),
            Some(d) => bail!("rule {id} has an invalid distance: {d}"),
            None => bail!("rule {id} ({rule_type:?}) requires a distance"),
        }
    };

    let kind = match rule_type {
        ExtRuleType::Near => RuleKind::Near {
            distance: checked_distance()?,
        },
        ExtRuleType::Separate => RuleKind::Separate {
            distance: checked_distance()?,
        },
        ExtRuleType::Connect => RuleKind::Connect,
        ExtRuleType::Fixed => RuleKind::Fixed,
    };

    match (kind, set_b) {
        (RuleKind::Fixed, Some(b)) => bail!("fixed rule {id} can only reference a single set, got {b}"),
        (RuleKind::Fixed, None) => {}
        (_, None) => bail!("rule {id} ({rule_type:?}) requires a second set"),
        (_, Some(_)) => {}
    }

    Ok(Rule {
        id: id.clone(),
        kind,
        set_a: set_a.clone(),
        set_b: set_b.clone(),
    })
}
