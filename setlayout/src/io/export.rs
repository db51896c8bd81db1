use crate::entities::{PlanInstance, Rule, RuleKind, Set};
use crate::io::ext_repr::{ExtLayoutSolution, ExtPlan, ExtRule, ExtRuleType, ExtScore, ExtSet};
use crate::opt::score::score_breakdown;
use crate::opt::{LayoutStats, ScoreBreakdown};
use crate::util::ScoreWeights;
use itertools::Itertools;
use std::time::Instant;

/// Exports an arrangement of the sets of `instance` out of the library.
/// `stats` is only present if the arrangement was produced by the optimizer.
pub fn export(
    instance: &PlanInstance,
    sets: &[Set],
    weights: &ScoreWeights,
    stats: Option<&LayoutStats>,
    epoch: Instant,
) -> ExtLayoutSolution {
    let breakdown = score_breakdown(sets, &instance.rules, instance.canvas.scale, weights);
    ExtLayoutSolution {
        sets: sets.iter().map(export_set).collect_vec(),
        score: export_score(&breakdown),
        initial_score: stats.map(|s| s.initial_score),
        n_improvements: stats.map_or(0, |s| s.n_improvements),
        run_time_ms: epoch.elapsed().as_millis() as u64,
    }
}

/// Exports a plan in the same format it is imported from, so it can be read back in.
pub fn export_plan(instance: &PlanInstance) -> ExtPlan {
    ExtPlan {
        name: instance.name.clone(),
        canvas: instance.canvas,
        sets: instance.sets.iter().map(export_set).collect_vec(),
        rules: instance.rules.iter().map(export_rule).collect_vec(),
    }
}

pub fn export_set(set: &Set) -> ExtSet {
    let outline = match set.cutouts.is_empty() {
        true => None,
        false => Some(set.outline().points().iter().map(|&p| p.into()).collect_vec()),
    };
    ExtSet {
        id: set.id.clone(),
        x: set.x,
        y: set.y,
        width: set.width,
        height: set.height,
        rotation: set.rotation.into(),
        cutouts: set.cutouts.clone(),
        on_plan: set.on_plan,
        locked: set.locked,
        category: set.category,
        outline,
    }
}

pub fn export_rule(rule: &Rule) -> ExtRule {
    let (rule_type, distance) = match rule.kind {
        RuleKind::Near { distance } => (ExtRuleType::Near, Some(distance)),
        RuleKind::Connect => (ExtRuleType::Connect, None),
        RuleKind::Separate { distance } => (ExtRuleType::Separate, Some(distance)),
        RuleKind::Fixed => (ExtRuleType::Fixed, None),
    };
    ExtRule {
        id: rule.id.clone(),
        rule_type,
        set_a: rule.set_a.clone(),
        set_b: rule.set_b.clone(),
        distance,
    }
}

pub fn export_score(breakdown: &ScoreBreakdown) -> ExtScore {
    ExtScore {
        total: breakdown.total(),
        overlap: breakdown.overlap,
        near: breakdown.near,
        separate: breakdown.separate,
        connect: breakdown.connect,
    }
}
