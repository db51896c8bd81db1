use crate::entities::{Rule, RuleKind, Set};
use crate::geometry::geo_traits::{DistanceTo, Shape};
use crate::geometry::primitives::Rect;
use crate::util::ScoreWeights;
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Penalty score of an arrangement split up per term. Lower is better, 0 is perfect.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub overlap: f64,
    pub near: f64,
    pub separate: f64,
    pub connect: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.overlap + self.near + self.separate + self.connect
    }
}

impl Display for ScoreBreakdown {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.3} (overlap: {:.3}, near: {:.3}, separate: {:.3}, connect: {:.3})",
            self.total(),
            self.overlap,
            self.near,
            self.separate,
            self.connect
        )
    }
}

/// Scores an arrangement with the default [`ScoreWeights`].
pub fn score_arrangement(sets: &[Set], rules: &[Rule], scale: f64) -> f64 {
    score_arrangement_with(sets, rules, scale, &ScoreWeights::default())
}

pub fn score_arrangement_with(sets: &[Set], rules: &[Rule], scale: f64, weights: &ScoreWeights) -> f64 {
    score_breakdown(sets, rules, scale, weights).total()
}

/// Computes every term of the score of an arrangement.
///
/// * overlap: total pairwise overlap area of the bounding boxes
/// * NEAR: excess distance between the centers beyond `distance * scale`
/// * SEPARATE: shortfall of distance between the centers below `distance * scale`
/// * CONNECT: gap between the bounding boxes, once it exceeds the tolerance
///
/// FIXED rules never contribute. Rules referencing a set absent from `sets` are skipped.
pub fn score_breakdown(sets: &[Set], rules: &[Rule], scale: f64, weights: &ScoreWeights) -> ScoreBreakdown {
    let aabbs = sets.iter().map(|s| s.aabb(scale)).collect_vec();

    let overlap_area = aabbs
        .iter()
        .tuple_combinations::<(_, _)>()
        .map(|(a, b)| Rect::overlap_area(*a, *b))
        .sum::<f64>();

    let mut breakdown = ScoreBreakdown {
        overlap: overlap_area * weights.overlap,
        ..ScoreBreakdown::default()
    };

    let aabb_map: HashMap<&str, &Rect> = sets
        .iter()
        .map(|s| s.id.as_str())
        .zip(aabbs.iter())
        .collect();

    for rule in rules {
        let Some(set_b) = rule.set_b.as_deref() else {
            continue;
        };
        let (Some(a), Some(b)) = (aabb_map.get(rule.set_a.as_str()), aabb_map.get(set_b)) else {
            continue;
        };
        match rule.kind {
            RuleKind::Near { distance } => {
                let center_dist = a.centroid().distance_to(&b.centroid());
                let threshold = distance * scale;
                if center_dist > threshold {
                    breakdown.near += (center_dist - threshold) * weights.near;
                }
            }
            RuleKind::Separate { distance } => {
                let center_dist = a.centroid().distance_to(&b.centroid());
                let threshold = distance * scale;
                if center_dist < threshold {
                    breakdown.separate += (threshold - center_dist) * weights.separate;
                }
            }
            RuleKind::Connect => {
                let edge_dist = a.distance_to(*b);
                if edge_dist > weights.connect_tolerance {
                    breakdown.connect += edge_dist * weights.connect;
                }
            }
            RuleKind::Fixed => {}
        }
    }
    breakdown
}
