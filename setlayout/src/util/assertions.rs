use crate::entities::Set;
use crate::geometry::primitives::Rect;
use crate::opt::FixedIds;
use crate::util::FPA;
use itertools::Itertools;
use log::error;
//Various checks to verify correctness of arrangements
//Used in debug_assertion!() blocks and tests

/// Every fixed set in `after` has the exact position it had in `before`.
pub fn fixed_sets_unmoved(before: &[Set], after: &[Set], fixed: &FixedIds) -> bool {
    before
        .iter()
        .filter(|s| fixed.contains(&s.id))
        .all(|s| match after.iter().find(|a| a.id == s.id) {
            Some(a) if a.x == s.x && a.y == s.y => true,
            Some(a) => {
                error!(
                    "fixed set {} moved from ({}, {}) to ({}, {})",
                    s.id, s.x, s.y, a.x, a.y
                );
                false
            }
            None => {
                error!("fixed set {} is missing from the arrangement", s.id);
                false
            }
        })
}

/// No two non-fixed sets have overlapping bounding boxes.
pub fn movable_sets_disjoint(sets: &[Set], fixed: &FixedIds, scale: f64) -> bool {
    sets.iter()
        .filter(|s| !fixed.contains(&s.id))
        .tuple_combinations::<(_, _)>()
        .all(|(a, b)| {
            let overlap = Rect::overlap_area(a.aabb(scale), b.aabb(scale));
            if FPA(overlap) != FPA(0.0) {
                error!("sets {} and {} overlap by {overlap}", a.id, b.id);
                return false;
            }
            true
        })
}

/// Every set of `before` appears exactly once in `after`.
pub fn same_sets(before: &[Set], after: &[Set]) -> bool {
    before.len() == after.len()
        && before.iter().map(|s| &s.id).sorted().eq(after.iter().map(|s| &s.id).sorted())
}
