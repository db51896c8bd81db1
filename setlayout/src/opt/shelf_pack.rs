use crate::entities::Set;
use crate::opt::FixedIds;
use crate::util::assertions;
use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Places all non-fixed sets in horizontal shelves, largest (rotation-aware pixel area) first.
///
/// Sets are placed left to right starting at (`padding`, `padding`), separated by `padding`.
/// A new shelf is started below the tallest set of the current one as soon as the next set would
/// cross `canvas_width`, unless the current shelf is still empty.
/// Fixed sets keep their position and are not avoided, the order of the returned sets matches the input.
pub fn shelf_pack(sets: &[Set], fixed: &FixedIds, scale: f64, canvas_width: f64, padding: f64) -> Vec<Set> {
    let placement_order = sets
        .iter()
        .enumerate()
        .filter(|(_, s)| !fixed.contains(&s.id))
        .sorted_by_cached_key(|(_, s)| Reverse(OrderedFloat(s.pixel_area(scale))))
        .map(|(i, _)| i)
        .collect_vec();
    let n_packed = placement_order.len();

    let mut packed = sets.to_vec();
    let mut cursor_x = padding;
    let mut cursor_y = padding;
    let mut shelf_height: f64 = 0.0;
    let mut n_on_shelf = 0;
    let mut n_shelves = 1;

    for i in placement_order {
        let (w, h) = packed[i].pixel_dims(scale);
        if n_on_shelf > 0 && cursor_x + w > canvas_width {
            cursor_x = padding;
            cursor_y += shelf_height + padding;
            shelf_height = 0.0;
            n_on_shelf = 0;
            n_shelves += 1;
        }
        packed[i].x = cursor_x;
        packed[i].y = cursor_y;
        cursor_x += w + padding;
        shelf_height = shelf_height.max(h);
        n_on_shelf += 1;
    }

    debug!(
        "[PACK] packed {} sets in {} shelves, reaching y={:.1}",
        n_packed,
        n_shelves,
        cursor_y + shelf_height
    );
    debug_assert!(assertions::movable_sets_disjoint(&packed, fixed, scale));
    packed
}
