//! Rectilinear outline of a rectangle after a sequence of rectangular cutouts.
//!
//! Every cutout is subtracted from the *then-current* outline by rasterizing the outline onto the
//! irregular grid spanned by its own vertex coordinates and those of the cutout, dropping the cells
//! covered by the cutout and tracing the boundary of the remaining cells.
//!
//! Precondition: the remaining region is a single simply-connected area.
//! This is assumed and not verified. When a cut splits the shape or creates a hole, only the
//! component containing the top-left-most boundary edge is traced.

use crate::entities::Set;
use crate::geometry::Rotation;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Point, Rect, RectilinearPolygon};
use float_cmp::approx_eq;
use itertools::Itertools;
use log::{debug, warn};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Cutouts with a clipped width or height below this value (in local units) are ignored.
pub const MIN_CUTOUT_DIM: f64 = 0.01;

/// Grid coordinates are rounded to this many decimals, merging lines that only differ by float noise.
pub const GRID_DECIMALS: i32 = 3;

/// Tolerance used when matching the end of one boundary edge to the start of the next.
pub const CHAIN_TOLERANCE: f64 = 0.001;

const COLLINEAR_EPSILON: f64 = 1e-9;

/// Rectangle removed from a set, in the set's own unrotated local frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cutout {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Cutout {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_xywh(self.x, self.y, self.w, self.h)
    }
}

/// Computes the clockwise outline of a `width` x `height` rectangle with `cutouts` removed, in list order.
///
/// Without cutouts the result is exactly `[(0,0), (w,0), (w,h), (0,h)]`.
/// If the cutouts consume the entire shape, an empty polygon is returned.
pub fn compute_cutout_polygon(width: f64, height: f64, cutouts: &[Cutout]) -> RectilinearPolygon {
    let mut polygon = RectilinearPolygon::rectangle(width, height);
    for (i, cutout) in cutouts.iter().enumerate() {
        match apply_cutout(&polygon, cutout) {
            Some(cut) => {
                if cut.is_empty() {
                    warn!("[CUT] cutout {i} {cutout:?} consumed the remaining shape");
                }
                polygon = cut;
            }
            None => debug!("[CUT] cutout {i} {cutout:?} is degenerate after clipping, skipped"),
        }
    }
    polygon
}

/// Subtracts a single cutout from `polygon`.
/// Returns `None` when the cutout, clipped to the bounding box of the polygon, is degenerate.
fn apply_cutout(polygon: &RectilinearPolygon, cutout: &Cutout) -> Option<RectilinearPolygon> {
    let bbox = polygon.bbox()?;
    let c = cutout.rect();
    let clipped = Rect {
        x_min: round_grid(f64::max(c.x_min, bbox.x_min)),
        y_min: round_grid(f64::max(c.y_min, bbox.y_min)),
        x_max: round_grid(f64::min(c.x_max, bbox.x_max)),
        y_max: round_grid(f64::min(c.y_max, bbox.y_max)),
    };
    if clipped.width() < MIN_CUTOUT_DIM || clipped.height() < MIN_CUTOUT_DIM {
        return None;
    }

    let xs = grid_lines(
        polygon
            .points()
            .iter()
            .map(|p| p.0)
            .chain([clipped.x_min, clipped.x_max]),
    );
    let ys = grid_lines(
        polygon
            .points()
            .iter()
            .map(|p| p.1)
            .chain([clipped.y_min, clipped.y_max]),
    );

    let filled = Array2::from_shape_fn((xs.len() - 1, ys.len() - 1), |(i, j)| {
        let center = Point((xs[i] + xs[i + 1]) / 2.0, (ys[j] + ys[j + 1]) / 2.0);
        polygon.collides_with(&center) && !strictly_contains(&clipped, &center)
    });

    let edges = boundary_edges(&filled, &xs, &ys);
    let n_edges = edges.len();
    let chain = chain_edges(edges);
    if chain.len() < n_edges {
        warn!(
            "[CUT] traced {} of {} boundary edges, remaining region is not simply connected (hole or split), only one outline is kept",
            chain.len(),
            n_edges
        );
    }
    Some(RectilinearPolygon::new(merge_collinear(chain)))
}

fn round_grid(v: f64) -> f64 {
    let factor = 10f64.powi(GRID_DECIMALS);
    (v * factor).round() / factor
}

fn grid_lines(coords: impl Iterator<Item = f64>) -> Vec<f64> {
    coords
        .map(round_grid)
        .sorted_by(|a, b| a.total_cmp(b))
        .dedup()
        .collect_vec()
}

fn strictly_contains(rect: &Rect, p: &Point) -> bool {
    p.0 > rect.x_min && p.0 < rect.x_max && p.1 > rect.y_min && p.1 < rect.y_max
}

/// Directed edges separating filled cells from empty ones (or the grid border).
/// Edges are oriented so that the filled region is traversed clockwise.
fn boundary_edges(filled: &Array2<bool>, xs: &[f64], ys: &[f64]) -> Vec<(Point, Point)> {
    let at = |i: usize, j: usize| filled.get((i, j)).copied().unwrap_or(false);
    let mut edges = vec![];
    for ((i, j), &is_filled) in filled.indexed_iter() {
        if !is_filled {
            continue;
        }
        let (x0, x1, y0, y1) = (xs[i], xs[i + 1], ys[j], ys[j + 1]);
        if !j.checked_sub(1).is_some_and(|j_up| at(i, j_up)) {
            edges.push((Point(x0, y0), Point(x1, y0)));
        }
        if !at(i + 1, j) {
            edges.push((Point(x1, y0), Point(x1, y1)));
        }
        if !at(i, j + 1) {
            edges.push((Point(x1, y1), Point(x0, y1)));
        }
        if !i.checked_sub(1).is_some_and(|i_left| at(i_left, j)) {
            edges.push((Point(x0, y1), Point(x0, y0)));
        }
    }
    edges
}

/// Links directed edges into a single closed vertex chain, starting from the top-left-most edge.
fn chain_edges(edges: Vec<(Point, Point)>) -> Vec<Point> {
    let Some(first) = edges
        .iter()
        .position_min_by(|(a, _), (b, _)| a.1.total_cmp(&b.1).then(a.0.total_cmp(&b.0)))
    else {
        return vec![];
    };

    let mut used = vec![false; edges.len()];
    used[first] = true;
    let (origin, mut current_end) = edges[first];
    let mut chain = vec![origin];

    while !current_end.almost_eq(&origin, CHAIN_TOLERANCE) {
        let next = (0..edges.len())
            .find(|&k| !used[k] && edges[k].0.almost_eq(&current_end, CHAIN_TOLERANCE));
        match next {
            Some(k) => {
                used[k] = true;
                chain.push(edges[k].0);
                current_end = edges[k].1;
            }
            None => break,
        }
    }
    chain
}

/// Removes every vertex lying on the straight line between its neighbors.
fn merge_collinear(points: Vec<Point>) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points;
    }
    (0..n)
        .filter(|&k| {
            let prev = points[(k + n - 1) % n];
            let cur = points[k];
            let next = points[(k + 1) % n];
            let cross = (cur.0 - prev.0) * (next.1 - cur.1) - (cur.1 - prev.1) * (next.0 - cur.0);
            !approx_eq!(f64, cross, 0.0, epsilon = COLLINEAR_EPSILON)
        })
        .map(|k| points[k])
        .collect_vec()
}

/// Expresses a canvas-space overlap rectangle (in pixels) in the unrotated local frame of `target` (in units).
pub fn map_overlap_to_local_cutout(overlap: Rect, target: &Set, scale: f64) -> Cutout {
    let dx = (overlap.x_min - target.x) / scale;
    let dy = (overlap.y_min - target.y) / scale;
    let ow = overlap.width() / scale;
    let oh = overlap.height() / scale;
    let (w, h) = (target.width, target.height);

    match target.rotation {
        Rotation::R0 => Cutout::new(dx, dy, ow, oh),
        Rotation::R90 => Cutout::new(dy, h - dx - ow, oh, ow),
        Rotation::R180 => Cutout::new(w - dx - ow, h - dy - oh, ow, oh),
        Rotation::R270 => Cutout::new(w - dy - oh, dx, oh, ow),
    }
}
