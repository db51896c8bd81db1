use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Point, Rect};
use itertools::Itertools;

/// Simple polygon whose edges are all axis-aligned.
/// Vertices are ordered clockwise in canvas space (y grows downwards) and the polygon is implicitly closed.
/// An empty vertex list represents a shape which was cut away entirely.
#[derive(Clone, Debug, PartialEq)]
pub struct RectilinearPolygon {
    points: Vec<Point>,
}

impl RectilinearPolygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// The 4-corner polygon `[(0,0), (w,0), (w,h), (0,h)]`.
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::new(vec![
            Point(0.0, 0.0),
            Point(width, 0.0),
            Point(width, height),
            Point(0.0, height),
        ])
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn n_vertices(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.len() < 3
    }

    /// Iterates over all edges as (start, end) pairs, including the closing edge.
    pub fn edge_iter(&self) -> impl Iterator<Item = (&Point, &Point)> {
        self.points.iter().circular_tuple_windows()
    }

    /// Bounding box of the polygon, `None` if it is empty.
    pub fn bbox(&self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        let (x_min, x_max) = self
            .points
            .iter()
            .map(|p| p.0)
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()?;
        let (y_min, y_max) = self
            .points
            .iter()
            .map(|p| p.1)
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()?;
        Some(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Enclosed area (shoelace formula)
    pub fn area(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let twice_area = self
            .edge_iter()
            .map(|(s, e)| s.0 * e.1 - e.0 * s.1)
            .sum::<f64>();
        twice_area.abs() / 2.0
    }
}

impl CollidesWith<Point> for RectilinearPolygon {
    /// Ray casting point-in-polygon test.
    /// Points exactly on the boundary may fall on either side.
    fn collides_with(&self, point: &Point) -> bool {
        if self.is_empty() {
            return false;
        }
        let Point(p_x, p_y) = *point;
        let mut inside = false;
        for (s, e) in self.edge_iter() {
            //only edges straddling the horizontal ray through the point can be crossed
            if (s.1 > p_y) != (e.1 > p_y) {
                let x_cross = s.0 + (p_y - s.1) * (e.0 - s.0) / (e.1 - s.1);
                if p_x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }
}
