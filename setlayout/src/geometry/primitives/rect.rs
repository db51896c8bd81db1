use crate::geometry::geo_traits::{DistanceTo, Shape};
use crate::geometry::primitives::Point;

/// Axis-aligned rectangle.
/// In canvas space `y` grows downwards, so (`x_min`, `y_min`) is the top-left corner.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and its dimensions.
    /// No validation is performed, degenerate rectangles are allowed.
    pub fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + w,
            y_max: y + h,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`.
    /// Rectangles which only touch along an edge have no intersection.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x_min = f64::max(a.x_min, b.x_min);
        let y_min = f64::max(a.y_min, b.y_min);
        let x_max = f64::min(a.x_max, b.x_max);
        let y_max = f64::min(a.y_max, b.y_max);
        if x_min < x_max && y_min < y_max {
            Some(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            })
        } else {
            None
        }
    }

    /// Area of the intersection of `a` and `b`, 0 if they are disjoint.
    #[inline(always)]
    pub fn overlap_area(a: Rect, b: Rect) -> f64 {
        let ov_x = f64::min(a.x_max, b.x_max) - f64::max(a.x_min, b.x_min);
        let ov_y = f64::min(a.y_max, b.y_max) - f64::max(a.y_min, b.y_min);
        if ov_x > 0.0 && ov_y > 0.0 {
            ov_x * ov_y
        } else {
            0.0
        }
    }
}

impl Shape for Rect {
    fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

impl DistanceTo<Rect> for Rect {
    /// Length of the shortest segment between the boundaries of both rectangles.
    /// 0 when they touch or overlap.
    #[inline(always)]
    fn distance_to(&self, other: &Rect) -> f64 {
        self.sq_distance_to(other).sqrt()
    }

    #[inline(always)]
    fn sq_distance_to(&self, other: &Rect) -> f64 {
        let gap_x = f64::max(0.0, f64::max(self.x_min - other.x_max, other.x_min - self.x_max));
        let gap_y = f64::max(0.0, f64::max(self.y_min - other.y_max, other.y_min - self.y_max));
        gap_x.powi(2) + gap_y.powi(2)
    }
}
