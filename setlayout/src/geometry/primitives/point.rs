/// Point in either canvas space (pixels) or the local frame of a set (units)
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)).sqrt()
    }

    /// True if both coordinates are within `tolerance` of each other
    pub fn almost_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance && (self.1 - other.1).abs() <= tolerance
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}
