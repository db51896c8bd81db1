mod point;
mod rect;
mod rectilinear_polygon;

#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use rectilinear_polygon::RectilinearPolygon;
