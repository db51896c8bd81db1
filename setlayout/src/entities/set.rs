use crate::geometry::Rotation;
use crate::geometry::cutout::{Cutout, compute_cutout_polygon};
use crate::geometry::primitives::{Rect, RectilinearPolygon};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Kind of object a [`Set`] represents on the floor plan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetCategory {
    Room,
    Wall,
    Window,
    Door,
    Furniture,
    #[default]
    Other,
}

/// A placeable rectangular object on the floor plan.
#[derive(Clone, Debug, PartialEq)]
pub struct Set {
    pub id: String,
    /// Canvas position (in pixels) of the top-left corner of the set's footprint
    pub x: f64,
    pub y: f64,
    /// Dimensions of the unrotated set, in real units
    pub width: f64,
    pub height: f64,
    pub rotation: Rotation,
    /// Rectangles cut out of the set, in its unrotated local frame and in the order they were applied
    pub cutouts: Vec<Cutout>,
    /// Sets which are not on the plan are ignored by the layout optimizer
    pub on_plan: bool,
    /// Locked to the background, never moved by the layout optimizer
    pub locked: bool,
    pub category: SetCategory,
}

impl Set {
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            x: 0.0,
            y: 0.0,
            width,
            height,
            rotation: Rotation::R0,
            cutouts: vec![],
            on_plan: true,
            locked: false,
            category: SetCategory::Other,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn rotated(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Rotation-aware footprint dimensions in pixels
    pub fn pixel_dims(&self, scale: f64) -> (f64, f64) {
        let (w, h) = match self.rotation.swaps_axes() {
            true => (self.height, self.width),
            false => (self.width, self.height),
        };
        (w * scale, h * scale)
    }

    /// Axis-aligned bounding box of the set in canvas space (pixels)
    pub fn aabb(&self, scale: f64) -> Rect {
        let (w, h) = self.pixel_dims(scale);
        Rect::from_xywh(self.x, self.y, w, h)
    }

    /// Area of the rotated footprint in pixels, cutouts not subtracted
    pub fn pixel_area(&self, scale: f64) -> f64 {
        let (w, h) = self.pixel_dims(scale);
        w * h
    }

    /// Outline of the set in its local frame, with all cutouts applied
    pub fn outline(&self) -> RectilinearPolygon {
        compute_cutout_polygon(self.width, self.height, &self.cutouts)
    }
}

impl Display for Set {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}x{} @ ({:.1}, {:.1}), {}]",
            self.id, self.width, self.height, self.x, self.y, self.rotation
        )
    }
}
