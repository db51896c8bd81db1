//! Layout engine for rectangular sets (rooms, walls, windows, doors, furniture) on a calibrated floor plan.
//!
//! Two independent pieces live here:
//! * a rule-driven layout optimizer (shelf packing followed by hill-climbing on a penalty score), see [`opt`]
//! * a rectilinear cutout tracer computing what remains of a set after other sets were cut into it, see [`geometry::cutout`]

/// Sets, rules and the plan that owns them
pub mod entities;

/// Geometric primitives and the cutout tracer
pub mod geometry;

/// Importing plans into and exporting layouts out of this library
pub mod io;

/// Scoring, packing and optimization of arrangements
pub mod opt;

/// Helper functions which do not belong to any specific module
pub mod util;
