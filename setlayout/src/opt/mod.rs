mod fixed;
mod optimizer;

/// Penalty score of an arrangement
pub mod score;

/// Deterministic initial placement of sets in shelves
pub mod shelf_pack;

use serde::{Deserialize, Serialize};

#[doc(inline)]
pub use fixed::FixedIds;

#[doc(inline)]
pub use optimizer::{
    LayoutOptimizer, LayoutSolution, LayoutStats, compute_alternate_layout, compute_layout,
};

#[doc(inline)]
pub use score::{ScoreBreakdown, score_arrangement};

/// Calibrated canvas the sets are arranged on.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    /// Pixels per real-world unit
    pub scale: f64,
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}
