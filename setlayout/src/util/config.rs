use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Penalty weights of the arrangement score.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct ScoreWeights {
    /// Penalty per square pixel of overlap between two sets
    pub overlap: f64,
    /// Penalty per pixel that two NEAR sets are further apart than allowed
    pub near: f64,
    /// Penalty per pixel that two SEPARATE sets are closer than allowed
    pub separate: f64,
    /// Penalty per pixel of gap between two CONNECT sets, once the gap exceeds `connect_tolerance`
    pub connect: f64,
    /// Gap (in pixels) between two CONNECT sets which is still considered touching
    pub connect_tolerance: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            overlap: 10.0,
            near: 2.0,
            separate: 3.0,
            connect: 5.0,
            connect_tolerance: 5.0,
        }
    }
}

impl ScoreWeights {
    pub fn validate(&self) -> Result<()> {
        for (name, w) in [
            ("overlap", self.overlap),
            ("near", self.near),
            ("separate", self.separate),
            ("connect", self.connect),
            ("connect_tolerance", self.connect_tolerance),
        ] {
            ensure!(w.is_finite() && w >= 0.0, "weight {name} must be finite and non-negative, got {w}");
        }
        Ok(())
    }
}

/// Configuration of the layout optimizer.
/// Missing fields fall back to their default value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Weights of the different terms of the arrangement score
    pub weights: ScoreWeights,
    /// Gap (in pixels) between sets placed by the shelf packer, also used as margin to the canvas border
    pub padding: f64,
    /// Perturbation magnitude (in pixels) at the first iteration, decays linearly towards `min_magnitude`
    pub max_magnitude: f64,
    /// Lower bound of the perturbation magnitude (in pixels)
    pub min_magnitude: f64,
    /// Number of perturbation iterations of a regular layout
    pub n_iterations: usize,
    /// Number of perturbation iterations of an alternate layout
    pub n_alternate_iterations: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            padding: 20.0,
            max_magnitude: 200.0,
            min_magnitude: 20.0,
            n_iterations: 100,
            n_alternate_iterations: 150,
        }
    }
}

impl LayoutConfig {
    /// Rejects configs the optimizer cannot run with: negative or non-finite padding or magnitudes,
    /// `min_magnitude` above `max_magnitude` and invalid weights.
    pub fn validate(&self) -> Result<()> {
        for (name, v) in [
            ("padding", self.padding),
            ("max_magnitude", self.max_magnitude),
            ("min_magnitude", self.min_magnitude),
        ] {
            ensure!(v.is_finite() && v >= 0.0, "{name} must be finite and non-negative, got {v}");
        }
        ensure!(
            self.min_magnitude <= self.max_magnitude,
            "min_magnitude ({}) exceeds max_magnitude ({})",
            self.min_magnitude,
            self.max_magnitude
        );
        self.weights.validate()
    }
}
