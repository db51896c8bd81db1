use crate::entities::{Cutout, SetCategory};
use crate::opt::Canvas;
use serde::{Deserialize, Serialize};

/// External representation of a floor plan: the canvas, its sets and the rules between them.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtPlan {
    #[serde(default)]
    pub name: String,
    pub canvas: Canvas,
    pub sets: Vec<ExtSet>,
    #[serde(default)]
    pub rules: Vec<ExtRule>,
}

/// External representation of a [`Set`](crate::entities::Set).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtSet {
    pub id: String,
    /// Canvas position in pixels
    pub x: f64,
    pub y: f64,
    /// Dimensions in real units
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees, must be a multiple of 90
    #[serde(default)]
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cutouts: Vec<Cutout>,
    #[serde(default = "default_on_plan")]
    pub on_plan: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub category: SetCategory,
    /// Outline of the set in its local frame, only exported for sets with cutouts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Vec<(f64, f64)>>,
}

fn default_on_plan() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtRuleType {
    Near,
    Connect,
    Separate,
    Fixed,
}

/// External representation of a [`Rule`](crate::entities::Rule).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtRule {
    pub id: String,
    #[serde(rename = "type")]
    pub rule_type: ExtRuleType,
    pub set_a: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_b: Option<String>,
    /// Distance in real units, required for NEAR and SEPARATE rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// External representation of the score of an arrangement
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtScore {
    pub total: f64,
    pub overlap: f64,
    pub near: f64,
    pub separate: f64,
    pub connect: f64,
}

/// External representation of an arrangement produced by the library
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtLayoutSolution {
    pub sets: Vec<ExtSet>,
    pub score: ExtScore,
    /// Score right after shelf packing, absent if the arrangement was not optimized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_score: Option<f64>,
    #[serde(default)]
    pub n_improvements: usize,
    pub run_time_ms: u64,
}
