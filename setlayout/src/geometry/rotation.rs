use anyhow::{Result, bail};
use std::fmt::{Display, Formatter};

/// Rotation of a set, restricted to right angles (clockwise in canvas space).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    pub fn degrees(&self) -> u16 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }

    /// Whether the rotated footprint has its width and height swapped.
    pub fn swaps_axes(&self) -> bool {
        matches!(self, Rotation::R90 | Rotation::R270)
    }

    /// The next right angle, clockwise
    pub fn next(&self) -> Rotation {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }
}

/// Normalizes any multiple of 90 degrees (negative or beyond a full turn) into a [`Rotation`].
impl TryFrom<f64> for Rotation {
    type Error = anyhow::Error;

    fn try_from(degrees: f64) -> Result<Self> {
        if !degrees.is_finite() {
            bail!("rotation must be finite, got {degrees}");
        }
        let quarter_turns = degrees / 90.0;
        if (quarter_turns - quarter_turns.round()).abs() > 1e-6 {
            bail!("rotation must be a multiple of 90 degrees, got {degrees}");
        }
        match (quarter_turns.round() as i64).rem_euclid(4) {
            0 => Ok(Rotation::R0),
            1 => Ok(Rotation::R90),
            2 => Ok(Rotation::R180),
            _ => Ok(Rotation::R270),
        }
    }
}

impl From<Rotation> for f64 {
    fn from(r: Rotation) -> Self {
        r.degrees() as f64
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
