use std::fmt::{Display, Formatter};

/// Spatial relation enforced between sets.
/// Distances are expressed in real units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RuleKind {
    /// Centers of both sets should be at most `distance` apart
    Near { distance: f64 },
    /// Both sets should touch
    Connect,
    /// Centers of both sets should be at least `distance` apart
    Separate { distance: f64 },
    /// The set must not be moved by the optimizer
    Fixed,
}

/// A pairwise (or, for [`RuleKind::Fixed`], single) constraint between sets.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub id: String,
    pub kind: RuleKind,
    pub set_a: String,
    /// `None` for [`RuleKind::Fixed`]
    pub set_b: Option<String>,
}

impl Rule {
    pub fn near(id: impl Into<String>, a: impl Into<String>, b: impl Into<String>, distance: f64) -> Self {
        Self::pairwise(id, RuleKind::Near { distance }, a, b)
    }

    pub fn separate(id: impl Into<String>, a: impl Into<String>, b: impl Into<String>, distance: f64) -> Self {
        Self::pairwise(id, RuleKind::Separate { distance }, a, b)
    }

    pub fn connect(id: impl Into<String>, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self::pairwise(id, RuleKind::Connect, a, b)
    }

    pub fn fixed(id: impl Into<String>, set: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: RuleKind::Fixed,
            set_a: set.into(),
            set_b: None,
        }
    }

    fn pairwise(id: impl Into<String>, kind: RuleKind, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            set_a: a.into(),
            set_b: Some(b.into()),
        }
    }

    /// Whether the rule references the set with the given id
    pub fn references(&self, set_id: &str) -> bool {
        self.set_a == set_id || self.set_b.as_deref() == Some(set_id)
    }
}

impl Display for RuleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleKind::Near { distance } => write!(f, "NEAR({distance})"),
            RuleKind::Connect => write!(f, "CONNECT"),
            RuleKind::Separate { distance } => write!(f, "SEPARATE({distance})"),
            RuleKind::Fixed => write!(f, "FIXED"),
        }
    }
}
