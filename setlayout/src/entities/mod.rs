mod instance;
mod plan;
mod rule;
mod set;

#[doc(inline)]
pub use instance::PlanInstance;

#[doc(inline)]
pub use plan::Plan;

#[doc(inline)]
pub use rule::Rule;

#[doc(inline)]
pub use rule::RuleKind;

#[doc(inline)]
pub use set::Set;

#[doc(inline)]
pub use set::SetCategory;

#[doc(inline)]
pub use crate::geometry::cutout::Cutout;
