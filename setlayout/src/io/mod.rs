mod export;
mod import;

/// External (serializable) representations of plans and arrangements.
pub mod ext_repr;

/// Exports an arrangement out of the library.
pub use export::{export, export_plan, export_rule, export_score, export_set};

/// Imports a plan into the library.
pub use import::{import, import_rule, import_set};
