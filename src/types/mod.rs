//! Division types: the type-code table and the per-header levels built from it.

pub mod division_type;
pub mod table;

pub use division_type::{DivisionType, build_division_types};
pub use table::TypeTable;
