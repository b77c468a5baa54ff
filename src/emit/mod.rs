//! Output rendering. Both emitters read the same built hierarchy.

pub mod sql;
pub mod table;

pub use sql::render_statements;
pub use table::render_table;
