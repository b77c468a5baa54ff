use crate::error::UnknownTypeError;
use crate::types::TypeTable;

/// One hierarchy level, derived from one header column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisionType {
    /// 1-based, assigned in header order.
    pub id: u32,
    /// Header label, unmodified.
    pub name: String,
    pub code: String,
    /// Zero-based depth (the header's column index).
    pub level: usize,
    pub parent_type_level: Option<usize>,
}

impl DivisionType {
    pub fn description(&self) -> String {
        format!("Type de division: {}", self.name)
    }

    /// Id of the level above, which is always the previous header column.
    pub fn parent_type_id(&self) -> Option<u32> {
        self.parent_type_level.map(|level| level as u32 + 1)
    }
}

/// Resolve every header label up front.
///
/// Fails on the first label the table does not know, before any row is read.
pub fn build_division_types<S: AsRef<str>>(
    headers: &[S],
    table: &TypeTable,
) -> Result<Vec<DivisionType>, UnknownTypeError> {
    headers
        .iter()
        .enumerate()
        .map(|(level, header)| {
            let name = header.as_ref();
            let code = table.resolve(name)?;
            Ok(DivisionType {
                id: level as u32 + 1,
                name: name.to_string(),
                code: code.to_string(),
                level,
                parent_type_level: level.checked_sub(1),
            })
        })
        .collect()
}
