//! Row shape validation.
//!
//! A row is read positionally against the header. Trailing empty cells mean
//! "this node stops here"; an empty cell directly after a populated one is a
//! gap unless every cell from there on is empty too.
//!
//!   ["Benin", "Littoral", ""]   =>  Path(["Benin", "Littoral"])
//!   ["Benin", "", "Cotonou"]    =>  Gap { column: 1 }
//!   ["", "", ""]                =>  Empty

/// Outcome of validating one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowShape {
    /// Non-empty trimmed values, root first.
    Path(Vec<String>),
    /// Every cell is blank.
    Empty,
    /// Column index of the first empty cell that follows a populated one.
    Gap { column: usize },
}

/// Trim the first `header_count` cells (missing cells count as empty) and
/// classify the row.
pub fn validate_row<S: AsRef<str>>(header_count: usize, raw: &[S]) -> RowShape {
    let cells: Vec<&str> = (0..header_count)
        .map(|i| raw.get(i).map(|c| c.as_ref().trim()).unwrap_or(""))
        .collect();

    let path: Vec<String> = cells
        .iter()
        .filter(|c| !c.is_empty())
        .map(|c| c.to_string())
        .collect();

    if path.is_empty() {
        return RowShape::Empty;
    }

    let first_gap = (1..cells.len()).find(|&i| cells[i].is_empty() && !cells[i - 1].is_empty());
    if let Some(column) = first_gap {
        if cells[column..].iter().any(|c| !c.is_empty()) {
            return RowShape::Gap { column };
        }
    }

    RowShape::Path(path)
}
