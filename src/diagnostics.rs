//! Bookkeeping for rows dropped during the build.
//!
//! Dropping a row is not an error; the report only makes the drops visible.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Empty,
    /// Zero-based column of the first empty cell after a populated one.
    Gap { column: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Empty => write!(f, "empty row"),
            SkipReason::Gap { column } => write!(f, "gap at column {}", column + 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipReport {
    pub rows: Vec<SkippedRow>,
}

impl SkipReport {
    pub fn record(&mut self, line: u64, reason: SkipReason) {
        self.rows.push(SkippedRow { line, reason });
    }

    pub fn empty_rows(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.reason == SkipReason::Empty)
            .count()
    }

    pub fn gap_rows(&self) -> usize {
        self.rows.len() - self.empty_rows()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
