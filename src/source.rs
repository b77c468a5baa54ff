//! Reading the hierarchy table.
//!
//! Expected shape (delimiter configurable):
//! pays,region,commune
//! Benin,Littoral,Cotonou
//! Benin,Littoral,
//!
//! The first record is the header, outermost level first. Records may be
//! shorter or longer than the header; cells are kept raw here and trimmed by
//! `path::validate_row`.

use crate::Result;

use anyhow::{Context, bail};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BOM: char = '\u{feff}';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    /// 1-based line in the source file.
    pub line: u64,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<SourceRow>,
}

pub fn read_source_file(path: &Path, delimiter: u8) -> Result<SourceTable> {
    let file =
        File::open(path).with_context(|| format!("open input file {}", path.display()))?;
    read_source(file, delimiter).with_context(|| format!("read input file {}", path.display()))
}

pub fn read_source<R: Read>(reader: R, delimiter: u8) -> Result<SourceTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context("read header row")?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches(BOM).to_string()
            } else {
                h.to_string()
            }
        })
        .collect();

    if headers.is_empty() {
        bail!("input has no header row");
    }

    let mut rows = Vec::new();
    for (index, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("parse data record {}", index + 1))?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 2);

        rows.push(SourceRow {
            line,
            cells: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(SourceTable { headers, rows })
}
