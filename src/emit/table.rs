//! Enriched table output.
//!
//! Columns: the header labels up to the deepest populated cell of any row,
//! then `parent_id`, `division_id`, `division_slug`. A row with leading empty
//! cells reaches further right than its path length, so the width is taken
//! from cell positions rather than from `Hierarchy::max_depth`.

use crate::Result;
use crate::hierarchy::Hierarchy;

use anyhow::Context;
use std::io::Write;

pub const EXTRA_COLUMNS: [&str; 3] = ["parent_id", "division_id", "division_slug"];

pub fn write_table<W: Write>(writer: W, hierarchy: &Hierarchy, delimiter: u8) -> Result<()> {
    let depth = table_width(hierarchy);

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    let header: Vec<&str> = hierarchy.types[..depth]
        .iter()
        .map(|t| t.name.as_str())
        .chain(EXTRA_COLUMNS)
        .collect();
    wtr.write_record(&header).context("write table header")?;

    for division in &hierarchy.divisions {
        let mut record: Vec<&str> = (0..depth)
            .map(|i| division.cells.get(i).map(String::as_str).unwrap_or(""))
            .collect();
        record.push(division.parent_id.as_deref().unwrap_or(""));
        record.push(&division.id);
        record.push(&division.slug);

        wtr.write_record(&record)
            .with_context(|| format!("write row for source line {}", division.line))?;
    }

    wtr.flush().context("flush table output")?;
    Ok(())
}

/// One past the rightmost non-blank cell over all divisions, within the header.
fn table_width(hierarchy: &Hierarchy) -> usize {
    let levels = hierarchy.types.len();
    hierarchy
        .divisions
        .iter()
        .filter_map(|d| {
            d.cells
                .iter()
                .take(levels)
                .rposition(|c| !c.trim().is_empty())
        })
        .map(|last| last + 1)
        .max()
        .unwrap_or(0)
}

pub fn render_table(hierarchy: &Hierarchy, delimiter: u8) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_table(&mut out, hierarchy, delimiter)?;
    Ok(out)
}
