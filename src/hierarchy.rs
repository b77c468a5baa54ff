//! Hierarchy build: validated rows -> divisions with derived parent ids.
//!
//! There is no stored tree. A division's parent id is the id of its own path
//! with the last segment removed, derived again from scratch, so row order in
//! the source never matters. The parent row itself may be absent from the
//! table; such references are emitted as-is.

use crate::diagnostics::{SkipReason, SkipReport};
use crate::error::UnknownTypeError;
use crate::id::derive_id;
use crate::path::{RowShape, validate_row};
use crate::source::SourceTable;
use crate::types::{DivisionType, TypeTable, build_division_types};

/// One node of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Division {
    pub id: String,
    pub parent_id: Option<String>,
    /// Leaf segment, trimmed.
    pub name: String,
    pub slug: String,
    /// `path.len() - 1`.
    pub type_level: usize,
    pub type_id: u32,
    /// Source line the division was read from.
    pub line: u64,
    /// Cells of the source row, untrimmed.
    pub cells: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Hierarchy {
    pub types: Vec<DivisionType>,
    pub divisions: Vec<Division>,
    pub skipped: SkipReport,
}

impl Hierarchy {
    /// Deepest path length across all divisions (0 when there are none).
    pub fn max_depth(&self) -> usize {
        self.divisions
            .iter()
            .map(|d| d.type_level + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Build a division from a validated path.
///
/// `types` must cover at least `path.len()` levels; the terminal type is the
/// one at `path.len() - 1`.
pub fn build_division(
    types: &[DivisionType],
    path: &[String],
    line: u64,
    cells: Vec<String>,
) -> Division {
    let type_level = path.len() - 1;
    let division_type = &types[type_level];
    let derived = derive_id(&division_type.code, path);

    let parent_id = match path.split_last() {
        Some((_, parent_path)) if !parent_path.is_empty() => {
            let parent_type = &types[parent_path.len() - 1];
            Some(derive_id(&parent_type.code, parent_path).id)
        }
        _ => None,
    };

    Division {
        id: derived.id,
        parent_id,
        name: path[type_level].clone(),
        slug: derived.slug,
        type_level,
        type_id: division_type.id,
        line,
        cells,
    }
}

/// Build the whole hierarchy. Performs:
/// - resolve every header to a division type (fatal on unknown labels)
/// - classify each row; empty and gapped rows go to the skip report
/// - derive id, slug and parent id for every remaining row, in source order
pub fn build_hierarchy(
    source: &SourceTable,
    table: &TypeTable,
) -> Result<Hierarchy, UnknownTypeError> {
    let types = build_division_types(&source.headers, table)?;

    let mut divisions = Vec::new();
    let mut skipped = SkipReport::default();

    for row in &source.rows {
        match validate_row(types.len(), &row.cells) {
            RowShape::Path(path) => {
                divisions.push(build_division(&types, &path, row.line, row.cells.clone()));
            }
            RowShape::Empty => skipped.record(row.line, SkipReason::Empty),
            RowShape::Gap { column } => skipped.record(row.line, SkipReason::Gap { column }),
        }
    }

    Ok(Hierarchy {
        types,
        divisions,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{SourceRow, SourceTable};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    fn table(headers: &[&str], rows: &[&[&str]]) -> SourceTable {
        SourceTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .enumerate()
                .map(|(i, cells)| SourceRow {
                    line: i as u64 + 2,
                    cells: cells.iter().map(|c| c.to_string()).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn benin_cotonou_end_to_end() {
        let source = table(&["pays", "commune"], &[&["Bénin", "Cotonou"]]);
        let h = build_hierarchy(&source, &TypeTable::builtin()).unwrap();

        assert_eq!(
            h.divisions,
            vec![Division {
                id: "CM-D2EUZF".to_string(),
                parent_id: Some("PA-ZFFVNY".to_string()),
                name: "Cotonou".to_string(),
                slug: "benin.cotonou".to_string(),
                type_level: 1,
                type_id: 2,
                line: 2,
                cells: vec!["Bénin".to_string(), "Cotonou".to_string()],
            }]
        );
        assert_eq!(h.divisions[0].id, derive_id("CM", &["Bénin", "Cotonou"]).id);
        assert_eq!(
            h.divisions[0].parent_id.as_deref(),
            Some(derive_id("PA", &["benin"]).id.as_str())
        );
    }

    #[test]
    fn root_has_no_parent() {
        let source = table(&["pays", "region"], &[&["Benin", ""]]);
        let h = build_hierarchy(&source, &TypeTable::builtin()).unwrap();
        assert_eq!(h.divisions[0].parent_id, None);
        assert_eq!(h.divisions[0].id, "PA-ZFFVNY");
        assert_eq!(h.divisions[0].type_level, 0);
    }

    #[test]
    fn parent_ids_match_parent_rows_in_any_order() {
        let rows: &[&[&str]] = &[
            &["Benin", "Littoral", "Cotonou"],
            &["Benin", "Atlantique", "Ouidah"],
            &["Benin", "Littoral", ""],
            &["Benin", "Atlantique", ""],
            &["Benin", "", ""],
        ];
        let forward = build_hierarchy(
            &table(&["pays", "region", "commune"], rows),
            &TypeTable::builtin(),
        )
        .unwrap();

        let mut reversed_rows = rows.to_vec();
        reversed_rows.reverse();
        let backward = build_hierarchy(
            &table(&["pays", "region", "commune"], &reversed_rows),
            &TypeTable::builtin(),
        )
        .unwrap();

        let ids: BTreeSet<&str> = forward.divisions.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), 5);
        for division in &forward.divisions {
            if let Some(parent) = &division.parent_id {
                assert!(ids.contains(parent.as_str()), "dangling {}", parent);
            }
        }

        let key = |h: &Hierarchy| -> BTreeSet<(String, Option<String>)> {
            h.divisions
                .iter()
                .map(|d| (d.id.clone(), d.parent_id.clone()))
                .collect()
        };
        assert_eq!(key(&forward), key(&backward));

        let cotonou = &forward.divisions[0];
        assert_eq!(cotonou.id, "CM-JPPHWS");
        assert_eq!(cotonou.parent_id.as_deref(), Some("RG-VMF5NC"));
        assert_eq!(forward.divisions[3].id, "RG-ACWOX4");
        assert_eq!(forward.divisions[1].id, "CM-BD3URO");
    }

    #[test]
    fn parent_is_rederived_from_the_trimmed_path() {
        let source = table(
            &["pays", "region", "commune"],
            &[&["Benin", "Littoral", "Cotonou"]],
        );
        let h = build_hierarchy(&source, &TypeTable::builtin()).unwrap();
        let expected = derive_id("RG", &["Benin", "Littoral"]).id;
        assert_eq!(h.divisions[0].parent_id, Some(expected));
    }

    #[test]
    fn dangling_parent_is_emitted_not_rejected() {
        // No row for "Benin / Littoral" itself.
        let source = table(
            &["pays", "region", "commune"],
            &[&["Benin", "", ""], &["Benin", "Littoral", "Cotonou"]],
        );
        let h = build_hierarchy(&source, &TypeTable::builtin()).unwrap();

        assert_eq!(h.divisions.len(), 2);
        let cotonou = &h.divisions[1];
        assert_eq!(cotonou.parent_id.as_deref(), Some("RG-VMF5NC"));
        assert!(!h.divisions.iter().any(|d| d.id == "RG-VMF5NC"));
        assert!(h.skipped.is_empty());
    }

    #[test]
    fn empty_and_gapped_rows_are_skipped_and_reported() {
        let source = table(
            &["pays", "region", "commune"],
            &[
                &["Benin", "", "Cotonou"],
                &["", "", ""],
                &["Benin", "Littoral", ""],
            ],
        );
        let h = build_hierarchy(&source, &TypeTable::builtin()).unwrap();

        assert_eq!(h.divisions.len(), 1);
        assert_eq!(h.divisions[0].slug, "benin.littoral");
        assert_eq!(h.divisions[0].type_id, 2);
        assert_eq!(h.divisions[0].line, 4);

        assert_eq!(h.skipped.gap_rows(), 1);
        assert_eq!(h.skipped.empty_rows(), 1);
        assert_eq!(h.skipped.rows[0].line, 2);
        assert_eq!(h.skipped.rows[0].reason, SkipReason::Gap { column: 1 });
    }

    #[test]
    fn unknown_header_aborts_before_rows() {
        let source = table(&["pays", "county"], &[&["Benin", ""]]);
        let err = build_hierarchy(&source, &TypeTable::builtin()).unwrap_err();
        assert_eq!(err.label, "county");
    }

    #[test]
    fn injected_table_drives_codes() {
        let types = TypeTable::from_entries([("state", "ST"), ("county", "CO")]).unwrap();
        let source = table(&["State", "County"], &[&["Texas", "Travis"]]);
        let h = build_hierarchy(&source, &types).unwrap();

        let travis = &h.divisions[0];
        assert!(travis.id.starts_with("CO-"));
        assert_eq!(travis.parent_id, Some(derive_id("ST", &["Texas"]).id));
    }

    #[test]
    fn identical_rows_give_identical_divisions() {
        let source = table(
            &["pays", "commune"],
            &[&["Benin", "Cotonou"], &[" Benin ", "Cotonou "]],
        );
        let h = build_hierarchy(&source, &TypeTable::builtin()).unwrap();
        assert_eq!(h.divisions[0].id, h.divisions[1].id);
        assert_eq!(h.divisions[0].slug, h.divisions[1].slug);
        assert_eq!(h.divisions[1].name, "Cotonou");
    }

    #[test]
    fn max_depth_tracks_deepest_row() {
        let source = table(
            &["pays", "region", "commune", "quartier"],
            &[&["Benin", "Littoral", "", ""], &["Benin", "", "", ""]],
        );
        let h = build_hierarchy(&source, &TypeTable::builtin()).unwrap();
        assert_eq!(h.max_depth(), 2);

        let empty = build_hierarchy(&table(&["pays"], &[]), &TypeTable::builtin()).unwrap();
        assert_eq!(empty.max_depth(), 0);
        assert_eq!(empty.types.len(), 1);
    }
}
