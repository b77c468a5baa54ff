//! Type table: normalized header label -> two-letter typological code.
//!
//! JSON shape accepted by `--types`:
//! {
//!   "pays": "PA",
//!   "commune": "CM",
//!   ...
//! }
//!
//! Keys are passed through `slugify` on load, so "Zone Sanitaire" and
//! "zone-sanitaire" name the same entry.

use crate::Result;
use crate::error::{TypeTableError, UnknownTypeError};
use crate::slug::slugify;

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Francophone administrative levels known out of the box.
pub const BUILTIN_TYPES: [(&str, &str); 19] = [
    ("pays", "PA"),
    ("region", "RG"),
    ("prefecture", "PR"),
    ("province", "PV"),
    ("departement", "DP"),
    ("district", "DI"),
    ("arrondissement", "AR"),
    ("commune", "CM"),
    ("ville", "VL"),
    ("quartier", "QR"),
    ("localite", "LC"),
    ("secteur-villageois", "SV"),
    ("village", "VG"),
    ("zone-sanitaire", "ZS"),
    ("zone-de-developpement", "ZD"),
    ("zone-electorale", "ZE"),
    ("canton", "CC"),
    ("territoire", "TR"),
    ("metropole", "MT"),
];

/// Immutable lookup passed explicitly to everything that resolves types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTable {
    codes: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawTypeTable(BTreeMap<String, String>);

impl TypeTable {
    pub fn builtin() -> Self {
        let codes = BUILTIN_TYPES
            .iter()
            .map(|(slug, code)| (slug.to_string(), code.to_string()))
            .collect();
        Self { codes }
    }

    /// Build a table from `(label, code)` pairs, normalizing labels.
    pub fn from_entries<I, K, V>(entries: I) -> std::result::Result<Self, TypeTableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut codes: BTreeMap<String, String> = BTreeMap::new();
        let mut raw_keys: BTreeMap<String, String> = BTreeMap::new();
        let mut code_owner: BTreeMap<String, String> = BTreeMap::new();

        for (key, code) in entries {
            let key = key.as_ref();
            let code = code.as_ref().trim();
            let slug = slugify(key);

            if slug.is_empty() {
                return Err(TypeTableError::EmptyKey {
                    key: key.to_string(),
                });
            }
            if let Some(prev) = raw_keys.insert(slug.clone(), key.to_string()) {
                return Err(TypeTableError::DuplicateKey {
                    first: prev,
                    second: key.to_string(),
                    slug,
                });
            }
            if !is_valid_code(code) {
                return Err(TypeTableError::InvalidCode {
                    slug,
                    code: code.to_string(),
                });
            }
            if let Some(prev) = code_owner.insert(code.to_string(), slug.clone()) {
                return Err(TypeTableError::DuplicateCode {
                    code: code.to_string(),
                    first: prev,
                    second: slug,
                });
            }

            codes.insert(slug, code.to_string());
        }

        Ok(Self { codes })
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: RawTypeTable = serde_json::from_str(text).context("parse type table JSON")?;
        Ok(Self::from_entries(raw.0)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read type table {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("load type table {}", path.display()))
    }

    /// Look up the code for a header label.
    pub fn resolve(&self, label: &str) -> std::result::Result<&str, UnknownTypeError> {
        let slug = slugify(label);
        match self.codes.get(&slug) {
            Some(code) => Ok(code.as_str()),
            None => Err(UnknownTypeError {
                label: label.to_string(),
                slug,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }
}

fn is_valid_code(code: &str) -> bool {
    code.len() == 2
        && code
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}
