//! Division identifiers.
//!
//! Example: code "CM", path ["Bénin", "Cotonou"]
//!   slug = "benin.cotonou"
//!   id   = "CM-" + first 6 chars of BASE32(SHA-256(slug))  =>  "CM-D2EUZF"
//!
//! Digest, alphabet and truncation length are part of the id format: changing
//! any of them invalidates every id generated before.

use crate::slug::slugify;

use data_encoding::BASE32_NOPAD;
use sha2::{Digest, Sha256};

pub const HASH_CHARS: usize = 6;
pub const SEGMENT_SEPARATOR: &str = ".";
pub const CODE_SEPARATOR: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedId {
    pub id: String,
    pub slug: String,
}

/// Dot-joined slugs of every segment, root first.
pub fn path_slug<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(|segment| slugify(segment.as_ref()))
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

pub fn derive_id<S: AsRef<str>>(code: &str, path: &[S]) -> DerivedId {
    let slug = path_slug(path);
    let digest = Sha256::digest(slug.as_bytes());
    let encoded = BASE32_NOPAD.encode(&digest);

    let id = format!("{}{}{}", code, CODE_SEPARATOR, &encoded[..HASH_CHARS]);
    DerivedId { id, slug }
}
