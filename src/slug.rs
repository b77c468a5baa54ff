//! Label normalization.
//!
//! Example: "Côte d'Ivoire"  =>  "cote-d-ivoire"
//!
//! Steps:
//! 1) NFD decomposition, nonspacing marks (Mn) dropped (accent stripping)
//! 2) lowercase
//! 3) every run of non `[a-z0-9]` characters collapsed into one `-`
//! 4) leading/trailing `-` stripped

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

pub const SEPARATOR: char = '-';

static NON_ALNUM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("static slug pattern"));

/// Convert arbitrary text into a lowercase ASCII token.
///
/// Input with no ASCII alphanumeric content yields an empty string.
pub fn slugify(text: &str) -> String {
    let stripped: String = text
        .nfd()
        .filter(|c| c.general_category() != GeneralCategory::NonspacingMark)
        .collect();
    let lowered = stripped.to_lowercase();

    let joined = NON_ALNUM_RUN.replace_all(&lowered, SEPARATOR.to_string().as_str());

    joined.trim_matches(SEPARATOR).to_string()
}
