//! Match-key normalization for cross-retailer product equivalence.
//!
//! A match key is never displayed. Two listings land in the same catalog
//! entry exactly when their keys are equal.

use std::sync::LazyLock;

use regex::Regex;

/// Size, quality, packaging and preparation words that do not change what
/// the product is.
pub const MODIFIER_WORDS: &[&str] = &[
    "baby",
    "mini",
    "small",
    "medium",
    "large",
    "whole",
    "half",
    "loose",
    "prepacked",
    "prepack",
    "bunch",
    "cut",
    "sliced",
    "trimmed",
    "washed",
    "organic",
    "premium",
    "fresh",
];

static MODIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = MODIFIER_WORDS.join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b")).expect("valid modifier regex")
});

/// Derives the match key for a display or raw name.
///
/// Lower-cases, removes every whole-word modifier from [`MODIFIER_WORDS`],
/// then collapses whitespace. Absent or empty input gives an empty key.
/// The result is a fixed point: normalizing a key returns it unchanged.
#[must_use]
pub fn normalize_for_matching(name: Option<&str>) -> String {
    let Some(name) = name.filter(|s| !s.is_empty()) else {
        return String::new();
    };

    let lower = name.to_lowercase();
    let stripped = MODIFIER_RE.replace_all(&lower, "");

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
