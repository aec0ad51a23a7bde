//! Price extraction from free-form retailer price text.

use std::sync::LazyLock;

use regex::Regex;

/// Optional `$`, digits, optional decimal point, optional fraction digits.
/// Only ASCII digits count; other Unicode decimal digits never match.
static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?([0-9]+\.?[0-9]*)").expect("valid price regex"));

/// Extracts the first price-like number from `raw`.
///
/// The leftmost match wins, so `"2 for $5"` yields `2.0`. Returns `None`
/// when the input is absent, empty, or contains no digits; `"$0.00"` is
/// a real price of zero, not an absent one. A digit run too long to fit a
/// finite `f64` is treated as no price.
#[must_use]
pub fn extract_price(raw: Option<&str>) -> Option<f64> {
    let raw = raw.filter(|s| !s.is_empty())?;
    let caps = PRICE_RE.captures(raw)?;
    caps.get(1)?
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
}
