//! Display-name cleaning for raw retailer product names.

/// Brand and retailer prefixes stripped from the front of a raw name.
///
/// Checked in order; only the first match is removed. Matching is
/// case-sensitive and includes the trailing space.
pub const KNOWN_PREFIXES: &[&str] = &[
    "Coles ",
    "Foodland ",
    "Fresh ",
    "Australian Grown ",
    "Avofresh ",
    "Bendigo Fresh ",
    "Hi Fresh ",
    "Rainbow Fresh ",
    "Herbalicious ",
    "Local Kitchen ",
    "Simply Tasty ",
    "JL King ",
    "Gourmet Garden ",
    "Market Lane ",
    "Perfection ",
    "Birch & Waite ",
    "Natoora ",
    "Nutri V ",
    "Eureka ",
    "Freshology ",
    "Market Square ",
    "Sunfresh ",
];

/// Cleans a raw product name into a display name.
///
/// 1. Trims surrounding whitespace and collapses adjacent duplicate words.
/// 2. Strips at most one prefix from [`KNOWN_PREFIXES`].
/// 3. Truncates at the first `|` (`"Tomato | SKU123"` exports).
/// 4. Collapses adjacent duplicate words again.
///
/// Collapsing before the prefix check lets a doubled prefix such as
/// `"Coles Coles Baby Spinach"` clean to `"Baby Spinach"`.
///
/// Returns `None` for absent or blank input, or when nothing is left after
/// cleaning.
#[must_use]
pub fn clean_name(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    let collapsed = collapse_adjacent_duplicates(raw);
    let mut name = strip_known_prefix(&collapsed);

    if let Some((head, _)) = name.split_once('|') {
        name = head.trim();
    }

    let cleaned = collapse_adjacent_duplicates(name);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

fn strip_known_prefix(name: &str) -> &str {
    KNOWN_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .unwrap_or(name)
}

/// Drops any word equal (case-insensitively) to the word right before it,
/// keeping the first occurrence's casing, and rejoins with single spaces.
fn collapse_adjacent_duplicates(name: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut previous: Option<String> = None;

    for word in name.split_whitespace() {
        let lower = word.to_lowercase();
        if previous.as_deref() != Some(lower.as_str()) {
            kept.push(word);
        }
        previous = Some(lower);
    }

    kept.join(" ")
}

#[cfg(test)]
#[path = "name_test.rs"]
mod tests;
