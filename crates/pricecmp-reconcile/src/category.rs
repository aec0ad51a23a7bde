//! Keyword categorization of product names into display symbols.

/// Symbol for names that match no keyword.
pub const FALLBACK_SYMBOL: &str = "\u{1F6D2}";

/// Ordered `(keyword, symbol)` table. The first keyword contained in the
/// lower-cased name wins, so order is significant: `"apple"` precedes
/// `"pineapple"`, `"grape"` precedes `"grapefruit"`, and `"watermelon"`
/// precedes `"melon"`.
pub const CATEGORY_KEYWORDS: &[(&str, &str)] = &[
    ("banana", "\u{1F34C}"),
    ("strawberr", "\u{1F353}"),
    ("avocado", "\u{1F951}"),
    ("watermelon", "\u{1F349}"),
    ("broccol", "\u{1F966}"),
    ("capsicum", "\u{1FAD1}"),
    ("pepper", "\u{1FAD1}"),
    ("cucumber", "\u{1F952}"),
    ("kiwi", "\u{1F95D}"),
    ("spinach", "\u{1F96C}"),
    ("grape", "\u{1F347}"),
    ("raspberr", "\u{1FAD0}"),
    ("blueberr", "\u{1FAD0}"),
    ("apple", "\u{1F34E}"),
    ("salad", "\u{1F957}"),
    ("lettuce", "\u{1F96C}"),
    ("carrot", "\u{1F955}"),
    ("zucchini", "\u{1F952}"),
    ("nectarine", "\u{1F351}"),
    ("pumpkin", "\u{1F383}"),
    ("mushroom", "\u{1F344}"),
    ("melon", "\u{1F348}"),
    ("mango", "\u{1F96D}"),
    ("orange", "\u{1F34A}"),
    ("mandarin", "\u{1F34A}"),
    ("lime", "\u{1F34B}"),
    ("lemon", "\u{1F34B}"),
    ("tomato", "\u{1F345}"),
    ("potato", "\u{1F954}"),
    ("onion", "\u{1F9C5}"),
    ("celery", "\u{1F96C}"),
    ("cauliflower", "\u{1F966}"),
    ("cherry", "\u{1F352}"),
    ("cherries", "\u{1F352}"),
    ("pineapple", "\u{1F34D}"),
    ("peach", "\u{1F351}"),
    ("plum", "\u{1F351}"),
    ("eggplant", "\u{1F346}"),
    ("ginger", "\u{1FADA}"),
    ("asparagus", "\u{1F952}"),
    ("pear", "\u{1F350}"),
    ("corn", "\u{1F33D}"),
    ("beetroot", "\u{1F96C}"),
    ("apricot", "\u{1F351}"),
    ("bean", "\u{1FAD8}"),
    ("brussel", "\u{1F96C}"),
    ("peas", "\u{1FADB}"),
    ("garlic", "\u{1F9C4}"),
    ("kale", "\u{1F96C}"),
    ("herb", "\u{1F33F}"),
    ("mint", "\u{1F33F}"),
    ("basil", "\u{1F33F}"),
    ("parsley", "\u{1F33F}"),
    ("coriander", "\u{1F33F}"),
    ("chilli", "\u{1F336}\u{FE0F}"),
    ("cabbage", "\u{1F96C}"),
    ("leek", "\u{1F96C}"),
    ("grapefruit", "\u{1F34A}"),
    ("passionfruit", "\u{1F965}"),
    ("papaya", "\u{1F96D}"),
    ("fig", "\u{1F347}"),
    ("date", "\u{1FAD8}"),
    ("coconut", "\u{1F965}"),
    ("pomegranate", "\u{1F34E}"),
    ("rhubarb", "\u{1F96C}"),
    ("parsnip", "\u{1F955}"),
    ("nuts", "\u{1F95C}"),
    ("nut", "\u{1F95C}"),
    ("pretzel", "\u{1F968}"),
    ("snack", "\u{1F37F}"),
];

/// Returns the display symbol for `name`.
///
/// Matching is case-insensitive substring containment against
/// [`CATEGORY_KEYWORDS`] in table order; [`FALLBACK_SYMBOL`] when nothing
/// matches.
#[must_use]
pub fn categorize(name: &str) -> &'static str {
    let lower = name.to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(FALLBACK_SYMBOL, |(_, symbol)| *symbol)
}
