use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A retailer whose scraped export feeds the catalog.
///
/// Declaration order is the merge priority: records from earlier retailers
/// are processed first, so their display names win when two retailers land
/// on the same match key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Retailer {
    Coles,
    Foodland,
}

impl Retailer {
    /// Every known retailer, in merge priority order.
    pub const ALL: [Retailer; 2] = [Retailer::Coles, Retailer::Foodland];
}

impl std::fmt::Display for Retailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Retailer::Coles => write!(f, "coles"),
            Retailer::Foodland => write!(f, "foodland"),
        }
    }
}

/// One retailer record exactly as scraped, after field mapping.
///
/// Both `name` and `price` are kept as raw text; cleaning and price
/// extraction happen during reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    pub name: Option<String>,
    /// Free-form price text, e.g. `"$3.50 each"` or `"Price unavailable"`.
    pub price: Option<String>,
    /// Retailer-specific fields that are not part of the mapping.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RawListing {
    /// Builds a listing with only a name and a price, as used by most tests
    /// and by callers that already extracted the two fields.
    #[must_use]
    pub fn new(name: Option<&str>, price: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_owned),
            price: price.map(str::to_owned),
            extra: serde_json::Map::new(),
        }
    }
}

/// A merged, price-bearing product in the output catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Normalized equivalence key. Identity within a run; never emitted.
    #[serde(skip)]
    pub match_key: String,
    /// Display name taken from the first record seen for this key.
    pub name: String,
    /// Display symbol assigned by keyword categorization.
    pub category: String,
    /// Price per retailer. Only retailers with an extractable price appear.
    pub prices: BTreeMap<Retailer, f64>,
}

impl CatalogEntry {
    #[must_use]
    pub fn price_for(&self, retailer: Retailer) -> Option<f64> {
        self.prices.get(&retailer).copied()
    }

    /// Returns `true` when every known retailer priced this product.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        Retailer::ALL.iter().all(|r| self.prices.contains_key(r))
    }

    /// Returns the retailer offering the lowest price.
    ///
    /// Ties go to the retailer that comes first in [`Retailer::ALL`].
    #[must_use]
    pub fn cheapest(&self) -> Option<(Retailer, f64)> {
        self.prices
            .iter()
            .map(|(r, p)| (*r, *p))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// The full catalog for one run, in bucket discovery order.
pub type Catalog = Vec<CatalogEntry>;
