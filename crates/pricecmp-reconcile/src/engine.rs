//! Merging of both retailers' listings into one catalog.
//!
//! Each listing is cleaned, priced and keyed on its own; listings are then
//! grouped by match key. Grouping keeps first-seen key order, with Coles
//! listings processed in full before Foodland's, so output order and the
//! display-name tie-break are both deterministic.

use std::collections::{BTreeMap, HashMap};

use pricecmp_core::{Catalog, CatalogEntry, RawListing, Retailer};

use crate::category::categorize;
use crate::match_key::normalize_for_matching;
use crate::name::clean_name;
use crate::price::extract_price;

/// Counts describing what happened to the input during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub coles_records: usize,
    pub foodland_records: usize,
    /// Records dropped because their name was absent or cleaned/keyed to nothing.
    pub unusable_records: usize,
    /// Match keys dropped because no retailer had an extractable price.
    pub unpriced_products: usize,
    pub entries: usize,
    /// Entries priced by both retailers.
    pub matched_entries: usize,
}

impl ReconcileReport {
    #[must_use]
    pub fn records_for(&self, retailer: Retailer) -> usize {
        match retailer {
            Retailer::Coles => self.coles_records,
            Retailer::Foodland => self.foodland_records,
        }
    }
}

/// A listing after per-record cleaning.
#[derive(Debug)]
struct PreparedListing {
    display_name: String,
    match_key: String,
    price: Option<f64>,
}

/// All listings that share one match key.
#[derive(Debug)]
struct Bucket {
    match_key: String,
    display_name: String,
    /// First-seen price per retailer, which may itself be absent.
    prices: Vec<(Retailer, Option<f64>)>,
}

impl Bucket {
    fn record(&mut self, retailer: Retailer, price: Option<f64>) {
        if self.prices.iter().all(|(r, _)| *r != retailer) {
            self.prices.push((retailer, price));
        }
    }
}

/// Insertion-ordered grouping of prepared listings by match key.
#[derive(Debug, Default)]
struct Grouping {
    buckets: Vec<Bucket>,
    index: HashMap<String, usize>,
}

impl Grouping {
    fn add(&mut self, retailer: Retailer, listing: PreparedListing) {
        if let Some(&pos) = self.index.get(&listing.match_key) {
            self.buckets[pos].record(retailer, listing.price);
            return;
        }

        self.index
            .insert(listing.match_key.clone(), self.buckets.len());
        self.buckets.push(Bucket {
            match_key: listing.match_key,
            display_name: listing.display_name,
            prices: vec![(retailer, listing.price)],
        });
    }
}

fn prepare(listing: &RawListing) -> Option<PreparedListing> {
    let display_name = clean_name(listing.name.as_deref())?;
    let match_key = normalize_for_matching(Some(&display_name));
    if match_key.is_empty() {
        return None;
    }

    Some(PreparedListing {
        display_name,
        match_key,
        price: extract_price(listing.price.as_deref()),
    })
}

/// Reconciles both retailers' listings into a catalog.
///
/// Never fails: unusable records and unpriced products are dropped.
#[must_use]
pub fn reconcile(coles: &[RawListing], foodland: &[RawListing]) -> Catalog {
    reconcile_with_report(coles, foodland).0
}

/// Like [`reconcile`], also returning counts of what was kept and dropped.
#[must_use]
pub fn reconcile_with_report(
    coles: &[RawListing],
    foodland: &[RawListing],
) -> (Catalog, ReconcileReport) {
    let mut report = ReconcileReport {
        coles_records: coles.len(),
        foodland_records: foodland.len(),
        ..ReconcileReport::default()
    };

    let mut grouping = Grouping::default();
    for (retailer, listings) in [(Retailer::Coles, coles), (Retailer::Foodland, foodland)] {
        for (index, listing) in listings.iter().enumerate() {
            if let Some(prepared) = prepare(listing) {
                grouping.add(retailer, prepared);
            } else {
                report.unusable_records += 1;
                tracing::trace!(%retailer, index, name = ?listing.name, "dropping unusable record");
            }
        }
    }

    let mut catalog = Catalog::with_capacity(grouping.buckets.len());
    for bucket in grouping.buckets {
        let prices: BTreeMap<Retailer, f64> = bucket
            .prices
            .iter()
            .filter_map(|(r, p)| p.map(|p| (*r, p)))
            .collect();

        if prices.is_empty() {
            report.unpriced_products += 1;
            tracing::trace!(match_key = %bucket.match_key, "dropping unpriced product");
            continue;
        }

        let category = categorize(&bucket.display_name).to_string();
        catalog.push(CatalogEntry {
            match_key: bucket.match_key,
            name: bucket.display_name,
            category,
            prices,
        });
    }

    report.entries = catalog.len();
    report.matched_entries = catalog.iter().filter(|e| e.is_matched()).count();

    tracing::debug!(
        coles_records = report.coles_records,
        foodland_records = report.foodland_records,
        unusable_records = report.unusable_records,
        unpriced_products = report.unpriced_products,
        entries = report.entries,
        matched_entries = report.matched_entries,
        "reconciliation complete"
    );

    (catalog, report)
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
