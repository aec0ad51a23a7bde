//! End-to-end tests for decoding two retailer exports and reconciling them
//! into the serialized catalog a consumer reads.

use serde_json::json;

use pricecmp_core::{FieldMapping, RawListing, Retailer};
use pricecmp_reconcile::{categorize, parse_listings, reconcile, reconcile_with_report};

fn decode(value: &serde_json::Value, retailer: Retailer) -> Vec<RawListing> {
    parse_listings(&value.to_string(), retailer, &FieldMapping::default())
        .expect("fixture should decode")
}

fn coles_export() -> serde_json::Value {
    json!([
        {"name": "Coles Banana", "price": "$1.50/kg", "url": "https://coles.example/banana"},
        {"name": "Coles Coles Baby Spinach", "price": "$2.50 each"},
        {"name": "Coles Kale", "price": "Price unavailable"},
        {"name": "Coles Green Capsicum | 1234", "price": 0.98},
        {"name": null, "price": "$9.99"},
        {"name": "Coles Potatoes Washed", "price": "$4.00"}
    ])
}

fn foodland_export() -> serde_json::Value {
    json!([
        {"name": "Fresh Banana", "price": "$1.20/kg"},
        {"name": "Organic Spinach", "price": "$3.10"},
        {"name": "Kale", "price": "Price unavailable"},
        {"name": "Sunfresh Pineapple", "price": "$4.50"},
        "not a record",
        {"name": "Green Capsicum", "price": "$1.05 ea"}
    ])
}

// ---------------------------------------------------------------------------
// Full pipeline
// ---------------------------------------------------------------------------

#[test]
fn exports_reconcile_into_expected_catalog() {
    let coles = decode(&coles_export(), Retailer::Coles);
    let foodland = decode(&foodland_export(), Retailer::Foodland);
    assert_eq!(coles.len(), 6);
    assert_eq!(foodland.len(), 5);

    let catalog = reconcile(&coles, &foodland);
    let value = serde_json::to_value(&catalog).expect("catalog serializes");

    assert_eq!(
        value,
        json!([
            {
                "name": "Banana",
                "category": categorize("Banana"),
                "prices": {"coles": 1.5, "foodland": 1.2}
            },
            {
                "name": "Baby Spinach",
                "category": categorize("Baby Spinach"),
                "prices": {"coles": 2.5, "foodland": 3.1}
            },
            {
                "name": "Green Capsicum",
                "category": categorize("Green Capsicum"),
                "prices": {"coles": 0.98, "foodland": 1.05}
            },
            {
                "name": "Potatoes Washed",
                "category": categorize("Potatoes Washed"),
                "prices": {"coles": 4.0}
            },
            {
                "name": "Pineapple",
                "category": categorize("Pineapple"),
                "prices": {"foodland": 4.5}
            }
        ])
    );
}

#[test]
fn report_matches_catalog() {
    let coles = decode(&coles_export(), Retailer::Coles);
    let foodland = decode(&foodland_export(), Retailer::Foodland);

    let (catalog, report) = reconcile_with_report(&coles, &foodland);

    assert_eq!(report.coles_records, 6);
    assert_eq!(report.foodland_records, 5);
    assert_eq!(report.unusable_records, 1);
    assert_eq!(report.unpriced_products, 1);
    assert_eq!(report.entries, catalog.len());
    assert_eq!(report.matched_entries, 3);
}

#[test]
fn every_entry_has_a_price() {
    let coles = decode(&coles_export(), Retailer::Coles);
    let foodland = decode(&foodland_export(), Retailer::Foodland);

    for entry in reconcile(&coles, &foodland) {
        assert!(!entry.prices.is_empty(), "{} has no price", entry.name);
    }
}

#[test]
fn match_keys_are_unique() {
    let coles = decode(&coles_export(), Retailer::Coles);
    let foodland = decode(&foodland_export(), Retailer::Foodland);

    let catalog = reconcile(&coles, &foodland);
    let mut keys: Vec<&str> = catalog.iter().map(|e| e.match_key.as_str()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), catalog.len());
}

#[test]
fn reconciling_twice_is_byte_identical() {
    let coles = decode(&coles_export(), Retailer::Coles);
    let foodland = decode(&foodland_export(), Retailer::Foodland);

    let first = serde_json::to_string(&reconcile(&coles, &foodland)).unwrap();
    let second = serde_json::to_string(&reconcile(&coles, &foodland)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn cheapest_reflects_merged_prices() {
    let coles = decode(&coles_export(), Retailer::Coles);
    let foodland = decode(&foodland_export(), Retailer::Foodland);

    let catalog = reconcile(&coles, &foodland);
    let banana = catalog.iter().find(|e| e.name == "Banana").unwrap();
    assert_eq!(banana.cheapest(), Some((Retailer::Foodland, 1.2)));
}
