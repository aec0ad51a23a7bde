//! Decoding of retailer JSON exports into [`RawListing`]s.
//!
//! ## Observed export shape
//!
//! Both retailers export a top-level JSON array of flat objects. The name
//! and price live under configurable keys (see [`FieldMapping`]).
//!
//! - Prices are usually display strings (`"$3.50"`, `"$1.50/kg"`,
//!   `"Price unavailable"`) but occasionally bare numbers (`3.5`). Numbers
//!   are kept as their JSON text so the extractor sees the same digits.
//! - Some rows are `null` or not objects at all; those are skipped.

use pricecmp_core::{FieldMapping, RawListing, Retailer};
use serde_json::Value;

use crate::error::ReconcileError;

/// Decodes one retailer export into raw listings, in document order.
///
/// # Errors
///
/// Returns [`ReconcileError::Deserialize`] if `json` is not valid JSON and
/// [`ReconcileError::InputFormat`] if the top level is not an array.
pub fn parse_listings(
    json: &str,
    retailer: Retailer,
    mapping: &FieldMapping,
) -> Result<Vec<RawListing>, ReconcileError> {
    let document: Value = serde_json::from_str(json)
        .map_err(|source| ReconcileError::Deserialize { retailer, source })?;

    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(ReconcileError::InputFormat {
                retailer,
                reason: format!("expected a JSON array, found {}", value_kind(&other)),
            })
        }
    };

    let mut listings = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(mut fields) => {
                let name = fields
                    .shift_remove(&mapping.name_field)
                    .and_then(|v| match v {
                        Value::String(s) => Some(s),
                        _ => None,
                    });
                let price = fields
                    .shift_remove(&mapping.price_field)
                    .and_then(price_text);
                listings.push(RawListing {
                    name,
                    price,
                    extra: fields,
                });
            }
            other => {
                tracing::warn!(
                    %retailer,
                    index,
                    kind = value_kind(&other),
                    "skipping non-object entry in export"
                );
            }
        }
    }

    Ok(listings)
}

fn price_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: &Value) -> Result<Vec<RawListing>, ReconcileError> {
        parse_listings(
            &value.to_string(),
            Retailer::Coles,
            &FieldMapping::default(),
        )
    }

    #[test]
    fn parses_name_and_string_price() {
        let listings = parse(&json!([{"name": "Coles Banana", "price": "$1.50/kg"}])).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].name.as_deref(), Some("Coles Banana"));
        assert_eq!(listings[0].price.as_deref(), Some("$1.50/kg"));
        assert!(listings[0].extra.is_empty());
    }

    #[test]
    fn numeric_price_becomes_text() {
        let listings = parse(&json!([{"name": "Kale", "price": 3.5}])).unwrap();
        assert_eq!(listings[0].price.as_deref(), Some("3.5"));
    }

    #[test]
    fn missing_or_null_fields_are_none() {
        let listings = parse(&json!([{"price": null}, {"name": 42, "price": true}])).unwrap();
        assert_eq!(listings.len(), 2);
        assert!(listings[0].name.is_none());
        assert!(listings[0].price.is_none());
        assert!(listings[1].name.is_none());
        assert!(listings[1].price.is_none());
    }

    #[test]
    fn unmapped_fields_are_kept_in_order() {
        let listings = parse(&json!([{
            "sku": "123",
            "name": "Kale",
            "url": "https://example.com/kale",
            "price": "$3"
        }]))
        .unwrap();
        let keys: Vec<&str> = listings[0].extra.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["sku", "url"]);
    }

    #[test]
    fn custom_field_mapping() {
        let mapping = FieldMapping {
            name_field: "title".to_string(),
            price_field: "priceText".to_string(),
        };
        let json = json!([{"title": "Fresh Banana", "priceText": "$1.20/kg", "name": "ignored"}]);
        let listings = parse_listings(&json.to_string(), Retailer::Foodland, &mapping).unwrap();
        assert_eq!(listings[0].name.as_deref(), Some("Fresh Banana"));
        assert_eq!(listings[0].price.as_deref(), Some("$1.20/kg"));
        assert!(listings[0].extra.contains_key("name"));
    }

    #[test]
    fn non_object_entries_are_skipped() {
        let listings = parse(&json!([null, "Banana", {"name": "Kale"}, 7])).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].name.as_deref(), Some("Kale"));
    }

    #[test]
    fn empty_array_is_empty() {
        assert!(parse(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_deserialize_error() {
        let err = parse_listings("[{", Retailer::Foodland, &FieldMapping::default()).unwrap_err();
        assert!(matches!(
            err,
            ReconcileError::Deserialize {
                retailer: Retailer::Foodland,
                ..
            }
        ));
    }

    #[test]
    fn top_level_object_is_input_format_error() {
        let err = parse(&json!({"products": []})).unwrap_err();
        assert!(
            matches!(err, ReconcileError::InputFormat { ref reason, .. } if reason.contains("an object"))
        );
    }
}
