use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::Retailer;
use crate::ConfigError;

/// Names of the JSON fields that carry a listing's name and price in one
/// retailer's export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    #[serde(default = "default_name_field")]
    pub name_field: String,
    #[serde(default = "default_price_field")]
    pub price_field: String,
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            name_field: default_name_field(),
            price_field: default_price_field(),
        }
    }
}

fn default_name_field() -> String {
    "name".to_string()
}

fn default_price_field() -> String {
    "price".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetailerMapping {
    pub retailer: Retailer,
    #[serde(flatten)]
    pub fields: FieldMapping,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RetailersFile {
    #[serde(default)]
    pub retailers: Vec<RetailerMapping>,
}

impl RetailersFile {
    /// Returns the field mapping for `retailer`, or the `name`/`price`
    /// default when the file does not mention it.
    #[must_use]
    pub fn mapping_for(&self, retailer: Retailer) -> FieldMapping {
        self.retailers
            .iter()
            .find(|m| m.retailer == retailer)
            .map(|m| m.fields.clone())
            .unwrap_or_default()
    }
}

/// Load and validate the retailer field mappings from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_retailers(path: &Path) -> Result<RetailersFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RetailersFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let retailers_file: RetailersFile = serde_yaml::from_str(&content)?;

    validate_retailers(&retailers_file)?;

    Ok(retailers_file)
}

fn validate_retailers(retailers_file: &RetailersFile) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for mapping in &retailers_file.retailers {
        if !seen.insert(mapping.retailer) {
            return Err(ConfigError::Validation(format!(
                "duplicate retailer entry: '{}'",
                mapping.retailer
            )));
        }

        if mapping.fields.name_field.trim().is_empty()
            || mapping.fields.price_field.trim().is_empty()
        {
            return Err(ConfigError::Validation(format!(
                "retailer '{}' has an empty field name",
                mapping.retailer
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "retailers_test.rs"]
mod tests;
