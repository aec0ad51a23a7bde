use pricecmp_core::Retailer;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("JSON deserialization error for {retailer} export: {source}")]
    Deserialize {
        retailer: Retailer,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {retailer} export: {reason}")]
    InputFormat { retailer: Retailer, reason: String },
}
