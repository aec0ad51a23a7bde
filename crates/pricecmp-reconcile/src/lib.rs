pub mod category;
pub mod engine;
pub mod error;
pub mod input;
pub mod match_key;
pub mod name;
pub mod price;

pub use category::categorize;
pub use engine::{reconcile, reconcile_with_report, ReconcileReport};
pub use error::ReconcileError;
pub use input::parse_listings;
pub use match_key::normalize_for_matching;
pub use name::clean_name;
pub use price::extract_price;
