use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Fallback `tracing` filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Where the reconciled catalog is written.
    pub output_path: PathBuf,
    /// Optional YAML file overriding the per-retailer field names.
    pub retailers_path: Option<PathBuf>,
    pub pretty_output: bool,
}
