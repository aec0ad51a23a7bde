//! The reconcile command: read both exports, merge them and write the
//! catalog.
//!
//! Unreadable or malformed export files abort the run. Individual bad
//! records inside an export are dropped by the reconciler and only counted.

use std::path::Path;

use anyhow::Context;
use pricecmp_core::{Catalog, FieldMapping, RawListing, Retailer, RetailersFile};
use pricecmp_reconcile::ReconcileReport;

#[derive(Debug)]
pub(crate) struct RunOptions<'a> {
    pub coles_path: &'a Path,
    pub foodland_path: &'a Path,
    pub output_path: &'a Path,
    pub retailers_path: Option<&'a Path>,
    pub pretty: bool,
    pub dry_run: bool,
}

/// Run one full reconciliation and, unless `dry_run` is set, replace the
/// catalog at `output_path`.
///
/// # Errors
///
/// Returns an error if the field mapping or either export cannot be read
/// or decoded, or if the catalog cannot be written.
pub(crate) fn run_reconcile(opts: &RunOptions<'_>) -> anyhow::Result<ReconcileReport> {
    let mappings = load_mappings(opts.retailers_path)?;

    tracing::info!(
        coles = %opts.coles_path.display(),
        foodland = %opts.foodland_path.display(),
        "loading exports"
    );
    let coles = read_export(
        opts.coles_path,
        Retailer::Coles,
        &mappings.mapping_for(Retailer::Coles),
    )?;
    let foodland = read_export(
        opts.foodland_path,
        Retailer::Foodland,
        &mappings.mapping_for(Retailer::Foodland),
    )?;
    tracing::info!(
        coles_entries = coles.len(),
        foodland_entries = foodland.len(),
        "exports loaded"
    );

    let (catalog, report) = pricecmp_reconcile::reconcile_with_report(&coles, &foodland);

    if opts.dry_run {
        println!(
            "dry-run: would write {} products to {}",
            catalog.len(),
            opts.output_path.display()
        );
    } else {
        write_catalog(opts.output_path, &catalog, opts.pretty)?;
        println!(
            "wrote {} products to {}",
            catalog.len(),
            opts.output_path.display()
        );
    }

    println!(
        "  priced at both retailers: {}, dropped records: {}, unpriced products: {}",
        report.matched_entries, report.unusable_records, report.unpriced_products
    );

    Ok(report)
}

fn load_mappings(path: Option<&Path>) -> anyhow::Result<RetailersFile> {
    match path {
        Some(path) => pricecmp_core::load_retailers(path)
            .with_context(|| format!("failed to load retailer mapping {}", path.display())),
        None => Ok(RetailersFile::default()),
    }
}

fn read_export(
    path: &Path,
    retailer: Retailer,
    mapping: &FieldMapping,
) -> anyhow::Result<Vec<RawListing>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {retailer} export {}", path.display()))?;
    let listings = pricecmp_reconcile::parse_listings(&content, retailer, mapping)
        .with_context(|| format!("failed to decode {retailer} export {}", path.display()))?;
    Ok(listings)
}

fn write_catalog(path: &Path, catalog: &Catalog, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(catalog)?
    } else {
        serde_json::to_string(catalog)?
    };
    std::fs::write(path, json)
        .with_context(|| format!("failed to write catalog {}", path.display()))?;
    Ok(())
}
