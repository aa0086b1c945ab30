//! Dataset loading and filter construction from command-line flags.

use crate::FilterArgs;
use anyhow::Context;
use log::{info, warn};
use std::path::Path;
use wq_core::{Dataset, FilterSpec};

/// Load the input file, or the bundled dataset when no path is given.
pub fn load_dataset(path: Option<&Path>) -> anyhow::Result<Dataset> {
    let dataset = match path {
        Some(path) => Dataset::from_path(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => {
            info!("Using default dataset bundled with the binary.");
            Dataset::bundled().context("Failed to load bundled dataset")?
        }
    };
    info!(
        "Loaded {} records from {} stations",
        dataset.len(),
        dataset.stations().len()
    );
    Ok(dataset)
}

/// Start from "everything" and narrow by whatever flags were given.
pub fn build_filter(dataset: &Dataset, args: &FilterArgs) -> FilterSpec {
    let mut spec = FilterSpec::covering(dataset);
    if !args.stations.is_empty() {
        spec.stations = args.stations.iter().cloned().collect();
    }
    if let Some(start) = args.start {
        spec.start_date = start;
    }
    if let Some(end) = args.end {
        spec.end_date = end;
    }
    if spec.date_range().is_inverted() {
        warn!(
            "Start date {} is after end date {}: no records will match",
            spec.start_date, spec.end_date
        );
    }
    spec
}
