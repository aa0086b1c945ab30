use wq_core::{Dataset, FilterSpec};

/// Records whose station is selected and whose calendar date lies inside
/// the filter's inclusive range, in input order. The schema is kept.
///
/// No match is an empty dataset, not an error.
pub fn filter_records(dataset: &Dataset, spec: &FilterSpec) -> Dataset {
    let records = dataset
        .iter()
        .filter(|r| spec.matches(r))
        .cloned()
        .collect::<Vec<_>>();
    log::info!(
        "[WQ Debug] filter: kept {} of {} records ({} stations, {} to {})",
        records.len(),
        dataset.len(),
        spec.stations.len(),
        spec.start_date,
        spec.end_date
    );
    Dataset::new(dataset.schema().clone(), records)
}
