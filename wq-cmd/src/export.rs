//! Write the dashboard's downloadable tables to a directory.

use anyhow::Context;
use log::{info, warn};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use wq_core::{Dataset, Field, FilterSpec};
use wq_data::export::{write_categories, write_dataset, write_month_table, write_station_table};
use wq_data::{aggregate_by_month, aggregate_by_station, categorize, filter_records, AggregateOp};

/// Filtered rows as loaded.
pub const DATA_FILE: &str = "Data.csv";
/// Filtered rows plus their WQI category.
pub const CATEGORIES_FILE: &str = "water_quality_categories.csv";
/// Monthly WQI totals.
pub const TIMESERIES_FILE: &str = "Timeseries.csv";
/// Total BOD per station.
pub const STATION_BOD_FILE: &str = "station_bod.csv";

fn create(dir: &Path, name: &str) -> anyhow::Result<BufWriter<File>> {
    let path = dir.join(name);
    let file = File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Write every table that the dataset's columns allow; returns the paths
/// written.
pub fn export_tables(dataset: &Dataset, spec: &FilterSpec, out_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let filtered = filter_records(dataset, spec);
    let schema = filtered.schema();
    let mut written = Vec::new();

    write_dataset(&filtered, create(out_dir, DATA_FILE)?)?;
    written.push(out_dir.join(DATA_FILE));

    if schema.has(Field::Wqi) {
        write_categories(&categorize(&filtered), create(out_dir, CATEGORIES_FILE)?)?;
        written.push(out_dir.join(CATEGORIES_FILE));

        let monthly = aggregate_by_month(&filtered, Field::Wqi);
        write_month_table(&monthly, Field::Wqi, create(out_dir, TIMESERIES_FILE)?)?;
        written.push(out_dir.join(TIMESERIES_FILE));
    } else {
        warn!("WQI column missing: skipping {} and {}", CATEGORIES_FILE, TIMESERIES_FILE);
    }

    if schema.has(Field::Bod) {
        let totals = aggregate_by_station(&filtered, Field::Bod, AggregateOp::Sum);
        write_station_table(&totals, Field::Bod, create(out_dir, STATION_BOD_FILE)?)?;
        written.push(out_dir.join(STATION_BOD_FILE));
    } else {
        warn!("BOD column missing: skipping {}", STATION_BOD_FILE);
    }

    Ok(written)
}

pub fn run_export(dataset: &Dataset, spec: &FilterSpec, out_dir: &Path) -> anyhow::Result<()> {
    let written = export_tables(dataset, spec, out_dir)?;
    for path in &written {
        info!("Wrote {}", path.display());
        println!("{}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wq_data::export::{read_month_table, read_station_table};

    #[test]
    fn export_writes_all_tables() {
        let csv = "\
Station,Date,BOD,WQI
StationA,2024-01-05,3,45
StationA,2024-02-10,5,120
StationB,2024-01-20,2,75
";
        let dataset = Dataset::from_csv_str(csv).unwrap();
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let written = export_tables(&dataset, &FilterSpec::covering(&dataset), dir).unwrap();
        assert_eq!(written.len(), 4);

        let reloaded = Dataset::from_path(&dir.join(DATA_FILE)).unwrap();
        assert_eq!(reloaded, dataset);

        let (_, totals) = read_station_table(File::open(dir.join(STATION_BOD_FILE)).unwrap()).unwrap();
        let totals: Vec<_> = totals.iter().map(|r| (r.station.as_str(), r.value)).collect();
        assert_eq!(totals, vec![("StationA", 8.0), ("StationB", 2.0)]);

        let (field, monthly) = read_month_table(File::open(dir.join(TIMESERIES_FILE)).unwrap()).unwrap();
        assert_eq!(field, Field::Wqi);
        assert_eq!(monthly.len(), 2);

        let categories = std::fs::read_to_string(dir.join(CATEGORIES_FILE)).unwrap();
        assert!(categories.lines().next().unwrap().ends_with(",Category"));
    }

    #[test]
    fn export_creates_nested_output_dir() {
        let dataset = Dataset::from_csv_str("Station,Date,WQI\nA,2024-01-05,60\n").unwrap();
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("reports").join("2024");
        let written = export_tables(&dataset, &FilterSpec::covering(&dataset), &out_dir).unwrap();
        assert_eq!(written.len(), 3);
        assert!(written.iter().all(|p| p.starts_with(&out_dir) && p.is_file()));
    }

    #[test]
    fn export_skips_tables_for_missing_columns() {
        let dataset = Dataset::from_csv_str("Station,Date,pH\nA,2024-01-05,7.1\n").unwrap();
        let temp_dir = TempDir::new().unwrap();
        let written = export_tables(&dataset, &FilterSpec::covering(&dataset), temp_dir.path()).unwrap();
        assert_eq!(written, vec![temp_dir.path().join(DATA_FILE)]);
    }
}
