//! In-memory table of observations and its CSV loaders.
//!
//! # CSV Format
//!
//! A header row is required. `Station` and `Date` must be present; the
//! measures `pH`, `DO`, `BOD`, `Turbidity`, `Temperature` and `WQI` are
//! optional, and any other column is carried along as text.
//!
//! ```text
//! Date,Station,pH,DO,BOD,Turbidity,Temperature,WQI
//! 2024-01-05,Mill Creek,7.2,8.1,3.0,12.4,9.5,78.0
//! ```

use crate::compression::gunzip;
use crate::error::{Result, WqError};
use crate::record::Record;
use crate::schema::{Column, Schema};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use wq_utils::dates::parse_timestamp;

/// Default dataset shipped with the binary, used when no file is supplied.
pub const BUNDLED_CSV: &str = include_str!("../../fixtures/sample_water_quality_data.csv");

/// Ordered observations plus the schema they were loaded with.
///
/// Order is source-file row order. Nothing is unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    schema: Schema,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(schema: Schema, records: Vec<Record>) -> Dataset {
        Dataset { schema, records }
    }

    pub fn empty(schema: Schema) -> Dataset {
        Dataset::new(schema, Vec::new())
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct station identifiers, in first-encountered order.
    pub fn stations(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.station.as_str()))
            .map(|r| r.station.clone())
            .collect()
    }

    /// Earliest and latest calendar date, or `None` for an empty dataset.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(Record::date).min()?;
        let max = self.records.iter().map(Record::date).max()?;
        Some((min, max))
    }

    /// Load the bundled default dataset.
    pub fn bundled() -> Result<Dataset> {
        Dataset::from_csv_str(BUNDLED_CSV)
    }

    /// Parse a CSV string.
    pub fn from_csv_str(csv_data: &str) -> Result<Dataset> {
        Dataset::from_reader(csv_data.as_bytes())
    }

    /// Read a file. `.gz` files are decompressed first; spreadsheets are
    /// rejected.
    pub fn from_path(path: &Path) -> Result<Dataset> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "xlsx" | "xls" => Err(WqError::UnsupportedFormat(format!(
                "{} (export the sheet as CSV)",
                path.display()
            ))),
            "gz" => {
                let compressed = std::fs::read(path)?;
                let raw = gunzip(&compressed)?;
                Dataset::from_reader(raw.as_slice())
            }
            _ => Dataset::from_reader(std::fs::File::open(path)?),
        }
    }

    /// Parse CSV from any reader.
    ///
    /// Empty, `NaN` or non-numeric measure cells become missing values. A
    /// `Date` cell that does not parse fails the whole load. Station, date
    /// and measure cells are trimmed; extra columns are kept as written.
    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let schema = Schema::from_headers(rdr.headers()?)?;
        let mut records: Vec<Record> = Vec::new();
        let mut non_numeric = 0u32;

        for (index, result) in rdr.records().enumerate() {
            let r = result?;
            // Header is line 1.
            let row = index + 2;
            let mut station = String::new();
            let mut observed_at = None;
            let mut measures = Vec::new();
            let mut extras = Vec::new();

            for (position, column) in schema.columns().iter().enumerate() {
                let raw = r.get(position).unwrap_or("");
                let cell = raw.trim();
                match column {
                    Column::Station => station = cell.to_string(),
                    Column::Date => {
                        let parsed = parse_timestamp(cell).map_err(|_| WqError::DateParse {
                            row,
                            value: cell.to_string(),
                        })?;
                        observed_at = Some(parsed);
                    }
                    Column::Measure(field) => {
                        if cell.is_empty() {
                            continue;
                        }
                        match cell.parse::<f64>() {
                            Ok(v) => measures.push((*field, v)),
                            Err(_) => {
                                log::warn!(
                                    "[WQ Debug] loader: row {} has non-numeric {} value {:?}",
                                    row,
                                    field,
                                    cell
                                );
                                non_numeric += 1;
                            }
                        }
                    }
                    Column::Extra(_) => extras.push(raw.to_string()),
                }
            }

            // Schema validation guarantees a Date column, so this is set.
            let Some(observed_at) = observed_at else {
                return Err(WqError::DateParse { row, value: String::new() });
            };
            let mut record = Record {
                station,
                observed_at,
                measures: Default::default(),
                extras,
            };
            for (field, value) in measures {
                record.set(field, Some(value));
            }
            records.push(record);
        }

        log::info!(
            "[WQ Debug] loader: Loaded {} records, {} non-numeric cells treated as missing",
            records.len(),
            non_numeric
        );
        Ok(Dataset { schema, records })
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
