//! CSV encoding of derived tables for download.
//!
//! Every table gets a header row named after its in-memory columns. Floats
//! use Rust's shortest round-trip formatting, missing values are empty
//! cells.
//!
//! # CSV Formats
//!
//! - **Dataset**: the schema's columns in source order
//! - **Categories**: the dataset columns plus `Category`
//! - **Station table**: `Station,<field>`
//! - **Month table**: `month_year,<field>`

use crate::categorize::CategoryTable;
use crate::models::{MonthValue, StationValue};
use csv::{ReaderBuilder, StringRecord, Writer};
use std::io::{Read, Write};
use wq_core::schema::STATION_COLUMN;
use wq_core::{Column, Dataset, Field, Record, Result, WqError};
use wq_utils::dates::format_timestamp;

/// Header of the month column in month tables.
pub const MONTH_COLUMN: &str = "month_year";

/// Header of the category column in category tables.
pub const CATEGORY_COLUMN: &str = "Category";

fn format_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn record_cells(dataset: &Dataset, record: &Record) -> Vec<String> {
    let mut extras = record.extras.iter();
    dataset
        .schema()
        .columns()
        .iter()
        .map(|column| match column {
            Column::Station => record.station.clone(),
            Column::Date => format_timestamp(&record.observed_at),
            Column::Measure(field) => format_value(record.get(*field)),
            Column::Extra(_) => extras.next().cloned().unwrap_or_default(),
        })
        .collect()
}

/// Write a dataset with its own schema's header.
pub fn write_dataset<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(dataset.schema().header_names())?;
    for record in dataset {
        wtr.write_record(record_cells(dataset, record))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a categorised dataset: every dataset column plus `Category`.
pub fn write_categories<W: Write>(table: &CategoryTable<'_>, writer: W) -> Result<()> {
    let dataset = table.dataset();
    let mut wtr = Writer::from_writer(writer);
    let mut header = dataset.schema().header_names();
    header.push(CATEGORY_COLUMN);
    wtr.write_record(header)?;
    for (record, category) in table.rows() {
        let mut cells = record_cells(dataset, record);
        cells.push(category.map(|c| c.label().to_string()).unwrap_or_default());
        wtr.write_record(cells)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a per-station table as `Station,<field>`.
pub fn write_station_table<W: Write>(rows: &[StationValue], field: Field, writer: W) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record([STATION_COLUMN, field.column_name()])?;
    for row in rows {
        wtr.write_record([row.station.clone(), row.value.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a per-month table as `month_year,<field>`.
pub fn write_month_table<W: Write>(rows: &[MonthValue], field: Field, writer: W) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record([MONTH_COLUMN, field.column_name()])?;
    for row in rows {
        wtr.write_record([row.month_year.clone(), row.value.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a two-column `<key>,<field>` table back, returning the field from
/// the header and the (key, value) rows.
fn read_pair_table<R: Read>(reader: R, key_column: &str) -> Result<(Field, Vec<(String, f64)>)> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers: StringRecord = rdr.headers()?.clone();
    if headers.get(0).map(str::trim) != Some(key_column) {
        return Err(WqError::MissingColumn(key_column.to_string()));
    }
    let value_header = headers.get(1).unwrap_or("").trim();
    let field = Field::from_column_name(value_header)
        .ok_or_else(|| WqError::MissingColumn(value_header.to_string()))?;

    let mut rows = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let r = result?;
        let key = r.get(0).unwrap_or("").to_string();
        let cell = r.get(1).unwrap_or("").trim();
        let value = cell.parse::<f64>().map_err(|_| WqError::InvalidNumber {
            row: index + 2,
            value: cell.to_string(),
        })?;
        rows.push((key, value));
    }
    Ok((field, rows))
}

/// Parse a table written by [`write_station_table`].
pub fn read_station_table<R: Read>(reader: R) -> Result<(Field, Vec<StationValue>)> {
    let (field, rows) = read_pair_table(reader, STATION_COLUMN)?;
    let rows = rows
        .into_iter()
        .map(|(station, value)| StationValue { station, value })
        .collect();
    Ok((field, rows))
}

/// Parse a table written by [`write_month_table`].
pub fn read_month_table<R: Read>(reader: R) -> Result<(Field, Vec<MonthValue>)> {
    let (field, rows) = read_pair_table(reader, MONTH_COLUMN)?;
    let rows = rows
        .into_iter()
        .map(|(month_year, value)| MonthValue { month_year, value })
        .collect();
    Ok((field, rows))
}
