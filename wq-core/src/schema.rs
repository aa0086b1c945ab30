//! Column layout of a loaded dataset, resolved once from the header row.

use crate::error::{Result, WqError};
use crate::field::Field;
use csv::StringRecord;

/// Header of the station identifier column.
pub const STATION_COLUMN: &str = "Station";

/// Header of the observation date column.
pub const DATE_COLUMN: &str = "Date";

/// One column of the source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    Station,
    Date,
    Measure(Field),
    /// Any other column, kept verbatim so exports can pass it through.
    Extra(String),
}

impl Column {
    pub fn name(&self) -> &str {
        match self {
            Column::Station => STATION_COLUMN,
            Column::Date => DATE_COLUMN,
            Column::Measure(field) => field.column_name(),
            Column::Extra(name) => name,
        }
    }
}

/// Ordered column descriptor for a [`crate::dataset::Dataset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Resolve a header row.
    ///
    /// `Station` and `Date` are required. A header repeated after its first
    /// occurrence is treated as an extra column.
    pub fn from_headers(headers: &StringRecord) -> Result<Schema> {
        let mut columns: Vec<Column> = Vec::with_capacity(headers.len());
        for header in headers.iter() {
            let name = header.trim();
            let column = match name {
                STATION_COLUMN => Column::Station,
                DATE_COLUMN => Column::Date,
                other => match Field::from_column_name(other) {
                    Some(field) => Column::Measure(field),
                    None => Column::Extra(other.to_string()),
                },
            };
            if !matches!(column, Column::Extra(_)) && columns.contains(&column) {
                columns.push(Column::Extra(name.to_string()));
            } else {
                columns.push(column);
            }
        }
        let schema = Schema { columns };
        schema.validate()?;
        Ok(schema)
    }

    /// `Station`, `Date`, then the given measures.
    pub fn with_fields(fields: &[Field]) -> Schema {
        let mut columns = vec![Column::Station, Column::Date];
        for field in fields {
            if !columns.contains(&Column::Measure(*field)) {
                columns.push(Column::Measure(*field));
            }
        }
        Schema { columns }
    }

    /// `Station`, `Date` and every known measure.
    pub fn standard() -> Schema {
        Schema::with_fields(&Field::ALL)
    }

    fn validate(&self) -> Result<()> {
        for (required, name) in [(Column::Station, STATION_COLUMN), (Column::Date, DATE_COLUMN)] {
            if !self.columns.contains(&required) {
                return Err(WqError::MissingColumn(name.to_string()));
            }
        }
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Whether the measure is a column of this table.
    pub fn has(&self, field: Field) -> bool {
        self.columns.contains(&Column::Measure(field))
    }

    /// Measures present, in column order.
    pub fn fields(&self) -> Vec<Field> {
        self.columns
            .iter()
            .filter_map(|c| match c {
                Column::Measure(field) => Some(*field),
                _ => None,
            })
            .collect()
    }

    /// Measures from `wanted` that this schema lacks.
    pub fn missing(&self, wanted: &[Field]) -> Vec<Field> {
        wanted.iter().copied().filter(|f| !self.has(*f)).collect()
    }

    /// Header row for CSV output.
    pub fn header_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_and_extra_columns() {
        let headers = StringRecord::from(vec!["Date", "Station", "pH", "Notes", "WQI"]);
        let schema = Schema::from_headers(&headers).unwrap();
        assert_eq!(
            schema.columns(),
            &[
                Column::Date,
                Column::Station,
                Column::Measure(Field::Ph),
                Column::Extra("Notes".to_string()),
                Column::Measure(Field::Wqi),
            ]
        );
        assert!(schema.has(Field::Wqi));
        assert!(!schema.has(Field::Bod));
        assert_eq!(schema.fields(), vec![Field::Ph, Field::Wqi]);
        assert_eq!(schema.missing(&[Field::Wqi, Field::Do, Field::Bod]), vec![Field::Do, Field::Bod]);
    }

    #[test]
    fn requires_station_and_date() {
        let no_station = StringRecord::from(vec!["Date", "pH"]);
        match Schema::from_headers(&no_station) {
            Err(WqError::MissingColumn(name)) => assert_eq!(name, "Station"),
            other => panic!("expected missing Station, got {:?}", other),
        }
        let no_date = StringRecord::from(vec!["Station", "pH"]);
        match Schema::from_headers(&no_date) {
            Err(WqError::MissingColumn(name)) => assert_eq!(name, "Date"),
            other => panic!("expected missing Date, got {:?}", other),
        }
    }

    #[test]
    fn repeated_header_becomes_extra() {
        let headers = StringRecord::from(vec!["Station", "Date", "BOD", "BOD"]);
        let schema = Schema::from_headers(&headers).unwrap();
        assert_eq!(schema.columns()[3], Column::Extra("BOD".to_string()));
        assert_eq!(schema.header_names(), vec!["Station", "Date", "BOD", "BOD"]);
    }
}
