use crate::field::Field;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::BTreeMap;

/// A single water quality observation at a station.
///
/// Measures are optional: a field is absent from `measures` when the cell
/// was empty, non-numeric or the column does not exist.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub station: String,
    pub observed_at: NaiveDateTime,
    pub measures: BTreeMap<Field, f64>,
    /// Cells of the schema's extra columns, in column order.
    pub extras: Vec<String>,
}

impl Record {
    /// An observation at midnight on `date` with no measures.
    pub fn new(station: impl Into<String>, date: NaiveDate) -> Record {
        Record {
            station: station.into(),
            observed_at: date.and_time(NaiveTime::MIN),
            measures: BTreeMap::new(),
            extras: Vec::new(),
        }
    }

    /// Builder-style setter for a measure. NaN is treated as missing.
    pub fn with(mut self, field: Field, value: f64) -> Record {
        self.set(field, Some(value));
        self
    }

    pub fn set(&mut self, field: Field, value: Option<f64>) {
        match value {
            Some(v) if !v.is_nan() => {
                self.measures.insert(field, v);
            }
            _ => {
                self.measures.remove(&field);
            }
        }
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        self.measures.get(&field).copied()
    }

    /// Calendar date of the observation, time of day dropped.
    pub fn date(&self) -> NaiveDate {
        self.observed_at.date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_missing() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let record = Record::new("A", date)
            .with(Field::Bod, 3.0)
            .with(Field::Wqi, f64::NAN);
        assert_eq!(record.get(Field::Bod), Some(3.0));
        assert_eq!(record.get(Field::Wqi), None);
        assert_eq!(record.date(), date);
    }

    #[test]
    fn set_none_clears() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let mut record = Record::new("A", date).with(Field::Ph, 7.1);
        record.set(Field::Ph, None);
        assert!(record.measures.is_empty());
    }
}
