//! Group-by aggregation of a measure by station or by calendar month.
//!
//! Missing values are skipped inside a group. A group with no values sums
//! to 0 and averages to NaN.

use crate::models::{MonthValue, StationShare, StationValue};
use std::collections::{BTreeMap, HashMap};
use wq_core::{Dataset, Field};
use wq_utils::dates::year_month;

/// Reduction applied to each group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateOp {
    Sum,
    Mean,
}

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    sum: f64,
    count: usize,
}

impl Accumulator {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    fn finish(&self, op: AggregateOp) -> f64 {
        match op {
            AggregateOp::Sum => self.sum,
            AggregateOp::Mean if self.count == 0 => f64::NAN,
            AggregateOp::Mean => self.sum / self.count as f64,
        }
    }
}

/// Aggregate `field` per station, stations in first-encountered order.
///
/// Stations without records do not appear.
pub fn aggregate_by_station(dataset: &Dataset, field: Field, op: AggregateOp) -> Vec<StationValue> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Accumulator)> = Vec::new();
    for record in dataset {
        let slot = *index.entry(record.station.as_str()).or_insert_with(|| {
            groups.push((record.station.as_str(), Accumulator::default()));
            groups.len() - 1
        });
        groups[slot].1.push(record.get(field));
    }
    groups
        .into_iter()
        .map(|(station, acc)| StationValue {
            station: station.to_string(),
            value: acc.finish(op),
        })
        .collect()
}

/// Sum `field` per calendar month, ascending by month.
pub fn aggregate_by_month(dataset: &Dataset, field: Field) -> Vec<MonthValue> {
    let mut groups: BTreeMap<(i32, u32), Accumulator> = BTreeMap::new();
    for record in dataset {
        groups
            .entry(year_month(&record.date()))
            .or_default()
            .push(record.get(field));
    }
    groups
        .into_iter()
        .map(|((year, month), acc)| MonthValue {
            month_year: format!("{:04}-{:02}", year, month),
            value: acc.finish(AggregateOp::Sum),
        })
        .collect()
}

/// Each station's share of the table total, in percent.
///
/// Rows without a finite value are left out of the total and get a NaN
/// share, like a dropped pie slice. A zero total gives NaN everywhere.
pub fn station_shares(table: &[StationValue]) -> Vec<StationShare> {
    let total: f64 = table
        .iter()
        .map(|row| row.value)
        .filter(|v| v.is_finite())
        .sum();
    table
        .iter()
        .map(|row| StationShare {
            station: row.station.clone(),
            value: row.value,
            percent: if total == 0.0 || !row.value.is_finite() {
                f64::NAN
            } else {
                row.value / total * 100.0
            },
        })
        .collect()
}
