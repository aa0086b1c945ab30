//! Point extraction for the line and scatter charts.

use crate::models::{ScatterPoint, TimeSeries, TimeSeriesPoint};
use thiserror::Error;
use wq_core::{Dataset, Field};
use wq_utils::dates::format_timestamp;

/// Parameters drawn on the time series chart, when present.
pub const TIME_SERIES_FIELDS: [Field; 5] = [Field::Ph, Field::Do, Field::Bod, Field::Turbidity, Field::Wqi];

/// A chart needs columns the dataset does not have.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("One or more required columns ({}) are missing from the dataset.", names(.0))]
pub struct MissingColumns(pub Vec<Field>);

fn names(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::column_name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Line chart points for every record, ordered by timestamp (ties keep
/// input order). Only parameters in the schema are included.
pub fn time_series(dataset: &Dataset) -> TimeSeries {
    let parameters: Vec<Field> = TIME_SERIES_FIELDS
        .into_iter()
        .filter(|f| dataset.schema().has(*f))
        .collect();
    if parameters.is_empty() {
        return TimeSeries::default();
    }
    let mut records: Vec<_> = dataset.iter().collect();
    records.sort_by_key(|r| r.observed_at);
    let points = records
        .into_iter()
        .map(|r| TimeSeriesPoint {
            date: format_timestamp(&r.observed_at),
            station: r.station.clone(),
            values: parameters.iter().map(|f| (*f, r.get(*f))).collect(),
        })
        .collect();
    TimeSeries { parameters, points }
}

/// Scatter markers for records that have `x`, `y` and, if requested,
/// `size`.
///
/// # Errors
///
/// [`MissingColumns`] when the schema lacks any of the requested columns.
pub fn scatter(
    dataset: &Dataset,
    x: Field,
    y: Field,
    size: Option<Field>,
) -> Result<Vec<ScatterPoint>, MissingColumns> {
    let mut wanted = vec![x, y];
    wanted.extend(size);
    let missing = dataset.schema().missing(&wanted);
    if !missing.is_empty() {
        return Err(MissingColumns(missing));
    }
    Ok(dataset
        .iter()
        .filter_map(|r| {
            let size_value = match size {
                Some(field) => Some(r.get(field)?),
                None => None,
            };
            Some(ScatterPoint {
                station: r.station.clone(),
                x: r.get(x)?,
                y: r.get(y)?,
                size: size_value,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, example_dataset};
    use wq_core::{Record, Schema};

    #[test]
    fn time_series_uses_present_parameters_in_date_order() {
        let series = time_series(&example_dataset());
        assert_eq!(series.parameters, vec![Field::Ph, Field::Bod, Field::Wqi]);
        let dates: Vec<_> = series.points.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-05", "2024-01-20", "2024-02-10"]);
        assert_eq!(series.points[1].station, "StationB");
        assert_eq!(series.points[1].values[&Field::Bod], Some(2.0));
    }

    #[test]
    fn time_series_without_parameters_is_empty() {
        let dataset = Dataset::new(
            Schema::with_fields(&[Field::Temperature]),
            vec![Record::new("A", date(2024, 1, 1)).with(Field::Temperature, 12.0)],
        );
        assert_eq!(time_series(&dataset), TimeSeries::default());
    }

    #[test]
    fn scatter_skips_incomplete_records() {
        let dataset = Dataset::new(
            Schema::standard(),
            vec![
                Record::new("A", date(2024, 1, 1))
                    .with(Field::Bod, 3.0)
                    .with(Field::Ph, 7.0)
                    .with(Field::Temperature, 11.0),
                Record::new("A", date(2024, 1, 2)).with(Field::Bod, 4.0).with(Field::Ph, 7.2),
                Record::new("B", date(2024, 1, 3)).with(Field::Bod, 5.0),
            ],
        );
        let sized = scatter(&dataset, Field::Bod, Field::Ph, Some(Field::Temperature)).unwrap();
        assert_eq!(
            sized,
            vec![ScatterPoint {
                station: "A".to_string(),
                x: 3.0,
                y: 7.0,
                size: Some(11.0)
            }]
        );
        let plain = scatter(&dataset, Field::Bod, Field::Ph, None).unwrap();
        assert_eq!(plain.len(), 2);
    }

    #[test]
    fn scatter_reports_missing_columns() {
        let err = scatter(&example_dataset(), Field::Do, Field::Wqi, Some(Field::Temperature)).unwrap_err();
        assert_eq!(err, MissingColumns(vec![Field::Do, Field::Temperature]));
        assert_eq!(
            err.to_string(),
            "One or more required columns (DO, Temperature) are missing from the dataset."
        );
    }
}
