//! Everything the dashboard page shows for one filter selection.
//!
//! [`Dashboard::build`] is recomputed from the raw dataset on every call.
//! Charts whose columns are missing are left empty and explained in
//! `warnings`.

use crate::aggregate::{aggregate_by_month, aggregate_by_station, station_shares, AggregateOp};
use crate::averages::{compute_averages, KPI_FIELDS};
use crate::categorize::categorize;
use crate::filter::filter_records;
use crate::models::{
    CategoryCount, FieldAverage, MonthValue, ScatterSet, StationShare, StationValue, TimeSeries,
};
use crate::series::{scatter, time_series};
use crate::threshold::{threshold_lines, ThresholdLine};
use serde::Serialize;
use wq_core::{Dataset, Field, FilterSpec};
use wq_utils::dates::format_date;

/// Columns required by the WQI relationship scatter plots.
pub const RELATIONSHIP_FIELDS: [Field; 4] = [Field::Wqi, Field::Ph, Field::Do, Field::Bod];

fn relationship_title(x: Field) -> String {
    let name = match x {
        Field::Do => "Dissolved Oxygen (DO)",
        Field::Bod => "Biological Oxygen Demand (BOD)",
        other => other.column_name(),
    };
    format!("WQI vs {}", name)
}

/// The filter as applied, for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FilterSummary {
    pub stations: Vec<String>,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub filter: FilterSummary,
    pub record_count: usize,
    pub averages: Vec<FieldAverage>,
    /// Bar chart: total BOD per station.
    pub station_bod_totals: Vec<StationValue>,
    /// Bar chart: mean WQI per station.
    pub station_wqi_means: Vec<StationValue>,
    /// Pie chart: share of the mean WQI per station.
    pub wqi_shares: Vec<StationShare>,
    pub category_counts: Vec<CategoryCount>,
    pub monthly_wqi: Vec<MonthValue>,
    pub time_series: TimeSeries,
    /// WQI against pH, DO and BOD, with threshold annotations.
    pub wqi_relationships: Vec<ScatterSet>,
    /// BOD against pH, marker size from Temperature.
    pub bod_vs_ph: Option<ScatterSet>,
    pub thresholds: Vec<ThresholdLine>,
    pub warnings: Vec<String>,
}

impl Dashboard {
    pub fn build(dataset: &Dataset, spec: &FilterSpec) -> Dashboard {
        let filtered = filter_records(dataset, spec);
        let schema = filtered.schema();
        let mut warnings = Vec::new();

        let station_bod_totals = if schema.has(Field::Bod) {
            aggregate_by_station(&filtered, Field::Bod, AggregateOp::Sum)
        } else {
            warnings.push("BOD column missing: station-wise BOD chart skipped.".to_string());
            Vec::new()
        };

        let (station_wqi_means, monthly_wqi) = if schema.has(Field::Wqi) {
            (
                aggregate_by_station(&filtered, Field::Wqi, AggregateOp::Mean),
                aggregate_by_month(&filtered, Field::Wqi),
            )
        } else {
            warnings.push("WQI column missing: WQI charts and categories skipped.".to_string());
            (Vec::new(), Vec::new())
        };
        let wqi_shares = station_shares(&station_wqi_means);

        let category_counts = if schema.has(Field::Wqi) {
            categorize(&filtered).counts()
        } else {
            Vec::new()
        };

        let wqi_relationships = match schema.missing(&RELATIONSHIP_FIELDS).as_slice() {
            [] => [Field::Ph, Field::Do, Field::Bod]
                .into_iter()
                .filter_map(|x| {
                    let points = scatter(&filtered, x, Field::Wqi, None).ok()?;
                    Some(ScatterSet {
                        title: relationship_title(x),
                        x,
                        y: Field::Wqi,
                        x_label: x.label(),
                        y_label: Field::Wqi.label(),
                        size: None,
                        trendline: true,
                        points,
                    })
                })
                .collect(),
            missing => {
                warnings.push(crate::series::MissingColumns(missing.to_vec()).to_string());
                Vec::new()
            }
        };

        let bod_vs_ph = match scatter(&filtered, Field::Bod, Field::Ph, Some(Field::Temperature)) {
            Ok(points) => Some(ScatterSet {
                title: "Relationship between BOD and pH".to_string(),
                x: Field::Bod,
                y: Field::Ph,
                x_label: Field::Bod.label(),
                y_label: Field::Ph.label(),
                size: Some(Field::Temperature),
                trendline: false,
                points,
            }),
            Err(e) => {
                warnings.push(e.to_string());
                None
            }
        };

        let time_series = time_series(&filtered);
        if time_series.parameters.is_empty() {
            warnings.push("No time series parameters present.".to_string());
        }

        for warning in &warnings {
            log::warn!("[WQ Debug] dashboard: {}", warning);
        }

        Dashboard {
            filter: FilterSummary {
                stations: spec.stations.iter().cloned().collect(),
                start_date: format_date(&spec.start_date),
                end_date: format_date(&spec.end_date),
            },
            record_count: filtered.len(),
            averages: compute_averages(&filtered, &KPI_FIELDS),
            station_bod_totals,
            station_wqi_means,
            wqi_shares,
            category_counts,
            monthly_wqi,
            time_series,
            wqi_relationships,
            bod_vs_ph,
            thresholds: threshold_lines(),
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Average;
    use crate::test_support::{date, example_dataset};

    #[test]
    fn example_dashboard() {
        let dataset = example_dataset();
        let dashboard = Dashboard::build(&dataset, &FilterSpec::covering(&dataset));
        assert_eq!(dashboard.record_count, 3);
        assert_eq!(dashboard.station_bod_totals.len(), 2);
        assert_eq!(dashboard.station_bod_totals[0].value, 8.0);
        assert_eq!(dashboard.monthly_wqi.len(), 2);
        assert_eq!(dashboard.filter.start_date, "2024-01-05");
        assert_eq!(dashboard.thresholds.len(), 3);

        // Example data has no DO or Temperature column.
        assert!(dashboard.wqi_relationships.is_empty());
        assert!(dashboard.bod_vs_ph.is_none());
        assert_eq!(dashboard.warnings.len(), 2);
        assert!(dashboard.warnings[0].contains("DO"));
        let do_average = dashboard.averages.iter().find(|a| a.field == Field::Do).unwrap();
        assert_eq!(do_average.average, Average::NotApplicable);
    }

    #[test]
    fn empty_selection_degrades() {
        let dataset = example_dataset();
        let spec = FilterSpec::new(Vec::<String>::new(), date(2024, 1, 1), date(2024, 12, 31));
        let dashboard = Dashboard::build(&dataset, &spec);
        assert_eq!(dashboard.record_count, 0);
        assert!(dashboard.station_bod_totals.is_empty());
        assert!(dashboard.monthly_wqi.is_empty());
        assert!(dashboard.time_series.points.is_empty());
        let wqi = dashboard.averages.iter().find(|a| a.field == Field::Wqi).unwrap();
        assert!(wqi.average.value().unwrap().is_nan());
    }

    #[test]
    fn bundled_dashboard_has_every_chart() {
        let dataset = Dataset::bundled().unwrap();
        let dashboard = Dashboard::build(&dataset, &FilterSpec::covering(&dataset));
        assert!(dashboard.warnings.is_empty(), "{:?}", dashboard.warnings);
        assert_eq!(dashboard.wqi_relationships.len(), 3);
        assert!(dashboard.bod_vs_ph.is_some());
        assert_eq!(dashboard.record_count, dataset.len());

        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(json["record_count"], dataset.len());
        assert_eq!(json["wqi_relationships"][0]["x"], "pH");
        assert_eq!(json["wqi_relationships"][0]["x_label"], "pH Level");
    }

    #[test]
    fn relationship_charts_carry_titles_and_axis_labels() {
        let dataset = Dataset::bundled().unwrap();
        let dashboard = Dashboard::build(&dataset, &FilterSpec::covering(&dataset));
        let titles: Vec<_> = dashboard.wqi_relationships.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "WQI vs pH",
                "WQI vs Dissolved Oxygen (DO)",
                "WQI vs Biological Oxygen Demand (BOD)",
            ]
        );
        let do_chart = &dashboard.wqi_relationships[1];
        assert_eq!(do_chart.x_label, "DO (mg/L)");
        assert_eq!(do_chart.y_label, "Water Quality Index");

        let bod_vs_ph = dashboard.bod_vs_ph.unwrap();
        assert_eq!((bod_vs_ph.x_label, bod_vs_ph.y_label), ("BOD (mg/L)", "pH Level"));
    }
}
