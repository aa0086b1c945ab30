//! Text output: KPI summary and station listing.

use std::fmt::Write;
use wq_core::{Dataset, Field, FilterSpec};
use wq_data::averages::KPI_FIELDS;
use wq_data::{compute_averages, filter_records};
use wq_utils::dates::format_date;

fn kpi_label(field: Field) -> &'static str {
    match field {
        Field::Ph => "Avg pH",
        Field::Do => "Avg DO (mg/l)",
        Field::Bod => "Avg BOD (mg/l)",
        Field::Wqi => "Avg WQI",
        Field::Turbidity => "Avg Turbidity",
        Field::Temperature => "Avg Temperature",
    }
}

/// Record count and KPI averages for the filtered data.
pub fn render_summary(dataset: &Dataset, spec: &FilterSpec) -> String {
    let filtered = filter_records(dataset, spec);
    let mut out = String::new();
    let _ = writeln!(out, "Showing {} records.", filtered.len());
    let _ = writeln!(out, "Key Water Quality Indicators (Averages)");
    for average in compute_averages(&filtered, &KPI_FIELDS) {
        let _ = writeln!(out, "  {:<16} {}", kpi_label(average.field), average.average);
    }
    out
}

/// Stations and date span of the whole dataset.
pub fn render_stations(dataset: &Dataset) -> String {
    let mut out = String::new();
    let stations = dataset.stations();
    let _ = writeln!(out, "{} stations:", stations.len());
    for station in &stations {
        let _ = writeln!(out, "  {}", station);
    }
    let measures: Vec<&str> = dataset
        .schema()
        .fields()
        .into_iter()
        .map(|field| field.column_name())
        .collect();
    let _ = writeln!(out, "Measures: {}", measures.join(", "));
    match dataset.date_bounds() {
        Some((start, end)) => {
            let _ = writeln!(out, "Dates: {} to {}", format_date(&start), format_date(&end));
        }
        None => {
            let _ = writeln!(out, "Dates: none");
        }
    }
    out
}

pub fn run_summary(dataset: &Dataset, spec: &FilterSpec) -> anyhow::Result<()> {
    print!("{}", render_summary(dataset, spec));
    Ok(())
}

pub fn run_stations(dataset: &Dataset) -> anyhow::Result<()> {
    print!("{}", render_stations(dataset));
    Ok(())
}
