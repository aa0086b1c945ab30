//! Derived table row structs for water quality data.
//!
//! All structs derive `Serialize` so they can be handed to a chart layer as
//! JSON.

use serde::Serialize;
use std::collections::BTreeMap;
use wq_core::{Category, Field};

/// One row of a per-station aggregate (bar and pie charts).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StationValue {
    pub station: String,
    pub value: f64,
}

/// One row of a per-month aggregate.
///
/// `month_year` is `YYYY-MM`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthValue {
    pub month_year: String,
    pub value: f64,
}

/// A station's percentage of a per-station total.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StationShare {
    pub station: String,
    pub value: f64,
    /// Percent of the total, 0-100. NaN when the total is zero or NaN.
    pub percent: f64,
}

/// Mean of a measure for the KPI row.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct FieldAverage {
    pub field: Field,
    pub average: Average,
}

/// Outcome of averaging one measure.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(tag = "kind", content = "value")]
pub enum Average {
    /// The column is not in the dataset.
    NotApplicable,
    /// Mean over non-missing values; NaN when there are none.
    Value(f64),
}

impl Average {
    pub fn value(&self) -> Option<f64> {
        match self {
            Average::NotApplicable => None,
            Average::Value(v) => Some(*v),
        }
    }
}

impl std::fmt::Display for Average {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Average::NotApplicable => f.write_str("N/A"),
            Average::Value(v) => write!(f, "{:.2}", v),
        }
    }
}

/// Number of records in a category bin.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryCount {
    /// `None` counts records with no category (missing or out-of-range WQI).
    pub category: Option<Category>,
    pub count: usize,
}

/// One record's values for the multi-parameter line chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimeSeriesPoint {
    /// `YYYY-MM-DD`, or `YYYY-MM-DD HH:MM:SS` when the record has a time.
    pub date: String,
    pub station: String,
    pub values: BTreeMap<Field, Option<f64>>,
}

/// Line chart data: which parameters are plotted and the points.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct TimeSeries {
    pub parameters: Vec<Field>,
    pub points: Vec<TimeSeriesPoint>,
}

/// A single scatter plot marker.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterPoint {
    pub station: String,
    pub x: f64,
    pub y: f64,
    pub size: Option<f64>,
}

/// A titled scatter plot. The trendline is fitted by the chart layer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterSet {
    pub title: String,
    pub x: Field,
    pub y: Field,
    /// Axis titles, from [`Field::label`].
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub size: Option<Field>,
    pub trendline: bool,
    pub points: Vec<ScatterPoint>,
}
