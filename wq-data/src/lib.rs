//! Filtering, aggregation and export for water quality observations.
//!
//! Every operation here is a pure function of a [`wq_core::Dataset`] and
//! its explicit arguments: nothing is cached, and an empty dataset gives
//! empty tables or NaN rather than an error. The typical flow is
//!
//! 1. build a [`wq_core::FilterSpec`] from the user's selection,
//! 2. [`filter::filter_records`] the loaded dataset,
//! 3. derive tables with [`aggregate`], [`averages`] and [`categorize`],
//! 4. hand them to a chart layer as JSON ([`dashboard::Dashboard`]) or
//!    write them with [`export`].

pub mod aggregate;
pub mod averages;
pub mod categorize;
pub mod dashboard;
pub mod export;
pub mod filter;
pub mod models;
pub mod series;
pub mod threshold;

pub use aggregate::{aggregate_by_month, aggregate_by_station, station_shares, AggregateOp};
pub use averages::compute_averages;
pub use categorize::{categorize, CategoryTable};
pub use dashboard::Dashboard;
pub use filter::filter_records;
