//! Core types and CSV loading for river water quality observations.
//!
//! A [`Dataset`] is an ordered list of [`Record`]s together with the
//! [`Schema`] resolved from the source header row. Measures are optional per
//! record and per schema, so callers check [`Schema::has`] before relying on
//! a column.

pub mod category;
pub mod compression;
pub mod dataset;
pub mod date_range;
pub mod error;
pub mod field;
pub mod filter;
pub mod record;
pub mod schema;

pub use category::Category;
pub use dataset::Dataset;
pub use error::{Result, WqError};
pub use field::Field;
pub use filter::FilterSpec;
pub use record::Record;
pub use schema::{Column, Schema};
