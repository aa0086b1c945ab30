use crate::models::{Average, FieldAverage};
use wq_core::{Dataset, Field};

/// Measures shown in the KPI row.
pub const KPI_FIELDS: [Field; 4] = [Field::Ph, Field::Do, Field::Bod, Field::Wqi];

/// Mean of each requested measure over the records that have it.
///
/// A measure missing from the schema is [`Average::NotApplicable`]; a
/// measure in the schema with no values averages to NaN.
pub fn compute_averages(dataset: &Dataset, fields: &[Field]) -> Vec<FieldAverage> {
    fields
        .iter()
        .map(|&field| {
            let average = if dataset.schema().has(field) {
                let (sum, count) = dataset
                    .iter()
                    .filter_map(|r| r.get(field))
                    .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
                Average::Value(if count == 0 { f64::NAN } else { sum / count as f64 })
            } else {
                Average::NotApplicable
            };
            FieldAverage { field, average }
        })
        .collect()
}
