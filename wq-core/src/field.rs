use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric water quality measure carried by an observation.
///
/// Serialises as its source column name (`pH`, `DO`, ...), so JSON chart
/// payloads and CSV headers use the same labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "pH")]
    Ph,
    /// Dissolved Oxygen, mg/l
    #[serde(rename = "DO")]
    Do,
    /// Biological Oxygen Demand, mg/l
    #[serde(rename = "BOD")]
    Bod,
    Turbidity,
    Temperature,
    /// Water Quality Index
    #[serde(rename = "WQI")]
    Wqi,
}

impl Field {
    /// Every measure, in source-file column order.
    pub const ALL: [Field; 6] = [
        Field::Ph,
        Field::Do,
        Field::Bod,
        Field::Turbidity,
        Field::Temperature,
        Field::Wqi,
    ];

    /// Column header used for this measure.
    pub fn column_name(&self) -> &'static str {
        match self {
            Field::Ph => "pH",
            Field::Do => "DO",
            Field::Bod => "BOD",
            Field::Turbidity => "Turbidity",
            Field::Temperature => "Temperature",
            Field::Wqi => "WQI",
        }
    }

    /// Look up a measure by its exact column header.
    pub fn from_column_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.column_name() == name)
    }

    /// Axis label with units.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Ph => "pH Level",
            Field::Do => "DO (mg/L)",
            Field::Bod => "BOD (mg/L)",
            Field::Turbidity => "Turbidity",
            Field::Temperature => "Temperature",
            Field::Wqi => "Water Quality Index",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}
