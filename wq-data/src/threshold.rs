//! WQI threshold bands drawn as annotation lines on the WQI scatter charts.
//!
//! These bands (70 and 90) are a separate scheme from
//! [`wq_core::Category`] (bins at 50/100/150/200). The two disagree on what
//! "Poor", "Good" and "Excellent" mean and are not reconciled.

use serde::Serialize;

/// Lower bound of the Good band.
pub const GOOD_THRESHOLD: f64 = 70.0;

/// Lower bound of the Excellent band.
pub const EXCELLENT_THRESHOLD: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ThresholdBand {
    Poor,
    Good,
    Excellent,
}

impl ThresholdBand {
    /// Band for a WQI value; `None` for NaN.
    pub fn classify(wqi: f64) -> Option<ThresholdBand> {
        if wqi.is_nan() {
            None
        } else if wqi >= EXCELLENT_THRESHOLD {
            Some(ThresholdBand::Excellent)
        } else if wqi >= GOOD_THRESHOLD {
            Some(ThresholdBand::Good)
        } else {
            Some(ThresholdBand::Poor)
        }
    }
}

/// A dashed horizontal annotation line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdLine {
    pub band: ThresholdBand,
    pub value: f64,
    pub label: &'static str,
    pub color: &'static str,
}

/// Annotation lines, top to bottom.
pub fn threshold_lines() -> Vec<ThresholdLine> {
    vec![
        ThresholdLine {
            band: ThresholdBand::Excellent,
            value: EXCELLENT_THRESHOLD,
            label: "Excellent (≥90)",
            color: "green",
        },
        ThresholdLine {
            band: ThresholdBand::Good,
            value: GOOD_THRESHOLD,
            label: "Good (70–90)",
            color: "orange",
        },
        ThresholdLine {
            band: ThresholdBand::Poor,
            value: 0.0,
            label: "Poor (<70)",
            color: "red",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_bands() {
        assert_eq!(ThresholdBand::classify(69.99), Some(ThresholdBand::Poor));
        assert_eq!(ThresholdBand::classify(70.0), Some(ThresholdBand::Good));
        assert_eq!(ThresholdBand::classify(89.9), Some(ThresholdBand::Good));
        assert_eq!(ThresholdBand::classify(90.0), Some(ThresholdBand::Excellent));
        assert_eq!(ThresholdBand::classify(-5.0), Some(ThresholdBand::Poor));
        assert_eq!(ThresholdBand::classify(f64::NAN), None);
    }

    #[test]
    fn lines_descend() {
        let values: Vec<f64> = threshold_lines().iter().map(|l| l.value).collect();
        assert_eq!(values, vec![90.0, 70.0, 0.0]);
    }
}
