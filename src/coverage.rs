//! Input coverage assessment
//!
//! Reports how complete an indicator vector is and flags values the engine
//! will tolerate but a collaborator probably did not intend:
//! - Missing indicators and usage frequency
//! - Normalized values outside [0, 1] or NaN
//! - Unrecognized usage frequency
//!
//! Scoring never consults this; it is attached to reports for transparency.

use crate::types::{Indicator, IndicatorVector, InputCoverage, QualityFlag, UsageFrequency};

/// Expected inputs: every numeric indicator plus usage frequency
const EXPECTED_INPUTS: u32 = Indicator::ALL.len() as u32 + 1;

/// Assess the coverage of an indicator vector
pub fn assess(vector: &IndicatorVector) -> InputCoverage {
    let mut flags = Vec::new();
    let mut present = 0;

    for indicator in Indicator::ALL {
        match vector.get(indicator) {
            Some(value) => {
                present += 1;
                if indicator.is_normalized() && !(0.0..=1.0).contains(&value) {
                    flags.push(QualityFlag::OutOfRange(indicator.as_str().to_string()));
                }
            }
            None => flags.push(QualityFlag::MissingIndicator(indicator.as_str().to_string())),
        }
    }

    match vector.usage_frequency {
        Some(UsageFrequency::Unknown) => {
            present += 1;
            flags.push(QualityFlag::UnknownUsageFrequency);
        }
        Some(_) => present += 1,
        None => flags.push(QualityFlag::MissingUsageFrequency),
    }

    InputCoverage {
        present,
        expected: EXPECTED_INPUTS,
        coverage: f64::from(present) / f64::from(EXPECTED_INPUTS),
        flags,
    }
}
