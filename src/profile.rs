//! Protective-indicator profile
//!
//! Seven protective readings in a fixed display order, suitable for a radar
//! style view. Absent indicators read as 0.5 and are marked unobserved.

use crate::types::{Indicator, IndicatorVector, ProfileReading};

/// Value shown for an absent indicator
pub const NEUTRAL_READING: f64 = 0.5;

const PROFILE_AXES: [(&str, Indicator); 7] = [
    ("Neural Activity", Indicator::NeuralActivity),
    ("Memory Retention", Indicator::MemoryRetention),
    ("Attention Span", Indicator::AttentionSpan),
    ("Executive Function", Indicator::ExecutiveFunction),
    ("Analytical Engagement", Indicator::AnalyticalEngagement),
    ("Reflection Time", Indicator::ReflectionTime),
    ("Verification Rate", Indicator::VerificationRate),
];

/// Build the protective profile for a vector
pub fn protective_profile(vector: &IndicatorVector) -> Vec<ProfileReading> {
    PROFILE_AXES
        .iter()
        .map(|(label, indicator)| {
            let observed = vector.get(*indicator);
            ProfileReading {
                label: label.to_string(),
                value: observed.unwrap_or(NEUTRAL_READING),
                observed: observed.is_some(),
            }
        })
        .collect()
}
