//! Neural score calculation
//!
//! A fixed linear model standing in for a pattern-recognition component:
//!
//! ```text
//! score = (0.5 + Σ value_i * weight_i) * usage_multiplier
//! ```
//!
//! clamped to [0, 1]. Only present indicators enter the sum; a non-finite
//! value is skipped like an absent one. The multiplier is applied after the
//! sum, so it scales the 0.5 base offset as well.

use crate::types::{Indicator, IndicatorVector, UsageFrequency};

/// Starting point of the linear model
pub const BASE_SCORE: f64 = 0.5;

/// Signed model weights. Negative weights mark protective indicators.
pub const NEURAL_WEIGHTS: [(Indicator, f64); 14] = [
    (Indicator::CognitiveOffloading, 0.12),
    (Indicator::NeuralActivity, -0.15),
    (Indicator::MemoryRetention, -0.13),
    (Indicator::CopyPasteBehavior, 0.10),
    (Indicator::AnalyticalEngagement, -0.11),
    (Indicator::ReflectionTime, -0.09),
    (Indicator::VerificationRate, -0.08),
    (Indicator::AiDependence, 0.14),
    (Indicator::EngagementMetrics, -0.10),
    (Indicator::ProblemSolvingDecline, 0.13),
    (Indicator::ExecutiveFunction, -0.12),
    (Indicator::AttentionSpan, -0.11),
    (Indicator::TaskSwitching, 0.08),
    // Raw month count, not normalized
    (Indicator::TemporalUsageMonths, 0.005),
];

/// Calculator for the neural sub-score
pub struct NeuralScorer;

impl NeuralScorer {
    /// Compute the neural score in [0, 1]
    pub fn score(vector: &IndicatorVector) -> f64 {
        let weighted_sum: f64 = NEURAL_WEIGHTS
            .iter()
            .filter_map(|(indicator, weight)| {
                vector
                    .get(*indicator)
                    .filter(|v| v.is_finite())
                    .map(|v| v * weight)
            })
            .sum();

        let multiplier = usage_multiplier(vector.usage_frequency);
        ((BASE_SCORE + weighted_sum) * multiplier).clamp(0.0, 1.0)
    }
}

/// Usage multiplier, neutral when the frequency is absent or unrecognized
fn usage_multiplier(frequency: Option<UsageFrequency>) -> f64 {
    match frequency {
        Some(UsageFrequency::Unknown) => {
            tracing::warn!("unrecognized usage_frequency, applying neutral multiplier");
            1.0
        }
        Some(frequency) => frequency.multiplier(),
        None => 1.0,
    }
}
