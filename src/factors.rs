//! Contributing factor ranking
//!
//! Five candidate factors are scored so that a higher value is worse
//! (protective indicators are inverted), sorted descending with a stable sort,
//! and the first three are returned.
//!
//! An absent source indicator ranks at the neutral midpoint 0.5 and is never
//! flagged as a risk. Values supplied as NaN are ordered with
//! [`f64::total_cmp`], so the ranking is always total and deterministic.

use crate::types::{Indicator, IndicatorVector, RiskFactor};

/// Number of factors returned by [`top_factors`]
pub const TOP_FACTOR_COUNT: usize = 3;

/// Ranking value used for an absent indicator
pub const NEUTRAL_FACTOR_VALUE: f64 = 0.5;

#[derive(Debug, Clone, Copy)]
enum Orientation {
    /// Higher raw value is worse; concerning above the threshold
    Risk { concern_above: f64 },
    /// Higher raw value is better; ranked as `1 - value`, concerning below the threshold
    Protective { concern_below: f64 },
}

struct FactorSpec {
    name: &'static str,
    indicator: Indicator,
    orientation: Orientation,
}

/// Candidate factors in declaration order (tie order)
const CANDIDATES: [FactorSpec; 5] = [
    FactorSpec {
        name: "AI Dependence",
        indicator: Indicator::AiDependence,
        orientation: Orientation::Risk { concern_above: 0.7 },
    },
    FactorSpec {
        name: "Cognitive Offloading",
        indicator: Indicator::CognitiveOffloading,
        orientation: Orientation::Risk { concern_above: 0.6 },
    },
    FactorSpec {
        name: "Neural Activity",
        indicator: Indicator::NeuralActivity,
        orientation: Orientation::Protective { concern_below: 0.4 },
    },
    FactorSpec {
        name: "Memory Retention",
        indicator: Indicator::MemoryRetention,
        orientation: Orientation::Protective { concern_below: 0.5 },
    },
    FactorSpec {
        name: "Problem Solving Decline",
        indicator: Indicator::ProblemSolvingDecline,
        orientation: Orientation::Risk { concern_above: 0.6 },
    },
];

impl FactorSpec {
    fn evaluate(&self, vector: &IndicatorVector) -> RiskFactor {
        let (value, is_risk) = match (vector.get(self.indicator), self.orientation) {
            (None, _) => (NEUTRAL_FACTOR_VALUE, false),
            (Some(raw), Orientation::Risk { concern_above }) => (raw, raw > concern_above),
            (Some(raw), Orientation::Protective { concern_below }) => {
                (1.0 - raw, raw < concern_below)
            }
        };

        RiskFactor {
            name: self.name.to_string(),
            value,
            is_risk,
        }
    }
}

/// Rank the candidate factors and return the top three
pub fn top_factors(vector: &IndicatorVector) -> Vec<RiskFactor> {
    let mut factors: Vec<RiskFactor> = CANDIDATES.iter().map(|c| c.evaluate(vector)).collect();

    // sort_by is stable: ties keep declaration order
    factors.sort_by(|a, b| b.value.total_cmp(&a.value));
    factors.truncate(TOP_FACTOR_COUNT);
    factors
}
