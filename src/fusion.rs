//! Neural/symbolic fusion and risk classification

use crate::types::RiskLevel;

/// Weight of the neural sub-score in the fused score
pub const NEURAL_WEIGHT: f64 = 0.6;

/// Weight of the symbolic sub-score in the fused score
pub const SYMBOLIC_WEIGHT: f64 = 0.4;

/// Upper bounds (exclusive) of each level below `Severe`, ascending
const LEVEL_THRESHOLDS: [(f64, RiskLevel); 4] = [
    (0.2, RiskLevel::Minimal),
    (0.4, RiskLevel::Low),
    (0.6, RiskLevel::Moderate),
    (0.8, RiskLevel::High),
];

/// Fuse the two sub-scores and classify the result.
///
/// The fused score is not re-clamped; it stays in [0, 1] because both inputs
/// are already clamped and the weights sum to one.
pub fn fuse(neural: f64, symbolic: f64) -> (f64, RiskLevel) {
    let risk_score = neural * NEURAL_WEIGHT + symbolic * SYMBOLIC_WEIGHT;
    (risk_score, classify(risk_score))
}

/// Map a fused score onto a risk level, first matching threshold wins
pub fn classify(risk_score: f64) -> RiskLevel {
    LEVEL_THRESHOLDS
        .iter()
        .find(|(upper, _)| risk_score < *upper)
        .map(|(_, level)| *level)
        .unwrap_or(RiskLevel::Severe)
}
