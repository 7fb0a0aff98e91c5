//! Recommendation generation
//!
//! Checks run in a fixed order and every matching check appends its text.
//! When nothing matched, two maintenance recommendations are returned instead.

use crate::types::FiredRule;

/// Fused score above which general reduction strategies are recommended
pub const HIGH_RISK_THRESHOLD: f64 = 0.6;

pub const REDUCE_DEPENDENCY: &str =
    "Consider reducing AI dependency through scheduled offline work sessions";
pub const MANUAL_PROBLEM_SOLVING: &str =
    "Practice manual problem-solving exercises to maintain cognitive flexibility";
pub const AI_FREE_DAYS: &str = "Implement AI-free days to prevent cognitive atrophy";
pub const NEURAL_ACTIVITY: &str =
    "Engage in activities that promote neural activity and memory retention";
pub const REFLECTION_VERIFICATION: &str =
    "Increase reflection time and verification practices when using AI";
pub const MAINTAIN_BALANCE: &str = "Maintain current balanced approach to AI usage";
pub const CONTINUE_MONITORING: &str = "Continue monitoring cognitive indicators regularly";

/// Rule-specific recommendations, in check order
const RULE_RECOMMENDATIONS: [(&str, &str); 3] = [
    ("NS005", AI_FREE_DAYS),
    ("NS002", NEURAL_ACTIVITY),
    ("NS004", REFLECTION_VERIFICATION),
];

/// Derive recommendations from the fused score and the fired rules.
///
/// Never empty. A single rule-specific entry is possible when the score is
/// at or below the threshold and exactly one of NS002, NS004 or NS005 fired.
pub fn recommend(risk_score: f64, fired_rules: &[FiredRule]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if risk_score > HIGH_RISK_THRESHOLD {
        recommendations.push(REDUCE_DEPENDENCY.to_string());
        recommendations.push(MANUAL_PROBLEM_SOLVING.to_string());
    }

    for (rule_id, text) in RULE_RECOMMENDATIONS {
        if fired_rules.iter().any(|r| r.rule_id == rule_id) {
            recommendations.push(text.to_string());
        }
    }

    if recommendations.is_empty() {
        recommendations.push(MAINTAIN_BALANCE.to_string());
        recommendations.push(CONTINUE_MONITORING.to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fired(rule_id: &str) -> FiredRule {
        FiredRule {
            rule_id: rule_id.to_string(),
            description: String::new(),
            confidence: 0.0,
            activation: 0.0,
        }
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        assert_eq!(
            recommend(0.3, &[]),
            vec![MAINTAIN_BALANCE.to_string(), CONTINUE_MONITORING.to_string()]
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(recommend(0.6, &[]).len(), 2);
        assert_eq!(recommend(0.6, &[])[0], MAINTAIN_BALANCE);
        assert_eq!(recommend(0.61, &[])[0], REDUCE_DEPENDENCY);
    }

    #[test]
    fn test_all_checks_append_in_fixed_order() {
        // Fired order differs from check order; output follows check order
        let rules = vec![fired("NS002"), fired("NS004"), fired("NS005")];
        assert_eq!(
            recommend(0.9, &rules),
            vec![
                REDUCE_DEPENDENCY.to_string(),
                MANUAL_PROBLEM_SOLVING.to_string(),
                AI_FREE_DAYS.to_string(),
                NEURAL_ACTIVITY.to_string(),
                REFLECTION_VERIFICATION.to_string(),
            ]
        );
    }

    #[test]
    fn test_single_rule_suppresses_fallback() {
        assert_eq!(recommend(0.48, &[fired("NS005")]), vec![AI_FREE_DAYS.to_string()]);
    }

    #[test]
    fn test_unrelated_rules_fall_back() {
        let rules = vec![fired("NS001"), fired("NS003")];
        assert_eq!(recommend(0.5, &rules)[0], MAINTAIN_BALANCE);
    }
}
