//! Symbolic rule evaluation
//!
//! Eight fixed diagnostic rules, each a small conjunction of strict threshold
//! comparisons. Rules are evaluated in catalog order; every rule that holds
//! emits a [`FiredRule`] and adds its increment to the symbolic score, which
//! is capped at 1.0.
//!
//! An absent indicator never satisfies a comparison, so a rule touching a
//! missing field simply does not fire.

use serde::Serialize;

use crate::types::{FiredRule, IndicatorVector, SymbolicResult, UsageFrequency};

/// A static diagnostic rule
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Rule {
    pub rule_id: &'static str,
    pub description: &'static str,
    pub confidence: f64,
    /// Activation reported when the rule fires
    pub activation: f64,
    /// Contribution to the symbolic score when the rule fires
    pub increment: f64,
    #[serde(skip_serializing)]
    predicate: fn(&IndicatorVector) -> bool,
}

impl Rule {
    /// Evaluate the rule predicate against a vector
    pub fn holds(&self, vector: &IndicatorVector) -> bool {
        (self.predicate)(vector)
    }

    fn fire(&self) -> FiredRule {
        FiredRule {
            rule_id: self.rule_id.to_string(),
            description: self.description.to_string(),
            confidence: self.confidence,
            activation: self.activation,
        }
    }
}

fn above(value: Option<f64>, threshold: f64) -> bool {
    matches!(value, Some(v) if v > threshold)
}

fn below(value: Option<f64>, threshold: f64) -> bool {
    matches!(value, Some(v) if v < threshold)
}

/// The rule catalog, in evaluation order
pub static RULES: [Rule; 8] = [
    Rule {
        rule_id: "NS001",
        description: "If cognitive_offloading > 0.7 AND usage_frequency = high THEN cognitive_decline_risk = high",
        confidence: 0.8,
        activation: 0.8,
        increment: 0.15,
        predicate: |v| {
            above(v.cognitive_offloading, 0.7) && v.usage_frequency == Some(UsageFrequency::High)
        },
    },
    Rule {
        rule_id: "NS002",
        description: "If neural_activity < 0.3 AND memory_retention < 0.4 THEN severe_decline_risk = true",
        confidence: 0.9,
        activation: 0.9,
        increment: 0.20,
        predicate: |v| below(v.neural_activity, 0.3) && below(v.memory_retention, 0.4),
    },
    Rule {
        rule_id: "NS003",
        description: "If copy_paste_behavior > 0.8 THEN analytical_engagement = low",
        confidence: 0.7,
        activation: 0.7,
        increment: 0.10,
        predicate: |v| above(v.copy_paste_behavior, 0.8),
    },
    Rule {
        rule_id: "NS004",
        description: "If reflection_time < 0.2 AND verification_rate < 0.3 THEN critical_thinking_decline = high",
        confidence: 0.75,
        activation: 0.75,
        increment: 0.12,
        predicate: |v| below(v.reflection_time, 0.2) && below(v.verification_rate, 0.3),
    },
    Rule {
        rule_id: "NS005",
        description: "If ai_dependence > 0.9 THEN cognitive_atrophy_risk = severe",
        confidence: 0.95,
        activation: 0.95,
        increment: 0.25,
        predicate: |v| above(v.ai_dependence, 0.9),
    },
    Rule {
        rule_id: "NS006",
        description: "If engagement_metrics < 0.4 AND temporal_usage > 6_months THEN long_term_decline = probable",
        confidence: 0.85,
        activation: 0.85,
        increment: 0.15,
        predicate: |v| {
            below(v.engagement_metrics, 0.4) && matches!(v.temporal_usage_months, Some(m) if m > 6)
        },
    },
    Rule {
        rule_id: "NS007",
        description: "If problem_solving_decline > 0.7 AND executive_function < 0.5 THEN metacognitive_impairment = high",
        confidence: 0.8,
        activation: 0.8,
        increment: 0.18,
        predicate: |v| above(v.problem_solving_decline, 0.7) && below(v.executive_function, 0.5),
    },
    Rule {
        rule_id: "NS008",
        description: "If attention_span < 0.3 AND task_switching > 0.8 THEN focus_degradation = severe",
        confidence: 0.75,
        activation: 0.75,
        increment: 0.14,
        predicate: |v| below(v.attention_span, 0.3) && above(v.task_switching, 0.8),
    },
];

/// Look up a rule by identifier
pub fn rule(rule_id: &str) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.rule_id == rule_id)
}

/// Evaluator for the symbolic sub-score
pub struct RuleEvaluator;

impl RuleEvaluator {
    /// Evaluate every rule in catalog order
    pub fn evaluate(vector: &IndicatorVector) -> SymbolicResult {
        let mut fired_rules = Vec::new();
        let mut accumulated = 0.0;

        for rule in RULES.iter().filter(|r| r.holds(vector)) {
            tracing::trace!(rule_id = rule.rule_id, activation = rule.activation, "rule fired");
            fired_rules.push(rule.fire());
            accumulated += rule.increment;
        }

        SymbolicResult {
            fired_rules,
            risk_score: f64::min(accumulated, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Indicator;
    use pretty_assertions::assert_eq;

    fn fired_ids(result: &SymbolicResult) -> Vec<&str> {
        result.fired_rules.iter().map(|r| r.rule_id.as_str()).collect()
    }

    #[test]
    fn test_catalog_is_in_id_order() {
        let ids: Vec<&str> = RULES.iter().map(|r| r.rule_id).collect();
        assert_eq!(
            ids,
            vec!["NS001", "NS002", "NS003", "NS004", "NS005", "NS006", "NS007", "NS008"]
        );
    }

    #[test]
    fn test_empty_vector_fires_nothing() {
        let result = RuleEvaluator::evaluate(&IndicatorVector::default());
        assert!(result.fired_rules.is_empty());
        assert_eq!(result.risk_score, 0.0);
    }

    #[test]
    fn test_single_rule_activation_and_increment() {
        let vector = IndicatorVector::default().with(Indicator::AiDependence, 0.95);
        let result = RuleEvaluator::evaluate(&vector);

        assert_eq!(fired_ids(&result), vec!["NS005"]);
        assert_eq!(result.fired_rules[0].activation, 0.95);
        assert_eq!(result.fired_rules[0].confidence, 0.95);
        assert!((result.risk_score - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_comparisons_are_strict() {
        let vector = IndicatorVector::default()
            .with(Indicator::AiDependence, 0.9)
            .with(Indicator::CopyPasteBehavior, 0.8)
            .with(Indicator::AttentionSpan, 0.3)
            .with(Indicator::TaskSwitching, 0.9)
            .with(Indicator::EngagementMetrics, 0.1)
            .with(Indicator::TemporalUsageMonths, 6.0);
        assert!(RuleEvaluator::evaluate(&vector).fired_rules.is_empty());
    }

    #[test]
    fn test_partial_conjunction_does_not_fire() {
        // NS002 needs both fields; memory_retention is absent
        let vector = IndicatorVector::default().with(Indicator::NeuralActivity, 0.1);
        assert!(RuleEvaluator::evaluate(&vector).fired_rules.is_empty());

        // NS001 needs high usage; medium does not count
        let vector = IndicatorVector::default()
            .with(Indicator::CognitiveOffloading, 0.9)
            .with_usage_frequency(UsageFrequency::Medium);
        assert!(RuleEvaluator::evaluate(&vector).fired_rules.is_empty());
    }

    #[test]
    fn test_nan_never_fires() {
        let vector = IndicatorVector::default().with(Indicator::AiDependence, f64::NAN);
        assert!(RuleEvaluator::evaluate(&vector).fired_rules.is_empty());
    }

    #[test]
    fn test_multiple_rules_keep_catalog_order_and_cap() {
        let vector = IndicatorVector::default()
            .with(Indicator::TaskSwitching, 0.9)
            .with(Indicator::AttentionSpan, 0.1)
            .with(Indicator::AiDependence, 0.99)
            .with(Indicator::NeuralActivity, 0.1)
            .with(Indicator::MemoryRetention, 0.1)
            .with(Indicator::ProblemSolvingDecline, 0.9)
            .with(Indicator::ExecutiveFunction, 0.1)
            .with(Indicator::CopyPasteBehavior, 0.95)
            .with(Indicator::ReflectionTime, 0.1)
            .with(Indicator::VerificationRate, 0.1);
        let result = RuleEvaluator::evaluate(&vector);

        assert_eq!(
            fired_ids(&result),
            vec!["NS002", "NS003", "NS004", "NS005", "NS007", "NS008"]
        );
        // 0.20 + 0.10 + 0.12 + 0.25 + 0.18 + 0.14 = 0.99
        assert!((result.risk_score - 0.99).abs() < 1e-9);

        let vector = vector
            .with(Indicator::CognitiveOffloading, 0.9)
            .with_usage_frequency(UsageFrequency::High);
        assert_eq!(RuleEvaluator::evaluate(&vector).risk_score, 1.0);
    }

    #[test]
    fn test_rule_lookup() {
        assert_eq!(rule("NS004").map(|r| r.increment), Some(0.12));
        assert!(rule("NS009").is_none());
    }

    #[test]
    fn test_catalog_serializes_without_predicate() {
        let json = serde_json::to_value(&RULES[0]).unwrap();
        assert_eq!(json["rule_id"], "NS001");
        assert!(json.get("predicate").is_none());
    }
}
