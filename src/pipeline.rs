//! Pipeline orchestration
//!
//! This module provides the public API of the engine. An analysis is a
//! straight-line composition:
//!
//! neural score → rule evaluation → fusion → classification → factor
//! ranking → recommendations
//!
//! Every stage is a pure function of the input vector and the static model
//! tables, so analyses are deterministic and safe to run from any thread.

use crate::encoder::ReportEncoder;
use crate::error::ComputeError;
use crate::factors::top_factors;
use crate::fusion::fuse;
use crate::neural::NeuralScorer;
use crate::recommend::recommend;
use crate::rules::RuleEvaluator;
use crate::scenarios::{Scenario, ScenarioKind};
use crate::types::{AnalysisResult, IndicatorVector, RiskReport};

/// Score an indicator vector.
///
/// Never fails: absent fields contribute nothing to the neural sum, never
/// fire a rule, and rank at the neutral midpoint among factors.
pub fn analyze(vector: &IndicatorVector) -> AnalysisResult {
    let neural_score = NeuralScorer::score(vector);
    let symbolic = RuleEvaluator::evaluate(vector);
    let (risk_score, risk_level) = fuse(neural_score, symbolic.risk_score);
    let top_factors = top_factors(vector);
    let recommendations = recommend(risk_score, &symbolic.fired_rules);

    tracing::debug!(
        neural_score,
        symbolic_score = symbolic.risk_score,
        risk_score,
        risk_level = risk_level.as_str(),
        fired_rules = symbolic.fired_rules.len(),
        "analysis complete"
    );

    AnalysisResult {
        risk_score,
        risk_level,
        neural_score,
        symbolic,
        top_factors,
        recommendations,
    }
}

/// Parse an indicator vector from JSON.
///
/// Unknown keys are ignored and absent keys stay absent. The month count
/// accepts any JSON number and is rounded like [`IndicatorVector::set`].
pub fn parse_indicators(json: &str) -> Result<IndicatorVector, ComputeError> {
    serde_json::from_str(json).map_err(|e| ComputeError::ParseError(e.to_string()))
}

/// Convert indicator JSON to report JSON (stateless, one-shot).
///
/// # Example
/// ```ignore
/// let report_json = analyze_json(r#"{"ai_dependence": 0.95}"#.to_string())?;
/// ```
pub fn analyze_json(indicators_json: String) -> Result<String, ComputeError> {
    RiskAnalyzer::new().process(&indicators_json)
}

/// Analyzer bound to one report producer identity.
///
/// Holds no scoring state; reuse it to keep the same `instance_id` across
/// reports.
pub struct RiskAnalyzer {
    encoder: ReportEncoder,
}

impl Default for RiskAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskAnalyzer {
    /// Create an analyzer with a fresh instance ID
    pub fn new() -> Self {
        Self {
            encoder: ReportEncoder::new(),
        }
    }

    /// Create an analyzer with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self {
            encoder: ReportEncoder::with_instance_id(instance_id),
        }
    }

    pub fn instance_id(&self) -> &str {
        self.encoder.instance_id()
    }

    /// Score a vector without building a report
    pub fn analyze_vector(&self, vector: &IndicatorVector) -> AnalysisResult {
        analyze(vector)
    }

    /// Score a vector and wrap the result in a report
    pub fn report(&self, vector: &IndicatorVector) -> RiskReport {
        self.encoder.encode(vector, analyze(vector))
    }

    /// Parse indicator JSON, score it, and return report JSON
    pub fn process(&self, indicators_json: &str) -> Result<String, ComputeError> {
        let vector = parse_indicators(indicators_json)?;
        self.encoder.encode_to_json(&vector, analyze(&vector))
    }

    /// Score a preset scenario and return report JSON
    pub fn process_scenario(&self, kind: ScenarioKind) -> Result<String, ComputeError> {
        let scenario = Scenario::get(kind);
        self.encoder
            .encode_to_json(&scenario.data, analyze(&scenario.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::{AI_FREE_DAYS, MANUAL_PROBLEM_SOLVING, REDUCE_DEPENDENCY};
    use crate::types::{Indicator, RiskLevel, UsageFrequency};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn fired_ids(result: &AnalysisResult) -> Vec<&str> {
        result
            .symbolic
            .fired_rules
            .iter()
            .map(|r| r.rule_id.as_str())
            .collect()
    }

    #[test]
    fn test_high_risk_scenario() {
        let result = analyze(&Scenario::get(ScenarioKind::High).data);

        assert_eq!(
            fired_ids(&result),
            vec!["NS001", "NS002", "NS003", "NS004", "NS005", "NS006", "NS007", "NS008"]
        );
        assert_eq!(result.neural_score, 1.0);
        assert_eq!(result.symbolic.risk_score, 1.0);
        assert_eq!(result.risk_score, 1.0);
        assert!(result.risk_level >= RiskLevel::High);
        assert_eq!(result.risk_level, RiskLevel::Severe);

        let factor_names: Vec<&str> = result.top_factors.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            factor_names,
            vec!["AI Dependence", "Cognitive Offloading", "Problem Solving Decline"]
        );
        assert!(result.top_factors.iter().all(|f| f.is_risk));

        assert_eq!(result.recommendations.len(), 5);
        assert_eq!(result.recommendations[0], REDUCE_DEPENDENCY);
        assert_eq!(result.recommendations[1], MANUAL_PROBLEM_SOLVING);
        assert_eq!(result.recommendations[2], AI_FREE_DAYS);
    }

    #[test]
    fn test_low_risk_scenario() {
        let result = analyze(&Scenario::get(ScenarioKind::Low).data);

        assert!(result.risk_level <= RiskLevel::Low);
        assert_eq!(result.risk_level, RiskLevel::Minimal);
        assert!(result.symbolic.fired_rules.is_empty());
        assert_eq!(result.recommendations.len(), 2);
    }

    #[test]
    fn test_single_field_vector() {
        let vector = IndicatorVector::default().with(Indicator::AiDependence, 0.95);
        let result = analyze(&vector);

        assert_eq!(fired_ids(&result), vec!["NS005"]);
        // 0.5 base + 0.95 * 0.14, no usage multiplier
        assert!((result.neural_score - 0.633).abs() < 1e-9);
        assert!((result.symbolic.risk_score - 0.25).abs() < 1e-12);
        assert!((result.risk_score - 0.4798).abs() < 1e-9);
        assert_eq!(result.risk_level, RiskLevel::Moderate);
        assert_eq!(result.top_factors.len(), 3);
        assert_eq!(result.recommendations, vec![AI_FREE_DAYS.to_string()]);
    }

    #[test]
    fn test_empty_vector() {
        let result = analyze(&IndicatorVector::default());

        assert_eq!(result.neural_score, 0.5);
        assert_eq!(result.symbolic.risk_score, 0.0);
        assert!((result.risk_score - 0.3).abs() < 1e-12);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.top_factors.len(), 3);
        assert_eq!(result.recommendations.len(), 2);
    }

    #[test]
    fn test_analyze_json() {
        let json = r#"{"ai_dependence": 0.95, "usage_frequency": "sometimes", "extra": 1}"#;
        let report: serde_json::Value =
            serde_json::from_str(&analyze_json(json.to_string()).unwrap()).unwrap();

        assert_eq!(report["analysis"]["risk_level"], "moderate");
        assert_eq!(report["coverage"]["present"], 2);
        assert_eq!(report["producer"]["name"], "neurosym-risk");
    }

    #[test]
    fn test_invalid_json() {
        let result = analyze_json("not valid json".to_string());
        assert!(matches!(result, Err(ComputeError::ParseError(_))));

        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("Failed to parse indicator payload: "));
        assert_eq!(message.matches("Failed to parse").count(), 1);
    }

    #[test]
    fn test_float_month_count_in_json() {
        let report: serde_json::Value = serde_json::from_str(
            &analyze_json(r#"{"temporal_usage_months": 12.0}"#.to_string()).unwrap(),
        )
        .unwrap();
        // 0.5 + 12 * 0.005
        let neural = report["analysis"]["neural_score"].as_f64().unwrap();
        assert!((neural - 0.56).abs() < 1e-9);
        assert_eq!(report["coverage"]["present"], 1);

        let vector =
            parse_indicators(r#"{"engagement_metrics": 0.25, "temporal_usage_months": 6.5}"#)
                .unwrap();
        assert_eq!(fired_ids(&analyze(&vector)), vec!["NS006"]);
    }

    #[test]
    fn test_nan_indicator_keeps_scores_bounded() {
        let vector = IndicatorVector::default().with(Indicator::ReflectionTime, f64::NAN);
        let result = analyze(&vector);

        assert_eq!(result.neural_score, 0.5);
        assert!((result.risk_score - 0.3).abs() < 1e-12);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_analyzer_keeps_instance_id() {
        let analyzer = RiskAnalyzer::with_instance_id("fixed".to_string());
        let first = analyzer.report(&IndicatorVector::default());
        let second = analyzer.report(&Scenario::get(ScenarioKind::Low).data);

        assert_eq!(first.producer.instance_id, "fixed");
        assert_eq!(second.producer.instance_id, "fixed");
    }

    #[test]
    fn test_process_scenario() {
        let analyzer = RiskAnalyzer::new();
        let report: serde_json::Value =
            serde_json::from_str(&analyzer.process_scenario(ScenarioKind::Moderate).unwrap())
                .unwrap();

        assert_eq!(report["analysis"]["risk_level"], "low");
        assert_eq!(report["coverage"]["coverage"], 1.0);
    }

    fn unit_value() -> impl Strategy<Value = Option<f64>> {
        prop::option::of(0.0f64..=1.0)
    }

    fn frequency() -> impl Strategy<Value = Option<UsageFrequency>> {
        prop::option::of(prop_oneof![
            Just(UsageFrequency::Low),
            Just(UsageFrequency::Medium),
            Just(UsageFrequency::High),
            Just(UsageFrequency::Unknown),
        ])
    }

    fn indicator_vector() -> impl Strategy<Value = IndicatorVector> {
        (
            prop::collection::vec(unit_value(), 13),
            prop::option::of(0u32..120),
            frequency(),
        )
            .prop_map(|(values, months, usage_frequency)| {
                let mut vector = IndicatorVector {
                    temporal_usage_months: months,
                    usage_frequency,
                    ..Default::default()
                };
                for (indicator, value) in Indicator::ALL.into_iter().zip(values) {
                    if let Some(value) = value {
                        vector.set(indicator, value);
                    }
                }
                vector
            })
    }

    proptest! {
        #[test]
        fn analysis_is_deterministic(vector in indicator_vector()) {
            prop_assert_eq!(analyze(&vector), analyze(&vector));
        }

        #[test]
        fn scores_are_bounded(vector in indicator_vector()) {
            let result = analyze(&vector);
            prop_assert!((0.0..=1.0).contains(&result.neural_score));
            prop_assert!((0.0..=1.0).contains(&result.symbolic.risk_score));
            prop_assert!((0.0..=1.0).contains(&result.risk_score));
        }

        #[test]
        fn fired_rules_are_in_id_order(vector in indicator_vector()) {
            let result = analyze(&vector);
            let ids: Vec<&str> = fired_ids(&result);
            let mut sorted = ids.clone();
            sorted.sort();
            prop_assert_eq!(ids, sorted);
        }

        #[test]
        fn always_three_factors_and_some_recommendation(vector in indicator_vector()) {
            let result = analyze(&vector);
            prop_assert_eq!(result.top_factors.len(), 3);
            prop_assert!(!result.recommendations.is_empty());
        }
    }
}
