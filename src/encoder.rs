//! Report encoding
//!
//! Wraps an analysis in a report envelope with producer metadata, input
//! coverage and the protective profile, and serializes it to JSON.

use crate::coverage;
use crate::error::ComputeError;
use crate::profile::protective_profile;
use crate::types::{AnalysisResult, IndicatorVector, ReportProducer, RiskReport};
use crate::{PRODUCER_NAME, VERSION};
use chrono::Utc;
use uuid::Uuid;

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Encoder for risk reports
pub struct ReportEncoder {
    instance_id: String,
}

impl Default for ReportEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Build a report for an analysis of `vector`
    pub fn encode(&self, vector: &IndicatorVector, analysis: AnalysisResult) -> RiskReport {
        RiskReport {
            report_version: REPORT_VERSION.to_string(),
            producer: ReportProducer {
                name: PRODUCER_NAME.to_string(),
                version: VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            computed_at_utc: Utc::now().to_rfc3339(),
            coverage: coverage::assess(vector),
            profile: protective_profile(vector),
            analysis,
        }
    }

    /// Encode to a pretty-printed JSON string
    pub fn encode_to_json(
        &self,
        vector: &IndicatorVector,
        analysis: AnalysisResult,
    ) -> Result<String, ComputeError> {
        let report = self.encode(vector, analysis);
        serde_json::to_string_pretty(&report)
            .map_err(|e| ComputeError::EncodingError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::analyze;
    use crate::types::Indicator;

    #[test]
    fn test_encode_report_envelope() {
        let encoder = ReportEncoder::with_instance_id("test-instance".to_string());
        let vector = IndicatorVector::default().with(Indicator::AiDependence, 0.95);
        let report = encoder.encode(&vector, analyze(&vector));

        assert_eq!(report.report_version, REPORT_VERSION);
        assert_eq!(report.producer.name, PRODUCER_NAME);
        assert_eq!(report.producer.instance_id, "test-instance");
        assert_eq!(report.coverage.present, 1);
        assert_eq!(report.profile.len(), 7);
        assert!(chrono::DateTime::parse_from_rfc3339(&report.computed_at_utc).is_ok());
    }

    #[test]
    fn test_encode_to_json_fields() {
        let encoder = ReportEncoder::new();
        let vector = IndicatorVector::default().with(Indicator::AiDependence, 0.95);
        let json = encoder.encode_to_json(&vector, analyze(&vector)).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["analysis"]["risk_level"], "moderate");
        assert_eq!(value["analysis"]["symbolic"]["fired_rules"][0]["rule_id"], "NS005");
        assert!(Uuid::parse_str(value["producer"]["instance_id"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn test_unique_instance_ids() {
        assert_ne!(ReportEncoder::new().instance_id(), ReportEncoder::new().instance_id());
    }
}
