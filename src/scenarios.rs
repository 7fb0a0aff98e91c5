//! Preset demonstration scenarios
//!
//! Three literal indicator vectors ("high", "moderate", "low") shipped with
//! declared scores and levels. The declarations are annotations, not engine
//! output, so [`Scenario::verify`] re-runs the engine and reports whether the
//! declared level agrees with the classifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ComputeError;
use crate::pipeline::analyze;
use crate::types::{IndicatorVector, RiskLevel, UsageFrequency};

/// Identifier of a preset scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    High,
    Moderate,
    Low,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 3] = [ScenarioKind::High, ScenarioKind::Moderate, ScenarioKind::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioKind::High => "high",
            ScenarioKind::Moderate => "moderate",
            ScenarioKind::Low => "low",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioKind {
    type Err = ComputeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(ScenarioKind::High),
            "moderate" => Ok(ScenarioKind::Moderate),
            "low" => Ok(ScenarioKind::Low),
            other => Err(ComputeError::UnknownScenario(other.to_string())),
        }
    }
}

/// A preset scenario with its declared (annotated) outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub name: String,
    pub declared_risk_score: f64,
    pub declared_risk_level: RiskLevel,
    pub data: IndicatorVector,
}

/// Result of checking a scenario's declared outcome against the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureCheck {
    pub kind: ScenarioKind,
    pub declared_risk_score: f64,
    pub computed_risk_score: f64,
    pub declared_risk_level: RiskLevel,
    pub computed_risk_level: RiskLevel,
    pub level_matches: bool,
}

impl Scenario {
    /// Build the preset for `kind`
    pub fn get(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::High => Scenario {
                kind,
                name: "High Risk User".to_string(),
                declared_risk_score: 0.674,
                declared_risk_level: RiskLevel::High,
                data: IndicatorVector {
                    cognitive_offloading: Some(0.85),
                    neural_activity: Some(0.25),
                    memory_retention: Some(0.35),
                    copy_paste_behavior: Some(0.90),
                    analytical_engagement: Some(0.20),
                    reflection_time: Some(0.10),
                    verification_rate: Some(0.15),
                    ai_dependence: Some(0.95),
                    engagement_metrics: Some(0.25),
                    problem_solving_decline: Some(0.80),
                    executive_function: Some(0.40),
                    attention_span: Some(0.20),
                    task_switching: Some(0.90),
                    temporal_usage_months: Some(12),
                    usage_frequency: Some(UsageFrequency::High),
                },
            },
            ScenarioKind::Moderate => Scenario {
                kind,
                name: "Moderate Risk User".to_string(),
                declared_risk_score: 0.200,
                declared_risk_level: RiskLevel::Low,
                data: IndicatorVector {
                    cognitive_offloading: Some(0.55),
                    neural_activity: Some(0.50),
                    memory_retention: Some(0.60),
                    copy_paste_behavior: Some(0.45),
                    analytical_engagement: Some(0.55),
                    reflection_time: Some(0.40),
                    verification_rate: Some(0.50),
                    ai_dependence: Some(0.60),
                    engagement_metrics: Some(0.50),
                    problem_solving_decline: Some(0.40),
                    executive_function: Some(0.65),
                    attention_span: Some(0.50),
                    task_switching: Some(0.45),
                    temporal_usage_months: Some(6),
                    usage_frequency: Some(UsageFrequency::Medium),
                },
            },
            ScenarioKind::Low => Scenario {
                kind,
                name: "Low Risk User".to_string(),
                declared_risk_score: 0.101,
                declared_risk_level: RiskLevel::Minimal,
                data: IndicatorVector {
                    cognitive_offloading: Some(0.30),
                    neural_activity: Some(0.80),
                    memory_retention: Some(0.85),
                    copy_paste_behavior: Some(0.20),
                    analytical_engagement: Some(0.80),
                    reflection_time: Some(0.70),
                    verification_rate: Some(0.80),
                    ai_dependence: Some(0.30),
                    engagement_metrics: Some(0.75),
                    problem_solving_decline: Some(0.20),
                    executive_function: Some(0.85),
                    attention_span: Some(0.80),
                    task_switching: Some(0.25),
                    temporal_usage_months: Some(3),
                    usage_frequency: Some(UsageFrequency::Low),
                },
            },
        }
    }

    /// Run the engine on the preset and compare with the declared outcome
    pub fn verify(&self) -> FixtureCheck {
        let result = analyze(&self.data);

        FixtureCheck {
            kind: self.kind,
            declared_risk_score: self.declared_risk_score,
            computed_risk_score: result.risk_score,
            declared_risk_level: self.declared_risk_level,
            computed_risk_level: result.risk_level,
            level_matches: self.declared_risk_level == result.risk_level,
        }
    }
}
