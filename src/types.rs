//! Core types for the NeuroSymbolic Risk engine
//!
//! This module defines the data structures that flow through each stage of an
//! analysis: the indicator vector, fired rules, ranked factors, the analysis
//! result, and the report envelope.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ComputeError;

/// Self-reported frequency of AI tool usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageFrequency {
    Low,
    Medium,
    High,
    /// Any value the engine does not recognize
    #[serde(other)]
    Unknown,
}

impl UsageFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageFrequency::Low => "low",
            UsageFrequency::Medium => "medium",
            UsageFrequency::High => "high",
            UsageFrequency::Unknown => "unknown",
        }
    }

    /// Multiplier applied to the whole neural score, base offset included
    pub fn multiplier(&self) -> f64 {
        match self {
            UsageFrequency::Low => 0.8,
            UsageFrequency::Medium => 1.0,
            UsageFrequency::High => 1.2,
            UsageFrequency::Unknown => 1.0,
        }
    }
}

/// Closed set of numeric indicator keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    CognitiveOffloading,
    NeuralActivity,
    MemoryRetention,
    CopyPasteBehavior,
    AnalyticalEngagement,
    ReflectionTime,
    VerificationRate,
    AiDependence,
    EngagementMetrics,
    ProblemSolvingDecline,
    ExecutiveFunction,
    AttentionSpan,
    TaskSwitching,
    TemporalUsageMonths,
}

impl Indicator {
    /// All numeric indicators, in model declaration order
    pub const ALL: [Indicator; 14] = [
        Indicator::CognitiveOffloading,
        Indicator::NeuralActivity,
        Indicator::MemoryRetention,
        Indicator::CopyPasteBehavior,
        Indicator::AnalyticalEngagement,
        Indicator::ReflectionTime,
        Indicator::VerificationRate,
        Indicator::AiDependence,
        Indicator::EngagementMetrics,
        Indicator::ProblemSolvingDecline,
        Indicator::ExecutiveFunction,
        Indicator::AttentionSpan,
        Indicator::TaskSwitching,
        Indicator::TemporalUsageMonths,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Indicator::CognitiveOffloading => "cognitive_offloading",
            Indicator::NeuralActivity => "neural_activity",
            Indicator::MemoryRetention => "memory_retention",
            Indicator::CopyPasteBehavior => "copy_paste_behavior",
            Indicator::AnalyticalEngagement => "analytical_engagement",
            Indicator::ReflectionTime => "reflection_time",
            Indicator::VerificationRate => "verification_rate",
            Indicator::AiDependence => "ai_dependence",
            Indicator::EngagementMetrics => "engagement_metrics",
            Indicator::ProblemSolvingDecline => "problem_solving_decline",
            Indicator::ExecutiveFunction => "executive_function",
            Indicator::AttentionSpan => "attention_span",
            Indicator::TaskSwitching => "task_switching",
            Indicator::TemporalUsageMonths => "temporal_usage_months",
        }
    }

    /// Whether the value is expected to lie in [0, 1]
    ///
    /// `temporal_usage_months` is a raw month count.
    pub fn is_normalized(&self) -> bool {
        !matches!(self, Indicator::TemporalUsageMonths)
    }
}

/// Input to one analysis: named indicator intensities plus usage metadata.
///
/// Every field is optional. An absent field is distinct from a zero value:
/// it contributes nothing to the neural sum and never satisfies a rule
/// predicate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorVector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cognitive_offloading: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neural_activity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_retention: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_paste_behavior: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytical_engagement: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reflection_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_dependence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_metrics: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_solving_decline: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executive_function: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attention_span: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_switching: Option<f64>,
    /// Months of AI tool usage (raw count, not normalized)
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_months"
    )]
    pub temporal_usage_months: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_frequency: Option<UsageFrequency>,
}

impl IndicatorVector {
    /// Look up a numeric indicator by key
    pub fn get(&self, indicator: Indicator) -> Option<f64> {
        match indicator {
            Indicator::CognitiveOffloading => self.cognitive_offloading,
            Indicator::NeuralActivity => self.neural_activity,
            Indicator::MemoryRetention => self.memory_retention,
            Indicator::CopyPasteBehavior => self.copy_paste_behavior,
            Indicator::AnalyticalEngagement => self.analytical_engagement,
            Indicator::ReflectionTime => self.reflection_time,
            Indicator::VerificationRate => self.verification_rate,
            Indicator::AiDependence => self.ai_dependence,
            Indicator::EngagementMetrics => self.engagement_metrics,
            Indicator::ProblemSolvingDecline => self.problem_solving_decline,
            Indicator::ExecutiveFunction => self.executive_function,
            Indicator::AttentionSpan => self.attention_span,
            Indicator::TaskSwitching => self.task_switching,
            Indicator::TemporalUsageMonths => self.temporal_usage_months.map(f64::from),
        }
    }

    /// Set a numeric indicator by key.
    ///
    /// `temporal_usage_months` is rounded to the nearest whole month and
    /// floored at zero.
    pub fn set(&mut self, indicator: Indicator, value: f64) {
        let slot = match indicator {
            Indicator::CognitiveOffloading => &mut self.cognitive_offloading,
            Indicator::NeuralActivity => &mut self.neural_activity,
            Indicator::MemoryRetention => &mut self.memory_retention,
            Indicator::CopyPasteBehavior => &mut self.copy_paste_behavior,
            Indicator::AnalyticalEngagement => &mut self.analytical_engagement,
            Indicator::ReflectionTime => &mut self.reflection_time,
            Indicator::VerificationRate => &mut self.verification_rate,
            Indicator::AiDependence => &mut self.ai_dependence,
            Indicator::EngagementMetrics => &mut self.engagement_metrics,
            Indicator::ProblemSolvingDecline => &mut self.problem_solving_decline,
            Indicator::ExecutiveFunction => &mut self.executive_function,
            Indicator::AttentionSpan => &mut self.attention_span,
            Indicator::TaskSwitching => &mut self.task_switching,
            Indicator::TemporalUsageMonths => {
                self.temporal_usage_months = Some(whole_months(value));
                return;
            }
        };
        *slot = Some(value);
    }

    /// Builder-style variant of [`IndicatorVector::set`]
    pub fn with(mut self, indicator: Indicator, value: f64) -> Self {
        self.set(indicator, value);
        self
    }

    pub fn with_usage_frequency(mut self, frequency: UsageFrequency) -> Self {
        self.usage_frequency = Some(frequency);
        self
    }

    /// Reject NaN and normalized values outside [0, 1].
    ///
    /// Scoring tolerates such values: non-finite values are left out of the
    /// neural sum and NaN never fires a rule. This is for collaborators that
    /// want to refuse them at the boundary.
    pub fn validate(&self) -> Result<(), ComputeError> {
        for indicator in Indicator::ALL.into_iter().filter(Indicator::is_normalized) {
            if let Some(value) = self.get(indicator) {
                if !(0.0..=1.0).contains(&value) {
                    return Err(ComputeError::InvalidIndicator {
                        name: indicator.as_str().to_string(),
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Round to the nearest whole month, floored at zero. NaN reads as zero.
fn whole_months(value: f64) -> u32 {
    value.max(0.0).round() as u32
}

/// Accept any JSON number for the month count, not only unsigned integers
fn deserialize_months<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map(whole_months))
}

/// A rule whose predicate held for the analyzed vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiredRule {
    pub rule_id: String,
    pub description: String,
    /// Fixed confidence weight of the rule (0-1)
    pub confidence: f64,
    /// Fixed activation emitted when the rule fires (0-1)
    pub activation: f64,
}

/// Output of the symbolic rule evaluator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolicResult {
    /// Fired rules in evaluation order (NS001 first)
    pub fired_rules: Vec<FiredRule>,
    /// Accumulated rule increments, capped at 1.0
    pub risk_score: f64,
}

/// Discretized risk category, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Minimal,
    Low,
    Moderate,
    High,
    Severe,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Minimal => "minimal",
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Severe => "severe",
        }
    }

    /// Capitalized display label
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Minimal => "Minimal",
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Severe => "Severe",
        }
    }
}

/// A ranked contributing factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    /// Ranking value, oriented so that higher is worse
    pub value: f64,
    /// Whether the underlying indicator crossed its concern threshold
    pub is_risk: bool,
}

/// Complete result of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Fused score: 0.6 * neural + 0.4 * symbolic
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub neural_score: f64,
    pub symbolic: SymbolicResult,
    /// Exactly three factors, highest ranking value first
    pub top_factors: Vec<RiskFactor>,
    pub recommendations: Vec<String>,
}

/// Quality flag describing an input issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityFlag {
    MissingIndicator(String),
    MissingUsageFrequency,
    UnknownUsageFrequency,
    OutOfRange(String),
}

/// How much of the expected input was supplied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputCoverage {
    pub present: u32,
    pub expected: u32,
    /// present / expected (0-1)
    pub coverage: f64,
    pub flags: Vec<QualityFlag>,
}

/// One reading of the protective-indicator profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileReading {
    pub label: String,
    pub value: f64,
    /// False when the indicator was absent and the neutral value was used
    pub observed: bool,
}

/// Report producer metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Complete report envelope around an analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReport {
    pub report_version: String,
    pub producer: ReportProducer,
    pub computed_at_utc: String,
    pub coverage: InputCoverage,
    pub profile: Vec<ProfileReading>,
    pub analysis: AnalysisResult,
}
