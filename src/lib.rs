//! NeuroSymbolic Risk - deterministic scoring engine for AI-usage cognitive decline risk
//!
//! An analysis blends a fixed linear model ("neural" score) with a small fixed
//! rule set ("symbolic" score), then classifies, ranks contributing factors and
//! derives recommendations:
//!
//! neural score → rule evaluation → fusion → classification → factor ranking
//! → recommendations
//!
//! All model coefficients and thresholds are compile-time constants. Every
//! stage is pure, so [`analyze`] can be called concurrently without locking.

pub mod catalog;
pub mod coverage;
pub mod encoder;
pub mod error;
pub mod factors;
pub mod fusion;
pub mod neural;
pub mod pipeline;
pub mod profile;
pub mod recommend;
pub mod rules;
pub mod scenarios;
pub mod types;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use error::ComputeError;
pub use pipeline::{analyze, analyze_json, parse_indicators, RiskAnalyzer};
pub use scenarios::{FixtureCheck, Scenario, ScenarioKind};
pub use types::{
    AnalysisResult, FiredRule, Indicator, IndicatorVector, RiskFactor, RiskLevel, RiskReport,
    SymbolicResult, UsageFrequency,
};

/// Library version embedded in all reports
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for reports
pub const PRODUCER_NAME: &str = "neurosym-risk";
