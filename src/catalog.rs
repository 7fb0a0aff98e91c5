//! Research indicator catalog
//!
//! Reference data describing the published indicators behind the model.
//! Displayed to users; not consulted by scoring.

use serde::Serialize;

/// Broad class of a research indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorCategory {
    Neurological,
    Behavioral,
    Cognitive,
}

/// A published indicator with its reported weight
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResearchIndicator {
    pub name: &'static str,
    pub weight: f64,
    pub category: IndicatorCategory,
    pub source: &'static str,
}

const fn indicator(
    name: &'static str,
    weight: f64,
    category: IndicatorCategory,
    source: &'static str,
) -> ResearchIndicator {
    ResearchIndicator {
        name,
        weight,
        category,
        source,
    }
}

pub static RESEARCH_INDICATORS: [ResearchIndicator; 10] = [
    indicator("reduced_brain_connectivity", 0.9, IndicatorCategory::Neurological, "MIT_ChatGPT_2025"),
    indicator("lower_memory_retention", 0.85, IndicatorCategory::Neurological, "MIT_ChatGPT_2025"),
    indicator("diminished_neural_activity", 0.8, IndicatorCategory::Neurological, "MIT_ChatGPT_2025"),
    indicator("cognitive_offloading", 0.75, IndicatorCategory::Behavioral, "Gerlich_2025"),
    indicator("decreased_critical_thinking", 0.9, IndicatorCategory::Cognitive, "Gerlich_2025"),
    indicator("metacognitive_laziness", 0.7, IndicatorCategory::Behavioral, "Conversation_2025"),
    indicator("attention_decline", 0.8, IndicatorCategory::Cognitive, "MIT_ChatGPT_2025"),
    indicator("working_memory_impairment", 0.85, IndicatorCategory::Cognitive, "Various_2024"),
    indicator("pattern_recognition_degradation", 0.6, IndicatorCategory::Cognitive, "Various_2024"),
    indicator("executive_function_decline", 0.88, IndicatorCategory::Cognitive, "Various_2024"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_weights_are_normalized() {
        assert!(RESEARCH_INDICATORS
            .iter()
            .all(|i| (0.0..=1.0).contains(&i.weight)));
    }

    #[test]
    fn test_catalog_serializes_category_lowercase() {
        let json = serde_json::to_value(&RESEARCH_INDICATORS[3]).unwrap();
        assert_eq!(json["category"], "behavioral");
        assert_eq!(json["source"], "Gerlich_2025");
    }
}
