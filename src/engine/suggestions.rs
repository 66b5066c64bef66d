//! The fixed improvement suggestion catalog.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Kind of improvement a suggestion targets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SuggestionKind {
    Performance,
    Reliability,
    Scalability,
}

/// Implementation effort class.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// Recommended ordering of work.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One improvement suggestion with its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub complexity: Complexity,
    pub estimated_time: &'static str,
    pub priority: Priority,
}

static CATALOG: Lazy<Vec<Suggestion>> = Lazy::new(|| {
    vec![
        Suggestion {
            id: "suggestion_1",
            kind: SuggestionKind::Performance,
            title: "Optimize Container Build Cache",
            description: "Implement multi-stage Docker builds with better layer caching",
            impact: "Build time reduction: 30-40%",
            complexity: Complexity::Medium,
            estimated_time: "2-3 hours",
            priority: Priority::High,
        },
        Suggestion {
            id: "suggestion_2",
            kind: SuggestionKind::Reliability,
            title: "Add Circuit Breaker Pattern",
            description: "Implement circuit breakers for external API calls",
            impact: "Error rate reduction: 25%",
            complexity: Complexity::Low,
            estimated_time: "1-2 hours",
            priority: Priority::Medium,
        },
        Suggestion {
            id: "suggestion_3",
            kind: SuggestionKind::Scalability,
            title: "Implement Horizontal Pod Autoscaling",
            description: "Add automatic scaling based on CPU and memory usage",
            impact: "Better resource utilization and cost optimization",
            complexity: Complexity::High,
            estimated_time: "4-6 hours",
            priority: Priority::Low,
        },
    ]
});

/// The full suggestion catalog.
pub fn suggestion_catalog() -> &'static [Suggestion] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_has_three_distinct_entries() {
        let catalog = suggestion_catalog();
        assert_eq!(catalog.len(), 3);

        let ids: HashSet<_> = catalog.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.contains("suggestion_1"));
        assert!(ids.contains("suggestion_2"));
        assert!(ids.contains("suggestion_3"));
    }

    #[test]
    fn enums_render_lowercase() {
        assert_eq!(SuggestionKind::Performance.to_string(), "performance");
        assert_eq!(Complexity::Medium.to_string(), "medium");
        assert_eq!(Priority::High.to_string(), "high");

        let json = serde_json::to_value(&suggestion_catalog()[2]).unwrap();
        assert_eq!(json["type"], "scalability");
        assert_eq!(json["priority"], "low");
        assert_eq!(json["id"], "suggestion_3");
    }

    #[test]
    fn kinds_parse_from_strings() {
        use std::str::FromStr;

        assert_eq!(
            SuggestionKind::from_str("reliability").unwrap(),
            SuggestionKind::Reliability
        );
        assert!(SuggestionKind::from_str("unknown").is_err());
    }
}
