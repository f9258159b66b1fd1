//! Recommendation bundles and the result-generation wire contract.

use serde::{Deserialize, Serialize};

use crate::assessment::normalizer::NormalizedAnswer;
use crate::assessment::questions::Tier;

/// Coarse interest category derived from keyword counting.
///
/// Declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterestCategory {
    Science,
    Arts,
    Commerce,
    Humanities,
}

impl InterestCategory {
    pub const ALL: [InterestCategory; 4] = [
        InterestCategory::Science,
        InterestCategory::Arts,
        InterestCategory::Commerce,
        InterestCategory::Humanities,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            InterestCategory::Science => &["science", "math", "technology"],
            InterestCategory::Arts => &["arts", "creative", "design"],
            InterestCategory::Commerce => &["business", "commerce", "finance"],
            InterestCategory::Humanities => &["social", "humanities", "psychology"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InterestCategory::Science => "Science",
            InterestCategory::Arts => "Arts",
            InterestCategory::Commerce => "Commerce",
            InterestCategory::Humanities => "Humanities",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Bundles
// ────────────────────────────────────────────────────────────────────────────

/// Entry-tier (class 10) bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecommendation {
    pub recommended_stream: String,
    pub alternate_stream: String,
    pub core_subjects: String,
    pub optional_subjects: String,
    pub board_recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedSuggestion {
    pub name: String,
    pub description: String,
}

impl NamedSuggestion {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    fn is_well_formed(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Advanced-tier (class 12) bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedRecommendation {
    pub recommended_degrees: Vec<NamedSuggestion>,
    pub career_paths: Vec<NamedSuggestion>,
    pub entrance_exams: String,
    pub preparation_tips: Vec<String>,
}

/// Either bundle. Serialized without a tag so the payload matches the
/// per-tier response schema exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recommendation {
    Entry(EntryRecommendation),
    Advanced(AdvancedRecommendation),
}

impl Recommendation {
    pub fn tier(&self) -> Tier {
        match self {
            Recommendation::Entry(_) => Tier::Entry,
            Recommendation::Advanced(_) => Tier::Advanced,
        }
    }

    /// Headline fields and lists must be non-empty.
    pub fn is_well_formed(&self) -> bool {
        match self {
            Recommendation::Entry(r) => {
                !r.recommended_stream.trim().is_empty()
                    && !r.alternate_stream.trim().is_empty()
                    && !r.core_subjects.trim().is_empty()
                    && !r.board_recommendations.is_empty()
            }
            Recommendation::Advanced(r) => {
                !r.recommended_degrees.is_empty()
                    && r.recommended_degrees.iter().all(NamedSuggestion::is_well_formed)
                    && !r.career_paths.is_empty()
                    && r.career_paths.iter().all(NamedSuggestion::is_well_formed)
                    && !r.entrance_exams.trim().is_empty()
                    && !r.preparation_tips.is_empty()
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Outcome
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Remote,
    Heuristic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTally {
    pub category: InterestCategory,
    pub count: u32,
}

/// Keyword-count summary behind a heuristic recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestProfile {
    pub analytical: u32,
    pub tallies: Vec<CategoryTally>,
    pub primary: InterestCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOutcome {
    pub recommendation: Recommendation,
    pub source: RecommendationSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<InterestProfile>,
    /// Non-blocking message shown when the heuristic stood in for a failed
    /// remote call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Body of `POST /api/v1/assessments/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub assessment_type: Tier,
    #[serde(default)]
    pub answers: Vec<NormalizedAnswer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_recommendation_picks_matching_schema() {
        let entry: Recommendation = serde_json::from_str(
            r#"{"recommendedStream":"Arts","alternateStream":"Humanities",
                "coreSubjects":"History","optionalSubjects":"Music",
                "boardRecommendations":["CBSE"]}"#,
        )
        .unwrap();
        assert_eq!(entry.tier(), Tier::Entry);

        let advanced: Recommendation = serde_json::from_str(
            r#"{"recommendedDegrees":[{"name":"BA","description":"d"}],
                "careerPaths":[{"name":"Writer","description":"d"}],
                "entranceExams":"CUET","preparationTips":["read"]}"#,
        )
        .unwrap();
        assert_eq!(advanced.tier(), Tier::Advanced);
    }

    #[test]
    fn test_blank_headline_is_not_well_formed() {
        let rec = Recommendation::Entry(EntryRecommendation {
            recommended_stream: "  ".to_string(),
            alternate_stream: "Commerce".to_string(),
            core_subjects: "Physics".to_string(),
            optional_subjects: String::new(),
            board_recommendations: vec!["CBSE".to_string()],
        });
        assert!(!rec.is_well_formed());
    }

    #[test]
    fn test_advanced_requires_non_empty_lists() {
        let rec = Recommendation::Advanced(AdvancedRecommendation {
            recommended_degrees: vec![],
            career_paths: vec![NamedSuggestion::new("Engineer", "")],
            entrance_exams: "JEE".to_string(),
            preparation_tips: vec!["practice".to_string()],
        });
        assert!(!rec.is_well_formed());
    }

    #[test]
    fn test_generation_request_accepts_legacy_tier_name() {
        let req: GenerationRequest = serde_json::from_str(
            r#"{"assessmentType":"class10","answers":[{"question":"q","answer":"a"}]}"#,
        )
        .unwrap();
        assert_eq!(req.assessment_type, Tier::Entry);
        assert_eq!(req.answers.len(), 1);
    }
}
