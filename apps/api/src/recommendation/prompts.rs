// LLM prompt constants for result generation.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::assessment::normalizer::NormalizedAnswer;
use crate::assessment::questions::Tier;
use crate::llm_client::prompts::{AUDIENCE_INSTRUCTION, JSON_ONLY_SYSTEM};

/// System prompt for recommendation generation.
pub fn generation_system() -> String {
    format!(
        "You are an experienced career counsellor. {AUDIENCE_INSTRUCTION} {JSON_ONLY_SYSTEM}"
    )
}

const ENTRY_FIELDS: &str = r#"Please provide the following:
1. Recommended Stream (Science, Commerce, Arts/Humanities)
2. Alternative Stream
3. Core Subjects for the recommended stream
4. Optional Subjects suggestions
5. Board Recommendations (CBSE, ICSE, State Board) with brief explanation

Return a JSON object with this EXACT schema (no extra fields):
{
  "recommendedStream": "Science",
  "alternateStream": "Commerce",
  "coreSubjects": "Physics, Chemistry, Mathematics, English",
  "optionalSubjects": "Computer Science or Biology",
  "boardRecommendations": ["CBSE - Good for competitive exam preparation"]
}"#;

const ADVANCED_FIELDS: &str = r#"Please provide the following:
1. Three Recommended Undergraduate Degrees with brief descriptions
2. Three Suitable Career Paths with brief descriptions
3. Relevant Entrance Exams
4. Four specific preparation tips for the recommended career path

Return a JSON object with this EXACT schema (no extra fields):
{
  "recommendedDegrees": [{"name": "B.Tech Computer Science", "description": "..."}],
  "careerPaths": [{"name": "Software Development", "description": "..."}],
  "entranceExams": "JEE Main, CUET",
  "preparationTips": ["..."]
}"#;

/// User prompt listing every question/answer pair and the exact field set.
pub fn build_generation_prompt(tier: Tier, answers: &[NormalizedAnswer]) -> String {
    let responses = answers
        .iter()
        .map(|a| format!("- Question: {}\n  Answer: {}", a.question, a.answer))
        .collect::<Vec<_>>()
        .join("\n");

    let fields = match tier {
        Tier::Entry => ENTRY_FIELDS,
        Tier::Advanced => ADVANCED_FIELDS,
    };

    format!(
        "Based on the following career assessment responses, provide tailored educational and career guidance.\n\n\
         Assessment Type: {}\n\n\
         Student Responses:\n{responses}\n\n\
         {fields}",
        tier.title()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_every_answer_and_schema() {
        let answers = vec![
            NormalizedAnswer {
                question: "Which subjects do you enjoy the most?".to_string(),
                answer: "Mathematics, Physics".to_string(),
            },
            NormalizedAnswer {
                question: "Additional interests (please specify)".to_string(),
                answer: "Robotics".to_string(),
            },
        ];
        let prompt = build_generation_prompt(Tier::Entry, &answers);
        assert!(prompt.contains("Assessment Type: Class 10 Stream Selection"));
        assert!(prompt.contains("- Question: Which subjects do you enjoy the most?\n  Answer: Mathematics, Physics"));
        assert!(prompt.contains("Answer: Robotics"));
        assert!(prompt.contains("\"boardRecommendations\""));
        assert!(!prompt.contains("recommendedDegrees"));
    }

    #[test]
    fn test_advanced_prompt_requests_degree_schema() {
        let prompt = build_generation_prompt(Tier::Advanced, &[]);
        assert!(prompt.contains("Class 12 Career Planning"));
        assert!(prompt.contains("\"preparationTips\""));
    }
}
