//! Builds chat openers from structured results so the counsellor picks up
//! where the assessment or career explorer left off.

use crate::careers::catalog::CareerPath;
use crate::recommendation::models::{NamedSuggestion, Recommendation};

fn names(items: &[NamedSuggestion]) -> String {
    items
        .iter()
        .map(|i| i.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn discussion_prompt(recommendation: &Recommendation) -> String {
    match recommendation {
        Recommendation::Entry(r) => format!(
            "I just completed the Class 10 stream selection assessment. \
             My recommended stream is {} with {} as an alternative. \
             Suggested core subjects: {}. Optional subjects: {}. \
             Can you help me understand this recommendation and how to prepare for it?",
            r.recommended_stream, r.alternate_stream, r.core_subjects, r.optional_subjects
        ),
        Recommendation::Advanced(r) => format!(
            "I just completed the Class 12 career planning assessment. \
             Recommended degrees: {}. Suggested career paths: {}. \
             Relevant entrance exams: {}. \
             Can you help me plan my next steps?",
            names(&r.recommended_degrees),
            names(&r.career_paths),
            r.entrance_exams
        ),
    }
}

pub fn career_prompt(career: &CareerPath) -> String {
    format!(
        "I'd like to know more about becoming a {}. \
         It usually involves {} and entrance exams like {}. \
         What should I focus on to get started?",
        career.title,
        career.education.join(" or "),
        career.entrance_exams.join(", ")
    )
}
