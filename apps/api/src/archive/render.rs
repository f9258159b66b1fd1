//! Markdown renderings stored next to archived rows.

use uuid::Uuid;

use crate::assessment::normalizer::NormalizedAnswer;
use crate::assessment::questions::Tier;
use crate::llm_client::{ChatTurn, Role};
use crate::recommendation::models::{NamedSuggestion, Recommendation};

fn push_list(md: &mut String, items: &[String]) {
    for item in items {
        md.push_str(&format!("- {item}\n"));
    }
}

fn push_named(md: &mut String, items: &[NamedSuggestion]) {
    for item in items {
        if item.description.is_empty() {
            md.push_str(&format!("- **{}**\n", item.name));
        } else {
            md.push_str(&format!("- **{}**: {}\n", item.name, item.description));
        }
    }
}

pub fn render_assessment_to_md(
    user_id: Uuid,
    tier: Tier,
    answers: &[NormalizedAnswer],
    recommendation: &Recommendation,
) -> String {
    let mut md = format!("# {} — User {}\n\n", tier.title(), user_id);

    md.push_str("## Responses\n\n");
    for answer in answers {
        md.push_str(&format!("### {}\n{}\n\n", answer.question, answer.answer));
    }

    md.push_str("## Recommendation\n\n");
    match recommendation {
        Recommendation::Entry(r) => {
            md.push_str(&format!("- **Recommended Stream:** {}\n", r.recommended_stream));
            md.push_str(&format!("- **Alternative Stream:** {}\n", r.alternate_stream));
            md.push_str(&format!("- **Core Subjects:** {}\n", r.core_subjects));
            md.push_str(&format!("- **Optional Subjects:** {}\n\n", r.optional_subjects));
            md.push_str("### Board Recommendations\n\n");
            push_list(&mut md, &r.board_recommendations);
        }
        Recommendation::Advanced(r) => {
            md.push_str("### Recommended Degrees\n\n");
            push_named(&mut md, &r.recommended_degrees);
            md.push_str("\n### Career Paths\n\n");
            push_named(&mut md, &r.career_paths);
            md.push_str(&format!("\n**Entrance Exams:** {}\n\n", r.entrance_exams));
            md.push_str("### Preparation Tips\n\n");
            push_list(&mut md, &r.preparation_tips);
        }
    }
    md
}

pub fn render_transcript_to_md(user_id: Uuid, messages: &[ChatTurn]) -> String {
    let mut md = format!("# Counsellor Chat — User {}\n\n", user_id);
    for turn in messages {
        let speaker = match turn.role {
            Role::User => "You",
            Role::Assistant => "Counsellor",
        };
        md.push_str(&format!("**{speaker}:** {}\n\n", turn.content));
    }
    md
}
