//! Answer Normalizer — flattens stored answers into display/analysis strings.
//!
//! Pure and deterministic: the same (question, answer) pair always yields the
//! same text, which keeps result generation and shared transcripts stable.

use serde::{Deserialize, Serialize};

use crate::assessment::answers::{Answer, AnswerStore};
use crate::assessment::questions::{Question, QuestionBank, Tier};

/// One question/answer pair as sent to result generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedAnswer {
    pub question: String,
    pub answer: String,
}

/// Flattens `answer` into a single string.
///
/// Option ids resolve to labels through `question`; unknown ids and a missing
/// question fall back to the raw id.
pub fn normalize(question: Option<&Question>, answer: &Answer) -> String {
    let label = |id: &str| -> String {
        question
            .map(|q| q.option_label(id).to_string())
            .unwrap_or_else(|| id.to_string())
    };

    match answer {
        Answer::Text { text } => text.clone(),
        Answer::Single {
            option_id,
            other: None,
        } => label(option_id.as_str()),
        Answer::Single {
            option_id,
            other: Some(supplement),
        } => format!("{}: {}", label(option_id.as_str()), supplement),
        Answer::Multiple {
            option_ids,
            other: None,
        } => join_labels(option_ids, label),
        Answer::Multiple {
            option_ids,
            other: Some(supplement),
        } => format!("{}, Other: {}", join_labels(option_ids, label), supplement),
    }
}

fn join_labels(ids: &[String], label: impl Fn(&str) -> String) -> String {
    ids.iter()
        .map(|id| label(id.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Normalizes a stored answer together with its question text.
/// An unknown question id gets the synthetic label `Question {id}`.
pub fn normalize_entry(bank: &QuestionBank, question_id: u32, answer: &Answer) -> NormalizedAnswer {
    let question = bank.get(question_id);
    NormalizedAnswer {
        question: question
            .map(|q| q.prompt.to_string())
            .unwrap_or_else(|| format!("Question {question_id}")),
        answer: normalize(question, answer),
    }
}

/// Normalized answers for every answered question of `tier`, in question order.
pub fn normalize_for_tier(
    bank: &QuestionBank,
    store: &AnswerStore,
    tier: Tier,
) -> Vec<NormalizedAnswer> {
    bank.for_tier(tier)
        .into_iter()
        .filter_map(|q| store.get(q.id).map(|a| normalize_entry(bank, q.id, a)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> QuestionBank {
        QuestionBank::standard()
    }

    #[test]
    fn test_text_returned_as_is() {
        let answer = Answer::Text {
            text: "  I like robots ".to_string(),
        };
        assert_eq!(normalize(bank().get(4), &answer), "  I like robots ");
    }

    #[test]
    fn test_multiple_joins_labels() {
        let answer = Answer::Multiple {
            option_ids: vec!["a".to_string(), "e".to_string()],
            other: None,
        };
        assert_eq!(
            normalize(bank().get(1), &answer),
            "Mathematics, Computer Science"
        );
    }

    #[test]
    fn test_multiple_unknown_id_falls_back_to_raw_id() {
        let answer = Answer::Multiple {
            option_ids: vec!["a".to_string(), "zz".to_string()],
            other: None,
        };
        assert_eq!(normalize(bank().get(1), &answer), "Mathematics, zz");
    }

    #[test]
    fn test_single_composite_appends_supplement() {
        let answer = Answer::Single {
            option_id: "h".to_string(),
            other: Some("Agriculture".to_string()),
        };
        assert_eq!(normalize(bank().get(7), &answer), "Other: Agriculture");
    }

    #[test]
    fn test_single_bare_resolves_label() {
        let answer = Answer::Single {
            option_id: "d".to_string(),
            other: None,
        };
        assert_eq!(normalize(bank().get(7), &answer), "Commerce with Math");
    }

    #[test]
    fn test_multiple_composite_appends_other_suffix() {
        let answer = Answer::Multiple {
            option_ids: vec!["a".to_string(), "n".to_string()],
            other: Some("Robotics".to_string()),
        };
        assert_eq!(
            normalize(bank().get(1), &answer),
            "Mathematics, Other, Other: Robotics"
        );
    }

    #[test]
    fn test_missing_question_uses_raw_ids_and_synthetic_label() {
        let answer = Answer::Multiple {
            option_ids: vec!["a".to_string(), "b".to_string()],
            other: None,
        };
        assert_eq!(normalize(None, &answer), "a, b");
        let entry = normalize_entry(&bank(), 99, &answer);
        assert_eq!(entry.question, "Question 99");
        assert_eq!(entry.answer, "a, b");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let answer = Answer::Multiple {
            option_ids: vec!["c".to_string(), "m".to_string()],
            other: Some("Origami".to_string()),
        };
        let first = normalize(bank().get(3), &answer);
        let second = normalize(bank().get(3), &answer);
        assert_eq!(first, second);
    }

    #[test]
    fn test_normalize_for_tier_filters_and_orders() {
        let mut store = AnswerStore::new();
        store.insert(
            10,
            Answer::Text {
                text: "advanced only".to_string(),
            },
        );
        store.insert(
            4,
            Answer::Text {
                text: "chess".to_string(),
            },
        );
        store.insert(
            2,
            Answer::Single {
                option_id: "a".to_string(),
                other: None,
            },
        );

        let entries = normalize_for_tier(&bank(), &store, Tier::Entry);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].question, "Are you interested in how the human body works?");
        assert_eq!(entries[1].answer, "chess");
    }
}
