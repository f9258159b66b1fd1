//! Answer Store and the in-progress draft the respondent edits.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::assessment::questions::{AnswerShape, Question, QuestionBank};

/// A committed answer. The variant always matches the question's shape.
///
/// `other` carries the "Other" supplement and is only ever set when the
/// sentinel option is part of the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Answer {
    Single {
        option_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        other: Option<String>,
    },
    Multiple {
        option_ids: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        other: Option<String>,
    },
    Text {
        text: String,
    },
}

impl Answer {
    pub fn shape(&self) -> AnswerShape {
        match self {
            Answer::Single { .. } => AnswerShape::Single,
            Answer::Multiple { .. } => AnswerShape::Multiple,
            Answer::Text { .. } => AnswerShape::Text,
        }
    }

    /// Checks the answer against the question's declared shape, validity rule
    /// and the "Other" composite rule.
    pub fn conforms_to(&self, question: &Question) -> bool {
        if self.shape() != question.shape {
            return false;
        }
        match self {
            Answer::Single { option_id, other } => {
                question.has_option(option_id)
                    && other
                        .as_ref()
                        .map_or(true, |_| question.is_other(option_id))
            }
            Answer::Multiple { option_ids, other } => {
                !option_ids.is_empty()
                    && option_ids.iter().all(|id| question.has_option(id))
                    && other
                        .as_ref()
                        .map_or(true, |_| option_ids.iter().any(|id| question.is_other(id)))
            }
            Answer::Text { text } => !text.trim().is_empty(),
        }
    }
}

/// Answers keyed by question id. Holds answers for every tier; callers filter
/// by tier for progress and display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerStore {
    answers: BTreeMap<u32, Answer>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: u32) -> Option<&Answer> {
        self.answers.get(&question_id)
    }

    pub fn insert(&mut self, question_id: u32, answer: Answer) {
        self.answers.insert(question_id, answer);
    }

    pub fn contains(&self, question_id: u32) -> bool {
        self.answers.contains_key(&question_id)
    }

    /// Counts how many of `questions` have a stored answer.
    pub fn answered_among(&self, questions: &[&Question]) -> usize {
        questions.iter().filter(|q| self.contains(q.id)).count()
    }

    /// Removes the answers for `questions`, leaving every other answer intact.
    pub fn clear_for(&mut self, questions: &[&Question]) {
        for q in questions {
            self.answers.remove(&q.id);
        }
    }

    /// First stored answer that does not fit its question (or whose question
    /// is not in `bank`), if any.
    pub fn first_nonconforming(&self, bank: &QuestionBank) -> Option<u32> {
        self.answers
            .iter()
            .find(|(id, answer)| bank.get(**id).map_or(true, |q| !answer.conforms_to(q)))
            .map(|(id, _)| *id)
    }
}

/// The working answer for the question currently on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    #[serde(default)]
    pub selected: Vec<String>,
    #[serde(default)]
    pub other_text: String,
    #[serde(default)]
    pub text: String,
}

impl Draft {
    /// Restores the working state from a stored answer.
    pub fn from_answer(answer: &Answer) -> Self {
        match answer {
            Answer::Single { option_id, other } => Draft {
                selected: vec![option_id.clone()],
                other_text: other.clone().unwrap_or_default(),
                text: String::new(),
            },
            Answer::Multiple { option_ids, other } => Draft {
                selected: option_ids.clone(),
                other_text: other.clone().unwrap_or_default(),
                text: String::new(),
            },
            Answer::Text { text } => Draft {
                text: text.clone(),
                ..Draft::default()
            },
        }
    }

    /// Validity predicate gating `Next`.
    pub fn is_valid_for(&self, question: &Question) -> bool {
        match question.shape {
            AnswerShape::Single => self.selected.first().is_some_and(|id| !id.is_empty()),
            AnswerShape::Multiple => !self.selected.is_empty(),
            AnswerShape::Text => !self.text.trim().is_empty(),
        }
    }

    /// Turns the draft into a committed answer, or `None` when invalid.
    pub fn commit(&self, question: &Question) -> Option<Answer> {
        if !self.is_valid_for(question) {
            return None;
        }
        let supplement = Some(self.other_text.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        let answer = match question.shape {
            AnswerShape::Single => {
                let option_id = self.selected[0].clone();
                let other = supplement.filter(|_| question.is_other(&option_id));
                Answer::Single { option_id, other }
            }
            AnswerShape::Multiple => {
                let other =
                    supplement.filter(|_| self.selected.iter().any(|id| question.is_other(id)));
                Answer::Multiple {
                    option_ids: self.selected.clone(),
                    other,
                }
            }
            AnswerShape::Text => Answer::Text {
                text: self.text.clone(),
            },
        };
        Some(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::questions::QuestionBank;

    fn question(id: u32) -> &'static Question {
        QuestionBank::standard().get(id).unwrap()
    }

    #[test]
    fn test_empty_drafts_are_invalid_for_every_shape() {
        let draft = Draft::default();
        assert!(!draft.is_valid_for(question(2))); // single
        assert!(!draft.is_valid_for(question(1))); // multiple
        assert!(!draft.is_valid_for(question(4))); // text
    }

    #[test]
    fn test_whitespace_text_is_invalid() {
        let draft = Draft {
            text: "   \n\t".to_string(),
            ..Draft::default()
        };
        assert!(!draft.is_valid_for(question(4)));
        assert!(draft.commit(question(4)).is_none());
    }

    #[test]
    fn test_single_other_with_text_commits_composite() {
        // Question 7 option "h" is the Other sentinel.
        let draft = Draft {
            selected: vec!["h".to_string()],
            other_text: "  Agriculture diploma ".to_string(),
            ..Draft::default()
        };
        let answer = draft.commit(question(7)).unwrap();
        assert_eq!(
            answer,
            Answer::Single {
                option_id: "h".to_string(),
                other: Some("Agriculture diploma".to_string()),
            }
        );
        assert!(answer.conforms_to(question(7)));
    }

    #[test]
    fn test_single_non_other_drops_supplement() {
        let draft = Draft {
            selected: vec!["a".to_string()],
            other_text: "ignored".to_string(),
            ..Draft::default()
        };
        let answer = draft.commit(question(7)).unwrap();
        assert_eq!(
            answer,
            Answer::Single {
                option_id: "a".to_string(),
                other: None,
            }
        );
    }

    #[test]
    fn test_multiple_other_without_text_commits_bare() {
        let draft = Draft {
            selected: vec!["a".to_string(), "n".to_string()],
            other_text: "   ".to_string(),
            ..Draft::default()
        };
        let answer = draft.commit(question(1)).unwrap();
        assert!(matches!(answer, Answer::Multiple { other: None, .. }));
    }

    #[test]
    fn test_multiple_other_with_text_commits_composite() {
        let draft = Draft {
            selected: vec!["a".to_string(), "n".to_string()],
            other_text: "Robotics".to_string(),
            ..Draft::default()
        };
        let answer = draft.commit(question(1)).unwrap();
        assert_eq!(
            answer,
            Answer::Multiple {
                option_ids: vec!["a".to_string(), "n".to_string()],
                other: Some("Robotics".to_string()),
            }
        );
    }

    #[test]
    fn test_composite_without_other_selected_does_not_conform() {
        let answer = Answer::Multiple {
            option_ids: vec!["a".to_string()],
            other: Some("sneaky".to_string()),
        };
        assert!(!answer.conforms_to(question(1)));
    }

    #[test]
    fn test_shape_mismatch_does_not_conform() {
        let answer = Answer::Text {
            text: "hello".to_string(),
        };
        assert!(!answer.conforms_to(question(1)));
    }

    #[test]
    fn test_draft_round_trips_through_answer() {
        let answer = Answer::Multiple {
            option_ids: vec!["b".to_string(), "m".to_string()],
            other: Some("Chess".to_string()),
        };
        let draft = Draft::from_answer(&answer);
        assert_eq!(draft.commit(question(3)), Some(answer));
    }

    #[test]
    fn test_clear_for_leaves_other_questions() {
        let bank = QuestionBank::standard();
        let mut store = AnswerStore::new();
        store.insert(
            4,
            Answer::Text {
                text: "chess".to_string(),
            },
        );
        store.insert(
            10,
            Answer::Text {
                text: "robotics".to_string(),
            },
        );
        store.clear_for(&bank.for_tier(crate::assessment::questions::Tier::Entry));
        assert!(!store.contains(4));
        assert!(store.contains(10));
    }

    #[test]
    fn test_answer_wire_format() {
        let answer = Answer::Single {
            option_id: "a".to_string(),
            other: None,
        };
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["shape"], "single");
        assert_eq!(json["option_id"], "a");
        assert!(json.get("other").is_none());
    }

    #[test]
    fn test_first_nonconforming_flags_shape_mismatch_and_unknown_question() {
        let bank = QuestionBank::standard();
        let mut store = AnswerStore::new();
        store.insert(
            4,
            Answer::Text {
                text: "chess".to_string(),
            },
        );
        assert_eq!(store.first_nonconforming(&bank), None);

        store.insert(
            1,
            Answer::Text {
                text: "not a checkbox answer".to_string(),
            },
        );
        assert_eq!(store.first_nonconforming(&bank), Some(1));

        let mut unknown = AnswerStore::new();
        unknown.insert(
            99,
            Answer::Text {
                text: "orphan".to_string(),
            },
        );
        assert_eq!(unknown.first_nonconforming(&bank), Some(99));
    }
}
