//! Assessment Controller — the session value object and its transitions.
//!
//! `apply` is a pure function `(session, event) -> (session, effect)`.
//! Side effects (result generation, persistence) are described by the returned
//! `Effect` and carried out by the session service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::assessment::answers::{AnswerStore, Draft};
use crate::assessment::questions::{AnswerShape, Question, QuestionBank, Tier};
use crate::recommendation::models::GenerationOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Phase {
    InProgress { position: usize },
    Completed,
}

/// Which panel the respondent is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Questionnaire,
    Results,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResultState {
    NotRequested,
    Pending { ticket: u64 },
    Ready { outcome: GenerationOutcome },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSession {
    pub id: Uuid,
    pub tier: Tier,
    pub phase: Phase,
    pub answers: AnswerStore,
    pub draft: Draft,
    pub result: ResultState,
    pub view: View,
    /// Advanced on every completion, restart and tier switch; a generation
    /// outcome is only accepted for the ticket it was started with.
    pub generation: u64,
    /// Bumped on every successful write; writers only save over the version
    /// they loaded.
    #[serde(default)]
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    Select { option_id: String },
    Toggle { option_id: String },
    SetText { text: String },
    SetOtherText { text: String },
    Next,
    Previous,
    Restart,
    SwitchTier { tier: Tier },
    ShowResults,
    ReviewAnswers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    #[error("The current answer is not complete yet")]
    AnswerIncomplete,
    #[error("Already at the first question")]
    AtFirstQuestion,
    #[error("The assessment is already completed")]
    AlreadyCompleted,
    #[error("Results are available once the assessment is completed")]
    NotCompleted,
    #[error("Unknown option for this question")]
    UnknownOption,
    #[error("This question does not accept that kind of answer")]
    ShapeMismatch,
    #[error("This tier has no questions")]
    NoQuestions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Rejected(RejectReason),
    /// The last answer was committed; results must be generated for `ticket`.
    GenerateResults { ticket: u64 },
}

impl AssessmentSession {
    pub fn new(id: Uuid, tier: Tier, now: DateTime<Utc>) -> Self {
        Self {
            id,
            tier,
            phase: Phase::InProgress { position: 0 },
            answers: AnswerStore::new(),
            draft: Draft::default(),
            result: ResultState::NotRequested,
            view: View::Questionnaire,
            generation: 0,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn position(&self) -> Option<usize> {
        match self.phase {
            Phase::InProgress { position } => Some(position),
            Phase::Completed => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.result, ResultState::Pending { .. })
    }

    pub fn outcome(&self) -> Option<&GenerationOutcome> {
        match &self.result {
            ResultState::Ready { outcome } => Some(outcome),
            _ => None,
        }
    }

    pub fn current_question(&self, bank: &QuestionBank) -> Option<&'static Question> {
        let position = self.position()?;
        bank.for_tier(self.tier).get(position).copied()
    }

    /// `Next` is enabled exactly when this returns true.
    pub fn can_advance(&self, bank: &QuestionBank) -> bool {
        self.current_question(bank)
            .is_some_and(|q| self.draft.is_valid_for(q))
    }

    pub fn can_go_back(&self) -> bool {
        self.position().is_some_and(|p| p > 0)
    }

    /// Share of the active tier's questions with a stored answer, 0–100.
    pub fn progress_percent(&self, bank: &QuestionBank) -> u8 {
        let questions = bank.for_tier(self.tier);
        if questions.is_empty() {
            return 0;
        }
        let answered = self.answers.answered_among(&questions);
        ((answered as f64 / questions.len() as f64) * 100.0).round() as u8
    }

    fn restore_draft(&mut self, bank: &QuestionBank) {
        self.draft = self
            .current_question(bank)
            .and_then(|q| self.answers.get(q.id))
            .map(Draft::from_answer)
            .unwrap_or_default();
    }

    fn reset_walk(&mut self, bank: &QuestionBank) {
        self.phase = Phase::InProgress { position: 0 };
        self.result = ResultState::NotRequested;
        self.view = View::Questionnaire;
        self.generation += 1;
        self.restore_draft(bank);
    }
}

/// Applies one event. Rejected events return the session unchanged.
pub fn apply(
    session: AssessmentSession,
    event: SessionEvent,
    bank: &QuestionBank,
) -> (AssessmentSession, Effect) {
    match transition(session.clone(), event, bank) {
        Ok((next, effect)) => (next, effect),
        Err(reason) => (session, Effect::Rejected(reason)),
    }
}

fn transition(
    mut session: AssessmentSession,
    event: SessionEvent,
    bank: &QuestionBank,
) -> Result<(AssessmentSession, Effect), RejectReason> {
    match event {
        SessionEvent::Select { option_id } => {
            let question = editable_question(&session, bank)?;
            if question.shape != AnswerShape::Single {
                return Err(RejectReason::ShapeMismatch);
            }
            if !question.has_option(&option_id) {
                return Err(RejectReason::UnknownOption);
            }
            session.draft.selected = vec![option_id];
        }
        SessionEvent::Toggle { option_id } => {
            let question = editable_question(&session, bank)?;
            if question.shape != AnswerShape::Multiple {
                return Err(RejectReason::ShapeMismatch);
            }
            if !question.has_option(&option_id) {
                return Err(RejectReason::UnknownOption);
            }
            let selected = &mut session.draft.selected;
            match selected.iter().position(|id| *id == option_id) {
                Some(index) => {
                    selected.remove(index);
                }
                None => selected.push(option_id),
            }
        }
        SessionEvent::SetText { text } => {
            let question = editable_question(&session, bank)?;
            if question.shape != AnswerShape::Text {
                return Err(RejectReason::ShapeMismatch);
            }
            session.draft.text = text;
        }
        SessionEvent::SetOtherText { text } => {
            let question = editable_question(&session, bank)?;
            if !question.options.iter().any(|o| o.is_other()) {
                return Err(RejectReason::ShapeMismatch);
            }
            session.draft.other_text = text;
        }
        SessionEvent::Next => {
            let question = editable_question(&session, bank)?;
            let answer = session
                .draft
                .commit(question)
                .ok_or(RejectReason::AnswerIncomplete)?;
            session.answers.insert(question.id, answer);

            let position = session.position().unwrap_or_default();
            let total = bank.for_tier(session.tier).len();
            if position + 1 >= total {
                session.phase = Phase::Completed;
                session.draft = Draft::default();
                session.generation += 1;
                let ticket = session.generation;
                session.result = ResultState::Pending { ticket };
                return Ok((session, Effect::GenerateResults { ticket }));
            }
            session.phase = Phase::InProgress {
                position: position + 1,
            };
            session.restore_draft(bank);
        }
        SessionEvent::Previous => {
            let position = session.position().ok_or(RejectReason::AlreadyCompleted)?;
            if position == 0 {
                return Err(RejectReason::AtFirstQuestion);
            }
            session.phase = Phase::InProgress {
                position: position - 1,
            };
            session.restore_draft(bank);
        }
        SessionEvent::Restart => {
            let questions = bank.for_tier(session.tier);
            session.answers.clear_for(&questions);
            session.reset_walk(bank);
        }
        SessionEvent::SwitchTier { tier } => {
            if tier == session.tier {
                return Ok((session, Effect::None));
            }
            session.tier = tier;
            session.reset_walk(bank);
        }
        SessionEvent::ShowResults => {
            if !session.is_completed() {
                return Err(RejectReason::NotCompleted);
            }
            session.view = View::Results;
        }
        SessionEvent::ReviewAnswers => {
            session.view = View::Questionnaire;
        }
    }
    Ok((session, Effect::None))
}

fn editable_question(
    session: &AssessmentSession,
    bank: &QuestionBank,
) -> Result<&'static Question, RejectReason> {
    if session.is_completed() {
        return Err(RejectReason::AlreadyCompleted);
    }
    session
        .current_question(bank)
        .ok_or(RejectReason::NoQuestions)
}

/// Stores a generation outcome if `ticket` is still the pending one.
/// Returns whether the outcome was accepted.
pub fn record_result(
    mut session: AssessmentSession,
    ticket: u64,
    outcome: GenerationOutcome,
) -> (AssessmentSession, bool) {
    match session.result {
        ResultState::Pending { ticket: pending } if pending == ticket => {
            session.result = ResultState::Ready { outcome };
            (session, true)
        }
        _ => (session, false),
    }
}
