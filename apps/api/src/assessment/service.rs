//! Session service — loads a session, applies an event, persists it and runs
//! the effects the transition asked for.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::assessment::answers::Draft;
use crate::assessment::normalizer::{normalize_for_tier, NormalizedAnswer};
use crate::assessment::questions::{Question, QuestionBank, Tier};
use crate::assessment::session::{
    apply, record_result, AssessmentSession, Effect, Phase, RejectReason, SessionEvent, View,
};
use crate::assessment::store::{SessionStore, SessionStoreError};
use crate::recommendation::generator::RecommendationService;
use crate::recommendation::models::GenerationOutcome;

/// Reload-and-reapply rounds before a contended write gives up.
const MAX_WRITE_ATTEMPTS: usize = 5;

#[derive(Clone)]
pub struct SessionService {
    store: Arc<dyn SessionStore>,
    recommender: Arc<RecommendationService>,
    bank: QuestionBank,
}

/// Result of dispatching one event.
#[derive(Debug, Clone)]
pub struct Dispatched {
    pub session: AssessmentSession,
    pub rejected: Option<RejectReason>,
}

impl SessionService {
    pub fn new(
        store: Arc<dyn SessionStore>,
        recommender: Arc<RecommendationService>,
        bank: QuestionBank,
    ) -> Self {
        Self {
            store,
            recommender,
            bank,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub async fn create(&self, tier: Tier) -> Result<AssessmentSession, SessionStoreError> {
        let session = AssessmentSession::new(Uuid::new_v4(), tier, Utc::now());
        self.store.save(&session).await?;
        info!("Created {} assessment session {}", tier.as_str(), session.id);
        Ok(session)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<AssessmentSession>, SessionStoreError> {
        self.load(id).await
    }

    /// Loads a session and rejects one whose stored answers no longer fit
    /// their questions.
    async fn load(&self, id: Uuid) -> Result<Option<AssessmentSession>, SessionStoreError> {
        let Some(session) = self.store.load(id).await? else {
            return Ok(None);
        };
        if let Some(question_id) = session.answers.first_nonconforming(&self.bank) {
            return Err(SessionStoreError::DeserializationFailed {
                id,
                reason: format!("stored answer for question {question_id} does not fit the question"),
            });
        }
        Ok(Some(session))
    }

    /// Applies `event` to the stored session. Returns `None` for an unknown id.
    ///
    /// Completion is saved before generation starts; the outcome lands in
    /// the store later through `finish_generation`. A write that loses the
    /// version race reloads and applies the event again.
    pub async fn dispatch(
        &self,
        id: Uuid,
        event: SessionEvent,
    ) -> Result<Option<Dispatched>, SessionStoreError> {
        for attempt in 1..=MAX_WRITE_ATTEMPTS {
            let Some(current) = self.load(id).await? else {
                return Ok(None);
            };
            let expected = current.version;

            let (mut session, effect) = apply(current, event.clone(), &self.bank);
            if let Effect::Rejected(reason) = effect {
                return Ok(Some(Dispatched {
                    session,
                    rejected: Some(reason),
                }));
            }

            session.updated_at = Utc::now();
            session.version = expected + 1;
            if !self.store.save_if_version(&session, expected).await? {
                debug!("Session {id} changed during dispatch (attempt {attempt}), retrying");
                continue;
            }

            if let Effect::GenerateResults { ticket } = effect {
                let answers = normalize_for_tier(&self.bank, &session.answers, session.tier);
                info!(
                    "Session {id} completed, generating results (ticket {ticket}, {} answers)",
                    answers.len()
                );
                let service = self.clone();
                let tier = session.tier;
                tokio::spawn(async move {
                    service.finish_generation(id, ticket, tier, answers).await;
                });
            }

            return Ok(Some(Dispatched {
                session,
                rejected: None,
            }));
        }

        Err(SessionStoreError::Conflict(id))
    }

    /// Generates the outcome for `ticket` and records it if the session is
    /// still waiting for that ticket.
    pub async fn finish_generation(
        &self,
        id: Uuid,
        ticket: u64,
        tier: Tier,
        answers: Vec<NormalizedAnswer>,
    ) {
        let outcome = self.recommender.generate(tier, &answers).await;
        if let Err(e) = self.record(id, ticket, outcome).await {
            error!("Failed to store results for session {id}: {e}");
        }
    }

    async fn record(
        &self,
        id: Uuid,
        ticket: u64,
        outcome: GenerationOutcome,
    ) -> Result<(), SessionStoreError> {
        for attempt in 1..=MAX_WRITE_ATTEMPTS {
            let Some(current) = self.load(id).await? else {
                warn!("Session {id} expired before results were ready");
                return Ok(());
            };
            let expected = current.version;

            let (mut session, accepted) = record_result(current, ticket, outcome.clone());
            if !accepted {
                info!("Discarding stale results for session {id} (ticket {ticket})");
                return Ok(());
            }

            session.updated_at = Utc::now();
            session.version = expected + 1;
            if self.store.save_if_version(&session, expected).await? {
                return Ok(());
            }
            debug!("Session {id} changed while recording results (attempt {attempt}), retrying");
        }

        Err(SessionStoreError::Conflict(id))
    }

    pub fn view(&self, session: &AssessmentSession, rejected: Option<RejectReason>) -> SessionView {
        SessionView::project(session, &self.bank, rejected)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// View projection
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Rejection {
    pub code: RejectReason,
    pub message: String,
}

/// What a client needs to render the assessment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: Uuid,
    pub tier: Tier,
    pub tier_title: &'static str,
    pub phase: Phase,
    pub view: View,
    pub question: Option<&'static Question>,
    pub total_questions: usize,
    pub draft: Draft,
    pub can_advance: bool,
    pub can_go_back: bool,
    pub progress: u8,
    pub is_generating: bool,
    pub result: Option<GenerationOutcome>,
    pub notice: Option<String>,
    /// Normalized answers recorded for the active tier.
    pub review: Vec<NormalizedAnswer>,
    pub rejected: Option<Rejection>,
}

impl SessionView {
    pub fn project(
        session: &AssessmentSession,
        bank: &QuestionBank,
        rejected: Option<RejectReason>,
    ) -> Self {
        let outcome = session.outcome().cloned();
        Self {
            id: session.id,
            tier: session.tier,
            tier_title: session.tier.title(),
            phase: session.phase,
            view: session.view,
            question: session.current_question(bank),
            total_questions: bank.for_tier(session.tier).len(),
            draft: session.draft.clone(),
            can_advance: session.can_advance(bank),
            can_go_back: session.can_go_back(),
            progress: session.progress_percent(bank),
            is_generating: session.is_generating(),
            notice: outcome.as_ref().and_then(|o| o.notice.clone()),
            result: outcome,
            review: normalize_for_tier(bank, &session.answers, session.tier),
            rejected: rejected.map(|code| Rejection {
                message: code.to_string(),
                code,
            }),
        }
    }
}
