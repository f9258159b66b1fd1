//! Result Generator — remote-first recommendation with a guaranteed
//! heuristic fallback.
//!
//! Flow: empty answers → heuristic.
//!       otherwise → prompt → TextGenerator (bounded by timeout) → strip fences
//!       → typed parse → well-formedness check → (prose extraction) → outcome.
//! Any failure on the remote path degrades to the heuristic bundle with a
//! notice; `generate` never returns an error.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::assessment::normalizer::NormalizedAnswer;
use crate::assessment::questions::Tier;
use crate::llm_client::{strip_json_fences, ChatTurn, CompletionRequest, LlmError, TextGenerator};
use crate::recommendation::extract::extract_recommendation;
use crate::recommendation::heuristic::{heuristic_outcome, profile_interests, recommend_for};
use crate::recommendation::models::{
    AdvancedRecommendation, EntryRecommendation, GenerationOutcome, Recommendation,
    RecommendationSource,
};
use crate::recommendation::prompts::{build_generation_prompt, generation_system};

/// Notice attached when the heuristic stands in for the remote generator.
pub const OFFLINE_NOTICE: &str = "Using offline guidance";

const GENERATION_MAX_TOKENS: u32 = 2048;

#[derive(Debug, Error)]
enum RemoteFailure {
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error("remote generation timed out after {0:?}")]
    Timeout(Duration),
    #[error("remote reply could not be used")]
    Unusable,
}

// ────────────────────────────────────────────────────────────────────────────
// Service
// ────────────────────────────────────────────────────────────────────────────

pub struct RecommendationService {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl RecommendationService {
    pub fn new(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Produces a recommendation for `tier` from the normalized answers.
    pub async fn generate(&self, tier: Tier, answers: &[NormalizedAnswer]) -> GenerationOutcome {
        if answers.is_empty() {
            info!("No answers for {} assessment, using heuristic bundle", tier.as_str());
            return heuristic_outcome(tier, answers, None);
        }

        match self.generate_remote(tier, answers).await {
            Ok(recommendation) => {
                info!(
                    "Remote recommendation generated for {} assessment ({} answers)",
                    tier.as_str(),
                    answers.len()
                );
                GenerationOutcome {
                    recommendation,
                    source: RecommendationSource::Remote,
                    interest: None,
                    notice: None,
                }
            }
            Err(e) => {
                warn!("Remote recommendation failed, falling back to heuristic: {e}");
                heuristic_outcome(tier, answers, Some(OFFLINE_NOTICE))
            }
        }
    }

    async fn generate_remote(
        &self,
        tier: Tier,
        answers: &[NormalizedAnswer],
    ) -> Result<Recommendation, RemoteFailure> {
        let request = CompletionRequest {
            system: generation_system(),
            turns: vec![ChatTurn::user(build_generation_prompt(tier, answers))],
            max_tokens: GENERATION_MAX_TOKENS,
            temperature: None,
        };

        let raw = tokio::time::timeout(self.timeout, self.generator.generate(&request))
            .await
            .map_err(|_| RemoteFailure::Timeout(self.timeout))??;

        let defaults = recommend_for(tier, profile_interests(answers).primary);
        parse_reply(&raw, tier, defaults).ok_or(RemoteFailure::Unusable)
    }
}

/// Parses a model reply as the tier's schema, falling back to labelled-text
/// extraction. Returns `None` unless the result is well-formed.
fn parse_reply(raw: &str, tier: Tier, defaults: Recommendation) -> Option<Recommendation> {
    let cleaned = strip_json_fences(raw);
    let parsed = match tier {
        Tier::Entry => serde_json::from_str::<EntryRecommendation>(cleaned)
            .map(Recommendation::Entry),
        Tier::Advanced => serde_json::from_str::<AdvancedRecommendation>(cleaned)
            .map(Recommendation::Advanced),
    };

    let recommendation = match parsed {
        Ok(recommendation) => recommendation,
        Err(e) => {
            debug!("Reply is not valid JSON ({e}), trying labelled-text extraction");
            extract_recommendation(raw, defaults)?
        }
    };

    recommendation.is_well_formed().then_some(recommendation)
}
