//! Chat Relay — forwards a prompt plus recent turns to the model and always
//! comes back with a reply.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::chat::fallback::canned_reply;
use crate::llm_client::prompts::AUDIENCE_INSTRUCTION;
use crate::llm_client::{ChatTurn, CompletionRequest, LlmError, TextGenerator};

/// One call plus one retry.
const RELAY_ATTEMPTS: u32 = 2;
const CHAT_MAX_TOKENS: u32 = 600;
const CHAT_TEMPERATURE: f32 = 0.7;
const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(20);

pub const MIN_CONTEXT_WINDOW: usize = 4;
pub const MAX_CONTEXT_WINDOW: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    Remote,
    Canned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
    pub source: ReplySource,
}

fn counsellor_system() -> String {
    format!(
        "You are an expert career counselor for high school and college students. \
         Provide specific, actionable guidance about education, careers, entrance exams, \
         and academic paths. Keep responses concise (maximum 3-4 paragraphs) but \
         informative. {AUDIENCE_INSTRUCTION}"
    )
}

pub struct ChatRelay {
    generator: Arc<dyn TextGenerator>,
    context_window: usize,
    attempt_timeout: Duration,
}

impl ChatRelay {
    /// `context_window` is clamped to 4–6 prior turns.
    pub fn new(generator: Arc<dyn TextGenerator>, context_window: usize) -> Self {
        Self {
            generator,
            context_window: context_window.clamp(MIN_CONTEXT_WINDOW, MAX_CONTEXT_WINDOW),
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }

    /// Bounds each attempt; an attempt that runs over counts as a failure.
    pub fn with_timeout(mut self, attempt_timeout: Duration) -> Self {
        self.attempt_timeout = attempt_timeout;
        self
    }

    pub fn context_window(&self) -> usize {
        self.context_window
    }

    /// Builds the request: system prompt, the last `context_window` turns,
    /// then the new prompt.
    pub fn build_request(&self, prompt: &str, context: &[ChatTurn]) -> CompletionRequest {
        let start = context.len().saturating_sub(self.context_window);
        let mut turns: Vec<ChatTurn> = context[start..].to_vec();
        turns.push(ChatTurn::user(prompt));

        CompletionRequest {
            system: counsellor_system(),
            turns,
            max_tokens: CHAT_MAX_TOKENS,
            temperature: Some(CHAT_TEMPERATURE),
        }
    }

    pub async fn reply(&self, prompt: &str, context: &[ChatTurn]) -> ChatReply {
        let request = self.build_request(prompt, context);

        for attempt in 1..=RELAY_ATTEMPTS {
            let result = tokio::time::timeout(self.attempt_timeout, self.generator.generate(&request))
                .await
                .unwrap_or_else(|_| Err(LlmError::Timeout(self.attempt_timeout.as_secs())));
            match result {
                Ok(text) if !text.trim().is_empty() => {
                    return ChatReply {
                        message: text,
                        source: ReplySource::Remote,
                    };
                }
                Ok(_) => warn!("Chat relay attempt {attempt}/{RELAY_ATTEMPTS} returned empty text"),
                Err(e) => warn!("Chat relay attempt {attempt}/{RELAY_ATTEMPTS} failed: {e}"),
            }
        }

        info!("Chat relay falling back to a canned reply");
        ChatReply {
            message: canned_reply(prompt, &mut rand::thread_rng()).to_string(),
            source: ReplySource::Canned,
        }
    }
}
