//! In-test `TextGenerator` stand-ins.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{CompletionRequest, LlmError, TextGenerator};

#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Fail,
    /// Sleeps before answering; pair with a paused tokio clock.
    Slow(Duration, String),
}

/// Replays scripted replies in order, repeating the last one once the
/// script runs out. Records every request it receives.
pub struct StubGenerator {
    script: Mutex<VecDeque<Reply>>,
    last: Mutex<Reply>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl StubGenerator {
    pub fn scripted(replies: Vec<Reply>) -> Self {
        let last = replies.last().cloned().unwrap_or(Reply::Fail);
        Self {
            script: Mutex::new(replies.into()),
            last: Mutex::new(last),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::scripted(vec![Reply::Text(text.to_string())])
    }

    pub fn failing() -> Self {
        Self::scripted(vec![Reply::Fail])
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.last.lock().unwrap().clone());

        match reply {
            Reply::Text(text) if text.trim().is_empty() => Err(LlmError::EmptyContent),
            Reply::Text(text) => Ok(text),
            Reply::Fail => Err(LlmError::Api {
                status: 503,
                message: "stub failure".to_string(),
            }),
            Reply::Slow(delay, text) => {
                tokio::time::sleep(delay).await;
                Ok(text)
            }
        }
    }
}
