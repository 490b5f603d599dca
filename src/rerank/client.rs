use std::time::Duration;

use genai::Client;
use genai::chat::{ChatMessage, ChatRequest};
use tokio::time::timeout;
use tracing::debug;

use crate::constants::DEFAULT_REQUEST_TIMEOUT_SECS;

use super::error::RerankError;

/// Scores alignment between a student project and a supervisor's expertise.
pub trait Judge: Send + Sync {
    /// Judges one (student text, supervisor text) pair on the 0-10 scale.
    fn judge(
        &self,
        student_text: &str,
        supervisor_text: &str,
        model: &str,
    ) -> impl std::future::Future<Output = Result<f64, RerankError>> + Send;
}

/// Judge backed by a chat model through the provider-multiplexing client.
///
/// Credentials are resolved from the environment by provider (for OpenAI
/// models, `OPENAI_API_KEY`); [`crate::engine::run_matching`] checks the
/// credential before any call is made.
pub struct OpenAiJudge {
    client: Client,
    timeout_secs: u64,
}

impl std::fmt::Debug for OpenAiJudge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiJudge")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl OpenAiJudge {
    /// Creates a judge with the default per-call timeout.
    pub fn new() -> Self {
        Self {
            client: Client::default(),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Sets the per-call timeout in seconds.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl Default for OpenAiJudge {
    fn default() -> Self {
        Self::new()
    }
}

impl Judge for OpenAiJudge {
    async fn judge(
        &self,
        student_text: &str,
        supervisor_text: &str,
        model: &str,
    ) -> Result<f64, RerankError> {
        let prompt = alignment_prompt(student_text, supervisor_text);
        let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);

        let response = timeout(
            Duration::from_secs(self.timeout_secs),
            self.client.exec_chat(model, request, None),
        )
        .await
        .map_err(|_| RerankError::Timeout {
            seconds: self.timeout_secs,
        })?
        .map_err(|e| RerankError::RequestFailed {
            message: e.to_string(),
        })?;

        let reply = response.first_text().ok_or(RerankError::EmptyReply)?;
        let score = parse_judgment(reply)?;

        debug!(model, score, "Judgment received");

        Ok(score)
    }
}

/// Parses a judgment reply and enforces the 0-10 range.
pub fn parse_judgment(reply: &str) -> Result<f64, RerankError> {
    let trimmed = reply.trim();

    let value: f64 = trimmed.parse().map_err(|_| RerankError::UnparseableReply {
        reply: trimmed.to_string(),
    })?;

    if !(0.0..=10.0).contains(&value) {
        return Err(RerankError::OutOfRange { value });
    }

    Ok(value)
}

fn alignment_prompt(student_text: &str, supervisor_text: &str) -> String {
    format!(
        "You are an expert academic supervisor matching system. Your task is to evaluate how well \
         a supervisor's research expertise aligns with a student's dissertation project.\n\
         \n\
         STUDENT PROJECT ABSTRACT:\n\
         {student_text}\n\
         \n\
         SUPERVISOR RESEARCH INTERESTS:\n\
         {supervisor_text}\n\
         \n\
         Please evaluate the alignment between this student's project and the supervisor's \
         expertise. Consider:\n\
         1. Subject matter overlap and depth of supervisor knowledge in the project area\n\
         2. Methodological alignment between what the project requires and supervisor capabilities\n\
         3. Potential for meaningful guidance and support throughout the research process\n\
         \n\
         Provide a score from 0-10 where:\n\
         - 0-2: Poor match, supervisor lacks relevant expertise\n\
         - 3-4: Weak match, limited overlap or guidance potential\n\
         - 5-6: Moderate match, some relevant expertise but not ideal\n\
         - 7-8: Good match, strong alignment in most areas\n\
         - 9-10: Excellent match, supervisor is ideally suited for this project\n\
         \n\
         Respond with only a single number between 0-10."
    )
}

#[cfg(test)]
pub(super) fn alignment_prompt_for_tests(student_text: &str, supervisor_text: &str) -> String {
    alignment_prompt(student_text, supervisor_text)
}
