//! Mock AI adapter for running without API calls.
//!
//! Returns a canned answer derived from the payload, for development and demos.

use crate::domain::DomainError;
use crate::ports::AiPort;
use std::time::Duration;
use tracing::info;

/// Mock AI adapter.
///
/// Never calls the network. Simulates latency with a configurable delay and
/// answers with a short summary of the event titles it was given.
pub struct MockAiAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockAiAdapter {
    /// Create a new mock adapter with default delay (100ms).
    pub fn new() -> Self {
        Self { delay_ms: 100 }
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockAiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AiPort for MockAiAdapter {
    async fn complete(
        &self,
        _system_instructions: &str,
        context_payload: &str,
        question: &str,
    ) -> Result<String, DomainError> {
        info!(
            context_len = context_payload.len(),
            question_len = question.len(),
            "[MOCK] Simulating AI answer"
        );

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        let events: Vec<serde_json::Value> = serde_json::from_str(context_payload)
            .map_err(|e| DomainError::Ai(format!("[MOCK] payload is not a JSON array: {}", e)))?;

        if events.is_empty() {
            return Ok(
                "[MOCK] I don't have any upcoming events to tell you about right now.".to_string(),
            );
        }

        let titles: Vec<String> = events
            .iter()
            .filter_map(|e| {
                let title = e.get("title")?.as_str()?;
                let date = e.get("date")?.as_str()?;
                Some(format!("{} ({})", title, date))
            })
            .collect();

        Ok(format!(
            "[MOCK] There are {} upcoming events: {}. Configure an AI API key for real answers.",
            events.len(),
            titles.join(", ")
        ))
    }
}
