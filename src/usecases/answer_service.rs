//! Answer service. Grounded question answering over the upcoming event catalog.
//!
//! Coordinates between the catalog (data), the JSON context builder, and the AI port.

use crate::adapters::ai::events_to_json_context;
use crate::domain::{Answer, DomainError};
use crate::ports::AiPort;
use crate::usecases::catalog_service::{CatalogService, FetchFallback};
use std::sync::Arc;
use tracing::{info, warn};

/// Instructions sent with every question. The "only from the data, decline
/// otherwise" wording is a product rule; keep it verbatim across AI backends.
pub const SYSTEM_INSTRUCTIONS: &str = "You are a helpful AI assistant for a campus events website called CampUsConnect.
Your role is to answer user questions based ONLY on the event data provided below.
Do not make up information. If the answer is not in the provided data, say that you don't have that information.
Be concise and friendly in your response.";

/// Service for assistant questions.
///
/// Orchestrates the flow:
/// 1. Fetch stored events and merge with seed events (store failure fails the call)
/// 2. Keep upcoming events, ordered by date
/// 3. Serialize them to a JSON payload
/// 4. Ask the AI with the fixed instructions and the question verbatim
///
/// Holds no mutable state; concurrent calls run independently.
pub struct AnswerService {
    catalog: Arc<CatalogService>,
    ai: Arc<dyn AiPort>,
}

impl AnswerService {
    /// Create a new answer service.
    ///
    /// # Arguments
    /// * `catalog` - Merged seed/store event source
    /// * `ai` - AI port implementation (OpenAI, Mock, etc.)
    pub fn new(catalog: Arc<CatalogService>, ai: Arc<dyn AiPort>) -> Self {
        Self { catalog, ai }
    }

    /// Answer one question from the current upcoming events.
    ///
    /// No retries and no partial results: a store or AI failure fails the call.
    /// The question is forwarded untouched, even when empty.
    pub async fn answer(&self, question: &str) -> Result<Answer, DomainError> {
        let events = self.catalog.upcoming(FetchFallback::Propagate).await?;

        let payload = events_to_json_context(&events)
            .map_err(|e| DomainError::Ai(format!("Failed to build event context: {}", e)))?;

        info!(
            events = events.len(),
            payload_len = payload.len(),
            "answering event question"
        );

        let answer = self
            .ai
            .complete(SYSTEM_INSTRUCTIONS, &payload, question)
            .await?;

        if answer.trim().is_empty() {
            warn!("AI returned an empty answer");
            return Err(DomainError::Ai("Model returned no output".to_string()));
        }

        Ok(Answer { answer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Event;
    use crate::shared::SeedCatalog;
    use crate::test_support::{FakeStore, FixedClock, RecordingAi, date, event};
    use std::sync::atomic::Ordering;

    struct Fixture {
        store: Arc<FakeStore>,
        ai: Arc<RecordingAi>,
        service: AnswerService,
    }

    fn fixture(seed: Vec<Event>, store: FakeStore, ai: RecordingAi, today: &str) -> Fixture {
        let store = Arc::new(store);
        let ai = Arc::new(ai);
        let catalog = Arc::new(CatalogService::new(
            store.clone(),
            Arc::new(SeedCatalog::new(seed)),
            Arc::new(FixedClock(date(today))),
        ));
        Fixture {
            service: AnswerService::new(catalog, ai.clone()),
            store,
            ai,
        }
    }

    fn payload_ids(payload: &str) -> Vec<String> {
        let events: Vec<Event> = serde_json::from_str(payload).unwrap();
        events.into_iter().map(|e| e.id).collect()
    }

    #[tokio::test]
    async fn test_only_upcoming_events_reach_the_model() {
        let f = fixture(
            vec![event("a", "2024-01-10")],
            FakeStore::with_events(vec![event("b", "2024-01-05")]),
            RecordingAi::replying("Only event a is coming up."),
            "2024-01-09",
        );

        let answer = f.service.answer("What's on?").await.unwrap();

        assert_eq!(answer.answer, "Only event a is coming up.");
        let (_, payload, _) = f.ai.last_call();
        assert_eq!(payload_ids(&payload), ["a"]);
    }

    #[tokio::test]
    async fn test_payload_is_date_ordered_and_complete() {
        let f = fixture(
            vec![event("s1", "2024-01-30"), event("s2", "2024-01-08")],
            FakeStore::with_events(vec![
                event("d1", "2024-01-12"),
                event("d2", "2024-01-07"),
                event("d3", "2024-01-20"),
            ]),
            RecordingAi::replying("ok"),
            "2024-01-09",
        );

        f.service.answer("list everything").await.unwrap();

        let (_, payload, _) = f.ai.last_call();
        assert_eq!(payload_ids(&payload), ["s2", "d1", "d3", "s1"]);
        let events: Vec<Event> = serde_json::from_str(&payload).unwrap();
        assert!(events.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[tokio::test]
    async fn test_empty_catalog_still_asks() {
        let f = fixture(
            Vec::new(),
            FakeStore::default(),
            RecordingAi::replying("I don't have that information."),
            "2024-01-09",
        );

        let answer = f.service.answer("Any hackathons?").await.unwrap();

        assert_eq!(answer.answer, "I don't have that information.");
        let (system, payload, question) = f.ai.last_call();
        assert_eq!(system, SYSTEM_INSTRUCTIONS);
        assert_eq!(payload, "[]");
        assert_eq!(question, "Any hackathons?");
    }

    #[tokio::test]
    async fn test_question_forwarded_byte_identical() {
        let f = fixture(
            vec![event("a", "2024-01-10")],
            FakeStore::default(),
            RecordingAi::replying("ok"),
            "2024-01-09",
        );

        for question in ["  Padded?  ", "MiXeD CaSe", "", "multi\nline ünïcode ✓"] {
            f.service.answer(question).await.unwrap();
            let (_, _, seen) = f.ai.last_call();
            assert_eq!(seen.as_bytes(), question.as_bytes());
        }
    }

    #[tokio::test]
    async fn test_ai_failure_propagates() {
        let f = fixture(
            vec![event("a", "2024-01-10")],
            FakeStore::default(),
            RecordingAi::failing(),
            "2024-01-09",
        );
        let err = f.service.answer("When?").await.unwrap_err();
        assert!(matches!(err, DomainError::Ai(_)));
    }

    #[tokio::test]
    async fn test_blank_answer_is_a_failure() {
        let f = fixture(
            vec![event("a", "2024-01-10")],
            FakeStore::default(),
            RecordingAi::replying(" \n"),
            "2024-01-09",
        );
        assert!(matches!(
            f.service.answer("When?").await,
            Err(DomainError::Ai(_))
        ));
    }

    #[tokio::test]
    async fn test_store_failure_propagates_without_calling_ai() {
        let f = fixture(
            vec![event("a", "2024-01-10")],
            FakeStore::failing(),
            RecordingAi::replying("should not be used"),
            "2024-01-09",
        );
        let err = f.service.answer("When?").await.unwrap_err();
        assert!(matches!(err, DomainError::Store(_)));
        assert!(f.ai.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_every_call_refetches() {
        let f = fixture(
            Vec::new(),
            FakeStore::with_events(vec![event("d", "2024-01-10")]),
            RecordingAi::replying("ok"),
            "2024-01-09",
        );

        let (a, b) = tokio::join!(f.service.answer("one"), f.service.answer("two"));
        a.unwrap();
        b.unwrap();

        assert_eq!(f.store.reads.load(Ordering::SeqCst), 2);
        assert_eq!(f.ai.calls.lock().unwrap().len(), 2);
    }
}
