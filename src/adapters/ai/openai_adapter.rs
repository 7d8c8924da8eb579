//! OpenAI-compatible adapter for the event assistant.
//!
//! Supports OpenAI API, Azure OpenAI, and local Ollama instances.
//! Implements `AiPort` as a single stateless chat completion per question.

use crate::domain::DomainError;
use crate::ports::AiPort;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// OpenAI-compatible AI adapter.
///
/// Can be configured to work with:
/// - OpenAI API (api.openai.com)
/// - Azure OpenAI
/// - Ollama (localhost)
/// - Any OpenAI-compatible API
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiAdapter {
    /// Create a new OpenAI adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - API key (can be empty for local Ollama)
    /// * `model` - Model name (e.g., "gpt-4o-mini", "llama3.2")
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
        }
    }

    /// Build the user turn: event payload first, then the question verbatim.
    fn user_prompt(context_payload: &str, question: &str) -> String {
        format!(
            "Here is the list of upcoming events in JSON format:\n{}\n\nNow, please answer the following user question.\n\nQuestion: {}",
            context_payload, question
        )
    }

    /// First choice's content, rejecting missing or blank output.
    fn extract_answer(response: ChatResponse) -> Result<String, DomainError> {
        let content = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Ai("No response choices returned".to_string()))?
            .message
            .content
            .unwrap_or_default();
        if content.trim().is_empty() {
            return Err(DomainError::Ai("Model returned no output".to_string()));
        }
        Ok(content)
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    /// `null` when the model produced no text (e.g. a refusal or tool call).
    content: Option<String>,
}

#[async_trait::async_trait]
impl AiPort for OpenAiAdapter {
    async fn complete(
        &self,
        system_instructions: &str,
        context_payload: &str,
        question: &str,
    ) -> Result<String, DomainError> {
        info!(
            model = %self.model,
            context_len = context_payload.len(),
            question_len = question.len(),
            "sending question to AI"
        );

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_instructions.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Self::user_prompt(context_payload, question),
                },
            ],
            temperature: 0.3,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Ai(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "AI API returned error");
            return Err(DomainError::Ai(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Ai(format!("Failed to parse API response: {}", e)))?;

        let answer = Self::extract_answer(chat_response)?;
        debug!(answer_len = answer.len(), "received AI answer");
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn parse(body: &str) -> ChatResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_user_prompt_keeps_question_verbatim() {
        let question = "  What's ON this week?\n";
        let prompt = OpenAiAdapter::user_prompt("[]", question);
        assert!(prompt.ends_with(&format!("Question: {}", question)));
        assert!(prompt.contains("[]"));
    }

    #[test]
    fn test_extract_answer_ok() {
        let resp =
            parse(r#"{"choices":[{"message":{"role":"assistant","content":"Two events."}}]}"#);
        assert_eq!(OpenAiAdapter::extract_answer(resp).unwrap(), "Two events.");
    }

    #[test]
    fn test_extract_answer_rejects_missing_output() {
        let none = parse(r#"{"choices":[]}"#);
        assert!(matches!(
            OpenAiAdapter::extract_answer(none),
            Err(DomainError::Ai(_))
        ));

        let null = parse(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#);
        assert!(OpenAiAdapter::extract_answer(null).is_err());

        let blank = parse(r#"{"choices":[{"message":{"content":"   "}}]}"#);
        assert!(OpenAiAdapter::extract_answer(blank).is_err());
    }

    /// Serve one canned HTTP response and hand back the raw request body.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            let header_end = loop {
                let n = sock.read(&mut chunk).await.unwrap();
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
            let content_length: usize = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .map(|v| v.trim().parse().unwrap())
                .unwrap_or(0);
            while buf.len() < header_end + content_length {
                let n = sock.read(&mut chunk).await.unwrap();
                buf.extend_from_slice(&chunk[..n]);
            }
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            sock.write_all(response.as_bytes()).await.unwrap();
            sock.shutdown().await.ok();
            String::from_utf8_lossy(&buf[header_end..]).into_owned()
        });
        (format!("http://{}/v1/chat/completions", addr), handle)
    }

    #[tokio::test]
    async fn test_complete_sends_system_and_user_turns() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"choices":[{"message":{"role":"assistant","content":"The hackathon is on Saturday."}}]}"#,
        )
        .await;
        let adapter = OpenAiAdapter::new(url, "test-key".to_string(), "gpt-4o-mini".to_string());

        let answer = adapter
            .complete("Answer only from data.", "[]", "When is the hackathon?")
            .await
            .unwrap();
        assert_eq!(answer, "The hackathon is on Saturday.");

        let sent: serde_json::Value = serde_json::from_str(&server.await.unwrap()).unwrap();
        assert_eq!(sent["model"], "gpt-4o-mini");
        assert_eq!(sent["messages"][0]["role"], "system");
        assert_eq!(sent["messages"][0]["content"], "Answer only from data.");
        let user = sent["messages"][1]["content"].as_str().unwrap();
        assert!(user.ends_with("Question: When is the hackathon?"));
    }

    #[tokio::test]
    async fn test_complete_maps_http_error() {
        let (url, server) =
            serve_once("HTTP/1.1 500 Internal Server Error", r#"{"error":"boom"}"#).await;
        let adapter = OpenAiAdapter::new(url, String::new(), "llama3.2".to_string());

        let err = adapter.complete("sys", "[]", "q").await.unwrap_err();
        assert!(matches!(err, DomainError::Ai(ref m) if m.contains("500")));
        server.await.unwrap();
    }
}
