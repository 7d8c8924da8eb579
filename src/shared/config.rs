//! Application configuration. Store location, seed override, AI and organizer credentials.

use serde::Deserialize;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_AI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_AI_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory holding `events.db`. Read from CAMPUS_EVENTS_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// JSON file replacing the built-in seed events. Read from CAMPUS_EVENTS_SEED_PATH.
    #[serde(default)]
    pub seed_path: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // AI Assistant Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// AI API key (e.g., OpenAI). Read from CAMPUS_EVENTS_AI_API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// AI API URL. Defaults to OpenAI. Read from CAMPUS_EVENTS_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// AI model name. Defaults to "gpt-4o-mini". Read from CAMPUS_EVENTS_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Organizer Login
    // ─────────────────────────────────────────────────────────────────────────
    /// Read from CAMPUS_EVENTS_ORGANIZER_EMAIL.
    #[serde(default)]
    pub organizer_email: Option<String>,

    /// Read from CAMPUS_EVENTS_ORGANIZER_PASSWORD.
    #[serde(default)]
    pub organizer_password: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("CAMPUS_EVENTS"));
        if let Ok(path) = std::env::var("CAMPUS_EVENTS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn data_dir_or_default(&self) -> &str {
        self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // AI Configuration Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the AI API key if configured and non-empty.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key.clone().filter(|k| !k.trim().is_empty())
    }

    /// Returns the AI API URL. Defaults to OpenAI chat completions endpoint.
    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_API_URL.to_string())
    }

    /// Returns the AI model name. Defaults to "gpt-4o-mini".
    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string())
    }

    /// Returns true if AI is configured (API key present).
    pub fn is_ai_configured(&self) -> bool {
        self.ai_api_key().is_some()
    }

    /// Organizer (email, password) when both are set.
    pub fn organizer_credentials(&self) -> Option<(String, String)> {
        match (&self.organizer_email, &self.organizer_password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Some((email.clone(), password.clone()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.data_dir_or_default(), "./data");
        assert_eq!(cfg.ai_api_url_or_default(), DEFAULT_AI_API_URL);
        assert_eq!(cfg.ai_model_or_default(), "gpt-4o-mini");
        assert!(!cfg.is_ai_configured());
        assert!(cfg.organizer_credentials().is_none());
    }

    #[test]
    fn test_blank_api_key_is_not_configured() {
        let cfg = AppConfig {
            ai_api_key: Some("  ".to_string()),
            ..AppConfig::default()
        };
        assert!(!cfg.is_ai_configured());
    }

    #[test]
    fn test_organizer_requires_both_fields() {
        let cfg = AppConfig {
            organizer_email: Some("org@college.edu.in".to_string()),
            ..AppConfig::default()
        };
        assert!(cfg.organizer_credentials().is_none());

        let cfg = AppConfig {
            organizer_email: Some("org@college.edu.in".to_string()),
            organizer_password: Some("secret".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(
            cfg.organizer_credentials(),
            Some(("org@college.edu.in".to_string(), "secret".to_string()))
        );
    }
}
