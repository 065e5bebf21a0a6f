//! Completion API configuration

use serde::{Deserialize, Serialize};

/// Completion API configuration
///
/// The service runs without a key: AI-backed handlers then answer in
/// keyword-extraction fallback mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// API key (usually injected via `OPENAI_API_KEY`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds
    #[serde(default = "default_completion_timeout")]
    pub timeout: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_api_base(),
            model: default_model(),
            timeout: default_completion_timeout(),
        }
    }
}

impl CompletionConfig {
    /// Whether a credential is configured
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_completion_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unconfigured() {
        let config = CompletionConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.api_base, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-4o");
    }

    #[test]
    fn test_empty_key_is_unconfigured() {
        let config = CompletionConfig {
            api_key: Some(String::new()),
            ..CompletionConfig::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn test_api_key_never_serializes() {
        let config = CompletionConfig {
            api_key: Some("sk-secret".to_string()),
            ..CompletionConfig::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(!yaml.contains("sk-secret"));
    }
}
