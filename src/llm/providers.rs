//! Built-in provider wire contracts.
//!
//! - **OpenAI-compatible** (`openai`, `groq`, `perplexity`, `deepseek`): system +
//!   user message list, bearer auth, reply at `choices[0].message.content`.
//! - **Anthropic** (`claude`): system prompt folded into the single user turn,
//!   `x-api-key` auth, reply at `content[0].text`.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use super::mode::Mode;
use super::provider::{ProviderApi, ProviderId, ProviderRequest};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// A provider speaking the OpenAI chat-completions dialect.
#[derive(Debug, Clone)]
pub struct OpenAiCompatible {
    id: ProviderId,
    endpoint: String,
    model: &'static str,
    temperature: f64,
    max_tokens: u32,
}

impl OpenAiCompatible {
    pub fn openai() -> Self {
        Self {
            id: ProviderId::OpenAi,
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-3.5-turbo",
            temperature: 0.7,
            max_tokens: 500,
        }
    }

    pub fn groq() -> Self {
        Self {
            id: ProviderId::Groq,
            endpoint: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            model: "llama-3.1-8b-instant",
            temperature: 0.7,
            max_tokens: 512,
        }
    }

    pub fn perplexity() -> Self {
        Self {
            id: ProviderId::Perplexity,
            endpoint: "https://api.perplexity.ai/chat/completions".to_string(),
            model: "sonar-small-chat",
            temperature: 0.2,
            max_tokens: 500,
        }
    }

    pub fn deepseek() -> Self {
        Self {
            id: ProviderId::DeepSeek,
            endpoint: "https://api.deepseek.com/v1/chat/completions".to_string(),
            model: "deepseek-chat",
            temperature: 0.7,
            max_tokens: 500,
        }
    }

    /// Point this provider at a different URL (tests, proxies).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl ProviderApi for OpenAiCompatible {
    fn id(&self) -> ProviderId {
        self.id
    }

    fn build_request(&self, api_key: &SecretString, message: &str, mode: Mode) -> ProviderRequest {
        ProviderRequest {
            url: self.endpoint.clone(),
            headers: vec![(
                "Authorization",
                format!("Bearer {}", api_key.expose_secret()),
            )],
            body: serde_json::json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": mode.system_prompt()},
                    {"role": "user", "content": message},
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens,
            }),
        }
    }

    fn extract_reply(&self, body: &Value) -> Option<String> {
        body.get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|msg| msg.get("content"))
            .and_then(|val| val.as_str())
            .map(str::to_string)
    }
}

/// Anthropic messages API.
#[derive(Debug, Clone)]
pub struct Anthropic {
    endpoint: String,
    model: &'static str,
    max_tokens: u32,
}

impl Anthropic {
    pub fn claude() -> Self {
        Self {
            endpoint: "https://api.anthropic.com/v1/messages".to_string(),
            model: "claude-instant-1.2",
            max_tokens: 500,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl ProviderApi for Anthropic {
    fn id(&self) -> ProviderId {
        ProviderId::Claude
    }

    fn build_request(&self, api_key: &SecretString, message: &str, mode: Mode) -> ProviderRequest {
        ProviderRequest {
            url: self.endpoint.clone(),
            headers: vec![
                ("x-api-key", api_key.expose_secret().to_string()),
                ("anthropic-version", ANTHROPIC_VERSION.to_string()),
            ],
            body: serde_json::json!({
                "model": self.model,
                "max_tokens": self.max_tokens,
                "messages": [
                    {
                        "role": "user",
                        "content": format!("{}\n\n{}", mode.system_prompt(), message),
                    }
                ],
            }),
        }
    }

    fn extract_reply(&self, body: &Value) -> Option<String> {
        body.get("content")
            .and_then(|c| c.get(0))
            .and_then(|part| part.get("text"))
            .and_then(|text| text.as_str())
            .map(str::to_string)
    }
}

/// The built-in providers, in priority order.
pub fn default_providers() -> Vec<Arc<dyn ProviderApi>> {
    ProviderId::PRIORITY
        .into_iter()
        .map(provider_for)
        .collect()
}

/// Table lookup from identifier to implementation.
pub fn provider_for(id: ProviderId) -> Arc<dyn ProviderApi> {
    match id {
        ProviderId::OpenAi => Arc::new(OpenAiCompatible::openai()),
        ProviderId::Groq => Arc::new(OpenAiCompatible::groq()),
        ProviderId::Perplexity => Arc::new(OpenAiCompatible::perplexity()),
        ProviderId::DeepSeek => Arc::new(OpenAiCompatible::deepseek()),
        ProviderId::Claude => Arc::new(Anthropic::claude()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> SecretString {
        SecretString::from("sk-test")
    }

    #[test]
    fn default_table_matches_priority() {
        let ids: Vec<ProviderId> = default_providers().iter().map(|p| p.id()).collect();
        assert_eq!(ids, ProviderId::PRIORITY.to_vec());
    }

    #[test]
    fn openai_request_shape() {
        let req = OpenAiCompatible::openai().build_request(&key(), "What is a vector?", Mode::Subject);
        assert_eq!(req.url, "https://api.openai.com/v1/chat/completions");
        assert_eq!(req.header("Authorization"), Some("Bearer sk-test"));
        assert_eq!(req.body["model"], "gpt-3.5-turbo");
        assert_eq!(req.body["temperature"], 0.7);
        assert_eq!(req.body["max_tokens"], 500);
        assert_eq!(req.body["messages"][0]["role"], "system");
        assert_eq!(req.body["messages"][0]["content"], Mode::Subject.system_prompt());
        assert_eq!(req.body["messages"][1]["role"], "user");
        assert_eq!(req.body["messages"][1]["content"], "What is a vector?");
    }

    #[test]
    fn groq_and_perplexity_parameters() {
        let groq = OpenAiCompatible::groq().build_request(&key(), "hi", Mode::General);
        assert_eq!(groq.body["model"], "llama-3.1-8b-instant");
        assert_eq!(groq.body["max_tokens"], 512);

        let pplx = OpenAiCompatible::perplexity().build_request(&key(), "hi", Mode::General);
        assert_eq!(pplx.url, "https://api.perplexity.ai/chat/completions");
        assert_eq!(pplx.body["model"], "sonar-small-chat");
        assert_eq!(pplx.body["temperature"], 0.2);
    }

    #[test]
    fn claude_request_folds_system_prompt() {
        let req = Anthropic::claude().build_request(&key(), "Explain osmosis", Mode::Motivation);
        assert_eq!(req.url, "https://api.anthropic.com/v1/messages");
        assert_eq!(req.header("x-api-key"), Some("sk-test"));
        assert_eq!(req.header("anthropic-version"), Some("2023-06-01"));
        assert!(req.header("Authorization").is_none());
        assert_eq!(req.body["model"], "claude-instant-1.2");
        assert_eq!(req.body["max_tokens"], 500);
        assert!(req.body.get("temperature").is_none());

        let messages = req.body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(
            messages[0]["content"],
            format!("{}\n\nExplain osmosis", Mode::Motivation.system_prompt())
        );
    }

    #[test]
    fn extracts_replies_per_shape() {
        let openai_body = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "Hello!"}}]
        });
        assert_eq!(
            OpenAiCompatible::deepseek().extract_reply(&openai_body),
            Some("Hello!".to_string())
        );
        assert_eq!(Anthropic::claude().extract_reply(&openai_body), None);

        let claude_body = serde_json::json!({
            "content": [{"type": "text", "text": "Hi from Claude"}]
        });
        assert_eq!(
            Anthropic::claude().extract_reply(&claude_body),
            Some("Hi from Claude".to_string())
        );
        assert_eq!(OpenAiCompatible::openai().extract_reply(&claude_body), None);
    }

    #[test]
    fn endpoint_override() {
        let groq = OpenAiCompatible::groq().with_endpoint("http://127.0.0.1:9/v1");
        assert_eq!(groq.id(), ProviderId::Groq);
        let req = groq.build_request(&key(), "hi", Mode::General);
        assert_eq!(req.url, "http://127.0.0.1:9/v1");

        let claude = Anthropic::claude().with_endpoint("http://127.0.0.1:9/messages");
        assert_eq!(
            claude.build_request(&key(), "hi", Mode::General).url,
            "http://127.0.0.1:9/messages"
        );
    }
}
