//! Configuration types.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::ConfigError;
use crate::llm::ProviderId;

/// Default port the HTTP server binds to.
pub const DEFAULT_PORT: u16 = 5000;

/// Default timeout applied to every outbound provider call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Generic placeholder shipped in sample `.env` files.
const GENERIC_PLACEHOLDER: &str = "your-api-key-here";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP listener.
    pub port: u16,
    /// Upper bound on a single provider call (timeouts count as transport failures).
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ServerConfig {
    /// Read `SKY_DOST_PORT` and `SKY_DOST_TIMEOUT_SECS`, falling back to defaults
    /// when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("SKY_DOST_PORT") {
            Ok(raw) => raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: "SKY_DOST_PORT".to_string(),
                message: format!("{e}"),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let request_timeout = match std::env::var("SKY_DOST_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                    key: "SKY_DOST_TIMEOUT_SECS".to_string(),
                    message: format!("{e}"),
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: "SKY_DOST_TIMEOUT_SECS".to_string(),
                        message: "timeout must be at least one second".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Self {
            port,
            request_timeout,
        })
    }
}

/// API keys for every provider, `None` when absent or still a placeholder.
#[derive(Debug, Clone, Default)]
pub struct ProviderCredentials {
    pub openai: Option<SecretString>,
    pub groq: Option<SecretString>,
    pub perplexity: Option<SecretString>,
    pub deepseek: Option<SecretString>,
    pub claude: Option<SecretString>,
}

impl ProviderCredentials {
    /// Load keys from `OPENAI_KEY`, `GROQ_KEY`, `PERPLEXITY_KEY`,
    /// `DEEPSEEK_KEY` and `CLAUDE_KEY`.
    pub fn from_env() -> Self {
        let mut creds = Self::default();
        for id in ProviderId::PRIORITY {
            let raw = std::env::var(id.env_var()).ok();
            creds.set(id, raw.and_then(|value| credential_from_raw(id, &value)));
        }
        creds
    }

    /// Credential for a provider, if configured.
    pub fn get(&self, id: ProviderId) -> Option<&SecretString> {
        match id {
            ProviderId::OpenAi => self.openai.as_ref(),
            ProviderId::Groq => self.groq.as_ref(),
            ProviderId::Perplexity => self.perplexity.as_ref(),
            ProviderId::DeepSeek => self.deepseek.as_ref(),
            ProviderId::Claude => self.claude.as_ref(),
        }
    }

    /// Replace the credential for a provider.
    pub fn set(&mut self, id: ProviderId, value: Option<SecretString>) {
        let slot = match id {
            ProviderId::OpenAi => &mut self.openai,
            ProviderId::Groq => &mut self.groq,
            ProviderId::Perplexity => &mut self.perplexity,
            ProviderId::DeepSeek => &mut self.deepseek,
            ProviderId::Claude => &mut self.claude,
        };
        *slot = value;
    }

    /// Builder-style variant of [`set`](Self::set) that runs placeholder detection.
    pub fn with(mut self, id: ProviderId, raw: &str) -> Self {
        self.set(id, credential_from_raw(id, raw));
        self
    }

    /// Providers that have a usable key, in priority order.
    pub fn configured(&self) -> Vec<ProviderId> {
        ProviderId::PRIORITY
            .into_iter()
            .filter(|id| self.get(*id).is_some())
            .collect()
    }
}

/// Turn a raw key into a credential, rejecting blanks and sample placeholders.
pub fn credential_from_raw(id: ProviderId, raw: &str) -> Option<SecretString> {
    let trimmed = raw.trim();
    if is_placeholder(id, trimmed) {
        return None;
    }
    Some(SecretString::from(trimmed.to_string()))
}

fn is_placeholder(id: ProviderId, value: &str) -> bool {
    value.is_empty()
        || value == GENERIC_PLACEHOLDER
        || value == format!("your-{}-api-key-here", id.as_str())
}

/// Whether a stored credential still holds something usable.
pub(crate) fn is_usable(id: ProviderId, secret: &SecretString) -> bool {
    !is_placeholder(id, secret.expose_secret().trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_placeholder_keys_are_absent() {
        assert!(credential_from_raw(ProviderId::OpenAi, "").is_none());
        assert!(credential_from_raw(ProviderId::OpenAi, "   ").is_none());
        assert!(credential_from_raw(ProviderId::OpenAi, "your-api-key-here").is_none());
        assert!(credential_from_raw(ProviderId::OpenAi, "your-openai-api-key-here").is_none());
        assert!(credential_from_raw(ProviderId::Groq, "your-groq-api-key-here").is_none());
    }

    #[test]
    fn other_providers_placeholder_is_a_real_value() {
        // Only the provider's own placeholder is rejected.
        assert!(credential_from_raw(ProviderId::Groq, "your-openai-api-key-here").is_some());
    }

    #[test]
    fn real_key_is_trimmed() {
        let key = credential_from_raw(ProviderId::Claude, "  sk-ant-123 \n").unwrap();
        assert_eq!(key.expose_secret(), "sk-ant-123");
    }

    #[test]
    fn configured_follows_priority_order() {
        let creds = ProviderCredentials::default()
            .with(ProviderId::Claude, "c")
            .with(ProviderId::Groq, "g")
            .with(ProviderId::DeepSeek, "");
        assert_eq!(
            creds.configured(),
            vec![ProviderId::Groq, ProviderId::Claude]
        );
    }

    #[test]
    fn default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
