//! Provider identities and the capability set each provider implements.

use reqwest::StatusCode;
use secrecy::SecretString;
use serde_json::Value;

use super::mode::Mode;

/// Identifier of an external chat-completion provider.
/// Variants are declared in priority order, so the derived `Ord` matches
/// [`ProviderId::PRIORITY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProviderId {
    OpenAi,
    Groq,
    Perplexity,
    DeepSeek,
    Claude,
}

impl ProviderId {
    /// Fixed trial order. Never reordered at runtime.
    pub const PRIORITY: [ProviderId; 5] = [
        ProviderId::OpenAi,
        ProviderId::Groq,
        ProviderId::Perplexity,
        ProviderId::DeepSeek,
        ProviderId::Claude,
    ];

    /// Position in [`ProviderId::PRIORITY`].
    pub fn rank(&self) -> usize {
        ProviderId::PRIORITY
            .iter()
            .position(|id| id == self)
            .unwrap_or(ProviderId::PRIORITY.len())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenAi => "openai",
            ProviderId::Groq => "groq",
            ProviderId::Perplexity => "perplexity",
            ProviderId::DeepSeek => "deepseek",
            ProviderId::Claude => "claude",
        }
    }

    /// Environment variable holding this provider's API key.
    pub fn env_var(&self) -> &'static str {
        match self {
            ProviderId::OpenAi => "OPENAI_KEY",
            ProviderId::Groq => "GROQ_KEY",
            ProviderId::Perplexity => "PERPLEXITY_KEY",
            ProviderId::DeepSeek => "DEEPSEEK_KEY",
            ProviderId::Claude => "CLAUDE_KEY",
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully shaped outbound call, ready to hand to the HTTP client.
pub struct ProviderRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Value,
}

impl std::fmt::Debug for ProviderRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Header values carry the API key.
        let names: Vec<&str> = self.headers.iter().map(|(name, _)| *name).collect();
        f.debug_struct("ProviderRequest")
            .field("url", &self.url)
            .field("headers", &names)
            .field("body", &self.body)
            .finish()
    }
}

#[cfg(test)]
impl ProviderRequest {
    /// Look up a header value by (case-insensitive) name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// How a failed provider call should be treated by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// HTTP 401/402: disable until the flags are reset.
    AuthFailure,
    /// HTTP 429: skip for now, stay enabled.
    RateLimited,
    /// HTTP 400: skip for now, stay enabled.
    BadRequest,
    /// Anything else. `disable` is set when the error text looks like an auth
    /// or quota problem.
    Other { disable: bool },
}

impl FailureKind {
    pub fn disables(&self) -> bool {
        matches!(
            self,
            FailureKind::AuthFailure | FailureKind::Other { disable: true }
        )
    }
}

/// Request shaping, reply extraction and error classification for one provider.
pub trait ProviderApi: Send + Sync {
    fn id(&self) -> ProviderId;

    /// Build the provider-specific request for a single user message.
    fn build_request(&self, api_key: &SecretString, message: &str, mode: Mode) -> ProviderRequest;

    /// Pull the reply text out of a successful response body.
    fn extract_reply(&self, body: &Value) -> Option<String>;

    /// Classify a failed call. `status` is `None` for transport errors;
    /// `detail` is the response body or the transport error text.
    fn classify_error(&self, status: Option<StatusCode>, detail: &str) -> FailureKind {
        classify_by_status(status, detail)
    }
}

/// Shared classification used by every built-in provider.
pub fn classify_by_status(status: Option<StatusCode>, detail: &str) -> FailureKind {
    match status.map(|s| s.as_u16()) {
        Some(401) | Some(402) => FailureKind::AuthFailure,
        Some(429) => FailureKind::RateLimited,
        Some(400) => FailureKind::BadRequest,
        _ => FailureKind::Other {
            disable: mentions_auth_or_quota(detail),
        },
    }
}

fn mentions_auth_or_quota(detail: &str) -> bool {
    let lower = detail.to_lowercase();
    has_token(&lower, "401") || has_token(&lower, "402") || lower.contains("quota")
}

/// `needle` appears with no letter or digit directly on either side, so ids
/// like `req_7c402e19` or a port such as `44021` do not count.
fn has_token(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + needle.len()..].chars().next();
        !before.is_some_and(|c| c.is_ascii_alphanumeric())
            && !after.is_some_and(|c| c.is_ascii_alphanumeric())
    })
}
