//! Provider dispatcher. Tries providers in priority order and falls back to
//! canned replies.
//!
//! For each provider the dispatcher skips it when disabled or when no usable
//! credential is configured, otherwise it makes exactly one call bounded by
//! the client timeout. Failures are classified by the provider and absorbed;
//! auth/payment failures disable the provider until [`Dispatcher::reset_all`].

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::mode::Mode;
use super::provider::{FailureKind, ProviderApi, ProviderId};
use super::providers::default_providers;
use super::status::ProviderFlags;
use crate::config::{self, ProviderCredentials};
use crate::error::{ConfigError, ProviderError};
use crate::fallback::FallbackResponder;

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Provider(ProviderId),
    Fallback,
}

impl ReplySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplySource::Provider(id) => id.as_str(),
            ReplySource::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for ReplySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a dispatch: reply text plus its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub text: String,
    pub source: ReplySource,
}

/// Per-provider availability as reported to the admin surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderAvailability {
    pub credential_present: bool,
    pub enabled: bool,
}

impl ProviderAvailability {
    pub fn usable(&self) -> bool {
        self.credential_present && self.enabled
    }
}

/// A provider call that did not yield a reply.
struct CallFailure {
    kind: FailureKind,
    error: ProviderError,
}

pub struct Dispatcher {
    client: Client,
    timeout: Duration,
    providers: Vec<Arc<dyn ProviderApi>>,
    credentials: ProviderCredentials,
    flags: Arc<ProviderFlags>,
    fallback: FallbackResponder,
}

impl Dispatcher {
    /// Build a dispatcher over the built-in providers.
    pub fn new(
        credentials: ProviderCredentials,
        flags: Arc<ProviderFlags>,
        fallback: FallbackResponder,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        Self::with_providers(default_providers(), credentials, flags, fallback, timeout)
    }

    /// Build a dispatcher over an explicit provider list. The list is sorted
    /// into priority order.
    pub fn with_providers(
        mut providers: Vec<Arc<dyn ProviderApi>>,
        credentials: ProviderCredentials,
        flags: Arc<ProviderFlags>,
        fallback: FallbackResponder,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("sky-dost/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        providers.sort_by_key(|p| p.id().rank());

        Ok(Self {
            client,
            timeout,
            providers,
            credentials,
            flags,
            fallback,
        })
    }

    pub fn flags(&self) -> Arc<ProviderFlags> {
        Arc::clone(&self.flags)
    }

    /// Try each provider once, in priority order; fall back to canned replies.
    pub async fn dispatch(&self, message: &str, mode: Mode) -> Dispatched {
        for provider in &self.providers {
            let id = provider.id();

            if !self.flags.is_enabled(id).await {
                debug!(provider = %id, "Skipping disabled provider");
                continue;
            }

            let Some(api_key) = self
                .credentials
                .get(id)
                .filter(|key| config::is_usable(id, key))
            else {
                debug!(provider = %id, "Skipping provider without credentials");
                continue;
            };

            info!(provider = %id, mode = %mode, "Trying provider");
            match self.call(provider.as_ref(), api_key, message, mode).await {
                Ok(text) => {
                    info!(provider = %id, "Provider answered");
                    return Dispatched {
                        text,
                        source: ReplySource::Provider(id),
                    };
                }
                Err(failure) => {
                    warn!(
                        provider = %id,
                        kind = ?failure.kind,
                        error = %failure.error,
                        "Provider call failed"
                    );
                    if failure.kind.disables() {
                        self.flags.disable(id).await;
                    }
                }
            }
        }

        info!("All AI providers failed, using fallback");
        Dispatched {
            text: self.fallback.respond(message),
            source: ReplySource::Fallback,
        }
    }

    /// Availability of every provider in priority order.
    pub async fn availability(&self) -> BTreeMap<ProviderId, ProviderAvailability> {
        let flags = self.flags.snapshot().await;
        ProviderId::PRIORITY
            .into_iter()
            .map(|id| {
                let credential_present = self
                    .credentials
                    .get(id)
                    .is_some_and(|key| config::is_usable(id, key));
                let enabled = flags.get(&id).copied().unwrap_or(true);
                (
                    id,
                    ProviderAvailability {
                        credential_present,
                        enabled,
                    },
                )
            })
            .collect()
    }

    /// Re-enable every provider.
    pub async fn reset_all(&self) {
        self.flags.reset_all().await;
    }

    async fn call(
        &self,
        provider: &dyn ProviderApi,
        api_key: &secrecy::SecretString,
        message: &str,
        mode: Mode,
    ) -> Result<String, CallFailure> {
        let id = provider.id();
        let request = provider.build_request(api_key, message, mode);

        let mut builder = self.client.post(&request.url).json(&request.body);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                let detail = e.to_string();
                let error = if e.is_timeout() {
                    ProviderError::Timeout {
                        provider: id.to_string(),
                        timeout: self.timeout,
                    }
                } else {
                    ProviderError::Transport {
                        provider: id.to_string(),
                        reason: detail.clone(),
                    }
                };
                return Err(CallFailure {
                    kind: provider.classify_error(None, &detail),
                    error,
                });
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let kind = provider.classify_error(Some(status), &body);
            let provider_name = id.to_string();
            let error = match kind {
                FailureKind::AuthFailure => ProviderError::AuthFailed {
                    provider: provider_name,
                    status: status.as_u16(),
                },
                FailureKind::RateLimited => ProviderError::RateLimited {
                    provider: provider_name,
                },
                FailureKind::BadRequest => ProviderError::BadRequest {
                    provider: provider_name,
                    body,
                },
                FailureKind::Other { .. } => ProviderError::Status {
                    provider: provider_name,
                    status: status.as_u16(),
                    body,
                },
            };
            return Err(CallFailure { kind, error });
        }

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                let detail = e.to_string();
                return Err(CallFailure {
                    kind: provider.classify_error(None, &detail),
                    error: ProviderError::InvalidResponse {
                        provider: id.to_string(),
                        reason: detail,
                    },
                });
            }
        };

        match provider.extract_reply(&body) {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(CallFailure {
                kind: FailureKind::Other { disable: false },
                error: ProviderError::InvalidResponse {
                    provider: id.to_string(),
                    reason: "no reply text in response".to_string(),
                },
            }),
        }
    }
}
