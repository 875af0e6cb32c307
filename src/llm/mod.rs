//! Chat-completion providers for SKY Dost.
//!
//! Supports, in priority order:
//! - **OpenAI**, **Groq**, **Perplexity**, **DeepSeek**: OpenAI-compatible chat completions
//! - **Claude**: Anthropic messages API
//!
//! Each provider is a [`ProviderApi`] implementation; the [`Dispatcher`] walks
//! them in order and hands over to the canned-reply fallback when none answer.

pub mod dispatcher;
pub mod mode;
pub mod provider;
pub mod providers;
pub mod status;

pub use dispatcher::{Dispatched, Dispatcher, ProviderAvailability, ReplySource};
pub use mode::Mode;
pub use provider::{FailureKind, ProviderApi, ProviderId, ProviderRequest};
pub use providers::{Anthropic, OpenAiCompatible, default_providers, provider_for};
pub use status::ProviderFlags;
