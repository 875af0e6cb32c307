//! Chat service: validates input, answers commands, dispatches to providers
//! and keeps the single server-side session.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::info;

use crate::error::ChatError;
use crate::fallback::FallbackResponder;
use crate::llm::{Dispatcher, Mode, ProviderAvailability, ProviderId};

/// One user/bot exchange.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub user: String,
    pub bot: String,
    pub mode: Mode,
    pub timestamp: DateTime<Utc>,
}

/// In-memory conversation state. Lives as long as the process.
#[derive(Debug, Default)]
struct Session {
    history: Vec<ChatTurn>,
    current_mode: Mode,
}

pub struct ChatService {
    dispatcher: Dispatcher,
    session: RwLock<Session>,
}

impl ChatService {
    pub fn new(dispatcher: Dispatcher) -> Arc<Self> {
        Arc::new(Self {
            dispatcher,
            session: RwLock::new(Session::default()),
        })
    }

    /// Answer a message. `mode` defaults to the session's current mode and
    /// becomes the new current mode.
    pub async fn chat(&self, message: &str, mode: Option<&str>) -> Result<String, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let mode = match mode {
            Some(raw) => Mode::parse_lenient(raw),
            None => self.session.read().await.current_mode,
        };

        let answer = match FallbackResponder::command(message) {
            Some(reply) => {
                info!(mode = %mode, "Answered predefined command");
                reply.to_string()
            }
            None => {
                let dispatched = self.dispatcher.dispatch(message, mode).await;
                info!(source = %dispatched.source, mode = %mode, "Chat answered");
                dispatched.text
            }
        };

        let mut session = self.session.write().await;
        session.current_mode = mode;
        session.history.push(ChatTurn {
            user: message.to_string(),
            bot: answer.clone(),
            mode,
            timestamp: Utc::now(),
        });

        Ok(answer)
    }

    /// Set the current mode. Returns the mode actually stored.
    pub async fn set_mode(&self, raw: &str) -> Mode {
        let mode = Mode::parse_lenient(raw);
        self.session.write().await.current_mode = mode;
        info!(mode = %mode, "Mode changed");
        mode
    }

    pub async fn current_mode(&self) -> Mode {
        self.session.read().await.current_mode
    }

    /// Drop the conversation history and re-enable every provider.
    pub async fn clear(&self) {
        self.session.write().await.history.clear();
        self.dispatcher.reset_all().await;
    }

    pub async fn history(&self) -> Vec<ChatTurn> {
        self.session.read().await.history.clone()
    }

    pub async fn availability(
        &self,
    ) -> std::collections::BTreeMap<ProviderId, ProviderAvailability> {
        self.dispatcher.availability().await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::ProviderCredentials;
    use crate::fallback::tables::PREDEFINED_COMMANDS;
    use crate::llm::ProviderFlags;

    fn offline_service() -> Arc<ChatService> {
        let dispatcher = Dispatcher::new(
            ProviderCredentials::default(),
            ProviderFlags::new(),
            FallbackResponder::default(),
            Duration::from_secs(5),
        )
        .unwrap();
        ChatService::new(dispatcher)
    }

    #[tokio::test]
    async fn empty_message_is_rejected() {
        let service = offline_service();
        assert_eq!(service.chat("", None).await, Err(ChatError::EmptyMessage));
        assert_eq!(
            service.chat("   \n\t", Some("subject")).await,
            Err(ChatError::EmptyMessage)
        );
        assert!(service.history().await.is_empty());
        // A rejected message does not touch the mode either.
        assert_eq!(service.current_mode().await, Mode::General);
    }

    #[tokio::test]
    async fn commands_answer_with_fixed_text() {
        let service = offline_service();
        for (command, reply) in PREDEFINED_COMMANDS {
            let answer = service.chat(&command.to_uppercase(), None).await.unwrap();
            assert_eq!(answer, *reply);
        }
    }

    #[tokio::test]
    async fn history_records_trimmed_message_and_mode() {
        let service = offline_service();
        service.chat("  /help  ", Some("motivation")).await.unwrap();

        let history = service.history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].user, "/help");
        assert_eq!(history[0].mode, Mode::Motivation);
        assert_eq!(service.current_mode().await, Mode::Motivation);
    }

    #[tokio::test]
    async fn missing_mode_uses_session_mode() {
        let service = offline_service();
        service.set_mode("informative").await;
        service.chat("hello", None).await.unwrap();
        assert_eq!(service.history().await[0].mode, Mode::Informative);
    }

    #[tokio::test]
    async fn unknown_mode_falls_back_to_general() {
        let service = offline_service();
        assert_eq!(service.set_mode("quiz").await, Mode::General);
    }

    #[tokio::test]
    async fn clear_empties_history_and_resets_flags() {
        let service = offline_service();
        service.chat("hi", None).await.unwrap();
        service.dispatcher.flags().disable(ProviderId::Groq).await;

        service.clear().await;
        assert!(service.history().await.is_empty());
        assert!(service.availability().await[&ProviderId::Groq].enabled);
    }
}
