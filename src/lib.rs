//! SKY Dost: study-assistant chat backend with provider fallback.

pub mod chat;
pub mod config;
pub mod error;
pub mod fallback;
pub mod llm;
pub mod routes;
