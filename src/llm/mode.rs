//! Conversation modes and their system prompts.

use serde::Serialize;

/// Tone/intent selector for a chat request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    General,
    Subject,
    Informative,
    Motivation,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::General,
        Mode::Subject,
        Mode::Informative,
        Mode::Motivation,
    ];

    /// Parse a caller-supplied mode. Unknown or missing values select `General`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "subject" => Mode::Subject,
            "informative" => Mode::Informative,
            "motivation" => Mode::Motivation,
            _ => Mode::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::General => "general",
            Mode::Subject => "subject",
            Mode::Informative => "informative",
            Mode::Motivation => "motivation",
        }
    }

    /// System prompt sent ahead of the user's message.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Mode::General => {
                "You are SKY Dost, a friendly and helpful AI study assistant. Provide helpful, educational responses to the user's questions about their studies."
            }
            Mode::Subject => {
                "You are SKY Dost, an expert tutor. Provide detailed explanations about academic subjects, break down complex concepts, and offer learning strategies."
            }
            Mode::Informative => {
                "You are SKY Dost, an informative research assistant. Provide comprehensive, well-structured information with examples and practical applications."
            }
            Mode::Motivation => {
                "You are SKY Dost, a motivational coach. Provide encouraging, uplifting responses that help students stay focused and overcome challenges."
            }
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes_case_insensitively() {
        assert_eq!(Mode::parse_lenient("Subject"), Mode::Subject);
        assert_eq!(Mode::parse_lenient(" informative "), Mode::Informative);
        assert_eq!(Mode::parse_lenient("MOTIVATION"), Mode::Motivation);
    }

    #[test]
    fn unknown_mode_is_general() {
        assert_eq!(Mode::parse_lenient("quiz"), Mode::General);
        assert_eq!(Mode::parse_lenient(""), Mode::General);
    }

    #[test]
    fn round_trips_through_as_str() {
        for mode in Mode::ALL {
            assert_eq!(Mode::parse_lenient(mode.as_str()), mode);
        }
    }

    #[test]
    fn every_prompt_names_the_assistant() {
        for mode in Mode::ALL {
            assert!(mode.system_prompt().starts_with("You are SKY Dost"));
        }
    }
}
