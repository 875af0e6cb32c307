//! Rule-based canned replies used when no provider produces an answer.
//!
//! Precedence, first hit wins:
//! 1. exact predefined command
//! 2. greeting trigger (substring)
//! 3. subject keyword (substring, declared order)
//! 4. generic study keyword (substring) → default reply
//! 5. default reply
//!
//! All matching is case-insensitive. Random picks go through a [`ReplyPicker`]
//! so tests can pin the choice.

pub mod tables;

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use tables::{
    DEFAULT_REPLIES, GREETING_REPLIES, GREETING_TRIGGERS, PREDEFINED_COMMANDS, STUDY_KEYWORDS,
    SUBJECT_REPLIES,
};

/// Source of the random index used to choose among candidate replies.
pub trait ReplyPicker: Send + Sync {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform picks from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl ReplyPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic picks from a seeded RNG.
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ReplyPicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}

/// Which rule produced a fallback reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackMatch {
    /// Exact predefined command, carrying its fixed reply.
    Command(&'static str),
    Greeting,
    Subject(&'static str),
    StudyKeyword,
    Default,
}

/// Canned-reply responder.
#[derive(Clone)]
pub struct FallbackResponder {
    picker: Arc<dyn ReplyPicker>,
}

impl Default for FallbackResponder {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRngPicker))
    }
}

impl FallbackResponder {
    pub fn new(picker: Arc<dyn ReplyPicker>) -> Self {
        Self { picker }
    }

    /// Fixed reply for an exact (case-insensitive) predefined command.
    pub fn command(message: &str) -> Option<&'static str> {
        let lower = message.to_lowercase();
        PREDEFINED_COMMANDS
            .iter()
            .find(|(command, _)| *command == lower)
            .map(|(_, reply)| *reply)
    }

    /// Decide which rule applies to a message, without picking a reply.
    pub fn classify(message: &str) -> FallbackMatch {
        if let Some(reply) = Self::command(message) {
            return FallbackMatch::Command(reply);
        }

        let lower = message.to_lowercase();
        if GREETING_TRIGGERS.iter().any(|t| lower.contains(t)) {
            return FallbackMatch::Greeting;
        }

        if let Some((subject, _)) = SUBJECT_REPLIES.iter().find(|(s, _)| lower.contains(s)) {
            return FallbackMatch::Subject(*subject);
        }

        if STUDY_KEYWORDS.iter().any(|k| lower.contains(k)) {
            return FallbackMatch::StudyKeyword;
        }

        FallbackMatch::Default
    }

    /// Produce a canned reply for the message. Never empty.
    pub fn respond(&self, message: &str) -> String {
        let matched = Self::classify(message);
        debug!(rule = ?matched, "Fallback rule matched");

        let reply = match matched {
            FallbackMatch::Command(reply) => reply,
            FallbackMatch::Greeting => self.choose(GREETING_REPLIES),
            FallbackMatch::Subject(subject) => {
                let candidates = SUBJECT_REPLIES
                    .iter()
                    .find(|(s, _)| *s == subject)
                    .map(|(_, replies)| *replies)
                    .unwrap_or(DEFAULT_REPLIES);
                self.choose(candidates)
            }
            FallbackMatch::StudyKeyword | FallbackMatch::Default => self.choose(DEFAULT_REPLIES),
        };
        reply.to_string()
    }

    fn choose(&self, candidates: &'static [&'static str]) -> &'static str {
        let idx = self.picker.pick(candidates.len());
        candidates[idx.min(candidates.len() - 1)]
    }
}
