//! In-memory session state: who said what, and when.

use chrono::Local;
use std::fmt;

/// Timestamp in the session's display format, e.g. `2026-08-28 14:05`.
pub fn now() -> String {
    Local::now().format("%Y-%m-%d %H:%M").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    pub fn as_str(self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::Bot => "bot",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record in the conversation.
#[derive(Debug, Clone)]
pub struct Turn {
    pub timestamp: String,
    pub speaker: Speaker,
    pub text: String,
}

impl Turn {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            timestamp: now(),
            speaker,
            text: text.into(),
        }
    }
}

/// Per-process conversation state. Destroyed at exit; the transcript store
/// outlives it.
pub struct Session {
    pub id: String,
    pub company: String,
    /// Set at most once, on the first detected greeting.
    pub user_name: Option<String>,
    pub turns: Vec<Turn>,
}

impl Session {
    pub fn new(company: impl Into<String>) -> Self {
        Self {
            id: format!("session-{}", Local::now().timestamp()),
            company: company.into(),
            user_name: None,
            turns: Vec::new(),
        }
    }

    pub fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.turns.push(Turn::new(speaker, text));
    }

    /// Formatted turn history, or a placeholder when nothing was said yet.
    pub fn summary(&self) -> String {
        if self.turns.is_empty() {
            return "📋 No conversation history yet.".to_string();
        }
        let history = self
            .turns
            .iter()
            .map(|t| format!("[{}] {}: {}", t.timestamp, t.speaker, t.text))
            .collect::<Vec<_>>()
            .join("\n");
        format!("📋 Conversation Summary:\n{history}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speaker_labels() {
        assert_eq!(Speaker::User.as_str(), "user");
        assert_eq!(Speaker::Bot.to_string(), "bot");
    }

    #[test]
    fn session_ids_carry_the_prefix() {
        let session = Session::new("Acme");
        assert!(session.id.starts_with("session-"));
        assert!(session.user_name.is_none());
    }

    #[test]
    fn summary_of_empty_session() {
        assert_eq!(
            Session::new("Acme").summary(),
            "📋 No conversation history yet."
        );
    }

    #[test]
    fn summary_lists_turns_in_order() {
        let mut session = Session::new("Acme");
        session.push(Speaker::User, "hello");
        session.push(Speaker::Bot, "hi!");
        let summary = session.summary();
        assert!(summary.starts_with("📋 Conversation Summary:\n"));
        let user_pos = summary.find("user: hello").unwrap();
        let bot_pos = summary.find("bot: hi!").unwrap();
        assert!(user_pos < bot_pos);
    }

    #[test]
    fn timestamps_use_minute_precision() {
        let ts = now();
        // YYYY-MM-DD HH:MM
        assert_eq!(ts.len(), 16);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }
}
