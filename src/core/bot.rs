//! The response dispatcher.
//!
//! [`Chatbot::respond`] evaluates one turn through a strict branch order:
//! input validation, farewell, order-ID lookup, intent dispatch, FAQ
//! fallback, generic fallback. The user turn is logged before any of that,
//! so even rejected input leaves a transcript row, and the transcript order
//! matches the conversational order (the caller logs the bot reply after
//! dispatch returns).

use std::io;
use std::path::PathBuf;

use crate::core::faq;
use crate::core::intent::{self, Intent};
use crate::core::normalize::normalize;
use crate::core::order;
use crate::core::session::{now, Session, Speaker};
use crate::utils::logging::TranscriptLog;

/// Supplies a user name when the greet branch needs one. The interactive
/// surface backs this with a terminal prompt; tests script it. Keeping it
/// behind a trait keeps `respond` free of any direct terminal access.
pub trait NamePrompt {
    fn ask_name(&mut self) -> io::Result<String>;
}

/// One dispatched reply. `end_session` tells the caller to stop the
/// read loop after printing and logging the reply.
#[derive(Debug)]
pub struct Reply {
    pub text: String,
    pub end_session: bool,
}

impl Reply {
    fn message(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            end_session: false,
        }
    }

    fn farewell(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            end_session: true,
        }
    }
}

pub struct Chatbot {
    session: Session,
    transcript: TranscriptLog,
}

impl Chatbot {
    pub fn new(company: impl Into<String>, transcript_path: impl Into<PathBuf>) -> Self {
        Self {
            session: Session::new(company),
            transcript: TranscriptLog::new(transcript_path),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Records a turn in the in-memory session and the persistent store.
    /// The chat loop calls this for bot replies; `respond` calls it for
    /// the user turn before dispatching.
    pub fn log(&mut self, speaker: Speaker, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.session.push(speaker, text);
        self.transcript.append(speaker, text)
    }

    /// Dispatches one user turn and returns the reply.
    pub fn respond(
        &mut self,
        input: &str,
        names: &mut dyn NamePrompt,
    ) -> Result<Reply, Box<dyn std::error::Error>> {
        // Log first: even empty input leaves a transcript row.
        self.log(Speaker::User, input)?;

        if input.trim().is_empty() {
            return Ok(Reply::message("⚠️ Please type something."));
        }

        // Farewell outranks everything else, including order lookups.
        if intent::is_farewell(input) {
            return Ok(Reply::farewell("👋 Thanks for chatting! Have a wonderful day!"));
        }

        if let Some(id) = order::extract_id(input) {
            let status = order::random_status();
            return Ok(Reply::message(format!("📦 Order {id}: Status → {status}")));
        }

        let text = match intent::detect(input) {
            Some(Intent::Greet) => self.greet(names)?,
            Some(Intent::Bye) => {
                return Ok(Reply::farewell("👋 Thanks for chatting! Have a wonderful day!"))
            }
            Some(Intent::Help) => {
                "💡 You can ask about: shipping, refunds, billing, hours, contact info, or type `faq`."
                    .to_string()
            }
            Some(Intent::Thanks) => "🙏 You’re most welcome!".to_string(),
            Some(Intent::Handoff) => "👨‍💼 Connecting you to a human agent shortly...".to_string(),
            Some(Intent::Refund) => {
                "↩️ Please share your Order ID for processing your return.".to_string()
            }
            Some(Intent::Shipping) => {
                "🚚 Please share your Order ID so I can check shipping status.".to_string()
            }
            Some(Intent::Billing) => {
                "💳 Let’s check billing. Can you provide your Order ID?".to_string()
            }
            Some(Intent::Contact) => faq::answer_for("how can i contact support")
                .unwrap_or_default()
                .to_string(),
            Some(Intent::Hours) => faq::answer_for("what are your hours")
                .unwrap_or_default()
                .to_string(),
            Some(Intent::Faq) => {
                let list = faq::entries()
                    .iter()
                    .map(|e| format!("• {}", e.question))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("📖 Here are common questions:\n{list}")
            }
            Some(Intent::Time) => format!("⏰ Current date & time: {}", now()),
            Some(Intent::Summary) => self.session.summary(),
            Some(Intent::Clear) => {
                // Truncates the store only; the in-memory turns survive,
                // so a later summary still shows the full session.
                self.transcript.clear()?;
                "🗑️ Logs cleared successfully.".to_string()
            }
            Some(Intent::About) => format!(
                "🤖 I’m {} Bot! I help with orders, refunds, shipping & more.",
                self.session.company
            ),
            None => match faq::closest_match(&normalize(input)) {
                Some(entry) => entry.answer.to_string(),
                None => "🤔 I’m not sure. Try rephrasing or type `help`.".to_string(),
            },
        };

        Ok(Reply::message(text))
    }

    fn greet(&mut self, names: &mut dyn NamePrompt) -> Result<String, Box<dyn std::error::Error>> {
        if self.session.user_name.is_none() {
            let name = names.ask_name()?.trim().to_string();
            self.session.user_name = Some(name.clone());
            return Ok(format!(
                "👋 Hello {name}, welcome to {} support!",
                self.session.company
            ));
        }
        let name = match self.session.user_name.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => "friend",
        };
        Ok(format!("🤖 Hello {name}! How can I help today?"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct ScriptedNames {
        names: Vec<&'static str>,
        asked: usize,
    }

    impl ScriptedNames {
        fn new(names: Vec<&'static str>) -> Self {
            Self { names, asked: 0 }
        }
    }

    impl NamePrompt for ScriptedNames {
        fn ask_name(&mut self) -> io::Result<String> {
            let name = self
                .names
                .get(self.asked)
                .copied()
                .expect("name prompt fired more often than scripted");
            self.asked += 1;
            Ok(name.to_string())
        }
    }

    /// Panics when asked, for turns that must never prompt.
    struct NoPrompt;

    impl NamePrompt for NoPrompt {
        fn ask_name(&mut self) -> io::Result<String> {
            panic!("unexpected name prompt");
        }
    }

    fn test_bot() -> (Chatbot, TempDir) {
        let dir = TempDir::new().unwrap();
        let bot = Chatbot::new("Acme", dir.path().join("chat_logs.csv"));
        (bot, dir)
    }

    #[test]
    fn farewell_dominates_other_intents() {
        let (mut bot, _dir) = test_bot();
        for input in ["bye", "thanks, goodbye!", "i want a refund but first quit"] {
            let reply = bot.respond(input, &mut NoPrompt).unwrap();
            assert_eq!(reply.text, "👋 Thanks for chatting! Have a wonderful day!");
            assert!(reply.end_session);
        }
    }

    #[test]
    fn order_id_bypasses_intent_dispatch() {
        let (mut bot, _dir) = test_bot();
        let reply = bot.respond("track my order ORD123456", &mut NoPrompt).unwrap();
        assert!(reply.text.starts_with("📦 Order 123456: Status → "));
        let status = reply.text.rsplit(" → ").next().unwrap();
        assert!(order::STATUSES.contains(&status));
        assert!(!reply.end_session);
    }

    #[test]
    fn farewell_outranks_order_id() {
        let (mut bot, _dir) = test_bot();
        let reply = bot.respond("bye, my order was ORD123456", &mut NoPrompt).unwrap();
        assert!(reply.end_session);
    }

    #[test]
    fn empty_input_warns_but_is_still_logged() {
        let (mut bot, _dir) = test_bot();
        let reply = bot.respond("   ", &mut NoPrompt).unwrap();
        assert_eq!(reply.text, "⚠️ Please type something.");
        assert_eq!(bot.session.turns.len(), 1);

        let contents = fs::read_to_string(bot.transcript.path()).unwrap();
        assert_eq!(contents.lines().count(), 2); // header + the empty turn
    }

    #[test]
    fn first_greeting_prompts_for_a_name_once() {
        let (mut bot, _dir) = test_bot();
        let mut names = ScriptedNames::new(vec!["Priya"]);

        let reply = bot.respond("hello", &mut names).unwrap();
        assert_eq!(reply.text, "👋 Hello Priya, welcome to Acme support!");

        let reply = bot.respond("hi again", &mut names).unwrap();
        assert_eq!(reply.text, "🤖 Hello Priya! How can I help today?");
        assert_eq!(names.asked, 1);
    }

    #[test]
    fn blank_name_falls_back_to_friend() {
        let (mut bot, _dir) = test_bot();
        let mut names = ScriptedNames::new(vec![""]);
        bot.respond("hello", &mut names).unwrap();
        let reply = bot.respond("hi", &mut names).unwrap();
        assert_eq!(reply.text, "🤖 Hello friend! How can I help today?");
    }

    #[test]
    fn hours_question_returns_the_exact_faq_answer() {
        let (mut bot, _dir) = test_bot();
        let reply = bot.respond("What are your hours?", &mut NoPrompt).unwrap();
        assert_eq!(reply.text, "🕒 We’re open Mon–Sat 9am–6pm and Sun 10am–4pm.");
    }

    #[test]
    fn paraphrased_faq_question_falls_back_to_its_answer() {
        let (mut bot, _dir) = test_bot();
        let reply = bot.respond("what r ur hours", &mut NoPrompt).unwrap();
        assert_eq!(reply.text, "🕒 We’re open Mon–Sat 9am–6pm and Sun 10am–4pm.");
    }

    #[test]
    fn unrelated_input_gets_the_generic_fallback() {
        let (mut bot, _dir) = test_bot();
        let reply = bot.respond("qwerty asdf zxcv", &mut NoPrompt).unwrap();
        assert_eq!(reply.text, "🤔 I’m not sure. Try rephrasing or type `help`.");
    }

    #[test]
    fn clear_empties_the_store_but_not_the_session() {
        let (mut bot, _dir) = test_bot();
        bot.respond("i was charged twice", &mut NoPrompt).unwrap();
        bot.log(Speaker::Bot, "💳 Let’s check billing. Can you provide your Order ID?")
            .unwrap();

        let reply = bot.respond("clear logs", &mut NoPrompt).unwrap();
        assert_eq!(reply.text, "🗑️ Logs cleared successfully.");
        assert_eq!(fs::read_to_string(bot.transcript.path()).unwrap(), "");

        // The in-memory history still covers the whole session.
        let reply = bot.respond("show me the summary", &mut NoPrompt).unwrap();
        assert!(reply.text.contains("i was charged twice"));
        assert!(reply.text.contains("clear logs"));
    }

    #[test]
    fn intent_replies_match_the_canned_table() {
        let (mut bot, _dir) = test_bot();
        let cases = [
            (
                "what can you do",
                "💡 You can ask about: shipping, refunds, billing, hours, contact info, or type `faq`.",
            ),
            ("thank you", "🙏 You’re most welcome!"),
            ("get me a human", "👨‍💼 Connecting you to a human agent shortly..."),
            ("i want a refund", "↩️ Please share your Order ID for processing your return."),
            (
                "when will it arrive",
                "🚚 Please share your Order ID so I can check shipping status.",
            ),
            ("i was charged twice", "💳 Let’s check billing. Can you provide your Order ID?"),
            ("how do i contact you", "☎️ Email: support@example.com | Phone: +1-555-0100"),
        ];
        for (input, expected) in cases {
            let reply = bot.respond(input, &mut NoPrompt).unwrap();
            assert_eq!(reply.text, expected, "input: {input}");
        }
    }

    #[test]
    fn about_uses_the_company_name() {
        let dir = TempDir::new().unwrap();
        let mut bot = Chatbot::new("Globex", dir.path().join("log.csv"));
        let reply = bot.respond("tell me about the bot", &mut NoPrompt).unwrap();
        assert_eq!(
            reply.text,
            "🤖 I’m Globex Bot! I help with orders, refunds, shipping & more."
        );
    }

    #[test]
    fn faq_intent_lists_every_question() {
        let (mut bot, _dir) = test_bot();
        let reply = bot.respond("show the faq", &mut NoPrompt).unwrap();
        assert!(reply.text.starts_with("📖 Here are common questions:"));
        for entry in faq::entries() {
            assert!(reply.text.contains(entry.question));
        }
    }

    #[test]
    fn time_intent_reports_a_formatted_timestamp() {
        let (mut bot, _dir) = test_bot();
        let reply = bot.respond("what time is it", &mut NoPrompt).unwrap();
        assert!(reply.text.starts_with("⏰ Current date & time: "));
        let ts = reply.text.trim_start_matches("⏰ Current date & time: ");
        assert_eq!(ts.len(), 16);
    }

    #[test]
    fn user_turns_land_in_the_store_before_the_reply_is_computed() {
        let (mut bot, _dir) = test_bot();
        bot.respond("i want a refund", &mut NoPrompt).unwrap();
        let contents = fs::read_to_string(bot.transcript.path()).unwrap();
        assert!(contents.lines().nth(1).unwrap().contains("user"));
    }
}
