//! Pattern-based intent detection.
//!
//! A fixed, ordered table maps each intent to a case-insensitive,
//! word-boundary-anchored regex. The first rule whose pattern matches
//! anywhere in the raw input wins, so table order is the priority policy
//! among overlapping patterns ("help" beats "refund" in "help with a
//! refund" because it comes first). Keep the table order stable.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Coarse category of a user request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Greet,
    Bye,
    Thanks,
    Help,
    Handoff,
    Refund,
    Shipping,
    Billing,
    Contact,
    Hours,
    Faq,
    Time,
    Summary,
    Clear,
    About,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Greet => "greet",
            Intent::Bye => "bye",
            Intent::Thanks => "thanks",
            Intent::Help => "help",
            Intent::Handoff => "handoff",
            Intent::Refund => "refund",
            Intent::Shipping => "shipping",
            Intent::Billing => "billing",
            Intent::Contact => "contact",
            Intent::Hours => "hours",
            Intent::Faq => "faq",
            Intent::Time => "time",
            Intent::Summary => "summary",
            Intent::Clear => "clear",
            Intent::About => "about",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Farewell alternation, shared between the rule table and
/// [`is_farewell`] so the two session-ending checks cannot drift apart.
const BYE_PATTERN: &str = r"\b(bye|goodbye|see you|exit|quit)\b";

/// Ordered rule table. First match wins; do not reorder.
static INTENT_RULES: LazyLock<Vec<(Intent, Regex)>> = LazyLock::new(|| {
    [
        (Intent::Greet, r"\b(hi|hello|hey|namaste)\b"),
        (Intent::Bye, BYE_PATTERN),
        (Intent::Thanks, r"\b(thanks|thank you|ty)\b"),
        (Intent::Help, r"\b(help|options|menu|what can you do)\b"),
        (Intent::Handoff, r"\b(agent|human|representative)\b"),
        (Intent::Refund, r"\b(refund|return|replace)\b"),
        (Intent::Shipping, r"\b(ship|shipping|delivery|arrive|track)\b"),
        (Intent::Billing, r"\b(bill|payment|charged|invoice)\b"),
        (Intent::Contact, r"\b(contact|email|phone|support)\b"),
        (Intent::Hours, r"\b(hour|timing|open|closing)\b"),
        (Intent::Faq, r"\b(faq|questions|options)\b"),
        (Intent::Time, r"\b(time|date|today|now)\b"),
        (Intent::Summary, r"\b(summary|log|history)\b"),
        (Intent::Clear, r"\b(clear logs|reset logs)\b"),
        (Intent::About, r"\b(about|who are you|company|bot)\b"),
    ]
    .into_iter()
    .map(|(intent, pattern)| {
        let re = Regex::new(&format!("(?i){pattern}")).unwrap();
        (intent, re)
    })
    .collect()
});

/// Returns the first intent whose pattern matches anywhere in the raw
/// (non-normalized) input, or `None` if no rule matches.
pub fn detect(text: &str) -> Option<Intent> {
    INTENT_RULES
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(intent, _)| *intent)
}

/// Whether the input contains a farewell phrase. The dispatcher and the
/// chat loop both treat this as a session-ending signal, ahead of every
/// other branch except input validation.
pub fn is_farewell(text: &str) -> bool {
    static BYE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(&format!("(?i){BYE_PATTERN}")).unwrap());
    BYE_RE.is_match(text)
}
