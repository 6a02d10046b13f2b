//! The canned FAQ table and its fuzzy fallback matcher.
//!
//! Each entry keeps two forms of its question: the display form shown when
//! listing the FAQ, and a normalized key used only for similarity
//! comparison. The table is fixed at startup and read-only afterwards.

use std::sync::LazyLock;

use crate::core::normalize::normalize;
use crate::core::similarity::ratio;

/// Minimum similarity ratio for a fallback match to be accepted.
pub const MATCH_CUTOFF: f64 = 0.6;

pub struct FaqEntry {
    /// Display form, used for listing and exact lookups.
    pub question: &'static str,
    /// Normalized form, used only for similarity comparison.
    pub normalized: String,
    pub answer: &'static str,
}

static FAQ: LazyLock<Vec<FaqEntry>> = LazyLock::new(|| {
    [
        (
            "what are your hours",
            "🕒 We’re open Mon–Sat 9am–6pm and Sun 10am–4pm.",
        ),
        (
            "how do i track my order",
            "📦 Track it in your account → Orders → Track. Or share your Order ID here!",
        ),
        (
            "what is your return policy",
            "↩️ 30-day hassle-free returns. Refunds go back to your original payment method.",
        ),
        (
            "how long does shipping take",
            "🚚 Standard: 3–6 business days | Express: 1–2 business days.",
        ),
        (
            "how can i contact support",
            "☎️ Email: support@example.com | Phone: +1-555-0100",
        ),
        (
            "do you ship internationally",
            "🌍 Yes! Duties/taxes depend on the destination.",
        ),
        (
            "how do i cancel my order",
            "❌ If it hasn’t shipped, I can request cancellation. Share your Order ID.",
        ),
        (
            "do you offer warranty",
            "🛡️ Most items have a 1-year manufacturer warranty. Keep your invoice.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| FaqEntry {
        question,
        normalized: normalize(question),
        answer,
    })
    .collect()
});

pub fn entries() -> &'static [FaqEntry] {
    &FAQ
}

/// Exact lookup by display question. Used by the intents that reuse a
/// canned FAQ answer.
pub fn answer_for(question: &str) -> Option<&'static str> {
    FAQ.iter()
        .find(|e| e.question == question)
        .map(|e| e.answer)
}

/// Returns the single closest entry whose normalized key scores at least
/// [`MATCH_CUTOFF`] against `normalized_text`, or `None`.
///
/// The ratio is order-sensitive near the cutoff, so the key is always the
/// first argument; swapping the operands changes which borderline
/// phrasings are accepted. Ties keep the earlier table entry, so the
/// result is deterministic.
pub fn closest_match(normalized_text: &str) -> Option<&'static FaqEntry> {
    let mut best: Option<(&FaqEntry, f64)> = None;
    for entry in FAQ.iter() {
        let score = ratio(&entry.normalized, normalized_text);
        if score >= MATCH_CUTOFF && best.map_or(true, |(_, s)| score > s) {
            best = Some((entry, score));
        }
    }
    best.map(|(entry, _)| entry)
}
