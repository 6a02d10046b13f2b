//! Order-reference extraction and status lookup.

use rand::seq::SliceRandom;
use regex::Regex;
use std::sync::LazyLock;

/// `ORD`/`ORDER`, an optional hyphen or space, then 6 to 12 digits.
static ORDER_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:ORD|ORDER)[-\s]?(\d{6,12})\b").unwrap());

/// The six possible order statuses. Status lookup is simulated: one of
/// these is chosen uniformly at random per query.
pub const STATUSES: [&str; 6] = [
    "🟢 Confirmed",
    "📦 Packed",
    "🚚 Out for delivery",
    "✅ Delivered",
    "⚠️ Delayed due to weather",
    "🛑 On Hold - Payment Issue",
];

/// Extracts the digit string of the first order reference in `text`.
pub fn extract_id(text: &str) -> Option<&str> {
    ORDER_ID_RE
        .captures(text)
        .map(|caps| caps.get(1).unwrap().as_str())
}

pub fn random_status() -> &'static str {
    STATUSES
        .choose(&mut rand::thread_rng())
        .copied()
        .expect("status table is non-empty")
}
