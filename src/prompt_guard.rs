//! Best-effort rejection of video prompts carrying obvious injection phrases.
//!
//! The list is deliberately short: creative prompts such as "don't forget the
//! key message" or "the hero loses the key" must still pass.

use tracing::info;

/// Matched case-insensitively as substrings.
const BLOCKLIST: [&str; 10] = [
    "forget instructions",
    "ignore previous instructions",
    "ignore all previous",
    "disregard instructions",
    "expose database",
    "database key",
    "reveal api key",
    "reveal database",
    "expose api key",
    "ignore your instructions",
];

/// The first blocklisted phrase found in `prompt`, if any.
pub fn blocked_phrase(prompt: &str) -> Option<&'static str> {
    if prompt.trim().is_empty() {
        return None;
    }
    let lower = prompt.to_lowercase();
    let matched = BLOCKLIST
        .iter()
        .copied()
        .find(|phrase| lower.contains(phrase))?;
    info!(matched_phrase = matched, "prompt guard blocked prompt");
    Some(matched)
}

pub fn is_prompt_blocked(prompt: &str) -> bool {
    blocked_phrase(prompt).is_some()
}
