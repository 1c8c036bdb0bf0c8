//! Fallback parsing for oracle replies that did not use the score tool
//!
//! The oracle contract is best-effort: when the structured tool call is
//! absent, the free-text reply is scanned with an ordered cascade of
//! strategies. Each strategy returns an optional result so the caller
//! can branch on presence deterministically; nothing in this module
//! ever errors.

use regex::Regex;
use serde_json::Value;

/// Extract a numeric score from a free-text oracle reply.
///
/// Strategies, in order of precedence:
/// 1. fenced JSON code blocks carrying a `score` field,
/// 2. phrase patterns ("score of N", "score: N", "score is N",
///    "score = N", "score(N)", `"score": N`),
/// 3. the first 1-3 digit number anywhere after the word "score".
///
/// Returns `None` when no strategy recovers a number.
pub fn extract_score(text: &str) -> Option<u32> {
    if let Some(score) = extract_score_from_json_blocks(text) {
        return Some(score);
    }

    let phrase_patterns = [
        r#"score\s*(?:of|:)\s*(\d+)"#,
        r#"score\s*is\s*(\d+)"#,
        r#"score\s*=\s*(\d+)"#,
        r#""score"\s*:\s*(\d+)"#,
        r#"score\s*\(\s*(\d+)\s*\)"#,
    ];

    for pattern in phrase_patterns {
        let re = Regex::new(&format!("(?i){}", pattern)).unwrap();
        if let Some(caps) = re.captures(text) {
            if let Ok(score) = caps[1].parse() {
                return Some(score);
            }
        }
    }

    // Last resort: a standalone 1-3 digit number near the word "score"
    let fallback = Regex::new(r"(?is)score.*?(\d{1,3})").unwrap();
    fallback
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// Scan ```json code blocks for a `score` field, either at the top
/// level or nested under `parameters` (the shape a tool-call echo
/// takes when the oracle writes it out as prose).
fn extract_score_from_json_blocks(text: &str) -> Option<u32> {
    let block = Regex::new(r"(?is)```json\s*(\{.*?\})\s*```").unwrap();

    for caps in block.captures_iter(text) {
        let Ok(value) = serde_json::from_str::<Value>(&caps[1]) else {
            continue;
        };
        let score = value
            .get("score")
            .or_else(|| value.get("parameters").and_then(|p| p.get("score")));
        if let Some(score) = score.and_then(Value::as_u64) {
            return Some(score as u32);
        }
    }

    None
}
