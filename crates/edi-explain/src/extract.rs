//! Free-text segment candidate extraction
//!
//! Best-effort pattern matching over an arbitrary user utterance to derive
//! a single candidate segment key. This is deliberately permissive: a short
//! upper-case word like `TODAY` is accepted as a candidate and left to the
//! downstream "not found in table" response, rather than second-guessed
//! here.

use regex::Regex;
use std::sync::LazyLock;

/// Leading filler phrases stripped before matching, checked in order;
/// only the first match is stripped, and only once.
const FILLER_PHRASES: [&str; 4] = ["EXPLAIN ME ABOUT", "WHAT IS", "TELL ME ABOUT", "EXPLAIN"];

/// Short words that pass the shape checks but never name a segment.
const STOP_WORDS: [&str; 8] = ["IS", "A", "THE", "AN", "FOR", "EDI", "ME", "ABOUT"];

const SEGMENT_SUFFIX: &str = " SEGMENT";

/// Tag of 2-6 alphanumerics, `+`, qualifier of 1-3 alphanumerics.
static TAG_WITH_QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z0-9]{2,6}\+[A-Z0-9]{1,3}").expect("qualifier pattern compiles")
});

/// Heuristically derive a candidate segment key from a user utterance.
///
/// Filler phrases and a trailing "segment" are stripped case-insensitively,
/// then a `TAG+QUALIFIER` shape anywhere in the text wins; otherwise the
/// first short token the user typed in upper-case is taken. Returns `None`
/// when nothing qualifies, which callers surface as a request for a more
/// specific query.
///
/// The upper-case test is applied to the token as typed: `"What is UNH?"`
/// yields `UNH`, while `"hello there"` yields nothing.
pub fn extract_segment(input: &str) -> Option<String> {
    let mut rest = input.trim();

    for phrase in FILLER_PHRASES {
        if let Some(head) = rest.get(..phrase.len()) {
            if head.eq_ignore_ascii_case(phrase) {
                rest = rest[phrase.len()..].trim_start();
                break;
            }
        }
    }

    if let Some(head_len) = rest.len().checked_sub(SEGMENT_SUFFIX.len()) {
        if rest
            .get(head_len..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(SEGMENT_SUFFIX))
        {
            rest = rest[..head_len].trim_end();
        }
    }

    // A qualified key anywhere in the text takes priority over single tokens.
    let upper = rest.to_ascii_uppercase();
    if let Some(found) = TAG_WITH_QUALIFIER.find(&upper) {
        return Some(found.as_str().to_string());
    }

    for token in rest.split_whitespace() {
        let token = token.trim_matches(|c: char| !c.is_ascii_alphanumeric());
        if token.len() < 2 || token.len() > 6 {
            continue;
        }
        if !token.chars().any(|c| c.is_ascii_alphabetic()) {
            continue;
        }
        if token.chars().any(|c| c.is_ascii_lowercase()) {
            continue;
        }
        if STOP_WORDS.contains(&token) {
            continue;
        }
        return Some(token.to_string());
    }

    None
}
