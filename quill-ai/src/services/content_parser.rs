//! Model output → [`GeneratedContent`]
//!
//! Models asked for JSON still wrap it in prose or code fences, or use
//! typographic quotes. The text goes through a fixed pipeline:
//!
//! 1. Extraction: keep the span from the first `{` to the last `}` inclusive
//! 2. Quote normalization: `“`, `”` and `` ` `` become `"`
//! 3. Newline folding: each `\n` becomes a space
//! 4. Trim
//!
//! The result is decoded as `{"title": string, "content": string}`; extra
//! fields are ignored. Any failure falls back to a synthesized title and the
//! normalized text as content, so parsing never fails.
//!
//! Extraction is greedy: two separate objects in one reply collapse into a
//! single span that does not decode, and the reply takes the fallback path.

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::GeneratedContent;

/// Title prefix used when the model output cannot be decoded
pub const FALLBACK_TITLE_PREFIX: &str = "AI Generated Post: ";

/// Why strict decoding failed
#[derive(Debug, Error)]
pub enum MalformedOutput {
    #[error("no brace-delimited object in model output")]
    NoObject,

    #[error("model output is not a title/content object: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Greedy `{ ... }` span: first `{` through the last `}` after it
pub fn extract_object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Quote normalization, newline folding and trim (steps 2-4)
pub fn normalize(text: &str) -> String {
    text.replace(|c: char| matches!(c, '\u{201C}' | '\u{201D}' | '`'), "\"")
        .replace('\n', " ")
        .trim()
        .to_string()
}

/// Decode model output without a fallback
pub fn parse_strict(raw: &str) -> Result<GeneratedContent, MalformedOutput> {
    let span = extract_object_span(raw).ok_or(MalformedOutput::NoObject)?;
    Ok(serde_json::from_str(&normalize(span))?)
}

/// Decode model output, synthesizing content when decoding fails
pub fn parse_generated(raw: &str, topic: &str) -> GeneratedContent {
    match parse_strict(raw) {
        Ok(content) => {
            debug!(topic, "Model output decoded");
            content
        }
        Err(e) => {
            warn!(topic, reason = %e, "Model output not decodable, using fallback");
            let text = extract_object_span(raw).unwrap_or(raw);
            GeneratedContent {
                title: format!("{FALLBACK_TITLE_PREFIX}{topic}"),
                content: normalize(text),
            }
        }
    }
}
