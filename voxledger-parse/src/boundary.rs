//! Caller-facing edge of the parser: input validation and the response
//! payload shape. The parser itself never sees empty input; this layer
//! rejects it first.

use chrono::NaiveDate;
use serde_json::{Value, json};
use voxledger_core::TransactionDraft;

use crate::parser::TranscriptParser;

/// Rejection raised before the parser is invoked
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("transcript text is required and must be non-empty")]
    EmptyTranscript,
}

/// Validate a transcript and parse it into a draft dated `today`.
pub fn draft_from_transcript(
    parser: &TranscriptParser,
    text: &str,
    today: NaiveDate,
) -> Result<TransactionDraft, InvalidInput> {
    if text.trim().is_empty() {
        return Err(InvalidInput::EmptyTranscript);
    }

    let draft = parser.parse(text, today);
    tracing::debug!(
        amount = draft.amount,
        kind = ?draft.kind,
        category = %draft.category,
        confidence = draft.confidence,
        "parsed voice transcript"
    );
    Ok(draft)
}

/// Serialize a draft as the response payload: `amount` (number),
/// `category` (string), `description` (string), `type` (string enum),
/// `date` (YYYY-MM-DD string), `confidence` (number in [0,1]).
pub fn draft_to_payload(draft: &TransactionDraft) -> Value {
    json!({
        "amount": draft.amount,
        "category": draft.category,
        "description": draft.description,
        "type": draft.kind,
        "date": draft.date.format("%Y-%m-%d").to_string(),
        "confidence": draft.confidence,
    })
}
