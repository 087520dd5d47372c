//! voxledger-parse: deterministic voice-transcript-to-transaction parsing
//! and the validation boundary in front of it.

pub mod amount;
pub mod boundary;
pub mod parser;
pub mod rules;

pub use amount::AmountMatcher;
pub use boundary::{InvalidInput, draft_from_transcript, draft_to_payload};
pub use parser::TranscriptParser;
pub use rules::RuleSet;
