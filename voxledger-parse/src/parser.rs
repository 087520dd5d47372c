//! Transcript-to-draft parsing pipeline.
//!
//! Stages run in a fixed order over the lower-cased transcript: amount
//! extraction, kind classification, category classification, description
//! synthesis, confidence scoring. Every stage has a total fallback, so
//! parsing never fails for well-formed string input. The reference date is
//! injected by the caller; nothing here reads the system clock.

use anyhow::Result;
use chrono::NaiveDate;
use voxledger_core::{TransactionDraft, TransactionKind, confidence_for_amount};

use crate::amount::AmountMatcher;
use crate::rules::RuleSet;

/// Deterministic voice-transcript parser.
///
/// Stateless after construction; safe to share across threads and call
/// concurrently.
pub struct TranscriptParser {
    amounts: AmountMatcher,
    rules: RuleSet,
}

impl TranscriptParser {
    /// Build a parser with the compiled-in rule tables.
    pub fn new() -> Result<Self> {
        Self::with_rules(RuleSet::default())
    }

    /// Build a parser with caller-supplied rule tables.
    pub fn with_rules(rules: RuleSet) -> Result<Self> {
        Ok(Self {
            amounts: AmountMatcher::new()?,
            rules,
        })
    }

    /// Parse one transcript into a fully populated draft dated `today`.
    ///
    /// Pure and idempotent: the same `(text, today)` pair always produces
    /// the same draft.
    pub fn parse(&self, text: &str, today: NaiveDate) -> TransactionDraft {
        let original = text.trim();
        let lower = original.to_lowercase();

        let amount = self.amounts.extract(&lower);
        let kind = self.rules.classify_kind(&lower);
        let category = self.rules.match_category(&lower, kind);
        let description = self.synthesize_description(original, kind);

        TransactionDraft {
            amount,
            category,
            description,
            kind,
            date: today,
            confidence: confidence_for_amount(amount),
        }
    }

    /// Strip a leading command phrase, re-trim, capitalize the first
    /// character, and fall back to the kind's default when nothing is left.
    fn synthesize_description(&self, original: &str, kind: TransactionKind) -> String {
        let stripped = self.rules.strip_command_prefix(original).trim();
        if stripped.is_empty() {
            kind.default_description().to_string()
        } else {
            capitalize_first(stripped)
        }
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
