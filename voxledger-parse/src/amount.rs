//! First-match extraction of a dollar amount from transcript text.
//!
//! Patterns are tried in priority order: explicit currency markers before
//! bare numbers. Only the first pattern that matches anywhere in the text
//! is used; later patterns are never consulted once one has hit, so a bare
//! number appearing before a $-marked number still loses to the $ pattern.

use anyhow::Result;
use regex::Regex;

/// The four amount patterns, compiled once in priority order
pub struct AmountMatcher {
    patterns: Vec<Regex>,
}

impl AmountMatcher {
    pub fn new() -> Result<Self> {
        let patterns = vec![
            // $-prefixed: $15, $15.50
            Regex::new(r"\$(?P<amount>\d+(?:\.\d{2})?)")?,
            // unit word: 20 dollars, 1 dollar
            Regex::new(r"(?P<amount>\d+(?:\.\d{2})?)\s*dollars?")?,
            // slang unit: 5 bucks
            Regex::new(r"(?P<amount>\d+(?:\.\d{2})?)\s*bucks?")?,
            // bare number fallback
            Regex::new(r"(?P<amount>\d+(?:\.\d{2})?)")?,
        ];
        Ok(Self { patterns })
    }

    /// Extract the amount from the lower-cased transcript.
    ///
    /// Returns the captured group of the first occurrence of the first
    /// matching pattern, or 0.0 when no pattern matches at all.
    pub fn extract(&self, lower: &str) -> f64 {
        for re in &self.patterns {
            if let Some(caps) = re.captures(lower) {
                return caps["amount"].parse().unwrap_or(0.0);
            }
        }
        0.0
    }
}
