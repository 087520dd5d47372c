//! Ordered keyword tables driving kind and category classification.
//!
//! Rules live in slices, not maps, so first-match-wins is a property of the
//! table definition rather than of iteration order. All keywords are
//! lower-case and matched by plain substring containment against the
//! lower-cased transcript.

use voxledger_core::TransactionKind;

/// Keywords that classify a transcript as income. Checked before the expense
/// set: any hit wins even when an expense keyword is also present.
pub const INCOME_KEYWORDS: &[&str] = &[
    "earned",
    "received",
    "got paid",
    "income",
    "salary",
    "freelance",
    "bonus",
    "refund",
];

/// Keywords that classify a transcript as an expense
pub const EXPENSE_KEYWORDS: &[&str] = &[
    "spent",
    "paid",
    "bought",
    "purchased",
    "cost",
    "expense",
];

/// Single keyword -> category table shared by both transaction kinds.
///
/// The already-classified kind does not pre-filter this table, so an
/// income-domain keyword can label an expense draft and vice versa. The
/// kind only picks the fallback when nothing here matches.
pub const CATEGORY_RULES: &[(&str, &str)] = &[
    // Expense domains
    ("restaurant", "Food & Dining"),
    ("lunch", "Food & Dining"),
    ("dinner", "Food & Dining"),
    ("breakfast", "Food & Dining"),
    ("coffee", "Food & Dining"),
    ("starbucks", "Food & Dining"),
    ("pizza", "Food & Dining"),
    ("food", "Food & Dining"),
    ("gas", "Transportation"),
    ("fuel", "Transportation"),
    ("uber", "Transportation"),
    ("lyft", "Transportation"),
    ("taxi", "Transportation"),
    ("parking", "Transportation"),
    ("train", "Transportation"),
    ("amazon", "Shopping"),
    ("clothes", "Shopping"),
    ("shoes", "Shopping"),
    ("target", "Shopping"),
    ("walmart", "Shopping"),
    ("shopping", "Shopping"),
    ("movie", "Entertainment"),
    ("netflix", "Entertainment"),
    ("spotify", "Entertainment"),
    ("concert", "Entertainment"),
    ("game", "Entertainment"),
    ("electric", "Bills & Utilities"),
    ("internet", "Bills & Utilities"),
    ("phone bill", "Bills & Utilities"),
    ("rent", "Bills & Utilities"),
    ("utilities", "Bills & Utilities"),
    ("groceries", "Groceries"),
    ("grocery", "Groceries"),
    ("supermarket", "Groceries"),
    // Income domains
    ("salary", "Salary"),
    ("paycheck", "Salary"),
    ("wages", "Salary"),
    ("freelance", "Freelance"),
    ("consulting", "Freelance"),
    ("business", "Business"),
    ("client", "Business"),
    ("investment", "Investments"),
    ("dividend", "Investments"),
    ("stock", "Investments"),
    ("bonus", "Bonus"),
    ("refund", "Refund"),
    ("gift", "Gift"),
];

/// Leading command phrases stripped when synthesizing the description
pub const COMMAND_PREFIXES: &[&str] = &[
    "i spent",
    "i paid",
    "i bought",
    "i purchased",
    "i earned",
    "i received",
    "i got paid",
    "add",
    "record",
    "track",
];

/// Injectable rule tables for the transcript parser.
///
/// `RuleSet::default()` carries the compiled-in vocabulary; tests can
/// substitute smaller tables to pin ordering behavior.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub income_keywords: Vec<String>,
    pub expense_keywords: Vec<String>,
    pub category_rules: Vec<(String, String)>,
    pub command_prefixes: Vec<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            income_keywords: to_owned(INCOME_KEYWORDS),
            expense_keywords: to_owned(EXPENSE_KEYWORDS),
            category_rules: CATEGORY_RULES
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            command_prefixes: to_owned(COMMAND_PREFIXES),
        }
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

impl RuleSet {
    /// Classify income vs expense from the lower-cased transcript.
    /// Income keywords are checked first; no keyword at all means expense.
    pub fn classify_kind(&self, lower: &str) -> TransactionKind {
        self.keyword_kind(lower).unwrap_or(TransactionKind::Expense)
    }

    /// Kind indicated by an explicit keyword, or `None` when neither set
    /// matches. Income keywords win over co-occurring expense keywords.
    pub fn keyword_kind(&self, lower: &str) -> Option<TransactionKind> {
        if self.income_keywords.iter().any(|k| lower.contains(k.as_str())) {
            Some(TransactionKind::Income)
        } else if self.expense_keywords.iter().any(|k| lower.contains(k.as_str())) {
            Some(TransactionKind::Expense)
        } else {
            None
        }
    }

    /// Label of the first table keyword appearing in the lower-cased
    /// transcript, else the kind's fallback category.
    pub fn match_category(&self, lower: &str, kind: TransactionKind) -> String {
        for (keyword, label) in &self.category_rules {
            if lower.contains(keyword.as_str()) {
                return label.clone();
            }
        }
        kind.default_category().to_string()
    }

    /// Strip the first matching command prefix from the start of `original`.
    ///
    /// Prefixes are ASCII, so a case-insensitive prefix check against the
    /// original-cased text keeps byte offsets aligned with the lower-cased
    /// form the match is specified against.
    pub fn strip_command_prefix<'a>(&self, original: &'a str) -> &'a str {
        for prefix in &self.command_prefixes {
            if let Some(head) = original.get(..prefix.len()) {
                if head.eq_ignore_ascii_case(prefix) {
                    return &original[prefix.len()..];
                }
            }
        }
        original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_wins_over_expense() {
        let rules = RuleSet::default();
        let kind = rules.classify_kind("i spent my freelance payment today");
        assert_eq!(kind, TransactionKind::Income);
    }

    #[test]
    fn test_keyword_kind_consults_both_sets() {
        let rules = RuleSet::default();
        // An expense keyword is an explicit classification, distinct from
        // the no-keyword default even though both end up as expense.
        assert_eq!(
            rules.keyword_kind("paid the electric bill"),
            Some(TransactionKind::Expense)
        );
        assert_eq!(
            rules.keyword_kind("earned a bonus"),
            Some(TransactionKind::Income)
        );
        assert_eq!(rules.keyword_kind("lunch with friends"), None);
    }

    #[test]
    fn test_injected_expense_keywords_are_consulted() {
        let rules = RuleSet {
            expense_keywords: vec!["splurged".to_string()],
            ..RuleSet::default()
        };
        assert_eq!(
            rules.keyword_kind("splurged on shoes"),
            Some(TransactionKind::Expense)
        );
        // The stock keyword "spent" is gone from the injected set
        assert_eq!(rules.keyword_kind("spent a while reading"), None);
    }

    #[test]
    fn test_no_keyword_defaults_to_expense() {
        let rules = RuleSet::default();
        let kind = rules.classify_kind("20 dollars for gas");
        assert_eq!(kind, TransactionKind::Expense);
    }

    #[test]
    fn test_category_first_match_in_table_order() {
        let rules = RuleSet::default();
        // "lunch" precedes "coffee" in the table
        let label = rules.match_category("coffee after lunch", TransactionKind::Expense);
        assert_eq!(label, "Food & Dining");
    }

    #[test]
    fn test_category_fallback_respects_kind() {
        let rules = RuleSet::default();
        assert_eq!(
            rules.match_category("no hints here", TransactionKind::Income),
            "Other Income"
        );
        assert_eq!(
            rules.match_category("no hints here", TransactionKind::Expense),
            "Other"
        );
    }

    #[test]
    fn test_category_table_is_not_kind_scoped() {
        let rules = RuleSet::default();
        // Income-domain keyword labels an expense-classified transcript
        let label = rules.match_category("bought a gift for mom", TransactionKind::Expense);
        assert_eq!(label, "Gift");
        // Expense-domain keyword labels an income-classified transcript
        let label = rules.match_category("earned 200 driving for uber", TransactionKind::Income);
        assert_eq!(label, "Transportation");
    }

    #[test]
    fn test_substring_containment_not_word_boundaries() {
        let rules = RuleSet::default();
        // "gas" matches inside "las vegas"; inherited heuristic limitation
        let label = rules.match_category("trip to las vegas", TransactionKind::Expense);
        assert_eq!(label, "Transportation");
    }

    #[test]
    fn test_strip_command_prefix_keeps_original_casing() {
        let rules = RuleSet::default();
        assert_eq!(
            rules.strip_command_prefix("I spent $15 on Lunch"),
            " $15 on Lunch"
        );
        assert_eq!(rules.strip_command_prefix("no prefix here"), "no prefix here");
    }

    #[test]
    fn test_strip_command_prefix_is_literal_not_word_aware() {
        let rules = RuleSet::default();
        // "add" is a plain string prefix of "added"
        assert_eq!(rules.strip_command_prefix("added 20 for parking"), "ed 20 for parking");
    }
}
