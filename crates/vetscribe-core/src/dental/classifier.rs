//! Keyword classifier for free-text dental findings.
//!
//! Rules are checked top to bottom and the first match wins, so a finding
//! such as "tartar and gingivitis" is gingivitis regardless of word order.

use crate::models::ConditionCategory;

/// Substring keywords that put a finding into a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub category: ConditionCategory,
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    /// `text` must already be lowercase.
    fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword))
    }
}

/// Keyword rules in priority order.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: ConditionCategory::Gingivitis,
        keywords: &["gingivitis", "inflamed", "red gums"],
    },
    KeywordRule {
        category: ConditionCategory::Calculus,
        keywords: &["calculus", "tartar", "scale"],
    },
    KeywordRule {
        category: ConditionCategory::Periodontal,
        keywords: &["pocket", "periodontal"],
    },
    KeywordRule {
        category: ConditionCategory::Fracture,
        keywords: &["fracture", "broken", "chipped"],
    },
    KeywordRule {
        category: ConditionCategory::Missing,
        keywords: &["missing", "extracted", "pulled"],
    },
];

/// Classify a finding. Total: anything unmatched is `Other`.
pub fn classify(finding: &str) -> ConditionCategory {
    let lower = finding.to_lowercase();

    KEYWORD_RULES
        .iter()
        .find(|rule| rule.matches(&lower))
        .map(|rule| rule.category)
        .unwrap_or_else(|| {
            // Only the bare word counts as normal; "normal occlusion" is other.
            if lower == "normal" {
                ConditionCategory::Normal
            } else {
                ConditionCategory::Other
            }
        })
}
