//! Recommendation rules derived from a condition tally.

use crate::models::{ConditionCategory, ConditionTally, Recommendation, Urgency};

struct RecommendationRule {
    category: ConditionCategory,
    label: &'static str,
    description: &'static str,
    urgency: Urgency,
}

/// Every rule fires independently; output follows this order.
const RECOMMENDATION_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        category: ConditionCategory::Gingivitis,
        label: "Gingivitis Management",
        description: "Professional cleaning and improved home care recommended",
        urgency: Urgency::Medium,
    },
    RecommendationRule {
        category: ConditionCategory::Calculus,
        label: "Calculus Removal",
        description: "Professional scaling required",
        urgency: Urgency::Medium,
    },
    RecommendationRule {
        category: ConditionCategory::Periodontal,
        label: "Periodontal Therapy",
        description: "May require root planing or surgical treatment",
        urgency: Urgency::High,
    },
    RecommendationRule {
        category: ConditionCategory::Fracture,
        label: "Fracture Repair",
        description: "Evaluate for extraction or restoration",
        urgency: Urgency::High,
    },
];

pub const NO_PATHOLOGY_LABEL: &str = "Good Oral Health";
const NO_PATHOLOGY_DESCRIPTION: &str =
    "No significant dental pathology detected - Continue current home care routine";

/// Build recommendations for a tally.
///
/// `missing`, `normal` and `other` never produce a recommendation. When no
/// rule fires the result is the single "Good Oral Health" record.
pub fn build_recommendations(tally: &ConditionTally) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = RECOMMENDATION_RULES
        .iter()
        .filter_map(|rule| {
            let count = tally.get(rule.category);
            (count > 0).then(|| Recommendation {
                label: rule.label.to_string(),
                count,
                description: rule.description.to_string(),
                urgency: rule.urgency,
            })
        })
        .collect();

    if recommendations.is_empty() {
        recommendations.push(Recommendation {
            label: NO_PATHOLOGY_LABEL.to_string(),
            count: 0,
            description: NO_PATHOLOGY_DESCRIPTION.to_string(),
            urgency: Urgency::Low,
        });
    }

    recommendations
}
