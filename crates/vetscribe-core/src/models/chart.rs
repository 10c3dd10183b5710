//! Dental chart models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::condition::{ConditionCategory, ConditionTally};
use super::species::Quadrant;
use crate::dental::classify;

/// Tooth identifier (or `"general"`) → free-text finding.
///
/// Keys are not checked against the species layout.
pub type FindingsMap = BTreeMap<String, String>;

/// Key used by extractors for findings not tied to a specific tooth.
pub const GENERAL_FINDING_KEY: &str = "general";

/// Tooth identifiers for one species, grouped by quadrant.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ToothLayout {
    pub upper_right: &'static [&'static str],
    pub upper_left: &'static [&'static str],
    pub lower_left: &'static [&'static str],
    pub lower_right: &'static [&'static str],
}

impl ToothLayout {
    /// Teeth in a quadrant, in Triadan order.
    pub fn quadrant(&self, quadrant: Quadrant) -> &'static [&'static str] {
        match quadrant {
            Quadrant::UpperRight => self.upper_right,
            Quadrant::UpperLeft => self.upper_left,
            Quadrant::LowerLeft => self.lower_left,
            Quadrant::LowerRight => self.lower_right,
        }
    }

    /// All teeth, quadrant by quadrant.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        Quadrant::ALL
            .into_iter()
            .flat_map(move |q| self.quadrant(q).iter().copied())
    }

    pub fn total_teeth(&self) -> u32 {
        Quadrant::ALL
            .iter()
            .map(|q| self.quadrant(*q).len() as u32)
            .sum()
    }

    pub fn contains(&self, tooth_id: &str) -> bool {
        self.quadrant_of(tooth_id).is_some()
    }

    /// Quadrant holding this tooth in this layout.
    pub fn quadrant_of(&self, tooth_id: &str) -> Option<Quadrant> {
        Quadrant::ALL
            .into_iter()
            .find(|q| self.quadrant(*q).contains(&tooth_id))
    }
}

/// Recommendation urgency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }
}

/// A clinical recommendation derived from the condition tally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    /// Recommendation label (e.g. "Calculus Removal")
    #[serde(rename = "type")]
    pub label: String,
    /// Number of findings that triggered it (0 for the no-pathology record)
    pub count: u32,
    /// Descriptive text
    pub description: String,
    /// Urgency level
    pub urgency: Urgency,
}

/// A fully assembled dental chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DentalChart {
    /// Species as supplied by the caller (not normalized)
    pub species: String,
    /// Layout the chart was drawn against
    #[serde(rename = "teeth_layout")]
    pub layout: &'static ToothLayout,
    /// Findings echoed verbatim
    pub findings: FindingsMap,
    /// Findings per condition category
    #[serde(rename = "conditions")]
    pub tally: ConditionTally,
    /// Derived recommendations, never empty
    pub recommendations: Vec<Recommendation>,
    /// Teeth in the layout
    pub total_teeth: u32,
    /// Documented findings, including `normal` ones
    pub affected_teeth: u32,
}

impl DentalChart {
    /// Category of a documented tooth (or `"general"`), `None` if undocumented.
    pub fn condition_of(&self, tooth_id: &str) -> Option<ConditionCategory> {
        self.findings.get(tooth_id).map(|text| classify(text))
    }

    /// Findings not classified as `normal`, in key order.
    pub fn problem_teeth(&self) -> Vec<(&str, ConditionCategory)> {
        self.findings
            .iter()
            .map(|(tooth, text)| (tooth.as_str(), classify(text)))
            .filter(|(_, category)| *category != ConditionCategory::Normal)
            .collect()
    }

    /// Share of documented findings that are not `normal`, as a percentage.
    pub fn affected_percentage(&self) -> f64 {
        let documented = self.tally.total();
        if documented == 0 {
            return 0.0;
        }
        self.tally.abnormal() as f64 / documented as f64 * 100.0
    }

    /// Highest urgency across recommendations.
    pub fn highest_urgency(&self) -> Urgency {
        self.recommendations
            .iter()
            .map(|r| r.urgency)
            .max()
            .unwrap_or(Urgency::Low)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dental::layout_for;

    #[test]
    fn test_layout_queries() {
        let layout = layout_for("cat");
        assert_eq!(layout.quadrant(Quadrant::LowerLeft).len(), 7);
        assert!(layout.contains("208"));
        assert!(!layout.contains("209"));
        assert_eq!(layout.quadrant_of("405"), Some(Quadrant::LowerRight));
        assert_eq!(layout.iter().count(), 30);
        assert_eq!(layout.iter().next(), Some("101"));
    }

    #[test]
    fn test_recommendation_wire_shape() {
        let rec = Recommendation {
            label: "Calculus Removal".into(),
            count: 3,
            description: "Professional scaling required".into(),
            urgency: Urgency::Medium,
        };
        let json = serde_json::to_value(&rec).unwrap();

        assert_eq!(json["type"], "Calculus Removal");
        assert_eq!(json["count"], 3);
        assert_eq!(json["urgency"], "medium");
    }
}
