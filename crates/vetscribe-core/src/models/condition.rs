//! Dental condition categories and per-chart tallies.

use serde::{Deserialize, Serialize};

/// Closed set of categories a free-text finding can classify into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ConditionCategory {
    Normal,
    Gingivitis,
    Calculus,
    Periodontal,
    Fracture,
    Missing,
    Other,
}

impl ConditionCategory {
    /// All categories in tally order.
    pub const ALL: [ConditionCategory; 7] = [
        ConditionCategory::Normal,
        ConditionCategory::Gingivitis,
        ConditionCategory::Calculus,
        ConditionCategory::Periodontal,
        ConditionCategory::Fracture,
        ConditionCategory::Missing,
        ConditionCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionCategory::Normal => "normal",
            ConditionCategory::Gingivitis => "gingivitis",
            ConditionCategory::Calculus => "calculus",
            ConditionCategory::Periodontal => "periodontal",
            ConditionCategory::Fracture => "fracture",
            ConditionCategory::Missing => "missing",
            ConditionCategory::Other => "other",
        }
    }

    /// Display label used on charts and reports.
    pub fn label(&self) -> &'static str {
        match self {
            ConditionCategory::Normal => "Normal",
            ConditionCategory::Gingivitis => "Gingivitis",
            ConditionCategory::Calculus => "Calculus/Tartar",
            ConditionCategory::Periodontal => "Periodontal Disease",
            ConditionCategory::Fracture => "Fracture",
            ConditionCategory::Missing => "Missing",
            ConditionCategory::Other => "Other",
        }
    }

    /// Parse a lowercase category name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

/// Count of findings per condition category.
///
/// Serializes as a flat object keyed by category name, e.g.
/// `{"normal":0,"gingivitis":2,...}`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConditionTally {
    pub normal: u32,
    pub gingivitis: u32,
    pub calculus: u32,
    pub periodontal: u32,
    pub fracture: u32,
    pub missing: u32,
    pub other: u32,
}

impl ConditionTally {
    /// Tally with every category at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for a category.
    pub fn get(&self, category: ConditionCategory) -> u32 {
        match category {
            ConditionCategory::Normal => self.normal,
            ConditionCategory::Gingivitis => self.gingivitis,
            ConditionCategory::Calculus => self.calculus,
            ConditionCategory::Periodontal => self.periodontal,
            ConditionCategory::Fracture => self.fracture,
            ConditionCategory::Missing => self.missing,
            ConditionCategory::Other => self.other,
        }
    }

    /// Record one more finding in a category.
    pub fn increment(&mut self, category: ConditionCategory) {
        let slot = match category {
            ConditionCategory::Normal => &mut self.normal,
            ConditionCategory::Gingivitis => &mut self.gingivitis,
            ConditionCategory::Calculus => &mut self.calculus,
            ConditionCategory::Periodontal => &mut self.periodontal,
            ConditionCategory::Fracture => &mut self.fracture,
            ConditionCategory::Missing => &mut self.missing,
            ConditionCategory::Other => &mut self.other,
        };
        *slot += 1;
    }

    /// Sum over all categories.
    pub fn total(&self) -> u32 {
        ConditionCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Findings in any category other than `normal`.
    pub fn abnormal(&self) -> u32 {
        self.total() - self.normal
    }

    /// Non-zero entries in tally order.
    pub fn non_zero(&self) -> Vec<(ConditionCategory, u32)> {
        ConditionCategory::ALL
            .iter()
            .map(|c| (*c, self.get(*c)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

impl FromIterator<ConditionCategory> for ConditionTally {
    fn from_iter<I: IntoIterator<Item = ConditionCategory>>(iter: I) -> Self {
        let mut tally = ConditionTally::new();
        for category in iter {
            tally.increment(category);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_round_trip() {
        for category in ConditionCategory::ALL {
            assert_eq!(ConditionCategory::from_name(category.as_str()), Some(category));
        }
        assert_eq!(ConditionCategory::from_name("caries"), None);
    }

    #[test]
    fn test_tally_increment_and_total() {
        let mut tally = ConditionTally::new();
        assert_eq!(tally.total(), 0);

        tally.increment(ConditionCategory::Calculus);
        tally.increment(ConditionCategory::Calculus);
        tally.increment(ConditionCategory::Normal);

        assert_eq!(tally.get(ConditionCategory::Calculus), 2);
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.abnormal(), 2);
        assert_eq!(
            tally.non_zero(),
            vec![(ConditionCategory::Normal, 1), (ConditionCategory::Calculus, 2)]
        );
    }

    #[test]
    fn test_tally_serializes_as_flat_object() {
        let tally: ConditionTally = [ConditionCategory::Fracture].into_iter().collect();
        let json = serde_json::to_value(tally).unwrap();

        assert_eq!(json["fracture"], 1);
        assert_eq!(json["normal"], 0);
        assert_eq!(json.as_object().unwrap().len(), 7);
    }
}
