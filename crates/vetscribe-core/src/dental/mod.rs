//! Dental chart assembly.
//!
//! Pipeline: Findings → Classification → Tally → Recommendations → Chart
//!
//! Everything here is total: unknown species default to the dog layout,
//! unmatched text is `other`, and empty findings still yield a chart.

mod classifier;
mod layout;
mod recommendations;

pub use classifier::*;
pub use layout::*;
pub use recommendations::*;

use tracing::debug;

use crate::models::{ConditionTally, DentalChart, FindingsMap, Species};

/// Assemble a chart for `species` from extracted findings.
///
/// `species` is echoed into the chart as given, even when it fell back to
/// the dog layout.
pub fn assemble_chart(species: &str, findings: FindingsMap) -> DentalChart {
    if Species::from_name(species).is_none() {
        debug!(species, "unregistered species, using dog layout");
    }
    let layout = layout_for(species);

    let tally: ConditionTally = findings.values().map(|text| classify(text)).collect();
    let recommendations = build_recommendations(&tally);

    debug!(
        species,
        findings = findings.len(),
        recommendations = recommendations.len(),
        "assembled dental chart"
    );

    DentalChart {
        species: species.to_string(),
        layout,
        total_teeth: layout.total_teeth(),
        affected_teeth: findings.len() as u32,
        findings,
        tally,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConditionCategory, Urgency};

    fn findings(pairs: &[(&str, &str)]) -> FindingsMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_findings() {
        let chart = assemble_chart("dog", FindingsMap::new());

        assert_eq!(chart.total_teeth, 43);
        assert_eq!(chart.affected_teeth, 0);
        assert_eq!(chart.tally, ConditionTally::new());
        assert_eq!(chart.recommendations.len(), 1);
        assert_eq!(chart.recommendations[0].label, "Good Oral Health");
        assert_eq!(chart.affected_percentage(), 0.0);
    }

    #[test]
    fn test_assemble_cat_chart() {
        let chart = assemble_chart(
            "cat",
            findings(&[
                ("104", "fractured canine"),
                ("206", "tartar"),
                ("307", "normal"),
                ("general", "red gums"),
            ]),
        );

        assert_eq!(chart.species, "cat");
        assert_eq!(chart.total_teeth, 30);
        assert_eq!(chart.affected_teeth, 4);
        assert_eq!(chart.tally.fracture, 1);
        assert_eq!(chart.tally.calculus, 1);
        assert_eq!(chart.tally.normal, 1);
        assert_eq!(chart.tally.gingivitis, 1);
        assert_eq!(chart.recommendations.len(), 3);
        assert_eq!(chart.highest_urgency(), Urgency::High);
    }

    #[test]
    fn test_unknown_species_echoed_with_dog_layout() {
        let chart = assemble_chart("hamster", FindingsMap::new());
        assert_eq!(chart.species, "hamster");
        assert_eq!(chart.total_teeth, 43);
    }

    #[test]
    fn test_keys_outside_layout_still_counted() {
        let chart = assemble_chart("cat", findings(&[("411", "broken"), ("999", "pulled")]));
        assert_eq!(chart.affected_teeth, 2);
        assert_eq!(chart.tally.total(), 2);
        assert_eq!(chart.tally.missing, 1);
    }

    #[test]
    fn test_chart_queries() {
        let chart = assemble_chart(
            "dog",
            findings(&[("101", "normal"), ("108", "chipped"), ("general", "calculus")]),
        );

        assert_eq!(chart.condition_of("108"), Some(ConditionCategory::Fracture));
        assert_eq!(chart.condition_of("101"), Some(ConditionCategory::Normal));
        assert_eq!(chart.condition_of("102"), None);
        assert_eq!(
            chart.problem_teeth(),
            vec![("108", ConditionCategory::Fracture), ("general", ConditionCategory::Calculus)]
        );
        assert!((chart.affected_percentage() - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_chart_json_shape() {
        let chart = assemble_chart("dog", findings(&[("104", "fracture")]));
        let json: serde_json::Value = serde_json::from_str(&chart.to_json().unwrap()).unwrap();

        assert_eq!(json["species"], "dog");
        assert_eq!(json["teeth_layout"]["upper_right"][0], "101");
        assert_eq!(json["findings"]["104"], "fracture");
        assert_eq!(json["conditions"]["fracture"], 1);
        assert_eq!(json["recommendations"][0]["type"], "Fracture Repair");
        assert_eq!(json["total_teeth"], 43);
        assert_eq!(json["affected_teeth"], 1);
    }
}
