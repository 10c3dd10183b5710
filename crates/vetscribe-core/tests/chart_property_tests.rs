//! Property tests for chart assembly invariants.

use proptest::prelude::*;

use vetscribe_core::dental::{assemble_chart, build_recommendations};
use vetscribe_core::models::{FindingsMap, Urgency};

fn findings_strategy() -> impl Strategy<Value = FindingsMap> {
    let key = prop_oneof![
        "[1-4](0[1-9]|1[01])",
        Just("general".to_string()),
        "[a-z0-9]{0,6}",
    ];
    let text = prop_oneof![
        Just("normal".to_string()),
        Just("tartar".to_string()),
        Just("red gums".to_string()),
        Just("4mm pocket".to_string()),
        Just("chipped".to_string()),
        Just("missing".to_string()),
        ".{0,24}",
    ];
    prop::collection::btree_map(key, text, 0..40)
}

fn species_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("dog".to_string()),
        Just("cat".to_string()),
        "[a-zA-Z]{0,8}",
    ]
}

proptest! {
    #[test]
    fn tally_sums_to_finding_count(species in species_strategy(), findings in findings_strategy()) {
        let expected = findings.len() as u32;
        let chart = assemble_chart(&species, findings);

        prop_assert_eq!(chart.tally.total(), expected);
        prop_assert_eq!(chart.affected_teeth, expected);
    }

    #[test]
    fn total_teeth_depends_only_on_species(species in species_strategy(), findings in findings_strategy()) {
        let chart = assemble_chart(&species, findings);
        let expected = if species == "cat" { 30 } else { 43 };

        prop_assert_eq!(chart.total_teeth, expected);
    }

    #[test]
    fn recommendations_never_empty(findings in findings_strategy()) {
        let chart = assemble_chart("dog", findings);
        let recs = build_recommendations(&chart.tally);

        prop_assert!(!recs.is_empty());
        prop_assert_eq!(&recs, &chart.recommendations);

        let fallback = recs.iter().any(|r| r.label == "Good Oral Health");
        if fallback {
            prop_assert_eq!(recs.len(), 1);
            prop_assert_eq!(recs[0].urgency, Urgency::Low);
        } else {
            prop_assert!(recs.iter().all(|r| r.count > 0));
        }
    }
}
