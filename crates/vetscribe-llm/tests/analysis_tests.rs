//! End-to-end analysis tests using the mock backend.

use proptest::prelude::*;

use vetscribe_llm::{parse_dental_output, DentalAnalyzer, MockExtractor};

#[test]
fn test_cohat_note_end_to_end() {
    let note = "COHAT performed. Grade 3 calculus on 108 and 208; \
                gingivitis around 104. 4mm pocket at 309. 411 missing. Loose 301.";

    let analyzer = DentalAnalyzer::new(MockExtractor);
    let analysis = analyzer.analyze(note, Some("dog")).unwrap();

    assert_eq!(analysis.findings["108"], "calculus");
    assert_eq!(analysis.findings["208"], "calculus");
    assert_eq!(analysis.findings["104"], "gingivitis");
    assert_eq!(analysis.findings["309"], "periodontal_disease");
    assert_eq!(analysis.findings["411"], "missing");
    assert_eq!(analysis.findings["301"], "mobility");

    let tally = analysis.chart.tally;
    assert_eq!(tally.calculus, 2);
    assert_eq!(tally.gingivitis, 1);
    assert_eq!(tally.periodontal, 1);
    assert_eq!(tally.missing, 1);
    assert_eq!(tally.other, 1);

    let labels: Vec<&str> = analysis
        .chart
        .recommendations
        .iter()
        .map(|r| r.label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec!["Gingivitis Management", "Calculus Removal", "Periodontal Therapy"]
    );
}

#[test]
fn test_llm_reply_with_prose() {
    let reply = "Sure! Here is the JSON you asked for:\n\
                 {\"findings\": {\"204\": \"chipped\", \"general\": \"normal\"}, \
                 \"summary\": \"Chipped canine\"}\nLet me know if you need more.";

    let extraction = parse_dental_output(reply).unwrap();
    assert_eq!(extraction.findings.len(), 2);
    assert_eq!(extraction.summary, "Chipped canine");
}

proptest! {
    #[test]
    fn mock_analysis_never_fails(note in ".{0,200}", cat in any::<bool>()) {
        let species = if cat { "cat" } else { "dog" };
        let analyzer = DentalAnalyzer::new(MockExtractor);
        let analysis = analyzer.analyze(&note, Some(species)).unwrap();

        prop_assert!(!analysis.parse_error);
        prop_assert_eq!(analysis.chart.affected_teeth as usize, analysis.findings.len());
        prop_assert_eq!(analysis.chart.tally.total() as usize, analysis.findings.len());
        prop_assert!(!analysis.chart.recommendations.is_empty());
    }
}
