//! Printable chart report with JSON and CSV export.

use serde::Serialize;

use crate::models::{ConditionCategory, DentalChart, Quadrant, Recommendation, ToothKind, Urgency};

/// Status of a single tooth on the chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ToothStatus {
    /// Triadan identifier
    pub tooth_id: String,
    /// Chart label ("I1", "C", "P4", ...)
    pub tooth: String,
    /// Classified condition; undocumented teeth are `normal`
    pub condition: ConditionCategory,
    /// Finding text, if documented
    pub finding: Option<String>,
}

/// One quadrant row in display order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuadrantRow {
    pub quadrant: Quadrant,
    pub teeth: Vec<ToothStatus>,
}

/// A finding keyed by something other than a tooth in the layout.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GeneralFinding {
    pub key: String,
    pub finding: String,
    pub condition: ConditionCategory,
}

/// Report view of a dental chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartReport {
    /// Species as charted
    pub species: String,
    /// Report timestamp
    pub generated_at: String,
    /// Quadrant rows; left-side rows are mirrored for display
    pub rows: Vec<QuadrantRow>,
    /// "Tooth {id}: {label}" lines for non-normal findings
    pub problem_teeth: Vec<String>,
    /// Findings not attached to a charted tooth
    pub general_findings: Vec<GeneralFinding>,
    /// Non-normal share of documented findings
    pub affected_percentage: f64,
    pub recommendations: Vec<Recommendation>,
    pub highest_urgency: Urgency,
}

impl ChartReport {
    /// Build a report from an assembled chart.
    pub fn from_chart(chart: &DentalChart) -> Self {
        let rows = Quadrant::ALL
            .into_iter()
            .map(|quadrant| {
                let mut teeth: Vec<ToothStatus> = chart
                    .layout
                    .quadrant(quadrant)
                    .iter()
                    .map(|tooth_id| ToothStatus {
                        tooth_id: tooth_id.to_string(),
                        tooth: ToothKind::from_tooth_id(tooth_id)
                            .map(|k| k.label())
                            .unwrap_or_default(),
                        condition: chart
                            .condition_of(tooth_id)
                            .unwrap_or(ConditionCategory::Normal),
                        finding: chart.findings.get(*tooth_id).cloned(),
                    })
                    .collect();
                if quadrant.is_left() {
                    teeth.reverse();
                }
                QuadrantRow { quadrant, teeth }
            })
            .collect();

        let problem_teeth = chart
            .problem_teeth()
            .into_iter()
            .map(|(tooth, condition)| format!("Tooth {}: {}", tooth, condition.label()))
            .collect();

        let general_findings = chart
            .findings
            .iter()
            .filter(|(key, _)| !chart.layout.contains(key))
            .map(|(key, finding)| GeneralFinding {
                key: key.clone(),
                finding: finding.clone(),
                condition: crate::dental::classify(finding),
            })
            .collect();

        Self {
            species: chart.species.clone(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            rows,
            problem_teeth,
            general_findings,
            affected_percentage: chart.affected_percentage(),
            recommendations: chart.recommendations.clone(),
            highest_urgency: chart.highest_urgency(),
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV: one line per charted tooth, then general findings.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        csv.push_str("tooth_id,quadrant,tooth,condition,finding\n");

        for row in &self.rows {
            for status in &row.teeth {
                csv.push_str(&format!(
                    "{},{},{},{},{}\n",
                    status.tooth_id,
                    row.quadrant.as_str(),
                    status.tooth,
                    status.condition.as_str(),
                    escape_csv(status.finding.as_deref().unwrap_or("")),
                ));
            }
        }

        for general in &self.general_findings {
            csv.push_str(&format!(
                "{},,,{},{}\n",
                escape_csv(&general.key),
                general.condition.as_str(),
                escape_csv(&general.finding),
            ));
        }

        csv
    }
}

/// Escape a string for CSV.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dental::assemble_chart;
    use crate::models::FindingsMap;

    fn make_chart() -> DentalChart {
        let mut findings = FindingsMap::new();
        findings.insert("104".into(), "fractured canine".into());
        findings.insert("201".into(), "normal".into());
        findings.insert("general".into(), "tartar, moderate".into());
        assemble_chart("dog", findings)
    }

    #[test]
    fn test_report_rows() {
        let report = ChartReport::from_chart(&make_chart());

        assert_eq!(report.rows.len(), 4);
        let upper_right = &report.rows[0];
        assert_eq!(upper_right.quadrant, Quadrant::UpperRight);
        assert_eq!(upper_right.teeth[3].tooth_id, "104");
        assert_eq!(upper_right.teeth[3].tooth, "C");
        assert_eq!(upper_right.teeth[3].condition, ConditionCategory::Fracture);
        assert_eq!(upper_right.teeth[0].finding, None);

        // Left side is mirrored
        let upper_left = &report.rows[1];
        assert_eq!(upper_left.teeth.first().unwrap().tooth_id, "211");
        assert_eq!(upper_left.teeth.last().unwrap().tooth_id, "201");
    }

    #[test]
    fn test_problem_and_general_findings() {
        let report = ChartReport::from_chart(&make_chart());

        assert_eq!(
            report.problem_teeth,
            vec!["Tooth 104: Fracture".to_string(), "Tooth general: Calculus/Tartar".to_string()]
        );
        assert_eq!(report.general_findings.len(), 1);
        assert_eq!(report.general_findings[0].key, "general");
        assert_eq!(report.general_findings[0].condition, ConditionCategory::Calculus);
        assert_eq!(report.highest_urgency, Urgency::High);
    }

    #[test]
    fn test_report_csv() {
        let report = ChartReport::from_chart(&make_chart());
        let csv = report.to_csv();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "tooth_id,quadrant,tooth,condition,finding");
        // 43 teeth + 1 general finding
        assert_eq!(lines.len(), 1 + 43 + 1);
        assert!(lines.contains(&"104,upper_right,C,fracture,fractured canine"));
        assert_eq!(*lines.last().unwrap(), "general,,,calculus,\"tartar, moderate\"");
    }

    #[test]
    fn test_report_json() {
        let report = ChartReport::from_chart(&make_chart());
        let json = report.to_json().unwrap();

        assert!(json.contains("\"upper_right\""));
        assert!(json.contains("Fracture Repair"));
    }

    #[test]
    fn test_csv_escaping() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
    }
}
