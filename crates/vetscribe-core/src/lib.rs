//! VetScribe Core Library
//!
//! Deterministic dental charting for veterinary clinical notes.
//!
//! # Architecture
//!
//! ```text
//! Clinical note → LLM extraction (vetscribe-llm) → FindingsMap
//!                                                      │
//!                                     ┌────────────────▼────────────────┐
//!                                     │         Chart Assembler         │
//!                                     │  layout ← species registry      │
//!                                     │  tally  ← keyword classifier    │
//!                                     │  recs   ← recommendation rules  │
//!                                     └────────────────┬────────────────┘
//!                                                      │
//!                                  ┌───────────────────┴──────────────┐
//!                                  ▼                                  ▼
//!                             DentalChart                       ChartReport
//!                          (JSON response)                     (JSON / CSV)
//! ```
//!
//! # Core Principle
//!
//! **Charting never fails.** Unknown species fall back to the dog layout,
//! unclassifiable text is `other`, and empty findings still produce a chart.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Species, ToothLayout, ConditionTally, DentalChart, etc.)
//! - [`dental`]: Layout registry, classifier, recommendation rules, chart assembly
//! - [`export`]: Chart report with JSON and CSV export

pub mod dental;
pub mod export;
pub mod models;

// Re-export commonly used types
pub use dental::{assemble_chart, build_recommendations, classify, layout_for};
pub use export::ChartReport;
pub use models::{
    ConditionCategory, ConditionTally, DentalChart, FindingsMap, Quadrant, Recommendation,
    Species, ToothKind, ToothLayout, Urgency,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum VetScribeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for VetScribeError {
    fn from(e: serde_json::Error) -> Self {
        VetScribeError::SerializationError(e.to_string())
    }
}

// =========================================================================
// Charting Functions (exported to FFI)
// =========================================================================

/// Assemble a dental chart. Duplicate tooth ids keep the last finding.
#[uniffi::export]
pub fn assemble_dental_chart(species: String, findings: Vec<FfiFinding>) -> FfiDentalChart {
    assemble_chart(&species, to_findings_map(findings)).into()
}

/// Assemble a chart from a JSON object of `{tooth_id: finding}` and return
/// the chart as JSON.
#[uniffi::export]
pub fn assemble_dental_chart_json(
    species: String,
    findings_json: String,
) -> Result<String, VetScribeError> {
    let value: serde_json::Value = serde_json::from_str(&findings_json)?;
    let object = value
        .as_object()
        .ok_or_else(|| VetScribeError::InvalidInput("findings must be a JSON object".into()))?;

    let mut findings = FindingsMap::new();
    for (tooth_id, finding) in object {
        let text = finding.as_str().ok_or_else(|| {
            VetScribeError::InvalidInput(format!("finding for {} must be a string", tooth_id))
        })?;
        findings.insert(tooth_id.clone(), text.to_string());
    }

    Ok(assemble_chart(&species, findings).to_json()?)
}

/// Classify a single finding; returns the lowercase category name.
#[uniffi::export]
pub fn classify_finding(text: String) -> String {
    classify(&text).as_str().to_string()
}

/// Tooth layout for a species (unknown species get the dog layout).
#[uniffi::export]
pub fn tooth_layout(species: String) -> FfiToothLayout {
    let layout = layout_for(&species);
    FfiToothLayout::new(species, layout)
}

/// Chart report as CSV.
#[uniffi::export]
pub fn dental_chart_report_csv(species: String, findings: Vec<FfiFinding>) -> String {
    let chart = assemble_chart(&species, to_findings_map(findings));
    ChartReport::from_chart(&chart).to_csv()
}

fn to_findings_map(findings: Vec<FfiFinding>) -> FindingsMap {
    findings
        .into_iter()
        .map(|f| (f.tooth_id, f.finding))
        .collect()
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe finding.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFinding {
    pub tooth_id: String,
    pub finding: String,
}

/// FFI-safe tooth layout.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiToothLayout {
    pub species: String,
    pub upper_right: Vec<String>,
    pub upper_left: Vec<String>,
    pub lower_left: Vec<String>,
    pub lower_right: Vec<String>,
    pub total_teeth: u32,
}

impl FfiToothLayout {
    fn new(species: String, layout: &ToothLayout) -> Self {
        fn owned(teeth: &[&str]) -> Vec<String> {
            teeth.iter().map(|t| t.to_string()).collect()
        }

        Self {
            species,
            upper_right: owned(layout.upper_right),
            upper_left: owned(layout.upper_left),
            lower_left: owned(layout.lower_left),
            lower_right: owned(layout.lower_right),
            total_teeth: layout.total_teeth(),
        }
    }
}

/// FFI-safe condition count.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiConditionCount {
    pub category: String,
    pub count: u32,
}

/// FFI-safe recommendation.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecommendation {
    pub label: String,
    pub count: u32,
    pub description: String,
    pub urgency: String,
}

impl From<Recommendation> for FfiRecommendation {
    fn from(rec: Recommendation) -> Self {
        Self {
            label: rec.label,
            count: rec.count,
            description: rec.description,
            urgency: rec.urgency.as_str().to_string(),
        }
    }
}

/// FFI-safe dental chart.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDentalChart {
    pub species: String,
    pub layout: FfiToothLayout,
    pub findings: Vec<FfiFinding>,
    /// All seven categories in tally order, including zeros
    pub conditions: Vec<FfiConditionCount>,
    pub recommendations: Vec<FfiRecommendation>,
    pub total_teeth: u32,
    pub affected_teeth: u32,
}

impl From<DentalChart> for FfiDentalChart {
    fn from(chart: DentalChart) -> Self {
        let conditions = ConditionCategory::ALL
            .iter()
            .map(|c| FfiConditionCount {
                category: c.as_str().to_string(),
                count: chart.tally.get(*c),
            })
            .collect();

        Self {
            layout: FfiToothLayout::new(chart.species.clone(), chart.layout),
            species: chart.species,
            findings: chart
                .findings
                .into_iter()
                .map(|(tooth_id, finding)| FfiFinding { tooth_id, finding })
                .collect(),
            conditions,
            recommendations: chart.recommendations.into_iter().map(|r| r.into()).collect(),
            total_teeth: chart.total_teeth,
            affected_teeth: chart.affected_teeth,
        }
    }
}
