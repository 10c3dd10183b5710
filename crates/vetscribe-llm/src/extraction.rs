//! Dental finding extraction from LLM output.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use vetscribe_core::models::{FindingsMap, Quadrant, GENERAL_FINDING_KEY};

/// Extraction errors.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("LLM inference error: {0}")]
    Inference(String),
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;

pub const DEFAULT_SUMMARY: &str = "No specific dental findings documented";
pub const DEFAULT_RAW_EXTRACTION: &str = "No extraction details";

/// Structured extraction returned by the LLM.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DentalExtraction {
    /// Tooth id (or "general") → condition phrase
    pub findings: FindingsMap,
    /// Model's summary of what it found
    pub summary: String,
    /// Phrases that led to the findings
    pub raw_extraction: String,
}

impl Default for DentalExtraction {
    fn default() -> Self {
        Self {
            findings: FindingsMap::new(),
            summary: DEFAULT_SUMMARY.to_string(),
            raw_extraction: DEFAULT_RAW_EXTRACTION.to_string(),
        }
    }
}

/// Reply shape before normalization; models are loose with value types.
#[derive(Debug, Deserialize)]
struct RawDentalOutput {
    #[serde(default)]
    findings: Option<Map<String, Value>>,
    #[serde(default)]
    summary: Option<Value>,
    #[serde(default)]
    raw_extraction: Option<Value>,
}

/// Parse LLM output JSON into a dental extraction.
///
/// Missing fields fall back to defaults. Non-string finding values are
/// stringified and `null` values dropped.
pub fn parse_dental_output(raw: &str) -> ExtractionResult<DentalExtraction> {
    // Try to find JSON in the response (in case LLM adds extra text)
    let json_start = raw.find('{').ok_or_else(|| {
        ExtractionError::InvalidFormat("No JSON object found in response".into())
    })?;
    let json_end = raw.rfind('}').ok_or_else(|| {
        ExtractionError::InvalidFormat("No closing brace found in response".into())
    })?;
    if json_end < json_start {
        return Err(ExtractionError::InvalidFormat(
            "Closing brace precedes opening brace".into(),
        ));
    }

    let output: RawDentalOutput = serde_json::from_str(&raw[json_start..=json_end])?;

    let findings = output
        .findings
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(tooth, value)| value_to_text(value).map(|text| (tooth, text)))
        .collect();

    Ok(DentalExtraction {
        findings,
        summary: output
            .summary
            .and_then(value_to_text)
            .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
        raw_extraction: output
            .raw_extraction
            .and_then(value_to_text)
            .unwrap_or_else(|| DEFAULT_RAW_EXTRACTION.to_string()),
    })
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Keyword → condition mappings used by the mock extractor, mirroring the prompt.
const CONDITION_PATTERNS: &[(&[&str], &str)] = &[
    (&["tartar", "calculus", "cleaning", "scale"], "calculus"),
    (&["gingivitis", "red gums", "inflamed"], "gingivitis"),
    (&["broken", "fracture", "chipped"], "fracture"),
    (&["missing", "extracted", "pulled"], "missing"),
    (&["pocket", "periodontal"], "periodontal_disease"),
    (&["loose"], "mobility"),
    (&["worn"], "attrition"),
    (&["decay", "cavity"], "caries"),
];

const BACK_TEETH: &[&str] = &["105", "106", "107", "108"];
const CANINE_TOOTH: &str = "104";

/// Mock extractor for testing without actual LLM inference.
pub struct MockExtractor;

impl MockExtractor {
    /// Extract findings clause by clause using simple pattern matching.
    ///
    /// Explicit Triadan ids in a clause take precedence, then "back teeth"
    /// (upper right premolars) and "canine" (104); otherwise the finding is
    /// recorded under "general". The first finding for a key wins.
    pub fn extract(text: &str) -> DentalExtraction {
        let mut findings = FindingsMap::new();
        let mut phrases = Vec::new();

        for clause in text.split(|c: char| matches!(c, ',' | ';' | '.' | '\n')) {
            let lower = clause.to_lowercase();
            let conditions: Vec<&str> = CONDITION_PATTERNS
                .iter()
                .filter(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
                .map(|(_, condition)| *condition)
                .collect();
            if conditions.is_empty() {
                continue;
            }

            let targets = clause_targets(&lower);
            for condition in conditions {
                for tooth in &targets {
                    findings
                        .entry(tooth.clone())
                        .or_insert_with(|| condition.to_string());
                }
            }
            phrases.push(clause.trim().to_string());
        }

        if findings.is_empty() {
            return DentalExtraction::default();
        }

        DentalExtraction {
            summary: format!("Found {} dental findings", findings.len()),
            raw_extraction: phrases.join("; "),
            findings,
        }
    }
}

/// Teeth a lowercase clause refers to.
fn clause_targets(clause: &str) -> Vec<String> {
    let explicit: Vec<String> = clause
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| Quadrant::from_tooth_id(token).is_some())
        .map(str::to_string)
        .collect();
    if !explicit.is_empty() {
        return explicit;
    }

    if clause.contains("back teeth") {
        BACK_TEETH.iter().map(|t| t.to_string()).collect()
    } else if clause.contains("canine") {
        vec![CANINE_TOOTH.to_string()]
    } else {
        vec![GENERAL_FINDING_KEY.to_string()]
    }
}
