//! Dental analysis: prompt → backend → parse → chart.

use serde::Serialize;
use tracing::{debug, info, warn};
use vetscribe_core::dental::assemble_chart;
use vetscribe_core::models::{DentalChart, FindingsMap};

use crate::config::ExtractorConfig;
use crate::extraction::{
    parse_dental_output, DentalExtraction, ExtractionError, ExtractionResult, MockExtractor,
};
use crate::prompts::{build_messages, Message};

/// Summary used when the backend reply cannot be parsed.
pub const PARSE_FAILURE_SUMMARY: &str =
    "Unable to extract dental findings from notes - AI response parsing failed";

/// A chat-completion request for a backend.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
    /// Clinical note the messages were built from
    pub note: String,
}

/// LLM backend that answers a completion request with raw text.
pub trait FindingsExtractor {
    fn complete(&self, request: &CompletionRequest) -> anyhow::Result<String>;
}

impl FindingsExtractor for MockExtractor {
    fn complete(&self, request: &CompletionRequest) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&MockExtractor::extract(&request.note))?)
    }
}

/// Response of a dental analysis request.
#[derive(Debug, Clone, Serialize)]
pub struct DentalAnalysis {
    pub analysis_id: String,
    pub generated_at: String,
    pub species: String,
    pub findings: FindingsMap,
    pub summary: String,
    pub raw_extraction: String,
    #[serde(rename = "chartData")]
    pub chart: DentalChart,
    /// Backend replied but the reply was not usable JSON
    pub parse_error: bool,
}

/// Runs extraction against a backend and assembles the chart.
pub struct DentalAnalyzer<E> {
    extractor: E,
    config: ExtractorConfig,
}

impl<E: FindingsExtractor> DentalAnalyzer<E> {
    /// Create an analyzer with default configuration.
    pub fn new(extractor: E) -> Self {
        Self::with_config(extractor, ExtractorConfig::default())
    }

    pub fn with_config(extractor: E, config: ExtractorConfig) -> Self {
        Self { extractor, config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Build the backend request for a note.
    pub fn build_request(&self, text: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            messages: build_messages(text, self.config.include_examples),
            note: text.to_string(),
        }
    }

    /// Analyze a clinical note.
    ///
    /// Backend failures are errors. A reply that cannot be parsed is not:
    /// the chart is assembled from empty findings and `parse_error` is set.
    pub fn analyze(&self, text: &str, species: Option<&str>) -> ExtractionResult<DentalAnalysis> {
        let species = species.unwrap_or(self.config.default_species.as_str());
        info!(species, text_len = text.len(), "analyzing dental findings");

        let request = self.build_request(text);
        let raw = self
            .extractor
            .complete(&request)
            .map_err(|e| ExtractionError::Inference(format!("{:#}", e)))?;

        let (extraction, parse_error) = match parse_dental_output(&raw) {
            Ok(extraction) => (extraction, false),
            Err(e) => {
                warn!(error = %e, "failed to parse dental extraction");
                debug!(raw = %raw, "unparsed backend reply");
                let fallback = DentalExtraction {
                    findings: FindingsMap::new(),
                    summary: PARSE_FAILURE_SUMMARY.to_string(),
                    raw_extraction: format!("Parse error: {}. Raw response: {}", e, raw),
                };
                (fallback, true)
            }
        };

        info!(
            findings = extraction.findings.len(),
            parse_error, "dental extraction complete"
        );

        let chart = assemble_chart(species, extraction.findings.clone());

        Ok(DentalAnalysis {
            analysis_id: uuid::Uuid::new_v4().to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            species: species.to_string(),
            findings: extraction.findings,
            summary: extraction.summary,
            raw_extraction: extraction.raw_extraction,
            chart,
            parse_error,
        })
    }
}
