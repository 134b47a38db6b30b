use std::path::PathBuf;
use std::sync::Arc;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;
use serde_json::Value;
use shortlist_core::{round_score, AnalysisResult, ContactInfo, ExportFormat};

use crate::filename::entry_download_filename;
use crate::persist::{DownloadSink, PersistError};

pub const CSV_HEADERS: [&str; 8] = [
    "Rank",
    "Filename",
    "Match Score",
    "Email",
    "Phone",
    "Matched Skills",
    "Missing Skills",
    "Suggestions",
];

const SKILL_SEPARATOR: &str = "; ";

/// Produces the timestamp embedded in generated files.
pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

/// A generated file ready to hand to a [`DownloadSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("no results to export")]
    NoResults,
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// One row per result in stored order. Every field is quoted; embedded
/// quotes are doubled.
pub fn encode_csv(results: &[AnalysisResult]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for (index, result) in results.iter().enumerate() {
        let contact = result.contact_info.as_ref();
        writer.write_record([
            (index + 1).to_string(),
            result.filename.clone(),
            round_score(result.match_score).to_string(),
            contact.and_then(ContactInfo::email).unwrap_or_default().to_string(),
            contact.and_then(ContactInfo::phone).unwrap_or_default().to_string(),
            result.common_skills.join(SKILL_SEPARATOR),
            result.missing_skills.join(SKILL_SEPARATOR),
            result.suggestions.clone(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[derive(Serialize)]
struct BatchExport<'a> {
    analysis_date: &'a str,
    total_resumes: usize,
    results: &'a [AnalysisResult],
}

/// The stored results as received (see [`AnalysisResult`] serialization).
pub fn encode_json(results: &[AnalysisResult], generated_at: &str) -> Result<String, ExportError> {
    let export = BatchExport {
        analysis_date: generated_at,
        total_resumes: results.len(),
        results,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

#[derive(Serialize)]
struct EntryExport<'a> {
    filename: &'a str,
    match_score: Value,
    contact_info: Option<&'a ContactInfo>,
    matched_skills: &'a [String],
    missing_skills: &'a [String],
    suggestions: &'a str,
    timestamp: &'a str,
}

/// Fixed projection of a single result for the per-row download.
pub fn encode_entry(entry: &AnalysisResult, generated_at: &str) -> Result<String, ExportError> {
    let export = EntryExport {
        filename: &entry.filename,
        match_score: raw_score(entry),
        contact_info: entry.contact_info.as_ref(),
        matched_skills: &entry.common_skills,
        missing_skills: &entry.missing_skills,
        suggestions: &entry.suggestions,
        timestamp: generated_at,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

/// The score as the collaborator wrote it (`87` stays `87`).
fn raw_score(entry: &AnalysisResult) -> Value {
    match entry.source.get("match_score") {
        Some(score @ Value::Number(_)) => score.clone(),
        _ => Value::from(entry.match_score),
    }
}

pub fn build_batch_artifact(
    format: ExportFormat,
    results: &[AnalysisResult],
    generated_at: &str,
) -> Result<DownloadArtifact, ExportError> {
    if results.is_empty() {
        return Err(ExportError::NoResults);
    }
    let body = match format {
        ExportFormat::Csv => encode_csv(results)?,
        ExportFormat::Json => encode_json(results, generated_at)?,
    };
    Ok(DownloadArtifact {
        filename: format.filename().to_string(),
        content_type: format.content_type(),
        body,
    })
}

pub fn build_entry_artifact(
    entry: &AnalysisResult,
    generated_at: &str,
) -> Result<DownloadArtifact, ExportError> {
    Ok(DownloadArtifact {
        filename: entry_download_filename(&entry.filename),
        content_type: "application/json",
        body: encode_entry(entry, generated_at)?,
    })
}

/// Encodes results and hands them to a download sink.
#[derive(Clone)]
pub struct Exporter {
    sink: Arc<dyn DownloadSink>,
    clock: Clock,
}

impl Exporter {
    pub fn new(sink: Arc<dyn DownloadSink>, clock: Clock) -> Self {
        Self { sink, clock }
    }

    pub fn export_batch(
        &self,
        format: ExportFormat,
        results: &[AnalysisResult],
    ) -> Result<PathBuf, ExportError> {
        let artifact = build_batch_artifact(format, results, &(self.clock)())?;
        Ok(self.sink.deliver(&artifact)?)
    }

    pub fn download_entry(&self, entry: &AnalysisResult) -> Result<PathBuf, ExportError> {
        let artifact = build_entry_artifact(entry, &(self.clock)())?;
        Ok(self.sink.deliver(&artifact)?)
    }
}
