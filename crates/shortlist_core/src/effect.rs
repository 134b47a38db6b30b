use std::time::Duration;

use crate::{AnalysisResult, NotificationId, RequestId, ResumeFile};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubmitBatch {
        request_id: RequestId,
        resumes: Vec<ResumeFile>,
        job_description: String,
    },
    SubmitSingle {
        request_id: RequestId,
        resume: ResumeFile,
        job_description: String,
    },
    ExportBatch {
        format: ExportFormat,
        results: Vec<AnalysisResult>,
    },
    DownloadEntry {
        entry: AnalysisResult,
    },
    ScheduleDismiss {
        id: NotificationId,
        after: Duration,
    },
    CancelDismiss {
        id: NotificationId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn filename(self) -> &'static str {
        match self {
            ExportFormat::Csv => "batch_analysis_results.csv",
            ExportFormat::Json => "batch_analysis_results.json",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}
