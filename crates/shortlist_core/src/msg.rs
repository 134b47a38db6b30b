use crate::{
    BatchResultSet, ExportFormat, NotificationId, RequestId, ResumeFile, SampleJob, SingleAnalysis,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User picked the resumes for the batch form.
    ResumesSelected(Vec<ResumeFile>),
    /// User edited the batch job description.
    JobDescriptionChanged(String),
    /// User clicked "Analyze All Resumes".
    BatchSubmitted,
    /// Scoring collaborator answered (or failed to answer) a batch request.
    BatchCompleted {
        request_id: RequestId,
        result: Result<BatchResultSet, SubmitFailure>,
    },
    /// User opened the detail view for a table row.
    DetailOpened { index: usize },
    /// User closed the detail view.
    DetailClosed,
    /// User asked to download the analysis of one row.
    EntryDownloadRequested { index: usize },
    /// A per-row download was delivered (or failed).
    EntryDownloaded {
        filename: String,
        result: Result<(), String>,
    },
    /// User asked to export the whole result table.
    ExportRequested(ExportFormat),
    /// An export file was delivered (or failed).
    ExportFinished {
        filename: String,
        result: Result<(), String>,
    },
    /// User picked the resume for the single-analysis form (`None` clears it).
    SingleResumeSelected(Option<ResumeFile>),
    /// User edited the single-analysis job description.
    SingleJobDescriptionChanged(String),
    /// User clicked "Analyze Match".
    SingleSubmitted,
    /// Scoring collaborator answered (or failed to answer) a single request.
    SingleCompleted {
        request_id: RequestId,
        result: Result<SingleAnalysis, SubmitFailure>,
    },
    /// User asked to fill a form with a built-in job description.
    SampleJobDescriptionRequested { form: Form, sample: SampleJob },
    /// Dismissal timer for a notification fired.
    NotificationExpired { id: NotificationId },
    /// User closed a notification.
    NotificationDismissed { id: NotificationId },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Batch,
    Single,
}

/// Why a submission produced no results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailure {
    /// Network error or unreadable response.
    Transport,
    /// The collaborator answered with `success: false`.
    Rejected(String),
}

pub const TRANSPORT_ERROR_MESSAGE: &str = "Network error occurred. Please try again.";

impl SubmitFailure {
    pub fn message(&self) -> &str {
        match self {
            SubmitFailure::Transport => TRANSPORT_ERROR_MESSAGE,
            SubmitFailure::Rejected(message) => message,
        }
    }
}
