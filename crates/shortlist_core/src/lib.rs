//! Shortlist core: pure state machine, result store and view-model projection
//! for the resume shortlisting client.
mod effect;
mod model;
mod msg;
mod notification;
mod sample;
mod score;
mod skills;
mod state;
mod store;
mod update;
mod validate;
mod view_model;

pub use effect::{Effect, ExportFormat};
pub use model::{
    AnalysisResult, BatchResultSet, ContactInfo, RequestId, ResumeFile, SingleAnalysis,
    SkillsAnalysis,
};
pub use msg::{Form, Msg, SubmitFailure, TRANSPORT_ERROR_MESSAGE};
pub use notification::{Notification, NotificationId, NotificationLevel, NOTIFICATION_TTL};
pub use sample::SampleJob;
pub use score::{round_score, ScoreTier, ScoreView};
pub use skills::{capitalize_words, SkillPreview, SINGLE_SKILL_LIMIT, SKILL_PREVIEW_LIMIT};
pub use state::{AppState, Panel};
pub use store::ResultStore;
pub use update::{update, NO_RESULTS_MESSAGE, SAMPLE_LOADED_MESSAGE};
pub use validate::{
    is_pdf_name, validate_batch, validate_single, ValidationError, MAX_RESUME_BYTES,
    MIN_JOB_DESCRIPTION_CHARS,
};
pub use view_model::{
    batch_summary, project_contact, project_detail, project_row, project_single,
    single_remainder_note, AppViewModel, BatchView, ContactLine, ContactView, DetailView,
    ResultRowView, SelectedFileView, SingleResultView, SingleView, SubmitButtonView,
    BATCH_BUSY_LABEL, BATCH_SUBMIT_LABEL, NONE_IDENTIFIED, NOT_AVAILABLE, SINGLE_BUSY_LABEL,
    SINGLE_SUBMIT_LABEL,
};
