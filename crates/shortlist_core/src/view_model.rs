use crate::skills::{capitalize_all, SkillPreview, SINGLE_SKILL_LIMIT};
use crate::{AnalysisResult, ContactInfo, Notification, ResumeFile, ScoreView, SingleAnalysis};

pub const BATCH_SUBMIT_LABEL: &str = "Analyze All Resumes";
pub const BATCH_BUSY_LABEL: &str = "Processing...";
pub const SINGLE_SUBMIT_LABEL: &str = "Analyze Match";
pub const SINGLE_BUSY_LABEL: &str = "Analyzing...";
pub const NOT_AVAILABLE: &str = "Not available";
pub const NONE_IDENTIFIED: &str = "None identified";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub batch: BatchView,
    pub single: SingleView,
    pub notifications: Vec<Notification>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButtonView {
    pub enabled: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFileView {
    pub name: String,
    pub size_label: String,
}

impl From<&ResumeFile> for SelectedFileView {
    fn from(file: &ResumeFile) -> Self {
        Self {
            name: file.name.clone(),
            size_label: file.size_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchView {
    pub selected_files: Vec<SelectedFileView>,
    pub job_description: String,
    pub submit: SubmitButtonView,
    pub busy: bool,
    pub error: Option<String>,
    pub results_visible: bool,
    /// "Analyzed N resumes, sorted by match score" while results are shown.
    pub summary: Option<String>,
    /// One row per stored result, in stored order.
    pub rows: Vec<ResultRowView>,
    pub detail: Option<DetailView>,
}

impl Default for BatchView {
    fn default() -> Self {
        Self {
            selected_files: Vec::new(),
            job_description: String::new(),
            submit: SubmitButtonView {
                enabled: true,
                label: BATCH_SUBMIT_LABEL,
            },
            busy: false,
            error: None,
            results_visible: false,
            summary: None,
            rows: Vec::new(),
            detail: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRowView {
    /// Position in the result store; actions address rows by this.
    pub index: usize,
    pub rank: usize,
    pub filename: String,
    pub score: ScoreView,
    pub contact: ContactView,
    pub matched: SkillPreview,
    pub missing: SkillPreview,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactLine {
    Email(String),
    Phone(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactView {
    Lines(Vec<ContactLine>),
    NotAvailable,
}

impl ContactView {
    pub fn is_available(&self) -> bool {
        matches!(self, ContactView::Lines(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub index: usize,
    pub title: String,
    pub score: ScoreView,
    pub contact: ContactView,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub suggestions: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SingleView {
    pub selected_file: Option<SelectedFileView>,
    pub job_description: String,
    pub submit: SubmitButtonView,
    pub busy: bool,
    pub error: Option<String>,
    pub result: Option<SingleResultView>,
}

impl Default for SingleView {
    fn default() -> Self {
        Self {
            selected_file: None,
            job_description: String::new(),
            submit: SubmitButtonView {
                enabled: true,
                label: SINGLE_SUBMIT_LABEL,
            },
            busy: false,
            error: None,
            result: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleResultView {
    pub score: ScoreView,
    pub matched: SkillPreview,
    pub missing: SkillPreview,
    pub suggestions: String,
    /// `None` hides the contact section.
    pub contact: Option<ContactView>,
    /// `data:` URI for the score chart.
    pub visualization: Option<String>,
}

/// Project a contact block. Neither email nor phone yields `NotAvailable`.
pub fn project_contact(contact: Option<&ContactInfo>) -> ContactView {
    let Some(contact) = contact else {
        return ContactView::NotAvailable;
    };
    let mut lines = Vec::with_capacity(2);
    if let Some(email) = contact.email() {
        lines.push(ContactLine::Email(email.to_string()));
    }
    if let Some(phone) = contact.phone() {
        lines.push(ContactLine::Phone(phone.to_string()));
    }
    if lines.is_empty() {
        ContactView::NotAvailable
    } else {
        ContactView::Lines(lines)
    }
}

/// Table row for the result at `index` (rank is `index + 1`).
pub fn project_row(index: usize, result: &AnalysisResult) -> ResultRowView {
    ResultRowView {
        index,
        rank: index + 1,
        filename: result.filename.clone(),
        score: ScoreView::from_raw(result.match_score),
        contact: project_contact(result.contact_info.as_ref()),
        matched: SkillPreview::row(&result.common_skills),
        missing: SkillPreview::row(&result.missing_skills),
    }
}

pub fn project_detail(index: usize, result: &AnalysisResult) -> DetailView {
    DetailView {
        index,
        title: format!("Detailed Analysis: {}", result.filename),
        score: ScoreView::from_raw(result.match_score),
        contact: project_contact(result.contact_info.as_ref()),
        matched: capitalize_all(&result.common_skills),
        missing: capitalize_all(&result.missing_skills),
        suggestions: result.suggestions.clone(),
    }
}

pub fn batch_summary(total_resumes: usize) -> String {
    format!("Analyzed {total_resumes} resumes, sorted by match score")
}

pub fn project_single(analysis: &SingleAnalysis) -> SingleResultView {
    let contact = project_contact(analysis.contact_info.as_ref());
    SingleResultView {
        score: ScoreView::from_raw(analysis.match_score),
        matched: SkillPreview::new(&analysis.skills_analysis.common_skills, SINGLE_SKILL_LIMIT),
        missing: SkillPreview::new(&analysis.skills_analysis.missing_skills, SINGLE_SKILL_LIMIT),
        suggestions: analysis.suggestions.clone(),
        contact: contact.is_available().then_some(contact),
        visualization: analysis
            .visualization
            .as_deref()
            .filter(|data| !data.is_empty())
            .map(|data| format!("data:image/png;base64,{data}")),
    }
}

/// Trailer under a capped single-result skill list: `"and 4 more..."`.
pub fn single_remainder_note(preview: &SkillPreview) -> Option<String> {
    match preview.remaining() {
        0 => None,
        n => Some(format!("and {n} more...")),
    }
}
