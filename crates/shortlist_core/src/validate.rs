use thiserror::Error;

use crate::{NotificationLevel, ResumeFile};

/// Largest resume accepted for upload (16 MiB).
pub const MAX_RESUME_BYTES: u64 = 16 * 1024 * 1024;
/// Minimum job description length after trimming, in characters.
pub const MIN_JOB_DESCRIPTION_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select at least one resume file.")]
    NoResumes,
    #[error("Please select a resume file.")]
    MissingResume,
    #[error("Please provide a detailed job description (at least 50 characters).")]
    JobDescriptionTooShort { chars: usize },
    #[error("File \"{name}\" is too large. Maximum size is 16MB.")]
    FileTooLarge { name: String },
    #[error("File \"{name}\" is not a PDF. Only PDF files are allowed.")]
    NotPdf { name: String },
    #[error("File size too large. Maximum size is 16MB.")]
    ResumeTooLarge,
    #[error("Only PDF files are allowed.")]
    ResumeNotPdf,
}

impl ValidationError {
    /// Missing input is a warning; a bad file is a danger.
    pub fn level(&self) -> NotificationLevel {
        match self {
            ValidationError::NoResumes
            | ValidationError::MissingResume
            | ValidationError::JobDescriptionTooShort { .. } => NotificationLevel::Warning,
            ValidationError::FileTooLarge { .. }
            | ValidationError::NotPdf { .. }
            | ValidationError::ResumeTooLarge
            | ValidationError::ResumeNotPdf => NotificationLevel::Danger,
        }
    }
}

/// Gate a batch submission. Rules run in order and the first failure wins.
pub fn validate_batch(files: &[ResumeFile], job_description: &str) -> Result<(), ValidationError> {
    match files.first() {
        Some(first) if first.size() > 0 => {}
        _ => return Err(ValidationError::NoResumes),
    }

    check_job_description(job_description)?;

    for file in files {
        if file.size() > MAX_RESUME_BYTES {
            return Err(ValidationError::FileTooLarge {
                name: file.name.clone(),
            });
        }
        if !is_pdf_name(&file.name) {
            return Err(ValidationError::NotPdf {
                name: file.name.clone(),
            });
        }
    }

    Ok(())
}

/// Gate a single-resume submission.
pub fn validate_single(
    file: Option<&ResumeFile>,
    job_description: &str,
) -> Result<(), ValidationError> {
    let file = match file {
        Some(file) if file.size() > 0 => file,
        _ => return Err(ValidationError::MissingResume),
    };

    check_job_description(job_description)?;

    if file.size() > MAX_RESUME_BYTES {
        return Err(ValidationError::ResumeTooLarge);
    }
    if !is_pdf_name(&file.name) {
        return Err(ValidationError::ResumeNotPdf);
    }
    Ok(())
}

fn check_job_description(job_description: &str) -> Result<(), ValidationError> {
    let chars = job_description.trim().chars().count();
    if chars < MIN_JOB_DESCRIPTION_CHARS {
        return Err(ValidationError::JobDescriptionTooShort { chars });
    }
    Ok(())
}

pub fn is_pdf_name(name: &str) -> bool {
    name.len() >= 4
        && name
            .get(name.len() - 4..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(".pdf"))
}
