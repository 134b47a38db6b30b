use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shortlist_core::{BatchResultSet, ResumeFile, SingleAnalysis};
use shortlist_logging::{shortlist_debug, shortlist_info};
use url::Url;

use crate::{FailureKind, SubmitError};

/// Message used when the collaborator reports failure without saying why.
pub const UNSPECIFIED_FAILURE: &str = "Analysis failed.";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub batch_path: String,
    pub single_path: String,
    pub connect_timeout: Duration,
    /// Whole-request limit. `None` waits for the collaborator indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            batch_path: "/batch_upload".to_string(),
            single_path: "/upload".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

/// The remote scoring service.
#[async_trait::async_trait]
pub trait ScoringClient: Send + Sync {
    async fn analyze_batch(
        &self,
        resumes: &[ResumeFile],
        job_description: &str,
    ) -> Result<BatchResultSet, SubmitError>;

    async fn analyze_single(
        &self,
        resume: &ResumeFile,
        job_description: &str,
    ) -> Result<SingleAnalysis, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestScoringClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestScoringClient {
    pub fn new(settings: ClientSettings) -> Result<Self, SubmitError> {
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| SubmitError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, SubmitError> {
        Url::parse(&self.settings.base_url)
            .and_then(|base| base.join(path))
            .map_err(|err| SubmitError::new(FailureKind::InvalidEndpoint, err.to_string()))
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T, SubmitError> {
        let url = self.endpoint(path)?;
        let response = self
            .client
            .post(url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // Errors such as 413 still carry an envelope, so the status is only logged.
        shortlist_debug!("POST {} -> {}", url, response.status());

        let body = response.text().await.map_err(map_reqwest_error)?;
        decode_envelope(&body)
    }
}

#[async_trait::async_trait]
impl ScoringClient for ReqwestScoringClient {
    async fn analyze_batch(
        &self,
        resumes: &[ResumeFile],
        job_description: &str,
    ) -> Result<BatchResultSet, SubmitError> {
        shortlist_info!("submitting batch of {} resumes", resumes.len());
        let mut form = Form::new().text("job_description", job_description.to_owned());
        for resume in resumes {
            form = form.part("resumes", resume_part(resume)?);
        }
        let set: BatchResultSet = self.post(&self.settings.batch_path, form).await?;
        shortlist_info!(
            "batch scored: {} results (total_resumes={})",
            set.results.len(),
            set.total_resumes
        );
        Ok(set)
    }

    async fn analyze_single(
        &self,
        resume: &ResumeFile,
        job_description: &str,
    ) -> Result<SingleAnalysis, SubmitError> {
        shortlist_info!("submitting single resume {}", resume.name);
        let form = Form::new()
            .text("job_description", job_description.to_owned())
            .part("resume", resume_part(resume)?);
        self.post(&self.settings.single_path, form).await
    }
}

fn resume_part(resume: &ResumeFile) -> Result<Part, SubmitError> {
    Part::bytes(resume.data.to_vec())
        .file_name(resume.name.clone())
        .mime_str("application/pdf")
        .map_err(|err| SubmitError::new(FailureKind::Network, err.to_string()))
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    data: Option<T>,
    #[serde(default)]
    error: Option<String>,
}

/// Unwrap `{ success, data?, error? }` into the payload or a failure.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, SubmitError> {
    let envelope: Envelope<T> = serde_json::from_str(body)
        .map_err(|err| SubmitError::new(FailureKind::Malformed, err.to_string()))?;

    if !envelope.success {
        let message = envelope
            .error
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| UNSPECIFIED_FAILURE.to_string());
        return Err(SubmitError::new(FailureKind::Rejected, message));
    }

    envelope
        .data
        .ok_or_else(|| SubmitError::new(FailureKind::Malformed, "success without data"))
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        return SubmitError::new(FailureKind::Timeout, err.to_string());
    }
    SubmitError::new(FailureKind::Network, err.to_string())
}
