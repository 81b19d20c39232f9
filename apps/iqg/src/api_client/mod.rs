//! Analysis API client: the single point of entry for calls to the remote
//! interview-question service.
//!
//! One multipart POST per request, no automatic retries: every failure goes back to
//! the user, who decides whether to resubmit.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::models::GenerationResult;
use crate::normalize::parse_envelope;
use crate::upload::ResumeUpload;

pub const GENERATE_PATH: &str = "/api/interview-questions/generate";
/// Sent verbatim as the `num_questions_per_category` form field.
pub const QUESTIONS_PER_CATEGORY: &str = "5";

/// Everything needed to issue one generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub resume: ResumeUpload,
    pub job_description: Option<String>,
}

/// The analysis service seam. The binary uses `AnalysisClient`; tests substitute fakes.
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerationResult, AppError>;
}

#[derive(Clone)]
pub struct AnalysisClient {
    client: Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client, base_url })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{GENERATE_PATH}", self.base_url)
    }

    async fn build_form(request: &GenerateRequest) -> Result<Form, AppError> {
        let bytes = request.resume.read_bytes().await?;
        let part = Part::bytes(bytes)
            .file_name(request.resume.file_name.clone())
            .mime_str(request.resume.mime)?;

        let mut form = Form::new().part("resume_file", part);
        if let Some(jd) = request.job_description.as_deref().filter(|jd| !jd.is_empty()) {
            form = form.text("job_description", jd.to_string());
        }
        Ok(form.text("num_questions_per_category", QUESTIONS_PER_CATEGORY))
    }
}

#[async_trait]
impl AnalysisApi for AnalysisClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerationResult, AppError> {
        let form = Self::build_form(request).await?;
        let endpoint = self.endpoint();
        info!(
            "Submitting {} ({} bytes) to {endpoint}",
            request.resume.file_name, request.resume.size_bytes
        );

        let response = self.client.post(&endpoint).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Analysis API returned {}: {}", status, body);
            return Err(AppError::Http {
                status: status.as_u16(),
                message: extract_error_message(status.as_u16(), &body),
            });
        }

        debug!("Analysis API response: {} bytes", body.len());
        let value: Value = serde_json::from_str(&body).map_err(|e| {
            warn!("Analysis API returned non-JSON body: {e}");
            AppError::InvalidResponse
        })?;

        parse_envelope(&value)
    }
}

/// Best-effort message from a non-2xx body.
///
/// `error` may be a string or an object with `message`. A JSON body without either
/// falls back to the status; a body that is not JSON at all yields `Unknown error`.
pub fn extract_error_message(status: u16, body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return "Unknown error".to_string();
    };

    let from_error = match value.get("error") {
        Some(Value::String(msg)) => Some(msg.as_str()),
        Some(Value::Object(obj)) => obj.get("message").and_then(Value::as_str),
        _ => None,
    };

    from_error
        .filter(|msg| !msg.is_empty())
        .map(String::from)
        .unwrap_or_else(|| format!("HTTP error! status: {status}"))
}
