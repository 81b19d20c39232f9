//! Resume file selection and client-side validation.

use std::path::{Path, PathBuf};

use crate::errors::AppError;

pub const MAX_RESUME_BYTES: u64 = 10 * 1024 * 1024;

pub const UNSUPPORTED_TYPE_MESSAGE: &str = "Please upload a PDF or DOCX file";
pub const TOO_LARGE_MESSAGE: &str = "File size must be less than 10MB";
pub const MISSING_FILE_MESSAGE: &str = "Please upload a resume file";

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A file the user picked, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub file_name: String,
    pub size_bytes: u64,
}

impl FileCandidate {
    /// Reads name and size from the filesystem.
    pub async fn from_path(path: &Path) -> Result<Self, AppError> {
        let metadata = tokio::fs::metadata(path).await.map_err(|e| {
            AppError::Validation(format!("Cannot read {}: {e}", path.display()))
        })?;
        if !metadata.is_file() {
            return Err(AppError::Validation(format!(
                "{} is not a file",
                path.display()
            )));
        }
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            size_bytes: metadata.len(),
        })
    }
}

/// A validated resume, ready to be attached to a request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeUpload {
    pub path: PathBuf,
    pub file_name: String,
    pub size_bytes: u64,
    pub mime: &'static str,
}

impl ResumeUpload {
    pub async fn read_bytes(&self) -> Result<Vec<u8>, AppError> {
        tokio::fs::read(&self.path).await.map_err(|e| {
            AppError::Validation(format!("Cannot read {}: {e}", self.path.display()))
        })
    }
}

/// Checks extension (case-insensitive `.pdf` / `.docx`) and size (≤ 10 MiB).
pub fn validate_resume(candidate: FileCandidate) -> Result<ResumeUpload, AppError> {
    let lower = candidate.file_name.to_lowercase();
    let mime = if lower.ends_with(".pdf") {
        PDF_MIME
    } else if lower.ends_with(".docx") {
        DOCX_MIME
    } else {
        return Err(AppError::Validation(UNSUPPORTED_TYPE_MESSAGE.to_string()));
    };

    if candidate.size_bytes > MAX_RESUME_BYTES {
        return Err(AppError::Validation(TOO_LARGE_MESSAGE.to_string()));
    }

    Ok(ResumeUpload {
        path: candidate.path,
        file_name: candidate.file_name,
        size_bytes: candidate.size_bytes,
        mime,
    })
}
