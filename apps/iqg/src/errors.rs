use thiserror::Error;

/// Shown when the request never produced an HTTP response.
pub const BACKEND_UNREACHABLE_MESSAGE: &str =
    "Failed to generate questions. Please check if the backend is running.";
pub const EXPORT_FAILED_MESSAGE: &str = "Failed to generate PDF. Please try again.";
pub const CLIPBOARD_FAILED_MESSAGE: &str = "Failed to copy to clipboard.";

/// Application-level error type.
/// `user_message` maps each variant to the text shown inline or in a notice.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client-side validation failure. The payload is already user-facing.
    #[error("{0}")]
    Validation(String),

    #[error("HTTP error (status {status}): {message}")]
    Http { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response from server")]
    InvalidResponse,

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Text suitable for the inline error line or a blocking notice.
    /// Internal details are logged here and never shown.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Http { message, .. } => message.clone(),
            AppError::Transport(e) => {
                tracing::error!("Transport error: {e}");
                BACKEND_UNREACHABLE_MESSAGE.to_string()
            }
            AppError::InvalidResponse => self.to_string(),
            AppError::Clipboard(msg) => {
                tracing::error!("Clipboard error: {msg}");
                CLIPBOARD_FAILED_MESSAGE.to_string()
            }
            AppError::Export(msg) => {
                tracing::error!("Export error: {msg}");
                EXPORT_FAILED_MESSAGE.to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                BACKEND_UNREACHABLE_MESSAGE.to_string()
            }
        }
    }

    /// Process exit code used by the binary when a request ends in this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_passed_through() {
        let err = AppError::Validation("Please upload a PDF or DOCX file".to_string());
        assert_eq!(err.user_message(), "Please upload a PDF or DOCX file");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_http_message_is_server_text() {
        let err = AppError::Http {
            status: 422,
            message: "Could not parse resume".to_string(),
        };
        assert_eq!(err.user_message(), "Could not parse resume");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_invalid_response_message() {
        assert_eq!(
            AppError::InvalidResponse.user_message(),
            "Invalid response from server"
        );
    }

    #[test]
    fn test_export_failure_hides_details() {
        let err = AppError::Export("disk full".to_string());
        assert_eq!(err.user_message(), EXPORT_FAILED_MESSAGE);
    }
}
