//! Transport-level failures of a completion request

use thiserror::Error;

/// Everything that can go wrong between sending a prompt and reading its reply
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("no API key configured (set OPENAI_API_KEY or api_key in config.json)")]
    MissingApiKey,
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("completion API returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

impl TransportError {
    /// Short message suitable for the error dialog
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingApiKey => {
                "No API key configured. Set OPENAI_API_KEY and try again.".to_string()
            }
            Self::Http(_) => "Could not reach the pricing service.".to_string(),
            Self::Status { status, .. } => format!("The pricing service answered with {status}."),
            Self::MalformedResponse(_) => "The pricing service sent an unreadable reply.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_includes_code_and_body() {
        let err = TransportError::Status {
            status: 401,
            body: "invalid key".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "completion API returned status 401: invalid key"
        );
    }

    #[test]
    fn test_user_message_does_not_leak_body() {
        let err = TransportError::Status {
            status: 500,
            body: "stack trace".to_string(),
        };
        let message = err.user_message();
        assert!(message.contains("500"));
        assert!(!message.contains("stack trace"));
    }

    #[test]
    fn test_missing_api_key_message() {
        assert!(TransportError::MissingApiKey
            .user_message()
            .contains("OPENAI_API_KEY"));
    }
}
