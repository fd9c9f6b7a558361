use crate::errors::PrintwatchError;

/// Error for one failed poll. Always contained at the tick boundary: the
/// caller logs it and waits for the next scheduled tick.
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },

    #[error("Request to '{url}' failed: {message}")]
    Transport { url: String, message: String },

    #[error("Status endpoint returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Failed to decode status payload: {message}")]
    Decode { message: String },
}

impl PrintwatchError for PollError {
    fn error_code(&self) -> &'static str {
        match self {
            PollError::ClientBuild { .. } => "POLL_CLIENT_BUILD_FAILED",
            PollError::Transport { .. } => "POLL_TRANSPORT_FAILED",
            PollError::HttpStatus { .. } => "POLL_HTTP_STATUS",
            PollError::Decode { .. } => "POLL_DECODE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        false
    }
}
