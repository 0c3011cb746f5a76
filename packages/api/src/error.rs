//! Errors surfaced by calls to the diary backend.
//!
//! The backend reports failures as either `{"message": "..."}` or, for field
//! validation, `{"errors": [{"msg": "..."}, ...]}`. [`extract_message`] turns
//! both shapes into a single displayable string; anything else falls back to
//! [`GENERIC_ERROR`].

use serde::Deserialize;
use thiserror::Error;

/// Shown when the backend gives no usable message.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response from the backend.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        ApiError::Backend {
            status,
            message: extract_message(body).unwrap_or_else(|| GENERIC_ERROR.to_string()),
        }
    }

    /// Text suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Backend { message, .. } => message.clone(),
            ApiError::Transport(_) | ApiError::Decode(_) => GENERIC_ERROR.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Backend { status: 401, .. })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    errors: Option<Vec<FieldError>>,
}

#[derive(Deserialize)]
struct FieldError {
    msg: Option<String>,
}

/// Pull a displayable message out of a backend error body.
///
/// A field error list wins over a flat message; its messages are joined with `", "`.
pub fn extract_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;

    if let Some(errors) = parsed.errors {
        let joined = errors
            .into_iter()
            .filter_map(|e| e.msg)
            .filter(|m| !m.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        if !joined.is_empty() {
            return Some(joined);
        }
    }

    parsed.message.filter(|m| !m.is_empty())
}
