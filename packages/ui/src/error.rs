use api::ApiError;
use store::ValidationError;
use thiserror::Error;

/// Why a form submission did not go through.
#[derive(Debug, Error)]
pub enum FormError {
    /// Rejected locally; no request was made.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("could not save session: {0}")]
    Store(#[from] store::StoreError),
}

impl FormError {
    /// Text to put in front of the user.
    pub fn message(&self) -> String {
        match self {
            FormError::Invalid(e) => e.to_string(),
            FormError::Api(e) => e.user_message(),
            FormError::Store(_) => api::GENERIC_ERROR.to_string(),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, FormError::Invalid(_))
    }
}
