//! Client Errors
//!
//! Failure taxonomy for remote calls and the policy the UI applies to it.

use thiserror::Error;

/// Common result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Banner shown when the server rejects a request as malformed
pub const BAD_REQUEST_MESSAGE: &str = "Something went wrong with that request. Please try again.";

/// Banner shown when sign-in is rejected
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Rejected locally, no request was sent
    #[error("item name cannot be empty")]
    EmptyName,

    /// Server answered with a non-success status
    #[error("server responded with status {status}")]
    Status {
        status: u16,
        /// Response body, if any
        message: Option<String>,
    },

    #[error("network error: {0}")]
    Transport(String),

    #[error("invalid response: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Status {
            status,
            message: (!message.is_empty()).then_some(message),
        }
    }

    /// HTTP status, when the failure came from the server
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

/// What the UI does about a failed call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureAction {
    /// Session is no longer valid: clear it and go to the login route
    RedirectToLogin,
    /// Surface a static message
    ShowBanner(&'static str),
    /// Not surfaced
    Ignore,
}

impl FailureAction {
    pub fn for_error(err: &ClientError) -> Self {
        match err.status_code() {
            Some(401) => FailureAction::RedirectToLogin,
            Some(400) => FailureAction::ShowBanner(BAD_REQUEST_MESSAGE),
            _ => FailureAction::Ignore,
        }
    }

    /// Sign-in variant: a 401 there means bad credentials
    pub fn for_sign_in(err: &ClientError) -> Self {
        if err.is_unauthorized() {
            FailureAction::ShowBanner(INVALID_CREDENTIALS_MESSAGE)
        } else {
            Self::for_error(err)
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
