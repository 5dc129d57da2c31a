// SPDX-License-Identifier: MIT
// Copyright 2026 The FitTracker Authors

//! Client error types with consistent user-facing messages.

use serde::Serialize;

/// Error surfaced by the activity client and caught by the view state machines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid activity: {0}")]
    Validation(String),

    #[error("Authentication required: {0}")]
    Auth(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Backend request failed: {0}")]
    Network(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

/// Kind tag of a [`ClientError`], without the diagnostic detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    Validation,
    Auth,
    NotFound,
    Network,
    Unknown,
}

impl ClientError {
    pub const NETWORK_MESSAGE: &'static str =
        "Unable to reach the fitness service. Check your connection and try again.";
    pub const AUTH_MESSAGE: &'static str = "Your session has expired. Please log in again.";
    pub const NOT_FOUND_MESSAGE: &'static str = "This activity could not be found.";
    pub const GENERIC_MESSAGE: &'static str = "Something went wrong. Please try again.";

    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Validation(_) => ErrorKind::Validation,
            ClientError::Auth(_) => ErrorKind::Auth,
            ClientError::NotFound(_) => ErrorKind::NotFound,
            ClientError::Network(_) => ErrorKind::Network,
            ClientError::Unknown(_) => ErrorKind::Unknown,
        }
    }

    /// Message shown to the user in place of the failed content.
    ///
    /// Validation errors carry their own text (it names the offending
    /// field); every other kind maps to a fixed sentence.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation(msg) => msg.clone(),
            ClientError::Auth(_) => Self::AUTH_MESSAGE.to_string(),
            ClientError::NotFound(_) => Self::NOT_FOUND_MESSAGE.to_string(),
            ClientError::Network(_) => Self::NETWORK_MESSAGE.to_string(),
            ClientError::Unknown(_) => Self::GENERIC_MESSAGE.to_string(),
        }
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self, ClientError::Auth(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Unknown(format!("Malformed response: {}", err))
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let messages: Vec<String> = fields
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .collect();

        ClientError::Validation(messages.join("; "))
    }
}

impl From<anyhow::Error> for ClientError {
    fn from(err: anyhow::Error) -> Self {
        ClientError::Unknown(format!("{:#}", err))
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
