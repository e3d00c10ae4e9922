//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The sign-in widget returned a profile we cannot use.
    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    /// Sign-out requested with nobody signed in.
    #[error("no user signed in")]
    NotSignedIn,

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl AuthError {
    /// Check if this is an authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AuthError::InvalidProfile(_) | AuthError::NotSignedIn)
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(e: serde_json::Error) -> Self {
        AuthError::Serialization(e.to_string())
    }
}
