//! The sign-in collaborator seen by the header.

use std::sync::{Arc, RwLock};

use crate::user::GoogleUser;
use crate::AuthError;

/// Who is signed in, and sign-out.
///
/// Implemented by whatever bridges the third-party sign-in widget.
pub trait AuthProvider {
    /// The current user, if any.
    fn current_user(&self) -> Option<GoogleUser>;

    /// Record a completed sign-in.
    fn log_in(&self, user: GoogleUser);

    /// Sign the current user out.
    fn log_out(&self) -> Result<(), AuthError>;
}

/// Session-lifetime provider that keeps the user in memory.
///
/// Cloning shares the same session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuth {
    user: Arc<RwLock<Option<GoogleUser>>>,
}

impl InMemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a user already signed in.
    pub fn signed_in(user: GoogleUser) -> Self {
        Self {
            user: Arc::new(RwLock::new(Some(user))),
        }
    }
}

impl AuthProvider for InMemoryAuth {
    fn current_user(&self) -> Option<GoogleUser> {
        // A poisoned lock still holds a valid Option.
        match self.user.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn log_in(&self, user: GoogleUser) {
        let mut guard = match self.user.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(user);
    }

    fn log_out(&self) -> Result<(), AuthError> {
        let mut guard = match self.user.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.take().map(|_| ()).ok_or(AuthError::NotSignedIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> GoogleUser {
        GoogleUser::from_profile("g-1", "Ada", "ada@example.com", "").unwrap()
    }

    #[test]
    fn test_starts_signed_out() {
        assert!(InMemoryAuth::new().current_user().is_none());
    }

    #[test]
    fn test_log_in_then_out() {
        let auth = InMemoryAuth::new();
        auth.log_in(ada());
        assert_eq!(auth.current_user().map(|u| u.email), Some("ada@example.com".to_string()));

        auth.log_out().unwrap();
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn test_log_out_when_signed_out() {
        assert_eq!(InMemoryAuth::new().log_out(), Err(AuthError::NotSignedIn));
    }

    #[test]
    fn test_clones_share_session() {
        let auth = InMemoryAuth::signed_in(ada());
        let other = auth.clone();
        other.log_out().unwrap();
        assert!(auth.current_user().is_none());
    }
}
