//! User types.

use crate::AuthError;
use serde::{Deserialize, Serialize};
use shop_commerce::ids::UserId;

/// A shopper signed in with a Google account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoogleUser {
    /// Google account id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Avatar URL.
    pub image_url: String,
}

impl GoogleUser {
    /// Build a user from the sign-in widget's profile fields.
    ///
    /// An email is required; the header falls back to it when there is no
    /// name.
    pub fn from_profile(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Result<Self, AuthError> {
        let email = email.into();
        if !email.contains('@') {
            return Err(AuthError::InvalidProfile(format!("bad email: {email}")));
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            email,
            image_url: image_url.into(),
        })
    }

    /// Parse the profile JSON handed over by the sign-in widget.
    pub fn from_json(json: &str) -> Result<Self, AuthError> {
        let user: GoogleUser = serde_json::from_str(json)?;
        Self::from_profile(user.id, user.name, user.email, user.image_url)
    }

    /// Get display name.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_profile() {
        let user = GoogleUser::from_profile("g-1", "Ada", "ada@example.com", "https://img/ada.png").unwrap();
        assert_eq!(user.display_name(), "Ada");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = GoogleUser::from_profile("g-1", "", "ada@example.com", "").unwrap();
        assert_eq!(user.display_name(), "ada@example.com");
    }

    #[test]
    fn test_rejects_bad_email() {
        let err = GoogleUser::from_profile("g-1", "Ada", "nope", "").unwrap_err();
        assert!(err.is_auth_failure());
    }

    #[test]
    fn test_from_widget_json() {
        let json = r#"{"id":"g-9","name":"Lin","email":"lin@example.com","imageUrl":"https://img/lin.png"}"#;
        let user = GoogleUser::from_json(json).unwrap();
        assert_eq!(user.image_url, "https://img/lin.png");
    }
}
