//! Authentication collaborator for the lure shop.
//!
//! The Google sign-in protocol itself lives in a third-party widget. This
//! crate only models the signed-in user and the two calls the header needs:
//! who is signed in, and sign out.

mod error;
mod provider;
mod user;

pub use error::AuthError;
pub use provider::{AuthProvider, InMemoryAuth};
pub use user::GoogleUser;
