//! String-backed identifiers.
//!
//! Products and advertisements share one display sequence, so keeping their
//! identifiers apart at the type level matters more than usual here.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }
    };
}

string_id!(
    /// Catalogue entry, e.g. `lure-001`.
    ProductId
);
string_id!(
    /// Sponsored card in the advert pool. Two pool slots may share one.
    AdvertId
);
string_id!(
    /// Signed-in shopper, as issued by the identity provider.
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_convert_from_strings() {
        let id: AdvertId = "ad-7".into();
        assert_eq!(id.to_string(), "ad-7");
        assert_eq!(ProductId::from(String::from("lure-001")).as_str(), "lure-001");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ProductId::new("lure-042")).unwrap();
        assert_eq!(json, "\"lure-042\"");
    }
}
