//! Strongly-typed identifier value objects.
//!
//! Identifiers in the marketplace are opaque strings (`SUB001`, `PROD003`,
//! user `2`), so every id wraps a non-empty `String` rather than a UUID.
//! Freshly generated ids still draw their entropy from UUID v4.
//!
//! Deserialization goes through the same checks as `new`, so a stored
//! record with a blank id fails to load instead of yielding an invalid id.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a subscription record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubscriptionId(String);

impl SubscriptionId {
    /// Wraps a compile-time literal id used by the built-in demo data.
    pub(crate) fn from_static(id: &'static str) -> Self {
        Self(id.to_string())
    }

    /// Creates a SubscriptionId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("subscription_id"));
        }
        Ok(Self(id))
    }

    /// Generates a fresh identifier of the form `SUB<hex>`.
    pub fn generate() -> Self {
        let suffix = Uuid::new_v4().simple().to_string().to_uppercase();
        Self(format!("SUB{}", &suffix[..16]))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User identifier (from the login context).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Wraps a compile-time literal id used by the built-in demo data.
    pub(crate) fn from_static(id: &'static str) -> Self {
        Self(id.to_string())
    }

    /// Creates a new UserId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("user_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Wraps a compile-time literal id used by the built-in demo data.
    pub(crate) fn from_static(id: &'static str) -> Self {
        Self(id.to_string())
    }

    /// Creates a ProductId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("product_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a favorites entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FavoriteId(String);

impl FavoriteId {
    /// Creates a FavoriteId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("favorite_id"));
        }
        Ok(Self(id))
    }

    /// Generates a fresh identifier of the form `fav<hex>`.
    pub fn generate() -> Self {
        Self(format!("fav{}", Uuid::new_v4().simple()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FavoriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! string_conversions {
    ($($id:ident),+) => {
        $(
            impl TryFrom<String> for $id {
                type Error = ValidationError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    Self::new(value)
                }
            }

            impl From<$id> for String {
                fn from(id: $id) -> Self {
                    id.0
                }
            }
        )+
    };
}

string_conversions!(SubscriptionId, UserId, ProductId, FavoriteId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_id_generates_unique_values() {
        let id1 = SubscriptionId::generate();
        let id2 = SubscriptionId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn subscription_id_generate_uses_sub_prefix() {
        let id = SubscriptionId::generate();
        assert!(id.as_str().starts_with("SUB"));
        assert_eq!(id.as_str().len(), 19);
    }

    #[test]
    fn subscription_id_accepts_legacy_values() {
        let id = SubscriptionId::new("SUB001").unwrap();
        assert_eq!(id.to_string(), "SUB001");
    }

    #[test]
    fn subscription_id_rejects_blank_string() {
        match SubscriptionId::new("  ") {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "subscription_id"),
            other => panic!("Expected EmptyField error, got {:?}", other),
        }
    }

    #[test]
    fn subscription_id_serializes_as_plain_string() {
        let id = SubscriptionId::new("SUB002").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"SUB002\"");
    }

    #[test]
    fn user_id_accepts_non_empty_string() {
        let id = UserId::new("2").unwrap();
        assert_eq!(id.as_str(), "2");
    }

    #[test]
    fn user_id_rejects_empty_string() {
        let result = UserId::new("");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "user_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn product_id_rejects_empty_string() {
        assert!(ProductId::new("").is_err());
    }

    #[test]
    fn favorite_id_uses_fav_prefix() {
        assert!(FavoriteId::generate().as_str().starts_with("fav"));
    }

    #[test]
    fn subscription_id_deserializes_valid_string() {
        let id: SubscriptionId = serde_json::from_str("\"SUB002\"").unwrap();
        assert_eq!(id, SubscriptionId::new("SUB002").unwrap());
    }

    #[test]
    fn blank_ids_fail_to_deserialize() {
        assert!(serde_json::from_str::<SubscriptionId>("\"\"").is_err());
        assert!(serde_json::from_str::<SubscriptionId>("\"   \"").is_err());
        assert!(serde_json::from_str::<UserId>("\"\"").is_err());
        assert!(serde_json::from_str::<ProductId>("\"\"").is_err());
        assert!(serde_json::from_str::<FavoriteId>("\"\"").is_err());
    }

    #[test]
    fn deserialize_error_names_the_field() {
        let err = serde_json::from_str::<UserId>("\"\"").unwrap_err();
        assert!(err.to_string().contains("user_id"), "got {}", err);
    }
}
