//! Profile domain module.
//!
//! A user's profile is the built-in account record with the user's own edits
//! laid over it. Edits are kept apart from the base record as a
//! [`ProfileUpdate`], so only the fields a user actually changed are stored.

pub mod seed;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{UserId, ValidationError};

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

/// Profile shown on the account page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub role: UserRole,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    /// Calendar date the account was opened, `YYYY-MM-DD`. Not editable.
    #[serde(default)]
    pub join_date: String,
    /// Image URL or data URL. Empty when the user has no avatar.
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub bio: String,
}

/// Partial edit of a profile. `None` leaves the field as it is.
///
/// The id, role and join date are not part of an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl ProfileUpdate {
    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns true if the avatar is the only field set.
    pub fn is_avatar_only(&self) -> bool {
        self.avatar.is_some()
            && Self {
                avatar: None,
                ..self.clone()
            }
            .is_empty()
    }

    /// Checks the fields that are set.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the username is set to a blank string
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(username) = &self.username {
            if username.trim().is_empty() {
                return Err(ValidationError::empty_field("username"));
            }
        }
        Ok(())
    }

    /// Combines two updates. Fields set in `newer` win.
    pub fn merged_with(self, newer: ProfileUpdate) -> ProfileUpdate {
        ProfileUpdate {
            username: newer.username.or(self.username),
            email: newer.email.or(self.email),
            phone: newer.phone.or(self.phone),
            company: newer.company.or(self.company),
            department: newer.department.or(self.department),
            position: newer.position.or(self.position),
            avatar: newer.avatar.or(self.avatar),
            bio: newer.bio.or(self.bio),
        }
    }

    /// Returns `base` with the set fields replaced.
    pub fn apply_to(&self, base: &UserProfile) -> UserProfile {
        let pick = |edit: &Option<String>, current: &String| {
            edit.clone().unwrap_or_else(|| current.clone())
        };
        UserProfile {
            id: base.id.clone(),
            username: pick(&self.username, &base.username),
            role: base.role,
            email: pick(&self.email, &base.email),
            phone: pick(&self.phone, &base.phone),
            company: pick(&self.company, &base.company),
            department: pick(&self.department, &base.department),
            position: pick(&self.position, &base.position),
            join_date: base.join_date.clone(),
            avatar: pick(&self.avatar, &base.avatar),
            bio: pick(&self.bio, &base.bio),
        }
    }
}
