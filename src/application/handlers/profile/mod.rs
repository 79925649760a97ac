//! Profile handlers.
//!
//! ## Commands
//! - Editing profile details and the avatar
//!
//! ## Queries
//! - The signed-in user's profile

mod get_profile;
mod update_profile;

pub use get_profile::{GetProfileHandler, GetProfileQuery, GetProfileResult};
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler, UpdateProfileResult};

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

fn user_not_found(user_id: &UserId) -> DomainError {
    DomainError::new(ErrorCode::UserNotFound, format!("User {} not found", user_id))
        .with_detail("user_id", user_id.as_str())
}
