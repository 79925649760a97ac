//! The two built-in accounts.

use super::{UserProfile, UserRole};
use crate::domain::foundation::UserId;

/// Base records of the administrator (`1`) and the demo customer (`2`).
pub fn demo_profiles() -> Vec<UserProfile> {
    vec![
        UserProfile {
            id: UserId::from_static("1"),
            username: "admin".to_string(),
            role: UserRole::Admin,
            email: "admin@unicom.com".to_string(),
            phone: "138****1234".to_string(),
            company: "Unicom Digital Technology Co., Ltd.".to_string(),
            department: "Management".to_string(),
            position: "System Administrator".to_string(),
            join_date: "2020-01-01".to_string(),
            avatar: String::new(),
            bio: "System administrator, responsible for running and maintaining the platform."
                .to_string(),
        },
        UserProfile {
            id: UserId::from_static("2"),
            username: "user".to_string(),
            role: UserRole::User,
            email: "user@unicom.com".to_string(),
            phone: "138****5678".to_string(),
            company: "Unicom Digital Technology Co., Ltd.".to_string(),
            department: "Research and Development".to_string(),
            position: "Senior Software Engineer".to_string(),
            join_date: "2021-06-15".to_string(),
            avatar: String::new(),
            bio: "Senior engineer focused on data analysis and visualization.".to_string(),
        },
    ]
}
