//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier, never reused
    #[schema(example = 1)]
    pub id: i32,
    /// Unique public nickname
    #[schema(example = "alice")]
    pub nickname: String,
    /// User id on the originating messaging platform
    #[schema(example = "1001")]
    pub external_uid: String,
    #[schema(example = 0)]
    pub coins: i32,
    #[schema(example = 0)]
    pub rating: i32,
    pub last_login: DateTime<Utc>,
    pub last_logout: DateTime<Utc>,
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 50, message = "nickname must be 1 to 50 characters"))]
    #[schema(example = "alice", min_length = 1, max_length = 50)]
    pub nickname: String,
    #[validate(length(min = 1, max = 20, message = "external_uid must be 1 to 20 characters"))]
    #[schema(example = "1001", min_length = 1, max_length = 20)]
    pub external_uid: String,
    /// Starting coins (defaults to 0)
    #[validate(range(min = 0, message = "coins must not be negative"))]
    #[serde(default)]
    pub coins: Option<i32>,
    /// Starting rating (defaults to 0)
    #[validate(range(min = 0, message = "rating must not be negative"))]
    #[serde(default)]
    pub rating: Option<i32>,
}

impl CreateUser {
    pub fn new(nickname: impl Into<String>, external_uid: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            external_uid: external_uid.into(),
            coins: None,
            rating: None,
        }
    }
}

/// Partial user update; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateUser {
    #[validate(range(min = 0, message = "coins must not be negative"))]
    #[schema(example = 50)]
    pub coins: Option<i32>,
    #[validate(range(min = 0, message = "rating must not be negative"))]
    #[schema(example = 10)]
    pub rating: Option<i32>,
}

/// Aggregate counters over the user table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserStats {
    /// All stored users
    pub total: u64,
    /// Users whose last login falls inside the online window
    pub online: u64,
    /// Users above both the coin and rating thresholds
    pub unique: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_EXTERNAL_UID_LENGTH, MAX_NICKNAME_LENGTH};

    #[test]
    fn test_create_user_rejects_unknown_fields() {
        let result = serde_json::from_str::<CreateUser>(
            r#"{"nickname":"alice","external_uid":"1001","role":"admin"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_create_user_optional_counters() {
        let input: CreateUser =
            serde_json::from_str(r#"{"nickname":"alice","external_uid":"1001"}"#).unwrap();
        assert_eq!(input.coins, None);
        assert_eq!(input.rating, None);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_create_user_length_limits() {
        let too_long = CreateUser::new("n".repeat(51), "1001");
        assert!(too_long.validate().is_err());

        let empty_uid = CreateUser::new("alice", "");
        assert!(empty_uid.validate().is_err());
    }

    #[test]
    fn test_update_user_rejects_negative_values() {
        let update = UpdateUser {
            coins: Some(-1),
            rating: None,
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_update_user_rejects_identity_fields() {
        let result = serde_json::from_str::<UpdateUser>(r#"{"nickname":"mallory"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_length_limits_match_constants() {
        let nickname = MAX_NICKNAME_LENGTH as usize;
        let uid = MAX_EXTERNAL_UID_LENGTH as usize;

        assert!(CreateUser::new("n".repeat(nickname), "1".repeat(uid))
            .validate()
            .is_ok());
        assert!(CreateUser::new("n".repeat(nickname + 1), "1001")
            .validate()
            .is_err());
        assert!(CreateUser::new("alice", "1".repeat(uid + 1))
            .validate()
            .is_err());
    }

    #[test]
    fn test_empty_update() {
        let update: UpdateUser = serde_json::from_str("{}").unwrap();
        assert_eq!(update, UpdateUser::default());
        assert!(update.validate().is_ok());
    }
}
