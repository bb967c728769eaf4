use std::sync::LazyLock;

use regex::Regex;

use super::errors::UserError;
use crate::domain::shared::value_objects::UserId;

pub const MAX_USERNAME_LENGTH: usize = 150;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_NAME_LENGTH: usize = 150;

static USERNAME_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[\w.@+-]+$").ok());
static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

/// Public profile attached to the subject of a bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// A profile as seen by another user.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub profile: UserProfile,
    pub is_subscribed: bool,
}

fn matches(pattern: &LazyLock<Option<Regex>>, value: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(value))
}

impl UserProfile {
    pub fn new(
        id: UserId,
        email: String,
        username: String,
        first_name: String,
        last_name: String,
    ) -> Result<Self, UserError> {
        let email = email.trim().to_lowercase();
        let username = username.trim().to_string();
        let first_name = first_name.trim().to_string();
        let last_name = last_name.trim().to_string();

        if email.chars().count() > MAX_EMAIL_LENGTH || !matches(&EMAIL_PATTERN, &email) {
            return Err(UserError::EmailInvalid);
        }
        if username.chars().count() > MAX_USERNAME_LENGTH
            || !matches(&USERNAME_PATTERN, &username)
        {
            return Err(UserError::UsernameInvalid);
        }
        if first_name.chars().count() > MAX_NAME_LENGTH
            || last_name.chars().count() > MAX_NAME_LENGTH
        {
            return Err(UserError::NameTooLong);
        }

        Ok(Self {
            id,
            email,
            username,
            first_name,
            last_name,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: UserId,
        email: String,
        username: String,
        first_name: String,
        last_name: String,
    ) -> Self {
        Self {
            id,
            email,
            username,
            first_name,
            last_name,
        }
    }
}
