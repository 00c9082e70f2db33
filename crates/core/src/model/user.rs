use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::UserId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserError {
    #[error("auth token must not be empty")]
    EmptyToken,

    #[error("unknown role: {0}")]
    UnknownRole(String),
}

/// Account type returned by the auth service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Teacher,
    Admin,
}

impl UserRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
            UserRole::Admin => "admin",
        }
    }

    /// # Errors
    ///
    /// Returns `UserError::UnknownRole` for unrecognised values.
    pub fn parse(value: &str) -> Result<Self, UserError> {
        match value.trim() {
            "student" => Ok(UserRole::Student),
            "teacher" => Ok(UserRole::Teacher),
            "admin" => Ok(UserRole::Admin),
            other => Err(UserError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque API token. Never printed in full.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// # Errors
    ///
    /// Returns `UserError::EmptyToken` for blank tokens.
    pub fn new(token: impl Into<String>) -> Result<Self, UserError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(UserError::EmptyToken);
        }
        Ok(Self(token))
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl UserInfo {
    /// Full name when known, username otherwise.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// Authenticated client session, persisted across restarts until logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub token: AuthToken,
    pub user: UserInfo,
    pub role: UserRole,
}

/// Split a single "full name" field into first name and the remainder.
#[must_use]
pub fn split_full_name(name: &str) -> (String, String) {
    let mut parts = name.split_whitespace();
    let first = parts.next().unwrap_or_default().to_string();
    let rest = parts.collect::<Vec<_>>().join(" ");
    (first, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_debug_is_redacted() {
        let token = AuthToken::new("abc123").unwrap();
        assert_eq!(format!("{token:?}"), "AuthToken(***)");
        assert_eq!(token.expose(), "abc123");
        assert_eq!(AuthToken::new(" ").unwrap_err(), UserError::EmptyToken);
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let mut user = UserInfo {
            id: UserId::new(1),
            username: "gurpreet".into(),
            first_name: String::new(),
            last_name: String::new(),
        };
        assert_eq!(user.display_name(), "gurpreet");
        user.first_name = "Gurpreet".into();
        user.last_name = "Kaur".into();
        assert_eq!(user.display_name(), "Gurpreet Kaur");
    }

    #[test]
    fn full_name_splits_on_first_word() {
        assert_eq!(
            split_full_name("Harpreet Singh Gill"),
            ("Harpreet".to_string(), "Singh Gill".to_string())
        );
        assert_eq!(split_full_name("Asha"), ("Asha".to_string(), String::new()));
    }

    #[test]
    fn role_parses_wire_values() {
        assert_eq!(UserRole::parse("teacher").unwrap(), UserRole::Teacher);
        assert!(UserRole::parse("parent").is_err());
    }
}
