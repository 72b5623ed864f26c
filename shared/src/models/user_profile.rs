//! User Profile Model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Dashboard role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    Staff,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Staff => "staff",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "manager" => Ok(UserRole::Manager),
            "staff" => Ok(UserRole::Staff),
            other => Err(AppError::validation(format!("Invalid role: {}", other))),
        }
    }
}

/// User profile (`user_profiles` table), read-only in the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    /// Identity provider user id
    #[serde(default)]
    pub user_id: Option<String>,
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub role: UserRole,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// First letter of the name (or email) for avatar badges
    pub fn initial(&self) -> char {
        self.full_name
            .chars()
            .chain(self.email.chars())
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('U')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!("Manager".parse::<UserRole>().unwrap(), UserRole::Manager);
        assert!("owner".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_initial_falls_back_to_email() {
        let profile = UserProfile {
            id: "1".into(),
            user_id: None,
            full_name: String::new(),
            email: "jane@example.com".into(),
            avatar_url: None,
            role: UserRole::Staff,
            last_login: None,
        };
        assert_eq!(profile.initial(), 'J');
    }
}
