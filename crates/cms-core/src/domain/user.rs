use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Validate;
use crate::error::DomainError;

/// Maximum length of a user's email, in characters.
pub const MAX_EMAIL_LEN: usize = 200;

/// Role a user holds in the CMS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            other => Err(DomainError::InvalidEnumValue {
                kind: "role",
                value: other.to_string(),
            }),
        }
    }
}

/// User entity - represents an author in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

impl Validate for User {
    fn validate(&self) -> Result<(), DomainError> {
        validate_email(&self.email)
    }
}

/// A user that has not been persisted yet.
///
/// The id is assigned by the store unless one is supplied explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub id: Option<i32>,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: UserRole,
}

impl NewUser {
    /// Create a new user with the default role.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            email: email.into(),
            name: name.into(),
            role: UserRole::default(),
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }
}

impl Validate for NewUser {
    fn validate(&self) -> Result<(), DomainError> {
        validate_email(&self.email)
    }
}

fn validate_email(email: &str) -> Result<(), DomainError> {
    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(DomainError::Validation(format!(
            "email exceeds {MAX_EMAIL_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults_to_user_role() {
        let user = NewUser::new("a@x.com", "A");
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.id, None);
    }

    #[test]
    fn test_role_parsing_is_closed() {
        assert_eq!("admin".parse::<UserRole>(), Ok(UserRole::Admin));
        assert_eq!(
            "root".parse::<UserRole>(),
            Err(DomainError::InvalidEnumValue {
                kind: "role",
                value: "root".to_string()
            })
        );
    }

    #[test]
    fn test_role_serde_rejects_unknown_value() {
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
        assert!(serde_json::from_str::<UserRole>("\"superuser\"").is_err());
    }

    #[test]
    fn test_overlong_email_is_rejected() {
        let email = format!("{}@x.com", "a".repeat(MAX_EMAIL_LEN));
        assert!(matches!(
            NewUser::new(email, "A").validate(),
            Err(DomainError::Validation(_))
        ));
    }
}
