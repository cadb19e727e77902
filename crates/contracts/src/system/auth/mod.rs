use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::validation::{is_digits, looks_like_email, min_chars};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_NAME_LEN: usize = 2;
pub const MOBILE_DIGITS: usize = 10;

/// Роль пользователя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Sales representative: records sales
    Sales,
    /// Manager: reads the full listing and reports
    Manager,
}

impl UserRole {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "sales" => Some(Self::Sales),
            "manager" => Some(Self::Manager),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::Manager => "manager",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sales => "Sales Representative",
            Self::Manager => "Manager",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthValidationError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Invalid role")]
    InvalidRole,

    #[error("Mobile must be 10 digits")]
    InvalidMobile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), AuthValidationError> {
        if !looks_like_email(self.email.trim()) {
            return Err(AuthValidationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthValidationError::PasswordTooShort);
        }
        Ok(())
    }
}

/// Session credentials returned by `POST /api/auth/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub token: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Credentials {
    /// Anything other than "manager" is treated as a sales representative
    pub fn role(&self) -> UserRole {
        match self.role.as_deref().and_then(UserRole::parse) {
            Some(UserRole::Manager) => UserRole::Manager,
            _ => UserRole::Sales,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub data: Credentials,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /api/auth/signup`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// "sales" or "manager"; kept as text so an unselected role can be reported
    pub role: String,
    pub mobile: String,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), AuthValidationError> {
        if !min_chars(&self.name, MIN_NAME_LEN) {
            return Err(AuthValidationError::NameTooShort);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(AuthValidationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthValidationError::PasswordTooShort);
        }
        if UserRole::parse(&self.role).is_none() {
            return Err(AuthValidationError::InvalidRole);
        }
        if !is_digits(self.mobile.trim(), MOBILE_DIGITS) {
            return Err(AuthValidationError::InvalidMobile);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body the auth API sends on failure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
