// ABOUTME: Account and profile wire types for registration, login, and profile management
// ABOUTME: Includes the OAuth2 password-grant login form and its token response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! User account and profile types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{error_messages, limits};
use crate::errors::{ApiError, ApiResult};

/// User gender as tracked for plan personalization
///
/// The wire value for [`Gender::Unspecified`] is `"default"`, a legacy of the
/// first backend release; the other variants serialize lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Another gender
    Other,
    /// Not provided
    #[serde(rename = "default")]
    Unspecified,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::Unspecified => "unspecified",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Gender {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            "default" | "unspecified" => Ok(Self::Unspecified),
            other => Err(ApiError::invalid_input(format!(
                "unknown gender '{other}' (expected male, female, other, or unspecified)"
            ))),
        }
    }
}

/// Login form body, OAuth2 ROPC shaped
///
/// Per RFC 6749 Section 4.3 the body is form-encoded and the identifier field
/// is called `username`; Halcyon accounts are keyed by email, so the email
/// goes in that field.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// User's email address (RFC calls this "username")
    pub username: String,
    /// User's password
    pub password: String,
}

impl LoginRequest {
    /// Build a login form from an email and password
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: email.into(),
            password: password.into(),
        }
    }
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token to present on authenticated calls
    ///
    /// The backend names this `token`; older builds used `access_token`, and
    /// the alias keeps both decodable.
    #[serde(alias = "access_token")]
    pub token: String,
    /// Token type, always `bearer`
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Profile of the user that just logged in, when the backend includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

/// User registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Email address, the account identifier
    pub email: String,
    /// Password in plain text (hashed server-side)
    pub password: String,
    /// Optional gender for plan personalization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl RegisterRequest {
    /// Build a registration request without a gender
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            gender: None,
        }
    }

    /// Attach a gender
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Check the request before dispatch
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidInput`] when the email has no `@` or the
    /// password is shorter than the backend accepts.
    pub fn validate(&self) -> ApiResult<()> {
        if !self.email.contains('@') || self.email.trim().is_empty() {
            return Err(ApiError::invalid_input(error_messages::INVALID_EMAIL_FORMAT));
        }
        if self.password.len() < limits::MIN_PASSWORD_LEN {
            return Err(ApiError::invalid_input(error_messages::PASSWORD_TOO_SHORT));
        }
        Ok(())
    }
}

/// User registration response
///
/// Newer backend builds log the user straight in and return a token; older
/// ones return only a confirmation message, so every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Bearer token when the backend logs the new account in immediately
    #[serde(default, alias = "access_token", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Confirmation message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Profile of the newly created user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

/// Response of the email registration check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailExistsResponse {
    /// Whether an account with the queried email already exists
    pub exists: bool,
}

/// User profile as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier for the user
    pub id: Uuid,
    /// Email address
    pub email: String,
    /// Display name if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Gender if provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Height in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Target weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
    /// Account creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Partial profile update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// New gender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// New height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// New target weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
}
