//! Shared wire DTOs for the dashboard/user-API boundary.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON. Optional profile fields are
//! only populated by the search endpoint, so every one of them defaults to
//! absent instead of failing deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role name granted full access, including user search.
pub const ADMIN_ROLE: &str = "ADMIN";

/// Role name for ordinary accounts.
pub const USER_ROLE: &str = "USER";

/// Account role as reported by the API.
///
/// Unknown role strings are kept verbatim so they can still be displayed;
/// they never grant admin access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    User,
    Other(String),
}

impl Role {
    /// Wire name of this role.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => ADMIN_ROLE,
            Self::User => USER_ROLE,
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            ADMIN_ROLE => Self::Admin,
            USER_ROLE => Self::User,
            _ => Self::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user record as returned by `/users/me` and `/users/{username}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Numeric identifier, when the endpoint exposes it.
    #[serde(default)]
    pub id: Option<i64>,
    /// Unique login name.
    pub username: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: Role,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub job_position: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// ISO-3166 alpha-2 country code.
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Birth date as an ISO `YYYY-MM-DD` string.
    #[serde(default)]
    pub birth_date: Option<String>,
}

impl User {
    /// `"First Last"`, trimmed when either part is missing.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Body of `POST /auth`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response of `POST /auth`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

/// Summary returned by `POST /users/batch`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub total_records: u32,
    pub success_count: u32,
    /// The backend spells this `failureCount`; both spellings are accepted.
    #[serde(alias = "failureCount")]
    pub failed_count: u32,
}

/// Error body the API returns alongside non-2xx statuses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// A file payload received from the API and destined for a client-side save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A file picked by the user, read into memory for a multipart upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}
