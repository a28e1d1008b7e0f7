//! REST endpoint helpers for the user API.
//!
//! Each helper builds one `ApiRequest`, runs it through the shared
//! `ApiClient`, and decodes the body. Status handling (401 expiry, 404,
//! server messages) is the client's job; helpers only shape requests.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so view drivers can map
//! each failure to an inline message or a notification.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::client::ApiClient;
use super::error::ApiError;
use super::transport::ApiRequest;
use super::types::{GeneratedFile, LoginRequest, LoginResponse, UploadFile, UploadResult, User};

const AUTH_ENDPOINT: &str = "/auth";
const PROFILE_ENDPOINT: &str = "/users/me";
const GENERATE_ENDPOINT: &str = "/users/generate";
const BATCH_ENDPOINT: &str = "/users/batch";
const BATCH_FILE_FIELD: &str = "file";
const DEFAULT_DOWNLOAD_TYPE: &str = "application/json";

fn user_endpoint(username: &str) -> String {
    format!("/users/{}", urlencoding::encode(username))
}

/// Client-side name for a generated-users download.
pub fn generated_file_name(count: u32) -> String {
    format!("generated-users-{count}.json")
}

/// Exchange credentials for an access token via `POST /auth`.
///
/// # Errors
///
/// Returns [`ApiError::InvalidCredentials`] when the pair is rejected.
pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = LoginRequest { username: username.to_owned(), password: password.to_owned() };
    let request = ApiRequest::post(AUTH_ENDPOINT).anonymous().json(&body)?;
    client.execute(request).await?.json()
}

/// Fetch the signed-in user from `GET /users/me`.
///
/// # Errors
///
/// Returns an error if the session is missing/expired or the call fails.
pub async fn fetch_current_user(client: &ApiClient) -> Result<User, ApiError> {
    client.execute(ApiRequest::get(PROFILE_ENDPOINT)).await?.json()
}

/// Look up a user by username via `GET /users/{username}` (admin only).
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] when no such user exists.
pub async fn find_user(client: &ApiClient, username: &str) -> Result<User, ApiError> {
    client.execute(ApiRequest::get(user_endpoint(username))).await?.json()
}

/// Request `count` generated users as a downloadable file.
///
/// # Errors
///
/// Returns an error if the server rejects the count or the call fails.
pub async fn generate_users(client: &ApiClient, count: u32) -> Result<GeneratedFile, ApiError> {
    let request = ApiRequest::get(GENERATE_ENDPOINT).query("count", count.to_string());
    let resp = client.execute(request).await?;
    Ok(GeneratedFile {
        file_name: generated_file_name(count),
        content_type: resp
            .content_type
            .unwrap_or_else(|| DEFAULT_DOWNLOAD_TYPE.to_owned()),
        bytes: resp.body,
    })
}

/// Upload a user file to `POST /users/batch` as multipart form data.
///
/// # Errors
///
/// Returns an error if the server rejects the file or the call fails.
pub async fn batch_import(client: &ApiClient, file: UploadFile) -> Result<UploadResult, ApiError> {
    let request = ApiRequest::post(BATCH_ENDPOINT).multipart(BATCH_FILE_FIELD, file);
    client.execute(request).await?.json()
}
