//! Request/response model and the pluggable HTTP transport.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiRequest` is what endpoint helpers build; `ApiClient` turns it into an
//! `HttpRequest` (absolute URL + headers) and hands it to a `Transport`.
//! In the browser the transport is `fetch` via `gloo-net`; during SSR there is
//! no user session to speak for, so the transport refuses every call.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::UploadFile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// Whether a request speaks for the stored session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// Attach the session token; a 401 expires the session.
    Bearer,
    /// Send no token; a 401 means the submitted credentials were rejected.
    Anonymous,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart { field: String, file: UploadFile },
}

/// A logical API call relative to the configured base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    pub credentials: Credentials,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            credentials: Credentials::Bearer,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn anonymous(mut self) -> Self {
        self.credentials = Credentials::Anonymous;
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `value` cannot be serialized.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(value).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    #[must_use]
    pub fn multipart(mut self, field: impl Into<String>, file: UploadFile) -> Self {
        self.body = RequestBody::Multipart { field: field.into(), file };
        self
    }

    /// Resolve against `base_url` and attach headers.
    pub fn prepare(self, base_url: &str, token: Option<&str>) -> HttpRequest {
        let mut url = format!("{base_url}{}", self.path);
        if !self.query.is_empty() {
            let pairs = self
                .query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&pairs);
        }

        let mut headers = Vec::new();
        if let Some(token) = token {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        if matches!(self.body, RequestBody::Json(_)) {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }

        HttpRequest { method: self.method, url, headers, body: self.body }
    }
}

/// A fully resolved request ready for the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Sends a prepared request and returns whatever status came back.
///
/// Implementations report only transport failures as errors; status handling
/// belongs to `ApiClient`.
#[async_trait::async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &HttpRequest) -> Result<ApiResponse, ApiError>;
}

/// Transport used when not running in a browser.
pub struct UnavailableTransport;

#[async_trait::async_trait(?Send)]
impl Transport for UnavailableTransport {
    async fn send(&self, request: &HttpRequest) -> Result<ApiResponse, ApiError> {
        let _ = request;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// `fetch`-backed transport.
#[cfg(feature = "hydrate")]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: &HttpRequest) -> Result<ApiResponse, ApiError> {
        use gloo_net::http::Request;

        let network = |e: gloo_net::Error| ApiError::Network(e.to_string());

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match &request.body {
            RequestBody::Empty => builder.build().map_err(network)?,
            RequestBody::Json(value) => builder.body(value.to_string()).map_err(network)?,
            RequestBody::Multipart { field, file } => {
                let form = crate::util::files::form_data(field, file)?;
                builder.body(form).map_err(network)?
            }
        };

        let resp = prepared.send().await.map_err(network)?;
        let status = resp.status();
        let content_type = resp.headers().get("content-type");
        let body = resp.binary().await.map_err(network)?;
        Ok(ApiResponse { status, content_type, body })
    }
}

/// The transport for the current build target.
pub fn default_transport() -> Arc<dyn Transport> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(BrowserTransport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(UnavailableTransport)
    }
}
