//! Full-page-load route guard.
//!
//! Applies the client's [`evaluate`] rule to the `token` cookie of each page
//! request before SSR runs. Only token presence is checked; the REST API
//! validates the token itself.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use client::util::guard::{GuardDecision, evaluate};
use client::util::session::TOKEN_COOKIE;

/// Guard decision for `path` given the request cookies.
pub fn decision_for(path: &str, jar: &CookieJar) -> GuardDecision {
    let has_token = jar
        .get(TOKEN_COOKIE)
        .map(Cookie::value)
        .is_some_and(|value| !value.trim().is_empty());
    evaluate(path, has_token)
}

/// Axum middleware answering guarded paths with a temporary redirect.
pub async fn route_guard(jar: CookieJar, request: Request, next: Next) -> Response {
    match decision_for(request.uri().path(), &jar) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::Redirect(target) => {
            tracing::debug!(path = request.uri().path(), target, "route guard redirect");
            Redirect::temporary(target).into_response()
        }
    }
}
