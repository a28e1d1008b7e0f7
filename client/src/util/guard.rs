//! Route guard shared by the SSR host middleware and client-side routing.
//!
//! The check is deliberately coarse: it only looks at whether a token exists.
//! Whether that token is still valid is discovered by the first API call,
//! which expires the session on a 401.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Outcome of evaluating a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// `true` for `/dashboard` and anything nested beneath it.
pub fn is_protected(path: &str) -> bool {
    path == DASHBOARD_PATH
        || path
            .strip_prefix(DASHBOARD_PATH)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Decide whether a navigation to `path` may proceed.
pub fn evaluate(path: &str, has_token: bool) -> GuardDecision {
    if is_protected(path) && !has_token {
        return GuardDecision::Redirect(LOGIN_PATH);
    }
    if path == LOGIN_PATH && has_token {
        return GuardDecision::Redirect(DASHBOARD_PATH);
    }
    if path == ROOT_PATH {
        return GuardDecision::Redirect(LOGIN_PATH);
    }
    GuardDecision::Allow
}
