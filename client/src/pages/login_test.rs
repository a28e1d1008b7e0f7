use super::*;
use crate::state::auth::AuthState;
use crate::test_support::{RecordingSink, events, harness, user_json};
use std::sync::Arc;

#[test]
fn blank_fields_are_rejected_before_any_request() {
    assert_eq!(validate_credentials("", "secret"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_credentials("alice", "   "), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_credentials("  ", ""), Err(MISSING_CREDENTIALS));
}

#[test]
fn username_is_trimmed() {
    assert_eq!(validate_credentials("  alice ", "secret"), Ok("alice".to_owned()));
}

#[test]
fn bad_credentials_get_fixed_message() {
    assert_eq!(login_error_message(&ApiError::InvalidCredentials), INVALID_CREDENTIALS);
}

#[test]
fn other_failures_include_cause() {
    let message = login_error_message(&ApiError::Network("offline".to_owned()));
    assert!(message.starts_with("Login failed: "));
    assert!(message.contains("offline"));
}

#[tokio::test]
async fn rejected_password_stays_on_login_page() {
    let h = harness();
    h.transport.push_status(401);
    let sink = Arc::new(RecordingSink::default());
    let session = AuthSession::new(h.client.clone(), sink.clone());

    let err = session.login("alice", "wrong").await.unwrap_err();

    assert_eq!(login_error_message(&err), INVALID_CREDENTIALS);
    assert_eq!(events(&h.log), vec!["POST /auth".to_owned()]);
    assert!(h.navigator.redirects().is_empty());
    assert_eq!(sink.last(), Some(AuthState::signed_out()));
}

#[tokio::test]
async fn accepted_password_lands_on_dashboard() {
    let h = harness();
    h.transport.push_json(200, serde_json::json!({ "accessToken": "tok-1" }));
    h.transport.push_json(200, user_json("alice", "USER"));
    let session = AuthSession::new(h.client.clone(), Arc::new(RecordingSink::default()));

    let user = session.login("alice", "secret").await.unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(h.navigator.redirects(), vec!["/dashboard".to_owned()]);
}
