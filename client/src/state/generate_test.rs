use super::*;
use crate::net::transport::ApiResponse;
use crate::test_support::{RecordingSaver, harness_with_token};

#[test]
fn default_count_is_ten() {
    let state = GenerateState::default();
    assert_eq!(state.count_input, "10");
    assert!(!state.busy);
}

#[test]
fn parse_count_accepts_bounds() {
    assert_eq!(parse_count("1"), Ok(1));
    assert_eq!(parse_count(" 100 "), Ok(100));
    assert_eq!(parse_count("42"), Ok(42));
}

#[test]
fn parse_count_rejects_out_of_range_and_garbage() {
    for raw in ["0", "101", "-3", "", "ten", "2.5"] {
        assert_eq!(parse_count(raw), Err(COUNT_OUT_OF_RANGE), "input {raw:?}");
    }
}

#[test]
fn busy_flag_blocks_reentry() {
    let mut state = GenerateState::default();
    assert!(state.try_begin());
    assert!(!state.try_begin());
    state.finish();
    assert!(state.try_begin());
}

#[test]
fn success_message_names_count() {
    assert_eq!(success_message(10), "Successfully generated 10 users!");
}

#[tokio::test]
async fn generate_and_save_triggers_exactly_one_named_download() {
    let h = harness_with_token("tok");
    h.transport.push(Ok(ApiResponse {
        status: 200,
        content_type: Some("application/json".to_owned()),
        body: b"[1,2,3]".to_vec(),
    }));
    let saver = RecordingSaver::default();

    let name = generate_and_save(&h.client, &saver, 10).await.unwrap();

    assert_eq!(name, "generated-users-10.json");
    let saved = saver.saved.lock().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].file_name, "generated-users-10.json");
    assert_eq!(saved[0].bytes, b"[1,2,3]".to_vec());
}

#[tokio::test]
async fn generate_and_save_skips_download_on_api_failure() {
    let h = harness_with_token("tok");
    h.transport.push_status(400);
    let saver = RecordingSaver::default();

    let err = generate_and_save(&h.client, &saver, 10).await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert!(saver.saved.lock().unwrap().is_empty());
}

#[tokio::test]
async fn generate_and_save_reports_save_failure() {
    let h = harness_with_token("tok");
    h.transport.push(Ok(ApiResponse { status: 200, content_type: None, body: b"[]".to_vec() }));
    let saver = RecordingSaver { fail: true, ..RecordingSaver::default() };

    let err = generate_and_save(&h.client, &saver, 5).await.unwrap_err();

    assert!(matches!(err, ApiError::Browser(_)));
}
