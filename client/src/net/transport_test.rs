use super::*;

const BASE: &str = "http://localhost:9090/api";

#[test]
fn prepare_joins_base_url_and_path() {
    let req = ApiRequest::get("/users/me").prepare(BASE, None);
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url, "http://localhost:9090/api/users/me");
    assert!(req.headers.is_empty());
}

#[test]
fn prepare_encodes_query_pairs() {
    let req = ApiRequest::get("/users/generate")
        .query("count", "10")
        .query("note", "a b&c")
        .prepare(BASE, None);
    assert_eq!(req.url, "http://localhost:9090/api/users/generate?count=10&note=a%20b%26c");
}

#[test]
fn prepare_attaches_bearer_token() {
    let req = ApiRequest::get("/users/me").prepare(BASE, Some("tok-1"));
    assert_eq!(req.header("authorization"), Some("Bearer tok-1"));
}

#[test]
fn prepare_sets_json_content_type_for_json_bodies_only() {
    let json = ApiRequest::post("/auth")
        .json(&serde_json::json!({ "username": "a" }))
        .unwrap()
        .prepare(BASE, None);
    assert_eq!(json.header("Content-Type"), Some("application/json"));

    let file = UploadFile {
        name: "users.json".to_owned(),
        content_type: "application/json".to_owned(),
        bytes: b"[]".to_vec(),
    };
    let multipart = ApiRequest::post("/users/batch").multipart("file", file).prepare(BASE, None);
    assert_eq!(multipart.header("Content-Type"), None);
}

#[test]
fn anonymous_marks_credentials() {
    assert_eq!(ApiRequest::post("/auth").credentials, Credentials::Bearer);
    assert_eq!(ApiRequest::post("/auth").anonymous().credentials, Credentials::Anonymous);
}

#[test]
fn response_success_range() {
    let mut resp = ApiResponse { status: 200, content_type: None, body: Vec::new() };
    assert!(resp.is_success());
    resp.status = 204;
    assert!(resp.is_success());
    resp.status = 302;
    assert!(!resp.is_success());
    resp.status = 500;
    assert!(!resp.is_success());
}

#[test]
fn response_json_reports_decode_errors() {
    let resp = ApiResponse { status: 200, content_type: None, body: b"not json".to_vec() };
    let err = resp.json::<serde_json::Value>().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn unavailable_transport_refuses_requests() {
    let req = ApiRequest::get("/users/me").prepare(BASE, None);
    let err = UnavailableTransport.send(&req).await.unwrap_err();
    assert_eq!(err, ApiError::Network("not available on server".to_owned()));
}
