//! Integration tests for the HTTP client and the admin API operations.
//!
//! These tests verify header handling, response parsing and error mapping
//! against a mock server.

mod common;

use catalog_admin::api::{AdminApi, ApiError, SIGNIN_PATH, USER_CHECK_PATH};
use catalog_admin::auth::{Credentials, SessionToken};
use catalog_admin::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest};
use catalog_admin::RequestContext;
use chrono::{Duration, TimeZone, Utc};
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{config_for, products_body, PRODUCTS_PATH};

// ============================================================================
// HTTP client
// ============================================================================

#[tokio::test]
async fn test_request_sends_raw_token_from_context() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("Authorization", "raw-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    let mut context = RequestContext::anonymous();
    context.authorize("raw-token");

    let request = HttpRequest::builder(HttpMethod::Get, "/ping").build().unwrap();
    let response = client.request(request, &context).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body["ok"], true);
}

#[tokio::test]
async fn test_anonymous_request_has_no_authorization() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, "/ping").build().unwrap();
    let response = client
        .request(request, &RequestContext::anonymous())
        .await
        .unwrap();

    assert_eq!(response.code, 204);
    assert_eq!(response.body, json!({}));
}

#[tokio::test]
async fn test_contexts_do_not_leak_between_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("Authorization", "one"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("Authorization", "two"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    let expires = Utc::now() + Duration::hours(1);
    let first = RequestContext::for_token(&SessionToken::new("one", expires));
    let second = RequestContext::for_token(&SessionToken::new("two", expires));

    for context in [&first, &second] {
        let request = HttpRequest::builder(HttpMethod::Get, "/ping").build().unwrap();
        client.request(request, context).await.unwrap();
    }
}

#[tokio::test]
async fn test_non_2xx_maps_to_response_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/things"))
        .respond_with(
            ResponseTemplate::new(422)
                .insert_header("X-Request-Id", "req-42")
                .set_body_json(json!({"success": false, "message": "bad thing"})),
        )
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    let request = HttpRequest::builder(HttpMethod::Post, "/things")
        .body(json!({"name": "x"}))
        .body_type(DataType::Json)
        .build()
        .unwrap();

    let err = client
        .request(request, &RequestContext::anonymous())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(422));
    match err {
        HttpError::Response(response) => {
            assert_eq!(response.message, "bad thing");
            assert_eq!(response.error_reference.as_deref(), Some("req-42"));
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_body_is_kept_raw() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/text"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, "/text").build().unwrap();
    let response = client
        .request(request, &RequestContext::anonymous())
        .await
        .unwrap();

    assert_eq!(response.body["raw_body"], "hello");
}

// ============================================================================
// Admin API
// ============================================================================

#[tokio::test]
async fn test_signin_decodes_token_and_expiry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"username": "ops@shop.io", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "uid": "u-1",
            "token": "abc",
            "expired": 1_893_456_000_000_i64
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = AdminApi::new(&config_for(&server)).unwrap();
    let signin = api
        .signin(&Credentials::new("ops@shop.io", "pw"))
        .await
        .unwrap();

    assert_eq!(signin.token, "abc");
    assert_eq!(signin.uid.as_deref(), Some("u-1"));
    assert_eq!(
        signin.expired,
        Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(
        signin.session_token().to_cookie(),
        "hexToken=abc; expires=Tue, 01 Jan 2030 00:00:00 GMT"
    );
}

#[tokio::test]
async fn test_signin_without_token_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let api = AdminApi::new(&config_for(&server)).unwrap();
    let err = api.signin(&Credentials::default()).await.unwrap_err();

    assert!(matches!(err, ApiError::Decode { ref endpoint, .. } if endpoint == SIGNIN_PATH));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_signin_http_failure_keeps_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let api = AdminApi::new(&config_for(&server)).unwrap();
    let err = api.signin(&Credentials::default()).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_list_products_uses_store_path_and_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(header("Authorization", "abc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(products_body(&["C", "A", "B"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = AdminApi::new(&config_for(&server)).unwrap();
    let mut context = RequestContext::anonymous();
    context.authorize("abc");

    let products = api.list_products(&context).await.unwrap();
    let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();

    assert_eq!(ids, ["-key3", "-key2", "-key1"]);
    assert!(products.iter().all(|p| p.is_enabled));
}

#[tokio::test]
async fn test_check_session_rejects_success_false() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(USER_CHECK_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": false, "message": "token expired"})),
        )
        .mount(&server)
        .await;

    let api = AdminApi::new(&config_for(&server)).unwrap();
    let err = api
        .check_session(&RequestContext::anonymous())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Rejected { ref message, .. } if message == "token expired"));
}
