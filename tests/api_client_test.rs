// Integration tests for the status API client
// A local axum server stands in for the status API

use axum::http::StatusCode;
use ems_dashboard::{ApiClient, ApiError, Config, StatusSource};
use test_helpers::*;
use tokio_test::{assert_err, assert_ok};


#[tokio::test]
async fn test_get_status_parses_snapshot() {
    let api = MockStatusApi::start(MockResponse::ok(EXAMPLE_STATUS_JSON)).await;
    let client = api.client();

    let snapshot = assert_ok!(client.get_status().await);

    assert_eq!(snapshot.current_price, 12.5);
    assert_eq!(snapshot.charging, "idle");
    assert_eq!(snapshot.battery_capacity_kwh, 10.0);
    assert_eq!(snapshot.battery_capacity_percent, 80.0);
    assert_eq!(snapshot.facility_consumption_rate, Some(0.02));
    assert_eq!(snapshot.total_consumption_kwh, Some(3.4));
    assert_eq!(api.hits(), 1);
}

#[tokio::test]
async fn test_status_source_uses_get_status() {
    let api = MockStatusApi::start(MockResponse::ok(EXAMPLE_STATUS_JSON)).await;
    let client = api.client();

    assert_ok!(client.fetch_status().await);
    assert_eq!(api.hits(), 1);
}

#[tokio::test]
async fn test_server_error_is_http_error() {
    let api = MockStatusApi::start(MockResponse::status(
        StatusCode::INTERNAL_SERVER_ERROR,
        "boom",
    ))
    .await;

    let err = assert_err!(api.client().get_status().await);

    assert_eq!(
        err,
        ApiError::Http {
            status: 500,
            message: "boom".to_string()
        }
    );
}

#[tokio::test]
async fn test_not_found_is_http_error() {
    let api = MockStatusApi::start(MockResponse::status(StatusCode::NOT_FOUND, "")).await;

    let err = assert_err!(api.client().get_status().await);

    assert!(matches!(err, ApiError::Http { status: 404, .. }));
}

#[tokio::test]
async fn test_malformed_json_is_deserialization_error() {
    let api = MockStatusApi::start(MockResponse::ok("{\"current_price\": ")).await;

    let err = assert_err!(api.client().get_status().await);

    assert!(matches!(err, ApiError::Deserialization(_)));
}

#[tokio::test]
async fn test_empty_body_is_deserialization_error() {
    let api = MockStatusApi::start(MockResponse::ok("")).await;

    let err = assert_err!(api.client().get_status().await);

    assert!(matches!(err, ApiError::Deserialization(_)));
}

#[tokio::test]
async fn test_enveloped_response_is_rejected() {
    let body = format!("{{\"data\": {}}}", EXAMPLE_STATUS_JSON);
    let api = MockStatusApi::start(MockResponse::ok(&body)).await;

    let err = assert_err!(api.client().get_status().await);

    assert!(matches!(err, ApiError::Deserialization(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let addr = unused_address().await;
    let client = ApiClient::with_client(&format!("http://{}", addr), test_http_client());

    let err = assert_err!(client.get_status().await);

    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let api = MockStatusApi::start(MockResponse::ok(EXAMPLE_STATUS_JSON)).await;
    let client = ApiClient::with_client(&format!("{}/", api.base_url()), test_http_client());

    assert_eq!(client.base_url(), api.base_url());
    assert_ok!(client.get_status().await);
}

#[test]
fn test_client_from_config() {
    let config = Config::default();

    let client = assert_ok!(ApiClient::new(&config));

    assert_eq!(client.base_url(), "http://localhost:8000");
}
