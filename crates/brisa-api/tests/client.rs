#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end client tests against a mock WeatherAPI server.

use brisa_api::{WeatherClient, WeatherError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FORECAST_FIXTURE: &str = include_str!("fixtures/forecast.json");

#[tokio::test]
async fn forecast_success_populates_report_and_quota() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .and(query_param("key", "valid-key"))
        .and(query_param("q", "id:2801268"))
        .and(query_param("days", "3"))
        .and(query_param("aqi", "yes"))
        .and(query_param("lang", "en"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(FORECAST_FIXTURE, "application/json")
                .insert_header("x-weatherapi-qpm-left", "4999982"),
        )
        .mount(&server)
        .await;

    let client = WeatherClient::with_base_url("valid-key", server.uri()).unwrap();
    let fetched = client.forecast("id:2801268", "en").await.unwrap();

    assert_eq!(fetched.quota_left, Some(4999982));
    assert_eq!(fetched.data.location.name, "London");
    assert_eq!(fetched.data.current.temperature.celsius, 16.3);
    assert_eq!(fetched.data.forecasts.len(), 1);
}

#[tokio::test]
async fn invalid_key_surfaces_api_error_2006() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .respond_with(ResponseTemplate::new(403).set_body_raw(
            r#"{"error": {"message": "API key provided is invalid.", "code": 2006}}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = WeatherClient::with_base_url("bad-key", server.uri()).unwrap();
    let err = client.forecast("id:12345", "en").await.unwrap_err();

    match &err {
        WeatherError::Api { message, code } => {
            assert_eq!(*code, 2006);
            assert!(message.contains("invalid"));
        }
        other => panic!("expected api error, got {other:?}"),
    }
    assert_eq!(err.locale_key(), Some("errors.api.invalid_key"));
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Nothing listens on the discard port.
    let client = WeatherClient::with_base_url("key", "http://127.0.0.1:9").unwrap();
    let err = client.forecast("id:12345", "en").await.unwrap_err();

    assert!(matches!(err, WeatherError::Transport(_)));
    // The display text is what the UI shows verbatim.
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn undecodable_success_body_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&server)
        .await;

    let client = WeatherClient::with_base_url("key", server.uri()).unwrap();
    let err = client.forecast("id:12345", "en").await.unwrap_err();

    assert!(matches!(err, WeatherError::MalformedResponse(_)));
}

#[tokio::test]
async fn search_maps_autocomplete_hits() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search.json"))
        .and(query_param("query", "Lond"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[
                {"id": 2801268, "name": "London", "region": "City of London, Greater London",
                 "country": "United Kingdom", "lat": 51.52, "lon": -0.11,
                 "url": "london-city-of-london-greater-london-united-kingdom"},
                {"id": 315398, "name": "London", "region": "Ontario",
                 "country": "Canada", "lat": 42.98, "lon": -81.25, "url": "london-ontario-canada"}
            ]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = WeatherClient::with_base_url("key", server.uri()).unwrap();
    let fetched = client.search("Lond").await.unwrap();

    assert_eq!(fetched.data.len(), 2);
    assert_eq!(fetched.data[0].ident, 2801268);
    assert_eq!(
        fetched.data[0].full_name(),
        "London, City of London, Greater London, United Kingdom"
    );
    assert_eq!(fetched.data[1].country, "Canada");
}

#[tokio::test]
async fn empty_search_result_is_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;

    let client = WeatherClient::with_base_url("key", server.uri()).unwrap();
    let fetched = client.search("nowhereville").await.unwrap();

    assert!(fetched.data.is_empty());
    assert_eq!(fetched.quota_left, None);
}
