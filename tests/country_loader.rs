mod common;

use common::mock_api::{MockApi, MockResponse};
use common::{api_config, ALAND_JSON, ZAMBIA_JSON};
use country_browser::config::CredentialStatus;
use country_browser::loader::{CountryClient, FailureKind};
use country_browser::ui::app::App;
use country_browser::ui::directory::LoadState;

#[tokio::test]
async fn loads_array_and_sends_headers() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::json(&format!("[{},{}]", ALAND_JSON, ZAMBIA_JSON)))
        .await;

    let client = CountryClient::new(&api_config(&mock.endpoint(), Some("secret-key"))).unwrap();
    let records = client.fetch_all().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Aland");
    assert_eq!(records[1].borders.len(), 8);

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/all");
    assert_eq!(requests[0].header("authorization"), Some("Bearer secret-key"));
    assert_eq!(requests[0].header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn loads_object_keyed_by_code() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::json(&format!(
        r#"{{"ax":{},"zm":{}}}"#,
        ALAND_JSON, ZAMBIA_JSON
    )))
    .await;

    let client = CountryClient::new(&api_config(&mock.endpoint(), Some("k"))).unwrap();
    let records = client.fetch_all().await.unwrap();
    let codes: Vec<&str> = records.iter().map(|r| r.alpha3_code.as_str()).collect();
    assert_eq!(codes, vec!["ALA", "ZMB"]);
}

#[tokio::test]
async fn missing_key_sends_no_authorization() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::json("[]")).await;

    let api = api_config(&mock.endpoint(), None);
    let client = CountryClient::with_credential(
        &api,
        CredentialStatus::Unconfigured {
            reason: "not set".into(),
        },
    )
    .unwrap();
    let records = client.fetch_all().await.unwrap();
    assert!(records.is_empty());

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].header("authorization"), None);
    assert_eq!(requests[0].header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn not_found_fails_with_server_message() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::error(404, "not found")).await;

    let client = CountryClient::new(&api_config(&mock.endpoint(), Some("k"))).unwrap();
    let err = client.fetch_all().await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Api);

    let mut app = App::new();
    app.on_load_result(Err(err));
    assert_eq!(
        app.directory().load,
        LoadState::Failed {
            message: "not found".to_string()
        }
    );
}

#[tokio::test]
async fn malformed_body_fails_with_parse_error() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::raw(200, "<html>oops</html>")).await;

    let client = CountryClient::new(&api_config(&mock.endpoint(), Some("k"))).unwrap();
    let err = client.fetch_all().await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Parse);

    let mut app = App::new();
    app.on_load_result(Err(err));
    match &app.directory().load {
        LoadState::Failed { message } => {
            assert_ne!(message, "not found");
            assert!(message.contains("parse"));
        }
        other => panic!("Expected Failed, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_failure() {
    // Bind then drop to get a port nobody listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let endpoint = format!("http://{}/api/all", addr);
    let client = CountryClient::new(&api_config(&endpoint, Some("k"))).unwrap();
    let err = client.fetch_all().await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Transport);
    assert!(err.to_string().contains(&endpoint));
}

#[tokio::test]
async fn one_request_per_load() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::json(&format!("[{}]", ALAND_JSON)))
        .await;

    let client = CountryClient::new(&api_config(&mock.endpoint(), Some("k"))).unwrap();
    let records = client.fetch_all().await.unwrap();

    let mut app = App::new();
    app.on_load_result(Ok(records));
    app.dispatch(country_browser::ui::directory::DirectoryIntent::LoadMore);
    app.dispatch(country_browser::ui::directory::DirectoryIntent::InsertChar('a'));

    assert_eq!(mock.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn null_field_does_not_fail_the_load() {
    let antarctica = r#"{"name":"Antarctica","capital":null,"region":"Polar","population":1000,"area":null,"alpha3Code":"ATA","borders":null,"flag":{"emoji":null}}"#;
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::json(&format!("[{},{}]", antarctica, ALAND_JSON)))
        .await;

    let client = CountryClient::new(&api_config(&mock.endpoint(), Some("k"))).unwrap();
    let records = client.fetch_all().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Antarctica");
    assert!(records[0].capital.is_empty());
    assert_eq!(records[0].area_text(), "0");
    assert_eq!(records[1].capital, "Mariehamn");
}
