//! Integration tests for request dispatch and response classification
#![allow(clippy::expect_used)]

use destiny_api::transport::{HeaderMap, HeaderValue};
use destiny_api::{
    CancellationToken, ClientConfig, DestinyClient, Error, HttpMethod, endpoints,
};
use serde_json::{Value, json};
use std::time::Duration;
use tokio::io::AsyncReadExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

fn envelope(response: Value) -> Value {
    json!({
        "Response": response,
        "ErrorCode": 1,
        "ThrottleSeconds": 0,
        "ErrorStatus": "Success",
        "Message": "Ok",
        "MessageData": {}
    })
}

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::default()
        .with_base_url(format!("{}/Platform", server.uri()))
        .with_content_url(server.uri())
}

fn client_for(server: &MockServer) -> DestinyClient {
    DestinyClient::builder()
        .api_key("test-key")
        .access_token("test-token")
        .config(config_for(server))
        .build()
        .expect("Operation should succeed")
}

#[tokio::test]
async fn test_credentials_sent_on_every_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Platform/Settings/"))
        .and(header("x-api-key", "test-key"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({"systems": {}}))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let settings = client
        .platform()
        .get_common_settings()
        .await
        .expect("Operation should succeed");
    assert_eq!(settings["Response"]["systems"], json!({}));
}

#[tokio::test]
async fn test_concurrent_calls_share_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Platform/GlobalAlerts/"))
        .and(header("x-api-key", "test-key"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .expect(8)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let calls = (0..8).map(|_| {
        let client = client.clone();
        tokio::spawn(async move { client.platform().get_global_alerts(false).await })
    });

    for result in futures::future::join_all(calls).await {
        result
            .expect("Operation should succeed")
            .expect("Operation should succeed");
    }
}

#[tokio::test]
async fn test_http_error_status_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Platform/Destiny2/Manifest/"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "ErrorCode": 5,
            "ErrorStatus": "SystemDisabled",
            "Message": "This system is temporarily disabled for maintenance.",
            "ThrottleSeconds": 0
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .destiny2()
        .get_destiny_manifest()
        .await
        .expect_err("should fail");

    assert!(err.is_api());
    assert!(!err.is_transport());
    let api = err.api_error().expect("api error");
    assert_eq!(api.status.as_u16(), 503);
    assert_eq!(api.error_code, Some(5));
    assert_eq!(api.error_status.as_deref(), Some("SystemDisabled"));
    assert!(err.should_retry());
}

#[tokio::test]
async fn test_embedded_error_code_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Platform/User/GetBungieNetUserById/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": null,
            "ErrorCode": 217,
            "ErrorStatus": "UserCannotResolveCentralAccount",
            "Message": "We couldn't find the account you're looking for.",
            "ThrottleSeconds": 3
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .user()
        .get_bungie_net_user_by_id(1)
        .await
        .expect_err("should fail");

    let api = err.api_error().expect("api error");
    assert_eq!(api.status.as_u16(), 200);
    assert_eq!(api.error_code, Some(217));
    assert_eq!(err.retry_after_hint(), Some(Duration::from_secs(3)));
}

#[tokio::test]
async fn test_no_content_is_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Platform/Social/Friends/Remove/42/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let value = client_for(&server)
        .social()
        .remove_friend(42)
        .await
        .expect("Operation should succeed");
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn test_non_json_success_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Platform/Settings/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .platform()
        .get_common_settings()
        .await
        .expect_err("should fail");
    assert!(matches!(err, Error::Decode(_)));
}

fn client_at(base: &str) -> DestinyClient {
    DestinyClient::builder()
        .api_key("test-key")
        .config(
            ClientConfig::default()
                .with_base_url(format!("{base}/Platform"))
                .with_content_url(base),
        )
        .build()
        .expect("Operation should succeed")
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Operation should succeed");
    let addr = listener.local_addr().expect("Operation should succeed");
    drop(listener);

    let err = client_at(&format!("http://{addr}"))
        .platform()
        .get_common_settings()
        .await
        .expect_err("should fail");
    assert!(err.is_transport(), "unexpected error: {err:?}");
    assert!(!err.is_api());
}

#[tokio::test]
async fn test_dropped_connection_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Operation should succeed");
    let addr = listener.local_addr().expect("Operation should succeed");

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Operation should succeed");
        let mut buf = [0_u8; 1024];
        let _ = socket.read(&mut buf).await;
        drop(socket);
    });

    let err = client_at(&format!("http://{addr}"))
        .platform()
        .get_common_settings()
        .await
        .expect_err("should fail");
    server.await.expect("Operation should succeed");

    assert!(err.is_transport(), "unexpected error: {err:?}");
    assert!(!err.is_api());
}

#[tokio::test]
async fn test_request_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Platform/Settings/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(json!({})))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = DestinyClient::builder()
        .api_key("test-key")
        .config(config_for(&server).with_request_timeout(Duration::from_millis(200)))
        .build()
        .expect("Operation should succeed");

    let err = client
        .platform()
        .get_common_settings()
        .await
        .expect_err("should fail");
    assert!(matches!(err, Error::Timeout), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_cancellation_stops_waiting() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Platform/Settings/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(json!({})))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    let client = client_for(&server).with_cancellation(token.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let err = client
        .platform()
        .get_common_settings()
        .await
        .expect_err("should fail");
    assert!(matches!(err, Error::Cancelled));
    canceller.await.expect("Operation should succeed");
}

#[tokio::test]
async fn test_raw_request_with_query_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Platform/User/Search/GlobalName/0/"))
        .and(query_param("tag", "a b"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"displayNamePrefix": "Guardian"})))
        .and(header("x-api-key", "test-key"))
        .and(header("accept-language", "fr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({"searchResults": []}))))
        .expect(1)
        .mount(&server)
        .await;

    let mut extra = HeaderMap::new();
    extra.insert("accept-language", HeaderValue::from_static("fr"));

    let client = client_for(&server);
    let value = client
        .transport()
        .request(
            HttpMethod::Post,
            "/User/Search/GlobalName/0/",
            &[("tag", "a b")],
            Some(&json!({"displayNamePrefix": "Guardian"})),
            Some(&extra),
        )
        .await
        .expect("Operation should succeed");
    assert_eq!(value["Response"]["searchResults"], json!([]));
}

#[tokio::test]
async fn test_every_descriptor_renders_one_request() {
    let server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({}))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut expected = Vec::new();
    for endpoint in endpoints::all() {
        let mut request = destiny_api::ApiRequest::new(endpoint);
        let mut rendered = endpoint.path.to_string();
        for (i, name) in endpoint.placeholders().enumerate() {
            let value = format!("v{i}");
            rendered = rendered.replace(&format!("{{{name}}}"), &value);
            request = request.path(value);
        }
        client
            .transport()
            .send(&request)
            .await
            .expect("Operation should succeed");
        expected.push((endpoint.method.as_str().to_string(), format!("/Platform{rendered}")));
    }

    let received: Vec<(String, String)> = server
        .received_requests()
        .await
        .expect("request recording enabled")
        .into_iter()
        .map(|r| (r.method.to_string(), r.url.path().to_string()))
        .collect();
    assert_eq!(received, expected);
}
