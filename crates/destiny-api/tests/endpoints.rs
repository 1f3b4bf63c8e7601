//! Endpoint group methods against a mock platform API
#![allow(clippy::expect_used)]

use destiny_api::endpoints::group_v2::GroupQuery;
use destiny_api::{BungieMembershipType, ClientConfig, DestinyClient, DestinyComponentType};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

fn ok(response: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "Response": response,
        "ErrorCode": 1,
        "ThrottleSeconds": 0,
        "ErrorStatus": "Success",
        "Message": "Ok"
    }))
}

fn client_for(server: &MockServer) -> DestinyClient {
    DestinyClient::builder()
        .api_key("test-key")
        .config(ClientConfig::default().with_base_url(format!("{}/Platform", server.uri())))
        .build()
        .expect("Operation should succeed")
}

#[tokio::test]
async fn test_get_profile_components() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Platform/Destiny2/3/Profile/4611686018467284386/"))
        .and(query_param("components", "100,200"))
        .respond_with(ok(json!({"profile": {"data": {}}})))
        .expect(1)
        .mount(&server)
        .await;

    let profile = client_for(&server)
        .destiny2()
        .get_profile(
            BungieMembershipType::TigerSteam,
            4611686018467284386,
            &[DestinyComponentType::Profiles, DestinyComponentType::Characters],
        )
        .await
        .expect("Operation should succeed");

    assert_eq!(profile["Response"], json!({"profile": {"data": {}}}));
}

#[tokio::test]
async fn test_response_envelope_returned_unmodified() {
    let server = MockServer::start().await;
    let body = json!({
        "Response": {"profiles": [], "bnetMembership": null},
        "ErrorCode": 1,
        "ThrottleSeconds": 0,
        "ErrorStatus": "Success",
        "Message": "Ok",
        "MessageData": {"extra": "kept"}
    });

    Mock::given(method("GET"))
        .and(path("/Platform/Destiny2/254/Profile/1/LinkedProfiles/"))
        .and(query_param("getAllMemberships", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let linked = client_for(&server)
        .destiny2()
        .get_linked_profiles(BungieMembershipType::BungieNext, 1, true)
        .await
        .expect("Operation should succeed");
    assert_eq!(linked, body);
}

#[tokio::test]
async fn test_search_player_posts_camel_case_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Platform/Destiny2/SearchDestinyPlayerByBungieName/-1/"))
        .and(body_json(json!({"displayName": "Guardian", "displayNameCode": 42})))
        .respond_with(ok(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .destiny2()
        .search_destiny_player_by_bungie_name(BungieMembershipType::All, "Guardian", 42)
        .await
        .expect("Operation should succeed");
}

#[tokio::test]
async fn test_awa_nonce_is_base64() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Platform/Destiny2/Awa/AwaProvideAuthorizationResult/"))
        .and(body_json(json!({
            "selection": 1,
            "correlationId": "corr-1",
            "nonce": "AQL/"
        })))
        .respond_with(ok(json!(0)))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .destiny2()
        .awa_provide_authorization_result(1, "corr-1", &[0x01, 0x02, 0xff])
        .await
        .expect("Operation should succeed");
}

#[tokio::test]
async fn test_path_values_are_segment_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Platform/GroupV2/Name/Clan%20%2F%20Name%231%3F/1/"))
        .respond_with(ok(json!({"detail": {}})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .group_v2()
        .get_group_by_name("Clan / Name#1?", 1)
        .await
        .expect("Operation should succeed");
}

#[tokio::test]
async fn test_group_search_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Platform/GroupV2/Search/"))
        .and(body_json(json!({
            "name": "Fireteam",
            "groupType": 1,
            "creationDate": 0,
            "sortBy": 0,
            "itemsPerPage": 25,
            "currentPage": 1
        })))
        .respond_with(ok(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let query = GroupQuery {
        name: "Fireteam".to_string(),
        group_type: 1,
        items_per_page: 25,
        current_page: 1,
        ..GroupQuery::default()
    };
    client_for(&server)
        .group_v2()
        .group_search(&query)
        .await
        .expect("Operation should succeed");
}

#[tokio::test]
async fn test_friend_request_decline_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Platform/Social/Friends/Requests/Decline/77/"))
        .respond_with(ok(json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let value = client_for(&server)
        .social()
        .decline_friend_request(77)
        .await
        .expect("Operation should succeed");
    assert_eq!(value["Response"], json!(true));
}

#[tokio::test]
async fn test_recruitment_summaries_post_id_array() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Platform/Forum/Recruit/Summaries/"))
        .and(body_json(json!([1, 2, 3])))
        .respond_with(ok(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .forum()
        .get_recruitment_thread_summaries(&[1, 2, 3])
        .await
        .expect("Operation should succeed");
}

#[tokio::test]
async fn test_optional_query_omitted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Platform/Content/Rss/NewsArticles/0/"))
        .respond_with(ok(json!({"NewsArticles": []})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .content()
        .rss_news_articles("0", None, None)
        .await
        .expect("Operation should succeed");

    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}
