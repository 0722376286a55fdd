use std::time::Duration;

use hn_core::ItemType;
use hn_engine::{FailureKind, FetchSettings, ItemSource, ReqwestItemSource};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn source_for(server: &MockServer) -> ReqwestItemSource {
    source_with(server, FetchSettings::default())
}

fn source_with(server: &MockServer, settings: FetchSettings) -> ReqwestItemSource {
    let settings = FetchSettings {
        api_base: format!("{}/v0/", server.uri()),
        ..settings
    };
    ReqwestItemSource::new(settings).expect("client builds")
}

async fn mount_json(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_owned(), "application/json"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn top_stories_are_returned_in_rank_order() {
    let server = MockServer::start().await;
    mount_json(&server, "/v0/topstories.json", "[42, 7, 19]").await;

    let ids = source_for(&server).top_stories().await.expect("top stories");
    assert_eq!(ids, vec![42, 7, 19]);
}

#[tokio::test]
async fn item_is_decoded() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/v0/item/8863.json",
        r#"{"by":"dhouston","id":8863,"score":111,"time":1175714200,"title":"My YC app: Dropbox","type":"story","url":"http://www.getdropbox.com/u/2/screencast.html"}"#,
    )
    .await;

    let item = source_for(&server)
        .item(8863)
        .await
        .expect("fetch ok")
        .expect("item present");
    assert_eq!(item.id, 8863);
    assert_eq!(item.kind, ItemType::Story);
    assert_eq!(item.by, "dhouston");
}

#[tokio::test]
async fn null_item_is_none() {
    let server = MockServer::start().await;
    mount_json(&server, "/v0/item/1.json", "null").await;

    let item = source_for(&server).item(1).await.expect("fetch ok");
    assert!(item.is_none());
}

#[tokio::test]
async fn malformed_body_is_decode_failure() {
    let server = MockServer::start().await;
    mount_json(&server, "/v0/item/2.json", r#"{"id": "two"}"#).await;

    let err = source_for(&server).item(2).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn http_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/topstories.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = source_for(&server).top_stories().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn slow_item_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/item/3.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("null"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let err = source_with(&server, settings).item(3).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = MockServer::start().await;
    mount_json(&server, "/v0/topstories.json", "[1,2,3,4,5,6,7,8,9]").await;

    let settings = FetchSettings {
        max_bytes: 8,
        ..FetchSettings::default()
    };
    let err = source_with(&server, settings).top_stories().await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 8,
            actual: Some(19)
        }
    );
}

#[tokio::test]
async fn unparseable_base_is_invalid_url() {
    let source = ReqwestItemSource::new(FetchSettings {
        api_base: "not a base".to_string(),
        ..FetchSettings::default()
    })
    .expect("client builds");

    let err = source.item(1).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
