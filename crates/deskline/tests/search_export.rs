use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;

use deskline::api::search::{ResultKind, SearchExportOptions, SearchExportResult};
use deskline::client::{Client, SearchExportApi};
use deskline::error::{ClientError, DecodeError, EncodeError};
use deskline_common::http_client::HttpClient;
use deskline_common::types::cursor::CursorState;
use http::StatusCode;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
struct MockClient {
    queue: Arc<Mutex<VecDeque<http::Response<Vec<u8>>>>>,
    log: Arc<Mutex<Vec<http::Request<Vec<u8>>>>>,
}

impl MockClient {
    async fn push(&self, status: StatusCode, body: serde_json::Value) {
        let resp = http::Response::builder()
            .status(status)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(&body).unwrap())
            .unwrap();
        self.queue.lock().await.push_back(resp);
    }

    async fn requests(&self) -> usize {
        self.log.lock().await.len()
    }

    async fn query(&self, index: usize) -> BTreeMap<String, String> {
        let log = self.log.lock().await;
        let query = log[index].uri().query().unwrap_or_default().to_owned();
        serde_html_form::from_str(&query).unwrap()
    }
}

impl HttpClient for MockClient {
    type Error = std::convert::Infallible;

    fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> impl core::future::Future<
        Output = core::result::Result<http::Response<Vec<u8>>, Self::Error>,
    > + Send {
        let log = self.log.clone();
        let queue = self.queue.clone();
        async move {
            log.lock().await.push(request);
            Ok(queue.lock().await.pop_front().expect("no queued response"))
        }
    }
}

fn client(mock: &MockClient) -> Client<MockClient> {
    Client::for_subdomain(mock.clone(), "acme").unwrap()
}

fn page(results: serde_json::Value, has_more: bool, after: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "results": results,
        "meta": {
            "has_more": has_more,
            "after_cursor": after,
            "before_cursor": null,
        }
    })
}

#[tokio::test]
async fn missing_options_never_reach_transport() {
    let mock = MockClient::default();
    let err = client(&mock).search_export(None).await.unwrap_err();

    assert!(err.is_missing_options());
    assert!(matches!(
        err,
        ClientError::Encode(EncodeError::MissingOptions { .. })
    ));
    assert_eq!(mock.requests().await, 0);
}

#[tokio::test]
async fn first_page_request_shape() {
    let mock = MockClient::default();
    mock.push(StatusCode::OK, page(serde_json::json!([]), false, None))
        .await;

    let opts = SearchExportOptions::new()
        .query("type:ticket status:open")
        .page_size(100)
        .filter_type("ticket")
        .build();
    let (results, meta) = client(&mock).search_export(Some(&opts)).await.unwrap();
    assert!(results.is_empty());
    assert!(!meta.has_more);

    let log = mock.log.lock().await;
    let req = &log[0];
    assert_eq!(req.method(), http::Method::GET);
    assert_eq!(req.uri().path(), "/api/v2/search/export");
    assert_eq!(req.uri().host(), Some("acme.zendesk.com"));
    assert!(req.headers().get(http::header::USER_AGENT).is_some());
    drop(log);

    assert_eq!(
        mock.query(0).await,
        BTreeMap::from([
            ("filter[type]".to_owned(), "ticket".to_owned()),
            ("page[size]".to_owned(), "100".to_owned()),
            ("query".to_owned(), "type:ticket status:open".to_owned()),
        ])
    );
}

#[tokio::test]
async fn follows_cursor_to_second_page() {
    let mock = MockClient::default();
    mock.push(
        StatusCode::OK,
        page(
            serde_json::json!([{"result_type": "ticket", "id": 1, "subject": "first"}]),
            true,
            Some("abc"),
        ),
    )
    .await;
    mock.push(
        StatusCode::OK,
        page(
            serde_json::json!([{"result_type": "ticket", "id": 2, "subject": "second"}]),
            false,
            None,
        ),
    )
    .await;

    let client = client(&mock);
    let mut opts = SearchExportOptions::new()
        .query("status:open")
        .page_size(1)
        .build();
    let mut ids = Vec::new();
    loop {
        let (results, meta) = client.search_export(Some(&opts)).await.unwrap();
        ids.extend(results.iter().map(SearchExportResult::id));
        match opts.next_page(&meta).unwrap() {
            Some(next) => opts = next,
            None => break,
        }
    }

    assert_eq!(ids, vec![1, 2]);
    assert_eq!(mock.requests().await, 2);
    assert!(!mock.query(0).await.contains_key("page[after]"));
    let second = mock.query(1).await;
    assert_eq!(second.get("page[after]").map(String::as_str), Some("abc"));
    assert_eq!(second.get("page[size]").map(String::as_str), Some("1"));
    assert_eq!(opts.cursor, CursorState::after("abc"));
}

#[tokio::test]
async fn cursor_drives_paging_when_has_more_is_false() {
    let mock = MockClient::default();
    mock.push(
        StatusCode::OK,
        page(
            serde_json::json!([{"result_type": "user", "id": 7, "name": "Ann"}]),
            false,
            Some("def"),
        ),
    )
    .await;
    mock.push(StatusCode::OK, page(serde_json::json!([]), false, None))
        .await;

    let client = client(&mock);
    let mut opts = SearchExportOptions::new().query("type:user").build();
    let mut pages = 0;
    loop {
        let (_, meta) = client.search_export(Some(&opts)).await.unwrap();
        pages += 1;
        match opts.next_page(&meta).unwrap() {
            Some(next) => opts = next,
            None => break,
        }
    }

    assert_eq!(pages, 2);
    assert_eq!(
        mock.query(1).await.get("page[after]").map(String::as_str),
        Some("def")
    );
}

#[tokio::test]
async fn mixed_page_keeps_order() {
    let mock = MockClient::default();
    mock.push(
        StatusCode::OK,
        page(
            serde_json::json!([
                {"result_type": "user", "id": 100, "name": "A"},
                {"result_type": "ticket", "id": 200, "subject": "B"},
                {"result_type": "user", "id": 300, "name": "C"},
                {"result_type": "organization", "id": 400, "name": "D"},
                {"result_type": "group", "id": 500, "name": "E"},
                {"result_type": "topic", "id": 600, "name": "F"}
            ]),
            false,
            None,
        ),
    )
    .await;

    let opts = SearchExportOptions::new().query("A").build();
    let (results, _) = client(&mock).search_export(Some(&opts)).await.unwrap();

    let seen: Vec<(ResultKind, i64)> = results.iter().map(|r| (r.kind(), r.id())).collect();
    assert_eq!(
        seen,
        vec![
            (ResultKind::User, 100),
            (ResultKind::Ticket, 200),
            (ResultKind::User, 300),
            (ResultKind::Organization, 400),
            (ResultKind::Group, 500),
            (ResultKind::Topic, 600),
        ]
    );
    assert_eq!(results[0].as_user().unwrap().name.as_deref(), Some("A"));
    assert_eq!(results[1].as_ticket().unwrap().subject.as_deref(), Some("B"));
}

#[tokio::test]
async fn unknown_result_type_fails_the_page() {
    let mock = MockClient::default();
    mock.push(
        StatusCode::OK,
        page(
            serde_json::json!([
                {"result_type": "user", "id": 1},
                {"result_type": "article", "id": 2, "title": "How to"}
            ]),
            true,
            Some("next"),
        ),
    )
    .await;

    let opts = SearchExportOptions::new().query("x").build();
    match client(&mock).search_export(Some(&opts)).await {
        Err(ClientError::Decode(DecodeError::UnknownDiscriminator {
            index,
            tag,
            fragment,
            ..
        })) => {
            assert_eq!(index, 1);
            assert_eq!(tag.as_deref(), Some("article"));
            assert!(fragment.contains("How to"));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn missing_result_type_fails_the_page() {
    let mock = MockClient::default();
    mock.push(
        StatusCode::OK,
        page(serde_json::json!([{"id": 1, "name": "nobody"}]), false, None),
    )
    .await;

    let opts = SearchExportOptions::new().query("x").build();
    let err = client(&mock).search_export(Some(&opts)).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Decode(DecodeError::UnknownDiscriminator {
            index: 0,
            tag: None,
            ..
        })
    ));
}

#[tokio::test]
async fn non_envelope_body_is_malformed() {
    let mock = MockClient::default();
    mock.push(
        StatusCode::OK,
        serde_json::json!([{"result_type": "user", "id": 1}]),
    )
    .await;

    let opts = SearchExportOptions::new().query("x").build();
    let err = client(&mock).search_export(Some(&opts)).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Decode(DecodeError::MalformedEnvelope(_))
    ));
}

#[tokio::test]
async fn error_status_surfaces_body() {
    let mock = MockClient::default();
    mock.push(
        StatusCode::UNPROCESSABLE_ENTITY,
        serde_json::json!({"error": "InvalidPaginationParameter", "description": "page[after] is invalid"}),
    )
    .await;

    let opts = SearchExportOptions::new()
        .query("x")
        .cursor(CursorState::after("stale"))
        .build();
    match client(&mock).search_export(Some(&opts)).await {
        Err(ClientError::Http(err)) => {
            assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
            let body = err.api_error().unwrap();
            assert_eq!(body.error.as_str(), "InvalidPaginationParameter");
            assert_eq!(body.description.as_deref(), Some("page[after] is invalid"));
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert_eq!(mock.requests().await, 1);
}
