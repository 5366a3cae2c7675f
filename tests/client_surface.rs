// tests/client_surface.rs
//! Drives the full client surface through a scripted transport: endpoint
//! routing, response parsing, error mapping, and pagination wiring.

mod common;

use common::{ok, page_json, user_list_json, with_status, MockTransport};
use futures::StreamExt;
use notionkit::api::transport::Method;
use notionkit::{
    Client, CreateCommentRequest, CreateFileUploadRequest, CreatePageRequest, Error, ErrorCode,
    QueryRequest, SearchRequest,
};
use notionkit::{BlockId, FileUploadId, PageId, UserId};
use pretty_assertions::assert_eq;

fn page_id() -> PageId {
    PageId::parse("550e8400e29b41d4a716446655440000").unwrap()
}

#[tokio::test]
async fn retrieve_page_hits_the_right_path_and_parses() {
    let transport = MockTransport::new(|request| {
        assert_eq!(request.method, Method::GET);
        ok(&page_json("59833787-2cf9-4fdf-8782-e53db20768a5", "Tuscan kale"))
    });
    let client = Client::with_transport(transport.clone());

    let page = client.pages().retrieve(&page_id()).await.unwrap();
    assert_eq!(page.title().as_deref(), Some("Tuscan kale"));

    let requests = transport.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].path,
        "pages/550e8400-e29b-41d4-a716-446655440000"
    );
}

#[tokio::test]
async fn create_page_posts_the_builder_payload() {
    let transport = MockTransport::new(|_| ok(&page_json("59833787-2cf9-4fdf-8782-e53db20768a5", "New page")));
    let client = Client::with_transport(transport.clone());

    let request = CreatePageRequest::new(notionkit::model::Parent::page(page_id())).title("New page");
    client.pages().create(request).await.unwrap();

    let requests = transport.requests.lock().unwrap();
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path, "pages");
    let body = requests[0].body.as_ref().unwrap();
    assert_eq!(
        body["properties"]["title"]["title"][0]["text"]["content"],
        "New page"
    );
}

#[tokio::test]
async fn api_errors_surface_with_typed_codes() {
    let transport = MockTransport::new(|_| {
        with_status(
            404,
            r#"{
                "object": "error",
                "status": 404,
                "code": "object_not_found",
                "message": "Could not find page",
                "request_id": "req_1"
            }"#,
        )
    });
    let client = Client::with_transport(transport);

    let result = client.pages().retrieve(&page_id()).await;
    match result {
        Err(Error::Api { code, request_id, .. }) => {
            assert_eq!(code, ErrorCode::ObjectNotFound);
            assert!(code.is_not_found());
            assert_eq!(request_id.as_deref(), Some("req_1"));
        }
        other => panic!("expected Error::Api, got {:?}", other),
    }
}

#[tokio::test]
async fn users_list_walks_every_page_via_query_cursors() {
    let transport = MockTransport::new(|request| {
        assert_eq!(request.path, "users");
        let cursor = request
            .query
            .iter()
            .find(|(k, _)| k == "start_cursor")
            .map(|(_, v)| v.as_str());
        match cursor {
            None => ok(&user_list_json(&["Ada", "Grace"], Some("c1"))),
            Some("c1") => ok(&user_list_json(&["Edsger"], None)),
            Some(other) => panic!("unexpected cursor {other}"),
        }
    });
    let client = Client::with_transport(transport.clone());

    let users = client.users().list().await.unwrap();
    let names: Vec<_> = users.iter().filter_map(|u| u.name.as_deref()).collect();
    assert_eq!(names, vec!["Ada", "Grace", "Edsger"]);
    assert_eq!(transport.request_count(), 2);

    // page_size rides along on every fetch
    let requests = transport.requests.lock().unwrap();
    assert!(requests
        .iter()
        .all(|r| r.query.iter().any(|(k, v)| k == "page_size" && v == "100")));
}

#[tokio::test]
async fn users_stream_stops_fetching_when_dropped_early() {
    let transport = MockTransport::new(|request| {
        let cursor = request
            .query
            .iter()
            .find(|(k, _)| k == "start_cursor")
            .map(|(_, v)| v.clone())
            .unwrap_or_default();
        // Every page claims more; an eager consumer would never stop.
        let next = format!("c{}", cursor.len() + 1);
        ok(&user_list_json(&["A", "B", "C"], Some(&next)))
    });
    let client = Client::with_transport(transport.clone());

    let users = client.users();
    let stream = users.stream();
    let first_five: Vec<_> = stream.take(5).map(|u| u.unwrap()).collect().await;

    assert_eq!(first_five.len(), 5);
    assert!(transport.request_count() <= 2);
}

#[tokio::test]
async fn database_query_paginates_through_the_request_body() {
    let transport = MockTransport::new(|request| {
        assert_eq!(request.method, Method::POST);
        let body = request.body.as_ref().unwrap();
        assert_eq!(body["page_size"], 100);
        match body.get("start_cursor").and_then(|c| c.as_str()) {
            None => ok(&format!(
                r#"{{"object": "list", "results": [{}], "next_cursor": "c1", "has_more": true}}"#,
                page_json("11111111-1111-4111-8111-111111111111", "Row 1")
            )),
            Some("c1") => ok(&format!(
                r#"{{"object": "list", "results": [{}], "next_cursor": null, "has_more": false}}"#,
                page_json("22222222-2222-4222-8222-222222222222", "Row 2")
            )),
            Some(other) => panic!("unexpected cursor {other}"),
        }
    });
    let client = Client::with_transport(transport.clone());

    let database_id = notionkit::DatabaseId::parse("bc1211cae3f14939ae345260b16f627c").unwrap();
    let rows = client
        .databases()
        .query(&database_id, QueryRequest::new())
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].title().as_deref(), Some("Row 2"));
    assert_eq!(
        transport.requests.lock().unwrap()[0].path,
        "databases/bc1211ca-e3f1-4939-ae34-5260b16f627c/query"
    );
}

#[tokio::test]
async fn search_decodes_mixed_object_kinds() {
    let transport = MockTransport::new(|request| {
        assert_eq!(request.path, "search");
        let body = request.body.as_ref().unwrap();
        assert_eq!(body["query"], "kale");
        ok(&format!(
            r#"{{
                "object": "list",
                "results": [
                    {},
                    {{
                        "object": "database",
                        "id": "bc1211ca-e3f1-4939-ae34-5260b16f627c",
                        "created_time": "2021-07-08T23:50:00.000Z",
                        "last_edited_time": "2021-07-08T23:50:00.000Z",
                        "title": [{{"type": "text", "text": {{"content": "Recipes"}}, "plain_text": "Recipes"}}],
                        "parent": {{"type": "workspace", "workspace": true}},
                        "properties": {{}}
                    }}
                ],
                "next_cursor": null,
                "has_more": false
            }}"#,
            page_json("59833787-2cf9-4fdf-8782-e53db20768a5", "Tuscan kale")
        ))
    });
    let client = Client::with_transport(transport);

    let results = client
        .search()
        .query(SearchRequest::new().query("kale"))
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title().as_deref(), Some("Tuscan kale"));
    assert_eq!(results[1].title().as_deref(), Some("Recipes"));
}

#[tokio::test]
async fn comments_list_filters_by_block_id() {
    let transport = MockTransport::new(|request| {
        assert_eq!(request.path, "comments");
        assert!(request
            .query
            .iter()
            .any(|(k, v)| k == "block_id" && v == "550e8400-e29b-41d4-a716-446655440000"));
        ok(r#"{"object": "list", "results": [], "next_cursor": null, "has_more": false}"#)
    });
    let client = Client::with_transport(transport);

    let block_id = BlockId::parse("550e8400e29b41d4a716446655440000").unwrap();
    let comments = client.comments().list(&block_id).await.unwrap();
    assert!(comments.is_empty());
}

#[tokio::test]
async fn comment_create_posts_the_thread_payload() {
    let transport = MockTransport::new(|request| {
        let body = request.body.as_ref().unwrap();
        assert_eq!(body["rich_text"][0]["text"]["content"], "Looks good");
        ok(r#"{
            "object": "comment",
            "id": "94cc56ab-9f02-409d-9f99-1037e9fe502f",
            "parent": {"type": "page_id", "page_id": "550e8400-e29b-41d4-a716-446655440000"},
            "discussion_id": "f1407351-36f5-4c49-a13c-49f8ba11776d",
            "created_time": "2022-07-15T16:52:00.000Z",
            "last_edited_time": "2022-07-15T19:16:00.000Z",
            "created_by": {"object": "user", "id": "067dee40-6ebd-496f-b446-093c715fb5ec"},
            "rich_text": [{"type": "text", "text": {"content": "Looks good"}, "plain_text": "Looks good"}]
        }"#)
    });
    let client = Client::with_transport(transport);

    let comment = client
        .comments()
        .create(CreateCommentRequest::on_page(page_id(), "Looks good"))
        .await
        .unwrap();
    assert_eq!(comment.text(), "Looks good");
}

#[tokio::test]
async fn multi_part_upload_sends_ordered_parts() {
    let transport = MockTransport::new(|request| {
        // create + complete run through the JSON path
        match request.path.as_str() {
            "file_uploads" => ok(r#"{
                "object": "file_upload",
                "id": "b52b8ed6-e029-4707-a671-832549c09de3",
                "created_time": "2025-03-15T20:53:00.000Z",
                "status": "pending",
                "mode": "multi_part",
                "number_of_parts": {"total": 2, "sent": 0}
            }"#),
            path if path.ends_with("/complete") => ok(r#"{
                "object": "file_upload",
                "id": "b52b8ed6-e029-4707-a671-832549c09de3",
                "created_time": "2025-03-15T20:53:00.000Z",
                "status": "uploaded"
            }"#),
            other => panic!("unexpected path {other}"),
        }
    });
    let client = Client::with_transport(transport.clone());

    let created = client
        .file_uploads()
        .create(CreateFileUploadRequest::multi_part("video.mp4", 2))
        .await
        .unwrap();
    let id: FileUploadId = created.id;

    client
        .file_uploads()
        .send_part(&id, "video.mp4", vec![1, 2, 3], 1)
        .await
        .unwrap();
    client
        .file_uploads()
        .send_part(&id, "video.mp4", vec![4, 5], 2)
        .await
        .unwrap();
    let done = client.file_uploads().complete(&id).await.unwrap();
    assert_eq!(done.status, notionkit::model::FileUploadStatus::Uploaded);

    let uploads = transport.uploads.lock().unwrap();
    assert_eq!(uploads.len(), 2);
    assert_eq!(uploads[0].part_number, Some(1));
    assert_eq!(uploads[1].part_number, Some(2));
    assert_eq!(
        uploads[0].path,
        "file_uploads/b52b8ed6-e029-4707-a671-832549c09de3/send"
    );
}

#[tokio::test]
async fn users_me_routes_to_the_bot_endpoint() {
    let transport = MockTransport::new(|request| {
        assert_eq!(request.path, "users/me");
        ok(r#"{"object": "user", "id": "16d84278-ab0e-484c-9bdd-b35da3bd8905", "name": "Integration", "type": "bot", "bot": {}}"#)
    });
    let client = Client::with_transport(transport);

    let me = client.users().me().await.unwrap();
    assert_eq!(me.name.as_deref(), Some("Integration"));
    assert_eq!(
        me.id,
        UserId::parse("16d84278-ab0e-484c-9bdd-b35da3bd8905").unwrap()
    );
}
