use battle_rap_api::{ApiError, Query, RequestOptions, Transport};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn array_query_values_become_repeated_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/artists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&server)
        .await;

    let transport = Transport::new(server.uri());
    let options = RequestOptions::new().query(
        Query::new()
            .push("page", 1)
            .push_all("role", ["artist", "judge"]),
    );
    let _: Value = transport.get("/api/v1/artists", &options).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.query(),
        Some("page=1&role=artist&role=judge")
    );
}

#[tokio::test]
async fn bearer_token_is_attached_and_per_request_token_wins() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .and(header("authorization", "Bearer per-request"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let transport = Transport::new(server.uri()).with_token("default-token");
    let options = RequestOptions::with_token("per-request");
    let _: Value = transport.get("/api/v1/auth/me", &options).await.unwrap();
}

#[tokio::test]
async fn non_2xx_with_json_message_surfaces_that_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/judge/assignments"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "message": "judges only" })),
        )
        .mount(&server)
        .await;

    let transport = Transport::new(server.uri());
    let err = transport
        .get::<Value>("/api/v1/judge/assignments", &RequestOptions::new())
        .await
        .unwrap_err();

    match err {
        ApiError::Status { status, message, data } => {
            assert_eq!(status, 403);
            assert_eq!(message, "judges only");
            assert_eq!(data, json!({ "message": "judges only" }));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_2xx_without_message_gets_generic_description() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let transport = Transport::new(server.uri());
    let err = transport
        .get::<Value>("/missing", &RequestOptions::new())
        .await
        .unwrap_err();

    match err {
        ApiError::Status { status, message, data } => {
            assert_eq!(status, 404);
            assert!(message.contains("/missing"));
            assert!(message.contains("404"));
            assert_eq!(data, Value::String("not found".to_string()));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_responses_resolve_to_null_payloads() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/admin/battles/b-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let transport = Transport::new(server.uri());
    let payload: Option<Value> = transport
        .delete("/api/v1/admin/battles/b-1", &RequestOptions::new())
        .await
        .unwrap();
    assert_eq!(payload, None);
}

#[tokio::test]
async fn non_json_bodies_are_returned_as_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("ok")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let transport = Transport::new(server.uri());
    let payload: Value = transport.get("/health", &RequestOptions::new()).await.unwrap();
    assert_eq!(payload, Value::String("ok".to_string()));
}

#[tokio::test]
async fn json_bodies_carry_the_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let transport = Transport::new(server.uri());
    let body = json!({ "email": "mc@example.com", "password": "secret" });
    let _: Value = transport
        .post("/api/v1/auth/login", Some(&body), &RequestOptions::new())
        .await
        .unwrap();
}
