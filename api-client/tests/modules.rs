//! End-to-end resource module behavior against a mocked backend.

use battle_rap_api::models::RoleChangeOp;
use battle_rap_api::modules::admin_battles::ListAdminBattlesParams;
use battle_rap_api::modules::admin_users::ListAdminUsersParams;
use battle_rap_api::modules::auth::LoginPayload;
use battle_rap_api::statuses::MatchStatus;
use battle_rap_api::{BattleRapApi, RequestOptions, UserRole};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn login_serializes_credentials_and_maps_the_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({
            "email": "mc@example.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-1",
            "token_type": "bearer",
            "expires_in": 900,
            "user": {
                "id": "u-1",
                "email": "mc@example.com",
                "display_name": "MC One",
                "roles": ["artist", "user"]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = BattleRapApi::new(server.uri());
    let payload = LoginPayload {
        email: "mc@example.com".into(),
        password: "hunter2".into(),
    };
    let session = api.auth().login(&payload, &RequestOptions::new()).await.unwrap();

    assert_eq!(session.access_token, "tok-1");
    assert_eq!(session.user.roles, vec![UserRole::Artist, UserRole::User]);
}

#[tokio::test]
async fn admin_battles_list_forwards_filters_as_snake_case_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/battles"))
        .and(query_param("page", "2"))
        .and(query_param("status", "finished"))
        .and(query_param("round_id", "r-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "page": 2,
            "limit": 20,
            "total": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = BattleRapApi::new(server.uri()).with_token("admin-token");
    let params = ListAdminBattlesParams {
        page: Some(2),
        status: Some(MatchStatus::Finished),
        round_id: Some("r-1".into()),
        ..Default::default()
    };
    let list = api
        .admin_battles()
        .list(&params, &RequestOptions::new())
        .await
        .unwrap();
    assert_eq!(list.page, 2);
    assert!(list.data.is_empty());
}

#[tokio::test]
async fn role_change_posts_op_and_maps_the_resulting_state() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/admin/users/u-9/roles"))
        .and(header("authorization", "Bearer admin-token"))
        .and(body_json(json!({ "op": "grant", "role": "judge" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": "u-9",
            "roles": ["user", "judge"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = BattleRapApi::new(server.uri()).with_token("admin-token");
    let state = api
        .admin_users()
        .change_role("u-9", RoleChangeOp::Grant, UserRole::Judge, &RequestOptions::new())
        .await
        .unwrap();

    assert_eq!(state.user_id, "u-9");
    assert_eq!(state.roles, vec![UserRole::Judge, UserRole::User]);
}

#[tokio::test]
async fn random_assignment_resolves_none_on_null_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/judge/assignments/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
        .mount(&server)
        .await;

    let api = BattleRapApi::new(server.uri()).with_token("judge-token");
    let assignment = api
        .judge()
        .request_random_assignment(&RequestOptions::new())
        .await
        .unwrap();
    assert!(assignment.is_none());
}

#[tokio::test]
async fn own_application_resolves_none_on_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/applications/me"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let api = BattleRapApi::new(server.uri()).with_token("artist-token");
    let application = api
        .applications()
        .get_own(&RequestOptions::new())
        .await
        .unwrap();
    assert!(application.is_none());
}

#[tokio::test]
async fn admin_users_list_merges_caller_query_with_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/users"))
        .and(query_param("trace", "abc"))
        .and(query_param("search", "mc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "page": 1,
            "limit": 50,
            "total": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = BattleRapApi::new(server.uri()).with_token("admin-token");
    let params = ListAdminUsersParams {
        search: Some("mc".into()),
        ..Default::default()
    };
    let options =
        RequestOptions::new().query(battle_rap_api::Query::new().push("trace", "abc"));
    let list = api.admin_users().list(&params, &options).await.unwrap();
    assert_eq!(list.limit, 50);
}
