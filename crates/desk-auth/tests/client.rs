//! `AuthClient` against a fake auth endpoint.

use chrono::{TimeDelta, Utc};
use desk_auth::refresh::refresh_if_needed;
use desk_auth::{AuthClient, AuthError, AuthSession, SignUpOutcome};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn token_body(access: &str, refresh: &str, expires_at: i64) -> serde_json::Value {
    json!({
        "access_token": access,
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": expires_at,
        "refresh_token": refresh,
        "user": { "id": "u-1", "email": "ada@example.com" }
    })
}

#[tokio::test]
async fn password_sign_in_returns_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(header("apikey", "anon"))
        .and(body_json(json!({"email": "ada@example.com", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("acc-1", "ref-1", 1_800_000_000)))
        .expect(1)
        .mount(&server)
        .await;

    let client = AuthClient::new(&server.uri(), "anon");
    let session = client
        .sign_in_with_password("ada@example.com", "pw")
        .await
        .unwrap();

    assert_eq!(session.access_token, "acc-1");
    assert_eq!(session.refresh_token.as_deref(), Some("ref-1"));
    assert_eq!(session.user_id, "u-1");
    assert_eq!(session.expires_at.timestamp(), 1_800_000_000);
}

#[tokio::test]
async fn rejected_password_maps_to_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let client = AuthClient::new(&server.uri(), "anon");
    let err = client
        .sign_in_with_password("ada@example.com", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn sign_up_without_session_requires_confirmation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .and(body_json(json!({
            "email": "new@example.com",
            "password": "pw",
            "data": { "full_name": "New User" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u-new",
            "email": "new@example.com",
            "confirmation_sent_at": "2026-10-19T12:00:00Z"
        })))
        .mount(&server)
        .await;

    let client = AuthClient::new(&server.uri(), "anon");
    let outcome = client
        .sign_up("new@example.com", "pw", "New User")
        .await
        .unwrap();
    assert_eq!(
        outcome,
        SignUpOutcome::ConfirmationPending {
            user_id: "u-new".into(),
            email: "new@example.com".into(),
        }
    );
}

#[tokio::test]
async fn sign_up_with_autoconfirm_signs_in() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("acc-2", "ref-2", 1_800_000_000)))
        .mount(&server)
        .await;

    let client = AuthClient::new(&server.uri(), "anon");
    let outcome = client.sign_up("ada@example.com", "pw", "Ada").await.unwrap();
    assert!(matches!(outcome, SignUpOutcome::SignedIn(s) if s.access_token == "acc-2"));
}

#[tokio::test]
async fn duplicate_sign_up_surfaces_api_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "code": 422,
            "msg": "User already registered"
        })))
        .mount(&server)
        .await;

    let client = AuthClient::new(&server.uri(), "anon");
    let err = client.sign_up("ada@example.com", "pw", "Ada").await.unwrap_err();
    match err {
        AuthError::Api { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "User already registered");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn sign_out_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(header("authorization", "Bearer acc-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = AuthClient::new(&server.uri(), "anon");
    client.sign_out("acc-1").await.unwrap();
}

fn stored_session(expires_in: TimeDelta, refresh: Option<&str>) -> AuthSession {
    AuthSession {
        access_token: "old".into(),
        refresh_token: refresh.map(str::to_string),
        user_id: "u-1".into(),
        email: None,
        expires_at: Utc::now() + expires_in,
    }
}

#[tokio::test]
async fn fresh_session_is_not_refreshed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = AuthClient::new(&server.uri(), "anon");
    let session = stored_session(TimeDelta::hours(1), Some("ref-1"));
    let resolved = refresh_if_needed(&client, session.clone()).await.unwrap();
    assert_eq!(resolved, Some(session));
}

#[tokio::test]
async fn near_expiry_session_is_refreshed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "refresh_token"))
        .and(body_json(json!({"refresh_token": "ref-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("new", "ref-2", 1_800_000_000)))
        .expect(1)
        .mount(&server)
        .await;

    let client = AuthClient::new(&server.uri(), "anon");
    let session = stored_session(TimeDelta::seconds(30), Some("ref-1"));
    let resolved = refresh_if_needed(&client, session).await.unwrap().unwrap();
    assert_eq!(resolved.access_token, "new");
    assert_eq!(resolved.refresh_token.as_deref(), Some("ref-2"));
}

#[tokio::test]
async fn expired_session_without_refresh_token_is_dropped() {
    let server = MockServer::start().await;
    let client = AuthClient::new(&server.uri(), "anon");
    let session = stored_session(TimeDelta::seconds(-10), None);
    assert_eq!(refresh_if_needed(&client, session).await.unwrap(), None);
}

#[tokio::test]
async fn revoked_refresh_token_is_dropped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error_description": "Invalid Refresh Token: Already Used"
        })))
        .mount(&server)
        .await;

    let client = AuthClient::new(&server.uri(), "anon");
    let session = stored_session(TimeDelta::seconds(-10), Some("ref-used"));
    assert_eq!(refresh_if_needed(&client, session).await.unwrap(), None);
}
