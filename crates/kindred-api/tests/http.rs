use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use kindred_api::auth::AppStateInner;
use kindred_db::Database;

fn app() -> Router {
    let db = Database::open_in_memory().unwrap();
    kindred_api::router(Arc::new(AppStateInner { db }))
}

async fn post_raw(app: &Router, path: &str, body: Value) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::post(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let (status, raw) = post_raw(app, path, body).await;
    (status, serde_json::from_str(&raw).unwrap_or(Value::Null))
}

async fn get_json(app: &Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn signup(app: &Router, email: &str, password: &str, username: &str) -> Value {
    let (status, user) = post_json(
        app,
        "/signup",
        json!({ "email": email, "password": password, "username": username }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    user
}

#[tokio::test]
async fn signup_then_login_returns_same_identity() {
    let app = app();
    let created = signup(&app, "a@x.com", "pw", "alice").await;
    assert_eq!(created["username"], "alice");
    // the hash stays server-side
    assert!(created.get("password").is_none());

    let (status, logged_in) = post_json(
        &app,
        "/login",
        json!({ "email": "a@x.com", "password": "pw" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(logged_in["id"], created["id"]);
    assert_eq!(logged_in["email"], "a@x.com");
}

#[tokio::test]
async fn login_with_wrong_password_is_401() {
    let app = app();
    signup(&app, "a@x.com", "pw", "alice").await;

    let (status, body) = post_raw(
        &app,
        "/login",
        json!({ "email": "a@x.com", "password": "wrong" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Invalid credentials");
}

#[tokio::test]
async fn login_with_unknown_email_is_401() {
    let app = app();

    let (status, body) = post_raw(
        &app,
        "/login",
        json!({ "email": "nobody@x.com", "password": "pw" }),
    )
    .await;
    // indistinguishable from a wrong password
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Invalid credentials");
}

#[tokio::test]
async fn signup_with_taken_email_is_400() {
    let app = app();
    signup(&app, "a@x.com", "pw", "alice").await;

    let (status, body) = post_json(
        &app,
        "/signup",
        json!({ "email": "a@x.com", "password": "other", "username": "alice2" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "storage message passes through: {body}");
}

#[tokio::test]
async fn friendship_is_visible_only_to_the_initiator() {
    let app = app();
    let alice = signup(&app, "a@x.com", "pw", "alice").await;
    let bob = signup(&app, "b@x.com", "pw", "bob").await;

    let (status, edge) = post_json(
        &app,
        "/add-friend",
        json!({ "userId": alice["id"], "friendId": bob["id"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edge["userId"], alice["id"]);
    assert_eq!(edge["friendId"], bob["id"]);

    let (status, list) = get_json(&app, &format!("/friends/{}", alice["id"].as_str().unwrap())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["friendId"], bob["id"]);

    // bob never added alice back
    let (status, list) = get_json(&app, &format!("/friends/{}", bob["id"].as_str().unwrap())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn match_is_listed_for_both_participants() {
    let app = app();
    let u1 = signup(&app, "a@x.com", "pw", "alice").await;
    let u2 = signup(&app, "b@x.com", "pw", "bob").await;
    let u3 = signup(&app, "c@x.com", "pw", "carol").await;

    let (status, proposal) = post_json(
        &app,
        "/match",
        json!({ "userId": u1["id"], "matchId": u2["id"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(proposal["status"], "pending");

    // both sides see the same row, with both account records attached
    for user in [&u1, &u2] {
        let (status, list) =
            get_json(&app, &format!("/matches/{}", user["id"].as_str().unwrap())).await;
        assert_eq!(status, StatusCode::OK);
        let list = list.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["status"], "pending");
        assert_eq!(list[0]["proposer"]["id"], u1["id"]);
        assert_eq!(list[0]["proposer"]["username"], "alice");
        assert_eq!(list[0]["target"]["id"], u2["id"]);
        assert_eq!(list[0]["target"]["username"], "bob");
    }

    let (status, list) = get_json(&app, &format!("/matches/{}", u3["id"].as_str().unwrap())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn match_with_unknown_target_is_400() {
    let app = app();
    let alice = signup(&app, "a@x.com", "pw", "alice").await;

    let (status, body) = post_json(
        &app,
        "/match",
        json!({ "userId": alice["id"], "matchId": "00000000-0000-0000-0000-00000000dead" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn sent_messages_come_back_in_order() {
    let app = app();
    let alice = signup(&app, "a@x.com", "pw", "alice").await;
    let bob = signup(&app, "b@x.com", "pw", "bob").await;

    for content in ["hey", "hello back"] {
        let (status, msg) = post_json(
            &app,
            "/messages",
            json!({ "content": content, "senderId": alice["id"], "receiverId": bob["id"] }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(msg["content"], content);
    }

    let (status, list) = get_json(&app, "/messages").await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["content"], "hey");
    assert_eq!(list[1]["content"], "hello back");
    assert_eq!(list[1]["senderId"], alice["id"]);
    assert_eq!(list[1]["receiverId"], bob["id"]);
}
