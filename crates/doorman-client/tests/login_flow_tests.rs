//! Integration tests for the dual-write login flow using a wiremock server
//! as the remote endpoint and an in-memory store.

use doorman_client::{LoginFlow, RemoteAuth, SessionState};
use doorman_config::SessionFile;
use doorman_core::Credentials;
use doorman_db::UserStore;

use googletest::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path},
};

const LOGIN_PATH: &str = "/api/login";

struct Harness {
    store: UserStore,
    session: SessionState,
    _session_dir: TempDir,
}

impl Harness {
    async fn new() -> Self {
        let store = UserStore::open_in_memory().await.unwrap();
        let session_dir = TempDir::new().unwrap();
        let session = SessionState::load(SessionFile::new(session_dir.path())).unwrap();
        Self {
            store,
            session,
            _session_dir: session_dir,
        }
    }
}

fn creds(email: &str) -> Credentials {
    Credentials::new(email, "secret")
}

#[tokio::test]
async fn given_remote_success_when_logging_in_then_remote_id_used_and_mirrored() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .and(body_string_contains("a@x.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "userId": 101,
            "message": "Login successful"
        })))
        .mount(&mock_server)
        .await;

    let remote = RemoteAuth::new(&mock_server.uri(), LOGIN_PATH);
    let mut h = Harness::new().await;
    let mut flow = LoginFlow::new(&remote, &h.store, &mut h.session);

    let outcome = flow.login(creds("a@x.com")).await.unwrap();

    assert!(!outcome.was_fallback());
    assert_that!(outcome.record().id, eq(101));
    assert_that!(outcome.record().email, eq("a@x.com"));

    // Mirrored locally with the remote id
    let mirrored = h.store.latest_user().await.unwrap().unwrap();
    assert_that!(mirrored.id, eq(101));

    // Session reflects the committed record
    assert_that!(h.session.current().unwrap().id, eq(101));
}

#[tokio::test]
async fn given_remote_success_without_id_when_logging_in_then_fallback_id_assigned() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&mock_server)
        .await;

    let remote = RemoteAuth::new(&mock_server.uri(), LOGIN_PATH);
    let mut h = Harness::new().await;
    let mut flow = LoginFlow::new(&remote, &h.store, &mut h.session);

    let outcome = flow.login(creds("a@x.com")).await.unwrap();

    assert!(!outcome.was_fallback());
    // Timestamp-derived stand-in identifier
    assert_that!(outcome.record().id, gt(0));
}

#[tokio::test]
async fn given_remote_id_inside_user_payload_when_logging_in_then_it_is_used() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "user": { "id": 55, "email": "a@x.com" }
        })))
        .mount(&mock_server)
        .await;

    let remote = RemoteAuth::new(&mock_server.uri(), LOGIN_PATH);
    let mut h = Harness::new().await;
    let mut flow = LoginFlow::new(&remote, &h.store, &mut h.session);

    let outcome = flow.login(creds("a@x.com")).await.unwrap();

    assert_that!(outcome.record().id, eq(55));
}

#[tokio::test]
async fn given_remote_rejection_when_logging_in_then_local_fallback_commits() {
    // Remote answers but with success=false
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Server storage failed"
        })))
        .mount(&mock_server)
        .await;

    let remote = RemoteAuth::new(&mock_server.uri(), LOGIN_PATH);
    let mut h = Harness::new().await;
    let mut flow = LoginFlow::new(&remote, &h.store, &mut h.session);

    let outcome = flow.login(creds("a@x.com")).await.unwrap();

    assert!(outcome.was_fallback());
    assert_that!(h.store.user_count().await.unwrap(), eq(1));
    let stored = h.store.latest_user().await.unwrap().unwrap();
    assert_that!(stored.email, eq("a@x.com"));
    assert_that!(h.session.current().unwrap().email, eq("a@x.com"));
}

#[tokio::test]
async fn given_remote_server_error_when_logging_in_then_local_fallback_commits() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let remote = RemoteAuth::new(&mock_server.uri(), LOGIN_PATH);
    let mut h = Harness::new().await;
    let mut flow = LoginFlow::new(&remote, &h.store, &mut h.session);

    let outcome = flow.login(creds("a@x.com")).await.unwrap();

    assert!(outcome.was_fallback());
    assert_that!(h.store.user_count().await.unwrap(), eq(1));
}

#[tokio::test]
async fn given_unreachable_remote_when_logging_in_then_local_fallback_commits() {
    // Nothing listens here; the connection error is the RemoteFailed path
    let remote = RemoteAuth::new("http://127.0.0.1:1", LOGIN_PATH);
    let mut h = Harness::new().await;
    let mut flow = LoginFlow::new(&remote, &h.store, &mut h.session);

    let outcome = flow.login(creds("a@x.com")).await.unwrap();

    assert!(outcome.was_fallback());
    assert_that!(h.session.current().unwrap().email, eq("a@x.com"));
}

#[tokio::test]
async fn given_duplicate_email_with_remote_down_when_logging_in_twice_then_second_fails() {
    let remote = RemoteAuth::new("http://127.0.0.1:1", LOGIN_PATH);
    let mut h = Harness::new().await;

    let first = {
        let mut flow = LoginFlow::new(&remote, &h.store, &mut h.session);
        flow.login(creds("a@x.com")).await
    };
    assert!(first.is_ok());

    let second = {
        let mut flow = LoginFlow::new(&remote, &h.store, &mut h.session);
        flow.login(creds("a@x.com")).await
    };

    let err = second.unwrap_err();
    assert!(err.is_duplicate_email());
    // First record is untouched
    assert_that!(h.store.user_count().await.unwrap(), eq(1));
}

#[tokio::test]
async fn given_missing_password_when_logging_in_then_validation_error_without_side_effects() {
    let remote = RemoteAuth::new("http://127.0.0.1:1", LOGIN_PATH);
    let mut h = Harness::new().await;
    let mut flow = LoginFlow::new(&remote, &h.store, &mut h.session);

    let result = flow.login(Credentials::new("a@x.com", "")).await;

    assert_that!(result, err(anything()));
    assert_that!(h.store.user_count().await.unwrap(), eq(0));
    assert!(!h.session.is_logged_in());
}

#[tokio::test]
async fn given_local_mirror_conflict_when_remote_succeeds_then_login_still_commits() {
    // The email already exists locally, so the advisory mirror will fail
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "userId": 9
        })))
        .mount(&mock_server)
        .await;

    let remote = RemoteAuth::new(&mock_server.uri(), LOGIN_PATH);
    let mut h = Harness::new().await;
    let request = creds("a@x.com").into_request().unwrap();
    h.store.add_user(&request).await.unwrap();

    let mut flow = LoginFlow::new(&remote, &h.store, &mut h.session);
    let outcome = flow.login(creds("a@x.com")).await.unwrap();

    // Remote path committed despite the failed mirror
    assert!(!outcome.was_fallback());
    assert_that!(outcome.record().id, eq(9));
    assert_that!(h.session.current().unwrap().id, eq(9));
    assert_that!(h.store.user_count().await.unwrap(), eq(1));
}

#[tokio::test]
async fn given_saved_session_when_reloaded_then_round_trips() {
    // Simulates a fresh page load after a committed login
    let remote = RemoteAuth::new("http://127.0.0.1:1", LOGIN_PATH);
    let session_dir = TempDir::new().unwrap();
    let store = UserStore::open_in_memory().await.unwrap();

    let committed = {
        let mut session = SessionState::load(SessionFile::new(session_dir.path())).unwrap();
        let mut flow = LoginFlow::new(&remote, &store, &mut session);
        flow.login(creds("a@x.com")).await.unwrap().record().clone()
    };

    let reloaded = SessionState::load(SessionFile::new(session_dir.path())).unwrap();

    assert_that!(reloaded.current(), some(eq(&committed)));
}
