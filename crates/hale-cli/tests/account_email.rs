//! Integration tests for the one-shot account operations.
//!
//! Runs the binary against a mock portal and verifies the change-email
//! flow, including the client-side duplicate-email check.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a temp HALE_HOME with a config pointing at the mock portal.
fn temp_hale_home(portal_uri: &str) -> TempDir {
    let home = TempDir::new().expect("create temp hale home");
    std::fs::write(
        home.path().join("config.toml"),
        format!("base_url = \"{portal_uri}\"\ntoken = \"test-token\"\n"),
    )
    .expect("write test config");
    home
}

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn session_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "user_id": "u1",
        "username": "kai",
        "primary_email": email,
        "email_verified": false,
        "roles": ["member"],
    })
}

#[tokio::test]
async fn test_change_email_success_also_resends() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let mock_server = MockServer::start().await;
    let hale_home = temp_hale_home(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/api/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body("kai@example.com")))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/account/email"))
        .and(body_json(serde_json::json!({ "email": "new@example.com" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/account/verification"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("hale")
        .env("HALE_HOME", hale_home.path())
        .args(["account", "change-email", "new@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email successfully changed."))
        .stdout(predicate::str::contains("Email successfully sent."));
}

#[tokio::test]
async fn test_change_email_duplicate_never_hits_portal() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let mock_server = MockServer::start().await;
    let hale_home = temp_hale_home(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/api/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body("kai@example.com")))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/account/email"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("hale")
        .env("HALE_HOME", hale_home.path())
        .args(["account", "change-email", "kai@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "already associated with your account",
        ));
}

#[tokio::test]
async fn test_resend_requires_session() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let mock_server = MockServer::start().await;
    let hale_home = temp_hale_home(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/api/session"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("hale")
        .env("HALE_HOME", hale_home.path())
        .args(["account", "resend"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}

#[tokio::test]
async fn test_whoami_prints_session() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let mock_server = MockServer::start().await;
    let hale_home = temp_hale_home(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/api/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body("kai@example.com")))
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("hale")
        .env("HALE_HOME", hale_home.path())
        .args(["account", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kai <kai@example.com>"))
        .stdout(predicate::str::contains("verified: false"));
}
