//! Portal HTTP client.
//!
//! All collaborators of the view layer live behind this client: the session
//! endpoint, the profile lookup, and the two account operations (change
//! email, resend verification link). Calls are single round trips with no
//! retry; callers decide how to surface failures.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use url::Url;

use crate::config::Config;
use crate::profile::Profile;
use crate::session::Session;

/// One observed value of the live subscription: the current session plus the
/// member profile for its username, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortalSnapshot {
    pub session: Option<Session>,
    pub profile: Option<Profile>,
}

/// HTTP client for the member portal backend.
pub struct PortalClient {
    base_url: Url,
    token: Option<String>,
    http: reqwest::Client,
}

impl PortalClient {
    /// Creates a client from configuration.
    ///
    /// Fails early when the configured base URL does not parse, rather than
    /// on the first request.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid portal base URL: {}", config.base_url))?;

        // Url::join treats the last path segment as a file unless it ends in '/'.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        Ok(Self {
            base_url,
            token: config.effective_token().map(str::to_string),
            http: reqwest::Client::new(),
        })
    }

    fn request(&self, method: reqwest::Method, path: &str) -> Result<reqwest::RequestBuilder> {
        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("Invalid portal path: {path}"))?;
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    /// Fetches the current session.
    ///
    /// Returns `None` when no user is authenticated (401 or 404).
    pub async fn fetch_session(&self) -> Result<Option<Session>> {
        let response = self
            .request(reqwest::Method::GET, "api/session")?
            .send()
            .await
            .context("Failed to reach the portal session endpoint")?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let session = response
                    .json::<Session>()
                    .await
                    .context("Failed to decode session response")?;
                Ok(Some(session))
            }
            status => anyhow::bail!("Portal returned {status} for the session endpoint"),
        }
    }

    /// Looks up the member profile for a username.
    ///
    /// Returns `None` when no profile exists (404).
    pub async fn fetch_profile(&self, username: &str) -> Result<Option<Profile>> {
        let response = self
            .request(reqwest::Method::GET, &format!("api/profiles/{username}"))?
            .send()
            .await
            .context("Failed to reach the portal profile endpoint")?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let profile = response
                    .json::<Profile>()
                    .await
                    .context("Failed to decode profile response")?;
                Ok(Some(profile))
            }
            status => anyhow::bail!("Portal returned {status} for profile '{username}'"),
        }
    }

    /// Requests a change of the account's primary email address.
    pub async fn change_email(&self, email: &str) -> Result<()> {
        tracing::debug!(email, "requesting email change");
        let response = self
            .request(reqwest::Method::POST, "api/account/email")?
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await
            .context("Failed to reach the portal email endpoint")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Portal returned {status} for the email change");
        }
        Ok(())
    }

    /// Asks the portal to resend the verification email for the current
    /// account.
    pub async fn send_verification_link(&self) -> Result<()> {
        tracing::debug!("requesting verification email");
        let response = self
            .request(reqwest::Method::POST, "api/account/verification")?
            .send()
            .await
            .context("Failed to reach the portal verification endpoint")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Portal returned {status} for the verification request");
        }
        Ok(())
    }

    /// Fetches the current subscription value: session plus the matching
    /// profile, when a user is authenticated.
    pub async fn fetch_snapshot(&self) -> Result<PortalSnapshot> {
        let session = self.fetch_session().await?;

        let profile = match &session {
            Some(session) => self.fetch_profile(&session.username).await?,
            None => None,
        };

        Ok(PortalSnapshot { session, profile })
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn config_for(server: &MockServer) -> Config {
        Config {
            base_url: server.uri(),
            token: Some("test-token".to_string()),
            ..Default::default()
        }
    }

    fn session_body(verified: bool) -> serde_json::Value {
        serde_json::json!({
            "user_id": "u1",
            "username": "kai",
            "primary_email": "kai@example.com",
            "email_verified": verified,
            "roles": ["member"],
        })
    }

    #[tokio::test]
    async fn test_fetch_session_decodes_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/session"))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_body(true)))
            .mount(&server)
            .await;

        let client = PortalClient::from_config(&config_for(&server)).unwrap();
        let session = client.fetch_session().await.unwrap().unwrap();

        assert_eq!(session.username, "kai");
        assert!(session.email_verified);
        assert!(session.has_role("member"));
    }

    #[tokio::test]
    async fn test_fetch_session_unauthorized_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/session"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = PortalClient::from_config(&config_for(&server)).unwrap();
        assert_eq!(client.fetch_session().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_fetch_profile_missing_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/profiles/kai"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = PortalClient::from_config(&config_for(&server)).unwrap();
        assert_eq!(client.fetch_profile("kai").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_change_email_posts_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/account/email"))
            .and(body_json(serde_json::json!({ "email": "new@example.com" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = PortalClient::from_config(&config_for(&server)).unwrap();
        client.change_email("new@example.com").await.unwrap();
    }

    #[tokio::test]
    async fn test_change_email_server_error_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/account/email"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = PortalClient::from_config(&config_for(&server)).unwrap();
        assert!(client.change_email("new@example.com").await.is_err());
    }

    #[tokio::test]
    async fn test_send_verification_link_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/account/verification"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = PortalClient::from_config(&config_for(&server)).unwrap();
        client.send_verification_link().await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_snapshot_combines_session_and_profile() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/session"))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_body(false)))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/profiles/kai"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "owner": "kai",
                "categories": ["Surf", "Music"],
            })))
            .mount(&server)
            .await;

        let client = PortalClient::from_config(&config_for(&server)).unwrap();
        let snapshot = client.fetch_snapshot().await.unwrap();

        let session = snapshot.session.unwrap();
        assert!(!session.email_verified);
        let profile = snapshot.profile.unwrap();
        assert_eq!(profile.owner, "kai");
        assert_eq!(profile.categories, vec!["Surf", "Music"]);
    }

    #[tokio::test]
    async fn test_fetch_snapshot_anonymous_skips_profile() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/session"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = PortalClient::from_config(&config_for(&server)).unwrap();
        let snapshot = client.fetch_snapshot().await.unwrap();

        assert_eq!(snapshot, PortalSnapshot::default());
    }

    #[test]
    fn test_from_config_rejects_bad_url() {
        let config = Config {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(PortalClient::from_config(&config).is_err());
    }
}
