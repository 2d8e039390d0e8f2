//! Shared plumbing for the HTTP-level tests
//!
//! Boots the full application on an OS-assigned port and drives it with
//! reqwest clients that behave like browsers: each one owns a cookie jar,
//! and redirects are left unfollowed so tests can assert on them.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use blog_common::AppConfig;
use blog_web::{create_app, create_app_state};
use reqwest::{redirect, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{LoginForm, RegisterForm};

/// A running application instance bound to a local port
pub struct TestServer {
    pub addr: SocketAddr,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Boot the application against the configured PostgreSQL and Redis
    pub async fn start() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let config = AppConfig::from_env().context("loading test configuration")?;

        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Port 0: the OS picks a free port.
        let listener = TcpListener::bind(("127.0.0.1", 0)).await?;
        let addr = listener.local_addr()?;

        // The kernel queues connections from bind onward.
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            _handle: handle,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// A fresh client with its own cookie jar and no redirect following
    pub fn browser(&self) -> Result<Client> {
        let client = Client::builder()
            .cookie_store(true)
            .redirect(redirect::Policy::none())
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(client)
    }

    pub async fn get(&self, client: &Client, path: &str) -> Result<Response> {
        Ok(client.get(self.url(path)).send().await?)
    }

    pub async fn post_form<T: Serialize>(
        &self,
        client: &Client,
        path: &str,
        form: &T,
    ) -> Result<Response> {
        Ok(client.post(self.url(path)).form(form).send().await?)
    }

    pub async fn delete(&self, client: &Client, path: &str) -> Result<Response> {
        Ok(client.delete(self.url(path)).send().await?)
    }
}

/// Whether the backing services for integration tests are configured.
///
/// Tests call this first and bail out quietly on a machine without
/// PostgreSQL and Redis connection strings.
pub async fn check_test_env() -> bool {
    for key in ["DATABASE_URL", "REDIS_URL"] {
        if std::env::var(key).is_err() {
            eprintln!("Skipping test: {key} not set");
            return false;
        }
    }
    true
}

/// Fail with the response body in the message unless the status matches
async fn require_status(response: Response, expected: StatusCode) -> Result<Response> {
    let status = response.status();
    if status != expected {
        let body = response.text().await.unwrap_or_default();
        bail!("expected status {expected}, got {status}: {body}");
    }
    Ok(response)
}

/// Assert the status and deserialize the JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected: StatusCode,
) -> Result<T> {
    Ok(require_status(response, expected).await?.json().await?)
}

/// Assert the status, discarding the body
pub async fn assert_status(response: Response, expected: StatusCode) -> Result<()> {
    require_status(response, expected).await.map(|_| ())
}

/// Assert a see-other redirect to the given location
pub fn assert_redirect(response: &Response, expected_location: &str) -> Result<()> {
    let status = response.status();
    if status != StatusCode::SEE_OTHER {
        bail!("expected a redirect, got {status}");
    }

    let location = response
        .headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    if location != expected_location {
        bail!("expected redirect to {expected_location}, got {location}");
    }

    Ok(())
}

/// Register and log in a fresh user, returning their browser and account
pub async fn signed_in_user(server: &TestServer) -> Result<(Client, RegisterForm)> {
    let browser = server.browser()?;
    let account = RegisterForm::unique();

    let response = server.post_form(&browser, "/register", &account).await?;
    assert_redirect(&response, "/login")?;

    let response = server
        .post_form(&browser, "/login", &LoginForm::with_username(&account))
        .await?;
    assert_redirect(&response, "/")?;

    Ok((browser, account))
}

/// Find the id of the post with the given content in feed markup.
///
/// Relies on the content preceding its "/post/{id}" link inside the
/// same list item.
pub fn find_post_id(feed_html: &str, content: &str) -> Option<String> {
    let at = feed_html.find(content)?;
    let rest = &feed_html[at..];
    let start = rest.find("/post/")? + "/post/".len();
    let id: String = rest[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    (!id.is_empty()).then_some(id)
}

/// Scan the first few feed pages for a post with the given content.
///
/// Other tests may be inserting posts concurrently, so the post is not
/// guaranteed to sit on page one.
pub async fn find_post(
    server: &TestServer,
    client: &Client,
    content: &str,
) -> Result<Option<String>> {
    for page in 1..=5 {
        let response = server.get(client, &format!("/?page={page}")).await?;
        let html = response.text().await?;
        if let Some(id) = find_post_id(&html, content) {
            return Ok(Some(id));
        }
    }
    Ok(None)
}
