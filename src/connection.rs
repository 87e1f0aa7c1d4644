//! HTTP connection to the collection backend.
//!
//! Holds the base URL, the optional session token and a lazily-built
//! blocking `reqwest` client. Every request sends the session token as the
//! backend's session cookie and maps non-success statuses to [`DeckError`].

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::COOKIE;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config;
use crate::error::{DeckError, Result};

/// Connection settings plus a lazily-created HTTP client.
pub struct Connection {
    /// Backend root, without a trailing slash.
    pub base_url: String,
    session_token: Option<String>,
    timeout: Duration,
    client: OnceLock<Client>,
}

impl Connection {
    /// Create a new connection. No network traffic happens until the first request.
    pub fn new(base_url: &str, session_token: Option<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session_token,
            timeout,
            client: OnceLock::new(),
        }
    }

    /// Lazy HTTP client, created on first use.
    pub fn client(&self) -> Result<&Client> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(self.client.get_or_init(|| client))
    }

    pub fn has_session(&self) -> bool {
        self.session_token.is_some()
    }

    /// Full URL for a path relative to the backend root.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET` a path and decode the JSON body.
    pub fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.url(path);
        log::debug!("GET {url}");
        let request = self.client()?.get(&url).query(query);
        let resp = self.send(request)?;
        Ok(resp.json()?)
    }

    /// `POST` a JSON body to a path and return the decoded JSON response.
    pub fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.url(path);
        log::debug!("POST {url}");
        let request = self.client()?.post(&url).json(body);
        let resp = self.send(request)?;
        Ok(resp.json()?)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = match &self.session_token {
            Some(token) => request.header(COOKIE, format!("{}={}", config::SESSION_COOKIE, token)),
            None => request,
        };

        let resp = request.send()?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().unwrap_or_default();
        log::warn!("backend request failed with status {status}");
        Err(DeckError::from_status(status.as_u16(), &body))
    }
}
