//! Main Porkbun API client implementation.

use crate::config::ClientConfig;
use porkbun_core::{AuthenticatedRequest, PorkbunError, Result, SessionContext};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// The Porkbun API base URL
pub const DEFAULT_BASE_URL: &str = "https://porkbun.com/api/json/v3/";

/// Main Porkbun API client.
///
/// Cloning is cheap; every [`Domain`](crate::Domain) and
/// [`DnsRecord`](crate::DnsRecord) obtained from a client holds a clone and
/// therefore talks to the same endpoint with the same keys.
#[derive(Clone)]
pub struct PorkbunClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    session: SessionContext,
    base_url: Url,
    timeout: Duration,
}

impl PorkbunClient {
    /// Create a new client with the given key pair using default settings
    pub fn new(api_key: impl Into<String>, secret_api_key: impl Into<String>) -> Result<Self> {
        PorkbunClientBuilder::new(api_key, secret_api_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(
        api_key: impl Into<String>,
        secret_api_key: impl Into<String>,
    ) -> PorkbunClientBuilder {
        PorkbunClientBuilder::new(api_key, secret_api_key)
    }

    /// Credentials and base URL shared by everything this client produces
    #[must_use]
    pub fn session(&self) -> &SessionContext {
        &self.inner.session
    }

    /// Perform an authenticated POST request.
    ///
    /// `segments` are appended to the base URL one path segment each, so a
    /// record name is never reinterpreted as extra path components.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        segments: &[&str],
        body: B,
    ) -> Result<T> {
        let url = self.build_url(segments)?;
        debug!(path = %url.path(), "POST request");

        let request = AuthenticatedRequest::new(self.inner.session.auth(), body);
        let response = self
            .inner
            .http
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        self.handle_response(response).await
    }

    /// Join path segments onto the base URL
    fn build_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| PorkbunError::InvalidUrl(self.inner.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Decode a response body.
    ///
    /// The provider reports failures in-band (`"status": "ERROR"`), often
    /// with a 4xx code, so any JSON body is handed to the caller's schema
    /// whatever the status. Only non-JSON error pages become [`PorkbunError::Api`].
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e))?;

        match serde_json::from_str(&body) {
            Ok(value) => {
                if !status.is_success() {
                    warn!(status = status.as_u16(), "Porkbun API returned an error status");
                }
                Ok(value)
            }
            Err(e) if status.is_success() => Err(PorkbunError::Json(e)),
            Err(_) => {
                warn!(status = status.as_u16(), "Porkbun API returned a non-JSON error");
                Err(PorkbunError::Api {
                    code: status.as_u16(),
                    message: body,
                })
            }
        }
    }

    /// Convert a reqwest failure into a [`PorkbunError`]
    fn transport_error(&self, err: &reqwest::Error) -> PorkbunError {
        if err.is_timeout() {
            let millis = u64::try_from(self.inner.timeout.as_millis()).unwrap_or(u64::MAX);
            PorkbunError::Timeout(millis)
        } else if err.is_connect() {
            PorkbunError::Connection(err.to_string())
        } else {
            PorkbunError::Http(err.to_string())
        }
    }
}

impl fmt::Debug for PorkbunClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PorkbunClient")
            .field("session", &self.inner.session)
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

/// Builder for configuring a [`PorkbunClient`]
pub struct PorkbunClientBuilder {
    api_key: String,
    secret_api_key: String,
    base_url: String,
    config: ClientConfig,
}

impl PorkbunClientBuilder {
    /// Create a new builder with the given key pair
    #[must_use]
    pub fn new(api_key: impl Into<String>, secret_api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_api_key: secret_api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            config: ClientConfig::default(),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Replace the whole transport configuration
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<PorkbunClient> {
        let base_url = normalize_base_url(&self.base_url)?;

        let http = HttpClient::builder()
            .timeout(self.config.timeout)
            .user_agent(&self.config.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| PorkbunError::Config(e.to_string()))?;

        Ok(PorkbunClient {
            inner: Arc::new(ClientInner {
                http,
                session: SessionContext::new(base_url.as_str(), self.api_key, self.secret_api_key),
                base_url,
                timeout: self.config.timeout,
            }),
        })
    }
}

/// Parse the base URL and make sure it ends in `/`
fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw).map_err(|e| PorkbunError::InvalidUrl(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(PorkbunError::InvalidUrl(raw.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
