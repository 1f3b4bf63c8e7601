//! HTTP transport for the platform API and the content host
//!
//! One [`Transport`] owns the shared `reqwest` connection pool and the
//! credential headers. Endpoint groups borrow it; clones share the pool.

mod response;

use futures::StreamExt;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
pub use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, trace};
use url::Url;

use crate::cancel::CancellationToken;
use crate::config::ClientConfig;
use crate::endpoint::{ApiRequest, HttpMethod};
use crate::error::{ApiError, Error, Result};

use response::classify;

const API_KEY_HEADER: &str = "x-api-key";

/// API key plus optional OAuth access token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    access_token: Option<String>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            access_token: None,
        }
    }

    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    fn headers(&self) -> Result<HeaderMap> {
        if self.api_key.trim().is_empty() {
            return Err(Error::configuration("API key must not be empty"));
        }

        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(&self.api_key)
            .map_err(|_| Error::configuration("API key contains invalid header characters"))?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);

        if let Some(token) = self.access_token.as_deref().filter(|t| !t.is_empty()) {
            let mut bearer = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                Error::configuration("access token contains invalid header characters")
            })?;
            bearer.set_sensitive(true);
            headers.insert(AUTHORIZATION, bearer);
        }

        Ok(headers)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Shared HTTP transport.
#[derive(Clone)]
pub struct Transport {
    client: Client,
    base_url: Arc<Url>,
    content_url: Arc<Url>,
    credentials: Arc<Credentials>,
    headers: Arc<HeaderMap>,
    download_timeout: Duration,
    cancel: Option<CancellationToken>,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url.as_str())
            .field("content_url", &self.content_url.as_str())
            .field("credentials", &self.credentials)
            .field("download_timeout", &self.download_timeout)
            .field("cancellable", &self.cancel.is_some())
            .finish_non_exhaustive()
    }
}

impl Transport {
    pub fn new(credentials: Credentials, config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let headers = credentials.headers()?;
        let client = build_http_client(config)?;

        Ok(Self {
            client,
            base_url: Arc::new(config.parsed_base_url()?),
            content_url: Arc::new(config.parsed_content_url()?),
            credentials: Arc::new(credentials),
            headers: Arc::new(headers),
            download_timeout: config.download_timeout,
            cancel: None,
        })
    }

    /// Clone of this transport whose calls race `token`.
    #[must_use]
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancel: Some(token),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn content_url(&self) -> &Url {
        &self.content_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Absolute content-host URL for a metadata path.
    pub fn content_url_for(&self, path: &str) -> Result<Url> {
        resolve(&self.content_url, path)
    }

    /// Issue one API call.
    ///
    /// `url` is absolute (`http(s)://...`) or a path relative to the API base.
    /// `headers` are added after the credential headers and replace any with
    /// the same name for this call only.
    pub async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        query: &[(&str, &str)],
        body: Option<&Value>,
        headers: Option<&HeaderMap>,
    ) -> Result<Value> {
        let mut url = resolve(&self.base_url, url)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        self.execute(method, url, body, headers).await
    }

    /// Render a described request and issue it.
    pub async fn send(&self, request: &ApiRequest) -> Result<Value> {
        let endpoint = request.endpoint();
        if endpoint.requires_auth && self.credentials.access_token().is_none() {
            debug!(
                endpoint = endpoint.name,
                "Calling authenticated endpoint without an access token"
            );
        }
        let url = request.url(&self.base_url)?;
        self.execute(request.method(), url, request.json_body(), None)
            .await
    }

    async fn execute(
        &self,
        method: HttpMethod,
        url: Url,
        body: Option<&Value>,
        extra: Option<&HeaderMap>,
    ) -> Result<Value> {
        let mut builder = self
            .client
            .request(method.into(), url.clone())
            .headers(HeaderMap::clone(&self.headers));
        if let Some(extra) = extra {
            builder = builder.headers(extra.clone());
        }
        if let Some(body) = body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(body)?);
        }

        let started = Instant::now();
        let response = self.cancellable(builder.send()).await??;
        let status = response.status();
        let bytes = self.cancellable(response.bytes()).await??;

        debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "API request"
        );

        classify(status, &bytes)
    }

    /// Stream a content-host file into `writer`, returning bytes written.
    ///
    /// No API credentials are sent to the content host.
    pub async fn download<W>(&self, url: &str, writer: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let url = resolve(&self.content_url, url)?;
        let started = Instant::now();

        let response = self
            .cancellable(
                self.client
                    .get(url.clone())
                    .timeout(self.download_timeout)
                    .send(),
            )
            .await??;

        let status = response.status();
        if !status.is_success() {
            let body = self.cancellable(response.bytes()).await?.ok();
            let parsed = body.and_then(|b| serde_json::from_slice::<Value>(&b).ok());
            return Err(Error::Api(ApiError::from_response(status, parsed.as_ref())));
        }

        let mut stream = response.bytes_stream();
        let mut written = 0u64;
        while let Some(chunk) = self.cancellable(stream.next()).await? {
            let chunk = chunk?;
            writer.write_all(&chunk).await?;
            written += chunk.len() as u64;
            trace!(bytes = written, "Download progress");
        }
        writer.flush().await?;

        debug!(
            url = %url,
            status = status.as_u16(),
            bytes = written,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Content download"
        );

        Ok(written)
    }

    async fn cancellable<F: Future>(&self, fut: F) -> Result<F::Output> {
        match &self.cancel {
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => Err(Error::Cancelled),
                out = fut => Ok(out),
            },
            None => Ok(fut.await),
        }
    }
}

fn build_http_client(config: &ClientConfig) -> Result<Client> {
    ensure_crypto_provider();

    ClientBuilder::new()
        .pool_idle_timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .tcp_nodelay(true)
        .tcp_keepalive(Duration::from_secs(60))
        .redirect(reqwest::redirect::Policy::limited(5))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| Error::configuration(format!("failed to build HTTP client: {e}")))
}

/// Install the ring provider unless the process already chose one.
fn ensure_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

fn resolve(base: &Url, target: &str) -> Result<Url> {
    if target.starts_with("http://") || target.starts_with("https://") {
        return Url::parse(target)
            .map_err(|e| Error::invalid_request(format!("invalid URL {target:?}: {e}")));
    }

    let (path, query) = match target.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (target, None),
    };
    let mut url = base.clone();
    let joined = format!(
        "{}/{}",
        base.path().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    url.set_path(&joined);
    url.set_query(query);
    Ok(url)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_and_absolute() {
        let base = Url::parse("https://www.bungie.net/Platform").expect("Operation should succeed");

        let url = resolve(&base, "/Destiny2/Manifest/").expect("Operation should succeed");
        assert_eq!(url.as_str(), "https://www.bungie.net/Platform/Destiny2/Manifest/");

        let url = resolve(&base, "User/GetAvailableThemes/?x=1").expect("Operation should succeed");
        assert_eq!(url.as_str(), "https://www.bungie.net/Platform/User/GetAvailableThemes/?x=1");

        let url = resolve(&base, "https://example.com/a").expect("Operation should succeed");
        assert_eq!(url.as_str(), "https://example.com/a");
    }

    #[test]
    fn test_credentials_headers() {
        let headers = Credentials::new("key123")
            .with_access_token("tok")
            .headers()
            .expect("Operation should succeed");
        assert_eq!(headers.get("x-api-key").expect("api key header"), "key123");
        assert_eq!(headers.get(AUTHORIZATION).expect("auth header"), "Bearer tok");

        let headers = Credentials::new("key123").headers().expect("Operation should succeed");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_credentials_rejected() {
        assert!(matches!(
            Credentials::new("  ").headers(),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            Credentials::new("bad\nkey").headers(),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_credentials_debug_redacts() {
        let debug = format!("{:?}", Credentials::new("k3y-secret").with_access_token("t0k-secret"));
        assert!(!debug.contains("k3y-secret"));
        assert!(!debug.contains("t0k-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
