//! Remote content service client
//!
//! All document content is owned by a remote content service; this module
//! fetches raw robots.txt text and pre-rendered sitemap XML from it on
//! behalf of the HTTP endpoints. The client is stateless: every request
//! performs its own fetch, there is no response caching.

use crate::config::RemoteConfig;
use crate::{RemoteError, RemoteResult};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Options forwarded to the remote sitemap service.
///
/// The service rewrites sitemap URLs for the requesting host, so the
/// inbound host and protocol travel with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapOptions {
    /// Inbound request host, as received (may include a port)
    pub host: String,
    /// Request protocol, from `x-forwarded-proto` or `"https"`
    pub protocol: String,
    /// Sitemap page id; empty means unpaginated
    pub id: String,
    /// Resolved site name
    pub site_name: String,
}

/// HTTP client for the remote content service
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: Client,
    endpoint: Url,
}

impl ContentClient {
    /// Builds a client from the remote service configuration.
    pub fn new(config: &RemoteConfig) -> crate::Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| crate::ConfigError::InvalidUrl(format!("Invalid remote endpoint: {}", e)))?;

        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(ContentClient { http, endpoint })
    }

    /// Fetches the raw robots.txt text for a site.
    ///
    /// Returns `Ok(None)` when the site has no robots content (remote 404
    /// or empty body); the caller substitutes the allow-all default.
    /// Transport failures and unexpected statuses are errors.
    pub async fn get_robots(&self, site_name: &str) -> RemoteResult<Option<String>> {
        let mut url = self.service_url("robots");
        url.query_pairs_mut().append_pair("site", site_name);

        tracing::debug!("Fetching robots content for site '{}'", site_name);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify(&url, e))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if !status.is_success() => Err(RemoteError::Status {
                status: status.as_u16(),
            }),
            _ => {
                let body = response.text().await.map_err(|e| classify(&url, e))?;
                if body.trim().is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(body))
                }
            }
        }
    }

    /// Fetches sitemap XML for a site, page id, and requesting host.
    ///
    /// A remote 404 is the distinguished "not found" signal and surfaces as
    /// [`RemoteError::NotFound`]; the XML body is otherwise passed through
    /// verbatim.
    pub async fn get_sitemap(&self, options: &SitemapOptions) -> RemoteResult<String> {
        let mut url = self.service_url("sitemap");
        url.query_pairs_mut()
            .append_pair("site", &options.site_name)
            .append_pair("id", &options.id)
            .append_pair("host", &options.host)
            .append_pair("scheme", &options.protocol);

        tracing::debug!(
            "Fetching sitemap for site '{}' (id: '{}')",
            options.site_name,
            options.id
        );

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify(&url, e))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(RemoteError::NotFound),
            status if !status.is_success() => Err(RemoteError::Status {
                status: status.as_u16(),
            }),
            _ => response.text().await.map_err(|e| classify(&url, e)),
        }
    }

    /// Appends a service path segment to the configured endpoint.
    fn service_url(&self, segment: &str) -> Url {
        let mut url = self.endpoint.clone();
        // http(s) URLs always have path segments; validation rejects others
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        url
    }
}

/// Classifies a reqwest error into the remote error taxonomy
fn classify(url: &Url, error: reqwest::Error) -> RemoteError {
    if error.is_timeout() {
        RemoteError::Timeout {
            url: url.to_string(),
        }
    } else {
        RemoteError::Transport(error)
    }
}
