//! HTTP surface: routing and document handlers
//!
//! Two routes, both stateless: `/robots.txt` re-derives the crawler-policy
//! document per request, and `/sitemap` (plus its `/sitemap-<n>.xml`
//! paginated form) streams remote sitemap XML through. Each request resolves
//! its own site from the `Host` header and performs a fresh remote fetch;
//! nothing is shared across requests beyond the client and resolver handles.

use crate::remote::{ContentClient, SitemapOptions};
use crate::robots::{parse_robots_txt, RuleSet};
use crate::site::SiteResolver;
use crate::RemoteError;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<SiteResolver>,
    pub client: Arc<ContentClient>,
}

/// Builds the document router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/robots.txt", get(serve_robots))
        .route("/sitemap", get(serve_sitemap))
        .route("/:file", get(serve_sitemap))
        .with_state(state)
}

/// Serves the crawler-policy document for the requesting host.
///
/// Empty or absent remote content yields the allow-all default without
/// running the parser. A remote fetch failure degrades to the same default
/// with a logged warning rather than failing the request.
async fn serve_robots(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let host_name = header_value(&headers, header::HOST)
        .split(':')
        .next()
        .filter(|h| !h.is_empty())
        .unwrap_or("localhost")
        .to_string();
    let site = state.resolver.get_by_host(&host_name);

    let rules = match state.client.get_robots(&site.name).await {
        Ok(Some(text)) => parse_robots_txt(&text),
        Ok(None) => {
            tracing::debug!("No robots content for site '{}', using default", site.name);
            RuleSet::allow_all()
        }
        Err(e) => {
            tracing::warn!(
                "Robots fetch failed for site '{}', using default: {}",
                site.name,
                e
            );
            RuleSet::allow_all()
        }
    };

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        rules.render(),
    )
        .into_response()
}

/// Serves sitemap XML for the requesting host, delegating generation to the
/// remote content service.
async fn serve_sitemap(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let Some(id) = sitemap_page_id(uri.path()) else {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };

    let host = header_value(&headers, header::HOST).to_string();
    let protocol = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("https")
        .to_string();
    let site = state.resolver.get_by_host(&host);

    let options = SitemapOptions {
        host,
        protocol,
        id,
        site_name: site.name.clone(),
    };

    match state.client.get_sitemap(&options).await {
        Ok(xml) => (
            [(header::CONTENT_TYPE, "text/xml;charset=utf-8")],
            xml,
        )
            .into_response(),
        Err(RemoteError::NotFound) => (StatusCode::NOT_FOUND, "Not Found").into_response(),
        Err(e) => {
            tracing::error!(
                "Sitemap fetch failed for site '{}': {}",
                options.site_name,
                e
            );
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Extracts the sitemap page id from a request path.
///
/// `/sitemap` is the unpaginated form (empty id); otherwise the path must
/// match one or more digits between `/sitemap-` and `.xml`, case
/// insensitively. Anything else is not a sitemap request.
fn sitemap_page_id(path: &str) -> Option<String> {
    if path.eq_ignore_ascii_case("/sitemap") {
        return Some(String::new());
    }

    let lower = path.to_ascii_lowercase();
    let digits = lower.strip_prefix("/sitemap-")?.strip_suffix(".xml")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.to_string())
}

/// Reads a header as a string, treating missing or non-UTF-8 values as empty
fn header_value<'a>(headers: &'a HeaderMap, name: header::HeaderName) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
