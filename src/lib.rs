//! Crawlgate: a multi-site robots.txt and sitemap edge service
//!
//! This crate serves crawler-policy documents (`/robots.txt`) and paginated
//! XML sitemaps (`/sitemap-<n>.xml`) for a multi-site web deployment. Both
//! documents are sourced from a remote content service at request time and
//! re-derived per request, since resolution depends on the requesting host.

pub mod config;
pub mod remote;
pub mod robots;
pub mod server;
pub mod site;

use thiserror::Error;

/// Main error type for Crawlgate operations
#[derive(Debug, Error)]
pub enum CrawlgateError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Remote content error: {0}")]
    Remote(#[from] RemoteError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors from the remote content service
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Distinguished "not found" signal from the remote service.
    /// The sitemap endpoint maps this to an HTTP 404.
    #[error("Remote content not found")]
    NotFound,

    #[error("Remote service returned status {status}")]
    Status { status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type alias for Crawlgate operations
pub type Result<T> = std::result::Result<T, CrawlgateError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for remote content operations
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

// Re-export commonly used types
pub use config::Config;
pub use robots::{parse_robots_txt, OneOrMany, Rule, RuleSet};
pub use site::{Site, SiteResolver};
