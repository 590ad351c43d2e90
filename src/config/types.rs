use serde::Deserialize;

/// Main configuration structure for Crawlgate
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Name of the site used when no hostname matches
    #[serde(rename = "default-site")]
    pub default_site: String,

    pub server: ServerConfig,
    pub remote: RemoteConfig,

    #[serde(default)]
    pub sites: Vec<SiteEntry>,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to (e.g. "0.0.0.0")
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

/// Remote content service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the remote content service
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-seconds", default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// User agent sent with remote requests
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("crawlgate/{}", env!("CARGO_PKG_VERSION"))
}

/// One logical site and the request hostnames that resolve to it
#[derive(Debug, Clone, Deserialize)]
pub struct SiteEntry {
    /// Site name passed to the remote content service
    pub name: String,

    /// Hostnames that resolve to this site (matched without port,
    /// case-insensitively)
    pub hostnames: Vec<String>,
}
