use crate::config::types::{Config, RemoteConfig, ServerConfig, SiteEntry};
use crate::ConfigError;
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_server_config(&config.server)?;
    validate_remote_config(&config.remote)?;
    validate_sites(&config.sites)?;
    validate_default_site(config)?;
    Ok(())
}

/// Validates HTTP listener configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    if config.host.is_empty() {
        return Err(ConfigError::Validation(
            "server host cannot be empty".to_string(),
        ));
    }

    if config.port == 0 {
        return Err(ConfigError::Validation(
            "server port cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// Validates remote content service configuration
fn validate_remote_config(config: &RemoteConfig) -> Result<(), ConfigError> {
    let endpoint = Url::parse(&config.endpoint)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid remote endpoint: {}", e)))?;

    if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "Remote endpoint must use http or https scheme, got '{}'",
            endpoint.scheme()
        )));
    }

    if config.timeout_seconds == 0 {
        return Err(ConfigError::Validation(
            "timeout-seconds must be >= 1".to_string(),
        ));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates site entries: non-empty table, non-empty names, and no
/// hostname claimed by two sites
fn validate_sites(sites: &[SiteEntry]) -> Result<(), ConfigError> {
    if sites.is_empty() {
        return Err(ConfigError::Validation(
            "At least one [[sites]] entry is required".to_string(),
        ));
    }

    let mut seen_hostnames = HashSet::new();
    for entry in sites {
        if entry.name.is_empty() {
            return Err(ConfigError::Validation(
                "Site name cannot be empty".to_string(),
            ));
        }

        for hostname in &entry.hostnames {
            if hostname.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Site '{}' has an empty hostname",
                    entry.name
                )));
            }

            if !seen_hostnames.insert(hostname.to_lowercase()) {
                return Err(ConfigError::Validation(format!(
                    "Hostname '{}' is mapped to more than one site",
                    hostname
                )));
            }
        }
    }

    Ok(())
}

/// Validates that the default site refers to a configured site
fn validate_default_site(config: &Config) -> Result<(), ConfigError> {
    if config.default_site.is_empty() {
        return Err(ConfigError::Validation(
            "default-site cannot be empty".to_string(),
        ));
    }

    if !config
        .sites
        .iter()
        .any(|entry| entry.name == config.default_site)
    {
        return Err(ConfigError::Validation(format!(
            "default-site '{}' does not match any configured site",
            config.default_site
        )));
    }

    Ok(())
}
