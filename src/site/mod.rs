//! Host-to-site resolution
//!
//! Maps an inbound request host to the logical content site it belongs to.
//! Resolution is total: an unrecognized host falls back to the configured
//! default site, so callers never have to handle a missing match.

use crate::config::Config;
use std::collections::HashMap;

/// A logical content-site identity, used to scope which remote content
/// (robots text, sitemap data) is fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub name: String,
}

/// Resolves request hosts to sites using the configured hostname table.
#[derive(Debug)]
pub struct SiteResolver {
    by_hostname: HashMap<String, Site>,
    default: Site,
}

impl SiteResolver {
    /// Builds a resolver from the configured site table.
    ///
    /// Hostnames are matched case-insensitively. Config validation has
    /// already guaranteed the site list is non-empty and that the default
    /// site name refers to a configured site.
    pub fn from_config(config: &Config) -> Self {
        let mut by_hostname = HashMap::new();
        for entry in &config.sites {
            for hostname in &entry.hostnames {
                by_hostname.insert(
                    hostname.to_lowercase(),
                    Site {
                        name: entry.name.clone(),
                    },
                );
            }
        }

        let default = Site {
            name: config.default_site.clone(),
        };

        SiteResolver {
            by_hostname,
            default,
        }
    }

    /// Resolves a request host to a site.
    ///
    /// Any port suffix is stripped before matching, and unmatched hosts
    /// resolve to the default site. Never fails.
    pub fn get_by_host(&self, host: &str) -> &Site {
        let hostname = host.split(':').next().unwrap_or(host).to_lowercase();
        self.by_hostname.get(&hostname).unwrap_or(&self.default)
    }
}
