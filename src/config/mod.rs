//! Configuration loading and validation
//!
//! Crawlgate is configured through a TOML file describing the listen
//! address, the remote content service, and the hostname-to-site table.

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use types::{Config, RemoteConfig, ServerConfig, SiteEntry};
pub use validation::validate;
