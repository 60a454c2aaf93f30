//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser has no process environment, so settings are baked in when the
//! WASM bundle is compiled. `TRACKBOARD_API_URL` points the REST client at the
//! backend and `TRACKBOARD_LOG` picks the console log level.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

/// Base URL used when `TRACKBOARD_API_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// `localStorage` key holding the persisted session.
pub const SESSION_STORAGE_KEY: &str = "trackboard_session";

/// Resolved client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST API root, without a trailing slash.
    pub api_base_url: String,
    /// Console log level.
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            log_level: log::Level::Info,
        }
    }
}

impl ClientConfig {
    /// Read configuration captured from the build environment.
    pub fn from_env() -> Self {
        Self::from_values(option_env!("TRACKBOARD_API_URL"), option_env!("TRACKBOARD_LOG"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_url
                .map(normalize_base_url)
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            log_level: log_level
                .and_then(|raw| log::Level::from_str(raw.trim()).ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
