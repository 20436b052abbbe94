//! # Link Configuration Module
//!
//! [`LinkConfig`] holds the options fixed when a [`LinkFactory`](crate::link::LinkFactory)
//! is created. Every field is optional; omitted fields take the defaults
//! below.
//!
//! | field | default |
//! |---|---|
//! | `basename` | `""` |
//! | `interpolate` | `\{([A-Za-z0-9_]+)\}` |
//! | `encode_path_variable` | `false` |
//! | `encode_query_variable` | `true` |
//! | `external_icon` | none |
//! | `prefix_cls` | `panda-link` |
//! | `default_link_type` | `default` |
//!
//! ## Files
//!
//! [`LinkConfig::load`] picks the format from the file extension:
//!
//! ```yaml
//! basename: /app
//! encode_path_variable: true
//! external_icon: '<i class="icon-external"></i>'
//! ```
//!
//! ## Environment Variables
//!
//! [`LinkConfig::with_env_overrides`] applies, when set:
//!
//! - `NAVLINK_BASENAME`
//! - `NAVLINK_ENCODE_PATH` (`true`/`false`/`1`/`0`)
//! - `NAVLINK_ENCODE_QUERY` (`true`/`false`/`1`/`0`)
//! - `NAVLINK_PREFIX_CLS`
//!
//! ```bash
//! export NAVLINK_BASENAME=/console
//! navlink anchor '/users/{userId}' -p userId=42
//! ```

use crate::error::ConfigError;
use crate::template::DEFAULT_INTERPOLATE;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// Default class-name prefix for resolved links
pub const DEFAULT_PREFIX_CLS: &str = "panda-link";

/// Visual flavour of a link, appended to the class prefix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    /// Inline text link
    Text,
    /// Standard link
    #[default]
    Default,
    /// No link styling
    None,
}

impl LinkType {
    /// Class-name suffix for this link type
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LinkType::Text => "text",
            LinkType::Default => "default",
            LinkType::None => "none",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for a link factory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Prefix added to internal anchor hrefs (e.g. `/app`)
    pub basename: String,
    /// Placeholder pattern; the first capture group is the placeholder name
    pub interpolate: String,
    /// Percent-encode values substituted into template placeholders
    pub encode_path_variable: bool,
    /// Percent-encode query keys and values
    pub encode_query_variable: bool,
    /// HTML appended to text children of external anchors
    pub external_icon: Option<String>,
    /// Class-name prefix
    pub prefix_cls: String,
    /// Link type used when a link does not set one
    pub default_link_type: LinkType,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            basename: String::new(),
            interpolate: DEFAULT_INTERPOLATE.to_string(),
            encode_path_variable: false,
            encode_query_variable: true,
            external_icon: None,
            prefix_cls: DEFAULT_PREFIX_CLS.to_string(),
            default_link_type: LinkType::Default,
        }
    }
}

impl LinkConfig {
    /// Load configuration from a `.yaml`/`.yml`, `.json` or `.toml` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parsed: Result<Self, String> = match extension.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
            Some("json") => serde_json::from_str(&content).map_err(|e| e.to_string()),
            Some("toml") => toml::from_str(&content).map_err(|e| e.to_string()),
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let config = parsed.map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        debug!(
            path = %path.display(),
            basename = %config.basename,
            encode_path_variable = config.encode_path_variable,
            encode_query_variable = config.encode_query_variable,
            "Link configuration loaded"
        );

        Ok(config)
    }

    /// Apply `NAVLINK_*` environment variables on top of this configuration
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Apply `NAVLINK_*` overrides read through `lookup` instead of the process environment
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(basename) = lookup("NAVLINK_BASENAME") {
            self.basename = basename;
        }
        if let Some(prefix) = lookup("NAVLINK_PREFIX_CLS") {
            self.prefix_cls = prefix;
        }
        if let Some(enabled) = bool_override(&lookup, "NAVLINK_ENCODE_PATH") {
            self.encode_path_variable = enabled;
        }
        if let Some(enabled) = bool_override(&lookup, "NAVLINK_ENCODE_QUERY") {
            self.encode_query_variable = enabled;
        }
        self
    }
}

fn bool_override(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    let raw = lookup(key)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            warn!(key = %key, value = %raw, "Ignoring unparseable boolean override");
            None
        }
    }
}
