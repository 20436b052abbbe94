use std::fmt;
use std::path::PathBuf;

/// Link factory configuration error
///
/// Returned by [`LinkFactory::new`](crate::link::LinkFactory::new) and
/// [`LinkConfig::load`](crate::config::LinkConfig::load) when the
/// configuration cannot be read or is invalid.
#[derive(Debug)]
pub enum ConfigError {
    /// The `interpolate` pattern is not a valid regular expression
    InvalidInterpolate {
        /// The pattern as written in the configuration
        pattern: String,
        /// Compiler error from the `regex` crate
        source: regex::Error,
    },
    /// The configuration file could not be read
    Io {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The configuration file could not be deserialized
    Parse {
        /// Path of the configuration file
        path: PathBuf,
        /// Deserializer message
        message: String,
    },
    /// The file extension is not one of `yaml`, `yml`, `json` or `toml`
    UnsupportedFormat {
        /// Path of the configuration file
        path: PathBuf,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidInterpolate { pattern, source } => {
                write!(
                    f,
                    "link configuration error: invalid interpolate pattern '{}': {}",
                    pattern, source
                )
            }
            ConfigError::Io { path, source } => {
                write!(
                    f,
                    "link configuration error: cannot read '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::Parse { path, message } => {
                write!(
                    f,
                    "link configuration error: cannot parse '{}': {}",
                    path.display(),
                    message
                )
            }
            ConfigError::UnsupportedFormat { path } => {
                write!(
                    f,
                    "link configuration error: unsupported file format '{}'. \
                    Expected a .yaml, .yml, .json or .toml file",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidInterpolate { source, .. } => Some(source),
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { .. } | ConfigError::UnsupportedFormat { .. } => None,
        }
    }
}

/// Error converting a serializable value into [`Params`](crate::params::Params)
#[derive(Debug)]
pub enum ParamsError {
    /// `serde_json` refused the value (e.g. a map with non-string keys)
    Serialize(serde_json::Error),
    /// The value serialized to something other than an object
    NotAnObject {
        /// JSON type name of the value that was produced
        found: &'static str,
    },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::Serialize(err) => write!(f, "cannot serialize link parameters: {}", err),
            ParamsError::NotAnObject { found } => {
                write!(
                    f,
                    "link parameters must serialize to an object, found {}",
                    found
                )
            }
        }
    }
}

impl std::error::Error for ParamsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamsError::Serialize(err) => Some(err),
            ParamsError::NotAnObject { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(err: serde_json::Error) -> Self {
        ParamsError::Serialize(err)
    }
}
