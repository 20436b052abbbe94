//! # Canonical Path Join
//!
//! Assembles `pathname`, `search` and `hash` into a single
//! `pathname[?search][#hash]` string. Separators are added only when the
//! corresponding part is present, and never doubled.

use serde::{Deserialize, Serialize};

/// The three parts of a relative URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathParts {
    /// Path portion (e.g. `/users/42`)
    pub pathname: String,
    /// Query string, with or without the leading `?`
    pub search: String,
    /// Fragment, with or without the leading `#`
    pub hash: String,
}

impl PathParts {
    /// Parts with only a pathname
    #[must_use]
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            ..Self::default()
        }
    }

    /// Set the search part
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the hash part
    #[must_use]
    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }
}

/// Join path parts into one string
///
/// ```rust
/// use navlink::path::{create_path, PathParts};
///
/// assert_eq!(create_path(&PathParts::new("/users")), "/users");
/// assert_eq!(
///     create_path(&PathParts::new("/users").search("page=2").hash("top")),
///     "/users?page=2#top"
/// );
/// assert_eq!(
///     create_path(&PathParts::new("/users").search("?").hash("#")),
///     "/users"
/// );
/// ```
#[must_use]
pub fn create_path(parts: &PathParts) -> String {
    let PathParts {
        pathname,
        search,
        hash,
    } = parts;

    let mut out = String::with_capacity(pathname.len() + search.len() + hash.len() + 2);
    out.push_str(pathname);

    if !search.is_empty() && search != "?" {
        if !search.starts_with('?') {
            out.push('?');
        }
        out.push_str(search);
    }

    if !hash.is_empty() && hash != "#" {
        if !hash.starts_with('#') {
            out.push('#');
        }
        out.push_str(hash);
    }

    out
}

/// A link target: a URL string or structured path parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum To {
    /// A URL as written (relative path, absolute URL, `mailto:` ...)
    Url(String),
    /// Structured parts joined with [`create_path`]
    Path(PathParts),
}

impl To {
    /// The `href` for this target
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            To::Url(url) => url.clone(),
            To::Path(parts) => create_path(parts),
        }
    }

    /// The target as a string, when it was given as one
    #[must_use]
    pub fn as_url(&self) -> Option<&str> {
        match self {
            To::Url(url) => Some(url),
            To::Path(_) => None,
        }
    }
}

impl From<String> for To {
    fn from(url: String) -> Self {
        To::Url(url)
    }
}

impl From<&str> for To {
    fn from(url: &str) -> Self {
        To::Url(url.to_string())
    }
}

impl From<PathParts> for To {
    fn from(parts: PathParts) -> Self {
        To::Path(parts)
    }
}
