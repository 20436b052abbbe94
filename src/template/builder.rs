use crate::error::ConfigError;
use crate::params::Params;
use crate::path::{create_path, PathParts};
use crate::query;
use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::{Captures, Regex};
use smallvec::SmallVec;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Placeholder pattern used when none is configured: `{identifier}`
///
/// Identifiers are ASCII word characters only, so `{usér}` is literal text.
/// A custom pattern using `\w` matches Unicode word characters instead.
pub const DEFAULT_INTERPOLATE: &str = r"\{([A-Za-z0-9_]+)\}";

/// Maximum number of placeholders kept on the stack.
/// Most templates have ≤4 (e.g. `/orgs/{orgId}/users/{userId}`).
pub const MAX_INLINE_PLACEHOLDERS: usize = 8;

/// Placeholder names in template order, borrowed from the template
pub type PlaceholderVec<'t> = SmallVec<[&'t str; MAX_INLINE_PLACEHOLDERS]>;

#[allow(clippy::expect_used)]
static DEFAULT_INTERPOLATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_INTERPOLATE).expect("default interpolate pattern must compile"));

/// Characters escaped when encoding a path substitution.
///
/// URI-component rules: everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Options for a single URL build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlOptions {
    /// Fragment appended to the URL, with or without the leading `#`
    pub hash: Option<String>,
}

impl UrlOptions {
    /// Options carrying only a hash
    #[must_use]
    pub fn with_hash(hash: impl Into<String>) -> Self {
        Self {
            hash: Some(hash.into()),
        }
    }
}

/// Builds URLs from `{placeholder}` templates
///
/// Configuration is fixed at creation. Building is pure and never fails:
/// a missing path parameter substitutes the empty string, and every
/// parameter that is not consumed by a placeholder goes to the query string.
///
/// # Example
///
/// ```rust
/// use navlink::params::Params;
/// use navlink::template::{TemplateBuilder, UrlOptions};
///
/// let builder = TemplateBuilder::default();
/// let params = Params::from([("userId", "dancerphil"), ("tab", "posts")]);
/// let url = builder.build_url("/users/{userId}", &params, &UrlOptions::with_hash("top"));
/// assert_eq!(url, "/users/dancerphil?tab=posts#top");
/// ```
#[derive(Debug, Clone)]
pub struct TemplateBuilder {
    interpolate: Regex,
    encode_path_variable: bool,
    encode_query_variable: bool,
}

impl Default for TemplateBuilder {
    fn default() -> Self {
        Self {
            interpolate: DEFAULT_INTERPOLATE_RE.clone(),
            encode_path_variable: false,
            encode_query_variable: true,
        }
    }
}

impl TemplateBuilder {
    /// Builder with a custom placeholder pattern
    ///
    /// The placeholder name is the pattern's first capture group. A pattern
    /// without groups uses the whole match minus its first and last character.
    pub fn with_interpolate(pattern: &str) -> Result<Self, ConfigError> {
        let interpolate =
            Regex::new(pattern).map_err(|source| ConfigError::InvalidInterpolate {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            interpolate,
            ..Self::default()
        })
    }

    /// Percent-encode values substituted into the template (default `false`)
    #[must_use]
    pub fn encode_path_variable(mut self, enabled: bool) -> Self {
        self.encode_path_variable = enabled;
        self
    }

    /// Percent-encode query keys and values (default `true`)
    #[must_use]
    pub fn encode_query_variable(mut self, enabled: bool) -> Self {
        self.encode_query_variable = enabled;
        self
    }

    /// The placeholder pattern in use
    #[must_use]
    pub fn interpolate(&self) -> &Regex {
        &self.interpolate
    }

    /// Placeholder names found in `template`, in order, duplicates included
    #[must_use]
    pub fn placeholders<'t>(&self, template: &'t str) -> PlaceholderVec<'t> {
        self.interpolate
            .captures_iter(template)
            .map(|caps| placeholder_name(&caps))
            .collect()
    }

    /// Build a URL from `template` and `params`
    ///
    /// See the [module documentation](super) for the full algorithm.
    #[must_use]
    pub fn build_url(&self, template: &str, params: &Params, options: &UrlOptions) -> String {
        let names = self.placeholders(template);

        let (interpolated, query_base) = if names.is_empty() {
            (Cow::Borrowed(template), params.clone())
        } else {
            trace!(
                template = %template,
                placeholders = ?names,
                "Template placeholders extracted"
            );
            let query_base = params.without(names.as_slice());
            let interpolated = self
                .interpolate
                .replace_all(template, |caps: &Captures<'_>| self.substitute(caps, params));
            (interpolated, query_base)
        };

        let (pathname, path_query) = match interpolated.split_once('?') {
            Some((pathname, path_query)) => (pathname, Some(path_query)),
            None => (&*interpolated, None),
        };

        let query = match path_query.filter(|q| !q.is_empty()) {
            Some(literal) => {
                let mut merged = query::parse(literal);
                merged.extend_from(query_base);
                merged
            }
            None => query_base,
        };

        let url = create_path(&PathParts {
            pathname: pathname.to_string(),
            search: query::stringify(&query, self.encode_query_variable),
            hash: options.hash.clone().unwrap_or_default(),
        });

        debug!(
            template = %template,
            placeholders = names.len(),
            query_params = query.len(),
            url = %url,
            "Template URL built"
        );

        url
    }

    fn substitute(&self, caps: &Captures<'_>, params: &Params) -> String {
        let name = placeholder_name(caps);
        let value = params
            .get(name)
            .map(|v| v.as_path_segment())
            .unwrap_or(Cow::Borrowed(""));
        if self.encode_path_variable {
            utf8_percent_encode(&value, URI_COMPONENT).to_string()
        } else {
            value.into_owned()
        }
    }
}

fn placeholder_name<'t>(caps: &Captures<'t>) -> &'t str {
    if let Some(group) = caps.get(1) {
        return group.as_str();
    }
    let whole = caps.get(0).map_or("", |m| m.as_str());
    let mut chars = whole.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
