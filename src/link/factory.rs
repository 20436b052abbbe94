use super::props::{ClassName, Derivable, LinkProps, NavState, Node, TemplateLinkProps};
use super::resolved::{Anchor, ResolvedLink, RouterLink, BLANK_REL, BLANK_TARGET};
use crate::config::{LinkConfig, LinkType};
use crate::error::{ConfigError, ParamsError};
use crate::params::Params;
use crate::path::To;
use crate::template::{TemplateBuilder, UrlOptions};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

#[allow(clippy::expect_used)]
static MAILTO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^mailto:.*@").expect("mailto pattern must compile"));

/// Predicate deciding whether a target leaves the application
pub type ExternalCheck = Arc<dyn Fn(Option<&To>) -> bool + Send + Sync>;

/// Default external check
///
/// A string target is external when it contains `://` or is a `mailto:`
/// address with an `@`. Structured targets and missing targets are internal.
///
/// ```rust
/// use navlink::link::is_external_default;
/// use navlink::path::To;
///
/// assert!(is_external_default(Some(&To::from("https://example.com"))));
/// assert!(is_external_default(Some(&To::from("mailto:team@example.com"))));
/// assert!(!is_external_default(Some(&To::from("/users"))));
/// assert!(!is_external_default(None));
/// ```
#[must_use]
pub fn is_external_default(to: Option<&To>) -> bool {
    match to.and_then(To::as_url) {
        Some(url) => url.contains("://") || MAILTO_RE.is_match(url),
        None => false,
    }
}

/// Creates links and template links sharing one configuration
///
/// Cloning is cheap: the compiled pattern and the external check are shared.
///
/// # Example
///
/// ```rust
/// use navlink::config::LinkConfig;
/// use navlink::link::{LinkFactory, LinkProps};
///
/// let factory = LinkFactory::new(LinkConfig {
///     basename: "/app".into(),
///     ..LinkConfig::default()
/// })
/// .unwrap();
///
/// let anchor = factory.resolve(LinkProps::to("/users").children("Users"), false);
/// let html = anchor.as_anchor().unwrap().to_html().unwrap();
/// assert_eq!(
///     html,
///     r#"<a href="/app/users" class="panda-link panda-link-default">Users</a>"#
/// );
/// ```
#[derive(Clone)]
pub struct LinkFactory {
    builder: TemplateBuilder,
    basename: String,
    is_external: ExternalCheck,
    external_icon: Option<String>,
    prefix_cls: String,
    default_link_type: LinkType,
}

impl fmt::Debug for LinkFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkFactory")
            .field("builder", &self.builder)
            .field("basename", &self.basename)
            .field("external_icon", &self.external_icon)
            .field("prefix_cls", &self.prefix_cls)
            .field("default_link_type", &self.default_link_type)
            .finish_non_exhaustive()
    }
}

impl Default for LinkFactory {
    fn default() -> Self {
        let config = LinkConfig::default();
        Self {
            builder: TemplateBuilder::default(),
            basename: config.basename,
            is_external: Arc::new(is_external_default),
            external_icon: config.external_icon,
            prefix_cls: config.prefix_cls,
            default_link_type: config.default_link_type,
        }
    }
}

impl LinkFactory {
    /// Create a factory from configuration
    ///
    /// Fails only when `interpolate` is not a valid regular expression.
    pub fn new(config: LinkConfig) -> Result<Self, ConfigError> {
        let builder = TemplateBuilder::with_interpolate(&config.interpolate)?
            .encode_path_variable(config.encode_path_variable)
            .encode_query_variable(config.encode_query_variable);

        debug!(
            basename = %config.basename,
            interpolate = %config.interpolate,
            prefix_cls = %config.prefix_cls,
            default_link_type = %config.default_link_type,
            "Link factory created"
        );

        Ok(Self {
            builder,
            basename: config.basename,
            is_external: Arc::new(is_external_default),
            external_icon: config.external_icon,
            prefix_cls: config.prefix_cls,
            default_link_type: config.default_link_type,
        })
    }

    /// Replace the external check
    #[must_use]
    pub fn with_external_check(
        mut self,
        check: impl Fn(Option<&To>) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.is_external = Arc::new(check);
        self
    }

    /// The URL builder shared by this factory's template links
    #[must_use]
    pub fn builder(&self) -> &TemplateBuilder {
        &self.builder
    }

    /// Whether `to` leaves the application
    #[must_use]
    pub fn is_external(&self, to: Option<&To>) -> bool {
        (self.is_external)(to)
    }

    /// Decide how a link is rendered
    ///
    /// An internal target inside a router context becomes a
    /// [`RouterLink`]. Everything else (external targets, no router, no
    /// target) becomes an [`Anchor`].
    #[must_use]
    pub fn resolve(&self, props: LinkProps, in_router_context: bool) -> ResolvedLink {
        let LinkProps {
            to,
            blank,
            link_type,
            disabled,
            disable_external_icon,
            class_name,
            style,
            children,
            router,
        } = props;

        let external = self.is_external(to.as_ref());
        let (target, rel) = if blank || external {
            (Some(BLANK_TARGET), Some(BLANK_REL))
        } else {
            (None, None)
        };
        let link_type = link_type.unwrap_or(self.default_link_type);
        let class_name = self.compose_class_name(class_name, link_type);

        let routable = to
            .as_ref()
            .filter(|to| !is_empty_target(to) && !external && in_router_context);
        if let Some(to) = routable {
            debug!(href = %to.href(), "Link resolved to router link");
            return ResolvedLink::Router(RouterLink {
                to: to.clone(),
                class_name,
                style,
                children,
                target,
                rel,
                disabled,
                router,
            });
        }

        let inactive = NavState::default();
        let href = to.as_ref().map(To::href).unwrap_or_default();
        let href = if external {
            href
        } else {
            format!("{}{}", self.basename, href)
        };

        let mut content: Vec<Node> = children.map(|c| c.evaluate(inactive)).into_iter().collect();
        // Only plain text gets the icon; markup is left as the caller built it.
        let text_only = matches!(content.as_slice(), [Node::Text(_)]);
        if external && !disable_external_icon && text_only {
            if let Some(icon) = &self.external_icon {
                content.push(Node::Html(icon.clone()));
            }
        }

        debug!(
            href = %href,
            external,
            in_router_context,
            "Link resolved to anchor"
        );

        ResolvedLink::Anchor(Anchor {
            href,
            class_name: class_name.evaluate(inactive),
            style: style.map(|s| s.evaluate(inactive)),
            content,
            target,
            rel,
            disabled,
        })
    }

    /// Create a link bound to a URL template
    #[must_use]
    pub fn create_link(&self, template: impl Into<String>) -> TemplateLink {
        TemplateLink {
            factory: self.clone(),
            template: template.into(),
            initial_props: TemplateLinkProps::default(),
            initial_params: Params::new(),
        }
    }

    fn compose_class_name(&self, extra: Option<ClassName>, link_type: LinkType) -> ClassName {
        let base = format!("{prefix} {prefix}-{link_type}", prefix = self.prefix_cls);
        match extra {
            None => Derivable::Static(base),
            Some(Derivable::Static(extra)) => Derivable::Static(format!("{base} {extra}")),
            Some(Derivable::Derived(extra)) => {
                Derivable::derived(move |state| format!("{base} {}", extra(state)))
            }
        }
    }
}

fn is_empty_target(to: &To) -> bool {
    to.as_url().is_some_and(str::is_empty)
}

/// A link bound to a URL template
///
/// # Example
///
/// ```rust
/// use navlink::link::LinkFactory;
/// use navlink::params::Params;
/// use navlink::template::UrlOptions;
///
/// let user_link = LinkFactory::default().create_link("/users/{userId}");
/// let url = user_link.to_url(&Params::from([("userId", "dancerphil")]), &UrlOptions::default());
/// assert_eq!(url, "/users/dancerphil");
/// ```
#[derive(Debug, Clone)]
pub struct TemplateLink {
    factory: LinkFactory,
    template: String,
    initial_props: TemplateLinkProps,
    initial_params: Params,
}

impl TemplateLink {
    /// The URL template
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Props applied under every [`resolve`](Self::resolve) call
    #[must_use]
    pub fn with_initial_props(mut self, props: TemplateLinkProps) -> Self {
        self.initial_props = props;
        self
    }

    /// Parameters applied under every [`resolve`](Self::resolve) call
    #[must_use]
    pub fn with_initial_params(mut self, params: Params) -> Self {
        self.initial_params = params;
        self
    }

    /// Build the URL for `params`
    ///
    /// Initial props and params are not applied; this is the bare template
    /// build.
    #[must_use]
    pub fn to_url(&self, params: &Params, options: &UrlOptions) -> String {
        self.factory.builder.build_url(&self.template, params, options)
    }

    /// Build the URL from any serializable parameter struct
    pub fn to_url_from<T: Serialize + ?Sized>(
        &self,
        params: &T,
        options: &UrlOptions,
    ) -> Result<String, ParamsError> {
        Ok(self.to_url(&Params::from_serialize(params)?, options))
    }

    /// Build the URL and resolve it as a link
    ///
    /// `props` and `params` win over the initial props and params.
    #[must_use]
    pub fn resolve(
        &self,
        props: TemplateLinkProps,
        params: &Params,
        in_router_context: bool,
    ) -> ResolvedLink {
        let props = props.merged_over(&self.initial_props);
        let mut merged = self.initial_params.clone();
        merged.extend_from(params.clone());

        let options = UrlOptions {
            hash: props.hash.clone(),
        };
        let url = self.to_url(&merged, &options);
        self.factory
            .resolve(props.into_link_props(To::Url(url)), in_router_context)
    }
}
