use crate::config::LinkType;
use crate::path::To;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Navigation state a router reports for a link
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    /// The link points at the current location
    pub is_active: bool,
    /// Navigation to the link's target is in flight
    pub is_pending: bool,
}

/// A value that is either fixed or derived from the router's [`NavState`]
///
/// Router links keep derived values so the router can evaluate them per
/// render. Anchors have no router, so derived values are evaluated with an
/// inactive state.
pub enum Derivable<T> {
    /// Fixed value
    Static(T),
    /// Value computed from the navigation state
    Derived(Arc<dyn Fn(NavState) -> T + Send + Sync>),
}

impl<T> Derivable<T> {
    /// Wrap a closure as a derived value
    pub fn derived(f: impl Fn(NavState) -> T + Send + Sync + 'static) -> Self {
        Derivable::Derived(Arc::new(f))
    }

    /// Whether this value depends on the navigation state
    #[must_use]
    pub fn is_derived(&self) -> bool {
        matches!(self, Derivable::Derived(_))
    }
}

impl<T: Clone> Derivable<T> {
    /// Resolve the value for `state`
    #[must_use]
    pub fn evaluate(&self, state: NavState) -> T {
        match self {
            Derivable::Static(value) => value.clone(),
            Derivable::Derived(f) => f(state),
        }
    }
}

impl<T: Clone> Clone for Derivable<T> {
    fn clone(&self) -> Self {
        match self {
            Derivable::Static(value) => Derivable::Static(value.clone()),
            Derivable::Derived(f) => Derivable::Derived(Arc::clone(f)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Derivable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Derivable::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Derivable::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// One piece of link content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Plain text, escaped when rendered
    Text(String),
    /// Pre-rendered markup, inserted verbatim
    Html(String),
}

/// Class attribute of a link
pub type ClassName = Derivable<String>;
/// Inline `style` attribute of a link
pub type Style = Derivable<String>;
/// Content of a link
pub type Children = Derivable<Node>;

impl From<&str> for Derivable<String> {
    fn from(value: &str) -> Self {
        Derivable::Static(value.to_string())
    }
}

impl From<String> for Derivable<String> {
    fn from(value: String) -> Self {
        Derivable::Static(value)
    }
}

impl From<&str> for Derivable<Node> {
    fn from(value: &str) -> Self {
        Derivable::Static(Node::Text(value.to_string()))
    }
}

impl From<String> for Derivable<Node> {
    fn from(value: String) -> Self {
        Derivable::Static(Node::Text(value))
    }
}

impl From<Node> for Derivable<Node> {
    fn from(value: Node) -> Self {
        Derivable::Static(value)
    }
}

/// How a relative router target is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relative {
    /// Relative to the route hierarchy
    Route,
    /// Relative to the URL path segments
    Path,
}

/// Options passed through to the router's own link
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouterOptions {
    /// Replace the current history entry instead of pushing
    pub replace: bool,
    /// Skip client-side routing and load the document
    pub reload_document: bool,
    /// Keep the scroll position after navigation
    pub prevent_scroll_reset: bool,
    /// Match the active state case-sensitively
    pub case_sensitive: bool,
    /// Only active on an exact match
    pub end: bool,
    /// Relative resolution mode
    pub relative: Option<Relative>,
    /// History state attached to the navigation
    pub state: Option<serde_json::Value>,
}

/// Properties of a plain link
#[derive(Debug, Clone, Default)]
pub struct LinkProps {
    /// Navigation target; a link without one renders as an anchor with an empty href
    pub to: Option<To>,
    /// Open in a new window
    pub blank: bool,
    /// Overrides the factory's default link type
    pub link_type: Option<LinkType>,
    /// Consumers must suppress navigation when set
    pub disabled: bool,
    /// Never append the external icon
    pub disable_external_icon: bool,
    /// Extra classes, after the factory's base classes
    pub class_name: Option<ClassName>,
    /// Inline style
    pub style: Option<Style>,
    /// Link content
    pub children: Option<Children>,
    /// Router pass-through options
    pub router: RouterOptions,
}

impl LinkProps {
    /// Props for a link to `to`
    #[must_use]
    pub fn to(to: impl Into<To>) -> Self {
        Self {
            to: Some(to.into()),
            ..Self::default()
        }
    }

    /// Set the link content
    #[must_use]
    pub fn children(mut self, children: impl Into<Children>) -> Self {
        self.children = Some(children.into());
        self
    }

    /// Set the extra classes
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<ClassName>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

/// Properties of a template link
///
/// Every field is optional so that a template link's initial props can be
/// merged under the props of each call.
#[derive(Debug, Clone, Default)]
pub struct TemplateLinkProps {
    /// Fragment appended to the built URL
    pub hash: Option<String>,
    /// Open in a new window
    pub blank: Option<bool>,
    /// Overrides the factory's default link type
    pub link_type: Option<LinkType>,
    /// Consumers must suppress navigation when set
    pub disabled: Option<bool>,
    /// Never append the external icon
    pub disable_external_icon: Option<bool>,
    /// Extra classes
    pub class_name: Option<ClassName>,
    /// Inline style
    pub style: Option<Style>,
    /// Link content
    pub children: Option<Children>,
    /// Router pass-through options
    pub router: Option<RouterOptions>,
}

impl TemplateLinkProps {
    /// Fill every unset field from `base`
    #[must_use]
    pub fn merged_over(self, base: &TemplateLinkProps) -> Self {
        Self {
            hash: self.hash.or_else(|| base.hash.clone()),
            blank: self.blank.or(base.blank),
            link_type: self.link_type.or(base.link_type),
            disabled: self.disabled.or(base.disabled),
            disable_external_icon: self.disable_external_icon.or(base.disable_external_icon),
            class_name: self.class_name.or_else(|| base.class_name.clone()),
            style: self.style.or_else(|| base.style.clone()),
            children: self.children.or_else(|| base.children.clone()),
            router: self.router.or_else(|| base.router.clone()),
        }
    }

    /// Plain link props for a resolved target
    #[must_use]
    pub fn into_link_props(self, to: To) -> LinkProps {
        LinkProps {
            to: Some(to),
            blank: self.blank.unwrap_or(false),
            link_type: self.link_type,
            disabled: self.disabled.unwrap_or(false),
            disable_external_icon: self.disable_external_icon.unwrap_or(false),
            class_name: self.class_name,
            style: self.style,
            children: self.children,
            router: self.router.unwrap_or_default(),
        }
    }
}
