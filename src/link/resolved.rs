use super::props::{Children, ClassName, Node, RouterOptions, Style};
use crate::path::To;
use askama::Template;

/// `target` attribute for links that open a new window
pub const BLANK_TARGET: &str = "_blank";
/// `rel` attribute for links that open a new window
pub const BLANK_REL: &str = "noopener noreferrer";

/// Outcome of resolving a link
#[derive(Debug, Clone)]
pub enum ResolvedLink {
    /// Hand the link to the router
    Router(RouterLink),
    /// Render a plain `<a>` element
    Anchor(Anchor),
}

impl ResolvedLink {
    /// The router link, if the link resolved to one
    #[must_use]
    pub fn as_router(&self) -> Option<&RouterLink> {
        match self {
            ResolvedLink::Router(link) => Some(link),
            ResolvedLink::Anchor(_) => None,
        }
    }

    /// The anchor, if the link resolved to one
    #[must_use]
    pub fn as_anchor(&self) -> Option<&Anchor> {
        match self {
            ResolvedLink::Router(_) => None,
            ResolvedLink::Anchor(anchor) => Some(anchor),
        }
    }
}

/// A link the router renders and navigates
///
/// Class, style and children stay [`Derivable`](super::Derivable) so the
/// router can evaluate them against its active/pending state.
#[derive(Debug, Clone)]
pub struct RouterLink {
    /// Internal target, handed to the router without the basename
    pub to: To,
    /// Base classes plus any extra classes
    pub class_name: ClassName,
    /// Inline style
    pub style: Option<Style>,
    /// Link content
    pub children: Option<Children>,
    /// `_blank` when the link opens a new window
    pub target: Option<&'static str>,
    /// `noopener noreferrer` when the link opens a new window
    pub rel: Option<&'static str>,
    /// Consumers must suppress navigation when set
    pub disabled: bool,
    /// Router pass-through options
    pub router: RouterOptions,
}

/// A plain anchor element with every value already evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Final href; internal targets carry the basename
    pub href: String,
    /// Class attribute
    pub class_name: String,
    /// Inline style
    pub style: Option<String>,
    /// Content, including the external icon when one was appended
    pub content: Vec<Node>,
    /// `_blank` when the link opens a new window
    pub target: Option<&'static str>,
    /// `noopener noreferrer` when the link opens a new window
    pub rel: Option<&'static str>,
    /// Consumers must suppress navigation when set
    pub disabled: bool,
}

#[derive(Template)]
#[template(
    source = r#"<a href="{{ href }}" class="{{ class_name }}"{% if let Some(style) = style %} style="{{ style }}"{% endif %}{% if let Some(target) = target %} target="{{ target }}"{% endif %}{% if let Some(rel) = rel %} rel="{{ rel }}"{% endif %}{% if disabled %} aria-disabled="true"{% endif %}>{% for node in content %}{% match node %}{% when Node::Text(text) %}{{ text }}{% when Node::Html(html) %}{{ html|safe }}{% endmatch %}{% endfor %}</a>"#,
    ext = "html"
)]
struct AnchorTemplate<'a> {
    href: &'a str,
    class_name: &'a str,
    style: Option<&'a str>,
    target: Option<&'a str>,
    rel: Option<&'a str>,
    disabled: bool,
    content: &'a [Node],
}

impl Anchor {
    /// Render this anchor as HTML
    ///
    /// Attribute values and text content are HTML-escaped; [`Node::Html`]
    /// content is inserted as is.
    pub fn to_html(&self) -> Result<String, askama::Error> {
        AnchorTemplate {
            href: &self.href,
            class_name: &self.class_name,
            style: self.style.as_deref(),
            target: self.target,
            rel: self.rel,
            disabled: self.disabled,
            content: &self.content,
        }
        .render()
    }
}
