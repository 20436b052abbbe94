//! # Link Module
//!
//! Decides how a navigation link is rendered and carries the template links
//! built on top of [`template`](crate::template).
//!
//! ## Resolution
//!
//! [`LinkFactory::resolve`] returns a [`ResolvedLink`]:
//!
//! - **Router link**: the target is internal, present, and the caller is
//!   inside a router context. The router receives the target as is (it applies
//!   its own basename) and evaluates derived class/style/children itself.
//! - **Anchor**: every other case. The href gets the configured basename
//!   unless the target is external; derived values are evaluated with an
//!   inactive [`NavState`].
//!
//! Blank and external links get `target="_blank"` and
//! `rel="noopener noreferrer"`. External anchors with text content get the
//! configured external icon appended.
//!
//! ## Template links
//!
//! ```rust
//! use navlink::link::{LinkFactory, TemplateLinkProps};
//! use navlink::params::Params;
//!
//! let factory = LinkFactory::default();
//! let user_link = factory.create_link("/users/{userId}");
//!
//! let resolved = user_link.resolve(
//!     TemplateLinkProps {
//!         hash: Some("posts".into()),
//!         ..TemplateLinkProps::default()
//!     },
//!     &Params::from([("userId", "42")]),
//!     true,
//! );
//! let router_link = resolved.as_router().unwrap();
//! assert_eq!(router_link.to.href(), "/users/42#posts");
//! ```

mod factory;
mod props;
mod resolved;
#[cfg(test)]
mod tests;

pub use factory::{is_external_default, ExternalCheck, LinkFactory, TemplateLink};
pub use props::{
    Children, ClassName, Derivable, LinkProps, NavState, Node, Relative, RouterOptions, Style,
    TemplateLinkProps,
};
pub use resolved::{Anchor, ResolvedLink, RouterLink, BLANK_REL, BLANK_TARGET};
