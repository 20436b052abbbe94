//! # navlink
//!
//! **navlink** builds navigation URLs from `{placeholder}` templates and decides how a link is
//! rendered: handed to a client-side router, or emitted as a plain anchor element.
//!
//! ## Overview
//!
//! An application declares its links once as templates:
//!
//! ```text
//! /users/{userId}
//! /users?userId={userId}
//! /orgs/{orgId}/projects/{projectId}?tab={tab}
//! ```
//!
//! and builds concrete URLs from typed parameters at each call site. Parameters that match a
//! placeholder are substituted into the template; every other parameter is routed into the query
//! string, merged with any query literal already in the template, and serialized sorted by key.
//!
//! ## Architecture
//!
//! - **[`template`]** - Placeholder scanning, substitution and query routing
//! - **[`query`]** - Query-string parsing and stable serialization
//! - **[`path`]** - Canonical `pathname?search#hash` join and link targets
//! - **[`params`]** - Ordered parameter mapping, with conversion from any `Serialize` value
//! - **[`config`]** - Factory options from files and environment variables
//! - **[`link`]** - Router link vs. anchor resolution, template links, anchor HTML
//! - **[`cli`]** - The `navlink` command-line tool
//!
//! ### URL Build Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Link as TemplateLink
//!     participant Builder as TemplateBuilder
//!     participant Query as query
//!     participant Path as path::create_path
//!
//!     Caller->>Link: to_url({userId: 42, tab: "posts"})
//!     Link->>Builder: build_url("/users/{userId}", params)
//!     Builder->>Builder: Scan placeholders → ["userId"]
//!     Builder->>Builder: Substitute → "/users/42"
//!     Builder->>Builder: Route leftovers → {tab: "posts"}
//!     Builder->>Query: parse(embedded query literal)
//!     Builder->>Query: stringify(merged, encode)
//!     Query-->>Builder: "tab=posts"
//!     Builder->>Path: create_path(pathname, search, hash)
//!     Path-->>Caller: "/users/42?tab=posts"
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use navlink::link::LinkFactory;
//! use navlink::params::Params;
//! use navlink::template::UrlOptions;
//!
//! let factory = LinkFactory::default();
//! let user_link = factory.create_link("/users/{userId}");
//!
//! assert_eq!(
//!     user_link.to_url(&Params::from([("userId", "dancerphil")]), &UrlOptions::default()),
//!     "/users/dancerphil"
//! );
//! ```
//!
//! ## Behaviour Worth Knowing
//!
//! - A missing path parameter substitutes the empty string: `/users/{userId}/detail` without
//!   `userId` builds `/users//detail`.
//! - Query values are percent-encoded by default; path substitutions are not.
//! - Building never fails and has no side effects beyond `tracing` events.

pub mod cli;
pub mod config;
pub mod error;
pub mod link;
pub mod logging;
pub mod params;
pub mod path;
pub mod query;
pub mod template;

pub use config::{LinkConfig, LinkType};
pub use error::{ConfigError, ParamsError};
pub use link::{LinkFactory, LinkProps, ResolvedLink, TemplateLink, TemplateLinkProps};
pub use params::{ParamValue, Params};
pub use path::{create_path, PathParts, To};
pub use template::{TemplateBuilder, UrlOptions};
