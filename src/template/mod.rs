//! # Template Module
//!
//! Turns a path template plus a parameter mapping into a relative URL.
//!
//! ## Overview
//!
//! A template is a path with `{name}` placeholders, optionally followed by a
//! `?` and a query literal that may hold placeholders too:
//!
//! ```text
//! /users/{userId}?from={from}
//! ```
//!
//! Building a URL runs in one pass over the template:
//!
//! 1. **Scan**: collect placeholder names with the configured pattern.
//! 2. **Route**: parameters whose key matches a placeholder are consumed by
//!    substitution; every other parameter goes to the query string.
//! 3. **Substitute**: each occurrence is replaced with its value (optionally
//!    percent-encoded). A missing value substitutes the empty string, so
//!    `/users/{userId}/detail` without `userId` yields `/users//detail`.
//! 4. **Merge**: the result is split on the first `?`. The embedded query
//!    literal is parsed and the routed parameters are laid over it.
//! 5. **Join**: the merged query is serialized sorted by key and joined with
//!    the pathname and hash.
//!
//! ## Example
//!
//! ```rust
//! use navlink::params::Params;
//! use navlink::template::{TemplateBuilder, UrlOptions};
//!
//! let builder = TemplateBuilder::default();
//! let params = Params::from([("userId", "dancerphil"), ("keyword", "dan")]);
//! assert_eq!(
//!     builder.build_url("/users?userId={userId}", &params, &UrlOptions::default()),
//!     "/users?keyword=dan&userId=dancerphil"
//! );
//! ```

mod builder;

pub use builder::{
    PlaceholderVec, TemplateBuilder, UrlOptions, DEFAULT_INTERPOLATE, MAX_INLINE_PLACEHOLDERS,
};
