//! # CLI Module
//!
//! Command-line access to the URL builder and link resolver, mainly for
//! scripts and for checking how a template expands.
//!
//! ## Commands
//!
//! ### `url`
//!
//! Build a URL from a template:
//!
//! ```bash
//! navlink url '/users/{userId}' -p userId=dancerphil -p keyword=dan --hash top
//! # /users/dancerphil?keyword=dan#top
//! ```
//!
//! Options:
//! - `-p, --param <KEY=VALUE>` - Parameter; repeat a key for a list, omit `=` for a flag
//! - `--hash <HASH>` - Fragment to append
//! - `--encode-path` - Percent-encode path substitutions
//! - `--no-encode-query` - Leave query keys and values unencoded
//!
//! ### `anchor`
//!
//! Render the anchor element a template link resolves to outside a router:
//!
//! ```bash
//! navlink anchor '/users/{userId}' -p userId=7 --text Profile --config navlink.yaml
//! ```
//!
//! ## Global options
//!
//! - `-c, --config <FILE>` - Link configuration (also `NAVLINK_CONFIG`)
//! - `--log-format <json|pretty>` - Log format; level comes from `RUST_LOG`

mod commands;


pub use commands::{parse_params, run, run_cli, run_with_overrides, Cli, Commands};
