use crate::config::LinkConfig;
use crate::link::{LinkFactory, ResolvedLink, TemplateLinkProps};
use crate::logging::{init_logging, LogFormat};
use crate::params::{ParamValue, Params};
use crate::template::UrlOptions;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

/// Command-line interface for navlink
#[derive(Parser, Debug)]
#[command(name = "navlink")]
#[command(about = "Build template URLs and navigation links", long_about = None)]
pub struct Cli {
    /// Link configuration file (YAML, JSON or TOML)
    #[arg(short, long, global = true, env = "NAVLINK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log line format (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a URL from a template
    Url {
        /// Template, e.g. '/users/{userId}?tab={tab}'
        template: String,

        /// Parameter as key=value; a bare key is a flag, a repeated key a list
        #[arg(short = 'p', long = "param")]
        params: Vec<String>,

        /// Fragment to append
        #[arg(long)]
        hash: Option<String>,

        /// Percent-encode path substitutions
        #[arg(long, default_value_t = false)]
        encode_path: bool,

        /// Write query keys and values without percent-encoding
        #[arg(long, default_value_t = false)]
        no_encode_query: bool,
    },
    /// Render an anchor element for a template
    Anchor {
        /// Template, e.g. '/users/{userId}'
        template: String,

        /// Parameter as key=value; a bare key is a flag, a repeated key a list
        #[arg(short = 'p', long = "param")]
        params: Vec<String>,

        /// Fragment to append
        #[arg(long)]
        hash: Option<String>,

        /// Link text
        #[arg(long)]
        text: Option<String>,

        /// Open in a new window
        #[arg(long, default_value_t = false)]
        blank: bool,
    },
}

/// Parse `key=value` arguments into parameters
///
/// A bare `key` becomes a flag and a repeated key becomes a list.
pub fn parse_params(raw: &[String]) -> Result<Params> {
    let mut params = Params::new();
    for arg in raw {
        let (key, value) = match arg.split_once('=') {
            Some((key, value)) => (key, ParamValue::Text(value.to_string())),
            None => (arg.as_str(), ParamValue::Flag),
        };
        if key.is_empty() {
            bail!("invalid parameter '{}': key must not be empty", arg);
        }
        params.append(key, value);
    }
    Ok(params)
}

fn load_config(cli: &Cli, lookup: impl Fn(&str) -> Option<String>) -> Result<LinkConfig> {
    let config = match &cli.config {
        Some(path) => LinkConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => LinkConfig::default(),
    };
    Ok(config.with_overrides(lookup))
}

/// Execute a parsed command and return what it would print
///
/// `NAVLINK_*` overrides come from the process environment.
pub fn run(cli: &Cli) -> Result<String> {
    run_with_overrides(cli, |key| std::env::var(key).ok())
}

/// Execute a parsed command, reading `NAVLINK_*` overrides through `lookup`
pub fn run_with_overrides(
    cli: &Cli,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String> {
    let mut config = load_config(cli, lookup)?;

    match &cli.command {
        Commands::Url {
            template,
            params,
            hash,
            encode_path,
            no_encode_query,
        } => {
            if *encode_path {
                config.encode_path_variable = true;
            }
            if *no_encode_query {
                config.encode_query_variable = false;
            }
            let factory = LinkFactory::new(config)?;
            let params = parse_params(params)?;
            debug!(template = %template, params = params.len(), "Building URL");
            let options = UrlOptions { hash: hash.clone() };
            Ok(factory.create_link(template.as_str()).to_url(&params, &options))
        }
        Commands::Anchor {
            template,
            params,
            hash,
            text,
            blank,
        } => {
            let factory = LinkFactory::new(config)?;
            let params = parse_params(params)?;
            let props = TemplateLinkProps {
                hash: hash.clone(),
                blank: Some(*blank),
                children: text.as_deref().map(Into::into),
                ..TemplateLinkProps::default()
            };
            // No router on the command line: always an anchor.
            match factory.create_link(template.as_str()).resolve(props, &params, false) {
                ResolvedLink::Anchor(anchor) => {
                    anchor.to_html().context("failed to render anchor")
                }
                ResolvedLink::Router(link) => {
                    bail!("link to {} resolved to a router link", link.to.href())
                }
            }
        }
    }
}

/// Parse arguments, set up logging, run, and print the result
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging("warn", cli.log_format)?;
    let output = run(&cli)?;
    println!("{output}");
    Ok(())
}
