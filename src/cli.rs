//! CLI argument definitions using clap derive macros.

use clap::{ArgGroup, Parser};

/// Describe an HTTP request and print it in normalized form.
///
/// Builds the request the way an adapter would receive it: URL credentials
/// become basic auth, query parameters are form-encoded, headers are
/// validated. No network I/O is performed.
#[derive(Parser, Debug)]
#[command(name = "http-adapter")]
#[command(author, version, about)]
#[command(group(ArgGroup::new("payload").args(["body", "form"])))]
#[command(group(ArgGroup::new("credentials").args(["basic", "digest"])))]
pub struct Args {
    /// Target URL (http or https)
    pub url: String,

    /// Proxy URL (overrides the config file)
    #[arg(long)]
    pub proxy: Option<String>,

    /// Request header as `Name: value` (repeatable)
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Raw request body
    #[arg(long)]
    pub body: Option<String>,

    /// Form body parameter as `key=value` (repeatable)
    #[arg(long, value_parser = parse_pair)]
    pub form: Vec<(String, String)>,

    /// Query parameter as `key=value` (repeatable, replaces the URL query)
    #[arg(long, value_parser = parse_pair)]
    pub query: Vec<(String, String)>,

    /// HTTP basic credentials as `user:password`
    #[arg(long, value_parser = parse_credentials)]
    pub basic: Option<(String, String)>,

    /// HTTP digest credentials as `user:password`
    #[arg(long, value_parser = parse_credentials)]
    pub digest: Option<(String, String)>,

    /// Ask for gzip/deflate encoded responses
    #[arg(long)]
    pub gzip: bool,

    /// Connect timeout in seconds (1-3600)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub open_timeout: Option<u64>,

    /// Read timeout in seconds (1-3600)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub read_timeout: Option<u64>,

    /// Skip loading the config file
    #[arg(long)]
    pub no_config: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected `Name: value`, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("header name is empty in '{raw}'"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected `key=value`, got '{raw}'"))?;
    Ok((key.to_string(), value.to_string()))
}

// A missing password is an empty password.
fn parse_credentials(raw: &str) -> Result<(String, String), String> {
    let (user, password) = raw.split_once(':').unwrap_or((raw, ""));
    if user.is_empty() {
        return Err("username is empty".to_string());
    }
    Ok((user.to_string(), password.to_string()))
}
