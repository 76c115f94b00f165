//! CLI entry point for the http-adapter tool.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use http_adapter::{Payload, Request, redact_credentials};
use serde::Serialize;
use tracing::{debug, info};

mod cli;
mod config;

use cli::Args;
use config::FileConfig;

/// Printed description of a normalized request.
#[derive(Debug, Serialize)]
struct RequestSummary {
    url: Option<String>,
    proxy: Option<String>,
    ssl: bool,
    query: Option<String>,
    headers: Vec<(String, String)>,
    body: Option<String>,
    auth_type: Option<String>,
    username: Option<String>,
    open_timeout_secs: Option<u64>,
    read_timeout_secs: Option<u64>,
}

impl RequestSummary {
    fn from_request(request: &Request) -> Self {
        let headers = request
            .headers()
            .iter()
            .map(|(name, value)| {
                let shown = if value.is_sensitive() {
                    "[REDACTED]".to_string()
                } else {
                    String::from_utf8_lossy(value.as_bytes()).into_owned()
                };
                (name.as_str().to_string(), shown)
            })
            .collect();
        let auth = request.auth();
        Self {
            url: request.url().map(redact_credentials),
            proxy: request.proxy().map(redact_credentials),
            ssl: request.is_ssl(),
            query: request.query().map(str::to_string),
            headers,
            body: request.body().map(str::to_string),
            auth_type: auth.auth_type().map(|kind| kind.to_string()),
            username: auth.credentials().map(|creds| creds.username().to_string()),
            open_timeout_secs: request.open_timeout().map(|timeout| timeout.as_secs()),
            read_timeout_secs: request.read_timeout().map(|timeout| timeout.as_secs()),
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(verbose = args.verbose, no_config = args.no_config, "CLI arguments parsed");

    let file_config = if args.no_config {
        FileConfig::default()
    } else {
        match config::load_default_file_config()? {
            Some((path, loaded)) => {
                info!(path = %path.display(), "Loaded config file");
                loaded
            }
            None => FileConfig::default(),
        }
    };

    let request = build_request(&args, &file_config)?;
    info!(
        url = %request.url().map(redact_credentials).unwrap_or_default(),
        "Request built"
    );
    let summary = RequestSummary::from_request(&request);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Applies config defaults, then CLI flags, to a fresh request.
fn build_request(args: &Args, file_config: &FileConfig) -> Result<Request> {
    let mut request = Request::new(&args.url).context("Failed to set request URL")?;

    if let Some(proxy) = args.proxy.as_ref().or(file_config.proxy.as_ref()) {
        request
            .set_proxy(proxy)
            .context("Failed to set request proxy")?;
    }

    if !args.query.is_empty() {
        request
            .set_query(Payload::Params(args.query.clone()))
            .context("Failed to set request query")?;
    }

    request
        .set_headers(args.headers.iter().map(|(name, value)| (name.as_str(), value.as_str())))
        .context("Failed to set request headers")?;

    if args.gzip || file_config.gzip.unwrap_or(false) {
        request.gzip();
    }

    if let Some(body) = &args.body {
        request.set_body(body.as_str());
    } else if !args.form.is_empty() {
        request.set_body(Payload::Params(args.form.clone()));
    }

    if let Some((user, password)) = &args.basic {
        request.auth_mut().set_basic(user, password);
    } else if let Some((user, password)) = &args.digest {
        request.auth_mut().set_digest(user, password);
    }

    if let Some(secs) = args.open_timeout.or(file_config.open_timeout_secs) {
        request.set_open_timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = args.read_timeout.or(file_config.read_timeout_secs) {
        request.set_read_timeout(Duration::from_secs(secs));
    }

    debug!(?request, "Request normalized");
    Ok(request)
}
