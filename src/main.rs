// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]

use clap::Parser;
use color_eyre::eyre::Result;
use git_remote_url::logging::{init_logging, parse_level, LogConfig};
use git_remote_url::output::render;
use git_remote_url::user_config::{load_user_config, load_user_config_from};
use git_remote_url::{parse_url, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Parse GitHub, GitLab and Bitbucket remote URLs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Remote URLs to parse (https, ssh:// or scp-style)
    #[arg(required = true)]
    urls: Vec<String>,

    /// Output format [default: text]
    #[arg(short, long, env = "GIT_REMOTE_URL_FORMAT", value_enum)]
    format: Option<OutputFormat>,

    /// Log level: trace, debug, info, warn or error [default: warn]
    #[arg(long, env = "GIT_REMOTE_URL_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON log format
    #[arg(long, env = "GIT_REMOTE_URL_LOG_JSON")]
    log_json: bool,

    /// Config file to use instead of the per-user one
    #[arg(long, env = "GIT_REMOTE_URL_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    let args = Args::parse();

    // Flags and env win over the config file
    let user_config = match &args.config {
        Some(path) => load_user_config_from(path)?,
        None => load_user_config()?,
    };

    let log_level = args
        .log_level
        .as_deref()
        .or(user_config.logging.level.as_deref())
        .unwrap_or(DEFAULT_LOG_LEVEL);
    let log_config = LogConfig {
        log_level: parse_level(log_level),
        json_format: args.log_json || user_config.logging.json.unwrap_or(false),
    };
    init_logging(&log_config)?;

    let format = args
        .format
        .or(user_config.output.format)
        .unwrap_or_default();
    debug!(?format, urls = args.urls.len(), "parsing urls");

    let mut parsed = Vec::with_capacity(args.urls.len());
    let mut any_failed = false;
    for url in &args.urls {
        match parse_url(url) {
            Ok(repository) => parsed.push(repository),
            Err(e) => {
                error!(url = %url, error = %e, "failed to parse url");
                eprintln!("Error: {e}");
                any_failed = true;
            }
        }
    }

    print!("{}", render(&parsed, format)?);

    Ok(if any_failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
