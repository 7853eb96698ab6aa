//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_COMPETITION_ID, DEFAULT_DIST_DIR, DEFAULT_PERSON_FEED_URL, DEFAULT_SERVE_PORT,
    DEFAULT_TIMEOUT_SECS, DEFAULT_UPSTREAM_URL, DEFAULT_USER_AGENT, RANKING_POOL_SIZE,
};
use crate::models::EventCode;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// HTML backend used to read the upstream tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum HtmlBackend {
    /// `scraper` (html5ever + CSS selectors)
    Scraper,
    /// `kuchiki` (html5ever DOM tree)
    Kuchiki,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use prerank::Config;
///
/// let config = Config {
///     competition_id: "2024TaiwanOpen".to_string(),
///     concurrency: 4,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream site serving the competition pages
    pub upstream_url: String,

    /// Competition identifier used in the upstream paths
    pub competition_id: String,

    /// Base URL of the per-person record feed
    pub person_feed_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Personal-best lookups in flight at once
    pub concurrency: usize,

    /// HTML backend for table extraction
    pub html_backend: HtmlBackend,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            competition_id: DEFAULT_COMPETITION_ID.to_string(),
            person_feed_url: DEFAULT_PERSON_FEED_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            concurrency: RANKING_POOL_SIZE,
            html_backend: HtmlBackend::Scraper,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Upstream page listing the registered competitors.
    pub fn competitors_url(&self) -> String {
        format!(
            "{}/event/{}/competitors",
            self.upstream_url.trim_end_matches('/'),
            self.competition_id
        )
    }

    /// Upstream page listing the competition's events and fees.
    pub fn events_url(&self) -> String {
        format!(
            "{}/event/{}/event",
            self.upstream_url.trim_end_matches('/'),
            self.competition_id
        )
    }
}

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(name = "prerank", version, about = "Competition pre-ranking from WCA personal bests")]
pub struct Cli {
    #[command(flatten)]
    pub opt: Opt,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct Opt {
    /// Upstream site serving the competition pages
    #[arg(long, env = "PRERANK_UPSTREAM", default_value = DEFAULT_UPSTREAM_URL, global = true)]
    pub upstream: String,

    /// Competition identifier
    #[arg(long, env = "PRERANK_COMPETITION", default_value = DEFAULT_COMPETITION_ID, global = true)]
    pub competition: String,

    /// Base URL of the per-person record feed
    #[arg(long, env = "PRERANK_PERSON_FEED", default_value = DEFAULT_PERSON_FEED_URL, global = true)]
    pub person_feed: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,

    /// Personal-best lookups in flight at once (at most 8)
    #[arg(long, default_value_t = RANKING_POOL_SIZE, global = true)]
    pub concurrency: usize,

    /// HTML backend for table extraction
    #[arg(long, value_enum, default_value_t = HtmlBackend::Scraper, global = true)]
    pub html_backend: HtmlBackend,

    /// Log level
    #[arg(long, value_enum, env = "PRERANK_LOG_LEVEL", default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the registered competitors
    Competitors,
    /// Print the competition's events
    Events,
    /// Print the pre-ranking for one event
    Rank {
        /// Event code (e.g. 333, 333bf, 333mbf)
        event: EventCode,
    },
    /// Run the same-origin proxy and serve the built front end
    Serve(ServeOpt),
}

/// Options of the `serve` subcommand.
#[derive(Debug, Clone, Args)]
pub struct ServeOpt {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_SERVE_PORT)]
    pub port: u16,

    /// Directory with the built single-page application
    #[arg(long, default_value = DEFAULT_DIST_DIR)]
    pub dist: PathBuf,

    /// Include upstream error details in 502 responses
    #[arg(long)]
    pub dev: bool,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            upstream_url: opt.upstream,
            competition_id: opt.competition,
            person_feed_url: opt.person_feed,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
            concurrency: opt.concurrency.clamp(1, RANKING_POOL_SIZE),
            html_backend: opt.html_backend,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
