//! CLI arguments for mystrom-exporter.
//!
//! This module defines the command-line interface structure using the clap library,
//! including all flags and options.

use clap::{Parser, ValueEnum};
use std::net::IpAddr;
use std::path::PathBuf;

/// Log level options for CLI parsing
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Configuration format options for output
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

/// Main CLI arguments structure
#[derive(Parser, Debug)]
#[command(
    name = "mystrom-exporter",
    about = "Prometheus exporter for myStrom WiFi Switch smart plugs",
    long_about = "Prometheus exporter for myStrom WiFi Switch smart plugs.\n\n\
                  Each request to /collect?hostname=<device> fetches that device's \
                  status report over HTTP and returns temperature, relay state, \
                  energy and uptime readings in Prometheus text format. Use \
                  Prometheus relabeling to scrape a fleet of switches through one \
                  exporter instance.",
    author = "Michael Moll <exporter@herakles.now> - Herakles",
    version = "0.1.0",
    propagate_version = true,
    after_help = "Project: https://github.com/cansp-dev/mystrom-exporter — Support: exporter@herakles.now"
)]
pub struct Args {
    /// HTTP listen port
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// Bind to specific interface/IP
    #[arg(long)]
    pub bind: Option<IpAddr>,

    /// Log level (default: info, overrides config file)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Config file (YAML/JSON/TOML)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Disable all config file loading
    #[arg(long)]
    pub no_config: bool,

    /// Print effective merged config and exit
    #[arg(long)]
    pub show_config: bool,

    /// Output format for --show-config
    #[arg(long, value_enum, default_value = "yaml")]
    pub config_format: ConfigFormat,

    /// Validate config and exit (return code 1 on error)
    #[arg(long)]
    pub check_config: bool,

    /// Abort a device fetch after N seconds (default: wait as long as the caller does)
    #[arg(long)]
    pub collect_timeout_secs: Option<u64>,

    /// Disable /health endpoint
    #[arg(long)]
    pub disable_health: bool,
}
