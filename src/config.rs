//! Server configuration
//!
//! Parsed from the command line, falling back to environment variables (a
//! `.env` file is loaded first by the binary).
//!
//! | Flag      | Environment      | Default        |
//! |-----------|------------------|----------------|
//! | `--addr`  | `CHESS_API_ADDR` | `0.0.0.0:3000` |
//! | `--log`   | `CHESS_API_LOG`  | `RUST_LOG`, then `info` |

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Command line and environment configuration for the chess API server
#[derive(Parser, Debug, Clone)]
#[command(name = "chess_api", version, about = "HTTP API for a two-player chess game")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "CHESS_API_ADDR", default_value = "0.0.0.0:3000")]
    pub addr: SocketAddr,

    /// Log filter directives, e.g. `chess_api=debug,chess_rules=debug`
    #[arg(long, env = "CHESS_API_LOG")]
    pub log: Option<String>,
}

impl Config {
    /// Tracing filter from `--log`, else `RUST_LOG`, else `info`
    pub fn env_filter(&self) -> EnvFilter {
        match &self.log {
            Some(directives) => EnvFilter::new(directives),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        }
    }
}
