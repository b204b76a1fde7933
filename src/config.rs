//! Runtime configuration from the environment (and `.env`, if present).

use std::net::SocketAddr;

use crate::error::{DepthChartError, Result};

pub const BIND_ADDR_ENV_VAR: &str = "DEPTH_CHART_BIND_ADDR";
pub const LOG_ENV_VAR: &str = "DEPTH_CHART_LOG";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_LOG_DIRECTIVE: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub log_directive: String,
}

impl Config {
    /// Load configuration, falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let bind_addr = match std::env::var(BIND_ADDR_ENV_VAR) {
            Ok(value) => parse_bind_addr(&value)?,
            Err(_) => parse_bind_addr(DEFAULT_BIND_ADDR)?,
        };
        let log_directive =
            std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVE.to_string());

        Ok(Self {
            bind_addr,
            log_directive,
        })
    }

    /// Apply a `--bind` override from the command line.
    pub fn with_bind_override(mut self, bind: Option<&str>) -> Result<Self> {
        if let Some(bind) = bind {
            self.bind_addr = parse_bind_addr(bind)?;
        }
        Ok(self)
    }
}

pub fn parse_bind_addr(value: &str) -> Result<SocketAddr> {
    value.trim().parse().map_err(|_| DepthChartError::Config {
        message: format!("invalid bind address {:?}", value),
    })
}
