//! Server configuration from command line flags and `EREMETIC_*` environment
//! variables.
//!
//! ```bash
//! eremetic --port 8000 --record-ttl-secs 3600
//! EREMETIC_PORT=8000 EREMETIC_LOG_LEVEL=debug eremetic
//! ```

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "eremetic")]
#[command(about = "Accepts container tasks and serves their status")]
#[command(version)]
pub struct Config {
    /// Address the HTTP API binds to
    #[arg(long, default_value = "127.0.0.1", env = "EREMETIC_ADDRESS")]
    pub address: IpAddr,

    /// Port the HTTP API listens on
    #[arg(short, long, default_value_t = 8000, env = "EREMETIC_PORT")]
    pub port: u16,

    /// How long a task record stays visible after it was last written
    #[arg(long, default_value_t = 3600, env = "EREMETIC_RECORD_TTL_SECS")]
    pub record_ttl_secs: u64,

    /// How often expired records are purged from memory (0 disables the sweeper)
    #[arg(long, default_value_t = 60, env = "EREMETIC_SWEEP_INTERVAL_SECS")]
    pub sweep_interval_secs: u64,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", env = "EREMETIC_LOG_LEVEL")]
    pub log_level: tracing::Level,
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }

    pub fn record_ttl(&self) -> Duration {
        Duration::from_secs(self.record_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval_secs > 0).then(|| Duration::from_secs(self.sweep_interval_secs))
    }
}
