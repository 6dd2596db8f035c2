//! HTTP Server Configuration
//!
//! Bind address and registry settings. Values come from command-line flags, fall back to
//! `USER_REGISTRY_*` environment variables, then to the defaults below. The struct is also
//! `serde`-deserializable so it can be embedded in a larger config file.

use clap::Parser;
use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Parser)]
#[command(name = "user_registry", about = "In-memory user registry served over HTTP")]
pub struct HttpServerConfig {
    /// Host to bind to (default: "127.0.0.1")
    #[arg(long, env = "USER_REGISTRY_HOST", default_value_t = default_host())]
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5000)
    #[arg(long, env = "USER_REGISTRY_PORT", default_value_t = default_port())]
    #[serde(default = "default_port")]
    pub port: u16,

    /// Capacity of the registry actor's request queue (default: 32)
    #[arg(long, env = "USER_REGISTRY_CHANNEL_CAPACITY", default_value_t = default_channel_capacity())]
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    /// Start with an empty registry instead of the three demo users
    #[arg(long)]
    #[serde(default)]
    pub no_seed: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_channel_capacity() -> usize {
    32
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            channel_capacity: default_channel_capacity(),
            no_seed: false,
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Channel capacity for the registry actor; a zero-sized queue is bumped to one.
    pub fn buffer_size(&self) -> usize {
        self.channel_capacity.max(1)
    }
}
