use clap::Parser;
use std::net::SocketAddr;

/// Default listen address: all interfaces, port 9595.
pub const DEFAULT_BIND: &str = "0.0.0.0:9595";

/// Server configuration, read from command-line flags or environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "project-registry")]
#[command(about = "In-memory project registry over HTTP")]
pub struct ServerConfig {
    /// HTTP bind address
    #[arg(long, env = "PROJECTS_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Log level or tracing filter directive (overridden by RUST_LOG)
    #[arg(long, env = "PROJECTS_LOG", default_value = "info")]
    pub log_level: String,
}
