//! Command-line and environment configuration for the server binary.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", about = "In-memory todo service over HTTP")]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[arg(long, env = "TODO_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
