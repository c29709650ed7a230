use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use todo_core::InmemTodoService;
use todo_server::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)))
        .with(fmt::layer().with_target(true))
        .init();

    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");

    let service = Arc::new(InmemTodoService::new());
    todo_server::run(listener, service).await?;
    Ok(())
}
