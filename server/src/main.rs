use anyhow::Result;
use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use tender_core::SessionConfig;
use tender_server::build_app;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Host to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Number of offers returned per search
    #[arg(long, default_value_t = 6)]
    top: usize,
    /// Number of past searches kept for /history
    #[arg(long, default_value_t = 50)]
    history: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let app: Router = build_app(SessionConfig { top_n: args.top, history_limit: args.history });

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
