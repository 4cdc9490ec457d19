use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use sweeper_server::api::Api;
use sweeper_server::auth::StaticTokenVerifier;
use sweeper_server::config::{Args, ServerConfig};
use sweeper_server::http;
use sweeper_server::service::GameService;
use sweeper_server::store::MemoryStore;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let config = ServerConfig::resolve(&args)?;
    let verifier = StaticTokenVerifier::new(&config.tokens);
    if verifier.is_empty() {
        log::warn!("No tokens configured; every game endpoint will answer 401");
    }

    let service = GameService::new(Arc::new(MemoryStore::new()), config.limits);
    let app = http::app(Arc::new(Api::new(service, Arc::new(verifier))));

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Could not bind {}", config.bind))?;

    http::serve(listener, app, async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            log::error!("Could not listen for Ctrl-C: {err}");
            std::future::pending::<()>().await;
        }
        log::info!("Shutting down");
    })
    .await?;

    Ok(())
}
