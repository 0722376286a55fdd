mod cli;
mod render;
mod server;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use engine_logging::engine_info;
use hn_engine::{FetchSettings, HnClient, ItemCache};

use crate::cli::Cli;
use crate::server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if !engine_logging::initialize(cli.log.into(), cli.level()) {
        eprintln!("Warning: logging is disabled");
    }

    let settings = FetchSettings {
        api_base: cli.api_base.clone(),
        ..FetchSettings::default()
    };
    // One cache for the whole process; every request reads through it.
    let cache = Arc::new(ItemCache::new());
    let client = HnClient::with_settings(settings, cache).context("building http client")?;
    let state = Arc::new(AppState {
        client,
        num_stories: cli.num_stories,
    });

    let addr = format!("0.0.0.0:{}", cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    engine_info!(
        "Serving top {} stories on http://{} (api {})",
        cli.num_stories,
        addr,
        cli.api_base
    );
    axum::serve(listener, server::router(state))
        .await
        .context("serving requests")?;
    Ok(())
}
