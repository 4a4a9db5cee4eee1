use crate::app::{AppController, RankingDispatch};
use crate::config::AppConfig;
use crate::domain::ListingStore;
use crate::ranking::OpenAiRanker;
use crate::router::{respond, AppContext};
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod domain;
mod errors;
mod ranking;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rental_buddy=info")),
        )
        .init();

    // 1️⃣ Configuration from the environment
    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // 2️⃣ Ranking client; a missing key only fails individual cycles
    if config.ranking.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set, ranking cycles will fail and keep catalog order");
    }
    let ranker = match OpenAiRanker::new(config.ranking.clone()) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "ranking client init failed");
            std::process::exit(1);
        }
    };

    // 3️⃣ Catalog, loaded once
    let store = ListingStore::load(&config.listings_source);
    let controller = AppController::new(
        store,
        Arc::new(ranker),
        config.ranking.max_tokens,
        RankingDispatch::Background,
    );
    controller.refresh_ranking();

    // 4️⃣ Serve
    let addr = config.bind_addr;
    let server = Server::bind(&addr).max_workers(config.max_workers);
    let ctx = AppContext { controller, config };

    tracing::info!("Starting server at http://{addr}");
    if let Err(e) = server.serve(move |req, _info| respond(req, &ctx)) {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("Server shut down cleanly.");
}
