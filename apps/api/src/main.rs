mod analysis;
mod config;
mod errors;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::fetcher::{HttpResumeFetcher, FETCH_TIMEOUT};
use crate::analysis::skills::SkillVocabulary;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analysis API v{}", env!("CARGO_PKG_VERSION"));

    let fetcher = HttpResumeFetcher::new()?;
    info!("HTTP fetcher initialized (timeout: {:?})", FETCH_TIMEOUT);

    let vocabulary = SkillVocabulary::default();
    info!("Skill vocabulary loaded ({} terms)", vocabulary.terms().len());

    let state = AppState {
        fetcher: Arc::new(fetcher),
        vocabulary: Arc::new(vocabulary),
    };

    let app = build_router(state);

    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
