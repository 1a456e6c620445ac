mod api;
mod chart;
mod middleware;
mod pages;
mod search;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tweetmood_analyzer::Analyzer;
use tweetmood_timeline::TimelineClient;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = tweetmood_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(?config, "configuration loaded");

    let analyzer = Analyzer::from_paths(&config.positive_words_path, &config.negative_words_path)?;
    let timeline = TimelineClient::with_base_url(
        config.require_twitter_bearer_token()?,
        config.request_timeout_secs,
        &config.twitter_api_base_url,
    )?;

    let app = build_app(AppState {
        analyzer: Arc::new(analyzer),
        timeline: Arc::new(timeline),
        timeline_count: config.timeline_count,
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
