//! # Race Week Bot Main Entry Point
//!
//! Long-polling variant. It initializes logging, loads configuration,
//! starts the weekly poll scheduler and the health server, and runs the
//! Telegram dispatcher until Ctrl-C.

use anyhow::Result;
use teloxide::prelude::*;
use tower_http::trace::TraceLayer;
use tracing::info;

use race_week_bot::bot::{handlers::schema, register_commands};
use race_week_bot::config::Config;
use race_week_bot::context::AppContext;
use race_week_bot::services::health::HealthService;
use race_week_bot::services::scheduler::PollScheduler;
use race_week_bot::utils::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Race Week Bot v{} (long polling)", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - Catalog: {}, Group chat: {}, HTTP Port: {}",
        config.races_path.display(), config.group_chat_id, config.http_port);

    let ctx = AppContext::from_config(&config);

    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    register_commands(&bot).await;

    info!("Initializing poll scheduler...");
    let mut poll_scheduler = match PollScheduler::new(bot.clone(), ctx.clone(), config.poll_rule).await {
        Ok(scheduler) => scheduler,
        Err(e) => {
            tracing::error!("Failed to create poll scheduler: {}", e);
            return Err(anyhow::anyhow!("Failed to create poll scheduler: {}", e));
        }
    };

    if let Err(e) = poll_scheduler.start().await {
        tracing::error!("Failed to start poll scheduler: {}", e);
    }

    let health_service = HealthService::new(ctx.clone());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, schema())
            .dependencies(dptree::deps![ctx])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        let router = health_service.router.layer(TraceLayer::new_for_http());
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    if let Err(e) = poll_scheduler.stop().await {
        tracing::warn!("Error stopping poll scheduler: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
