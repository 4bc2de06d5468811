//! Webhook variant of the bot.
//!
//! Registers the public URL with Telegram, serves the webhook route next to the
//! health endpoints, and deregisters the webhook on Ctrl-C.

use anyhow::Result;
use teloxide::prelude::*;
use tower_http::trace::TraceLayer;
use tracing::info;

use race_week_bot::bot::{handlers::schema, register_commands};
use race_week_bot::config::Config;
use race_week_bot::context::AppContext;
use race_week_bot::services::health::HealthService;
use race_week_bot::services::scheduler::PollScheduler;
use race_week_bot::services::webhook::{webhook_path, webhook_router, WebhookState};
use race_week_bot::utils::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    let webhook_url = config.webhook_url()?.clone();

    info!("Starting Race Week Bot v{} (webhook)", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - Catalog: {}, Group chat: {}, HTTP Port: {}, Webhook: {}",
        config.races_path.display(), config.group_chat_id, config.http_port, webhook_url);

    let ctx = AppContext::from_config(&config);

    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    register_commands(&bot).await;
    let me = bot.get_me().await?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    bot.set_webhook(webhook_url.clone()).await?;
    info!("Webhook registered at {}", webhook_url);

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

    let state = WebhookState {
        bot: bot.clone(),
        me,
        ctx: ctx.clone(),
        handler: schema(),
    };
    let router = webhook_router(webhook_path(&webhook_url), state)
        .merge(HealthService::new(ctx).router)
        .layer(TraceLayer::new_for_http());

    info!("Webhook server listening on port {}", config.http_port);
    if let Err(e) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Webhook server error: {}", e);
    }

    if let Err(e) = bot.delete_webhook().await {
        tracing::warn!("Failed to delete webhook: {}", e);
    } else {
        info!("Webhook deleted");
    }

    if let Err(e) = poll_scheduler.stop().await {
        tracing::warn!("Error stopping poll scheduler: {}", e);
    }

    info!("Application stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
