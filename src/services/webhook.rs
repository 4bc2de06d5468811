//! Inbound webhook endpoint.
//!
//! Telegram posts each update as JSON. The update runs through the same
//! dispatch tree the long-polling dispatcher uses and is acknowledged once
//! handling finishes, so a graceful shutdown never drops one half-handled.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use std::ops::ControlFlow;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::Me;
use url::Url;

use crate::bot::handlers::BoxError;
use crate::context::AppContext;

/// Route used when the public URL has no path of its own.
pub const DEFAULT_WEBHOOK_PATH: &str = "/webhook";

#[derive(Clone)]
pub struct WebhookState {
    pub bot: Bot,
    pub me: Me,
    pub ctx: AppContext,
    pub handler: UpdateHandler<BoxError>,
}

/// Local route for the public webhook URL, e.g. `/tg/hook` for
/// `https://bot.example.com/tg/hook`.
pub fn webhook_path(url: &Url) -> &str {
    match url.path() {
        "" | "/" => DEFAULT_WEBHOOK_PATH,
        path => path,
    }
}

pub fn webhook_router(path: &str, state: WebhookState) -> Router {
    Router::new()
        .route(path, post(receive_update))
        .with_state(state)
}

async fn receive_update(
    State(state): State<WebhookState>,
    Json(update): Json<Update>,
) -> StatusCode {
    let update_id = update.id;
    let deps = dptree::deps![state.bot, state.me, state.ctx, update];

    match state.handler.dispatch(deps).await {
        ControlFlow::Break(Ok(())) => {}
        ControlFlow::Break(Err(e)) => {
            tracing::error!("Failed to handle update {:?}: {}", update_id, e);
        }
        ControlFlow::Continue(_) => {
            tracing::debug!("Update {:?} matched no handler", update_id);
        }
    }

    StatusCode::OK
}
