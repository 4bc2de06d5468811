use teloxide::prelude::*;

use crate::bot::handlers::HandlerResult;
use crate::bot::keyboards::NEXT_RACE_CALLBACK;
use crate::context::AppContext;
use crate::utils::datetime::today_utc;
use crate::utils::logging::{log_command_error, log_command_start, log_command_success};

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    ctx: AppContext,
) -> HandlerResult {
    let user_id = q.from.id.0 as i64;
    let username = q.from.username.clone().unwrap_or_else(|| q.from.first_name.clone());
    let chat_id = q.message.as_ref().map(|m| m.chat.id.0).unwrap_or(0);

    match q.data.as_deref() {
        Some(NEXT_RACE_CALLBACK) => {
            log_command_start(NEXT_RACE_CALLBACK, &username, user_id, chat_id);
            bot.answer_callback_query(q.id.clone()).await?;

            let text = ctx.next_race_message(today_utc());

            // The announcement replaces the button prompt in place.
            if let Some(message) = q.message.as_ref() {
                match bot.edit_message_text(message.chat.id, message.id, text).await {
                    Ok(_) => log_command_success(NEXT_RACE_CALLBACK, &username, user_id, chat_id, None),
                    Err(e) => log_command_error(NEXT_RACE_CALLBACK, &username, user_id, chat_id, &e.to_string()),
                }
            }
        }
        data => {
            tracing::warn!(
                "Unknown callback {:?} from user {} ({}) in chat {}",
                data, username, user_id, chat_id
            );
            bot.answer_callback_query(q.id.clone())
                .text("Невідома дія")
                .await?;
        }
    }

    Ok(())
}
