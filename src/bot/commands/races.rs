use teloxide::prelude::*;

use crate::bot::handlers::{sender_of, HandlerResult};
use crate::bot::keyboards::next_race_keyboard;
use crate::context::AppContext;
use crate::races::format::START_PROMPT;
use crate::utils::datetime::today_utc;
use crate::utils::logging::{log_command_start, log_command_success};

pub async fn handle_start(bot: Bot, msg: Message) -> HandlerResult {
    let (user, user_id) = sender_of(&msg);
    log_command_start("/start", &user, user_id, msg.chat.id.0);

    bot.send_message(msg.chat.id, START_PROMPT)
        .reply_markup(next_race_keyboard())
        .await?;

    log_command_success("/start", &user, user_id, msg.chat.id.0, None);
    Ok(())
}

pub async fn handle_next(bot: Bot, msg: Message, ctx: &AppContext) -> HandlerResult {
    let (user, user_id) = sender_of(&msg);
    log_command_start("/next", &user, user_id, msg.chat.id.0);

    let text = ctx.next_race_message(today_utc());
    bot.send_message(msg.chat.id, text).await?;

    log_command_success("/next", &user, user_id, msg.chat.id.0, None);
    Ok(())
}
