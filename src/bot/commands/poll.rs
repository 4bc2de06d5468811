use teloxide::prelude::*;

use crate::bot::handlers::{sender_of, HandlerResult};
use crate::context::AppContext;
use crate::races::format::NO_RACE_THIS_WEEK;
use crate::services::poll::{send_weekly_poll, PollOutcome};
use crate::utils::datetime::today_utc;
use crate::utils::logging::{log_command_error, log_command_start, log_command_success, log_poll_sent};

/// Text to send back to the chat that issued `/poll`, if any.
///
/// Only a week without a race gets a reply. A sent poll speaks for itself and
/// delivery failures are logged, never reported to the caller.
pub fn manual_poll_reply(result: &anyhow::Result<PollOutcome>) -> Option<&'static str> {
    match result {
        Ok(PollOutcome::NoRaceThisWeek) => Some(NO_RACE_THIS_WEEK),
        Ok(PollOutcome::Sent { .. }) | Err(_) => None,
    }
}

/// Manual trigger of the weekly poll.
///
/// The poll goes to the configured group, not necessarily the calling chat.
pub async fn handle_poll(bot: Bot, msg: Message, ctx: &AppContext) -> HandlerResult {
    let (user, user_id) = sender_of(&msg);
    let chat_id = msg.chat.id.0;
    log_command_start("/poll", &user, user_id, chat_id);

    let result = send_weekly_poll(ctx, &bot, today_utc()).await;

    match &result {
        Ok(PollOutcome::Sent { race }) => {
            log_poll_sent(race, ctx.group_chat_id.0);
            log_command_success("/poll", &user, user_id, chat_id, Some(race.as_str()));
        }
        Ok(PollOutcome::NoRaceThisWeek) => {}
        Err(e) => log_command_error("/poll", &user, user_id, chat_id, &e.to_string()),
    }

    if let Some(reply) = manual_poll_reply(&result) {
        match bot.send_message(msg.chat.id, reply).await {
            Ok(_) => log_command_success("/poll", &user, user_id, chat_id, Some("no race this week")),
            Err(e) => log_command_error("/poll", &user, user_id, chat_id, &e.to_string()),
        }
    }

    Ok(())
}
