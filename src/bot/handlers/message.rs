use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::{poll, races, Command};
use crate::bot::handlers::HandlerResult;
use crate::context::AppContext;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: AppContext,
) -> HandlerResult {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
        }
        Command::Start => races::handle_start(bot, msg).await?,
        Command::Next => races::handle_next(bot, msg, &ctx).await?,
        Command::Poll => poll::handle_poll(bot, msg, &ctx).await?,
    }
    Ok(())
}
