pub mod commands;
pub mod handlers;
pub mod keyboards;

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::Command;
use crate::utils::logging::{log_system_event, log_system_warning};

/// Publishes the command list shown in Telegram's menu. Failure is not fatal.
pub async fn register_commands(bot: &Bot) {
    match bot.set_my_commands(Command::bot_commands()).await {
        Ok(_) => log_system_event("Bot commands registered", None),
        Err(e) => log_system_warning("Failed to register bot commands", &e.to_string()),
    }
}
