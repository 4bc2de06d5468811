use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::races::format::NEXT_RACE_BUTTON;

/// Callback data carried by the "show next race" button.
pub const NEXT_RACE_CALLBACK: &str = "next_race";

pub fn next_race_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new([[InlineKeyboardButton::callback(
        NEXT_RACE_BUTTON,
        NEXT_RACE_CALLBACK,
    )]])
}
