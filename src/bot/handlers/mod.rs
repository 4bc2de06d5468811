pub mod callback;
pub mod message;

use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::bot::commands::Command;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = Result<(), BoxError>;

/// The dispatch tree shared by the long-polling dispatcher and the webhook.
///
/// Endpoints expect `Bot`, `Me`, `Update` and `AppContext` in the dependency map.
pub fn schema() -> UpdateHandler<BoxError> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(message::command_handler),
        )
        .branch(Update::filter_callback_query().endpoint(callback::callback_handler))
}

/// Display name and id of whoever sent `msg`, for logging.
pub fn sender_of(msg: &Message) -> (String, i64) {
    match msg.from() {
        Some(user) => (
            user.username.clone().unwrap_or_else(|| user.first_name.clone()),
            user.id.0 as i64,
        ),
        None => ("unknown".to_string(), 0),
    }
}
