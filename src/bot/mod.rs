pub mod callbacks;
pub mod commands;
pub mod handlers;
pub mod keyboard;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::dptree;
use teloxide::prelude::*;

use crate::config::AppConfig;

/// Shared application state, accessible from all handlers.
pub struct AppState {
    pub config: AppConfig,
}

/// Build the teloxide update handler tree.
pub fn build_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync>> {
    let command_handler = Update::filter_message()
        .filter_command::<commands::BotCommand>()
        .endpoint(commands::handle_command);

    let callback_handler = Update::filter_callback_query()
        .endpoint(callbacks::handle_callback);

    let edited_handler = Update::filter_edited_message()
        .endpoint(handlers::handle_edited_message);

    dptree::entry()
        .branch(command_handler)
        .branch(callback_handler)
        .branch(edited_handler)
}
