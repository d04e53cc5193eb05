use std::sync::Arc;

use rand::thread_rng;
use teloxide::macros::BotCommands;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands as _;

use crate::bot::{keyboard, AppState};
use crate::style;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum BotCommand {
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Generate stylish versions of a name")]
    Style(String),
    #[command(description = "Show help")]
    Help,
}

pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: BotCommand,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match cmd {
        BotCommand::Start => {
            bot.send_message(
                msg.chat.id,
                "👋 Welcome to the Stylish Name Bot! 🎨\n\n\
                 Use /style <your name> to generate a stylish version of your name.\n\
                 Example: /style John",
            )
            .await?;
        }

        BotCommand::Style(raw) => {
            let name = raw.trim();
            if name.is_empty() {
                bot.send_message(
                    msg.chat.id,
                    "Please provide a name to style. Example: /style John",
                )
                .await?;
                return Ok(());
            }
            if name.chars().count() > state.config.max_name_chars {
                bot.send_message(
                    msg.chat.id,
                    format!(
                        "That name is too long, up to {} characters please.",
                        state.config.max_name_chars
                    ),
                )
                .await?;
                return Ok(());
            }
            // The name rides inside every button's callback payload,
            // which Telegram caps at 64 bytes.
            if !keyboard::name_fits_callback(name) {
                bot.send_message(
                    msg.chat.id,
                    "That name doesn't fit in the style buttons, a shorter one please.",
                )
                .await?;
                return Ok(());
            }

            let page = style::render_page(name, 0, &mut thread_rng());
            let markup = keyboard::gallery_keyboard(name, &page);
            bot.send_message(msg.chat.id, gallery_text(name))
                .reply_markup(markup)
                .await?;
        }

        BotCommand::Help => {
            bot.send_message(msg.chat.id, BotCommand::descriptions().to_string())
                .await?;
        }
    }

    Ok(())
}

/// Prompt text shown above the gallery keyboard; page navigation edits
/// the keyboard under this same text.
pub fn gallery_text(name: &str) -> String {
    format!("✨ Your name: {name}\n\nChoose a style from the buttons below:")
}
