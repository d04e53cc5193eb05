use rand::thread_rng;
use teloxide::prelude::*;

use crate::bot::{commands, keyboard};
use crate::style;

pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let data = match q.data.as_deref() {
        Some(d) => d,
        None => return Ok(()),
    };

    // Blank grid filler buttons do nothing.
    if data == keyboard::NOOP {
        bot.answer_callback_query(&q.id).await?;
        return Ok(());
    }

    // ── Template selection ─────────────────────────────────────────
    if let Some((index, name)) = parse_selection(data) {
        let result = style::resolve_selection(name, index, &mut thread_rng());
        match result {
            Ok(text) => {
                bot.answer_callback_query(&q.id).await?;
                if let Some(msg) = q.message {
                    // A fresh message so the text is easy to copy.
                    bot.send_message(
                        msg.chat().id,
                        format!("📋 Here's your stylish text:\n\n{text}"),
                    )
                    .await?;
                }
            }
            Err(e) => {
                // Indices only ever come from keyboards we built, so an
                // out-of-range one means a stale or forged payload.
                tracing::warn!("Rejected style selection {data:?}: {e}");
                bot.answer_callback_query(&q.id)
                    .text("That style is no longer available.")
                    .await?;
            }
        }
        return Ok(());
    }

    // ── Page navigation ────────────────────────────────────────────
    if let Some((page_no, name)) = parse_page(data) {
        bot.answer_callback_query(&q.id).await?;
        let msg = match q.message {
            Some(m) => m,
            None => return Ok(()),
        };

        let page = style::render_page(name, page_no, &mut thread_rng());
        let markup = keyboard::gallery_keyboard(name, &page);
        let text = commands::gallery_text(name);

        let edited = bot
            .edit_message_text(msg.chat().id, msg.id(), text.clone())
            .reply_markup(markup.clone())
            .await;
        if let Err(e) = edited {
            tracing::warn!("Gallery edit failed, sending a new message: {e}");
            bot.send_message(msg.chat().id, text)
                .reply_markup(markup)
                .await?;
        }
        return Ok(());
    }

    tracing::debug!("Ignoring unknown callback payload: {data:?}");
    Ok(())
}

fn parse_selection(data: &str) -> Option<(usize, &str)> {
    let rest = data.strip_prefix("style:")?;
    let (index, name) = rest.split_once(':')?;
    Some((index.parse().ok()?, name))
}

fn parse_page(data: &str) -> Option<(usize, &str)> {
    let rest = data.strip_prefix("page:")?;
    let (page, name) = rest.split_once(':')?;
    Some((page.parse().ok()?, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::keyboard::{page_payload, style_payload};

    #[test]
    fn selection_payload_round_trips() {
        assert_eq!(parse_selection(&style_payload(7, "John")), Some((7, "John")));
    }

    #[test]
    fn page_payload_round_trips() {
        assert_eq!(parse_page(&page_payload(2, "John")), Some((2, "John")));
    }

    #[test]
    fn names_with_separators_survive() {
        assert_eq!(
            parse_selection(&style_payload(3, "a:b c")),
            Some((3, "a:b c"))
        );
        assert_eq!(parse_page(&page_payload(0, "x:y")), Some((0, "x:y")));
    }

    #[test]
    fn malformed_payloads_are_ignored() {
        for data in ["style:", "style:abc:x", "page:", "page:-1:x", "noop", ""] {
            assert!(parse_selection(data).is_none());
            assert!(parse_page(data).is_none());
        }
    }
}
