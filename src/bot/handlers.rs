use teloxide::prelude::*;

/// Warn group members when a message is edited. Private chats are left
/// alone; people edit their own typos there all the time.
pub async fn handle_edited_message(
    bot: Bot,
    msg: Message,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if !msg.chat.is_group() && !msg.chat.is_supergroup() {
        return Ok(());
    }

    let text = match msg.text() {
        Some(t) => t,
        None => return Ok(()),
    };
    let editor = msg
        .from
        .as_ref()
        .map(|u| u.first_name.as_str())
        .unwrap_or("someone");
    let edited_at = msg
        .edit_date()
        .map(|d| d.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string());

    bot.send_message(
        msg.chat.id,
        format!(
            "⚠️ Warning: Message edited by {editor}\n\
             New text: {text}\n\
             Edited at: {edited_at}"
        ),
    )
    .await?;

    Ok(())
}
