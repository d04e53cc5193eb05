use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::style::templates::TEMPLATES;
use crate::style::GalleryPage;

pub const GRID_ROWS: usize = 5;
pub const GRID_COLS: usize = 5;

/// Telegram rejects callback payloads over 64 bytes.
pub const MAX_CALLBACK_BYTES: usize = 64;

/// Callback payload for blank filler buttons.
pub const NOOP: &str = "noop";

/// Payload for selecting a template. The name is the last field so
/// names containing ':' survive the round trip.
pub fn style_payload(index: usize, name: &str) -> String {
    format!("style:{index}:{name}")
}

/// Payload for navigating to another page.
pub fn page_payload(page: usize, name: &str) -> String {
    format!("page:{page}:{name}")
}

/// Whether every payload built for `name` fits Telegram's byte cap.
/// The selection payload with the highest template index is the
/// longest one a keyboard can carry, so checking it covers the rest.
pub fn name_fits_callback(name: &str) -> bool {
    style_payload(TEMPLATES.len() - 1, name).len() <= MAX_CALLBACK_BYTES
}

/// Lay a gallery page out as a 5x5 button grid. Short pages are padded
/// with blank no-op buttons so the grid keeps its shape, and a
/// navigation row is appended when there is anywhere to go.
pub fn gallery_keyboard(name: &str, page: &GalleryPage) -> InlineKeyboardMarkup {
    let mut rows = Vec::with_capacity(GRID_ROWS + 1);

    for r in 0..GRID_ROWS {
        let mut row = Vec::with_capacity(GRID_COLS);
        for c in 0..GRID_COLS {
            let slot = r * GRID_COLS + c;
            let button = match page.entries.get(slot) {
                Some(entry) => InlineKeyboardButton::callback(
                    entry.label.clone(),
                    style_payload(entry.template_index, name),
                ),
                None => InlineKeyboardButton::callback(" ", NOOP),
            };
            row.push(button);
        }
        rows.push(row);
    }

    let mut nav = Vec::new();
    if page.has_prev {
        nav.push(InlineKeyboardButton::callback(
            "⬅️ Previous",
            page_payload(page.page - 1, name),
        ));
    }
    if page.has_next {
        nav.push(InlineKeyboardButton::callback(
            "Next ➡️",
            page_payload(page.page + 1, name),
        ));
    }
    if !nav.is_empty() {
        rows.push(nav);
    }

    InlineKeyboardMarkup::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::render_page;
    use crate::style::templates::TEMPLATES;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use teloxide::types::InlineKeyboardButtonKind;

    fn payload(button: &InlineKeyboardButton) -> &str {
        match &button.kind {
            InlineKeyboardButtonKind::CallbackData(d) => d,
            other => panic!("unexpected button kind: {other:?}"),
        }
    }

    #[test]
    fn full_page_yields_a_5x5_grid_plus_nav() {
        let mut rng = StdRng::seed_from_u64(1);
        let page = render_page("abc", 0, &mut rng);
        let kb = gallery_keyboard("abc", &page);

        assert_eq!(kb.inline_keyboard.len(), GRID_ROWS + 1);
        for row in &kb.inline_keyboard[..GRID_ROWS] {
            assert_eq!(row.len(), GRID_COLS);
        }
        // Page 0: next only.
        let nav = kb.inline_keyboard.last().unwrap();
        assert_eq!(nav.len(), 1);
        assert_eq!(payload(&nav[0]), "page:1:abc");
    }

    #[test]
    fn short_page_is_padded_with_noop_buttons() {
        let last = (TEMPLATES.len() - 1) / crate::style::PAGE_SIZE;
        let mut rng = StdRng::seed_from_u64(1);
        let page = render_page("abc", last, &mut rng);
        assert!(page.entries.len() < GRID_ROWS * GRID_COLS);

        let kb = gallery_keyboard("abc", &page);
        let grid: Vec<&InlineKeyboardButton> = kb.inline_keyboard[..GRID_ROWS]
            .iter()
            .flatten()
            .collect();
        assert_eq!(grid.len(), GRID_ROWS * GRID_COLS);

        let fillers = grid.iter().filter(|b| payload(b) == NOOP).count();
        assert_eq!(fillers, GRID_ROWS * GRID_COLS - page.entries.len());

        // Last page: previous only.
        let nav = kb.inline_keyboard.last().unwrap();
        assert_eq!(nav.len(), 1);
        assert_eq!(payload(&nav[0]), format!("page:{}:abc", last - 1));
    }

    #[test]
    fn middle_page_offers_both_directions() {
        let mut rng = StdRng::seed_from_u64(1);
        let page = render_page("abc", 1, &mut rng);
        let kb = gallery_keyboard("abc", &page);
        let nav = kb.inline_keyboard.last().unwrap();
        assert_eq!(nav.len(), 2);
        assert_eq!(payload(&nav[0]), "page:0:abc");
        assert_eq!(payload(&nav[1]), "page:2:abc");
    }

    #[test]
    fn callback_limit_counts_bytes_not_chars() {
        let ascii = "a".repeat(32);
        assert!(name_fits_callback(&ascii));

        // 32 Cyrillic chars are 64 bytes; with the payload prefix they
        // blow the cap even though the char count looks fine.
        let cyrillic = "ж".repeat(32);
        assert_eq!(cyrillic.chars().count(), 32);
        assert!(!name_fits_callback(&cyrillic));

        let longest = style_payload(TEMPLATES.len() - 1, &ascii);
        assert!(longest.len() <= MAX_CALLBACK_BYTES);
    }

    #[test]
    fn entry_buttons_address_their_template_index() {
        let mut rng = StdRng::seed_from_u64(1);
        let page = render_page("jo", 0, &mut rng);
        let kb = gallery_keyboard("jo", &page);
        assert_eq!(payload(&kb.inline_keyboard[0][0]), "style:0:jo");
        assert_eq!(payload(&kb.inline_keyboard[1][0]), "style:5:jo");
    }
}
