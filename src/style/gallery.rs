use anyhow::bail;
use rand::Rng;

use super::glyphs::style_name;
use super::templates::{self, TEMPLATES};

/// Templates shown per page (a 5x5 button grid).
pub const PAGE_SIZE: usize = 25;

/// Button labels are cut at this many characters, plus an ellipsis.
pub const PREVIEW_MAX_CHARS: usize = 15;

/// One selectable preview: a truncated rendering of the template with a
/// freshly styled name, plus the template index the button addresses.
#[derive(Debug, Clone)]
pub struct GalleryEntry {
    pub label: String,
    pub template_index: usize,
}

/// A single page of the gallery. Regenerated on every render; previews
/// are re-randomized each time, so the same page never looks the same
/// twice.
#[derive(Debug, Clone)]
pub struct GalleryPage {
    pub page: usize,
    pub entries: Vec<GalleryEntry>,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Render one page of template previews for `name`. A blank name or
/// an out-of-range page yields an empty entry list rather than an
/// error; navigation flags are pure functions of the page number and
/// the gallery size.
pub fn render_page(name: &str, page: usize, rng: &mut impl Rng) -> GalleryPage {
    // Nothing to preview without a name; the gallery acts empty.
    let total = if name.trim().is_empty() {
        0
    } else {
        TEMPLATES.len()
    };
    let start = page.saturating_mul(PAGE_SIZE);
    let end = start.saturating_add(PAGE_SIZE).min(total);

    let mut entries = Vec::with_capacity(end.saturating_sub(start));
    for template_index in start..end {
        // A fresh styling per template; the final text is re-styled at
        // selection time, so previews are only indicative.
        let styled = style_name(name, rng);
        let rendered = templates::apply(TEMPLATES[template_index], &styled);
        entries.push(GalleryEntry {
            label: truncate_label(&rendered),
            template_index,
        });
    }

    GalleryPage {
        page,
        entries,
        has_prev: page > 0,
        has_next: end < total,
    }
}

/// Produce the final text for a selected template. The styler runs once
/// more here, so the result may differ from the preview that was shown.
/// An index outside the gallery is a contract violation and errors.
pub fn resolve_selection(name: &str, index: usize, rng: &mut impl Rng) -> anyhow::Result<String> {
    let Some(template) = TEMPLATES.get(index) else {
        bail!(
            "template index {index} out of range (gallery has {} entries)",
            TEMPLATES.len()
        );
    };
    let styled = style_name(name, rng);
    Ok(templates::apply(template, &styled))
}

/// Char-based truncation for button labels. This can split a combining
/// sequence mid-cluster; acceptable for preview text.
fn truncate_label(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
