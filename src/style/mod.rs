//! The styling core: glyph substitution, the template gallery, and
//! pagination. Pure functions of their inputs plus an injected RNG; no
//! state is held between calls.

pub mod gallery;
pub mod glyphs;
pub mod templates;

pub use gallery::{render_page, resolve_selection, GalleryEntry, GalleryPage, PAGE_SIZE};
