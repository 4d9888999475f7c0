//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::book::{BookDraft, Genre};
use crate::core::state::App;

/// Creates a test App with default settings and an empty log.
pub fn test_app() -> App {
    App::new()
}

/// A complete, valid draft with the given title and page text.
pub fn sample_draft(title: &str, pages: &str) -> BookDraft {
    BookDraft {
        title: title.to_string(),
        author: "Test Author".to_string(),
        genre: Some(Genre::Fiction),
        num_pages: pages.to_string(),
    }
}

/// Render with a `TestBackend` and flatten the buffer into one string.
pub fn render_to_string(
    width: u16,
    height: u16,
    draw: impl FnOnce(&mut ratatui::Frame),
) -> String {
    let backend = ratatui::backend::TestBackend::new(width, height);
    let mut terminal = ratatui::Terminal::new(backend).unwrap();
    terminal.draw(draw).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}
