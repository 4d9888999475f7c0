//! # TUI Components
//!
//! Every piece of the book log interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: Top status bar with the book count and status message
//! - `TabBar`: Row of tab titles with the active one highlighted
//! - `SummaryView`: The Home tab
//! - `GenreList`: The Genres tab
//! - `AlertDialog`: Modal message box
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `BookForm`: Entry form for a new book
//! - `History` / `HistoryState`: Scrollable list of logged books
//! - `GenrePicker` / `GenrePickerState`: Overlay list of genres
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── tab_bar.rs       (Tab titles)
//! ├── summary.rs       (Home tab)
//! ├── book_form/       (Add Book tab)
//! ├── history.rs       (History tab)
//! ├── genre_list.rs    (Genres tab)
//! ├── genre_picker.rs  (Genre overlay)
//! └── alert.rs         (Modal alert)
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

mod alert;
pub mod book_form;
pub mod genre_list;
pub mod genre_picker;
pub mod history;
pub mod summary;
mod tab_bar;
mod title_bar;

pub use alert::AlertDialog;
pub use book_form::{BookForm, FormEvent, FormFocus};
pub use genre_list::GenreList;
pub use genre_picker::{GenrePicker, GenrePickerEvent, GenrePickerState};
pub use history::{History, HistoryState};
pub use summary::SummaryView;
pub use tab_bar::TabBar;
pub use title_bar::TitleBar;

/// Create a centered rect using percentages of the outer area.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_outer() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 50, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 25);
        assert_eq!(inner.y, 10);
    }
}
