//! # BookForm Component
//!
//! The "Add Book" screen: three text fields, a genre selector and a button.
//!
//! ## Responsibilities
//!
//! - Own the transient field values while a book is being composed
//! - Move focus between inputs (Tab / Shift+Tab / Up / Down)
//! - Ask the parent to open the genre picker (Enter on the selector)
//! - Emit a `BookDraft` on submit (Enter on the button, or Ctrl+S anywhere)
//!
//! ## State Management
//!
//! The form never validates or clears itself on submit. The parent dispatches
//! the draft to the core and calls [`BookForm::reset`] only when the book was
//! actually logged, so a rejected draft keeps everything the user typed.

mod text_field;

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::core::book::{BookDraft, Genre};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub use text_field::{FieldKind, TextField};

/// Maroon, the accent color of the add button.
const BUTTON_COLOR: Color = Color::Rgb(0x80, 0x00, 0x00);

/// Which input has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Title,
    Author,
    Pages,
    Genre,
    AddButton,
}

impl FormFocus {
    const ORDER: [FormFocus; 5] = [
        FormFocus::Title,
        FormFocus::Author,
        FormFocus::Pages,
        FormFocus::Genre,
        FormFocus::AddButton,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// High-level events emitted by the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// The user asked to add the book described by the draft.
    Submit(BookDraft),
    /// The genre selector was activated.
    OpenGenrePicker,
    /// Field content or focus changed.
    Changed,
}

pub struct BookForm {
    pub title: TextField,
    pub author: TextField,
    pub pages: TextField,
    pub genre: Option<Genre>,
    pub focus: FormFocus,
}

impl Default for BookForm {
    fn default() -> Self {
        Self::new()
    }
}

impl BookForm {
    pub fn new() -> Self {
        Self {
            title: TextField::new("Title", FieldKind::Text),
            author: TextField::new("Author", FieldKind::Text),
            pages: TextField::new("Number of Pages", FieldKind::Digits),
            genre: None,
            focus: FormFocus::Title,
        }
    }

    /// Snapshot of the current values.
    pub fn draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.value().to_string(),
            author: self.author.value().to_string(),
            genre: self.genre,
            num_pages: self.pages.value().to_string(),
        }
    }

    /// Clear every input and return focus to the title.
    pub fn reset(&mut self) {
        self.title.clear();
        self.author.clear();
        self.pages.clear();
        self.genre = None;
        self.focus = FormFocus::Title;
    }

    pub fn set_genre(&mut self, genre: Genre) {
        debug!("Selected genre: {}", genre);
        self.genre = Some(genre);
    }

    fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            FormFocus::Title => Some(&mut self.title),
            FormFocus::Author => Some(&mut self.author),
            FormFocus::Pages => Some(&mut self.pages),
            FormFocus::Genre | FormFocus::AddButton => None,
        }
    }

    fn render_genre_selector(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == FormFocus::Genre;
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let (text, style) = match self.genre {
            Some(genre) => (genre.label(), Style::default().fg(Color::White)),
            None => (
                "Select Genre",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("Genre")
            .title_bottom(if focused { " Enter to choose " } else { "" })
            .padding(Padding::horizontal(1));
        frame.render_widget(Paragraph::new(format!("{text} ▾")).style(style).block(block), area);
    }

    fn render_button(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == FormFocus::AddButton;
        let style = if focused {
            Style::default()
                .fg(Color::White)
                .bg(BUTTON_COLOR)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).bg(BUTTON_COLOR)
        };
        let label = if focused { "▶ Add Book ◀" } else { "Add Book" };
        let [button_area] = Layout::horizontal([Constraint::Length(18)])
            .flex(Flex::End)
            .areas(area);
        let button = Paragraph::new(format!("\n{label}"))
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(button, button_area);
    }
}

impl Component for BookForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [
            title_area,
            author_area,
            pages_area,
            genre_area,
            selected_area,
            button_area,
            _,
        ] = Layout::vertical([
            Length(3),
            Length(3),
            Length(3),
            Length(3),
            Length(1),
            Length(3),
            Min(0),
        ])
        .spacing(1)
        .areas(area);

        self.title
            .render(frame, title_area, self.focus == FormFocus::Title);
        self.author
            .render(frame, author_area, self.focus == FormFocus::Author);
        self.pages
            .render(frame, pages_area, self.focus == FormFocus::Pages);
        self.render_genre_selector(frame, genre_area);

        if let Some(genre) = self.genre {
            let selected = Paragraph::new(format!("Selected Genre: {genre}"))
                .style(Style::default().fg(Color::White));
            frame.render_widget(selected, selected_area);
        }

        self.render_button(frame, button_area);
    }
}

impl EventHandler for BookForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::SubmitForm => Some(FormEvent::Submit(self.draft())),
            TuiEvent::FocusNext | TuiEvent::CursorDown => {
                self.focus = self.focus.next();
                Some(FormEvent::Changed)
            }
            TuiEvent::FocusPrev | TuiEvent::CursorUp => {
                self.focus = self.focus.prev();
                Some(FormEvent::Changed)
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ')
                if matches!(self.focus, FormFocus::Genre | FormFocus::AddButton) =>
            {
                if self.focus == FormFocus::Genre {
                    Some(FormEvent::OpenGenrePicker)
                } else {
                    Some(FormEvent::Submit(self.draft()))
                }
            }
            // Enter in a text field moves on, like a mobile keyboard's "next"
            TuiEvent::Submit => {
                self.focus = self.focus.next();
                Some(FormEvent::Changed)
            }
            _ => self
                .focused_field()
                .and_then(|field| field.handle_event(event).then_some(FormEvent::Changed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_string;

    fn type_text(form: &mut BookForm, text: &str) {
        for c in text.chars() {
            form.handle_event(&TuiEvent::InputChar(c));
        }
    }

    fn filled_form() -> BookForm {
        let mut form = BookForm::new();
        type_text(&mut form, "Dune");
        form.handle_event(&TuiEvent::FocusNext);
        type_text(&mut form, "Herbert");
        form.handle_event(&TuiEvent::FocusNext);
        type_text(&mut form, "412");
        form.set_genre(Genre::ScienceFiction);
        form
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = BookForm::new();
        assert_eq!(form.draft(), BookDraft::default());
        assert_eq!(form.focus, FormFocus::Title);
    }

    #[test]
    fn test_focus_cycles_in_form_order() {
        let mut focus = FormFocus::Title;
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(focus);
            focus = focus.next();
        }
        assert_eq!(seen, FormFocus::ORDER.to_vec());
        assert_eq!(focus, FormFocus::Title);
        assert_eq!(FormFocus::Title.prev(), FormFocus::AddButton);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let form = filled_form();
        assert_eq!(
            form.draft(),
            BookDraft {
                title: "Dune".to_string(),
                author: "Herbert".to_string(),
                genre: Some(Genre::ScienceFiction),
                num_pages: "412".to_string(),
            }
        );
    }

    #[test]
    fn test_enter_in_text_field_advances_focus() {
        let mut form = BookForm::new();
        assert_eq!(form.handle_event(&TuiEvent::Submit), Some(FormEvent::Changed));
        assert_eq!(form.focus, FormFocus::Author);
    }

    #[test]
    fn test_enter_on_genre_opens_picker() {
        let mut form = BookForm::new();
        form.focus = FormFocus::Genre;
        assert_eq!(
            form.handle_event(&TuiEvent::Submit),
            Some(FormEvent::OpenGenrePicker)
        );
    }

    #[test]
    fn test_button_submits_draft_without_clearing() {
        let mut form = filled_form();
        form.focus = FormFocus::AddButton;
        let event = form.handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(FormEvent::Submit(form.draft())));
        assert_eq!(form.title.value(), "Dune");
    }

    #[test]
    fn test_ctrl_s_submits_from_any_field() {
        let mut form = filled_form();
        form.focus = FormFocus::Author;
        assert!(matches!(
            form.handle_event(&TuiEvent::SubmitForm),
            Some(FormEvent::Submit(_))
        ));
    }

    #[test]
    fn test_space_is_text_in_fields() {
        let mut form = BookForm::new();
        type_text(&mut form, "The Hobbit");
        assert_eq!(form.title.value(), "The Hobbit");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled_form();
        form.focus = FormFocus::AddButton;
        form.reset();
        assert_eq!(form.draft(), BookDraft::default());
        assert_eq!(form.focus, FormFocus::Title);
    }

    #[test]
    fn test_render_shows_selected_genre() {
        let mut form = filled_form();
        let text = render_to_string(60, 24, |f| form.render(f, f.area()));
        assert!(text.contains("Selected Genre: Science Fiction"));
        assert!(text.contains("Add Book"));
        assert!(text.contains("Herbert"));
    }

    #[test]
    fn test_render_placeholders_when_empty() {
        let mut form = BookForm::new();
        let text = render_to_string(60, 24, |f| form.render(f, f.area()));
        assert!(text.contains("Select Genre"));
        assert!(text.contains("Number of Pages"));
        assert!(!text.contains("Selected Genre:"));
    }
}
