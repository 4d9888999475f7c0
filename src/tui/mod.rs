//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! [`dispatch`] decides who sees an event, in priority order:
//!
//! 1. Ctrl+C quits, whatever is on screen.
//! 2. An open alert swallows everything except Enter / Esc.
//! 3. An open genre picker gets every event.
//! 4. Global tab keys (F1-F4, Ctrl+Left / Ctrl+Right).
//! 5. The active tab. The form consumes plain keys as text; the other tabs
//!    use them for navigation and quitting.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an event (including
//! terminal resize) and otherwise sleeps in `poll`.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::StartTab;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    BookForm, FormEvent, GenrePickerEvent, GenrePickerState, HistoryState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// The four top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    AddBook,
    History,
    Genres,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::AddBook, Tab::History, Tab::Genres];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::AddBook => "Add Book",
            Tab::History => "History",
            Tab::Genres => "Genres",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::AddBook => 1,
            Tab::History => 2,
            Tab::Genres => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl From<StartTab> for Tab {
    fn from(tab: StartTab) -> Self {
        match tab {
            StartTab::Home => Tab::Home,
            StartTab::Add => Tab::AddBook,
            StartTab::History => Tab::History,
            StartTab::Genres => Tab::Genres,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub active_tab: Tab,
    // Persistent component states
    pub form: BookForm,
    pub history: HistoryState,
    // Genre picker overlay (None = hidden)
    pub genre_picker: Option<GenrePickerState>,
}

impl TuiState {
    pub fn new(start_tab: Tab) -> Self {
        Self {
            active_tab: start_tab,
            form: BookForm::new(),
            history: HistoryState::new(),
            genre_picker: None,
        }
    }

    fn select_tab(&mut self, tab: Tab) {
        if tab != self.active_tab {
            debug!("Switching to tab {}", tab.title());
            self.active_tab = tab;
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(Tab::from(config.start_tab));

    let mut terminal = ratatui::try_init()?;
    let result = TerminalModeGuard::new().and_then(|_guard| {
        let mut needs_redraw = true; // Force first frame

        loop {
            if needs_redraw {
                terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
                needs_redraw = false;
            }

            let first_event = poll_event_timeout(IDLE_POLL);
            if first_event.is_some() {
                needs_redraw = true;
            }

            // Process first event + drain everything pending before the next draw
            let mut should_quit = false;
            for event in first_event
                .into_iter()
                .chain(std::iter::from_fn(poll_event_immediate))
            {
                if dispatch(&mut app, &mut tui, event) == Effect::Quit {
                    should_quit = true;
                    break;
                }
            }

            if should_quit {
                return Ok(());
            }
        }
    });
    ratatui::restore();
    info!("Terminal restored");
    result
}

/// Route one event through overlays, tabs and the reducer.
pub fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        // Ctrl+C always quits, even under an overlay
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        // Resize just needs a redraw
        TuiEvent::Resize => return Effect::None,
        _ => {}
    }

    if app.alert.is_some() {
        return match event {
            TuiEvent::Submit | TuiEvent::Escape => update(app, Action::DismissAlert),
            _ => Effect::None,
        };
    }

    if let Some(picker) = tui.genre_picker.as_mut() {
        match picker.handle_event(&event) {
            Some(GenrePickerEvent::Select(genre)) => {
                tui.form.set_genre(genre);
                tui.genre_picker = None;
            }
            Some(GenrePickerEvent::Dismiss) => tui.genre_picker = None,
            None => {}
        }
        return Effect::None;
    }

    match event {
        TuiEvent::SelectTab(index) => {
            if let Some(tab) = Tab::from_index(index) {
                tui.select_tab(tab);
            }
            return Effect::None;
        }
        TuiEvent::NextTab => {
            tui.select_tab(tui.active_tab.next());
            return Effect::None;
        }
        TuiEvent::PrevTab => {
            tui.select_tab(tui.active_tab.prev());
            return Effect::None;
        }
        _ => {}
    }

    match tui.active_tab {
        Tab::AddBook => dispatch_form(app, tui, &event),
        tab => match event {
            TuiEvent::Escape | TuiEvent::InputChar('q') => update(app, Action::Quit),
            TuiEvent::InputChar(c @ '1'..='4') => {
                if let Some(tab) = c.to_digit(10).and_then(|d| Tab::from_index(d as usize - 1)) {
                    tui.select_tab(tab);
                }
                Effect::None
            }
            TuiEvent::CursorRight | TuiEvent::FocusNext => {
                tui.select_tab(tab.next());
                Effect::None
            }
            TuiEvent::CursorLeft | TuiEvent::FocusPrev => {
                tui.select_tab(tab.prev());
                Effect::None
            }
            _ if tab == Tab::History => {
                tui.history.handle_event(&event);
                Effect::None
            }
            _ => Effect::None,
        },
    }
}

fn dispatch_form(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match tui.form.handle_event(event) {
        Some(FormEvent::Submit(draft)) => {
            let effect = update(app, Action::AddBook(draft));
            if effect == Effect::BookAdded {
                tui.form.reset();
            }
            effect
        }
        Some(FormEvent::OpenGenrePicker) => {
            tui.genre_picker = Some(GenrePickerState::new(tui.form.genre));
            Effect::None
        }
        Some(FormEvent::Changed) | None => Effect::None,
    }
}
