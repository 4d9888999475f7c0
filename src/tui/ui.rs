use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    AlertDialog, GenreList, GenrePicker, History, SummaryView, TabBar, TitleBar,
};
use crate::tui::{Tab, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

fn help_text(tui: &TuiState, app: &App) -> &'static str {
    if app.alert.is_some() {
        return "Enter/Esc dismiss";
    }
    if tui.genre_picker.is_some() {
        return "↑↓ move  Enter select  Esc back";
    }
    match tui.active_tab {
        Tab::AddBook => "Tab/↑↓ next field  Enter choose  Ctrl+S add  F1-F4 tabs  Ctrl+C quit",
        Tab::History => "↑↓ PgUp PgDn scroll  1-4 tabs  q quit",
        Tab::Home | Tab::Genres => "1-4 / ←→ tabs  q quit",
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, tabs_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.log.count(), app.status_message.clone()).render(frame, title_area);
    TabBar::new(tui.active_tab).render(frame, tabs_area);

    match tui.active_tab {
        Tab::Home => SummaryView::new(app).render(frame, main_area),
        Tab::AddBook => tui.form.render(frame, main_area),
        Tab::History => History::new(&mut tui.history, &app.log).render(frame, main_area),
        Tab::Genres => GenreList.render(frame, main_area),
    }

    frame.render_widget(
        Span::styled(help_text(tui, app), Style::default().fg(Color::DarkGray)),
        help_area,
    );

    // Overlays last so they draw on top
    if let Some(picker) = tui.genre_picker.as_mut() {
        GenrePicker::new(picker).render(frame, main_area);
    }
    if let Some(message) = &app.alert {
        AlertDialog::new(message).render(frame, frame.area());
    }
}
