//! # Actions
//!
//! Everything that can happen to the book log becomes an `Action`.
//! User presses "Add Book"? That's `Action::AddBook(draft)`.
//! User closes the alert? That's `Action::DismissAlert`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` telling the adapter what to do next. No I/O
//! happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::book::BookDraft;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Validate the draft and, if it passes, log the book.
    AddBook(BookDraft),
    /// Close the alert overlay.
    DismissAlert,
    Quit,
}

/// Follow-up work for the adapter after an `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A book was logged; the entry form should reset.
    BookAdded,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::AddBook(draft) => match app.log.add_draft(&draft) {
            Ok(entry) => {
                app.status_message = format!("Added '{}' by {}", entry.title(), entry.author());
                app.alert = None;
                Effect::BookAdded
            }
            Err(e) => {
                info!("Book not added: {}", e);
                app.alert = Some(e.alert_message());
                Effect::None
            }
        },
        Action::DismissAlert => {
            app.alert = None;
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested with {} books logged", app.log.count());
            Effect::Quit
        }
    }
}
