//! # Core Application Logic
//!
//! This module contains Book Log's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (owned state)    │
//!                    │  • BookLog (entries)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`book`]: `BookEntry`, `BookDraft`, `Genre` and the validation that links them
//! - [`book_log`]: `BookLog`, the append-only collection and its statistics
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Settings file, env vars and CLI overrides

pub mod action;
pub mod book;
pub mod book_log;
pub mod config;
pub mod state;

pub use action::{Action, Effect, update};
pub use book::{BookDraft, BookEntry, Field, Genre, ValidationError};
pub use book_log::{BookLog, Summary};
pub use state::App;
