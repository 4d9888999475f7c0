//! # Application State
//!
//! Core business state for Book Log. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── log: BookLog                  // entries + derived statistics
//! ├── alert: Option<String>         // blocking notification, if shown
//! ├── status_message: String        // status bar text
//! └── average_precision: usize      // decimals for the average
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! One `App` is built at startup and lent to every view; there is no global.

use crate::core::book_log::BookLog;
use crate::core::config::{DEFAULT_AVERAGE_PRECISION, ResolvedConfig};

pub struct App {
    pub log: BookLog,
    pub alert: Option<String>,
    pub status_message: String,
    pub average_precision: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            log: BookLog::new(),
            alert: None,
            status_message: String::from("Welcome to Book Log!"),
            average_precision: DEFAULT_AVERAGE_PRECISION,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            average_precision: config.average_precision,
            ..Self::new()
        }
    }

    /// Average page count for display. Whole numbers drop the decimal part.
    pub fn format_average(&self) -> String {
        let average = self.log.average_pages();
        if average.fract() == 0.0 {
            format!("{average:.0}")
        } else {
            format!("{average:.prec$}", prec = self.average_precision)
        }
    }
}
