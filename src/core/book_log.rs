//! # Book Log
//!
//! The append-only, in-memory collection of logged books plus the statistics
//! derived from it.
//!
//! ```text
//! BookLog
//! └── entries: VecDeque<BookEntry>   // newest first
//!       └── front() == last_added()
//! ```
//!
//! There is exactly one mutating transition: adding a book prepends it. Nothing
//! is ever edited or removed. Totals and averages are computed on demand and
//! never stored.

use log::{debug, info};
use std::collections::VecDeque;

use crate::core::book::{BookDraft, BookEntry, ValidationError};

/// Snapshot of the derived statistics, read by the summary view and title bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub count: usize,
    pub total_pages: u64,
    pub average_pages: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookLog {
    entries: VecDeque<BookEntry>,
}

impl BookLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book from raw text values, as typed into a form.
    ///
    /// `genre` is a display label (see `Genre::label`) or `None`. On error the
    /// log is left untouched.
    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        genre: Option<&str>,
        num_pages: &str,
    ) -> Result<&BookEntry, ValidationError> {
        let draft = BookDraft::from_text(title, author, genre, num_pages).inspect_err(|e| {
            debug!("Rejected book: {}", e);
        })?;
        self.add_draft(&draft)
    }

    /// Validate a draft and prepend the resulting entry.
    pub fn add_draft(&mut self, draft: &BookDraft) -> Result<&BookEntry, ValidationError> {
        let entry = draft.validate().inspect_err(|e| {
            debug!("Rejected book: {}", e);
        })?;
        info!(
            "Logged '{}' by {} ({}, {} pages), {} books total",
            entry.title(),
            entry.author(),
            entry.genre(),
            entry.num_pages(),
            self.entries.len() + 1
        );
        self.entries.push_front(entry);
        Ok(&self.entries[0])
    }

    /// Entries, most recently added first.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &BookEntry> + DoubleEndedIterator {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&BookEntry> {
        self.entries.get(index)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently added entry, if any.
    pub fn last_added(&self) -> Option<&BookEntry> {
        self.entries.front()
    }

    /// Sum of every entry's page count. Zero for an empty log.
    pub fn total_pages(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.num_pages())).sum()
    }

    /// Mean page count. Zero for an empty log.
    pub fn average_pages(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.total_pages() as f64 / self.entries.len() as f64
    }

    pub fn summary(&self) -> Summary {
        Summary {
            count: self.count(),
            total_pages: self.total_pages(),
            average_pages: self.average_pages(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::book::{Field, Genre};

    #[test]
    fn test_new_log_is_empty() {
        let log = BookLog::new();
        assert!(log.is_empty());
        assert_eq!(log.count(), 0);
        assert_eq!(log.last_added(), None);
        assert_eq!(log.total_pages(), 0);
        assert_eq!(log.average_pages(), 0.0);
    }

    #[test]
    fn test_add_book_returns_new_entry() {
        let mut log = BookLog::new();
        let entry = log
            .add_book("Dune", "Herbert", Some("Science Fiction"), "412")
            .unwrap();
        assert_eq!(entry.title(), "Dune");
        assert_eq!(entry.genre(), Genre::ScienceFiction);
        assert_eq!(log.count(), 1);
    }

    #[test]
    fn test_totals_and_average() {
        let mut log = BookLog::new();
        log.add_book("Dune", "Herbert", Some("Science Fiction"), "412")
            .unwrap();
        log.add_book("It", "King", Some("Horror"), "1138").unwrap();
        assert_eq!(log.total_pages(), 1550);
        assert_eq!(log.average_pages(), 775.0);
        assert_eq!(
            log.summary(),
            Summary {
                count: 2,
                total_pages: 1550,
                average_pages: 775.0
            }
        );
    }

    #[test]
    fn test_entries_newest_first() {
        let mut log = BookLog::new();
        for title in ["A", "B", "C"] {
            log.add_book(title, "Anon", Some("Fiction"), "10").unwrap();
        }
        let titles: Vec<&str> = log.entries().map(|e| e.title()).collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
        assert_eq!(log.last_added().map(|e| e.title()), Some("C"));
        assert_eq!(log.get(2).map(|e| e.title()), Some("A"));
    }

    #[test]
    fn test_missing_field_leaves_log_unchanged() {
        let mut log = BookLog::new();
        log.add_book("Dune", "Herbert", Some("Science Fiction"), "412")
            .unwrap();
        let before = log.clone();

        let cases: [(&str, &str, Option<&str>, &str, Field); 4] = [
            ("", "King", Some("Horror"), "1138", Field::Title),
            ("It", "", Some("Horror"), "1138", Field::Author),
            ("It", "King", None, "1138", Field::Genre),
            ("It", "King", Some("Horror"), "", Field::Pages),
        ];
        for (title, author, genre, pages, field) in cases {
            let err = log.add_book(title, author, genre, pages).unwrap_err();
            assert_eq!(err, ValidationError::MissingFields(vec![field]));
            assert_eq!(log, before);
        }
    }

    #[test]
    fn test_invalid_pages_leaves_log_unchanged() {
        let mut log = BookLog::new();
        let err = log.add_book("It", "King", Some("Horror"), "many").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPageCount(_)));
        assert!(log.is_empty());
    }

    #[test]
    fn test_average_is_fractional() {
        let mut log = BookLog::new();
        for pages in ["100", "100", "101"] {
            log.add_book("T", "A", Some("Mystery"), pages).unwrap();
        }
        assert!((log.average_pages() - 100.333_333).abs() < 1e-5);
    }

    #[test]
    fn test_total_does_not_overflow_u32() {
        let mut log = BookLog::new();
        log.add_book("Big", "A", Some("Fantasy"), &u32::MAX.to_string())
            .unwrap();
        log.add_book("Big", "A", Some("Fantasy"), &u32::MAX.to_string())
            .unwrap();
        assert_eq!(log.total_pages(), 2 * u64::from(u32::MAX));
    }
}
