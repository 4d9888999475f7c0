//! # Books
//!
//! The record types behind the log.
//!
//! ```text
//! BookDraft (raw form text)  →  validate()  →  BookEntry (typed, immutable)
//!                                   └──────→  ValidationError
//! ```
//!
//! A `BookEntry` can only be built by validating a `BookDraft`, so every entry
//! that reaches the log already has a non-empty title and author, a known genre,
//! and an integer page count.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Genre
// ============================================================================

/// The fixed set of genres a book can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Genre {
    Action,
    Adventure,
    Fantasy,
    Fiction,
    Horror,
    Isekai,
    Mystery,
    NonFiction,
    Romance,
    ScienceFiction,
    Thriller,
}

impl Genre {
    /// Every genre, in display order.
    pub const ALL: [Genre; 11] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Fantasy,
        Genre::Fiction,
        Genre::Horror,
        Genre::Isekai,
        Genre::Mystery,
        Genre::NonFiction,
        Genre::Romance,
        Genre::ScienceFiction,
        Genre::Thriller,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Fantasy => "Fantasy",
            Genre::Fiction => "Fiction",
            Genre::Horror => "Horror",
            Genre::Isekai => "Isekai",
            Genre::Mystery => "Mystery",
            Genre::NonFiction => "Non-Fiction",
            Genre::Romance => "Romance",
            Genre::ScienceFiction => "Science Fiction",
            Genre::Thriller => "Thriller",
        }
    }

    /// Position of this genre in `ALL`.
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|g| *g == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = ValidationError;

    /// Parses a display label. Case and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownGenre(wanted.to_string()))
    }
}

impl TryFrom<String> for Genre {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Genre> for String {
    fn from(genre: Genre) -> Self {
        genre.label().to_string()
    }
}

// ============================================================================
// Fields and errors
// ============================================================================

/// The inputs of the entry form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Genre,
    Pages,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Author => "Author",
            Field::Genre => "Genre",
            Field::Pages => "Number of Pages",
        }
    }
}

/// Why a draft could not become a `BookEntry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more inputs were empty or absent, listed in form order.
    MissingFields(Vec<Field>),
    /// A genre label outside the fixed set.
    UnknownGenre(String),
    /// Page count text that isn't a non-negative whole number.
    InvalidPageCount(String),
}

impl ValidationError {
    /// The text shown to the user in the alert overlay.
    pub fn alert_message(&self) -> String {
        match self {
            ValidationError::MissingFields(_) => "Please fill in all details.".to_string(),
            ValidationError::UnknownGenre(label) => format!("Unknown genre: {label}"),
            ValidationError::InvalidPageCount(text) => {
                format!("Number of pages must be a whole number, got '{text}'.")
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields(fields) => {
                let names: Vec<&str> = fields.iter().map(|field| field.label()).collect();
                write!(f, "missing fields: {}", names.join(", "))
            }
            ValidationError::UnknownGenre(label) => write!(f, "unknown genre: {label:?}"),
            ValidationError::InvalidPageCount(text) => {
                write!(f, "invalid page count: {text:?}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// BookEntry
// ============================================================================

/// One logged book. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntry {
    title: String,
    author: String,
    genre: Genre,
    num_pages: u32,
}

impl BookEntry {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn num_pages(&self) -> u32 {
        self.num_pages
    }
}

// ============================================================================
// BookDraft
// ============================================================================

/// Raw values collected by the entry form, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub genre: Option<Genre>,
    pub num_pages: String,
}

impl BookDraft {
    /// Build a draft from plain text, as a caller without a genre picker would.
    ///
    /// An empty or whitespace-only genre label counts as absent.
    pub fn from_text(
        title: &str,
        author: &str,
        genre: Option<&str>,
        num_pages: &str,
    ) -> Result<Self, ValidationError> {
        let genre = match genre.map(str::trim) {
            Some(label) if !label.is_empty() => Some(label.parse::<Genre>()?),
            _ => None,
        };
        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
            genre,
            num_pages: num_pages.to_string(),
        })
    }

    /// Fields that are empty (after trimming) or unset.
    pub fn missing_fields(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push(Field::Title);
        }
        if self.author.trim().is_empty() {
            missing.push(Field::Author);
        }
        if self.genre.is_none() {
            missing.push(Field::Genre);
        }
        if self.num_pages.trim().is_empty() {
            missing.push(Field::Pages);
        }
        missing
    }

    /// Parse and validate into a typed entry.
    ///
    /// Presence is checked before the page count is parsed, so a form with an
    /// empty title and garbage in the page field reports the missing title.
    pub fn validate(&self) -> Result<BookEntry, ValidationError> {
        let missing = self.missing_fields();
        let (true, Some(genre)) = (missing.is_empty(), self.genre) else {
            return Err(ValidationError::MissingFields(missing));
        };

        let pages_text = self.num_pages.trim();
        let num_pages = pages_text
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidPageCount(pages_text.to_string()))?;

        Ok(BookEntry {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            genre,
            num_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, author: &str, genre: Option<Genre>, pages: &str) -> BookDraft {
        BookDraft {
            title: title.to_string(),
            author: author.to_string(),
            genre,
            num_pages: pages.to_string(),
        }
    }

    #[test]
    fn test_genre_set_is_fixed() {
        assert_eq!(Genre::ALL.len(), 11);
        let labels: Vec<&str> = Genre::ALL.iter().map(|g| g.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Action",
                "Adventure",
                "Fantasy",
                "Fiction",
                "Horror",
                "Isekai",
                "Mystery",
                "Non-Fiction",
                "Romance",
                "Science Fiction",
                "Thriller",
            ]
        );
    }

    #[test]
    fn test_genre_parse_ignores_case_and_whitespace() {
        assert_eq!("science fiction".parse::<Genre>(), Ok(Genre::ScienceFiction));
        assert_eq!("  NON-FICTION ".parse::<Genre>(), Ok(Genre::NonFiction));
        assert_eq!(
            "Cookbook".parse::<Genre>(),
            Err(ValidationError::UnknownGenre("Cookbook".to_string()))
        );
    }

    #[test]
    fn test_genre_index_matches_all() {
        for (i, genre) in Genre::ALL.iter().enumerate() {
            assert_eq!(genre.index(), i);
        }
    }

    #[test]
    fn test_genre_serde_uses_label() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            genre: Genre,
        }
        let parsed: Wrapper = toml::from_str(r#"genre = "Science Fiction""#).unwrap();
        assert_eq!(parsed.genre, Genre::ScienceFiction);
        let written = toml::to_string(&Wrapper { genre: Genre::NonFiction }).unwrap();
        assert!(written.contains("\"Non-Fiction\""));
    }

    #[test]
    fn test_validate_trims_and_types_fields() {
        let entry = draft("  Dune ", " Herbert", Some(Genre::ScienceFiction), " 412 ")
            .validate()
            .unwrap();
        assert_eq!(entry.title(), "Dune");
        assert_eq!(entry.author(), "Herbert");
        assert_eq!(entry.genre(), Genre::ScienceFiction);
        assert_eq!(entry.num_pages(), 412);
    }

    #[test]
    fn test_validate_lists_every_missing_field() {
        let err = draft("", "   ", None, "").validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec![
                Field::Title,
                Field::Author,
                Field::Genre,
                Field::Pages
            ])
        );
        assert_eq!(err.alert_message(), "Please fill in all details.");
    }

    #[test]
    fn test_presence_checked_before_page_parse() {
        let err = draft("", "King", Some(Genre::Horror), "lots").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(vec![Field::Title]));
    }

    #[test]
    fn test_missing_genre_alone_reported_before_page_parse() {
        let err = draft("It", "King", None, "lots").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(vec![Field::Genre]));
    }

    #[test]
    fn test_non_numeric_pages_rejected() {
        let err = draft("It", "King", Some(Genre::Horror), "a lot")
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidPageCount("a lot".to_string()));
        assert!(err.alert_message().contains("whole number"));
    }

    #[test]
    fn test_negative_pages_rejected() {
        let err = draft("It", "King", Some(Genre::Horror), "-3").validate().unwrap_err();
        assert_eq!(err, ValidationError::InvalidPageCount("-3".to_string()));
    }

    #[test]
    fn test_zero_pages_allowed() {
        let entry = draft("Blank", "Nobody", Some(Genre::Fiction), "0")
            .validate()
            .unwrap();
        assert_eq!(entry.num_pages(), 0);
    }

    #[test]
    fn test_from_text_treats_blank_genre_as_absent() {
        let d = BookDraft::from_text("A", "B", Some("  "), "1").unwrap();
        assert_eq!(d.genre, None);
        let d = BookDraft::from_text("A", "B", None, "1").unwrap();
        assert_eq!(d.genre, None);
    }

    #[test]
    fn test_from_text_rejects_unknown_genre() {
        let err = BookDraft::from_text("A", "B", Some("Poetry"), "1").unwrap_err();
        assert_eq!(err, ValidationError::UnknownGenre("Poetry".to_string()));
    }

    #[test]
    fn test_display_names_missing_fields() {
        let err = ValidationError::MissingFields(vec![Field::Author, Field::Pages]);
        assert_eq!(err.to_string(), "missing fields: Author, Number of Pages");
    }
}
