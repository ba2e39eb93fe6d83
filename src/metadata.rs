//! Document metadata derivation
//!
//! Derives the title, description and estimated reading time from the
//! original markup (quizzes included):
//!
//! - Title: text of the first `<h1>`, or empty
//! - Description: text of the first `<p>`, cut to 200 characters without an
//!   ellipsis, or empty. An empty first paragraph gives an empty description.
//! - Estimated read time: `ceil(words / 200)`, at least one minute, counting
//!   whitespace-delimited words of the tag-stripped document
//!
//! # Examples
//!
//! ```rust
//! use lesson_content_parser::metadata::MetadataExtractor;
//! use lesson_content_parser::options::ParserOptions;
//!
//! let extractor = MetadataExtractor::new(&ParserOptions::default());
//! let metadata = extractor
//!     .extract("<h1>Intro</h1><p>Hello world this is a test</p>")
//!     .unwrap();
//!
//! assert_eq!(metadata.title, "Intro");
//! assert_eq!(metadata.description, "Hello world this is a test");
//! assert_eq!(metadata.estimated_read_time, 1);
//! ```

use crate::document::DocumentMetadata;
use crate::entities::decode_entities;
use crate::error::ParseError;
use crate::options::ParserOptions;
use crate::read_time::ReadTimeEstimator;
use crate::tags::{TagPattern, strip_tags, tag_set};

/// Metadata extractor
pub struct MetadataExtractor {
    description_max_chars: usize,
    estimator: ReadTimeEstimator,
}

impl MetadataExtractor {
    /// Create a metadata extractor from parser options
    ///
    /// Uses `description_max_chars` and `words_per_minute`.
    pub fn new(options: &ParserOptions) -> Self {
        Self {
            description_max_chars: options.description_max_chars,
            estimator: ReadTimeEstimator::with_words_per_minute(options.words_per_minute),
        }
    }

    /// Derive metadata from the original markup
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Pattern` if the shared tag patterns are
    /// unavailable.
    pub fn extract(&self, text: &str) -> Result<DocumentMetadata, ParseError> {
        let tags = tag_set()?;

        let title = tags
            .headings
            .first()
            .map(|h1| first_text(h1, text))
            .unwrap_or_default();

        let description: String = first_text(&tags.paragraph, text)
            .chars()
            .take(self.description_max_chars)
            .collect();

        let estimated_read_time = self.estimator.estimate(&strip_tags(text));

        Ok(DocumentMetadata {
            title,
            description,
            estimated_read_time,
        })
    }
}

/// Decoded, stripped, trimmed text of the first match of `pattern`
fn first_text(pattern: &TagPattern, text: &str) -> String {
    pattern
        .find(text)
        .map(|found| decode_entities(&strip_tags(found.inner)).trim().to_string())
        .unwrap_or_default()
}
