//! Parse orchestrator
//!
//! Wires the extractors into one total function: [`LessonParser::parse`]
//! always returns a [`ParsedDocument`] and never panics.
//!
//! # Pipeline
//!
//! 1. Derive metadata from the original markup
//! 2. Strip every `<quiz>...</quiz>` subtree
//! 3. Run the block extractors over the stripped markup
//! 4. Reconcile block order and assign `block-{N}` IDs
//! 5. Extract quizzes from the original markup
//! 6. Index images in the original markup
//!
//! # Failure Handling
//!
//! Empty or non-text input short-circuits to the canonical empty document.
//! The whole pipeline runs inside one boundary: an error returned by any
//! stage, or a panic, degrades the entire result to the same empty document.
//! Partial documents are never returned. Faults are logged at `warn` level.
//!
//! # Examples
//!
//! ```rust
//! use lesson_content_parser::parser::parse;
//!
//! let doc = parse("<h1>Intro</h1><p>Hello world this is a test</p>");
//! assert_eq!(doc.metadata.title, "Intro");
//! assert_eq!(doc.blocks.len(), 2);
//!
//! // Missing and empty input give the empty document
//! assert!(parse(None::<&str>).is_empty());
//! assert!(parse("").is_empty());
//! ```

use std::panic;

use crate::blocks::extract_blocks;
use crate::document::ParsedDocument;
use crate::error::ParseError;
use crate::images::index_images;
use crate::metadata::MetadataExtractor;
use crate::options::ParserOptions;
use crate::quiz::extract_quizzes;
use crate::reconcile::reconcile;
use crate::tags::tag_set;

/// Anything that may carry lesson markup
///
/// Values that are absent or not valid UTF-8 carry no markup and parse to
/// the empty document.
pub trait MarkupInput {
    /// The markup text, if this value is text
    fn as_markup(&self) -> Option<&str>;
}

impl MarkupInput for str {
    fn as_markup(&self) -> Option<&str> {
        Some(self)
    }
}

impl MarkupInput for String {
    fn as_markup(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl MarkupInput for [u8] {
    fn as_markup(&self) -> Option<&str> {
        std::str::from_utf8(self).ok()
    }
}

impl<const N: usize> MarkupInput for [u8; N] {
    fn as_markup(&self) -> Option<&str> {
        std::str::from_utf8(self).ok()
    }
}

impl MarkupInput for Vec<u8> {
    fn as_markup(&self) -> Option<&str> {
        std::str::from_utf8(self).ok()
    }
}

impl<T: MarkupInput> MarkupInput for Option<T> {
    fn as_markup(&self) -> Option<&str> {
        self.as_ref().and_then(MarkupInput::as_markup)
    }
}

impl<T: MarkupInput + ?Sized> MarkupInput for &T {
    fn as_markup(&self) -> Option<&str> {
        (**self).as_markup()
    }
}

/// Lesson markup parser
///
/// Holds read-only options; one instance can be shared across threads and
/// used for any number of documents.
#[derive(Debug, Clone, Default)]
pub struct LessonParser {
    options: ParserOptions,
}

impl LessonParser {
    /// Create a parser with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options
    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Options this parser was built with
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse lesson markup into a document
    ///
    /// Never fails: invalid input and internal faults both yield
    /// [`ParsedDocument::empty`].
    pub fn parse<I: MarkupInput>(&self, input: I) -> ParsedDocument {
        let Some(text) = input.as_markup().filter(|text| !text.is_empty()) else {
            log::debug!("no markup to parse, returning empty document");
            return ParsedDocument::empty();
        };

        // Catch any panics so a fault degrades the whole result
        let outcome = panic::catch_unwind(|| self.try_parse(text));

        match outcome {
            Ok(Ok(document)) => document,
            Ok(Err(e)) => {
                log::warn!("lesson parse failed (code {}): {}", e.code(), e);
                ParsedDocument::empty()
            }
            Err(payload) => {
                let e = ParseError::Internal(panic_message(payload.as_ref()));
                log::warn!("lesson parse failed (code {}): {}", e.code(), e);
                ParsedDocument::empty()
            }
        }
    }

    /// Run the pipeline, propagating the first fault
    ///
    /// # Errors
    ///
    /// - `ParseError::InvalidInput` if `text` is empty
    /// - `ParseError::Pattern` if the tag patterns are unavailable
    pub fn try_parse(&self, text: &str) -> Result<ParsedDocument, ParseError> {
        if text.is_empty() {
            return Err(ParseError::InvalidInput("markup is empty".to_string()));
        }

        let tags = tag_set()?;
        log::debug!("parsing {} bytes of lesson markup", text.len());

        let metadata = MetadataExtractor::new(&self.options).extract(text)?;

        let stripped = tags.quiz.remove_all(text);
        let extracted = extract_blocks(&stripped, tags, &self.options);
        let blocks = reconcile(extracted, self.options.block_ordering);

        let quizzes = extract_quizzes(text, tags, &self.options);
        let images = index_images(text, tags);

        log::debug!(
            "parsed {} blocks, {} quizzes, {} images",
            blocks.len(),
            quizzes.len(),
            images.len()
        );

        Ok(ParsedDocument {
            blocks,
            quizzes,
            images,
            metadata,
        })
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic during parse".to_string()
    }
}

/// Parse lesson markup with default options
///
/// See [`LessonParser::parse`].
pub fn parse<I: MarkupInput>(input: I) -> ParsedDocument {
    LessonParser::new().parse(input)
}
