//! Lesson Content Parser
//!
//! Converts author-written lesson markup (a restricted HTML dialect with
//! custom quiz elements) into a structured [`ParsedDocument`]: ordered
//! content blocks, embedded quizzes, a flat image index and derived
//! metadata. No DOM is built; every element is found by pattern scanning.
//!
//! # Architecture
//!
//! The library is structured into several modules:
//! - `entities`: entity decoding and encoding
//! - `tags`: tag matching and tag stripping
//! - `blocks`: one extractor per block kind
//! - `reconcile`: block ordering and ID assignment
//! - `quiz`: quiz, question and option extraction
//! - `images`: flat image index
//! - `metadata`: title, description and read time
//! - `parser`: the never-failing parse pipeline
//! - `validation`: content-quality checks over parsed documents
//! - `stats`: summary counts
//! - `fingerprint`: content fingerprints for caching
//! - `options`: injectable lookup tables and defaults
//!
//! # Example
//!
//! ```rust
//! use lesson_content_parser::{get_stats, parse, validate};
//!
//! let doc = parse(
//!     r#"<h1>Fractions</h1>
//!        <p>A fraction has a numerator and a denominator.</p>
//!        <quiz title="Check">
//!          <question>
//!            <prompt>What is 1/2 + 1/2?</prompt>
//!            <option correct="true">1</option>
//!            <option>2/4</option>
//!          </question>
//!        </quiz>"#,
//! );
//!
//! assert_eq!(doc.metadata.title, "Fractions");
//! assert_eq!(doc.blocks.len(), 2);
//! assert_eq!(doc.quizzes[0].questions[0].id, "quiz-0-q0");
//! assert!(validate(&doc).valid);
//! assert_eq!(get_stats(&doc).question_count, 1);
//! ```

mod blocks;
pub mod document;
pub mod entities;
pub mod error;
pub mod fingerprint;
mod images;
pub mod metadata;
pub mod options;
pub mod parser;
mod quiz;
pub mod read_time;
mod reconcile;
pub mod stats;
pub mod tags;
pub mod validation;

// Re-export main types for convenience
pub use document::{
    BlockKind, CalloutStyle, ContentBlock, DocumentMetadata, ImageRef, ParsedDocument, Question,
    QuestionType, Quiz, QuizOption,
};
pub use entities::{decode_entities, encode_entities};
pub use error::ParseError;
pub use fingerprint::fingerprint;
pub use options::ParserOptions;
pub use parser::{LessonParser, MarkupInput, parse};
pub use stats::{DocumentStats, get_stats};
pub use tags::strip_tags;
pub use validation::{ValidationReport, validate};
