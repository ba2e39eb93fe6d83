//! Content validation for parsed documents
//!
//! Checks an already-parsed [`ParsedDocument`] for quality problems that
//! should block publishing (errors) or deserve a second look (warnings).
//! Validation never parses and never mutates; every rule runs and all issues
//! are reported together.
//!
//! # Rules
//!
//! | Issue | Severity |
//! |---|---|
//! | Question with no correct option | error |
//! | Question with an empty prompt | error |
//! | Question with fewer than two options | warning |
//! | Image with empty alt text | warning |
//! | No blocks and no quizzes | warning |
//!
//! Questions are identified by quiz title and 1-based ordinal, images by
//! 1-based ordinal in the image index.
//!
//! # Examples
//!
//! ```rust
//! use lesson_content_parser::{parse, validate};
//!
//! let doc = parse("<quiz title=\"Check\"><question><option>A</option></question></quiz>");
//! let report = validate(&doc);
//!
//! assert!(!report.valid);
//! assert_eq!(
//!     report.errors,
//!     vec![
//!         "Quiz \"Check\" question 1: no correct answer",
//!         "Quiz \"Check\" question 1: missing prompt",
//!     ]
//! );
//! assert_eq!(report.warnings, vec!["Quiz \"Check\" question 1: too few options: 1"]);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::ParsedDocument;

/// Minimum number of options a question should offer
const MIN_OPTIONS: usize = 2;

/// Whether an issue blocks publishing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One content-quality problem
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentIssue {
    #[error("Quiz \"{quiz}\" question {question}: no correct answer")]
    NoCorrectAnswer { quiz: String, question: usize },
    #[error("Quiz \"{quiz}\" question {question}: missing prompt")]
    MissingPrompt { quiz: String, question: usize },
    #[error("Quiz \"{quiz}\" question {question}: too few options: {count}")]
    TooFewOptions {
        quiz: String,
        question: usize,
        count: usize,
    },
    #[error("Image {image}: missing alt text")]
    MissingAltText { image: usize },
    #[error("Document has no content")]
    NoContent,
    /// No document was supplied at all
    #[error("empty content")]
    EmptyContent,
}

impl ContentIssue {
    pub fn severity(&self) -> Severity {
        match self {
            ContentIssue::NoCorrectAnswer { .. }
            | ContentIssue::MissingPrompt { .. }
            | ContentIssue::EmptyContent => Severity::Error,
            ContentIssue::TooFewOptions { .. }
            | ContentIssue::MissingAltText { .. }
            | ContentIssue::NoContent => Severity::Warning,
        }
    }
}

/// Outcome of validating a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when there are no errors; warnings do not affect validity
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn from_issues(issues: &[ContentIssue]) -> Self {
        let mut report = Self::default();
        for issue in issues {
            match issue.severity() {
                Severity::Error => report.errors.push(issue.to_string()),
                Severity::Warning => report.warnings.push(issue.to_string()),
            }
        }
        report.valid = report.errors.is_empty();
        report
    }
}

/// Collect every issue in `document`, in rule order
pub fn find_issues(document: &ParsedDocument) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    for quiz in &document.quizzes {
        for (ordinal, question) in (1..).zip(&quiz.questions) {
            if question.correct_count() == 0 {
                issues.push(ContentIssue::NoCorrectAnswer {
                    quiz: quiz.title.clone(),
                    question: ordinal,
                });
            }
            if question.prompt.is_empty() {
                issues.push(ContentIssue::MissingPrompt {
                    quiz: quiz.title.clone(),
                    question: ordinal,
                });
            }
            if question.options.len() < MIN_OPTIONS {
                issues.push(ContentIssue::TooFewOptions {
                    quiz: quiz.title.clone(),
                    question: ordinal,
                    count: question.options.len(),
                });
            }
        }
    }

    for (ordinal, image) in (1..).zip(&document.images) {
        if image.alt.is_empty() {
            issues.push(ContentIssue::MissingAltText { image: ordinal });
        }
    }

    if document.blocks.is_empty() && document.quizzes.is_empty() {
        issues.push(ContentIssue::NoContent);
    }

    issues
}

/// Validate a parsed document
///
/// Accepts `&ParsedDocument` or `Option<&ParsedDocument>`; a missing
/// document is reported as invalid with a single "empty content" error.
pub fn validate<'a>(document: impl Into<Option<&'a ParsedDocument>>) -> ValidationReport {
    match document.into() {
        Some(document) => ValidationReport::from_issues(&find_issues(document)),
        None => ValidationReport::from_issues(&[ContentIssue::EmptyContent]),
    }
}
