//! Parser options
//!
//! Every lookup table and default the extractors consult lives here, so the
//! parser stays a pure function of its input and its options. The defaults
//! reproduce the behavior authored content already relies on.
//!
//! Options can be built in code or loaded from TOML:
//!
//! ```rust
//! use lesson_content_parser::options::{BlockOrdering, FigureContainment, ParserOptions};
//!
//! let options = ParserOptions::from_toml_str(
//!     r#"
//!     quiz_title_label = "Test"
//!     block_ordering = "source-offset"
//!     figure_containment = { policy = "strict-nesting" }
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(options.quiz_title_label, "Test");
//! assert_eq!(options.block_ordering, BlockOrdering::SourceOffset);
//! assert_eq!(options.figure_containment, FigureContainment::StrictNesting);
//! assert_eq!(options.default_passing_score, 70);
//! ```

use serde::{Deserialize, Serialize};

use crate::document::CalloutStyle;
use crate::error::ParseError;

/// Default look-back window for the figure proximity heuristic, in characters
pub const FIGURE_WINDOW_CHARS: usize = 50;

/// Decides whether an `<img>` belongs to a `<figure>`
///
/// Images that belong to a figure are emitted as part of the figure block and
/// skipped by the standalone image pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum FigureContainment {
    /// The image belongs to a figure when `<figure` occurs within the
    /// preceding `chars` characters, whether or not it encloses the image
    HeuristicWindow { chars: usize },
    /// The image belongs to a figure only when it lies inside a matched
    /// `<figure>...</figure>` span
    StrictNesting,
}

impl Default for FigureContainment {
    fn default() -> Self {
        FigureContainment::HeuristicWindow {
            chars: FIGURE_WINDOW_CHARS,
        }
    }
}

/// How extracted blocks are put back into document order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockOrdering {
    /// Sort by the first offset at which the block's raw text occurs;
    /// textually identical blocks share that offset and keep extraction order
    #[default]
    FirstOccurrence,
    /// Sort by the start offset captured during extraction, so repeated
    /// blocks stay where they are written
    SourceOffset,
}

/// Maps a class-name token to a callout style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalloutRule {
    /// Substring looked for in the blockquote `class` attribute
    pub token: String,
    /// Style assigned when the token is present
    pub style: CalloutStyle,
}

impl CalloutRule {
    pub fn new(token: &str, style: CalloutStyle) -> Self {
        Self {
            token: token.to_string(),
            style,
        }
    }
}

/// Parser options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Callout rules in precedence order; the first matching rule wins
    pub callout_styles: Vec<CalloutRule>,
    /// Figure containment policy for standalone images
    pub figure_containment: FigureContainment,
    /// Block ordering policy
    pub block_ordering: BlockOrdering,
    /// Label for untitled quizzes, rendered as "{label} {n}"
    pub quiz_title_label: String,
    /// Passing score for quizzes without a valid `passing-score`
    pub default_passing_score: i32,
    /// Points for questions without a valid `points`
    pub default_points: i32,
    /// Maximum description length in characters
    pub description_max_chars: usize,
    /// Reading speed used for the read-time estimate
    pub words_per_minute: u32,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            callout_styles: vec![
                CalloutRule::new("tip", CalloutStyle::Tip),
                CalloutRule::new("warning", CalloutStyle::Warning),
                CalloutRule::new("info", CalloutStyle::Info),
                CalloutRule::new("success", CalloutStyle::Success),
            ],
            figure_containment: FigureContainment::default(),
            block_ordering: BlockOrdering::default(),
            quiz_title_label: "Quiz".to_string(),
            default_passing_score: 70,
            default_points: 10,
            description_max_chars: 200,
            words_per_minute: 200,
        }
    }
}

impl ParserOptions {
    /// Load options from a TOML document; absent keys keep their defaults
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Config` if the document is not valid TOML or a
    /// value has the wrong shape.
    pub fn from_toml_str(source: &str) -> Result<Self, ParseError> {
        Ok(toml::from_str(source)?)
    }

    /// Resolve a blockquote class string to a callout style
    pub fn callout_style(&self, class: &str) -> CalloutStyle {
        let class = class.to_ascii_lowercase();
        self.callout_styles
            .iter()
            .find(|rule| {
                !rule.token.is_empty() && class.contains(&rule.token.to_ascii_lowercase())
            })
            .map_or(CalloutStyle::Quote, |rule| rule.style)
    }
}
