//! Parsed document model
//!
//! Every value here is created and fully populated by a single parse call and
//! never mutated afterwards. The serde representation uses the camelCase
//! field names existing consumers read (`passingScore`, `isCorrect`,
//! `estimatedReadTime`, ...).

use serde::{Deserialize, Serialize};

/// Result of parsing one lesson
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument {
    /// Content blocks in document order, quizzes excluded
    pub blocks: Vec<ContentBlock>,
    /// Quizzes in document order
    pub quizzes: Vec<Quiz>,
    /// Every image occurrence, figures and quizzes included
    pub images: Vec<ImageRef>,
    pub metadata: DocumentMetadata,
}

impl ParsedDocument {
    /// The canonical empty document returned for invalid input and faults
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if this is structurally the canonical empty document
    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    /// Total number of questions across all quizzes
    pub fn question_count(&self) -> usize {
        self.quizzes.iter().map(|quiz| quiz.questions.len()).sum()
    }
}

/// Derived document metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    /// Text of the first level-1 heading, or empty
    pub title: String,
    /// Text of the first paragraph, truncated, or empty
    pub description: String,
    /// Estimated reading time in minutes
    pub estimated_read_time: u32,
}

/// One renderable unit of content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// `block-{N}`, N being the final position
    pub id: String,
    #[serde(flatten)]
    pub kind: BlockKind,
}

/// Block payload, tagged by block type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockKind {
    Heading { level: u8, content: String },
    Paragraph { content: String },
    List { ordered: bool, items: Vec<String> },
    Callout { style: CalloutStyle, content: String },
    Code { language: String, content: String },
    Image { src: String, alt: String, caption: String },
}

impl BlockKind {
    /// Short name of the block type, as used in the serialized `type` field
    pub fn type_name(&self) -> &'static str {
        match self {
            BlockKind::Heading { .. } => "heading",
            BlockKind::Paragraph { .. } => "paragraph",
            BlockKind::List { .. } => "list",
            BlockKind::Callout { .. } => "callout",
            BlockKind::Code { .. } => "code",
            BlockKind::Image { .. } => "image",
        }
    }
}

/// Semantic style of a callout block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutStyle {
    Tip,
    Warning,
    Info,
    Success,
    Quote,
}

/// An embedded quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub passing_score: i32,
    pub required: bool,
    pub questions: Vec<Question>,
}

/// Whether a question has one or several correct options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    #[default]
    Single,
    Multiple,
}

/// One quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// `{quizId}-q{index}`
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub points: i32,
    pub prompt: String,
    pub options: Vec<QuizOption>,
    pub explanation: String,
}

impl Question {
    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|option| option.is_correct).count()
    }
}

/// One answer option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    /// `{questionId}-opt{index}`
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

/// One image occurrence in the flat image index
///
/// Dimensions are resolved by a downstream collaborator and are always
/// `None` when produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// `img-{index}`
    pub id: String,
    pub src: String,
    pub alt: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}
