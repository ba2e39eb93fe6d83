//! Document statistics

use serde::{Deserialize, Serialize};

use crate::document::ParsedDocument;

/// Summary counts for a parsed document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStats {
    pub block_count: usize,
    pub quiz_count: usize,
    /// Questions summed across all quizzes
    pub question_count: usize,
    pub image_count: usize,
    pub estimated_read_time: u32,
}

/// Compute statistics; a missing document gives all zeros
pub fn get_stats<'a>(document: impl Into<Option<&'a ParsedDocument>>) -> DocumentStats {
    let Some(document) = document.into() else {
        return DocumentStats::default();
    };

    DocumentStats {
        block_count: document.blocks.len(),
        quiz_count: document.quizzes.len(),
        question_count: document.question_count(),
        image_count: document.images.len(),
        estimated_read_time: document.metadata.estimated_read_time,
    }
}
