//! Block extractors
//!
//! One independent extractor per block kind, each a scan with the shared
//! [`TagSet`](crate::tags). Extractors run over the quiz-stripped buffer so
//! headings and paragraphs inside quizzes never surface as top-level blocks.
//!
//! Extractors do not know about each other: a `<p>` inside a `<blockquote>`
//! yields both a paragraph and a callout. Each extracted block keeps the
//! byte offset and raw text of its match so [`crate::reconcile`] can put the
//! combined output back into document order.
//!
//! # Extraction Order
//!
//! Headings (by level), paragraphs, unordered lists, ordered lists,
//! callouts, code blocks, figures, standalone images. This order is the
//! tie-break for blocks that resolve to the same position.

use crate::document::BlockKind;
use crate::entities::decode_entities;
use crate::options::{FigureContainment, ParserOptions};
use crate::tags::{TagMatch, TagPattern, TagSet, strip_tags};

/// Marker looked for by the figure proximity heuristic
const FIGURE_OPEN: &str = "<figure";

/// Language reported for code blocks without a `language-*` class
const DEFAULT_CODE_LANGUAGE: &str = "text";

/// A block before ordering and final ID assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExtractedBlock<'a> {
    pub kind: BlockKind,
    /// Byte offset of the match in the scanned buffer
    pub start: usize,
    /// Matched text, tags included
    pub raw: &'a str,
}

impl<'a> ExtractedBlock<'a> {
    fn new(kind: BlockKind, found: &TagMatch<'a>) -> Self {
        Self {
            kind,
            start: found.start,
            raw: found.raw,
        }
    }
}

/// Run every extractor over `text`, in extraction order
pub(crate) fn extract_blocks<'a>(
    text: &'a str,
    tags: &TagSet,
    options: &ParserOptions,
) -> Vec<ExtractedBlock<'a>> {
    let mut blocks = Vec::new();
    blocks.extend(headings(text, tags));
    blocks.extend(paragraphs(text, tags));
    blocks.extend(lists(text, &tags.unordered_list, false, tags));
    blocks.extend(lists(text, &tags.ordered_list, true, tags));
    blocks.extend(callouts(text, tags, options));
    blocks.extend(code_blocks(text, tags));
    blocks.extend(figures(text, tags));
    blocks.extend(standalone_images(text, tags, options.figure_containment));
    blocks
}

/// Stripped, trimmed text content of a fragment
fn text_content(fragment: &str) -> String {
    strip_tags(fragment).trim().to_string()
}

fn headings<'a>(text: &'a str, tags: &TagSet) -> Vec<ExtractedBlock<'a>> {
    let mut blocks = Vec::new();
    for (level, pattern) in (1u8..).zip(&tags.headings) {
        blocks.extend(pattern.find_iter(text).map(|found| {
            let kind = BlockKind::Heading {
                level,
                content: text_content(found.inner),
            };
            ExtractedBlock::new(kind, &found)
        }));
    }
    log::trace!("extracted {} headings", blocks.len());
    blocks
}

fn paragraphs<'a>(text: &'a str, tags: &TagSet) -> Vec<ExtractedBlock<'a>> {
    let blocks: Vec<_> = tags
        .paragraph
        .find_iter(text)
        .filter_map(|found| {
            let content = text_content(found.inner);
            // Spacer markup like <p><br></p>
            if content.is_empty() {
                return None;
            }
            Some(ExtractedBlock::new(BlockKind::Paragraph { content }, &found))
        })
        .collect();
    log::trace!("extracted {} paragraphs", blocks.len());
    blocks
}

fn lists<'a>(
    text: &'a str,
    pattern: &TagPattern,
    ordered: bool,
    tags: &TagSet,
) -> Vec<ExtractedBlock<'a>> {
    let blocks: Vec<_> = pattern
        .find_iter(text)
        .filter_map(|found| {
            let items: Vec<String> = tags
                .list_item
                .find_iter(found.inner)
                .map(|item| text_content(item.inner))
                .filter(|item| !item.is_empty())
                .collect();
            if items.is_empty() {
                return None;
            }
            Some(ExtractedBlock::new(BlockKind::List { ordered, items }, &found))
        })
        .collect();
    log::trace!("extracted {} <{}> lists", blocks.len(), pattern.name());
    blocks
}

fn callouts<'a>(text: &'a str, tags: &TagSet, options: &ParserOptions) -> Vec<ExtractedBlock<'a>> {
    tags.blockquote
        .find_iter(text)
        .map(|found| {
            let class = found.attr("class").unwrap_or_default();
            let kind = BlockKind::Callout {
                style: options.callout_style(&class),
                content: text_content(found.inner),
            };
            ExtractedBlock::new(kind, &found)
        })
        .collect()
}

fn code_blocks<'a>(text: &'a str, tags: &TagSet) -> Vec<ExtractedBlock<'a>> {
    tags.pre
        .find_iter(text)
        .filter_map(|found| {
            let code = tags.code.find(found.inner)?;
            let language = code
                .attr("class")
                .and_then(|class| code_language(&class))
                .unwrap_or_else(|| DEFAULT_CODE_LANGUAGE.to_string());
            // Code text arrives escaped; decode before trimming
            let content = decode_entities(code.inner).trim().to_string();
            Some(ExtractedBlock::new(BlockKind::Code { language, content }, &found))
        })
        .collect()
}

/// Language named by the first non-empty `language-<name>` class token
fn code_language(class: &str) -> Option<String> {
    class
        .split_whitespace()
        .filter_map(|token| token.strip_prefix("language-"))
        .find(|name| !name.is_empty())
        .map(str::to_string)
}

fn figures<'a>(text: &'a str, tags: &TagSet) -> Vec<ExtractedBlock<'a>> {
    tags.figure
        .find_iter(text)
        .filter_map(|found| {
            let image = tags.image.find(found.inner)?;
            let caption = tags
                .figcaption
                .find(found.inner)
                .map(|caption| text_content(caption.inner))
                .unwrap_or_default();
            let kind = BlockKind::Image {
                src: image.attr("src").unwrap_or_default(),
                alt: image.attr("alt").unwrap_or_default(),
                caption,
            };
            Some(ExtractedBlock::new(kind, &found))
        })
        .collect()
}

fn standalone_images<'a>(
    text: &'a str,
    tags: &TagSet,
    containment: FigureContainment,
) -> Vec<ExtractedBlock<'a>> {
    let figure_spans: Vec<(usize, usize)> = match containment {
        FigureContainment::StrictNesting => tags
            .figure
            .find_iter(text)
            .map(|figure| (figure.start, figure.end))
            .collect(),
        FigureContainment::HeuristicWindow { .. } => Vec::new(),
    };

    tags.image
        .find_iter(text)
        .filter(|image| {
            let in_figure = match containment {
                FigureContainment::HeuristicWindow { chars } => {
                    figure_opens_within(text, image.start, chars)
                }
                FigureContainment::StrictNesting => figure_spans
                    .iter()
                    .any(|&(start, end)| start <= image.start && image.end <= end),
            };
            !in_figure
        })
        .map(|image| {
            let kind = BlockKind::Image {
                src: image.attr("src").unwrap_or_default(),
                alt: image.attr("alt").unwrap_or_default(),
                caption: String::new(),
            };
            ExtractedBlock::new(kind, &image)
        })
        .collect()
}

/// True if `<figure` occurs in the `chars` characters before `offset`
fn figure_opens_within(text: &str, offset: usize, chars: usize) -> bool {
    let window_start = text[..offset]
        .char_indices()
        .rev()
        .take(chars)
        .last()
        .map_or(offset, |(index, _)| index);
    text[window_start..offset]
        .to_ascii_lowercase()
        .contains(FIGURE_OPEN)
}
