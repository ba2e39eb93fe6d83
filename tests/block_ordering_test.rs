//! Block ordering tests
//!
//! Covers both ordering policies on realistic and adversarial inputs,
//! including documents made of many textually identical blocks, plus
//! property tests over the public text primitives.

use lesson_content_parser::options::{BlockOrdering, ParserOptions};
use lesson_content_parser::{
    BlockKind, LessonParser, ParsedDocument, decode_entities, encode_entities, parse, strip_tags,
};
use proptest::prelude::*;

fn parser(ordering: BlockOrdering) -> LessonParser {
    LessonParser::with_options(ParserOptions {
        block_ordering: ordering,
        ..Default::default()
    })
}

fn contents(doc: &ParsedDocument) -> Vec<String> {
    doc.blocks
        .iter()
        .map(|block| match &block.kind {
            BlockKind::Heading { content, .. }
            | BlockKind::Paragraph { content }
            | BlockKind::Callout { content, .. }
            | BlockKind::Code { content, .. } => content.clone(),
            BlockKind::List { items, .. } => items.join(","),
            BlockKind::Image { src, .. } => src.clone(),
        })
        .collect()
}

#[test]
fn test_mixed_kinds_follow_document_order() {
    let doc = parse(
        "<p>one</p><h3>two</h3><ul><li>three</li></ul><h1>four</h1>\
         <pre><code>five</code></pre><img src=\"six\">",
    );
    assert_eq!(contents(&doc), vec!["one", "two", "three", "four", "five", "six"]);
}

#[test]
fn test_default_parse_orders_by_first_occurrence() {
    let doc = parse("<h2>Same</h2><p>middle</p><h2>Same</h2>");
    assert_eq!(contents(&doc), vec!["Same", "Same", "middle"]);
    assert_eq!(
        doc,
        parser(BlockOrdering::FirstOccurrence).parse("<h2>Same</h2><p>middle</p><h2>Same</h2>")
    );
}

#[test]
fn test_source_offset_keeps_repeated_blocks_in_place() {
    let doc = parser(BlockOrdering::SourceOffset).parse("<p>a</p><h2>b</h2><p>a</p><h2>b</h2>");
    assert_eq!(contents(&doc), vec!["a", "b", "a", "b"]);
}

#[test]
fn test_first_occurrence_groups_repeated_blocks() {
    let doc =
        parser(BlockOrdering::FirstOccurrence).parse("<p>a</p><h2>b</h2><p>a</p><h2>b</h2>");
    // Every copy sorts to the offset of its first occurrence
    assert_eq!(contents(&doc), vec!["a", "a", "b", "b"]);
}

#[test]
fn test_policies_agree_without_repeats() {
    let markup = "<h1>T</h1><p>x</p><blockquote>y</blockquote><ol><li>z</li></ol>";
    assert_eq!(
        parser(BlockOrdering::SourceOffset).parse(markup),
        parser(BlockOrdering::FirstOccurrence).parse(markup)
    );
}

#[test]
fn test_many_identical_blocks_source_offset() {
    let count = 5_000;
    let markup = "<p>same</p>".repeat(count);
    let doc = parser(BlockOrdering::SourceOffset).parse(markup.as_str());

    assert_eq!(doc.blocks.len(), count);
    assert_eq!(doc.blocks[0].id, "block-0");
    assert_eq!(doc.blocks[count - 1].id, format!("block-{}", count - 1));
    assert!(contents(&doc).iter().all(|content| content == "same"));
}

#[test]
fn test_many_identical_blocks_first_occurrence() {
    let count = 5_000;
    let markup = "<h2>head</h2><p>same</p>".repeat(count);
    let doc = parser(BlockOrdering::FirstOccurrence).parse(markup.as_str());

    assert_eq!(doc.blocks.len(), 2 * count);
    let contents = contents(&doc);
    assert!(contents[..count].iter().all(|content| content == "head"));
    assert!(contents[count..].iter().all(|content| content == "same"));
}

#[test]
fn test_ids_are_contiguous_after_quiz_removal() {
    let doc = parse("<p>a</p><quiz><p>hidden</p></quiz><p>b</p><quiz></quiz><p>c</p>");
    let ids: Vec<_> = doc.blocks.iter().map(|block| block.id.as_str()).collect();
    assert_eq!(ids, vec!["block-0", "block-1", "block-2"]);
    assert_eq!(contents(&doc), vec!["a", "b", "c"]);
}

fn block_markup() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,3}".prop_map(|text| format!("<p>{text}</p>")),
        (1u8..=6, "[a-z]{1,3}").prop_map(|(level, text)| format!("<h{level}>{text}</h{level}>")),
        "[a-z]{1,3}".prop_map(|text| format!("<ul><li>{text}</li></ul>")),
        "[a-z]{1,3}".prop_map(|text| format!("<blockquote class=\"tip\">{text}</blockquote>")),
        "[a-z]{1,3}".prop_map(|text| format!("<pre><code>{text}</code></pre>")),
    ]
}

proptest! {
    #[test]
    fn prop_source_offset_emits_every_block_in_place(
        parts in prop::collection::vec(block_markup(), 0..20)
    ) {
        let markup = parts.join("\n");
        let doc = parser(BlockOrdering::SourceOffset).parse(markup.as_str());
        prop_assert_eq!(doc.blocks.len(), parts.len());

        let expected: Vec<String> = parts.iter().map(|part| strip_tags(part)).collect();
        prop_assert_eq!(contents(&doc), expected);
    }

    #[test]
    fn prop_first_occurrence_sorts_by_first_raw_offset(
        texts in prop::collection::vec("[a-c]{1,2}", 0..20)
    ) {
        let parts: Vec<String> = texts.iter().map(|text| format!("<p>{text}</p>")).collect();
        let markup = parts.concat();
        let doc = parse(markup.as_str());

        // Identical paragraphs share their first offset and keep input order
        let mut expected: Vec<(usize, &String)> = parts
            .iter()
            .zip(&texts)
            .map(|(part, text)| (markup.find(part.as_str()).unwrap_or(0), text))
            .collect();
        expected.sort_by_key(|&(offset, _)| offset);
        let expected: Vec<String> = expected.into_iter().map(|(_, text)| text.clone()).collect();

        prop_assert_eq!(contents(&doc), expected);
    }

    #[test]
    fn prop_default_blocks_are_non_decreasing_by_first_offset(
        parts in prop::collection::vec(block_markup(), 0..20)
    ) {
        let markup = parts.concat();
        let doc = parse(markup.as_str());
        prop_assert_eq!(doc.blocks.len(), parts.len());

        // Every copy of a part sorts to the offset of its first copy
        let mut expected: Vec<(usize, String)> = parts
            .iter()
            .map(|part| (markup.find(part.as_str()).unwrap_or(0), strip_tags(part)))
            .collect();
        expected.sort_by_key(|(offset, _)| *offset);
        let expected: Vec<String> = expected.into_iter().map(|(_, text)| text).collect();

        prop_assert_eq!(contents(&doc), expected);
    }

    #[test]
    fn prop_parse_never_panics(markup in ".{0,400}") {
        let _ = parse(markup.as_str());
    }

    #[test]
    fn prop_entity_round_trip(text in "[<>&\"'a-z ]{0,64}") {
        prop_assert_eq!(decode_entities(&encode_entities(&text)), text);
    }

    #[test]
    fn prop_strip_tags_is_idempotent_on_tag_free_output(text in "[a-z <>/]{0,64}") {
        let once = strip_tags(&text);
        if !once.contains('<') {
            prop_assert_eq!(strip_tags(&once), once);
        }
    }
}
