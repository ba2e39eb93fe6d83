#![no_main]

use libfuzzer_sys::fuzz_target;
use lesson_content_parser::options::{BlockOrdering, FigureContainment, ParserOptions};
use lesson_content_parser::{LessonParser, get_stats, parse, validate};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes, including invalid UTF-8
    let doc = parse(data);
    let _ = validate(&doc);
    let stats = get_stats(&doc);
    assert_eq!(stats.block_count, doc.blocks.len());

    let strict = LessonParser::with_options(ParserOptions {
        block_ordering: BlockOrdering::FirstOccurrence,
        figure_containment: FigureContainment::StrictNesting,
        ..Default::default()
    });
    let other = strict.parse(data);
    assert_eq!(other.quizzes, doc.quizzes);
    assert_eq!(other.images, doc.images);
});
