//! Position reconciler
//!
//! Merges the output of every block extractor into one document-ordered
//! sequence and assigns the final `block-{N}` IDs.
//!
//! Two ordering policies exist (see [`BlockOrdering`]):
//!
//! - `FirstOccurrence` (default) sorts by the first offset at which the
//!   block's raw text was matched. Byte-identical blocks collapse onto the
//!   same offset and keep extraction order between themselves, so a repeated
//!   block can jump ahead of blocks that sit between its copies. Authored
//!   lessons already rely on this order.
//! - `SourceOffset` sorts by the offset captured while extracting. Every
//!   block lands at its true position, including repeated identical blocks.
//!
//! Both sorts are stable; extraction order is the tie-break. The first
//! offset of each raw span is the smallest captured start among the blocks
//! sharing that text, so neither policy searches the buffer again.

use std::collections::HashMap;

use crate::blocks::ExtractedBlock;
use crate::document::ContentBlock;
use crate::options::BlockOrdering;

/// Order `extracted` blocks and assign contiguous IDs from `block-0`
pub(crate) fn reconcile(
    mut extracted: Vec<ExtractedBlock<'_>>,
    ordering: BlockOrdering,
) -> Vec<ContentBlock> {
    match ordering {
        BlockOrdering::SourceOffset => extracted.sort_by_key(|block| block.start),
        BlockOrdering::FirstOccurrence => {
            let mut first_offsets: HashMap<&str, usize> = HashMap::new();
            for block in &extracted {
                first_offsets
                    .entry(block.raw)
                    .and_modify(|offset| *offset = (*offset).min(block.start))
                    .or_insert(block.start);
            }
            extracted.sort_by_key(|block| first_offsets.get(block.raw).copied().unwrap_or(block.start));
        }
    }

    extracted
        .into_iter()
        .enumerate()
        .map(|(index, block)| ContentBlock {
            id: format!("block-{index}"),
            kind: block.kind,
        })
        .collect()
}
