//! Flat image index
//!
//! Lists every `<img>` occurrence in the original markup, regardless of
//! whether it sits in a figure, a quiz or plain content. This is a separate
//! view from the image blocks: a figure image shows up once as a block and
//! once here.

use crate::document::ImageRef;
use crate::tags::TagSet;

/// Index every image in document order
pub(crate) fn index_images(text: &str, tags: &TagSet) -> Vec<ImageRef> {
    tags.image
        .find_iter(text)
        .enumerate()
        .map(|(index, image)| ImageRef {
            id: format!("img-{index}"),
            src: image.attr("src").unwrap_or_default(),
            alt: image.attr("alt").unwrap_or_default(),
            width: None,
            height: None,
        })
        .collect()
}
