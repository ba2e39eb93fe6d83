//! Entity codec for the markup-reserved characters
//!
//! Decoding recognises a fixed table of six entities; encoding produces the
//! five reserved-character entities only. `&nbsp;` is decoded to a plain
//! space but never produced by [`encode_entities`].
//!
//! # Examples
//!
//! ```rust
//! use lesson_content_parser::entities::{decode_entities, encode_entities};
//!
//! assert_eq!(decode_entities("a &lt;b&gt; &amp; c"), "a <b> & c");
//! assert_eq!(encode_entities("<a href=\"x\">"), "&lt;a href=&quot;x&quot;&gt;");
//! ```

/// Entities recognised by [`decode_entities`], paired with their replacement
const DECODE_TABLE: &[(&str, &str)] = &[
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&amp;", "&"),
    ("&quot;", "\""),
    ("&#039;", "'"),
    ("&nbsp;", " "),
];

/// Decode the fixed entity table in a single left-to-right pass
///
/// Every input position is decoded at most once, so a double-escaped
/// sequence such as `&amp;lt;` comes out as `&lt;`. Unknown entities are
/// left untouched.
pub fn decode_entities(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        output.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        match DECODE_TABLE
            .iter()
            .find(|(entity, _)| tail.starts_with(entity))
        {
            Some((entity, replacement)) => {
                output.push_str(replacement);
                rest = &tail[entity.len()..];
            }
            None => {
                output.push('&');
                rest = &tail[1..];
            }
        }
    }

    output.push_str(rest);
    output
}

/// Encode the five markup-reserved characters
pub fn encode_entities(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#039;"),
            other => output.push(other),
        }
    }
    output
}
