//! Content fingerprints for lesson markup
//!
//! Storage layers key cached [`ParsedDocument`](crate::ParsedDocument)s by
//! a fingerprint of the markup they came from, so unchanged lessons are not
//! parsed again. Fingerprints are never used for block, quiz or image IDs.
//!
//! # Algorithm
//!
//! 1. Hash the markup bytes using BLAKE3
//! 2. Take the first 128 bits (16 bytes) of the hash
//! 3. Encode as lowercase hexadecimal
//!
//! # Example
//!
//! ```
//! use lesson_content_parser::fingerprint::fingerprint;
//!
//! let a = fingerprint("<h1>Intro</h1>");
//! assert_eq!(a.len(), 32);
//! assert_eq!(a, fingerprint("<h1>Intro</h1>"));
//! assert_ne!(a, fingerprint("<h1>Outro</h1>"));
//! ```

/// Fingerprint length in bytes before hex encoding
const FINGERPRINT_BYTES: usize = 16;

/// 128-bit BLAKE3 fingerprint of `markup`, hex encoded
pub fn fingerprint(markup: &str) -> String {
    let hash = blake3::hash(markup.as_bytes());
    hex::encode(&hash.as_bytes()[..FINGERPRINT_BYTES])
}
