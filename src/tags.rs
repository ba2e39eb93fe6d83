//! Tag matcher: the "find tagged spans" primitive behind every extractor
//!
//! Lesson markup is scanned with patterns rather than parsed into a tree.
//! A [`TagPattern`] finds every occurrence of one element in document order
//! and reports its byte span, its raw attribute string and its inner text.
//!
//! # Matching Rules
//!
//! - Tag names are matched ASCII case-insensitively
//! - A tag name must be followed by whitespace, `/` or `>`, so `<p` never
//!   matches `<pre>`
//! - Inner captures are non-greedy: the first closing tag ends the span
//! - Matches never overlap; scanning resumes after the previous match
//!
//! # Examples
//!
//! ```rust
//! use lesson_content_parser::tags::TagPattern;
//!
//! let pattern = TagPattern::paired("p").unwrap();
//! let spans: Vec<_> = pattern
//!     .find_iter("<p class=\"lead\">One</p><pre>x</pre><p>Two</p>")
//!     .map(|m| (m.inner, m.attr("class")))
//!     .collect();
//! assert_eq!(spans, vec![("One", Some("lead".to_string())), ("Two", None)]);
//! ```

use regex::Regex;
use std::sync::OnceLock;

use crate::error::ParseError;

/// One occurrence of an element found by a [`TagPattern`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMatch<'a> {
    /// Byte offset of the opening `<`
    pub start: usize,
    /// Byte offset just past the closing `>`
    pub end: usize,
    /// The whole matched text, tags included
    pub raw: &'a str,
    /// Raw attribute string of the opening tag (empty if none)
    pub attributes: &'a str,
    /// Text between the opening and closing tags (empty for void elements)
    pub inner: &'a str,
}

impl<'a> TagMatch<'a> {
    /// Look up an attribute value by name
    ///
    /// Names are compared ASCII case-insensitively and the first occurrence
    /// wins. A bare attribute (`<quiz required>`) yields an empty string.
    /// Values are returned verbatim, without entity decoding.
    pub fn attr(&self, name: &str) -> Option<String> {
        find_attribute(self.attributes, name)
    }
}

/// Compiled matcher for one element name
#[derive(Debug, Clone)]
pub struct TagPattern {
    name: String,
    regex: Regex,
}

impl TagPattern {
    /// Matcher for an element with an opening and a closing tag
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Pattern` if `name` produces an invalid pattern.
    pub fn paired(name: &str) -> Result<Self, ParseError> {
        let escaped = regex::escape(name);
        let source =
            format!(r"(?is)<{escaped}(?:\s([^>]*))?>(.*?)</{escaped}\s*>");
        Self::compile(name, &source)
    }

    /// Matcher for a void element such as `<img>`
    ///
    /// Both `<img ...>` and `<img ... />` are accepted.
    pub fn void(name: &str) -> Result<Self, ParseError> {
        let escaped = regex::escape(name);
        let source = format!(r"(?is)<{escaped}(?:\s([^>]*?))?/?>");
        Self::compile(name, &source)
    }

    fn compile(name: &str, source: &str) -> Result<Self, ParseError> {
        let regex = Regex::new(source)
            .map_err(|e| ParseError::Pattern(format!("<{name}>: {e}")))?;
        Ok(Self {
            name: name.to_string(),
            regex,
        })
    }

    /// Element name this pattern matches
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every occurrence in document order
    pub fn find_iter<'a>(&self, text: &'a str) -> impl Iterator<Item = TagMatch<'a>> {
        self.regex.captures_iter(text).filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(TagMatch {
                start: whole.start(),
                end: whole.end(),
                raw: whole.as_str(),
                attributes: caps.get(1).map_or("", |m| m.as_str()),
                inner: caps.get(2).map_or("", |m| m.as_str()),
            })
        })
    }

    /// First occurrence, if any
    pub fn find<'a>(&self, text: &'a str) -> Option<TagMatch<'a>> {
        self.find_iter(text).next()
    }

    /// Remove every occurrence from `text`
    pub fn remove_all(&self, text: &str) -> String {
        self.regex.replace_all(text, "").into_owned()
    }
}

/// Every pattern the extractors need, compiled once per process
#[derive(Debug)]
pub(crate) struct TagSet {
    /// `<h1>` through `<h6>`, indexed by level - 1
    pub headings: Vec<TagPattern>,
    pub paragraph: TagPattern,
    pub unordered_list: TagPattern,
    pub ordered_list: TagPattern,
    pub list_item: TagPattern,
    pub blockquote: TagPattern,
    pub pre: TagPattern,
    pub code: TagPattern,
    pub figure: TagPattern,
    pub figcaption: TagPattern,
    pub image: TagPattern,
    pub quiz: TagPattern,
    pub question: TagPattern,
    pub prompt: TagPattern,
    pub option: TagPattern,
    pub explanation: TagPattern,
}

impl TagSet {
    fn build() -> Result<Self, ParseError> {
        let headings = (1..=6)
            .map(|level| TagPattern::paired(&format!("h{level}")))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            headings,
            paragraph: TagPattern::paired("p")?,
            unordered_list: TagPattern::paired("ul")?,
            ordered_list: TagPattern::paired("ol")?,
            list_item: TagPattern::paired("li")?,
            blockquote: TagPattern::paired("blockquote")?,
            pre: TagPattern::paired("pre")?,
            code: TagPattern::paired("code")?,
            figure: TagPattern::paired("figure")?,
            figcaption: TagPattern::paired("figcaption")?,
            image: TagPattern::void("img")?,
            quiz: TagPattern::paired("quiz")?,
            question: TagPattern::paired("question")?,
            prompt: TagPattern::paired("prompt")?,
            option: TagPattern::paired("option")?,
            explanation: TagPattern::paired("explanation")?,
        })
    }
}

/// Shared, read-only pattern table
pub(crate) fn tag_set() -> Result<&'static TagSet, ParseError> {
    static TAG_SET: OnceLock<Result<TagSet, String>> = OnceLock::new();
    TAG_SET
        .get_or_init(|| TagSet::build().map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| ParseError::Pattern(e.clone()))
}

fn find_attribute(attributes: &str, name: &str) -> Option<String> {
    if attributes.is_empty() {
        return None;
    }

    // Matches: name, name=value, name="value" or name='value'
    static ATTRIBUTE_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    let regex = ATTRIBUTE_REGEX.get_or_init(|| {
        Regex::new(
            r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#,
        )
        .ok()
    });
    let regex = regex.as_ref()?;

    regex
        .captures_iter(attributes)
        .find(|caps| {
            caps.get(1)
                .is_some_and(|m| m.as_str().eq_ignore_ascii_case(name))
        })
        .map(|caps| {
            caps.get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map_or_else(String::new, |m| m.as_str().to_string())
        })
}

/// Remove every `<...>` run from `text`
///
/// No trimming and no entity decoding is applied. An unterminated `<` and
/// everything after it is kept verbatim.
///
/// # Examples
///
/// ```rust
/// use lesson_content_parser::tags::strip_tags;
///
/// assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
/// assert_eq!(strip_tags("a < b"), "a < b");
/// ```
pub fn strip_tags(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        match rest[open..].find('>') {
            Some(close) => {
                output.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }

    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_paired_pattern_basic() {
        let pattern = TagPattern::paired("h2").unwrap();
        let text = "intro <h2 id=\"a\">Title</h2> outro";
        let found = pattern.find(text).unwrap();
        assert_eq!(found.inner, "Title");
        assert_eq!(found.attributes, "id=\"a\"");
        assert_eq!(found.raw, "<h2 id=\"a\">Title</h2>");
        assert_eq!(&text[found.start..found.end], found.raw);
    }

    #[test]
    fn test_paired_pattern_is_case_insensitive() {
        let pattern = TagPattern::paired("p").unwrap();
        let found = pattern.find("<P>Upper</P>").unwrap();
        assert_eq!(found.inner, "Upper");
    }

    #[test]
    fn test_paired_pattern_requires_name_boundary() {
        let pattern = TagPattern::paired("p").unwrap();
        assert!(pattern.find("<pre>code</pre>").is_none());
        assert!(pattern.find("<param>x</p>").is_none());
    }

    #[test]
    fn test_paired_pattern_is_non_greedy() {
        let pattern = TagPattern::paired("p").unwrap();
        let inner: Vec<_> = pattern
            .find_iter("<p>one</p><p>two</p>")
            .map(|m| m.inner)
            .collect();
        assert_eq!(inner, vec!["one", "two"]);
    }

    #[test]
    fn test_paired_pattern_spans_newlines() {
        let pattern = TagPattern::paired("p").unwrap();
        let found = pattern.find("<p>\nline one\nline two\n</p>").unwrap();
        assert_eq!(found.inner, "\nline one\nline two\n");
    }

    #[test]
    fn test_unterminated_element_does_not_match() {
        let pattern = TagPattern::paired("quiz").unwrap();
        assert!(pattern.find("<quiz id=\"q\"><question>").is_none());
    }

    #[test]
    fn test_void_pattern_variants() {
        let pattern = TagPattern::void("img").unwrap();
        let text = "<img src=\"a.png\"><IMG src='b.png' /><img/>";
        let srcs: Vec<_> = pattern.find_iter(text).map(|m| m.attr("src")).collect();
        assert_eq!(
            srcs,
            vec![Some("a.png".to_string()), Some("b.png".to_string()), None]
        );
    }

    #[test]
    fn test_void_pattern_requires_name_boundary() {
        let pattern = TagPattern::void("img").unwrap();
        assert!(pattern.find("<imgx src=\"a\">").is_none());
    }

    #[test]
    fn test_attribute_forms() {
        let pattern = TagPattern::paired("quiz").unwrap();
        let found = pattern
            .find("<quiz ID=\"q1\" title='Basics' passing-score=80 required>x</quiz>")
            .unwrap();
        assert_eq!(found.attr("id"), Some("q1".to_string()));
        assert_eq!(found.attr("title"), Some("Basics".to_string()));
        assert_eq!(found.attr("passing-score"), Some("80".to_string()));
        assert_eq!(found.attr("required"), Some(String::new()));
        assert_eq!(found.attr("missing"), None);
    }

    #[test]
    fn test_attribute_first_occurrence_wins() {
        let pattern = TagPattern::paired("option").unwrap();
        let found = pattern
            .find("<option correct=\"true\" correct=\"false\">A</option>")
            .unwrap();
        assert_eq!(found.attr("correct"), Some("true".to_string()));
    }

    #[test]
    fn test_attribute_name_is_not_a_prefix_match() {
        let pattern = TagPattern::paired("option").unwrap();
        let found = pattern
            .find("<option data-correct=\"true\">A</option>")
            .unwrap();
        assert_eq!(found.attr("correct"), None);
    }

    #[test]
    fn test_remove_all() {
        let pattern = TagPattern::paired("quiz").unwrap();
        assert_eq!(
            pattern.remove_all("a<quiz><h2>x</h2></quiz>b<QUIZ>y</QUIZ>c"),
            "abc"
        );
    }

    #[test]
    fn test_tag_set_builds() {
        let tags = tag_set().unwrap();
        assert_eq!(tags.headings.len(), 6);
        assert_eq!(tags.headings[5].name(), "h6");
        assert_eq!(tags.image.name(), "img");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags(""), "");
        assert_eq!(strip_tags("plain"), "plain");
        assert_eq!(strip_tags("<p>a<br/>b</p>"), "ab");
        assert_eq!(strip_tags("x <unterminated"), "x <unterminated");
        assert_eq!(strip_tags("<<a>b>"), "b>");
    }

    proptest! {
        #[test]
        fn prop_strip_tags_is_idempotent_on_tag_free_output(text in "[a-z <>/]{0,64}") {
            let once = strip_tags(&text);
            if !once.contains('<') {
                prop_assert_eq!(strip_tags(&once), once);
            }
        }

        #[test]
        fn prop_stripped_text_has_no_complete_tags(text in "[a-z <>/\"=]{0,64}") {
            let stripped = strip_tags(&text);
            if let Some(open) = stripped.find('<') {
                prop_assert!(!stripped[open..].contains('>'));
            }
        }
    }
}
