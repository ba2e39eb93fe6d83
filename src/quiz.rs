//! Quiz extractor
//!
//! Resolves `<quiz>` → `<question>` → (`<prompt>`, `<option>`,
//! `<explanation>`) over the original, unstripped markup. Quizzes do not
//! nest. Missing or malformed attributes fall back to defaults and an
//! unterminated `<quiz>` is skipped; nothing here fails.
//!
//! Numeric attributes (`passing-score`, `points`) read the leading signed
//! integer of the value, so `"80%"` is 80, `"85.5"` is 85 and `"-3"` is -3.
//! A value with no leading digits falls back to the default.
//!
//! # Markup
//!
//! ```html
//! <quiz id="basics" title="Basics" passing-score="80" required="true">
//!   <question type="multiple" points="5">
//!     <prompt>Pick the primes</prompt>
//!     <option correct="true">2</option>
//!     <option>4</option>
//!     <explanation>4 = 2 × 2</explanation>
//!   </question>
//! </quiz>
//! ```
//!
//! # IDs
//!
//! - Quiz: `id` attribute, else `quiz-{index}`
//! - Question: `{quizId}-q{index}`
//! - Option: `{questionId}-opt{index}`
//!
//! All indices are 0-based and count occurrences in document order.

use crate::document::{Question, QuestionType, Quiz, QuizOption};
use crate::entities::decode_entities;
use crate::options::ParserOptions;
use crate::tags::{TagMatch, TagSet, strip_tags};

/// Attribute value that switches a boolean attribute on
const TRUE_VALUE: &str = "true";

/// Extract every quiz in document order
pub(crate) fn extract_quizzes(text: &str, tags: &TagSet, options: &ParserOptions) -> Vec<Quiz> {
    let quizzes: Vec<Quiz> = tags
        .quiz
        .find_iter(text)
        .enumerate()
        .map(|(index, found)| build_quiz(index, &found, tags, options))
        .collect();
    log::trace!("extracted {} quizzes", quizzes.len());
    quizzes
}

fn build_quiz(index: usize, found: &TagMatch<'_>, tags: &TagSet, options: &ParserOptions) -> Quiz {
    let id = non_empty_attr(found, "id").unwrap_or_else(|| format!("quiz-{index}"));
    let title = non_empty_attr(found, "title")
        .map(|title| decode_entities(&title))
        .unwrap_or_else(|| format!("{} {}", options.quiz_title_label, index + 1));

    let questions = tags
        .question
        .find_iter(found.inner)
        .enumerate()
        .map(|(index, question)| build_question(&id, index, &question, tags, options))
        .collect();

    Quiz {
        passing_score: number_attr(found, "passing-score").unwrap_or(options.default_passing_score),
        required: is_true(found, "required"),
        id,
        title,
        questions,
    }
}

fn build_question(
    quiz_id: &str,
    index: usize,
    found: &TagMatch<'_>,
    tags: &TagSet,
    options: &ParserOptions,
) -> Question {
    let id = format!("{quiz_id}-q{index}");

    let question_type = match found.attr("type") {
        Some(value) if value.trim().eq_ignore_ascii_case("multiple") => QuestionType::Multiple,
        _ => QuestionType::Single,
    };

    let prompt = tags
        .prompt
        .find(found.inner)
        .map(|prompt| plain_text(prompt.inner))
        .unwrap_or_default();

    let quiz_options = tags
        .option
        .find_iter(found.inner)
        .enumerate()
        .map(|(index, option)| QuizOption {
            id: format!("{id}-opt{index}"),
            text: plain_text(option.inner),
            is_correct: is_true(&option, "correct"),
        })
        .collect();

    let explanation = tags
        .explanation
        .find(found.inner)
        .map(|explanation| plain_text(explanation.inner))
        .unwrap_or_default();

    Question {
        question_type,
        points: number_attr(found, "points").unwrap_or(options.default_points),
        prompt,
        options: quiz_options,
        explanation,
        id,
    }
}

/// Tag-stripped, entity-decoded, trimmed text
fn plain_text(fragment: &str) -> String {
    decode_entities(&strip_tags(fragment)).trim().to_string()
}

fn non_empty_attr(found: &TagMatch<'_>, name: &str) -> Option<String> {
    found.attr(name).filter(|value| !value.trim().is_empty())
}

fn number_attr(found: &TagMatch<'_>, name: &str) -> Option<i32> {
    found.attr(name).and_then(|value| leading_integer(&value))
}

/// Signed integer prefix of `value` after leading whitespace
fn leading_integer(value: &str) -> Option<i32> {
    let value = value.trim_start();
    let sign_len = usize::from(value.starts_with(['+', '-']));
    let digits_len = value[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    value[..sign_len + digits_len].parse().ok()
}

fn is_true(found: &TagMatch<'_>, name: &str) -> bool {
    found.attr(name).is_some_and(|value| value == TRUE_VALUE)
}
