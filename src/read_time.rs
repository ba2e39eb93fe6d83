//! Reading time estimation

/// Read-time estimator using a whitespace word count
pub struct ReadTimeEstimator {
    /// Reading speed (default: 200 words per minute)
    words_per_minute: u32,
}

impl ReadTimeEstimator {
    /// Create a new estimator with default settings
    pub fn new() -> Self {
        Self {
            words_per_minute: 200,
        }
    }

    /// Create a new estimator with a custom reading speed
    ///
    /// A speed of 0 is treated as 1 word per minute.
    pub fn with_words_per_minute(words_per_minute: u32) -> Self {
        Self {
            words_per_minute: words_per_minute.max(1),
        }
    }

    /// Count whitespace-delimited words in plain text
    pub fn count_words(text: &str) -> usize {
        text.split_whitespace().count()
    }

    /// Estimate reading time in whole minutes for plain text
    ///
    /// Rounds up, and never returns less than one minute, even for empty
    /// text.
    ///
    /// # Arguments
    ///
    /// * `text` - Tag-stripped document text
    pub fn estimate(&self, text: &str) -> u32 {
        let words = Self::count_words(text) as u64;
        let minutes = words.div_ceil(u64::from(self.words_per_minute));
        u32::try_from(minutes).unwrap_or(u32::MAX).max(1)
    }
}

impl Default for ReadTimeEstimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn words(count: usize) -> String {
        vec!["word"; count].join(" ")
    }

    #[test]
    fn test_basic_estimation() {
        let estimator = ReadTimeEstimator::new();

        // Empty text still reads as one minute
        assert_eq!(estimator.estimate(""), 1);

        // 6 words / 200 -> ceil = 1
        assert_eq!(estimator.estimate("Hello world this is a test"), 1);
    }

    #[test]
    fn test_ceiling_behavior() {
        let estimator = ReadTimeEstimator::new();
        assert_eq!(estimator.estimate(&words(200)), 1);
        assert_eq!(estimator.estimate(&words(201)), 2);
        assert_eq!(estimator.estimate(&words(400)), 2);
        assert_eq!(estimator.estimate(&words(401)), 3);
    }

    #[test]
    fn test_custom_words_per_minute() {
        let estimator = ReadTimeEstimator::with_words_per_minute(100);
        assert_eq!(estimator.estimate(&words(150)), 2);

        // Zero speed does not divide by zero
        let estimator = ReadTimeEstimator::with_words_per_minute(0);
        assert_eq!(estimator.estimate(&words(3)), 3);
    }

    #[test]
    fn test_whitespace_handling() {
        assert_eq!(ReadTimeEstimator::count_words("   "), 0);
        assert_eq!(ReadTimeEstimator::count_words("a\n\tb   c"), 3);
        assert_eq!(ReadTimeEstimator::count_words(" leading and trailing "), 3);
    }

    #[test]
    fn test_default_trait() {
        let estimator = ReadTimeEstimator::default();
        assert_eq!(estimator.estimate(&words(1000)), 5);
    }

    proptest! {
        #[test]
        fn prop_estimate_matches_formula(count in 0usize..5000) {
            let expected = (count.div_ceil(200)).max(1) as u32;
            prop_assert_eq!(ReadTimeEstimator::new().estimate(&words(count)), expected);
        }

        #[test]
        fn prop_estimate_is_monotonic_under_appending(
            lhs in "[a-z ]{0,256}",
            rhs in "[a-z ]{0,256}",
        ) {
            let estimator = ReadTimeEstimator::with_words_per_minute(10);
            let combined = format!("{lhs} {rhs}");
            prop_assert!(estimator.estimate(&combined) >= estimator.estimate(&lhs));
        }
    }
}
