use crate::shared::constants::{DEFAULT_MIN_STEM_LEN, DEFAULT_SUFFIX_SLACK};

/// Decides whether a normalized spoken word matches a normalized script word.
pub trait TokenMatcher: Send + Sync {
    fn matches(&self, spoken: &str, script: &str) -> bool;
}

/// Exact equality only. Used where a false positive costs a long jump.
pub struct StrictMatcher;

impl TokenMatcher for StrictMatcher {
    fn matches(&self, spoken: &str, script: &str) -> bool {
        !spoken.is_empty() && spoken == script
    }
}

/// Equality, or a shared stem when both words are long enough.
///
/// The stem is the shorter word minus `suffix_slack` trailing characters,
/// so inflected endings such as `делать` / `делаешь` still match. Only
/// suffix drift is tolerated: the words must agree from the first
/// character. Lengths are counted in characters, not bytes.
pub struct TolerantMatcher {
    min_stem_len: usize,
    suffix_slack: usize,
}

impl TolerantMatcher {
    pub fn new(min_stem_len: usize, suffix_slack: usize) -> Self {
        Self {
            min_stem_len,
            suffix_slack,
        }
    }
}

impl Default for TolerantMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_STEM_LEN, DEFAULT_SUFFIX_SLACK)
    }
}

impl TokenMatcher for TolerantMatcher {
    fn matches(&self, spoken: &str, script: &str) -> bool {
        if spoken.is_empty() || script.is_empty() {
            return false;
        }
        if spoken == script {
            return true;
        }

        let spoken_len = spoken.chars().count();
        let script_len = script.chars().count();
        if spoken_len <= self.min_stem_len || script_len <= self.min_stem_len {
            return false;
        }

        let stem_len = spoken_len.min(script_len).saturating_sub(self.suffix_slack);
        spoken
            .chars()
            .take(stem_len)
            .eq(script.chars().take(stem_len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::exact_short("кот", "кот", true)]
    #[case::different_short("кот", "кит", false)]
    #[case::inflected_ending("делать", "делаешь", true)]
    #[case::inflected_ending_reversed("делаешь", "делать", true)]
    #[case::plural("машины", "машина", true)]
    #[case::four_chars_need_exact("дома", "домы", false)]
    #[case::prefix_drift("сделать", "делать", false)]
    #[case::stem_mismatch("работать", "рабочий", false)]
    #[case::latin("running", "runner", true)]
    #[case::empty_spoken("", "слово", false)]
    #[case::empty_script("слово", "", false)]
    #[case::both_empty("", "", false)]
    fn test_tolerant(#[case] spoken: &str, #[case] script: &str, #[case] expected: bool) {
        assert_eq!(TolerantMatcher::default().matches(spoken, script), expected);
    }

    #[rstest]
    #[case::exact("делать", "делать", true)]
    #[case::inflected("делать", "делаешь", false)]
    #[case::empty("", "", false)]
    fn test_strict(#[case] spoken: &str, #[case] script: &str, #[case] expected: bool) {
        assert_eq!(StrictMatcher.matches(spoken, script), expected);
    }

    #[test]
    fn test_zero_slack_requires_prefix_of_shorter_word() {
        let matcher = TolerantMatcher::new(4, 0);
        assert!(matcher.matches("делать", "делаться"));
        assert!(!matcher.matches("делать", "делаешь"));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // Five Cyrillic characters are ten bytes.
        let matcher = TolerantMatcher::default();
        assert!(matcher.matches("книги", "книга"));
    }
}
