use crate::shared::text::{clean_word, collapse_whitespace};

/// Turns a raw recognizer string into comparison tokens.
pub struct TranscriptNormalizer;

impl TranscriptNormalizer {
    pub fn normalize(raw: &str) -> Vec<String> {
        raw.split_whitespace()
            .map(clean_word)
            .filter(|w| !w.is_empty())
            .collect()
    }

    /// Lowercased, trimmed, whitespace-collapsed text used for deduplication.
    pub fn key(raw: &str) -> String {
        collapse_whitespace(&raw.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::simple("один два", &["один", "два"])]
    #[case::case_and_spacing("  Один   ДВА\tтри ", &["один", "два", "три"])]
    #[case::punctuation("Ну, что ж... начнём!", &["ну", "что", "ж", "начнём"])]
    #[case::drops_empty_words("раз — - два", &["раз", "—", "два"])]
    #[case::blank("   ", &[])]
    fn test_normalize(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(TranscriptNormalizer::normalize(raw), expected);
    }

    #[test]
    fn test_key_keeps_punctuation() {
        assert_eq!(TranscriptNormalizer::key("  Привет,   Мир "), "привет, мир");
    }
}
