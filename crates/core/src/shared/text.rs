/// Characters removed from every word before comparison.
pub const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`',
    '~', '(', ')',
];

pub fn strip_punctuation(word: &str) -> String {
    word.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}

/// Lowercases a single word and strips [`PUNCTUATION`] from it.
pub fn clean_word(word: &str) -> String {
    strip_punctuation(&word.to_lowercase())
}

/// Trims and collapses every run of whitespace into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("слово", "слово")]
    #[case::trailing_comma("Привет,", "привет")]
    #[case::parens("(текст)", "текст")]
    #[case::hyphenated("кое-что", "коечто")]
    #[case::only_punctuation("--", "")]
    #[case::keeps_question_mark("что?", "что?")]
    fn test_clean_word(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(clean_word(input), expected);
    }

    #[test]
    fn test_clean_word_lowercases_yo() {
        assert_eq!(clean_word("ЁЖИК"), "ёжик");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  один \t два\n\nтри "), "один два три");
    }

    #[test]
    fn test_collapse_whitespace_blank_is_empty() {
        assert_eq!(collapse_whitespace(" \n\t "), "");
    }
}
