use crate::shared::text::clean_word;

use super::script_token::{Script, ScriptToken};

pub struct ScriptTokenizer;

impl ScriptTokenizer {
    /// Splits `text` on whitespace runs. A word made only of punctuation
    /// keeps its slot with an empty normalized form, which never matches.
    pub fn tokenize(text: &str) -> Script {
        let tokens = text
            .split_whitespace()
            .enumerate()
            .map(|(index, word)| ScriptToken {
                index,
                raw_text: word.to_string(),
                normalized_text: clean_word(word),
            })
            .collect();
        Script::new(tokens)
    }
}
