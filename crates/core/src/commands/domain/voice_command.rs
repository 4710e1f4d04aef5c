use crate::shared::text::collapse_whitespace;

/// A recognized spoken navigation command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoiceCommand {
    /// Words to move the cursor back.
    pub jump_back: usize,
    /// The cleaned hypothesis text the command was found in.
    pub cleaned_text: String,
}

impl VoiceCommand {
    /// Identity used to fire a command once while its text settles.
    pub fn signature(&self) -> String {
        format!("{}{}", self.jump_back, self.cleaned_text)
    }
}

/// `trigger [filler] magnitude`, e.g. `перенос на пять`.
#[derive(Clone, Debug)]
pub struct CommandPattern {
    pub trigger: String,
    pub fillers: Vec<String>,
    pub magnitudes: Vec<(String, usize)>,
}

impl CommandPattern {
    fn magnitude(&self, word: &str) -> Option<usize> {
        self.magnitudes
            .iter()
            .find(|(w, _)| w == word)
            .map(|&(_, amount)| amount)
    }

    /// Jump size if the pattern occurs anywhere in `words`.
    fn find_in(&self, words: &[&str]) -> Option<usize> {
        words
            .iter()
            .enumerate()
            .filter(|(_, w)| **w == self.trigger)
            .find_map(|(i, _)| {
                let mut next = i + 1;
                if words.get(next).is_some_and(|w| self.fillers.iter().any(|f| f == w)) {
                    next += 1;
                }
                words.get(next).and_then(|w| self.magnitude(w))
            })
    }
}

/// Declarative table of navigation commands.
#[derive(Clone, Debug)]
pub struct CommandTable {
    patterns: Vec<CommandPattern>,
}

impl CommandTable {
    pub fn new(patterns: Vec<CommandPattern>) -> Self {
        Self { patterns }
    }

    /// Keeps latin letters, Cyrillic letters, digits and spaces.
    pub fn clean(text: &str) -> String {
        let kept: String = text
            .to_lowercase()
            .chars()
            .map(|c| if c.is_whitespace() { ' ' } else { c })
            .filter(|c| matches!(c, 'a'..='z' | 'а'..='я' | 'ё' | '0'..='9' | ' '))
            .collect();
        collapse_whitespace(&kept)
    }

    pub fn detect(&self, text: &str) -> Option<VoiceCommand> {
        let cleaned = Self::clean(text);
        let words: Vec<&str> = cleaned.split(' ').collect();
        let jump_back = self.patterns.iter().find_map(|p| p.find_in(&words))?;
        Some(VoiceCommand {
            jump_back,
            cleaned_text: cleaned,
        })
    }
}

impl Default for CommandTable {
    /// "перенос [на] пять|5|десять|10": move back five or ten words.
    fn default() -> Self {
        let magnitudes = [("пять", 5), ("5", 5), ("десять", 10), ("10", 10)]
            .into_iter()
            .map(|(w, n)| (w.to_string(), n))
            .collect();
        Self::new(vec![CommandPattern {
            trigger: "перенос".to_string(),
            fillers: vec!["на".to_string()],
            magnitudes,
        }])
    }
}
