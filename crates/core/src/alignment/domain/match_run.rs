use crate::script::domain::script_token::Script;

use super::token_matcher::TokenMatcher;

/// A contiguous block of consecutive script tokens confirmed by speech.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchRun {
    pub script_start: usize,
    pub length: usize,
}

impl MatchRun {
    /// Index just past the run: where the cursor lands once it is accepted.
    pub fn end(&self) -> usize {
        self.script_start + self.length
    }

    /// Index of the last matched script token.
    pub fn last(&self) -> usize {
        self.end().saturating_sub(1)
    }

    /// Looks for `length` consecutive matches starting at `script_start`
    /// against any contiguous window of `spoken`.
    pub fn find_at(
        script: &Script,
        script_start: usize,
        spoken: &[String],
        length: usize,
        matcher: &dyn TokenMatcher,
    ) -> Option<MatchRun> {
        if length == 0 || spoken.len() < length || script_start + length > script.len() {
            return None;
        }

        let found = spoken.windows(length).any(|window| {
            window
                .iter()
                .enumerate()
                .all(|(offset, word)| matcher.matches(word, script.normalized(script_start + offset)))
        });

        found.then_some(MatchRun {
            script_start,
            length,
        })
    }
}
