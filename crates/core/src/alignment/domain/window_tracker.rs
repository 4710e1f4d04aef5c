use crate::shared::config::EngineConfig;

use super::alignment_state::AlignmentState;

/// Inclusive range of script indices eligible for forward search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
}

impl VisibleRange {
    /// True when at least one token at or after `cursor` is in range.
    pub fn reaches(&self, cursor: usize) -> bool {
        self.end >= cursor
    }
}

/// Keeps the search window in step with the cursor.
///
/// The window hops forward in half-window steps instead of following the
/// cursor word by word, and snaps back after a backward correction.
pub struct WindowTracker {
    bounded: bool,
    max_visible_words: usize,
}

impl WindowTracker {
    pub fn new(bounded: bool, max_visible_words: usize) -> Self {
        Self {
            bounded,
            max_visible_words: max_visible_words.max(1),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.bounded_search, config.effective_max_visible_words())
    }

    pub fn shift_threshold(&self) -> usize {
        (self.max_visible_words / 2).max(1)
    }

    pub fn reconcile(&self, state: &mut AlignmentState) {
        if !self.bounded {
            return;
        }
        let threshold = self.shift_threshold();

        if state.cursor < state.window_start {
            state.window_start = state.cursor.saturating_sub(threshold);
        }
        while state.cursor - state.window_start >= threshold {
            state.window_start += threshold;
        }
    }

    /// Visible range for a script of `script_len` tokens, or `None` when the
    /// script is empty.
    pub fn visible_range(&self, state: &AlignmentState, script_len: usize) -> Option<VisibleRange> {
        let last = script_len.checked_sub(1)?;
        if !self.bounded {
            return Some(VisibleRange { start: 0, end: last });
        }
        let end = (state.window_start + self.max_visible_words - 1).min(last);
        Some(VisibleRange {
            start: state.window_start,
            end,
        })
    }
}
