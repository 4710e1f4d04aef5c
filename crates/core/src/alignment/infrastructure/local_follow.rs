use crate::alignment::domain::alignment_strategy::{
    AlignmentDecision, AlignmentStrategy, DecisionKind, SearchContext,
};
use crate::alignment::domain::token_matcher::{TokenMatcher, TolerantMatcher};
use crate::shared::config::AlignmentTuning;

/// Single-word tracking for steady, in-order reading.
///
/// Only the most recent spoken word is consulted, and only the next
/// `reach + 1` script tokens starting at the cursor.
pub struct LocalFollow {
    reach: usize,
    matcher: Box<dyn TokenMatcher>,
}

impl LocalFollow {
    pub fn new(tuning: &AlignmentTuning) -> Self {
        Self {
            reach: tuning.local_follow_reach,
            matcher: Box::new(TolerantMatcher::new(tuning.min_stem_len, tuning.suffix_slack)),
        }
    }
}

impl AlignmentStrategy for LocalFollow {
    fn kind(&self) -> DecisionKind {
        DecisionKind::LocalFollow
    }

    fn search(&self, ctx: &SearchContext) -> Option<AlignmentDecision> {
        let last_word = ctx.spoken.last()?;
        let end = ctx.cursor.saturating_add(self.reach).min(ctx.visible.end);
        (ctx.cursor..=end)
            .find(|&i| self.matcher.matches(last_word, ctx.script.normalized(i)))
            .map(|i| AlignmentDecision::at(self.kind(), i))
    }
}
