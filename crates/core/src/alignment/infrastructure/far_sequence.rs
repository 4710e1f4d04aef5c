use crate::alignment::domain::alignment_strategy::{
    AlignmentDecision, AlignmentStrategy, DecisionKind, SearchContext,
};
use crate::alignment::domain::match_run::MatchRun;
use crate::alignment::domain::token_matcher::{StrictMatcher, TokenMatcher};
use crate::shared::config::AlignmentTuning;

/// Long forward skip. Needs a longer run than a near skip, and every word
/// must match exactly, since a coincidental hit far ahead is costly.
pub struct FarSequence {
    offset: usize,
    run_length: usize,
    matcher: Box<dyn TokenMatcher>,
}

impl FarSequence {
    pub fn new(tuning: &AlignmentTuning) -> Self {
        Self {
            offset: tuning.far_offset,
            run_length: tuning.far_run,
            matcher: Box::new(StrictMatcher),
        }
    }
}

impl AlignmentStrategy for FarSequence {
    fn kind(&self) -> DecisionKind {
        DecisionKind::FarSequence
    }

    fn search(&self, ctx: &SearchContext) -> Option<AlignmentDecision> {
        let last_start = (ctx.visible.end + 1).checked_sub(self.run_length)?;
        (ctx.cursor.saturating_add(self.offset)..=last_start)
            .find_map(|start| {
                MatchRun::find_at(ctx.script, start, ctx.spoken, self.run_length, &*self.matcher)
            })
            .map(|run| AlignmentDecision::from_run(self.kind(), run))
    }
}
