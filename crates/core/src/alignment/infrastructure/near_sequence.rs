use crate::alignment::domain::alignment_strategy::{
    AlignmentDecision, AlignmentStrategy, DecisionKind, SearchContext,
};
use crate::alignment::domain::match_run::MatchRun;
use crate::alignment::domain::token_matcher::{TokenMatcher, TolerantMatcher};
use crate::shared::config::AlignmentTuning;

/// Short forward skip confirmed by a run of tolerant matches.
///
/// Candidate starts range from the cursor to `cursor + reach`; the lowest
/// qualifying start wins.
pub struct NearSequence {
    reach: usize,
    run_length: usize,
    matcher: Box<dyn TokenMatcher>,
}

impl NearSequence {
    pub fn new(tuning: &AlignmentTuning) -> Self {
        Self {
            reach: tuning.near_reach,
            run_length: tuning.near_run,
            matcher: Box::new(TolerantMatcher::new(tuning.min_stem_len, tuning.suffix_slack)),
        }
    }
}

impl AlignmentStrategy for NearSequence {
    fn kind(&self) -> DecisionKind {
        DecisionKind::NearSequence
    }

    fn search(&self, ctx: &SearchContext) -> Option<AlignmentDecision> {
        // The whole run must fit inside the visible range.
        let last_start = (ctx.visible.end + 1).checked_sub(self.run_length)?;
        let end = ctx.cursor.saturating_add(self.reach).min(last_start);
        (ctx.cursor..=end)
            .find_map(|start| {
                MatchRun::find_at(ctx.script, start, ctx.spoken, self.run_length, &*self.matcher)
            })
            .map(|run| AlignmentDecision::from_run(self.kind(), run))
    }
}
