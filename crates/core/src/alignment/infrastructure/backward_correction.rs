use crate::alignment::domain::alignment_strategy::{
    AlignmentDecision, AlignmentStrategy, DecisionKind, SearchContext,
};
use crate::alignment::domain::match_run::MatchRun;
use crate::alignment::domain::token_matcher::{TokenMatcher, TolerantMatcher};
use crate::shared::config::AlignmentTuning;

/// Detects the reader going back over text already passed.
///
/// The right-most spoken window that matches the script anchors the search,
/// so a prefix already confirmed earlier in a growing hypothesis cannot
/// fire again. Among script positions for that window, the one ending
/// closest to the cursor wins. A decision is only made when the run ends
/// strictly before the cursor.
pub struct BackwardCorrection {
    run_length: usize,
    matcher: Box<dyn TokenMatcher>,
}

impl BackwardCorrection {
    pub fn new(tuning: &AlignmentTuning) -> Self {
        Self {
            run_length: tuning.backward_run,
            matcher: Box::new(TolerantMatcher::new(tuning.min_stem_len, tuning.suffix_slack)),
        }
    }
}

impl AlignmentStrategy for BackwardCorrection {
    fn kind(&self) -> DecisionKind {
        DecisionKind::BackwardCorrection
    }

    fn search(&self, ctx: &SearchContext) -> Option<AlignmentDecision> {
        let run_length = self.run_length;
        let upper = (ctx.visible.end + 1).max(ctx.cursor).min(ctx.script.len());
        let last_start = upper.checked_sub(run_length)?;
        let last_offset = ctx.spoken.len().checked_sub(run_length)?;

        let anchored = (0..=last_offset).rev().find_map(|offset| {
            let window = &ctx.spoken[offset..offset + run_length];
            (0..=last_start)
                .rev()
                .filter_map(|start| {
                    MatchRun::find_at(ctx.script, start, window, run_length, &*self.matcher)
                })
                .min_by_key(|run| run.end().abs_diff(ctx.cursor))
        })?;

        (anchored.end() < ctx.cursor).then(|| AlignmentDecision::from_run(self.kind(), anchored))
    }
}
