use crate::script::domain::script_token::Script;

use super::match_run::MatchRun;
use super::window_tracker::VisibleRange;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecisionKind {
    VoiceCommand,
    BackwardCorrection,
    LocalFollow,
    NearSequence,
    FarSequence,
}

impl DecisionKind {
    pub fn label(&self) -> &'static str {
        match self {
            DecisionKind::VoiceCommand => "voice_command",
            DecisionKind::BackwardCorrection => "backward_correction",
            DecisionKind::LocalFollow => "local_follow",
            DecisionKind::NearSequence => "near_sequence",
            DecisionKind::FarSequence => "far_sequence",
        }
    }
}

impl std::fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One accepted cursor move and what the presentation layer should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlignmentDecision {
    pub kind: DecisionKind,
    /// New cursor position.
    pub cursor: usize,
    pub highlight: usize,
    pub scroll_target: usize,
}

impl AlignmentDecision {
    /// A single matched token at `index`.
    pub fn at(kind: DecisionKind, index: usize) -> Self {
        Self {
            kind,
            cursor: index + 1,
            highlight: index,
            scroll_target: index,
        }
    }

    /// A confirmed run: the cursor moves past it, the last word is shown.
    pub fn from_run(kind: DecisionKind, run: MatchRun) -> Self {
        Self {
            kind,
            cursor: run.end(),
            highlight: run.last(),
            scroll_target: run.last(),
        }
    }
}

/// Read-only view of everything a strategy may consult.
pub struct SearchContext<'a> {
    pub script: &'a Script,
    pub spoken: &'a [String],
    pub cursor: usize,
    pub visible: VisibleRange,
}

/// One way of locating the reader in the script.
///
/// The engine asks its strategies in priority order and applies the first
/// decision returned.
pub trait AlignmentStrategy: Send {
    fn kind(&self) -> DecisionKind;

    fn search(&self, ctx: &SearchContext) -> Option<AlignmentDecision>;
}
