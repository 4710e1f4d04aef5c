use log::{debug, info, trace};

use crate::alignment::domain::alignment_state::AlignmentState;
use crate::alignment::domain::alignment_strategy::{
    AlignmentDecision, AlignmentStrategy, DecisionKind, SearchContext,
};
use crate::alignment::domain::window_tracker::WindowTracker;
use crate::alignment::infrastructure::default_strategies;
use crate::commands::domain::hypothesis_filter::{FilterOutcome, HypothesisFilter};
use crate::script::domain::script_token::{Script, ScriptToken};
use crate::script::domain::script_tokenizer::ScriptTokenizer;
use crate::shared::config::EngineConfig;
use crate::transcript::domain::hypothesis::Hypothesis;

/// Keeps a cursor in the reference script in step with live speech.
///
/// Each hypothesis produces at most one decision. Most produce none:
/// interim fragments and off-script noise leave the state untouched.
pub struct AlignmentEngine {
    script: Script,
    state: AlignmentState,
    config: EngineConfig,
    filter: HypothesisFilter,
    strategies: Vec<Box<dyn AlignmentStrategy>>,
}

impl AlignmentEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_parts(config, HypothesisFilter::default())
    }

    pub fn with_parts(config: EngineConfig, filter: HypothesisFilter) -> Self {
        let strategies = default_strategies(&config.tuning);
        Self {
            script: Script::default(),
            state: AlignmentState::default(),
            config,
            filter,
            strategies,
        }
    }

    /// Replaces the reference script and starts tracking from its beginning.
    pub fn load_script(&mut self, text: &str) -> &[ScriptToken] {
        self.script = ScriptTokenizer::tokenize(text);
        self.state.reset();
        info!("Loaded script: {} words", self.script.len());
        self.script.tokens()
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Applies new settings from the next event on. Tracking state is kept.
    pub fn set_config(&mut self, config: EngineConfig) {
        if config.tuning != self.config.tuning {
            self.strategies = default_strategies(&config.tuning);
        }
        self.config = config;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn state(&self) -> &AlignmentState {
        &self.state
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor
    }

    pub fn on_hypothesis(&mut self, raw_text: &str, is_final: bool) -> Option<AlignmentDecision> {
        let outcome = self.filter.filter(
            raw_text,
            is_final,
            self.config.voice_commands,
            &mut self.state,
        );
        match outcome {
            FilterOutcome::Discard(reason) => {
                trace!("Hypothesis discarded: {reason:?}");
                None
            }
            FilterOutcome::Command(command) => self.jump_back(command.jump_back),
            FilterOutcome::Align(hypothesis) => self.align(&hypothesis),
        }
    }

    fn jump_back(&mut self, amount: usize) -> Option<AlignmentDecision> {
        let last = self.script.last_index()?;
        let from = self.state.cursor;
        self.state.cursor = from.saturating_sub(amount).min(self.script.len());
        self.state.window_start = self.state.window_start.min(self.state.cursor);

        let target = self.state.cursor.saturating_sub(1).min(last);
        debug!(
            "Voice command: back {amount} words, cursor {from} -> {}",
            self.state.cursor
        );
        Some(AlignmentDecision {
            kind: DecisionKind::VoiceCommand,
            cursor: self.state.cursor,
            highlight: target,
            scroll_target: target,
        })
    }

    fn align(&mut self, hypothesis: &Hypothesis) -> Option<AlignmentDecision> {
        let tracker = WindowTracker::from_config(&self.config);
        tracker.reconcile(&mut self.state);

        if hypothesis.tokens().is_empty() {
            return None;
        }
        let visible = tracker.visible_range(&self.state, self.script.len())?;
        if !visible.reaches(self.state.cursor) {
            trace!(
                "Nothing left to search: cursor {} past visible end {}",
                self.state.cursor,
                visible.end
            );
            return None;
        }

        let ctx = SearchContext {
            script: &self.script,
            spoken: hypothesis.tokens(),
            cursor: self.state.cursor,
            visible,
        };
        let decision = self.strategies.iter().find_map(|s| s.search(&ctx))?;

        let word = self
            .script
            .get(decision.highlight)
            .map(|t| t.raw_text.as_str())
            .unwrap_or("");
        debug!(
            "{}: cursor {} -> {}, highlight {} ({word})",
            decision.kind, self.state.cursor, decision.cursor, decision.highlight
        );
        self.state.cursor = decision.cursor;
        Some(decision)
    }
}

impl Default for AlignmentEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
