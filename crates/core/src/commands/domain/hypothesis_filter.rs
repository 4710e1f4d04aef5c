use crate::alignment::domain::alignment_state::AlignmentState;
use crate::transcript::domain::hypothesis::Hypothesis;

use super::voice_command::{CommandTable, VoiceCommand};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscardReason {
    EmptyHypothesis,
    /// The same command is still being spoken.
    RepeatedCommand,
    /// An interim result identical to the last one processed.
    DuplicateInterim,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterOutcome {
    Discard(DiscardReason),
    Command(VoiceCommand),
    Align(Hypothesis),
}

/// Gatekeeper run before any search: drops empty and repeated hypotheses
/// and intercepts navigation commands.
pub struct HypothesisFilter {
    commands: CommandTable,
}

impl HypothesisFilter {
    pub fn new(commands: CommandTable) -> Self {
        Self { commands }
    }

    pub fn filter(
        &self,
        raw_text: &str,
        is_final: bool,
        voice_commands: bool,
        state: &mut AlignmentState,
    ) -> FilterOutcome {
        let hypothesis = Hypothesis::from_raw(raw_text, is_final);
        if hypothesis.raw_key().is_empty() {
            return FilterOutcome::Discard(DiscardReason::EmptyHypothesis);
        }

        if voice_commands {
            match self.commands.detect(hypothesis.raw_key()) {
                Some(command) => {
                    let signature = command.signature();
                    if signature == state.last_command_key {
                        return FilterOutcome::Discard(DiscardReason::RepeatedCommand);
                    }
                    state.last_command_key = signature;
                    return FilterOutcome::Command(command);
                }
                None => state.last_command_key.clear(),
            }
        }

        if !hypothesis.is_final() && hypothesis.raw_key() == state.last_processed_key {
            return FilterOutcome::Discard(DiscardReason::DuplicateInterim);
        }
        state.last_processed_key = hypothesis.raw_key().to_string();
        FilterOutcome::Align(hypothesis)
    }
}

impl Default for HypothesisFilter {
    fn default() -> Self {
        Self::new(CommandTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(
        filter: &HypothesisFilter,
        state: &mut AlignmentState,
        text: &str,
        is_final: bool,
    ) -> FilterOutcome {
        filter.filter(text, is_final, true, state)
    }

    #[test]
    fn test_blank_hypothesis_is_discarded() {
        let filter = HypothesisFilter::default();
        let mut state = AlignmentState::default();
        assert_eq!(
            run(&filter, &mut state, "   ", true),
            FilterOutcome::Discard(DiscardReason::EmptyHypothesis)
        );
        assert!(state.last_processed_key.is_empty());
    }

    #[test]
    fn test_repeated_interim_is_discarded_once_seen() {
        let filter = HypothesisFilter::default();
        let mut state = AlignmentState::default();
        assert!(matches!(
            run(&filter, &mut state, "один два", false),
            FilterOutcome::Align(_)
        ));
        assert_eq!(
            run(&filter, &mut state, "Один  два ", false),
            FilterOutcome::Discard(DiscardReason::DuplicateInterim)
        );
    }

    #[test]
    fn test_final_repeat_is_still_aligned() {
        let filter = HypothesisFilter::default();
        let mut state = AlignmentState::default();
        run(&filter, &mut state, "один два", false);
        assert!(matches!(
            run(&filter, &mut state, "один два", true),
            FilterOutcome::Align(_)
        ));
    }

    #[test]
    fn test_changed_interim_passes() {
        let filter = HypothesisFilter::default();
        let mut state = AlignmentState::default();
        run(&filter, &mut state, "один", false);
        assert!(matches!(
            run(&filter, &mut state, "один два", false),
            FilterOutcome::Align(_)
        ));
        assert_eq!(state.last_processed_key, "один два");
    }

    #[test]
    fn test_command_fires_once_while_text_is_stable() {
        let filter = HypothesisFilter::default();
        let mut state = AlignmentState::default();
        assert!(matches!(
            run(&filter, &mut state, "перенос 5", false),
            FilterOutcome::Command(VoiceCommand { jump_back: 5, .. })
        ));
        for _ in 0..3 {
            assert_eq!(
                run(&filter, &mut state, "перенос 5", false),
                FilterOutcome::Discard(DiscardReason::RepeatedCommand)
            );
        }
        assert_eq!(
            run(&filter, &mut state, "перенос 5", true),
            FilterOutcome::Discard(DiscardReason::RepeatedCommand)
        );
    }

    #[test]
    fn test_command_rearms_after_text_changes() {
        let filter = HypothesisFilter::default();
        let mut state = AlignmentState::default();
        run(&filter, &mut state, "перенос 5", false);
        assert!(matches!(
            run(&filter, &mut state, "перенос 5 и дальше", false),
            FilterOutcome::Command(_)
        ));
    }

    #[test]
    fn test_command_rearms_after_it_disappears() {
        let filter = HypothesisFilter::default();
        let mut state = AlignmentState::default();
        run(&filter, &mut state, "перенос пять", true);
        assert!(matches!(
            run(&filter, &mut state, "читаем дальше", true),
            FilterOutcome::Align(_)
        ));
        assert!(state.last_command_key.is_empty());
        assert!(matches!(
            run(&filter, &mut state, "перенос пять", true),
            FilterOutcome::Command(_)
        ));
    }

    #[test]
    fn test_command_does_not_touch_processed_key() {
        let filter = HypothesisFilter::default();
        let mut state = AlignmentState::default();
        run(&filter, &mut state, "один", false);
        run(&filter, &mut state, "перенос 10", false);
        assert_eq!(state.last_processed_key, "один");
    }

    #[test]
    fn test_commands_disabled_are_aligned_as_speech() {
        let filter = HypothesisFilter::default();
        let mut state = AlignmentState::default();
        let outcome = filter.filter("перенос 5", true, false, &mut state);
        assert!(matches!(outcome, FilterOutcome::Align(_)));
        assert!(state.last_command_key.is_empty());
    }
}
