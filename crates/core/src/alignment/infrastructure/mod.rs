pub mod backward_correction;
pub mod far_sequence;
pub mod local_follow;
pub mod near_sequence;

use crate::alignment::domain::alignment_strategy::AlignmentStrategy;
use crate::shared::config::AlignmentTuning;

/// Strategies in priority order: a confirmed regression wins over any
/// forward move, and shorter jumps win over longer ones.
pub fn default_strategies(tuning: &AlignmentTuning) -> Vec<Box<dyn AlignmentStrategy>> {
    let tuning = &tuning.sanitized();
    vec![
        Box::new(backward_correction::BackwardCorrection::new(tuning)),
        Box::new(local_follow::LocalFollow::new(tuning)),
        Box::new(near_sequence::NearSequence::new(tuning)),
        Box::new(far_sequence::FarSequence::new(tuning)),
    ]
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::domain::alignment_strategy::DecisionKind;

    #[test]
    fn test_default_priority_order() {
        let kinds: Vec<_> = default_strategies(&AlignmentTuning::default())
            .iter()
            .map(|s| s.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                DecisionKind::BackwardCorrection,
                DecisionKind::LocalFollow,
                DecisionKind::NearSequence,
                DecisionKind::FarSequence,
            ]
        );
    }

    fn first_decision(
        tuning: &AlignmentTuning,
        script: &str,
        words: &str,
        cursor: usize,
    ) -> Option<crate::alignment::domain::alignment_strategy::AlignmentDecision> {
        let script = crate::script::domain::script_tokenizer::ScriptTokenizer::tokenize(script);
        let words = test_support::spoken(words);
        let ctx = test_support::context(&script, &words, cursor);
        default_strategies(tuning).iter().find_map(|s| s.search(&ctx))
    }

    #[test]
    fn test_oversized_slack_keeps_a_stem() {
        let tuning = AlignmentTuning {
            suffix_slack: 10,
            ..AlignmentTuning::default()
        };
        assert!(first_decision(&tuning, "привет мир", "яблоко", 0).is_none());
        let d = first_decision(&tuning, "привет мир", "приветы", 0).unwrap();
        assert_eq!(d.kind, DecisionKind::LocalFollow);
        assert_eq!(d.highlight, 0);
    }

    #[test]
    fn test_huge_offsets_do_not_overflow() {
        let tuning = AlignmentTuning {
            far_offset: usize::MAX,
            near_reach: usize::MAX,
            local_follow_reach: usize::MAX,
            ..AlignmentTuning::default()
        };
        let script = test_support::numbered_script(30);
        assert!(first_decision(&tuning, &script, "w20 w21 w22 w23 w24", 0).is_some());
        assert!(first_decision(&tuning, &script, "nothing here", 3).is_none());
    }

    #[test]
    fn test_zero_run_lengths_fall_back_to_one() {
        let tuning = AlignmentTuning {
            near_run: 0,
            far_run: 0,
            backward_run: 0,
            ..AlignmentTuning::default()
        };
        let script = test_support::numbered_script(30);
        let d = first_decision(&tuning, &script, "w3", 0).unwrap();
        assert_eq!(d.highlight, 3);
    }
}
