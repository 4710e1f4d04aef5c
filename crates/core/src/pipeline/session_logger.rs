use std::collections::HashMap;
use std::time::Instant;

use crate::alignment::domain::alignment_strategy::AlignmentDecision;

/// Observer for session events, kept apart from the output sink so callers
/// can collect diagnostics without touching the presentation path.
pub trait SessionLogger: Send {
    /// Record an accepted cursor move.
    fn decision(&mut self, decision: &AlignmentDecision);

    /// Record how long a named stage took for one hypothesis.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-session summary. Default: no-op.
    fn summary(&self) {}
}

pub struct NullSessionLogger;

impl SessionLogger for NullSessionLogger {
    fn decision(&mut self, _decision: &AlignmentDecision) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// Aggregates decisions per strategy and per-stage timings, and reports
/// them through the `log` crate.
pub struct StdoutSessionLogger {
    timings: HashMap<String, Vec<f64>>,
    decisions: HashMap<&'static str, usize>,
    start_time: Instant,
    last_highlight: Option<usize>,
    messages: Vec<String>,
}

impl StdoutSessionLogger {
    pub fn new() -> Self {
        Self {
            timings: HashMap::new(),
            decisions: HashMap::new(),
            start_time: Instant::now(),
            last_highlight: None,
            messages: Vec::new(),
        }
    }

    pub fn decision_count(&self, label: &str) -> usize {
        self.decisions.get(label).copied().unwrap_or(0)
    }

    pub fn total_decisions(&self) -> usize {
        self.decisions.values().sum()
    }

    pub fn timings_for(&self, stage: &str) -> Option<&[f64]> {
        self.timings.get(stage).map(|v| v.as_slice())
    }

    /// Returns the formatted summary string, or `None` if nothing was recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() && self.decisions.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let events = self.timings.values().map(Vec::len).max().unwrap_or(0);
        let mut lines = Vec::new();

        lines.push(format!(
            "Session summary ({events} hypotheses, {} decisions, {:.1}s total):",
            self.total_decisions(),
            elapsed_ms / 1000.0
        ));

        let mut labels: Vec<_> = self.decisions.keys().collect();
        labels.sort();
        for label in labels {
            lines.push(format!("  {label:20}: {}", self.decisions[label]));
        }

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let durations = &self.timings[stage];
            let total_ms: f64 = durations.iter().sum();
            let avg_ms = if durations.is_empty() {
                0.0
            } else {
                total_ms / durations.len() as f64
            };
            let max_ms = durations.iter().copied().fold(0.0, f64::max);
            lines.push(format!(
                "  {stage:20}: avg {avg_ms:6.3}ms  max {max_ms:6.3}ms"
            ));
        }

        if let Some(index) = self.last_highlight {
            lines.push(format!("  Last highlight: word {index}"));
        }

        Some(lines.join("\n"))
    }
}

impl Default for StdoutSessionLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionLogger for StdoutSessionLogger {
    fn decision(&mut self, decision: &AlignmentDecision) {
        *self.decisions.entry(decision.kind.label()).or_default() += 1;
        self.last_highlight = Some(decision.highlight);
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.timings
            .entry(stage.to_string())
            .or_default()
            .push(duration_ms);
    }

    fn info(&mut self, message: &str) {
        self.messages.push(message.to_string());
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}
