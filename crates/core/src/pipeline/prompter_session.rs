use std::time::Instant;

use crate::alignment::alignment_engine::AlignmentEngine;
use crate::alignment::domain::alignment_strategy::AlignmentDecision;
use crate::pipeline::presentation_sink::PresentationSink;
use crate::pipeline::session_logger::SessionLogger;
use crate::shared::config::EngineConfig;

/// Wires recognizer events through the engine to a presentation sink.
///
/// The session only forwards events while listening. Starting or stopping
/// resets the engine so every listening period begins at the top of the
/// script.
pub struct PrompterSession {
    engine: AlignmentEngine,
    sink: Box<dyn PresentationSink>,
    logger: Box<dyn SessionLogger>,
    listening: bool,
}

impl PrompterSession {
    pub fn new(
        engine: AlignmentEngine,
        sink: Box<dyn PresentationSink>,
        logger: Box<dyn SessionLogger>,
    ) -> Self {
        Self {
            engine,
            sink,
            logger,
            listening: false,
        }
    }

    /// Replaces the script and hands the new tokens to the sink.
    /// Returns the number of script tokens.
    pub fn load_script(&mut self, text: &str) -> usize {
        let tokens = self.engine.load_script(text);
        let count = tokens.len();
        self.sink.on_script_loaded(tokens);
        self.logger.info(&format!("Loaded script with {count} words"));
        count
    }

    pub fn start_listening(&mut self) {
        self.engine.reset();
        self.listening = true;
        self.logger.info("Listening started");
    }

    pub fn stop_listening(&mut self) {
        self.engine.reset();
        self.listening = false;
        self.logger.info("Listening stopped");
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn set_config(&mut self, config: EngineConfig) {
        self.engine.set_config(config);
    }

    pub fn engine(&self) -> &AlignmentEngine {
        &self.engine
    }

    /// Feeds one recognizer event. Returns the decision applied, if any.
    pub fn on_hypothesis(&mut self, raw_text: &str, is_final: bool) -> Option<AlignmentDecision> {
        if !self.listening {
            return None;
        }

        let t0 = Instant::now();
        let decision = self.engine.on_hypothesis(raw_text, is_final);
        self.logger
            .timing("align", t0.elapsed().as_secs_f64() * 1000.0);

        let decision = decision?;
        self.sink.on_highlight(decision.highlight);
        self.sink.on_scroll_target(decision.scroll_target);
        self.logger.decision(&decision);
        Some(decision)
    }

    /// Ends the session and emits the logger summary.
    pub fn finish(&mut self) {
        if self.listening {
            self.stop_listening();
        }
        self.logger.summary();
    }
}
