use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::pipeline::prompter_session::PrompterSession;
use crate::transcript::domain::hypothesis_source::HypothesisSource;

/// Configuration for a replay run.
pub struct ReplayConfig {
    pub cancelled: Arc<AtomicBool>,
    /// Called after each delivered event with the running event count.
    /// Returning `false` stops the replay.
    pub on_progress: Option<Box<dyn Fn(usize) -> bool + Send>>,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            on_progress: None,
        }
    }
}

/// Counters reported at the end of a replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub events: usize,
    pub decisions: usize,
}

/// Abstracts how a recorded hypothesis stream is pushed through a session.
///
/// The source must already be open. Events reach the session one at a time
/// in delivery order.
pub trait ReplayExecutor: Send {
    fn execute(
        &self,
        source: Box<dyn HypothesisSource>,
        session: &mut PrompterSession,
        config: ReplayConfig,
    ) -> Result<ReplayStats, Box<dyn std::error::Error>>;
}
