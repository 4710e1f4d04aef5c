use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::pipeline::prompter_session::PrompterSession;
use crate::pipeline::replay_executor::{ReplayConfig, ReplayExecutor, ReplayStats};
use crate::transcript::domain::hypothesis_source::{HypothesisEvent, HypothesisSource};

const DEFAULT_CHANNEL_CAPACITY: usize = 32;

type SendError = Box<dyn std::error::Error + Send + Sync>;

/// Replays a hypothesis stream with a dedicated reader thread.
///
/// Layout: `reader → main [session]`
///
/// Parsing overlaps with alignment; the session itself is only touched from
/// the calling thread, so events are applied strictly in order.
pub struct ThreadedReplayExecutor {
    channel_capacity: usize,
}

impl ThreadedReplayExecutor {
    pub fn new() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    pub fn with_capacity(channel_capacity: usize) -> Self {
        Self {
            channel_capacity: channel_capacity.max(1),
        }
    }
}

impl Default for ThreadedReplayExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplayExecutor for ThreadedReplayExecutor {
    fn execute(
        &self,
        source: Box<dyn HypothesisSource>,
        session: &mut PrompterSession,
        config: ReplayConfig,
    ) -> Result<ReplayStats, Box<dyn std::error::Error>> {
        let (event_tx, event_rx) =
            crossbeam_channel::bounded::<Result<HypothesisEvent, SendError>>(self.channel_capacity);

        let reader_handle = spawn_reader(source, event_tx, config.cancelled.clone());

        let mut stats = ReplayStats::default();
        let main_error = run_main_loop(event_rx, session, &config, &mut stats);

        join_reader(reader_handle, main_error).map(|()| stats)
    }
}

fn spawn_reader(
    mut source: Box<dyn HypothesisSource>,
    event_tx: crossbeam_channel::Sender<Result<HypothesisEvent, SendError>>,
    cancelled: Arc<AtomicBool>,
) -> JoinHandle<Box<dyn HypothesisSource>> {
    std::thread::spawn(move || {
        for event_result in source.events() {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            let mapped = event_result.map_err(|e| -> SendError { e.to_string().into() });
            let failed = mapped.is_err();
            if event_tx.send(mapped).is_err() || failed {
                break;
            }
        }
        source.close();
        source
    })
}

/// Delivers events to the session until the stream ends, an error arrives,
/// or the run is cancelled.
fn run_main_loop(
    event_rx: crossbeam_channel::Receiver<Result<HypothesisEvent, SendError>>,
    session: &mut PrompterSession,
    config: &ReplayConfig,
    stats: &mut ReplayStats,
) -> Option<Box<dyn std::error::Error>> {
    for event_result in event_rx {
        if config.cancelled.load(Ordering::Relaxed) {
            break;
        }

        let event = match event_result {
            Ok(event) => event,
            Err(e) => return Some(e.to_string().into()),
        };

        if session.on_hypothesis(&event.text, event.is_final).is_some() {
            stats.decisions += 1;
        }
        stats.events += 1;

        if let Some(ref callback) = config.on_progress {
            if !callback(stats.events) {
                config.cancelled.store(true, Ordering::Relaxed);
                break;
            }
        }
    }

    None
}

fn join_reader(
    reader_handle: JoinHandle<Box<dyn HypothesisSource>>,
    main_error: Option<Box<dyn std::error::Error>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut first_error = main_error;

    if reader_handle.join().is_err() && first_error.is_none() {
        first_error = Some("Reader thread panicked".into());
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
