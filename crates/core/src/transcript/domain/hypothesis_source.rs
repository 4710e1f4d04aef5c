use std::path::Path;

/// A single recognizer event as delivered to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HypothesisEvent {
    pub text: String,
    pub is_final: bool,
}

impl HypothesisEvent {
    pub fn interim(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_final: false,
        }
    }

    pub fn finished(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_final: true,
        }
    }
}

/// Reads a recorded stream of recognizer events.
///
/// Implementations own the file format; the session only sees
/// `HypothesisEvent`s in delivery order.
pub trait HypothesisSource: Send {
    fn open(&mut self, path: &Path) -> Result<(), Box<dyn std::error::Error>>;

    /// Returns an iterator over events in delivery order.
    fn events(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<HypothesisEvent, Box<dyn std::error::Error>>> + '_>;

    fn close(&mut self);
}
