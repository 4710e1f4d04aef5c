/// Mutable tracking state for one listening session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlignmentState {
    /// Index of the next script token expected to be spoken.
    pub cursor: usize,
    /// Lower bound of the searchable range in bounded mode. May lag the
    /// cursor until the next reconciliation.
    pub window_start: usize,
    pub last_processed_key: String,
    pub last_command_key: String,
}

impl AlignmentState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
