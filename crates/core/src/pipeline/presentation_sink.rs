use crate::script::domain::script_token::ScriptToken;

/// Receives the engine's output. Owns everything visual: word elements,
/// highlight painting, scrolling.
pub trait PresentationSink: Send {
    /// Called when a new script replaces the old one. Default: no-op.
    fn on_script_loaded(&mut self, _tokens: &[ScriptToken]) {}

    fn on_highlight(&mut self, script_index: usize);

    fn on_scroll_target(&mut self, script_index: usize);
}

/// Sink that ignores all output. Used in tests and headless replays.
pub struct NullPresentationSink;

impl PresentationSink for NullPresentationSink {
    fn on_highlight(&mut self, _script_index: usize) {}
    fn on_scroll_target(&mut self, _script_index: usize) {}
}
