use crate::pipeline::presentation_sink::PresentationSink;
use crate::script::domain::script_token::ScriptToken;

/// Decorator that scrolls a few words past the engine's scroll target so
/// the upcoming text stays on screen.
///
/// Highlights pass through untouched. The scroll target is clamped to the
/// last word of the current script.
pub struct LookaheadSink {
    inner: Box<dyn PresentationSink>,
    offset: usize,
    script_len: usize,
}

impl LookaheadSink {
    pub fn new(inner: Box<dyn PresentationSink>, offset: usize) -> Self {
        Self {
            inner,
            offset,
            script_len: 0,
        }
    }

    fn shifted(&self, script_index: usize) -> usize {
        match self.script_len.checked_sub(1) {
            Some(last) => (script_index + self.offset).min(last),
            None => script_index,
        }
    }
}

impl PresentationSink for LookaheadSink {
    fn on_script_loaded(&mut self, tokens: &[ScriptToken]) {
        self.script_len = tokens.len();
        self.inner.on_script_loaded(tokens);
    }

    fn on_highlight(&mut self, script_index: usize) {
        self.inner.on_highlight(script_index);
    }

    fn on_scroll_target(&mut self, script_index: usize) {
        let target = self.shifted(script_index);
        self.inner.on_scroll_target(target);
    }
}
