/// One word of the reference script in reading order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptToken {
    pub index: usize,
    pub raw_text: String,
    pub normalized_text: String,
}

/// The immutable token sequence every alignment decision indexes into.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Script {
    tokens: Vec<ScriptToken>,
}

impl Script {
    pub fn new(tokens: Vec<ScriptToken>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[ScriptToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn last_index(&self) -> Option<usize> {
        self.tokens.len().checked_sub(1)
    }

    pub fn get(&self, index: usize) -> Option<&ScriptToken> {
        self.tokens.get(index)
    }

    /// Comparison form at `index`, or `""` past the end.
    pub fn normalized(&self, index: usize) -> &str {
        self.tokens
            .get(index)
            .map(|t| t.normalized_text.as_str())
            .unwrap_or("")
    }
}
