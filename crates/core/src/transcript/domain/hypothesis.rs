use super::transcript_normalizer::TranscriptNormalizer;

/// One snapshot of recognized speech, possibly revised by later events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hypothesis {
    tokens: Vec<String>,
    is_final: bool,
    raw_key: String,
}

impl Hypothesis {
    pub fn from_raw(raw: &str, is_final: bool) -> Self {
        Self {
            tokens: TranscriptNormalizer::normalize(raw),
            is_final,
            raw_key: TranscriptNormalizer::key(raw),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn raw_key(&self) -> &str {
        &self.raw_key
    }
}
