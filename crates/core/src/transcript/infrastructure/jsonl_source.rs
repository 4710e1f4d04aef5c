use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use super::{numbered_lines, open_lines, SourceError};
use crate::transcript::domain::hypothesis_source::{HypothesisEvent, HypothesisSource};

#[derive(Deserialize)]
struct JsonLine {
    text: String,
    #[serde(rename = "final", default = "default_final")]
    is_final: bool,
}

fn default_final() -> bool {
    true
}

/// Reads one JSON object per line: `{"text": "...", "final": false}`.
///
/// `final` defaults to `true`. Blank lines are skipped.
pub struct JsonLinesSource {
    reader: Option<BufReader<File>>,
    path: String,
}

impl JsonLinesSource {
    pub fn new() -> Self {
        Self {
            reader: None,
            path: String::new(),
        }
    }
}

impl Default for JsonLinesSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HypothesisSource for JsonLinesSource {
    fn open(&mut self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        self.reader = Some(open_lines(path)?);
        self.path = path.display().to_string();
        Ok(())
    }

    fn events(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<HypothesisEvent, Box<dyn std::error::Error>>> + '_> {
        let Some(reader) = self.reader.as_mut() else {
            return Box::new(std::iter::once(Err(SourceError::NotOpen.into())));
        };
        Box::new(numbered_lines(reader, &self.path).map(
            |line| -> Result<HypothesisEvent, Box<dyn std::error::Error>> {
                let (number, text) = line?;
                let parsed: JsonLine = serde_json::from_str(&text)
                    .map_err(|e| SourceError::Parse { line: number, source: e })?;
                Ok(HypothesisEvent {
                    text: parsed.text,
                    is_final: parsed.is_final,
                })
            },
        ))
    }

    fn close(&mut self) {
        self.reader = None;
    }
}
