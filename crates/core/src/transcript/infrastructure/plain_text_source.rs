use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::{numbered_lines, open_lines, SourceError};
use crate::transcript::domain::hypothesis_source::{HypothesisEvent, HypothesisSource};

const INTERIM_MARKER: char = '~';

/// Reads one hypothesis per line. Lines starting with `~` are interim
/// results; all others are final.
pub struct PlainTextSource {
    reader: Option<BufReader<File>>,
    path: String,
}

impl PlainTextSource {
    pub fn new() -> Self {
        Self {
            reader: None,
            path: String::new(),
        }
    }

    fn parse_line(line: &str) -> HypothesisEvent {
        match line.trim_start().strip_prefix(INTERIM_MARKER) {
            Some(rest) => HypothesisEvent::interim(rest.trim()),
            None => HypothesisEvent::finished(line.trim()),
        }
    }
}

impl Default for PlainTextSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HypothesisSource for PlainTextSource {
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
                let (_, text) = line?;
                Ok(Self::parse_line(&text))
            },
        ))
    }

    fn close(&mut self) {
        self.reader = None;
    }
}
