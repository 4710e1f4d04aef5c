pub mod jsonl_source;
pub mod plain_text_source;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read hypotheses from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("source is not open")]
    NotOpen,
}

fn open_lines(path: &Path) -> Result<BufReader<File>, SourceError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| SourceError::Io {
            path: path.display().to_string(),
            source: e,
        })
}

/// Numbered non-blank lines, 1-based, with I/O errors surfaced per line.
fn numbered_lines<'a>(
    reader: &'a mut BufReader<File>,
    path: &'a str,
) -> impl Iterator<Item = Result<(usize, String), SourceError>> + 'a {
    reader
        .lines()
        .enumerate()
        .filter_map(move |(i, line)| match line {
            Ok(text) if text.trim().is_empty() => None,
            Ok(text) => Some(Ok((i + 1, text))),
            Err(e) => Some(Err(SourceError::Io {
                path: path.to_string(),
                source: e,
            })),
        })
}
