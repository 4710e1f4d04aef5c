use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Calibration constants for matching and the search strategies.
///
/// These are empirical values tuned against observed recognizer output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentTuning {
    pub min_stem_len: usize,
    pub suffix_slack: usize,
    pub local_follow_reach: usize,
    pub backward_run: usize,
    pub near_reach: usize,
    pub near_run: usize,
    pub far_offset: usize,
    pub far_run: usize,
}

impl Default for AlignmentTuning {
    fn default() -> Self {
        Self {
            min_stem_len: DEFAULT_MIN_STEM_LEN,
            suffix_slack: DEFAULT_SUFFIX_SLACK,
            local_follow_reach: DEFAULT_LOCAL_FOLLOW_REACH,
            backward_run: DEFAULT_BACKWARD_RUN,
            near_reach: DEFAULT_NEAR_REACH,
            near_run: DEFAULT_NEAR_RUN,
            far_offset: DEFAULT_FAR_OFFSET,
            far_run: DEFAULT_FAR_RUN,
        }
    }
}

impl AlignmentTuning {
    /// Clamps values loaded from a settings file to the nearest workable
    /// ones: every run needs at least one word, and the suffix slack must
    /// leave a non-empty stem.
    pub fn sanitized(&self) -> Self {
        Self {
            suffix_slack: self
                .suffix_slack
                .min(self.min_stem_len.saturating_sub(1)),
            backward_run: self.backward_run.max(1),
            near_run: self.near_run.max(1),
            far_run: self.far_run.max(1),
            ..*self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub bounded_search: bool,
    pub max_visible_words: usize,
    pub voice_commands: bool,
    pub tuning: AlignmentTuning,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bounded_search: DEFAULT_BOUNDED_SEARCH,
            max_visible_words: DEFAULT_MAX_VISIBLE_WORDS,
            voice_commands: DEFAULT_VOICE_COMMANDS,
            tuning: AlignmentTuning::default(),
        }
    }
}

impl EngineConfig {
    /// `max_visible_words` with zero treated as one.
    pub fn effective_max_visible_words(&self) -> usize {
        self.max_visible_words.max(1)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        fs::write(path, json).map_err(io_err)
    }

    /// Platform settings file, e.g. `~/.config/Prompter/settings.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the platform settings file, falling back to defaults when it is
    /// missing or unreadable.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => config,
            Err(ConfigError::Io { .. }) => Self::default(),
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert!(config.bounded_search);
        assert_eq!(config.max_visible_words, DEFAULT_MAX_VISIBLE_WORDS);
        assert!(config.voice_commands);
        assert_eq!(config.tuning.suffix_slack, 2);
        assert_eq!(config.tuning.near_run, 4);
        assert_eq!(config.tuning.far_run, 5);
    }

    #[test]
    fn test_default_tuning_is_already_sane() {
        let tuning = AlignmentTuning::default();
        assert_eq!(tuning.sanitized(), tuning);
    }

    #[test]
    fn test_sanitized_clamps_slack_and_runs() {
        let tuning = AlignmentTuning {
            suffix_slack: 10,
            near_run: 0,
            far_run: 0,
            backward_run: 0,
            far_offset: usize::MAX,
            ..AlignmentTuning::default()
        }
        .sanitized();
        assert_eq!(tuning.suffix_slack, 3);
        assert_eq!(tuning.near_run, 1);
        assert_eq!(tuning.far_run, 1);
        assert_eq!(tuning.backward_run, 1);
        assert_eq!(tuning.far_offset, usize::MAX);
    }

    #[test]
    fn test_zero_visible_words_degrades_to_one() {
        let config = EngineConfig {
            max_visible_words: 0,
            ..EngineConfig::default()
        };
        assert_eq!(config.effective_max_visible_words(), 1);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let config = EngineConfig {
            bounded_search: false,
            max_visible_words: 12,
            voice_commands: false,
            tuning: AlignmentTuning {
                far_run: 6,
                ..AlignmentTuning::default()
            },
        };
        config.save(&path).unwrap();
        assert_eq!(EngineConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"max_visible_words": 30, "tuning": {"near_reach": 7}}"#).unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.max_visible_words, 30);
        assert!(config.bounded_search);
        assert_eq!(config.tuning.near_reach, 7);
        assert_eq!(config.tuning.near_run, DEFAULT_NEAR_RUN);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = EngineConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        let err = EngineConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("settings.json"));
    }
}
