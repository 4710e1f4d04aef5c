pub const DEFAULT_BOUNDED_SEARCH: bool = true;
pub const DEFAULT_MAX_VISIBLE_WORDS: usize = 50;
pub const DEFAULT_VOICE_COMMANDS: bool = true;

/// Both words must be longer than this for suffix-tolerant matching.
pub const DEFAULT_MIN_STEM_LEN: usize = 4;
/// Trailing characters allowed to diverge in a tolerant match.
pub const DEFAULT_SUFFIX_SLACK: usize = 2;

pub const DEFAULT_LOCAL_FOLLOW_REACH: usize = 3;
pub const DEFAULT_BACKWARD_RUN: usize = 4;
pub const DEFAULT_NEAR_REACH: usize = 5;
pub const DEFAULT_NEAR_RUN: usize = 4;
pub const DEFAULT_FAR_OFFSET: usize = 6;
pub const DEFAULT_FAR_RUN: usize = 5;

/// Words between the highlighted word and the one scrolled into view.
pub const DEFAULT_SCROLL_OFFSET: usize = 2;

pub const CONFIG_DIR_NAME: &str = "Prompter";
pub const CONFIG_FILE_NAME: &str = "settings.json";

/// Hypothesis files with these extensions are read as JSON lines.
pub const JSON_LINES_EXTENSIONS: &[&str] = &["jsonl", "json"];
