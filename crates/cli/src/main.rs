use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use prompter_core::alignment::alignment_engine::AlignmentEngine;
use prompter_core::pipeline::infrastructure::lookahead_sink::LookaheadSink;
use prompter_core::pipeline::infrastructure::threaded_replay_executor::ThreadedReplayExecutor;
use prompter_core::pipeline::presentation_sink::PresentationSink;
use prompter_core::pipeline::prompter_session::PrompterSession;
use prompter_core::pipeline::replay_executor::{ReplayConfig, ReplayExecutor};
use prompter_core::pipeline::session_logger::StdoutSessionLogger;
use prompter_core::script::domain::script_token::ScriptToken;
use prompter_core::shared::config::EngineConfig;
use prompter_core::shared::constants::{DEFAULT_SCROLL_OFFSET, JSON_LINES_EXTENSIONS};
use prompter_core::transcript::domain::hypothesis_source::HypothesisSource;
use prompter_core::transcript::infrastructure::jsonl_source::JsonLinesSource;
use prompter_core::transcript::infrastructure::plain_text_source::PlainTextSource;

/// Replays recorded speech hypotheses against a teleprompter script.
#[derive(Parser)]
#[command(name = "prompter")]
struct Cli {
    /// Script text file.
    script: PathBuf,

    /// Recorded hypotheses (.jsonl, or plain text with `~` marking interim lines).
    hypotheses: PathBuf,

    /// Settings file (defaults to the user config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Width of the bounded search window, in words.
    #[arg(long)]
    max_visible_words: Option<usize>,

    /// Search the whole remaining script instead of the visible window.
    #[arg(long)]
    unbounded: bool,

    /// Disable "перенос" jump-back commands.
    #[arg(long)]
    no_voice_commands: bool,

    /// Words to scroll past the highlighted word.
    #[arg(long, default_value_t = DEFAULT_SCROLL_OFFSET)]
    scroll_offset: usize,

    /// Words shown on each side of the scroll target.
    #[arg(long, default_value = "4")]
    context: usize,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let config = build_config(&cli)?;
    let script_text = std::fs::read_to_string(&cli.script)?;

    let mut source = open_source(&cli.hypotheses);
    source.open(&cli.hypotheses)?;

    let sink = LookaheadSink::new(
        Box::new(TerminalSink::new(cli.context)),
        cli.scroll_offset,
    );
    let mut session = PrompterSession::new(
        AlignmentEngine::new(config),
        Box::new(sink),
        Box::new(StdoutSessionLogger::new()),
    );

    let words = session.load_script(&script_text);
    if words == 0 {
        log::warn!("Script {} contains no words", cli.script.display());
    }
    session.start_listening();

    let stats = ThreadedReplayExecutor::new().execute(source, &mut session, ReplayConfig::default())?;
    session.finish();

    log::info!(
        "Replayed {} hypotheses, {} decisions, cursor at word {}",
        stats.events,
        stats.decisions,
        session.engine().cursor()
    );
    Ok(())
}

fn build_config(cli: &Cli) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::load_or_default(),
    };

    if let Some(n) = cli.max_visible_words {
        config.max_visible_words = n;
    }
    if cli.unbounded {
        config.bounded_search = false;
    }
    if cli.no_voice_commands {
        config.voice_commands = false;
    }
    Ok(config)
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.script.exists() {
        return Err(format!("Script file not found: {}", cli.script.display()).into());
    }
    if !cli.hypotheses.exists() {
        return Err(format!("Hypotheses file not found: {}", cli.hypotheses.display()).into());
    }
    if let Some(path) = &cli.config {
        if !path.exists() {
            return Err(format!("Config file not found: {}", path.display()).into());
        }
    }
    if cli.max_visible_words == Some(0) {
        return Err("Max visible words must be at least 1".into());
    }
    if cli.unbounded && cli.max_visible_words.is_some() {
        return Err("--unbounded and --max-visible-words are mutually exclusive".into());
    }
    Ok(())
}

fn is_json_lines(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| JSON_LINES_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn open_source(path: &Path) -> Box<dyn HypothesisSource> {
    if is_json_lines(path) {
        Box::new(JsonLinesSource::new())
    } else {
        Box::new(PlainTextSource::new())
    }
}

/// Prints each highlight and a small viewport around the scroll target.
struct TerminalSink {
    words: Vec<String>,
    context: usize,
}

impl TerminalSink {
    fn new(context: usize) -> Self {
        Self {
            words: Vec::new(),
            context,
        }
    }

    fn word(&self, index: usize) -> &str {
        self.words.get(index).map(String::as_str).unwrap_or("")
    }

    fn viewport(&self, center: usize) -> String {
        if self.words.is_empty() {
            return String::new();
        }
        let start = center.saturating_sub(self.context);
        let end = (center + self.context).min(self.words.len() - 1);
        (start..=end)
            .map(|i| {
                if i == center {
                    format!("[{}]", self.words[i])
                } else {
                    self.words[i].clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl PresentationSink for TerminalSink {
    fn on_script_loaded(&mut self, tokens: &[ScriptToken]) {
        self.words = tokens.iter().map(|t| t.raw_text.clone()).collect();
    }

    fn on_highlight(&mut self, script_index: usize) {
        println!("{script_index:>5}  {}", self.word(script_index));
    }

    fn on_scroll_target(&mut self, script_index: usize) {
        println!("       … {} …", self.viewport(script_index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli(script: &Path, hypotheses: &Path) -> Cli {
        Cli {
            script: script.to_path_buf(),
            hypotheses: hypotheses.to_path_buf(),
            config: None,
            max_visible_words: None,
            unbounded: false,
            no_voice_commands: false,
            scroll_offset: DEFAULT_SCROLL_OFFSET,
            context: 4,
        }
    }

    fn sink_with(text: &str, context: usize) -> TerminalSink {
        let mut sink = TerminalSink::new(context);
        let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        sink.words = words;
        sink
    }

    #[test]
    fn test_json_lines_detection() {
        assert!(is_json_lines(Path::new("take1.jsonl")));
        assert!(is_json_lines(Path::new("take1.JSON")));
        assert!(!is_json_lines(Path::new("take1.txt")));
        assert!(!is_json_lines(Path::new("take1")));
    }

    #[test]
    fn test_viewport_marks_center_and_clamps() {
        let sink = sink_with("a b c d e f g", 2);
        assert_eq!(sink.viewport(0), "[a] b c");
        assert_eq!(sink.viewport(3), "b c [d] e f");
        assert_eq!(sink.viewport(6), "e f [g]");
    }

    #[test]
    fn test_viewport_empty_script() {
        assert_eq!(sink_with("", 2).viewport(0), "");
    }

    #[test]
    fn test_validate_rejects_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("script.txt");
        let hyps = dir.path().join("hyps.txt");
        assert!(validate(&cli(&script, &hyps)).is_err());

        std::fs::File::create(&script).unwrap();
        assert!(validate(&cli(&script, &hyps)).is_err());

        std::fs::File::create(&hyps).unwrap();
        assert!(validate(&cli(&script, &hyps)).is_ok());
    }

    #[test]
    fn test_validate_rejects_conflicting_window_flags() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("script.txt");
        let hyps = dir.path().join("hyps.txt");
        std::fs::File::create(&script).unwrap();
        std::fs::File::create(&hyps).unwrap();

        let mut args = cli(&script, &hyps);
        args.max_visible_words = Some(0);
        assert!(validate(&args).is_err());

        args.max_visible_words = Some(20);
        args.unbounded = true;
        assert!(validate(&args).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, r#"{{"max_visible_words": 30, "voice_commands": true}}"#).unwrap();

        let mut args = cli(&path, &path);
        args.config = Some(path.clone());
        args.no_voice_commands = true;
        args.max_visible_words = Some(12);

        let config = build_config(&args).unwrap();
        assert_eq!(config.max_visible_words, 12);
        assert!(!config.voice_commands);
        assert!(config.bounded_search);
    }
}
