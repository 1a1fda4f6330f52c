// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{info, warn, debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use subfx::app_config::{self, Config};
use subfx::app_controller::{Controller, RenderOutcome};
use subfx::dispatch::PresetRegistry;
use subfx::file_utils::FileManager;
use subfx::style::{catalog_entry, StyleConfig};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a transcript (or a folder of transcripts) to ASS
    Render(RenderArgs),

    /// List the built-in presets and their default styling
    Presets,

    /// Generate shell completions for subfx
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Word transcript (JSON) or directory of transcripts
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Preset identifier (e.g. 'neon-sign', 'karaoke-classic')
    #[arg(short, long)]
    preset: Option<String>,

    /// Style configuration JSON written by the preset editor
    #[arg(short, long)]
    style: Option<PathBuf>,

    /// Output file (single transcript only)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fixed random seed for reproducible particle layouts
    #[arg(long)]
    seed: Option<u64>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "subfx.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subfx - animated subtitle effects
///
/// Turns word-level transcripts into ASS scripts with preset visual effects.
#[derive(Parser, Debug)]
#[command(name = "subfx")]
#[command(version)]
#[command(about = "Preset-driven ASS subtitle effect renderer")]
#[command(long_about = "subfx renders timed word transcripts into Advanced SubStation Alpha scripts using named visual effect presets.

EXAMPLES:
    subfx render talk.json                          # Render with the default preset
    subfx render talk.json -p neon-sign             # Pick a preset
    subfx render talk.json -s neon.json -o out.ass  # Use a style saved by the editor
    subfx render talk.json -p matrix-rain --seed 7  # Reproducible particle layout
    subfx render transcripts/ -f                    # Render a whole folder, overwriting
    subfx presets                                   # List available presets
    subfx completions bash > subfx.bash             # Generate bash completions

CONFIGURATION:
    Configuration is stored in subfx.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI colour for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let level = record.level();

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                Self::get_color_for_level(level), now, Self::get_emoji_for_level(level), record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Logger starts at trace so the max level alone decides what gets through
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subfx", &mut std::io::stdout());
            Ok(())
        }
        Commands::Presets => list_presets(),
        Commands::Render(args) => run_render(args),
    }
}

fn run_render(options: RenderArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&options.config_path)?;

    if let Some(seed) = options.seed {
        config.seed = Some(seed);
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    } else {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let controller = Controller::with_config(config).context("Failed to start the renderer")?;

    let file_style = match &options.style {
        Some(path) => load_style(path)?,
        None => StyleConfig::default(),
    };
    let style = controller.resolve_style(file_style, options.preset.as_deref());
    debug!("Effective style: {:?}", style);

    if FileManager::file_exists(&options.input_path) {
        match controller.run(&options.input_path, options.output.clone(), &style, options.force_overwrite)? {
            RenderOutcome::Written { path, events } => info!("Success: {:?} ({} events)", path, events),
            RenderOutcome::Skipped(path) => info!("Skipped: {:?}", path),
        }
    } else if FileManager::dir_exists(&options.input_path) {
        if options.output.is_some() {
            warn!("--output is ignored when rendering a directory");
        }
        controller.run_folder(&options.input_path, &style, options.force_overwrite)?;
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }

    Ok(())
}

// @returns: Style record parsed from a JSON file
fn load_style(path: &Path) -> Result<StyleConfig> {
    let content = FileManager::read_to_string(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse style file: {}", path.display()))
}

fn list_presets() -> Result<()> {
    let registry = PresetRegistry::builtin();
    let mut stdout = std::io::stdout();

    for id in registry.ids() {
        match catalog_entry(id) {
            Some(entry) => writeln!(
                stdout,
                "{:<18} {} {}px {}/{}",
                id, entry.font, entry.font_size, entry.primary_color, entry.outline_color
            )?,
            None => writeln!(stdout, "{:<18} (style defaults)", id)?,
        }
    }

    Ok(())
}
