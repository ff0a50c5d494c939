// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use log::{error, warn, info, debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use clap::{Args, Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};

use subconv::app_config::{self, Config};
use subconv::errors::AppError;
use subconv::file_utils::FileManager;
use subconv::formats::{SccConverter, SubtitleFormat};
use subconv::subtitle_processor::SubtitleCollection;
use subconv::validation::CueValidator;

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
    /// Decode a subtitle file and print its cues
    Inspect {
        /// Subtitle file to read
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,
    },

    /// Re-encode subtitle files as Scenarist captions
    Convert(ConvertArgs),

    /// Generate shell completions for subconv
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Input subtitle file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output file (single input) or directory (directory input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Shift every cue by this many seconds (may be negative)
    #[arg(long, allow_hyphen_values = true)]
    shift: Option<f64>,

    /// Drop cues before this time in seconds
    #[arg(long)]
    trim_start: Option<f64>,

    /// Drop cues after this time in seconds
    #[arg(long)]
    trim_end: Option<f64>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,
}

/// subconv - subtitle format conversion
///
/// Reads caption files into a shared cue list and writes them back out
/// as Scenarist Closed Caption (.scc) streams.
#[derive(Parser, Debug)]
#[command(name = "subconv")]
#[command(version)]
#[command(about = "Subtitle conversion tool for Scenarist Closed Captions")]
#[command(long_about = "subconv decodes and encodes Scenarist Closed Caption (.scc) files.

EXAMPLES:
    subconv inspect movie.scc                          # Print the decoded cues
    subconv convert movie.scc -o fixed.scc             # Re-encode a caption file
    subconv convert movie.scc --shift 2.5              # Delay every cue by 2.5 seconds
    subconv convert movie.scc --trim-start 10 --trim-end 60
    subconv --log-level debug convert /captions/       # Process an entire directory
    subconv completions bash > subconv.bash            # Generate bash completions

CONFIGURATION:
    Configuration is read from conf.json by default. You can specify a different
    config file with --config. Defaults are used when the file doesn't exist.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long = "config", global = true, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
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

    // @returns: ANSI color for log level
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
            let emoji = Self::get_emoji_for_level(record.level());
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything; log::set_max_level does the filtering
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(cmd_log_level) = &cli.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subconv", &mut std::io::stdout());
            Ok(())
        }
        Commands::Inspect { input_path } => {
            let config = load_config(&cli.config_path, cli.log_level.is_some())?;
            run_inspect(&input_path, &config)
        }
        Commands::Convert(args) => {
            let mut config = load_config(&cli.config_path, cli.log_level.is_some())?;
            if args.force_overwrite {
                config.output.force_overwrite = true;
            }
            run_convert(&args, &config)
        }
    }
}

// Load and validate configuration; the config log level applies unless set on the command line
fn load_config(config_path: &str, log_level_overridden: bool) -> Result<Config> {
    let config = Config::load_or_default(config_path)?;

    config.validate()
        .map_err(|e| AppError::Config(format!("{:#}", e)))
        .context("Configuration validation failed")?;

    if !log_level_overridden {
        log::set_max_level(config.log_level.to_level_filter());
    }

    Ok(config)
}

fn run_inspect(input_path: &Path, config: &Config) -> Result<()> {
    let converter = SccConverter::from_config(&config.scc)?;
    let text = FileManager::read_to_string(input_path)?;

    if SubtitleFormat::detect(&text).is_none() {
        warn!("No Scenarist header found in {:?}, decoding anyway", input_path);
    }

    let collection = SubtitleCollection::load_with_converter(&text, &converter)?;

    let mut stdout = std::io::stdout().lock();
    for (idx, cue) in collection.cues.iter().enumerate() {
        writeln!(
            stdout,
            "{}\n{} --> {}\n{}\n",
            idx + 1,
            converter.timecodes().format(cue.start),
            converter.timecodes().format(cue.end),
            cue.text()
        )?;
    }

    info!("{} cues in {:?}", collection.cues.len(), input_path);
    Ok(())
}

fn run_convert(args: &ConvertArgs, config: &Config) -> Result<()> {
    if args.input_path.is_file() {
        let output_path = match &args.output {
            Some(path) => path.clone(),
            None => FileManager::generate_output_path(
                &args.input_path,
                args.input_path.parent().unwrap_or(Path::new(".")),
                &config.output.suffix,
                SubtitleFormat::Scc.extension(),
            ),
        };
        convert_file(&args.input_path, &output_path, args, config)
    } else if args.input_path.is_dir() {
        convert_folder(&args.input_path, args, config)
    } else {
        Err(AppError::File(format!("Input path does not exist: {:?}", args.input_path)).into())
    }
}

fn convert_file(input_file: &Path, output_file: &Path, args: &ConvertArgs, config: &Config) -> Result<()> {
    if output_file.exists() && !config.output.force_overwrite {
        warn!("Output file already exists: {:?}. Use -f to force overwrite.", output_file);
        return Ok(());
    }

    let converter = SccConverter::from_config(&config.scc)?;
    let text = FileManager::read_to_string(input_file)?;
    let mut collection = SubtitleCollection::load_with_converter(&text, &converter)
        .with_context(|| format!("Failed to decode {:?}", input_file))?;

    if let Some(seconds) = args.shift {
        collection.shift_time(seconds, 0.0, None);
    }

    if args.trim_start.is_some() || args.trim_end.is_some() {
        let start = args.trim_start.unwrap_or(0.0);
        let end = args.trim_end.unwrap_or_else(|| collection.max_time());
        collection.trim(start, end);
    }

    let validation = CueValidator::with_line_length(converter.line_length()).validate_cues(&collection.cues);
    for entry in validation.failed_entries() {
        for issue in &entry.issues {
            warn!("Cue {}: {}", entry.index + 1, issue);
        }
    }

    collection.save_with_converter(output_file, &converter)?;
    info!("Success: {:?} ({} cues)", output_file, collection.cues.len());

    Ok(())
}

fn convert_folder(input_dir: &Path, args: &ConvertArgs, config: &Config) -> Result<()> {
    info!("Starting conversion for directory: {:?}", input_dir);

    let files = FileManager::find_files(input_dir, SubtitleFormat::Scc.extension())?;
    let suffix = format!(".{}.", config.output.suffix);
    let files: Vec<PathBuf> = files.into_iter()
        .filter(|path| !path.to_string_lossy().contains(&suffix))
        .collect();

    if files.is_empty() {
        warn!("No subtitle files found in {:?}", input_dir);
        return Ok(());
    }

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut processed_count = 0;
    for path in &files {
        let output_dir = match &args.output {
            Some(dir) => dir.clone(),
            None => path.parent().unwrap_or(Path::new(".")).to_path_buf(),
        };
        let output_file = FileManager::generate_output_path(
            path,
            &output_dir,
            &config.output.suffix,
            SubtitleFormat::Scc.extension(),
        );

        progress.set_message(path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default());
        debug!("Converting {:?} -> {:?}", path, output_file);

        if let Err(e) = convert_file(path, &output_file, args, config) {
            error!("Error processing file {:?}: {:#}", path, e);
        } else {
            processed_count += 1;
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    info!("Finished processing {} of {} files", processed_count, files.len());

    Ok(())
}
