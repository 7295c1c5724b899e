// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use indicatif::{ProgressBar, ProgressStyle};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};

use scansion::analysis::BatchAnalyzer;
use scansion::analysis::types::{BatchAnalysis, LineAnalysis, WordAnalysis};
use scansion::app_config::{Config, LogLevel};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP analysis API
    Serve,

    /// Analyze a line of text or a file of lyric lines
    Analyze(AnalyzeArgs),

    /// Generate shell completions for scansion
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Input file with one lyric line per line
    #[arg(value_name = "INPUT_FILE", conflicts_with = "text")]
    input_file: Option<PathBuf>,

    /// Analyze a single line given on the command line
    #[arg(short, long)]
    text: Option<String>,

    /// Print raw JSON instead of the readable summary
    #[arg(short, long)]
    json: bool,
}

/// scansion - prosodic stress analysis for lyrics
///
/// Determines syllable boundaries and stress per syllable for lines of
/// text, using function-word heuristics, dictionary lookup, and a G2P
/// fallback.
#[derive(Parser, Debug)]
#[command(name = "scansion")]
#[command(version = "0.1.0")]
#[command(about = "Prosodic stress analysis engine for lyrics")]
#[command(long_about = "scansion analyzes lines of text and marks which syllables carry stress.

EXAMPLES:
    scansion analyze -t \"The cat sat\"          # Analyze one line
    scansion analyze lyrics.txt                 # Analyze a file, one line per line
    scansion analyze -j lyrics.txt              # Same, raw JSON output
    scansion serve                              # Run the HTTP API
    scansion --log-level debug serve            # Serve with debug logging
    scansion completions bash > scansion.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.

    The pronunciation dictionary (cmudict-0.7b) is looked up at the path in
    dictionary.path; without it the engine still runs on heuristics alone
    and reports itself degraded via /status.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
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

    // @returns: Label for log level
    fn get_label_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "ERROR",
            Level::Warn => "WARN ",
            Level::Info => "     ",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let label = Self::get_label_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = match record.level() {
                Level::Error => {
                    writeln!(stderr, "\x1B[1;31m{} {} {}\x1B[0m", now, label, record.args())
                }
                Level::Warn => {
                    writeln!(stderr, "\x1B[1;33m{} {} {}\x1B[0m", now, label, record.args())
                }
                Level::Info => writeln!(stderr, "{} {} {}", now, label, record.args()),
                Level::Debug => {
                    writeln!(stderr, "\x1B[36m{} {} {}\x1B[0m", now, label, record.args())
                }
                Level::Trace => {
                    writeln!(stderr, "\x1B[2m{} {} {}\x1B[0m", now, label, record.args())
                }
            };
        }
    }

    fn flush(&self) {}
}

#[tokio::main]
async fn main() -> Result<()> {
    let options = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &options.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "scansion", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load_or_create(&options.config_path)?;
    let level = options
        .log_level
        .map(LogLevel::from)
        .unwrap_or(config.log_level);
    CustomLogger::init(level.to_level_filter())
        .map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;

    match options.command {
        Commands::Serve => {
            info!("scansion {} starting", env!("CARGO_PKG_VERSION"));
            scansion::api::run(config)
                .await
                .map_err(|e| anyhow!("{}", e))?;
        }
        Commands::Analyze(args) => run_analyze(&config, args).await?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}

/// Run the analyze subcommand over a literal line or an input file
async fn run_analyze(config: &Config, args: AnalyzeArgs) -> Result<()> {
    let batch = BatchAnalyzer::from_config(config);

    if let Some(text) = args.text {
        let analysis = batch.analyzer().analyze_line(&text).await;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        } else {
            print_line(&analysis);
        }
        return Ok(());
    }

    let Some(path) = args.input_file else {
        return Err(anyhow!("Provide an input file or --text"));
    };
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    let lines: Vec<String> = content.lines().map(str::to_string).collect();

    let bar = ProgressBar::new(lines.len() as u64).with_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} lines ({elapsed})")
            .expect("valid progress template"),
    );
    let progress = bar.clone();
    let result = batch
        .analyze_batch_with_progress(&lines, move |done, _total| {
            progress.set_position(done as u64);
        })
        .await;
    bar.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_batch(&result);
    }
    Ok(())
}

/// Render a word's syllables with stressed ones uppercased
fn render_stress(word: &WordAnalysis) -> String {
    word.syllables
        .iter()
        .zip(&word.stress_pattern)
        .map(|(syllable, &level)| {
            if level > 0 {
                syllable.to_uppercase()
            } else {
                syllable.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

fn print_line(analysis: &LineAnalysis) {
    println!(
        "{}  [{} syllables, {} stressed, {:.1} ms]",
        analysis.text, analysis.total_syllables, analysis.stressed_syllables, analysis.processing_time_ms
    );
    for word in &analysis.words {
        println!(
            "  {:<16} {:<24} {} (confidence {:.2})",
            word.word,
            render_stress(word),
            word.reasoning,
            word.confidence
        );
    }
}

fn print_batch(result: &BatchAnalysis) {
    for line in &result.lines {
        if line.partial {
            println!("{:>4}: [deadline exceeded] {}", line.line_number, line.analysis.text);
            continue;
        }
        println!(
            "{:>4}: {}  [{} syllables, {} stressed]",
            line.line_number,
            line.analysis.text,
            line.analysis.total_syllables,
            line.analysis.stressed_syllables
        );
    }
    println!(
        "{} lines analyzed in {:.1} ms",
        result.total_lines, result.total_processing_time_ms
    );
}
