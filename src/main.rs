//! CLI entry point for chuckdex

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use chuckdex::tree::{DEFAULT_EXAMPLES_ROOT, DEFAULT_OUTPUT_FILE};
use chuckdex::{IndexWalker, OutputConfig, WalkerConfig, print_report, write_index};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "chuckdex")]
#[command(about = "Index ChucK examples into the JSON listing used by the web IDE")]
#[command(version)]
struct Args {
    /// Root of the ChucK examples tree
    #[arg(default_value = DEFAULT_EXAMPLES_ROOT)]
    path: PathBuf,

    /// File to write the JSON index to (overwritten)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Do not print the summary lines
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging() {
    // Diagnostics go to stderr; stdout carries the summary.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging();

    let walker = IndexWalker::new(WalkerConfig::default());
    tracing::info!(root = %args.path.display(), output = %args.output.display(), "indexing examples");

    let report = match walker.walk(&args.path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("chuckdex: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = write_index(&report.index, &args.output) {
        eprintln!("chuckdex: {}", e);
        process::exit(1);
    }

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        quiet: args.quiet,
    };
    if let Err(e) = print_report(&report, &args.output, &output_config) {
        eprintln!("chuckdex: error writing output: {}", e);
        process::exit(1);
    }
}
