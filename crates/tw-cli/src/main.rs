//! CLI entry point for the timewheel picker.
//!
//! This binary provides the command-line interface for picking a
//! time-of-day with the scrollable two-wheel widget.
//!
//! # Usage
//!
//! ```bash
//! timewheel [OPTIONS] <COMMAND>
//!
//! # Interactive picker starting at 08:30
//! timewheel pick --value 08:30 --label "Start time"
//!
//! # Validate a value without opening the TUI
//! timewheel validate 14:30
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tw_core::{codec, Config, TimeValue};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// CLI tool for picking a time-of-day with a scrollable wheel widget.
///
/// The picker reports every settled wheel commit as a value change and
/// prints the final committed value on exit.
#[derive(Parser)]
#[command(name = "timewheel", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON configuration file.
    ///
    /// Defaults to built-in settings if not specified.
    #[arg(short, long, global = true, env = "TIMEWHEEL_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Start the interactive picker TUI.
    Pick {
        /// Initial value in HH:MM form.
        #[arg(long, env = "TIMEWHEEL_VALUE", default_value = "00:00")]
        value: String,

        /// Display label for the widget.
        #[arg(short, long, default_value = "Time")]
        label: String,

        /// Mark the field as required (presentation only).
        #[arg(short, long)]
        required: bool,
    },

    /// Validate a HH:MM value and print its canonical form.
    Validate {
        /// The value to validate.
        value: String,
    },
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default.
/// Noisy crates like `mio` are filtered to `warn` level.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging
/// * `no_color` - Disable ANSI colors in output
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(format!("{level},mio=warn"))
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_ansi(use_ansi))
        .with(filter)
        .init();
}

/// Builds a [`Config`] from CLI arguments.
///
/// Loads the configuration file if one was specified, otherwise uses the
/// defaults.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or invalid.
fn build_config(cli: &Cli) -> color_eyre::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to load config {path}: {e}"))?,
        None => Config::default(),
    };
    Ok(config)
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Runs the interactive picker TUI.
///
/// Prints the final committed value to stdout on exit.
///
/// # Errors
///
/// Returns an error if the initial value is malformed or the TUI fails.
async fn run_pick(
    config: Config,
    value: &str,
    label: String,
    required: bool,
) -> color_eyre::Result<()> {
    let initial: TimeValue = codec::decode(value)
        .map_err(|e| color_eyre::eyre::eyre!("Invalid --value: {e}"))?;

    info!(%initial, label, "Starting picker TUI");

    // Handle SIGTERM for graceful shutdown on Unix
    #[cfg(unix)]
    let final_value = {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate())?;

        tokio::select! {
            result = tw_tui::run(config, label, required, initial) => {
                result.map_err(|e| color_eyre::eyre::eyre!("TUI error: {}", e))?
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down");
                initial
            }
        }
    };

    #[cfg(not(unix))]
    let final_value = tw_tui::run(config, label, required, initial)
        .await
        .map_err(|e| color_eyre::eyre::eyre!("TUI error: {}", e))?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{final_value}")?;

    Ok(())
}

/// Validates a value and prints its canonical encoding.
///
/// # Errors
///
/// Returns an error if the value is malformed.
fn run_validate(value: &str) -> color_eyre::Result<()> {
    let parsed = codec::decode(value)
        .map_err(|e| color_eyre::eyre::eyre!("Invalid value '{value}': {e}"))?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", codec::encode(parsed))?;

    Ok(())
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing (handles --no-color for log output)
    init_tracing(cli.verbose, cli.no_color);

    // 4. Route to appropriate command
    match &cli.command {
        Commands::Pick {
            value,
            label,
            required,
        } => {
            let config = build_config(&cli)?;
            run_pick(config, value, label.clone(), *required).await
        }
        Commands::Validate { value } => run_validate(value),
    }
}
