//! Application orchestration and command routing.
//!
//! Parses command-line arguments, prepares logging and the config file, and delegates
//! to the command handlers.

use crate::commands;
use crate::config::config_path;
use crate::logging;
use anyhow::anyhow;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::process;

/// Writes the default config when it is missing or was written by an older version.
fn check_and_run_setup() -> Result<(), anyhow::Error> {
    let config_path =
        config_path().map_err(|e| anyhow!("Could not determine config path: {e}"))?;

    match crate::setup::version::check_setup_needed(&config_path)? {
        Some(old_version) => {
            tracing::info!(
                "Setup needed - config version {} -> {}",
                old_version,
                env!("CARGO_PKG_VERSION")
            );
            crate::setup::run_setup(&config_path).map_err(|e| {
                tracing::error!("Setup failed: {e}");
                anyhow!("Setup failed: {e}")
            })?;
        }
        None => {
            tracing::debug!(
                "Config version up to date ({})",
                env!("CARGO_PKG_VERSION")
            );
        }
    }

    Ok(())
}

/// A terminal ECG viewer that scrolls recorded samples across a reference chart
#[derive(Parser)]
#[command(name = "ecgview")]
#[command(version)]
#[command(about = "Scroll a recorded ECG waveform across a terminal chart")]
#[command(long_about = "Scroll a recorded ECG waveform across a terminal chart with a \
heart-rate grid and Normal/Median/Danger reference bands.\n\n\
DEFAULT COMMAND:\n    If no command is specified, 'play' is used.\n\n\
EXAMPLES:\n    \
$ ecgview --source ecgData.json\n    \
$ ecgview play --source https://example.com/ecgData.json --autostart\n    \
$ ecgview points --position 120 > frame.txt\n    \
$ ecgview stats")]
#[command(
    after_help = "CONFIGURATION:\n    Config file:        ~/.config/ecgview/ecgview.toml\n    Logs:               ~/.local/state/ecgview/ecgview.log.*"
)]
struct Cli {
    /// Sample document path or URL (play default command)
    #[arg(short, long, value_name = "PATH|URL", global = true)]
    source: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the waveform in the terminal chart (default)
    ///
    /// Press s to start, x to stop, Space to toggle, q/Escape to quit.
    /// Sending SIGUSR1 to the process toggles playback.
    #[command(visible_alias = "p")]
    Play {
        /// Start scrolling immediately
        #[arg(short, long)]
        autostart: bool,
    },

    /// Print the screen points of one frame as an SVG points string
    Points {
        /// Window start position (wrapped into the sample buffer)
        #[arg(short, long, default_value_t = 0)]
        position: usize,
    },

    /// Show sample count and bounds of the sample document
    Stats,

    /// Open configuration file in your preferred editor
    #[command(visible_alias = "c")]
    Config,

    /// Show recent log entries
    Logs,

    /// Generate shell completion script
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Runs the application based on command-line arguments.
///
/// # Errors
/// - If logging initialization or setup fails
/// - If the selected command fails
pub async fn run() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Commands that need neither logging nor config
    match &cli.command {
        Some(Commands::Completions { shell }) => {
            generate(*shell, &mut Cli::command(), "ecgview", &mut io::stdout());
            return Ok(());
        }
        Some(Commands::Logs) => {
            return match commands::handle_logs() {
                Ok(()) => Ok(()),
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            };
        }
        _ => {}
    }

    logging::init_logging()?;
    check_and_run_setup()?;

    match cli.command {
        None => commands::handle_play(cli.source, false).await?,
        Some(Commands::Play { autostart }) => {
            commands::handle_play(cli.source, autostart).await?;
        }
        Some(Commands::Points { position }) => {
            commands::handle_points(cli.source, position).await?;
        }
        Some(Commands::Stats) => {
            commands::handle_stats(cli.source).await?;
        }
        Some(Commands::Config) => {
            commands::handle_config()?;
        }
        Some(Commands::Completions { .. }) | Some(Commands::Logs) => {
            unreachable!("These commands are handled earlier")
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_source_flag_is_global() {
        let cli = Cli::try_parse_from(["ecgview", "points", "--source", "a.json", "-p", "7"]).unwrap();
        assert_eq!(cli.source.as_deref(), Some("a.json"));
        assert!(matches!(cli.command, Some(Commands::Points { position: 7 })));
    }

    #[test]
    fn test_default_command_is_play() {
        let cli = Cli::try_parse_from(["ecgview", "-s", "b.json"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.source.as_deref(), Some("b.json"));
    }
}
