//! Host harness binary for the blockstats service.
//!
//! Stands in for a live game server: it wires the counter service, the
//! rotating board projector, and the command surface to a console-driven
//! event source, then runs the single logical game-update loop. Block
//! events, commands, and the periodic tick are all dispatched from one
//! task, so no two core operations ever run concurrently.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `blockstats.yaml`
//! 3. Open the counter store (a failure degrades the feature, it does
//!    not abort the process)
//! 4. Create the board projector
//! 5. Run the game loop over the tick interval and console input
//!
//! # Console commands
//!
//! - `join <name>` / `leave <name>` -- roster management
//! - `mine <name>` / `place <name>` -- block events
//! - `stats ...` -- the full `stats` command surface (console is elevated)
//! - `help`, `quit`

mod console;
mod error;
mod host;

use std::path::Path;

use blockstats_core::{
    CommandContext, Projector, StatsCommand, StatsConfig, StatsService,
};
use blockstats_types::BlockEvent;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::HostError;
use crate::host::{ConsoleFeedback, LogSink, Roster};

/// Application entry point for the host harness.
///
/// # Errors
///
/// Returns an error if configuration or projector initialization fails.
/// Storage failures do not abort startup; the service degrades instead.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("blockstats-server starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        database = %config.database.path.display(),
        switch_interval_ticks = config.board.switch_interval_ticks,
        tick_interval_ms = config.board.tick_interval_ms,
        "Configuration loaded"
    );

    // 3. Open the counter store. A failure leaves the feature inert but
    //    keeps the host running.
    let mut service = StatsService::connect(&config.database).await;
    if service.is_enabled() {
        info!("Counter store ready");
    } else {
        warn!("Counter store unavailable, stats run disabled");
    }

    // 4. Create the board projector.
    let mut projector = Projector::new(config.board.switch_interval_ticks)
        .map_err(HostError::from)?;

    // 5. Host collaborators and console input.
    let mut roster = Roster::new();
    let mut sink = LogSink;
    let mut feedback = ConsoleFeedback;
    let mut lines = console::console_input_channel();

    let mut ticker = tokio::time::interval(config.board.tick_interval());

    info!("Entering game loop (type 'help' for commands)");

    // 6. The single logical game-update loop.
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                projector.tick(&mut service, &roster, &mut sink).await;
            }
            line = lines.recv() => {
                let Some(line) = line else {
                    info!("Console closed, shutting down");
                    break;
                };
                let keep_running = dispatch(
                    line.trim(),
                    &mut service,
                    &mut roster,
                    &projector,
                    &mut sink,
                    &mut feedback,
                )
                .await;
                if !keep_running {
                    break;
                }
            }
        }
    }

    // 7. Shutdown.
    service.close().await;
    info!("blockstats-server shutdown complete");
    Ok(())
}

/// Handle one console line. Returns `false` when the loop should stop.
async fn dispatch(
    line: &str,
    service: &mut StatsService,
    roster: &mut Roster,
    projector: &Projector,
    sink: &mut LogSink,
    feedback: &mut ConsoleFeedback,
) -> bool {
    use blockstats_core::{Feedback as _, PlayerDirectory as _};

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    match word {
        "" => {}
        "help" => print_help(),
        "quit" | "exit" => {
            info!("Quit requested");
            return false;
        }
        "join" if !rest.is_empty() => {
            let player = roster.join(rest);
            info!(player = %player.name, id = %player.id, "Player joined");
        }
        "leave" if !rest.is_empty() => {
            if roster.leave(rest) {
                info!(player = rest, "Player left");
            } else {
                feedback.error("Player not found.");
            }
        }
        "mine" | "place" if !rest.is_empty() => {
            let Some(id) = roster.resolve(rest) else {
                feedback.error("Player not found.");
                return true;
            };
            let event = if word == "mine" {
                BlockEvent::mined(id)
            } else {
                BlockEvent::placed(id)
            };
            service.apply(event).await;
        }
        "join" | "leave" | "mine" | "place" => {
            feedback.error("Expected a player name.");
        }
        "stats" => {
            match StatsCommand::parse(rest) {
                Ok(command) => {
                    // The console passes the host's permission check.
                    let ctx = CommandContext {
                        issuer: None,
                        elevated: true,
                    };
                    let outcome = command
                        .execute(ctx, service, &*roster, projector, sink, feedback)
                        .await;
                    tracing::debug!(code = outcome.code(), "Command finished");
                }
                Err(error) => feedback.error(&error.to_string()),
            }
        }
        _ => feedback.error("Unknown command, type 'help'."),
    }
    true
}

/// Print the console usage summary.
fn print_help() {
    println!("commands:");
    println!("  join <name>                          bring a player online");
    println!("  leave <name>                         take a player offline");
    println!("  mine <name>                          record a mined block");
    println!("  place <name>                         record a placed block");
    println!("  stats                                issuer's own counters (players only)");
    println!("  stats <name>                         counters of an online player");
    println!("  stats set <mined|placed> <name> <n>  overwrite a counter");
    println!("  stats credits                        credits line");
    println!("  quit                                 stop the server");
}

/// Load the service configuration from `blockstats.yaml`.
///
/// Looks for the config file relative to the current working directory
/// and falls back to defaults when it is absent.
fn load_config() -> Result<StatsConfig, HostError> {
    let config_path = Path::new("blockstats.yaml");
    if config_path.exists() {
        let config = StatsConfig::from_file(config_path)?;
        Ok(config)
    } else {
        info!("Config file not found, using defaults");
        Ok(StatsConfig::default())
    }
}
