//! The `stats` command surface.
//!
//! Four forms, mirroring what the host exposes in chat:
//!
//! - `stats` -- the issuer's own counters
//! - `stats <player>` -- counters of a named online player
//! - `stats set <mined|placed> <player> <value>` -- overwrite one counter
//!   (requires elevated permission; the host's permission check result is
//!   passed in, not re-derived here)
//! - `stats credits` -- static credits line
//!
//! Parsing rejects out-of-range input before it can reach the store: the
//! value is a `u64`, so negative or non-numeric text fails at this
//! boundary and the store never re-validates. Execution reports exit code
//! 1 on success and 0 on failure, matching the host's command convention.

use blockstats_types::{CounterKind, PlayerCounters, PlayerRef};

use crate::host::{Feedback, PlayerDirectory, PresentationSink};
use crate::projector::Projector;
use crate::service::StatsService;

/// Errors produced while parsing a `stats` command line.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The argument list does not match any command form.
    #[error(
        "usage: stats [<player>] | stats set <mined|placed> <player> <value> | stats credits"
    )]
    Usage,

    /// The `set` form named something other than `mined` or `placed`.
    #[error("unknown counter: {0}")]
    UnknownCounter(String),

    /// The `set` value is negative or not a number.
    #[error("invalid value (expected a non-negative integer): {0}")]
    InvalidValue(String),
}

/// Result of executing a command, carrying the host exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command ran to completion.
    Success,
    /// The command failed (unknown player, missing permission, ...).
    Failure,
}

impl CommandOutcome {
    /// Host exit code: 1 on success, 0 on failure.
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 1,
            Self::Failure => 0,
        }
    }
}

/// Who issued the command and with what privileges.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext<'a> {
    /// The issuing player, or `None` for a non-player source (console).
    pub issuer: Option<&'a PlayerRef>,
    /// Result of the host's permission check for administrative forms.
    pub elevated: bool,
}

/// A parsed `stats` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsCommand {
    /// `stats` -- show the issuer's own counters.
    ShowSelf,
    /// `stats <player>` -- show a named player's counters.
    Show {
        /// Target player name.
        name: String,
    },
    /// `stats set <mined|placed> <player> <value>`.
    Set {
        /// Which counter to overwrite.
        kind: CounterKind,
        /// Target player name.
        name: String,
        /// New counter value.
        value: u64,
    },
    /// `stats credits` -- static credits line.
    Credits,
}

impl StatsCommand {
    /// Parse the argument list following the `stats` command word.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] if the arguments match no command form,
    /// name an unknown counter, or carry an out-of-range value.
    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let tokens: Vec<&str> = args.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Ok(Self::ShowSelf),
            ["credits"] => Ok(Self::Credits),
            ["set", kind, name, value] => {
                let kind = parse_counter_kind(kind)?;
                let value = value
                    .parse::<u64>()
                    .map_err(|_err| CommandError::InvalidValue((*value).to_owned()))?;
                Ok(Self::Set {
                    kind,
                    name: (*name).to_owned(),
                    value,
                })
            }
            ["set", ..] => Err(CommandError::Usage),
            [name] => Ok(Self::Show {
                name: (*name).to_owned(),
            }),
            _ => Err(CommandError::Usage),
        }
    }

    /// Execute the command, replying through `feedback`.
    ///
    /// Lookup failures and missing permission are user-visible failures
    /// (exit code 0), not system errors.
    pub async fn execute(
        self,
        ctx: CommandContext<'_>,
        service: &mut StatsService,
        directory: &dyn PlayerDirectory,
        projector: &Projector,
        sink: &mut dyn PresentationSink,
        feedback: &mut dyn Feedback,
    ) -> CommandOutcome {
        match self {
            Self::Credits => {
                feedback.info("Credits: the blockstats contributors");
                CommandOutcome::Success
            }
            Self::ShowSelf => {
                let Some(issuer) = ctx.issuer else {
                    feedback.error("Only players have their own stats.");
                    return CommandOutcome::Failure;
                };
                let counters = service.load(issuer.id).await;
                send_player_stats(&issuer.name, counters, feedback);
                CommandOutcome::Success
            }
            Self::Show { name } => {
                let Some(id) = directory.resolve(&name) else {
                    feedback.error("Player not found.");
                    return CommandOutcome::Failure;
                };
                let counters = service.load(id).await;
                send_player_stats(&name, counters, feedback);
                CommandOutcome::Success
            }
            Self::Set { kind, name, value } => {
                if !ctx.elevated {
                    feedback.error("You do not have permission to do that.");
                    return CommandOutcome::Failure;
                }
                let Some(id) = directory.resolve(&name) else {
                    feedback.error("Player not found or not online!");
                    return CommandOutcome::Failure;
                };

                service.set(id, kind, value).await;

                // Keep the visible board consistent with the command
                // without waiting for the next rotation.
                let player = PlayerRef::new(id, name.clone());
                projector.push_player(service, &player, sink).await;

                feedback.info(&format!(
                    "{name} has been set to {value} {kind} blocks."
                ));
                CommandOutcome::Success
            }
        }
    }
}

/// Parse a counter name, case-insensitively.
fn parse_counter_kind(token: &str) -> Result<CounterKind, CommandError> {
    match token.to_lowercase().as_str() {
        "mined" => Ok(CounterKind::Mined),
        "placed" => Ok(CounterKind::Placed),
        other => Err(CommandError::UnknownCounter(other.to_owned())),
    }
}

/// Multi-line stats reply, framed the way the host chat renders it.
fn send_player_stats(name: &str, counters: PlayerCounters, feedback: &mut dyn Feedback) {
    feedback.info("|------------------[STATISTICS]------------------|");
    feedback.info(&format!("| {name} has {} Blocks Mined", counters.mined));
    feedback.info(&format!("| {name} has {} Blocks Placed", counters.placed));
    feedback.info("|------------------------------------------------|");
}
