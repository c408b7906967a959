//! Command dispatch: turns parsed arguments into exactly one clipboard action.

mod copy;
mod list;
mod paste;

use std::io::{Read, Write};
use std::process::ExitCode;
use std::sync::Arc;

use rc_app::ListingFormat;
use rc_core::{ports::SystemClipboardPort, AppConfig, ClipboardError, FormatId};

use crate::cli::{Cli, Commands};

/// The single operation one invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List { mode: ListingFormat },
    Copy { explicit: Option<FormatId> },
    Paste { explicit: Option<FormatId> },
}

impl Action {
    /// Maps parsed arguments to an action.
    ///
    /// Without a subcommand the direction comes from stdin: piped input copies,
    /// a terminal pastes. A subcommand's own `--type` wins over the top-level one.
    pub fn from_cli(cli: Cli, stdin_is_terminal: bool) -> Self {
        let top_level = cli.format.map(FormatId::from);

        match cli.command {
            Some(Commands::List { json }) => Action::List {
                mode: if json {
                    ListingFormat::Json
                } else {
                    ListingFormat::Plain
                },
            },
            Some(Commands::Copy { format }) => Action::Copy {
                explicit: format.map(FormatId::from).or(top_level),
            },
            Some(Commands::Paste { format }) => Action::Paste {
                explicit: format.map(FormatId::from).or(top_level),
            },
            None if stdin_is_terminal => Action::Paste {
                explicit: top_level,
            },
            None => Action::Copy {
                explicit: top_level,
            },
        }
    }
}

/// Runs `action` against `clipboard`, streaming through `stdin` / `stdout`.
pub fn run(
    action: Action,
    clipboard: Arc<dyn SystemClipboardPort>,
    config: &AppConfig,
    stdin: &mut dyn Read,
    stdout: &mut dyn Write,
) -> Result<(), ClipboardError> {
    tracing::debug!(?action, "Dispatching");

    match action {
        Action::List { mode } => list::run(clipboard, mode, stdout),
        Action::Copy { explicit } => copy::run(clipboard, config, explicit, stdin),
        Action::Paste { explicit } => paste::run(clipboard, config, explicit, stdout),
    }
}

/// Renders a failed action as its stderr line and exit status.
///
/// Backend errors keep their full context chain.
pub fn report(err: &ClipboardError) -> (String, ExitCode) {
    (format!("Error: {err:#}"), ExitCode::FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Context};
    use clap::Parser;

    fn action(args: &[&str], stdin_is_terminal: bool) -> Action {
        let cli = Cli::try_parse_from(args).unwrap();
        Action::from_cli(cli, stdin_is_terminal)
    }

    #[test]
    fn implicit_mode_copies_when_stdin_is_piped() {
        assert_eq!(action(&["richclip"], false), Action::Copy { explicit: None });
    }

    #[test]
    fn implicit_mode_pastes_from_terminal() {
        assert_eq!(
            action(&["richclip", "-t", "public.html"], true),
            Action::Paste {
                explicit: Some("public.html".into())
            }
        );
    }

    #[test]
    fn explicit_subcommand_ignores_stdin_state() {
        assert_eq!(
            action(&["richclip", "paste"], false),
            Action::Paste { explicit: None }
        );
        assert_eq!(
            action(&["richclip", "copy"], true),
            Action::Copy { explicit: None }
        );
    }

    #[test]
    fn subcommand_type_overrides_top_level_type() {
        assert_eq!(
            action(&["richclip", "-t", "outer", "copy", "-t", "inner"], true),
            Action::Copy {
                explicit: Some("inner".into())
            }
        );
        assert_eq!(
            action(&["richclip", "-t", "outer", "paste"], true),
            Action::Paste {
                explicit: Some("outer".into())
            }
        );
    }

    #[test]
    fn list_mode_follows_json_flag() {
        assert_eq!(
            action(&["richclip", "list"], true),
            Action::List {
                mode: ListingFormat::Plain
            }
        );
        assert_eq!(
            action(&["richclip", "list", "--json"], true),
            Action::List {
                mode: ListingFormat::Json
            }
        );
    }

    #[test]
    fn report_prints_user_facing_messages() {
        let (message, _) = report(&ClipboardError::Empty);
        assert_eq!(message, "Error: Clipboard is empty");

        let (message, _) = report(&ClipboardError::FormatNotFound("com.example.lazy".into()));
        assert_eq!(message, "Error: No data found for type 'com.example.lazy'");
    }

    #[test]
    fn report_keeps_backend_cause_chain() {
        let source: anyhow::Result<()> = Err(anyhow!("pasteboard server unavailable"));
        let err = ClipboardError::from(
            source
                .context("Failed to clear clipboard")
                .unwrap_err(),
        );

        let (message, _) = report(&err);

        assert_eq!(
            message,
            "Error: Failed to clear clipboard: pasteboard server unavailable"
        );
    }

    #[test]
    fn report_exits_with_failure_status() {
        let (_, code) = report(&ClipboardError::Empty);
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));
    }
}
