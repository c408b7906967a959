//! Command-line surface.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "richclip",
    version,
    about = "A clipboard tool with granular format (UTI) control. Ideal for enabling LLMs to inspect all clipboard formats.",
    after_help = "Without a subcommand, richclip copies when stdin is piped and pastes otherwise."
)]
pub struct Cli {
    /// The format to use (implicitly copies if stdin has data, pastes otherwise)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub format: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Output all available clipboard types
    List {
        /// Output types and values in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Copy data from stdin to the clipboard
    Copy {
        /// The format to write (defaults to plain text)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        format: Option<String>,
    },

    /// Paste data from the clipboard to stdout
    Paste {
        /// The format to read (defaults to plain text if available)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        format: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_short_and_long_type_flags() {
        let cli = Cli::try_parse_from(["richclip", "paste", "-t", "public.html"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Paste { format: Some(ref f) }) if f == "public.html"
        ));

        let cli = Cli::try_parse_from(["richclip", "--type", "com.example.custom"]).unwrap();
        assert_eq!(cli.format.as_deref(), Some("com.example.custom"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_list_json_flag() {
        let cli = Cli::try_parse_from(["richclip", "list", "-j"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List { json: true })));
    }

    #[test]
    fn unknown_subcommand_is_a_usage_error() {
        let err = Cli::try_parse_from(["richclip", "frobnicate"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
