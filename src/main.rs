use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use richclip_lib::{bootstrap, report, run, Action, Cli};

fn main() -> ExitCode {
    // clap exits with status 2 on usage errors
    let cli = Cli::parse();
    let stdin_is_terminal = io::stdin().is_terminal();

    let config = match bootstrap::load_config_or_default(bootstrap::resolve_config_path()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = bootstrap::init_tracing_subscriber(&config.log_level) {
        eprintln!("Warning: {err:#}");
    }

    let clipboard = match bootstrap::build_system_clipboard() {
        Ok(clipboard) => clipboard,
        Err(err) => {
            tracing::error!(error = %err, "Clipboard unavailable");
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let action = Action::from_cli(cli, stdin_is_terminal);
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match run(action, clipboard, &config, &mut stdin, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let (message, code) = report(&err);
            eprintln!("{message}");
            code
        }
    }
}
