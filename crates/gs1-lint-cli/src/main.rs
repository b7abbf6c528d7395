//! gs1lint - validate GS1 data values
//!
//! Main entry point for the `gs1lint` binary.

use std::process::ExitCode;

use clap::Parser;
use gs1_lint_cli::cli::Cli;
use gs1_lint_cli::{CliError, Exit};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose > 0;

    match run(cli) {
        Ok(exit) => exit.into(),
        Err(e) => {
            tracing::debug!(code = e.code(), "command failed");
            eprint!("{}", e.render(verbose));
            e.exit_code()
        }
    }
}

fn run(cli: Cli) -> Result<Exit, CliError> {
    // Logging settings come partly from the config file.
    let config = cli.load_config()?;
    gs1_lint_log::init(cli.log_config(&config))?;

    cli.execute(config)
}
