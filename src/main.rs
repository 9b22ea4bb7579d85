//! `cheatkit` binary entry point.

use clap::Parser;

use cheatkit::cli::args::{Cli, Command};
use cheatkit::cli::commands;
use cheatkit::error::CheatkitError;
use cheatkit::observability::logging;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.log_format, cli.verbose, cli.color);

    let result = match &cli.command {
        Command::List(args) => commands::list::run(args),
        Command::Show(args) => commands::show::run(args),
        Command::Build(args) => commands::build::run(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        let code = match err {
            CheatkitError::Usage(_) => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}
