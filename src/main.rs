use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use txn_manager::cli::Cli;
use txn_manager::{CommandInterpreter, Date};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let today = cli.today.unwrap_or_else(Date::today);
    info!(%today, "starting transaction manager");

    let mut interpreter = CommandInterpreter::new(today);
    let mut stdout = io::stdout().lock();

    match cli.input {
        Some(path) => {
            let file = File::open(&path).inspect_err(|e| {
                error!(path = %path.display(), "failed to open command file: {e}");
            })?;
            interpreter.run(BufReader::new(file), &mut stdout)
        }
        None => interpreter.run(io::stdin().lock(), &mut stdout),
    }
}
