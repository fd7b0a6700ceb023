use clap::Parser;
use movie_renamer::cli::Args;
use movie_renamer::output::display_summary;
use movie_renamer::ui::{Ui, UiConfig};
use movie_renamer::{logging, walker, AppError, LinePrompter, SystemClock, TerminalPrompter};
use std::io::{self, IsTerminal};
use tracing::{debug, error};

fn main() {
    let args = Args::parse();

    logging::init(args.verbose);

    debug!(?args, "Arguments parsed");

    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run() -> Result<(), AppError> {
    let dir = std::env::current_dir().map_err(|source| AppError::WorkingDirectory { source })?;
    debug!(path = ?dir, "Working directory");

    let mut ui = Ui::new(UiConfig::new());
    let clock = SystemClock;

    let summary = if io::stdin().is_terminal() {
        let mut prompter = TerminalPrompter::new();
        walker::run(&dir, &mut prompter, &clock, &mut ui)?
    } else {
        debug!("stdin is not a terminal, reading answers line by line");
        let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
        walker::run(&dir, &mut prompter, &clock, &mut ui)?
    };

    display_summary(&summary, &mut io::stdout())
        .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

    Ok(())
}
