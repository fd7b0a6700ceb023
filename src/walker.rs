use std::path::Path;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::error::AppError;
use crate::movie::{MovieFile, RenameOutcome};
use crate::prompt::Prompter;
use crate::scanner::scan_directory;
use crate::ui::Ui;

/// Counters for one pass over a directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Candidate files found by the scan
    pub candidates: usize,
    /// Files the user went through the prompts for
    pub processed: usize,
    pub renamed: usize,
    /// Files that vanished before they could be renamed
    pub missing: usize,
    pub sidecars_written: usize,
    /// The user answered quit before the last candidate
    pub stopped_early: bool,
}

/// Walk the candidate files in `dir` one at a time: show the filename, let
/// the user edit the derived fields, rename, write the sidecar, then ask
/// whether to go on.
pub fn run(
    dir: &Path,
    prompter: &mut dyn Prompter,
    clock: &dyn Clock,
    ui: &mut Ui,
) -> Result<RunSummary, AppError> {
    let entries = scan_directory(dir)?;
    let total = entries.len();

    info!("Found {} candidate files", total);

    let mut summary = RunSummary {
        candidates: total,
        ..RunSummary::default()
    };

    for (i, entry) in entries.iter().enumerate() {
        debug!(current = i + 1, total, name = %entry.name, "Processing file");

        ui.file_heading(&entry.name);

        let mut movie = MovieFile::new(dir, &entry.name, clock);
        movie.update(prompter)?;

        match movie.rename(ui)? {
            RenameOutcome::Renamed { .. } => summary.renamed += 1,
            RenameOutcome::SourceMissing { .. } => summary.missing += 1,
        }

        movie.write_sidecar(ui)?;
        summary.sidecars_written += 1;
        summary.processed += 1;

        if !prompter.ask_continue()? {
            summary.stopped_early = i + 1 < total;
            info!("Stopped by user after {} of {} files", i + 1, total);
            break;
        }

        ui.blank();
    }

    Ok(summary)
}
