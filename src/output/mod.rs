use crate::walker::RunSummary;
use std::io::{self, Write};

/// Display the end-of-run summary
pub fn display_summary(summary: &RunSummary, writer: &mut impl Write) -> io::Result<()> {
    if summary.candidates == 0 {
        writeln!(writer, "No movie files found.")?;
        return Ok(());
    }

    writeln!(writer)?;
    writeln!(
        writer,
        "Processed {} of {} files: {} renamed, {} .nfo files written.",
        summary.processed, summary.candidates, summary.renamed, summary.sidecars_written
    )?;

    if summary.missing > 0 {
        writeln!(
            writer,
            "  {} files had disappeared and were not renamed.",
            summary.missing
        )?;
    }

    if summary.stopped_early {
        writeln!(
            writer,
            "  Quit with {} files left untouched.",
            summary.candidates - summary.processed
        )?;
    }

    Ok(())
}
