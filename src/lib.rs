pub mod cli;
pub mod clock;
pub mod error;
pub mod logging;
pub mod movie;
pub mod output;
pub mod parser;
pub mod prompt;
pub mod scanner;
pub mod ui;
pub mod walker;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{AppError, ExitCode};
pub use movie::{
    build_movie_filename, build_sidecar_filename, render_sidecar, MovieError, MovieFile,
    RenameOutcome, SIDECAR_EXTENSION,
};
pub use parser::{parse_movie_filename, sanitize_name, split_suffix, MovieParts, YearSource};
pub use prompt::{LinePrompter, PromptError, Prompter, TerminalPrompter};
pub use scanner::{is_excluded, scan_directory, FileEntry, ScannerError, EXCLUDED_EXTENSIONS};
pub use walker::RunSummary;
