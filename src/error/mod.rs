mod codes;

pub use codes::ExitCode;

use crate::movie::MovieError;
use crate::prompt::PromptError;
use crate::scanner::ScannerError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Working directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Cannot determine working directory: {source}")]
    WorkingDirectory {
        #[source]
        source: std::io::Error,
    },

    #[error("Rename failed: {from} -> {to}")]
    RenameError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Sidecar write failed: {path}")]
    SidecarError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Prompt failed: {0}")]
    Prompt(#[from] PromptError),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::DirectoryNotFound { .. } => ExitCode::DirectoryNotFound,
            AppError::NotADirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::WorkingDirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::RenameError { .. } => ExitCode::RenameError,
            AppError::SidecarError { .. } => ExitCode::SidecarError,
            AppError::Prompt(_) => ExitCode::PromptError,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::DirectoryNotFound { path } => {
                format!(
                    "The working directory does not exist:\n  {}\n\n\
                     It may have been removed while the tool was starting.",
                    path.display()
                )
            }

            AppError::NotADirectory { path } => {
                format!(
                    "The working path is not a directory:\n  {}",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check file permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::WorkingDirectory { source } => {
                format!("Cannot determine the current working directory:\n  {}", source)
            }

            AppError::RenameError { from, to, source } => {
                format!(
                    "Failed to rename file:\n\
                     From: {}\n\
                     To:   {}\n\
                     Error: {}\n\n\
                     Check file permissions and that the new name is a valid filename.",
                    from, to, source
                )
            }

            AppError::SidecarError { path, source } => {
                format!(
                    "Failed to write .nfo file:\n  {}\n\
                     Error: {}\n\n\
                     Files renamed so far were kept.",
                    path.display(),
                    source
                )
            }

            AppError::Prompt(err) => {
                format!("Failed to read input:\n  {}", err)
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::IoError(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}

impl From<MovieError> for AppError {
    fn from(err: MovieError) -> Self {
        match err {
            MovieError::Rename { from, to, source } => AppError::RenameError { from, to, source },
            MovieError::Sidecar { path, source } => AppError::SidecarError { path, source },
            MovieError::Prompt(e) => AppError::Prompt(e),
        }
    }
}
