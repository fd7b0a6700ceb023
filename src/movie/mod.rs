mod name_builder;
mod sidecar;

pub use name_builder::{build_movie_filename, build_sidecar_filename};
pub use sidecar::{render_sidecar, write_sidecar, SIDECAR_EXTENSION};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::parser::parse_movie_filename;
use crate::prompt::{PromptError, Prompter, NAME_PROMPT, SUFFIX_PROMPT, YEAR_PROMPT};
use crate::ui::Ui;

/// Errors that can occur while processing a single movie file
#[derive(Error, Debug)]
pub enum MovieError {
    #[error("Failed to rename '{from}' to '{to}': {source}")]
    Rename {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write sidecar {path:?}: {source}")]
    Sidecar {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// What a rename attempt did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed { from: String, to: String },
    /// The source file was gone, nothing was touched
    SourceMissing { filename: String },
}

/// A movie file in a directory, with its editable name, year and suffix
#[derive(Debug, Clone)]
pub struct MovieFile {
    dir: PathBuf,
    filename: String,
    pub name: String,
    pub year: String,
    pub suffix: String,
}

impl MovieFile {
    /// Derive name, year and suffix from `filename`, located in `dir`
    pub fn new(dir: impl Into<PathBuf>, filename: &str, clock: &dyn Clock) -> Self {
        let parts = parse_movie_filename(filename, clock);

        debug!(
            filename,
            name = %parts.name,
            year = %parts.year,
            suffix = %parts.suffix,
            year_detected = parts.year_detected(),
            "Derived movie fields"
        );

        Self {
            dir: dir.into(),
            filename: filename.to_string(),
            name: parts.name,
            year: parts.year,
            suffix: parts.suffix,
        }
    }

    /// Original filename, as found on disk
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn source_path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }

    pub fn target_filename(&self) -> String {
        build_movie_filename(&self.name, &self.year, &self.suffix)
    }

    pub fn sidecar_filename(&self) -> String {
        build_sidecar_filename(&self.name, &self.year)
    }

    /// Let the user confirm or edit name, year and suffix in turn
    pub fn update(&mut self, prompter: &mut dyn Prompter) -> Result<(), MovieError> {
        self.name = prompter.prompt_with_default(NAME_PROMPT, &self.name)?;
        self.year = prompter.prompt_with_default(YEAR_PROMPT, &self.year)?;
        self.suffix = prompter.prompt_with_default(SUFFIX_PROMPT, &self.suffix)?;

        debug!(name = %self.name, year = %self.year, suffix = %self.suffix, "Fields confirmed");
        Ok(())
    }

    /// Rename the file to `{name}({year}).{suffix}`.
    ///
    /// If the source file no longer exists nothing is renamed and
    /// [`RenameOutcome::SourceMissing`] is returned.
    pub fn rename(&self, ui: &mut Ui) -> Result<RenameOutcome, MovieError> {
        let source = self.source_path();
        let target_name = self.target_filename();

        if !source.is_file() {
            warn!(path = ?source, "Source file disappeared, skipping rename");
            ui.warning(&format!(
                "{} no longer exists, not renaming it",
                self.filename
            ));
            return Ok(RenameOutcome::SourceMissing {
                filename: self.filename.clone(),
            });
        }

        let target = self.dir.join(&target_name);
        if target != source && target.exists() {
            warn!(path = ?target, "Rename target exists and will be replaced");
        }

        ui.status(&format!("Renaming {} to {}...", self.filename, target_name));

        fs::rename(&source, &target).map_err(|e| MovieError::Rename {
            from: self.filename.clone(),
            to: target_name.clone(),
            source: e,
        })?;

        info!("Renamed: {} -> {}", self.filename, target_name);

        Ok(RenameOutcome::Renamed {
            from: self.filename.clone(),
            to: target_name,
        })
    }

    /// Write the `.nfo` sidecar next to the movie, replacing any existing one
    pub fn write_sidecar(&self, ui: &mut Ui) -> Result<PathBuf, MovieError> {
        let path = self.dir.join(self.sidecar_filename());

        ui.status(&format!("Creating .{} file...", SIDECAR_EXTENSION));

        write_sidecar(&path, &self.name, &self.year).map_err(|e| MovieError::Sidecar {
            path: path.clone(),
            source: e,
        })?;

        info!("Sidecar written: {:?}", path);
        Ok(path)
    }
}
