//! UI module for styled terminal output.
//!
//! Status lines share stdout with the prompts so the conversation reads in
//! order. Colors are used only when stdout is a terminal.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub colors_enabled: bool,
}

impl UiConfig {
    /// Create UI config from the environment
    pub fn new() -> Self {
        Self {
            colors_enabled: should_use_colors(),
        }
    }

    /// Config without any styling
    pub fn plain() -> Self {
        Self {
            colors_enabled: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if we should use colors in output
fn should_use_colors() -> bool {
    // Check NO_COLOR env (standard: https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    io::stdout().is_terminal()
}

/// Styled output writer
pub struct Ui {
    config: UiConfig,
    writer: Box<dyn Write>,
}

impl Ui {
    /// Create a new UI with stdout output
    pub fn new(config: UiConfig) -> Self {
        Self::with_writer(config, Box::new(io::stdout()))
    }

    /// Create UI with custom writer (for testing)
    pub fn with_writer(config: UiConfig, writer: Box<dyn Write>) -> Self {
        if !config.colors_enabled {
            colored::control::set_override(false);
        }

        Self { config, writer }
    }

    /// Print the name of the file about to be processed
    pub fn file_heading(&mut self, filename: &str) {
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{}", filename.bold());
        } else {
            let _ = writeln!(self.writer, "{}", filename);
        }
    }

    /// Print a status line for a file-system action
    pub fn status(&mut self, msg: &str) {
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{}", msg.dimmed());
        } else {
            let _ = writeln!(self.writer, "{}", msg);
        }
    }

    /// Print a success message with checkmark
    pub fn success(&mut self, msg: &str) {
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "✓".green().bold(), msg.green());
        } else {
            let _ = writeln!(self.writer, "* {}", msg);
        }
    }

    /// Print a warning message
    pub fn warning(&mut self, msg: &str) {
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), msg.yellow());
        } else {
            let _ = writeln!(self.writer, "! {}", msg);
        }
    }

    /// Print a blank line
    pub fn blank(&mut self) {
        let _ = writeln!(self.writer);
    }

    pub fn is_colors_enabled(&self) -> bool {
        self.config.colors_enabled
    }
}
