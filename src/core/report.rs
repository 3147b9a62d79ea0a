//! Human-readable status lines
//!
//! Progress and informational lines go to stdout, per-file errors to stderr.
//! Quiet mode silences everything except errors.

use colored::Colorize;
use std::fmt::Display;
use std::path::Path;

use crate::core::error::ConcatError;
use crate::core::model::{Outcome, RunStats};
use crate::core::render::extension_list;

#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Plain informational line
    pub fn info(&self, message: impl Display) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    /// Banner printed before the walk starts
    pub fn start(&self, source: &Path, output: &Path, extensions: &[String]) {
        self.info(format!(
            "Concatenating code files from {} to {}...",
            source.display(),
            output.display()
        ));
        self.info(format!("Included extensions: {}", extension_list(extensions)));
    }

    /// One line per appended file
    pub fn progress(&self, count: usize, path: &str) {
        self.info(format!("Processed ({}): {}", count, path));
    }

    pub fn note(&self, message: impl Display) {
        if !self.quiet {
            println!("{} {}", "Note:".yellow(), message);
        }
    }

    /// Recoverable error; always printed
    pub fn error(&self, err: &ConcatError) {
        eprintln!("{}", err.to_string().red());
    }

    /// Closing lines for a finished run
    pub fn summary(&self, outcome: &Outcome, source: &Path, extensions: &[String]) {
        match outcome {
            Outcome::Written { output, stats } => {
                self.info(format!(
                    "\n{} {} files concatenated to {}",
                    "Completed!".green().bold(),
                    stats.processed,
                    output.display()
                ));
                self.breakdown(stats);
            }
            Outcome::NoMatches { .. } => {
                self.info(format!(
                    "No files with extensions {} found in {}.",
                    extension_list(extensions),
                    source.display()
                ));
                let skipped = outcome.stats().skipped;
                if skipped > 0 {
                    self.note(format!("{} matching files could not be read", skipped));
                }
            }
        }
    }

    fn breakdown(&self, stats: &RunStats) {
        if stats.by_extension.len() > 1 {
            let parts: Vec<String> = stats
                .by_extension
                .iter()
                .map(|(ext, count)| format!("{} {}", ext, count))
                .collect();
            self.info(format!("By extension: {}", parts.join(", ")));
        }
        if stats.fallback_decoded > 0 {
            self.note(format!(
                "{} files were decoded as latin-1",
                stats.fallback_decoded
            ));
        }
        if stats.skipped > 0 || stats.walk_errors > 0 {
            self.note(format!(
                "{} unreadable files and {} unreadable directory entries were skipped",
                stats.skipped, stats.walk_errors
            ));
        }
    }
}

