//! Concatenation flow - Collect matching files into a single output file
//!
//! Steps:
//! 1. Validate that the source directory exists
//! 2. Walk it, reading every file on the extension allow-list into the buffer
//! 3. Write the buffer once, unless nothing matched
//!
//! A file that cannot be read is reported and skipped; only a missing source
//! directory or a failed write end the run with an error.

use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

use crate::backends::scan::{validate_source, walk};
use crate::core::error::ConcatError;
use crate::core::file_reader::read_file_text;
use crate::core::model::{ConcatConfig, FileRecord, OutputBuffer, Outcome, RunStats};
use crate::core::paths::{extension_of, has_allowed_extension, normalize_path};
use crate::core::render::header;
use crate::core::report::Reporter;

pub struct Concatenator {
    config: ConcatConfig,
    reporter: Reporter,
    stats: RunStats,
}

impl Concatenator {
    pub fn new(config: ConcatConfig, reporter: Reporter) -> Self {
        Self {
            config,
            reporter,
            stats: RunStats::default(),
        }
    }

    /// Run the whole pipeline, stamping the header with the current time
    pub fn run(self) -> Result<Outcome, ConcatError> {
        self.run_at(Utc::now())
    }

    /// Run the whole pipeline with a fixed generation time
    pub fn run_at(mut self, generated_at: DateTime<Utc>) -> Result<Outcome, ConcatError> {
        self.reporter.start(
            &self.config.source,
            &self.config.output,
            &self.config.extensions,
        );

        validate_source(&self.config.source)?;

        let mut buffer = OutputBuffer::new(header(
            &normalize_path(&self.config.source),
            generated_at,
            &self.config.extensions,
        ));

        for entry in walk(&self.config.source) {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    self.stats.walk_errors += 1;
                    self.reporter.error(&e);
                    continue;
                }
            };

            if !has_allowed_extension(&path, &self.config.extensions) {
                continue;
            }

            match read_record(&path) {
                Ok(record) => self.append_segment(&mut buffer, &record),
                Err(e) => {
                    self.stats.skipped += 1;
                    self.reporter.error(&e);
                }
            }
        }

        let outcome = self.finalize(&buffer)?;
        self.reporter
            .summary(&outcome, &self.config.source, &self.config.extensions);

        Ok(outcome)
    }

    /// Append one file's segment and count it
    pub fn append_segment(&mut self, buffer: &mut OutputBuffer, record: &FileRecord) {
        if record.used_fallback() {
            self.reporter.note(format!(
                "Used {} encoding for {}",
                record.encoding.as_str(),
                record.path
            ));
        }

        buffer.push_segment(record);
        self.stats.record(record);
        self.reporter.progress(self.stats.processed, &record.path);
    }

    /// Write the buffer to the output path, or do nothing when no file matched
    pub fn finalize(&mut self, buffer: &OutputBuffer) -> Result<Outcome, ConcatError> {
        debug_assert_eq!(buffer.segments(), self.stats.processed);

        let stats = std::mem::take(&mut self.stats);
        if buffer.is_empty() {
            return Ok(Outcome::NoMatches { stats });
        }

        let output = self.config.output.clone();
        write_output(&output, buffer)?;

        Ok(Outcome::Written { output, stats })
    }
}

/// Read a matching file into a record
fn read_record(path: &Path) -> Result<FileRecord, ConcatError> {
    let decoded = read_file_text(path).map_err(|source| ConcatError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(FileRecord {
        path: normalize_path(path),
        extension: extension_of(path).unwrap_or_default(),
        content: decoded.text,
        encoding: decoded.encoding,
    })
}

/// Write the whole buffer in one call, replacing any existing file
fn write_output(output: &Path, buffer: &OutputBuffer) -> Result<(), ConcatError> {
    fs::write(output, buffer.as_str()).map_err(|source| ConcatError::OutputWrite {
        path: output.to_path_buf(),
        source,
    })
}
