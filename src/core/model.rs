//! Run model
//!
//! Everything a single concatenation run owns: its configuration, the records
//! produced for each matching file, the counters and the output buffer.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::core::render::segment_marker;

/// Source directory scanned when none is given
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Output file written when none is given
pub const DEFAULT_OUTPUT_FILE: &str = "all-code.txt";

/// Extensions included when no allow-list is given
pub const DEFAULT_EXTENSIONS: [&str; 6] = [".ts", ".tsx", ".js", ".jsx", ".css", ".html"];

/// Owned copy of [`DEFAULT_EXTENSIONS`]
pub fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

/// Configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatConfig {
    /// Directory walked recursively
    pub source: PathBuf,

    /// File the concatenated output is written to
    pub output: PathBuf,

    /// Allowed extensions, each with its leading dot
    pub extensions: Vec<String>,
}

impl Default for ConcatConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            extensions: default_extensions(),
        }
    }
}

/// Encoding a file's text was decoded with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// ISO-8859-1, every byte maps to the code point of the same value
    Latin1,
}

impl TextEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
        }
    }
}

/// A matching file that has been read and is about to be appended
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Path as written into the segment marker ('/' separated)
    pub path: String,

    /// Extension with its leading dot
    pub extension: String,

    /// Decoded file content
    pub content: String,

    pub encoding: TextEncoding,
}

impl FileRecord {
    pub fn used_fallback(&self) -> bool {
        self.encoding != TextEncoding::Utf8
    }
}

/// Counters for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Files appended to the output
    pub processed: usize,

    /// Processed files that needed the fallback encoding
    pub fallback_decoded: usize,

    /// Matching files skipped because they could not be read
    pub skipped: usize,

    /// Directory entries the walk could not read
    pub walk_errors: usize,

    /// Processed files per extension
    pub by_extension: BTreeMap<String, usize>,
}

impl RunStats {
    /// Count a record that was appended to the output
    pub fn record(&mut self, record: &FileRecord) {
        self.processed += 1;
        if record.used_fallback() {
            self.fallback_decoded += 1;
        }
        *self.by_extension.entry(record.extension.clone()).or_insert(0) += 1;
    }
}

/// In-memory accumulator for the output file
///
/// Starts with the header; every segment is appended in traversal order and
/// nothing reaches disk until the whole buffer is written at once.
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    content: String,
    segments: usize,
}

impl OutputBuffer {
    /// Create a buffer holding only the header
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            content: header.into(),
            segments: 0,
        }
    }

    /// Append a file's separator marker and its content
    pub fn push_segment(&mut self, record: &FileRecord) {
        self.content.push_str(&segment_marker(&record.path));
        self.content.push_str(&record.content);
        self.segments += 1;
    }

    /// Number of segments appended so far
    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments == 0
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The output file was written
    Written { output: PathBuf, stats: RunStats },

    /// No matching file was processed and nothing was written
    NoMatches { stats: RunStats },
}

impl Outcome {
    pub fn stats(&self) -> &RunStats {
        match self {
            Outcome::Written { stats, .. } | Outcome::NoMatches { stats } => stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, content: &str) -> FileRecord {
        FileRecord {
            path: path.to_string(),
            extension: ".ts".to_string(),
            content: content.to_string(),
            encoding: TextEncoding::Utf8,
        }
    }

    #[test]
    fn test_config_default() {
        let config = ConcatConfig::default();
        assert_eq!(config.source, PathBuf::from("src"));
        assert_eq!(config.output, PathBuf::from("all-code.txt"));
        assert_eq!(
            config.extensions,
            vec![".ts", ".tsx", ".js", ".jsx", ".css", ".html"]
        );
    }

    #[test]
    fn test_buffer_starts_with_header() {
        let buffer = OutputBuffer::new("// header\n\n");
        assert!(buffer.is_empty());
        assert_eq!(buffer.as_str(), "// header\n\n");
    }

    #[test]
    fn test_buffer_push_segment() {
        let mut buffer = OutputBuffer::new("H\n");
        buffer.push_segment(&record("src/a.ts", "let a;"));
        buffer.push_segment(&record("src/b.ts", "let b;"));

        assert_eq!(buffer.segments(), 2);
        assert_eq!(
            buffer.as_str(),
            "H\n\n\n// ===== File: src/a.ts =====\n\nlet a;\n\n// ===== File: src/b.ts =====\n\nlet b;"
        );
    }

    #[test]
    fn test_used_fallback() {
        let mut r = record("a.ts", "x");
        assert!(!r.used_fallback());
        r.encoding = TextEncoding::Latin1;
        assert!(r.used_fallback());
        assert_eq!(r.encoding.as_str(), "latin-1");
    }

    #[test]
    fn test_stats_record() {
        let mut stats = RunStats::default();
        stats.record(&record("a.ts", "x"));
        let mut css = record("b.css", "y");
        css.extension = ".css".to_string();
        css.encoding = TextEncoding::Latin1;
        stats.record(&css);
        stats.record(&record("c.ts", "z"));

        assert_eq!(stats.processed, 3);
        assert_eq!(stats.fallback_decoded, 1);
        assert_eq!(stats.by_extension.get(".ts"), Some(&2));
        assert_eq!(stats.by_extension.get(".css"), Some(&1));
    }

    #[test]
    fn test_outcome_stats() {
        let stats = RunStats {
            processed: 3,
            ..Default::default()
        };
        let outcome = Outcome::Written {
            output: PathBuf::from("out.txt"),
            stats,
        };
        assert_eq!(outcome.stats().processed, 3);
        assert_eq!(Outcome::NoMatches { stats: RunStats::default() }.stats().processed, 0);
    }
}
