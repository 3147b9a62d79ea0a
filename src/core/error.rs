//! Error type for the concatenation pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConcatError {
    /// The source directory is missing or is not a directory
    #[error("Source directory {} not found (current working directory: {})", .path.display(), .cwd.display())]
    SourceNotFound { path: PathBuf, cwd: PathBuf },

    /// A matching file could not be read
    #[error("Error reading {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory entry could not be read during the walk
    #[error("Error reading directory entry under {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The output file could not be written
    #[error("Cannot write output file {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_source_not_found_message() {
        let err = ConcatError::SourceNotFound {
            path: PathBuf::from("src"),
            cwd: PathBuf::from("/work"),
        };
        assert_eq!(
            err.to_string(),
            "Source directory src not found (current working directory: /work)"
        );
    }

    #[test]
    fn test_file_read_message() {
        let err = ConcatError::FileRead {
            path: PathBuf::from("src/a.ts"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("Error reading src/a.ts"));
    }

    #[test]
    fn test_output_write_message() {
        let err = ConcatError::OutputWrite {
            path: PathBuf::from("out/all.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("out/all.txt"));
    }
}
