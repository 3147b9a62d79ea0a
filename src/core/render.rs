//! Output rendering
//!
//! Header:
//! ```text
//! // All code files from {src_dir}
//! // Generated on {timestamp}
//! // Extensions included: {ext, ext, ...}
//!
//! ```
//! Each file then follows as a segment starting with [`segment_marker`].

use chrono::{DateTime, SecondsFormat, Utc};

/// Join an extension list for display (`.ts, .tsx, .js`)
pub fn extension_list(extensions: &[String]) -> String {
    extensions.join(", ")
}

/// Render the output header
pub fn header(source: &str, generated_at: DateTime<Utc>, extensions: &[String]) -> String {
    format!(
        "// All code files from {}\n// Generated on {}\n// Extensions included: {}\n\n",
        source,
        timestamp(generated_at),
        extension_list(extensions)
    )
}

/// Separator written before each file's content
pub fn segment_marker(path: &str) -> String {
    format!("\n\n// ===== File: {} =====\n\n", path)
}

/// ISO-8601 timestamp, UTC with millisecond precision
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_timestamp() {
        assert_eq!(timestamp(fixed_time()), "2024-05-01T12:30:00.000Z");
    }

    #[test]
    fn test_header() {
        let extensions = vec![".ts".to_string(), ".css".to_string()];
        let rendered = header("src", fixed_time(), &extensions);

        assert_eq!(
            rendered,
            "// All code files from src\n\
             // Generated on 2024-05-01T12:30:00.000Z\n\
             // Extensions included: .ts, .css\n\n"
        );
    }

    #[test]
    fn test_segment_marker() {
        assert_eq!(
            segment_marker("src/a/x.ts"),
            "\n\n// ===== File: src/a/x.ts =====\n\n"
        );
    }

    #[test]
    fn test_extension_list_empty() {
        assert_eq!(extension_list(&[]), "");
    }
}
