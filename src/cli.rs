//! CLI module - Command-line interface definitions and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::model::{ConcatConfig, DEFAULT_OUTPUT_FILE, DEFAULT_SOURCE_DIR};
use crate::core::paths::normalize_extensions;
use crate::core::report::Reporter;
use crate::flows::concat::Concatenator;

/// concat-code - concatenate every code file under a source directory into one file.
#[derive(Parser, Debug)]
#[command(name = "concat-code")]
#[command(
    author,
    version,
    about,
    long_about = r#"concat-code walks a source directory recursively and writes every file whose
extension is on the allow-list into a single text file. Each file is preceded by
a separator comment carrying its path:

    // ===== File: src/app/main.ts =====

Files that are not valid UTF-8 are read as Latin-1 instead of being dropped.
Nothing is written when no matching file is found.

Examples:
    concat-code
    concat-code bundle.txt
    concat-code --source web/src --ext ts,tsx out.txt
"#
)]
pub struct Cli {
    /// Output file (defaults to all-code.txt).
    #[arg(
        value_name = "OUTPUT_FILE",
        default_value = DEFAULT_OUTPUT_FILE,
        long_help = "Path of the file to write. An existing file is overwritten.\n\n\
The parent directory must already exist."
    )]
    pub output: PathBuf,

    /// Source directory to scan.
    #[arg(
        long,
        default_value = DEFAULT_SOURCE_DIR,
        value_name = "DIR",
        long_help = "Directory to scan recursively (defaults to ./src).\n\n\
Path markers in the output are written as reached from this argument, so\n\
`--source src` produces markers such as `src/app/main.ts`."
    )]
    pub source: PathBuf,

    /// Extension allow-list (comma-separated).
    #[arg(
        long = "ext",
        value_name = "EXTS",
        value_delimiter = ',',
        long_help = "Comma-separated list of file extensions to include. Replaces the\n\
default list (.ts, .tsx, .js, .jsx, .css, .html).\n\n\
The leading dot is optional: `--ext ts,.css` is accepted. Matching is\n\
case-sensitive."
    )]
    pub extensions: Vec<String>,

    /// Quiet mode (errors only).
    #[arg(
        short,
        long,
        long_help = "Suppress per-file progress and informational lines. Read errors and\n\
fatal errors are still printed to stderr."
    )]
    pub quiet: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored status prefixes. This is useful when piping to files or\n\
when your terminal does not support ANSI colors."
    )]
    pub no_color: bool,
}

impl Cli {
    /// Build the run configuration, falling back to the defaults for anything not given
    pub fn to_config(&self) -> ConcatConfig {
        let mut config = ConcatConfig {
            source: self.source.clone(),
            output: self.output.clone(),
            ..Default::default()
        };

        let extensions = normalize_extensions(&self.extensions);
        if !extensions.is_empty() {
            config.extensions = extensions;
        }

        config
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = cli.to_config();
    Concatenator::new(config, Reporter::new(cli.quiet)).run()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::default_extensions;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["concat-code"]).unwrap();
        let config = cli.to_config();

        assert_eq!(config.source, PathBuf::from("src"));
        assert_eq!(config.output, PathBuf::from("all-code.txt"));
        assert_eq!(config.extensions, default_extensions());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_positional_output() {
        let cli = Cli::try_parse_from(["concat-code", "bundle.txt"]).unwrap();
        assert_eq!(cli.to_config().output, PathBuf::from("bundle.txt"));
    }

    #[test]
    fn test_ext_flag_replaces_defaults() {
        let cli = Cli::try_parse_from(["concat-code", "--ext", "ts,.css"]).unwrap();
        assert_eq!(cli.to_config().extensions, vec![".ts", ".css"]);
    }

    #[test]
    fn test_empty_ext_flag_keeps_defaults() {
        let cli = Cli::try_parse_from(["concat-code", "--ext", ""]).unwrap();
        assert_eq!(cli.to_config().extensions, default_extensions());
    }

    #[test]
    fn test_too_many_positionals_rejected() {
        assert!(Cli::try_parse_from(["concat-code", "a.txt", "b.txt"]).is_err());
    }
}
