//! Shared types for the conversion engine.
//!
//! Defines the error taxonomy, the numbered output line, the immutable
//! per-run configuration and the conversion report.

use std::fmt;
use std::path::{Path, PathBuf};

/// First BASIC line number assigned to output.
pub const FIRST_LINE_NUMBER: u32 = 10;

/// Increment between consecutive BASIC line numbers.
pub const LINE_NUMBER_STEP: u32 = 5;

// ============================================================================
// Errors
// ============================================================================

/// Fatal conversion error. Every variant aborts the run before any
/// output is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Input file was not given or does not exist.
    MissingInput(PathBuf),

    /// An `@include` directive referenced a file that does not exist.
    IncludeNotFound(String),

    /// More files were inlined than the expansion cap allows.
    /// An include cycle shows up as this error rather than looping forever.
    IncludeLimitExceeded(usize),

    /// The same label was defined twice.
    DuplicateLabel(String),

    /// The two-character token pool ran dry; carries the variable name
    /// that could not be assigned.
    VariablePoolExhausted(String),

    /// Filesystem read/write failure.
    Io { path: PathBuf, detail: String },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput(path) => {
                write!(f, "input file '{}' not found or not specified", path.display())
            }
            Self::IncludeNotFound(file) => {
                write!(f, "include file '{}' not found", file)
            }
            Self::IncludeLimitExceeded(limit) => {
                write!(
                    f,
                    "more than {} files inlined — include cycle suspected",
                    limit
                )
            }
            Self::DuplicateLabel(label) => {
                write!(f, "label '{}' is defined more than once", label)
            }
            Self::VariablePoolExhausted(name) => {
                write!(f, "no two-character token left for variable '{}'", name)
            }
            Self::Io { path, detail } => {
                write!(f, "{}: {}", path.display(), detail)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

// ============================================================================
// Output lines
// ============================================================================

/// A single numbered BASIC output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLine {
    /// Assigned BASIC line number.
    pub number: u32,

    /// Line text; rewritten in place by the reference resolver.
    pub text: String,
}

impl fmt::Display for CodeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.text)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Emulator speed selection for the `x64` launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmulatorSpeed {
    Normal,
    Warp,
}

/// Immutable configuration for one conversion run, built once from the
/// parsed command line and passed by reference into the engine.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Entry source file.
    pub input: PathBuf,

    /// Numbered BASIC output, `<input>.bas`.
    pub outfile: PathBuf,

    /// Loadable binary produced by petcat, `<input>.prg`.
    pub prgfile: PathBuf,

    /// Echo the numbered lines to the console.
    pub echo: bool,

    /// Clear the console before each run.
    pub clear: bool,

    /// Invoke petcat after a successful conversion.
    pub build_prg: bool,

    /// Launch the emulator after a successful petcat run.
    pub emulator: Option<EmulatorSpeed>,

    /// Re-run the conversion whenever the input file changes.
    pub watch: bool,
}

impl ConvertConfig {
    /// Build a config for an input path; output filenames are derived by
    /// appending `.bas` / `.prg` to the full input name.
    pub fn new(input: PathBuf) -> Self {
        let outfile = with_suffix(&input, ".bas");
        let prgfile = with_suffix(&input, ".prg");
        Self {
            input,
            outfile,
            prgfile,
            echo: false,
            clear: false,
            build_prg: false,
            emulator: None,
            watch: false,
        }
    }
}

/// Append a suffix to a path without touching its existing extension,
/// so `code.txt` becomes `code.txt.bas`.
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

// ============================================================================
// Report
// ============================================================================

/// Result of one conversion run, before emission.
#[derive(Debug, Clone)]
pub struct ConvertReport {
    /// Fully resolved, numbered output lines.
    pub code: Vec<CodeLine>,

    /// Number of labels bound.
    pub labels: usize,

    /// Number of distinct variables assigned tokens.
    pub variables: usize,

    /// Number of constants recorded.
    pub constants: usize,

    /// Unresolved-reference warnings, one per suspect token.
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_code_line_display() {
        let line = CodeLine {
            number: 10,
            text: "print \"hi\"".to_string(),
        };
        assert_eq!(line.to_string(), "10 print \"hi\"");
    }

    #[test]
    fn test_types_config_derives_filenames() {
        let cfg = ConvertConfig::new(PathBuf::from("game/code.txt"));
        assert_eq!(cfg.outfile, PathBuf::from("game/code.txt.bas"));
        assert_eq!(cfg.prgfile, PathBuf::from("game/code.txt.prg"));
        assert!(!cfg.echo);
        assert!(cfg.emulator.is_none());
    }

    #[test]
    fn test_types_error_display() {
        let e = ConvertError::DuplicateLabel("loop".to_string());
        assert_eq!(e.to_string(), "label 'loop' is defined more than once");

        let e = ConvertError::IncludeNotFound("lib.txt".to_string());
        assert_eq!(e.to_string(), "include file 'lib.txt' not found");

        let e = ConvertError::VariablePoolExhausted("score".to_string());
        assert!(e.to_string().contains("score"));
    }
}
