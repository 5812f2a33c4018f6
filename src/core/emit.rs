//! Output emission.
//!
//! Renders the numbered lines as `"<number> <text>"` joined by newlines
//! with a trailing newline, and writes the result over the output file.

use super::types::{CodeLine, ConvertError};
use std::path::Path;

/// Render the full output text.
pub fn render(code: &[CodeLine]) -> String {
    let mut out = String::new();
    for line in code {
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

/// Write the rendered output, overwriting any existing file.
pub fn write_output(path: &Path, code: &[CodeLine]) -> Result<(), ConvertError> {
    std::fs::write(path, render(code)).map_err(|e| ConvertError::Io {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}
