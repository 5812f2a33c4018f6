//! Source loading and `@include` expansion.
//!
//! Reads the entry file and inlines every `@include <path>` directive in a
//! single left-to-right pass over the growing line list, so newly inlined
//! lines are themselves scanned for further directives. There is no cycle
//! detection; a cycle runs into the flat expansion cap instead.

use super::types::ConvertError;
use crate::console;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Hard cap on inlined files per run.
pub const INCLUDE_LIMIT: usize = 256;

fn include_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^@include (.+)$").unwrap())
}

/// Read the entry file and return its lines with all includes expanded.
/// The directive line itself is blanked so it never reaches the emitter.
pub fn load_source(entry: &Path) -> Result<Vec<String>, ConvertError> {
    if !entry.is_file() {
        return Err(ConvertError::MissingInput(entry.to_path_buf()));
    }

    let mut lines = read_lines(entry)?;
    let mut inlined = 0usize;
    let mut i = 0;

    while i < lines.len() {
        if let Some(caps) = include_pattern().captures(&lines[i]) {
            let file = caps[1].to_string();
            let path = Path::new(&file);
            if !path.is_file() {
                return Err(ConvertError::IncludeNotFound(file));
            }

            inlined += 1;
            if inlined > INCLUDE_LIMIT {
                return Err(ConvertError::IncludeLimitExceeded(INCLUDE_LIMIT));
            }

            console::status(&format!("including file '{}'", file));
            let included = read_lines(path)?;

            // Blank the directive and splice the file contents after it;
            // the next iteration lands on the first included line.
            lines[i] = String::new();
            let at = i + 1;
            lines.splice(at..at, included);
        }
        i += 1;
    }

    Ok(lines)
}

fn read_lines(path: &Path) -> Result<Vec<String>, ConvertError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConvertError::Io {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    Ok(content.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_loader_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let entry = dir.path().join("main.txt");
        fs::write(&entry, "print 1\nprint 2\n").unwrap();

        let lines = load_source(&entry).unwrap();
        assert_eq!(lines, vec!["print 1", "print 2"]);
    }

    #[test]
    fn test_loader_missing_input() {
        let err = load_source(Path::new("/no/such/file.txt")).unwrap_err();
        assert!(matches!(err, ConvertError::MissingInput(_)));
    }

    #[test]
    fn test_loader_include_expansion_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir.path().join("lib.txt");
        fs::write(&lib, "lib line 1\nlib line 2\n").unwrap();
        let entry = dir.path().join("main.txt");
        fs::write(
            &entry,
            format!("before\n@include {}\nafter\n", lib.display()),
        )
        .unwrap();

        let lines = load_source(&entry).unwrap();
        // Directive line is blanked, contents spliced right after it.
        assert_eq!(lines, vec!["before", "", "lib line 1", "lib line 2", "after"]);
    }

    #[test]
    fn test_loader_nested_includes() {
        let dir = tempfile::tempdir().unwrap();
        let inner = dir.path().join("inner.txt");
        fs::write(&inner, "innermost\n").unwrap();
        let outer = dir.path().join("outer.txt");
        fs::write(&outer, format!("@include {}\n", inner.display())).unwrap();
        let entry = dir.path().join("main.txt");
        fs::write(&entry, format!("@include {}\n", outer.display())).unwrap();

        let lines = load_source(&entry).unwrap();
        assert!(lines.contains(&"innermost".to_string()));
    }

    #[test]
    fn test_loader_include_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let entry = dir.path().join("main.txt");
        fs::write(&entry, "@include missing-lib.txt\n").unwrap();

        let err = load_source(&entry).unwrap_err();
        assert_eq!(
            err,
            ConvertError::IncludeNotFound("missing-lib.txt".to_string())
        );
    }

    #[test]
    fn test_loader_include_cycle_hits_cap() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, format!("@include {}\n", b.display())).unwrap();
        fs::write(&b, format!("@include {}\n", a.display())).unwrap();

        let err = load_source(&a).unwrap_err();
        assert_eq!(err, ConvertError::IncludeLimitExceeded(INCLUDE_LIMIT));
    }

    #[test]
    fn test_loader_directive_requires_line_start() {
        let dir = tempfile::tempdir().unwrap();
        let entry = dir.path().join("main.txt");
        // Indented directive is not a directive.
        fs::write(&entry, "  @include nothing.txt\n").unwrap();

        let lines = load_source(&entry).unwrap();
        assert_eq!(lines, vec!["  @include nothing.txt"]);
    }
}
