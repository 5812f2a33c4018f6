//! Label collection.
//!
//! A surviving line consisting of `@` plus arbitrary text defines a label.
//! The label binds to the line number the *next* surviving line will
//! receive; the definition line itself consumes no line number. Defining
//! the same label twice invalidates the whole run.

use super::types::ConvertError;
use indexmap::IndexMap;

/// Label name → resolved BASIC line number.
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    bindings: IndexMap<String, u32>,
}

/// Everything after a leading `@` is the label text, with no further
/// pattern restriction.
pub fn parse_definition(line: &str) -> Option<&str> {
    line.strip_prefix('@').filter(|rest| !rest.is_empty())
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a label to a line number. A repeated name is fatal.
    pub fn bind(&mut self, name: &str, line_number: u32) -> Result<(), ConvertError> {
        if self.bindings.contains_key(name) {
            return Err(ConvertError::DuplicateLabel(name.to_string()));
        }
        self.bindings.insert(name.to_string(), line_number);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.bindings.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Names sorted longest-first, so a name that is a prefix of another
    /// is never substituted into the longer one.
    pub fn names_longest_first(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()));
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_parse_definition() {
        assert_eq!(parse_definition("@start"), Some("start"));
        assert_eq!(parse_definition("@main loop"), Some("main loop"));
        assert_eq!(parse_definition("@"), None);
        assert_eq!(parse_definition("print @start"), None);
    }

    #[test]
    fn test_labels_bind_and_get() {
        let mut table = LabelTable::new();
        table.bind("start", 10).unwrap();
        table.bind("loop", 25).unwrap();
        assert_eq!(table.get("start"), Some(10));
        assert_eq!(table.get("loop"), Some(25));
        assert_eq!(table.get("missing"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_labels_duplicate_is_fatal() {
        let mut table = LabelTable::new();
        table.bind("loop", 10).unwrap();
        let err = table.bind("loop", 40).unwrap_err();
        assert_eq!(err, ConvertError::DuplicateLabel("loop".to_string()));
    }

    #[test]
    fn test_labels_longest_first_ordering() {
        let mut table = LabelTable::new();
        table.bind("foo", 10).unwrap();
        table.bind("foobar", 15).unwrap();
        table.bind("fo", 20).unwrap();
        assert_eq!(table.names_longest_first(), vec!["foobar", "foo", "fo"]);
    }
}
