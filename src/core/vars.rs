//! Variable collection and two-character token assignment.
//!
//! A `>name` reference (letter followed by one or more alphanumerics,
//! terminated by a non-alphanumeric or end of line) names a long-form
//! variable. On first sight each distinct name takes the next token from a
//! fixed pool: `aa` through `zz` in lexicographic order, minus the target
//! interpreter's reserved words. The first variable seen always gets `aa`.

use super::types::ConvertError;
use indexmap::IndexMap;
use regex::Regex;
use std::collections::VecDeque;
use std::sync::OnceLock;

/// Two-character sequences the target BASIC treats as keywords; never
/// handed out as variable tokens.
pub const RESERVED_TOKENS: [&str; 7] = ["if", "or", "go", "to", "fn", "ti", "st"];

fn reference_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r">([a-zA-Z][a-zA-Z0-9]+)([^a-zA-Z0-9]|$)").unwrap())
}

/// Generate the token pool: all 676 two-letter combinations minus the
/// reserved words, in lexicographic order. Pure and deterministic.
pub fn token_pool() -> VecDeque<String> {
    let mut pool = VecDeque::with_capacity(26 * 26);
    for a in b'a'..=b'z' {
        for b in b'a'..=b'z' {
            let token = String::from_utf8(vec![a, b]).unwrap();
            if !RESERVED_TOKENS.contains(&token.as_str()) {
                pool.push_back(token);
            }
        }
    }
    pool
}

/// Variable name → assigned token, in first-occurrence order.
#[derive(Debug, Clone)]
pub struct VariableTable {
    assigned: IndexMap<String, String>,
    pool: VecDeque<String>,
}

impl Default for VariableTable {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableTable {
    pub fn new() -> Self {
        Self {
            assigned: IndexMap::new(),
            pool: token_pool(),
        }
    }

    /// Scan one surviving line for variable references and assign a token
    /// to every name seen for the first time.
    pub fn collect_line(&mut self, line: &str) -> Result<(), ConvertError> {
        for caps in reference_pattern().captures_iter(line) {
            let name = &caps[1];
            if !self.assigned.contains_key(name) {
                let token = self
                    .pool
                    .pop_front()
                    .ok_or_else(|| ConvertError::VariablePoolExhausted(name.to_string()))?;
                self.assigned.insert(name.to_string(), token);
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.assigned.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Names sorted longest-first for the resolver sweep.
    pub fn names_longest_first(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.assigned.keys().map(String::as_str).collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()));
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_vars_pool_size_and_order() {
        let pool = token_pool();
        assert_eq!(pool.len(), 26 * 26 - RESERVED_TOKENS.len());
        assert_eq!(pool[0], "aa");
        assert_eq!(pool[1], "ab");
        assert_eq!(pool[pool.len() - 1], "zz");
    }

    #[test]
    fn test_vars_pool_excludes_reserved() {
        let pool = token_pool();
        for reserved in RESERVED_TOKENS {
            assert!(!pool.contains(&reserved.to_string()), "pool contains '{}'", reserved);
        }
    }

    #[test]
    fn test_vars_first_variable_gets_aa() {
        let mut table = VariableTable::new();
        table.collect_line("print >score").unwrap();
        assert_eq!(table.get("score"), Some("aa"));
    }

    #[test]
    fn test_vars_first_occurrence_order() {
        let mut table = VariableTable::new();
        table.collect_line("let >xpos = >ypos + >xpos").unwrap();
        assert_eq!(table.get("xpos"), Some("aa"));
        assert_eq!(table.get("ypos"), Some("ab"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_vars_reference_needs_two_characters() {
        let mut table = VariableTable::new();
        // Single-letter `>x` and comparisons like `>=` are not references.
        table.collect_line("if a >x then b >= 1").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_vars_name_cannot_start_with_digit() {
        let mut table = VariableTable::new();
        table.collect_line("poke >1abc").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_vars_reference_at_end_of_line() {
        let mut table = VariableTable::new();
        table.collect_line("print >tail").unwrap();
        assert_eq!(table.get("tail"), Some("aa"));
    }

    #[test]
    fn test_vars_multiple_per_line() {
        let mut table = VariableTable::new();
        table.collect_line(">aaa=>bbb+>ccc").unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_vars_pool_exhaustion_is_fatal() {
        let mut table = VariableTable::new();
        table.pool = VecDeque::from(vec!["aa".to_string()]);
        table.collect_line("print >first").unwrap();
        let err = table.collect_line("print >second").unwrap_err();
        assert_eq!(
            err,
            ConvertError::VariablePoolExhausted("second".to_string())
        );
    }

    proptest! {
        /// Distinct names always receive distinct, non-reserved tokens.
        #[test]
        fn prop_vars_tokens_distinct_and_legal(names in proptest::collection::hash_set("[a-z]{2,6}", 1..40)) {
            let mut table = VariableTable::new();
            for name in &names {
                table.collect_line(&format!("print >{}", name)).unwrap();
            }
            let tokens: std::collections::HashSet<_> =
                names.iter().map(|n| table.get(n).unwrap().to_string()).collect();
            prop_assert_eq!(tokens.len(), names.len());
            for token in &tokens {
                prop_assert!(!RESERVED_TOKENS.contains(&token.as_str()));
            }
        }
    }
}
