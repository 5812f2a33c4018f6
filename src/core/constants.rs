//! Constant extraction.
//!
//! A constant is defined on a line of its own, before comment stripping:
//!
//! ```text
//! <pokeBlack> = 0
//! <greeting> = hello there
//! ```
//!
//! The value is everything after `=`, taken verbatim. Redefining a constant
//! overwrites the earlier value (last one wins).

use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

/// Name → literal replacement text, in definition order.
pub type ConstantTable = IndexMap<String, String>;

fn definition_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^<([a-zA-Z0-9]+)> *= *(.+)$").unwrap())
}

/// Record every constant definition and blank its line so it contributes
/// nothing to output or line numbering.
pub fn extract(lines: &mut [String]) -> ConstantTable {
    let mut table = ConstantTable::new();

    for line in lines.iter_mut() {
        if let Some(caps) = definition_pattern().captures(line) {
            table.insert(caps[1].to_string(), caps[2].to_string());
            line.clear();
        }
    }

    table
}
