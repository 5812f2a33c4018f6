//! Reference resolution.
//!
//! Three sweeps over the numbered lines, in a fixed order: constants,
//! then labels, then variables. Constant text may itself contain `@label`
//! or `>variable` tokens, so it must be expanded first. Within each sweep
//! names go longest-first so a name that is a prefix of another is never
//! partially matched.
//!
//! Label and variable substitution is anchored: the match only counts at a
//! true token boundary (next character non-alphanumeric or end of line),
//! and the boundary character survives the rewrite. Constant substitution
//! is a plain global text replacement; the `<...>` brackets make partial
//! matches impossible, but no boundary check is applied to the value.

use super::constants::ConstantTable;
use super::labels::LabelTable;
use super::types::CodeLine;
use super::vars::VariableTable;
use regex::Regex;
use std::sync::OnceLock;

/// Rewrite every reference in the emitted lines to its resolved text.
pub fn resolve(
    code: &mut [CodeLine],
    constants: &ConstantTable,
    labels: &LabelTable,
    vars: &VariableTable,
) {
    sweep_constants(code, constants);
    sweep_labels(code, labels);
    sweep_vars(code, vars);
}

fn sweep_constants(code: &mut [CodeLine], constants: &ConstantTable) {
    let mut names: Vec<&str> = constants.keys().map(String::as_str).collect();
    names.sort_by(|a, b| b.len().cmp(&a.len()));

    for name in names {
        let needle = format!("<{}>", name);
        let value = &constants[name];
        for line in code.iter_mut() {
            if line.text.contains(&needle) {
                line.text = line.text.replace(&needle, value);
            }
        }
    }
}

fn sweep_labels(code: &mut [CodeLine], labels: &LabelTable) {
    for name in labels.names_longest_first() {
        let number = labels.get(name).unwrap_or_default().to_string();
        replace_anchored(code, '@', name, &number);
    }
}

fn sweep_vars(code: &mut [CodeLine], vars: &VariableTable) {
    for name in vars.names_longest_first() {
        let token = vars.get(name).unwrap_or_default().to_string();
        replace_anchored(code, '>', name, &token);
    }
}

/// Replace `<marker><name>` at token boundaries, keeping the boundary
/// character. Replacement text is a line number or a two-letter token, so
/// it never re-triggers a later sweep.
fn replace_anchored(code: &mut [CodeLine], marker: char, name: &str, replacement: &str) {
    let pattern = format!("{}{}([^a-zA-Z0-9]|$)", marker, regex::escape(name));
    let re = Regex::new(&pattern).unwrap();
    let with = format!("{}${{1}}", replacement);

    for line in code.iter_mut() {
        if line.text.contains(marker) {
            line.text = re.replace_all(&line.text, with.as_str()).into_owned();
        }
    }
}

/// Scan resolved lines for leftover reference-shaped tokens. These are
/// emitted verbatim (a `@` or `>` can be legitimate BASIC text), but each
/// one is reported so a typo'd label or variable never passes silently.
pub fn find_unresolved(code: &[CodeLine]) -> Vec<String> {
    fn suspect_pattern() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"@[a-zA-Z0-9]+|>[a-zA-Z][a-zA-Z0-9]+").unwrap())
    }

    let mut warnings = Vec::new();
    for line in code {
        for found in suspect_pattern().find_iter(&line.text) {
            warnings.push(format!(
                "line {}: unresolved reference '{}'",
                line.number,
                found.as_str()
            ));
        }
    }
    warnings
}
