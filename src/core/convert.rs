//! Conversion pipeline.
//!
//! One linear pass: load + include expansion, constant extraction, then a
//! per-line loop interleaving comment stripping, label binding, variable
//! collection and line numbering, followed by the resolution sweeps.
//! All tables are rebuilt from scratch on every run; the engine holds no
//! state between invocations.

use super::constants;
use super::labels::{self, LabelTable};
use super::loader;
use super::normalize::{self, CommentState};
use super::resolve;
use super::types::{
    CodeLine, ConvertConfig, ConvertError, ConvertReport, FIRST_LINE_NUMBER, LINE_NUMBER_STEP,
};
use super::vars::VariableTable;

/// Run the full conversion for one input file. Returns the resolved,
/// numbered lines without writing anything; emission is the caller's step,
/// so a fatal error here leaves the output file untouched.
pub fn convert(config: &ConvertConfig) -> Result<ConvertReport, ConvertError> {
    let mut lines = loader::load_source(&config.input)?;
    let constant_table = constants::extract(&mut lines);

    let mut label_table = LabelTable::new();
    let mut variable_table = VariableTable::new();
    let mut comment_state = CommentState::Normal;
    let mut code: Vec<CodeLine> = Vec::new();
    let mut next_number = FIRST_LINE_NUMBER;

    for raw in &lines {
        let Some(line) = normalize::strip_comments(raw, &mut comment_state) else {
            continue;
        };
        if line.is_empty() {
            continue;
        }

        // A label binds to the number the next surviving line will get
        // and consumes no line number itself.
        if let Some(name) = labels::parse_definition(&line) {
            label_table.bind(name, next_number)?;
            continue;
        }

        variable_table.collect_line(&line)?;
        code.push(CodeLine {
            number: next_number,
            text: line,
        });
        next_number += LINE_NUMBER_STEP;
    }

    resolve::resolve(&mut code, &constant_table, &label_table, &variable_table);
    let warnings = resolve::find_unresolved(&code);

    Ok(ConvertReport {
        labels: label_table.len(),
        variables: variable_table.len(),
        constants: constant_table.len(),
        code,
        warnings,
    })
}
