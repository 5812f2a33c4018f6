//! Line normalization: whitespace trimming and comment stripping.
//!
//! Comment handling is a two-state machine. Only line-leading markers count:
//! a `//` or `/*` in the middle of a line is ordinary BASIC text. A block
//! comment closes only on a line that *starts* with `*/`; that closing line
//! is itself discarded.

/// Comment-tracking state carried across the per-line loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentState {
    Normal,
    InBlockComment,
}

/// Trim a raw line and strip comments. Returns the surviving text, or
/// `None` when the line is consumed by a comment and must not reach the
/// label/variable/numbering stages.
pub fn strip_comments(raw: &str, state: &mut CommentState) -> Option<String> {
    let line = raw.trim();

    match *state {
        CommentState::InBlockComment => {
            if line.starts_with("*/") {
                *state = CommentState::Normal;
            }
            None
        }
        CommentState::Normal => {
            if line.starts_with("//") {
                return None;
            }
            if line.starts_with("/*") {
                // Self-contained block comment stays in Normal state.
                // The length guard keeps `/*/` from counting as closed.
                if !(line.len() >= 4 && line.ends_with("*/")) {
                    *state = CommentState::InBlockComment;
                }
                return None;
            }
            // A stray close marker is swallowed, matching the open marker
            // handling: `*/` lines never reach the output.
            if line.starts_with("*/") {
                return None;
            }
            Some(line.to_string())
        }
    }
}
