//! zbas — text-to-BASIC transpiler.
//!
//! Converts annotated, free-form source into numbered BASIC lines for a
//! vintage 8-bit interpreter: `@include` expansion, `//` and `/* */`
//! comments, `@label` references resolved to line numbers, `>variable`
//! names mapped to two-character tokens, `<constant>` text substitution.
//! Optional petcat/x64 integration turns the output into a runnable .prg.

pub mod cli;
pub mod console;
pub mod core;
pub mod tools;
pub mod watch;
