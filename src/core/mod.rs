//! Conversion engine — the pipeline from annotated text to numbered BASIC.

pub mod constants;
pub mod convert;
pub mod emit;
pub mod labels;
pub mod loader;
pub mod normalize;
pub mod resolve;
pub mod types;
pub mod vars;
