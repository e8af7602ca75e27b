#![doc = include_str!("../../../README.md")]

mod classifier;
mod context;
mod emitter;
mod error;
mod guardrail;
mod parser;
mod position;
mod store;
mod walker;

pub use error::{ParseError, ReservedIdentifierError, TransformError};
pub use swc_ecma_ast::Script;

use store::Store;

/// Parses and instruments `source` in one pass, returning the instrumented
/// program as a new `String`. `source` itself is never mutated or
/// reordered — only spliced with emitter output between unchanged slices.
///
/// Fails with [`TransformError::Parse`] if `source` is not a syntactically
/// valid ECMAScript-2016 script, or with
/// [`TransformError::ReservedIdentifier`] if it attempts to bind
/// `_instruction_counter`. Neither failure produces any output.
pub fn transform(source: &str) -> Result<String, TransformError> {
    let parsed = parser::parse_script(source)?;
    let mut store = Store::new();
    walker::walk_script(&parsed, &mut store)?;
    Ok(emitter::emit(source, &store))
}

/// Parses `source` as an ECMAScript-2016 script without instrumenting it.
/// Exposed for callers that only need to validate a script (e.g. before
/// accepting it into storage) without generating instrumented output.
pub fn parse(source: &str) -> Result<Script, ParseError> {
    parser::parse_script(source).map(|p| p.script)
}
