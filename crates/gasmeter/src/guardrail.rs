//! Guardrail: rejects any script that binds the reserved identifier
//! `_instruction_counter` (spec.md §4.3a, §7).
//!
//! Per spec.md's precise wording, the check fires only when the reserved
//! name's *immediate* parent is a `VariableDeclarator`, `FunctionDeclaration`,
//! or `FunctionExpression` — not an arbitrary binding anywhere in a
//! destructuring pattern (`var {_instruction_counter} = x;` does not
//! trigger it, `var _instruction_counter = x;` does). The check is
//! evaluated inline at each of those three binding sites as the walker
//! reaches them during the single instrumentation pass, rather than as a
//! separate pre-pass (see DESIGN.md Open Question 4): any binding-site
//! check that fails returns an error that the walker propagates with `?`
//! straight out of the top-level walk, so nothing is ever emitted for a
//! rejected script.

use swc_ecma_ast::Ident;

use crate::error::ReservedIdentifierError;
use crate::parser::ParsedScript;

/// The name a script may never bind.
pub const RESERVED_IDENTIFIER: &str = "_instruction_counter";

/// Checks a single binding-site identifier against the reserved name.
pub fn check_binding(parsed: &ParsedScript, ident: &Ident) -> Result<(), ReservedIdentifierError> {
    if ident.sym.as_ref() == RESERVED_IDENTIFIER {
        let (start, _) = parsed.range_of(ident);
        let (line, column) = parsed.line_col(start);
        return Err(ReservedIdentifierError { line, column });
    }
    Ok(())
}
