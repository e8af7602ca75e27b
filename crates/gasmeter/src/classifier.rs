//! Classifier & context propagator (component C): the tracked-node weight
//! table, the injectable-statement set, and the per-node resolution rule
//! that turns a tracked node plus its effective context into a store write
//! (spec.md §3, §4.3c, §4.3d).

use swc_common::Spanned;
use swc_ecma_ast::{Decl, Expr, Stmt};

use crate::context::{ByteRange, InjectionContext, InjectionKind, ParentFrame, TargetNode};
use crate::parser::ParsedScript;
use crate::store::{Emitter, Store};

/// Every weight in the current scheme is `1`; the table still enumerates
/// the distinct ESTree tags it stands for in `expr_weight`/`stmt_weight`'s
/// match arms, since e.g. `BinaryExpression` and `LogicalExpression` are
/// two separate entries of spec.md's table collapsed onto one
/// `swc_ecma_ast::Expr::Bin` variant (see DESIGN.md Open Question 2).
const TRACKED_WEIGHT: u32 = 1;

/// Returns the tracked weight of an expression node, or `None` if it is
/// not in the weight table (its subtree may still contain tracked nodes).
#[must_use]
pub fn expr_weight(expr: &Expr) -> Option<u32> {
    match expr {
        Expr::Call(_)
        | Expr::Assign(_)
        | Expr::Bin(_)
        | Expr::Update(_)
        | Expr::Unary(_)
        | Expr::Member(_)
        | Expr::New(_)
        | Expr::MetaProp(_)
        | Expr::Cond(_)
        | Expr::Yield(_) => Some(TRACKED_WEIGHT),
        _ => None,
    }
}

/// Returns the tracked weight of a statement node. Only `ThrowStatement`
/// appears in the weight table as a statement.
#[must_use]
pub fn stmt_weight(stmt: &Stmt) -> Option<u32> {
    match stmt {
        Stmt::Throw(_) => Some(TRACKED_WEIGHT),
        _ => None,
    }
}

/// The injectable-statement set (spec.md §4.3a): statement types that may
/// serve as a `BEFORE_NODE`/`AT_BEGINNING` injection anchor and that the
/// default climbing rule searches for.
#[must_use]
pub fn is_injectable_stmt(stmt: &Stmt) -> bool {
    matches!(
        stmt,
        Stmt::Expr(_) | Stmt::Return(_) | Stmt::Throw(_) | Stmt::Decl(Decl::Var(_))
    )
}

/// Builds the [`TargetNode`] spec.md's rules use when a statement itself
/// (rather than a bare child expression) is the injection anchor — e.g.
/// the enclosing `ForStatement`/`SwitchStatement`/`WithStatement` for a
/// `BEFORE_NODE` context, or the statement as its own anchor when it is a
/// member of the injectable-statement set.
#[must_use]
pub fn target_for(parsed: &ParsedScript, stmt: &Stmt) -> TargetNode {
    let (start, end) = parsed.range_of(stmt);
    TargetNode {
        range: ByteRange { start, end },
        is_block_statement: matches!(stmt, Stmt::Block(_)),
        is_injectable_statement: is_injectable_stmt(stmt),
    }
}

/// Builds the [`TargetNode`] for an `INNER_BEGINNING` context whose anchor
/// is a bare expression (an `if`/`while`/`for` test, or a `for` update) —
/// these never serve as a climbing anchor themselves, so
/// `is_injectable_statement` is always `false`.
#[must_use]
pub fn target_for_expr<T: Spanned>(parsed: &ParsedScript, node: &T) -> TargetNode {
    let (start, end) = parsed.range_of(node);
    TargetNode {
        range: ByteRange { start, end },
        is_block_statement: false,
        is_injectable_statement: false,
    }
}

/// Implements spec.md §4.3c: resolves the emission position/emitter for a
/// tracked node (statement or expression) and records it in `store`.
///
/// `parents` is the walker's current parent-chain slice, nearest ancestor
/// last. `inherited` is the context the immediate parent propagated to
/// this node, if the parent declared one (§4.3b); `None` means "no
/// declared context — resolve by the default rule."
pub fn record_tracked(
    store: &mut Store,
    parents: &[ParentFrame],
    inherited: Option<InjectionContext>,
    node_range: ByteRange,
    node_is_injectable_statement: bool,
    weight: u32,
) {
    let (target, kind) = match inherited {
        Some(ctx) => (ctx.target, ctx.kind),
        None if node_is_injectable_statement => {
            let target = TargetNode {
                range: node_range,
                is_block_statement: false,
                is_injectable_statement: true,
            };
            (target, InjectionKind::BeforeNode)
        }
        None => match parents.iter().rev().find(|f| f.target.is_injectable_statement) {
            Some(frame) => (frame.target, InjectionKind::BeforeNode),
            None => {
                // No injectable ancestor is reachable (e.g. a tracked
                // expression sitting directly in a `case` test with no
                // enclosing statement of its own — see DESIGN.md Open
                // Question 1). The fallback position is the tracked node's
                // own start, which is an *expression* position, not a
                // statement boundary — a bare `CounterIncr` there would
                // not parse. Use the expression-safe inner form instead.
                let target = TargetNode {
                    range: node_range,
                    is_block_statement: false,
                    is_injectable_statement: false,
                };
                (target, InjectionKind::InnerBeginning)
            }
        },
    };

    let (position, emitter) = match kind {
        InjectionKind::BeforeNode => (target.range.start, Emitter::CounterIncr),
        InjectionKind::AtBeginning => {
            if target.is_block_statement {
                (target.range.start + 1, Emitter::CounterIncr)
            } else {
                (target.range.start, Emitter::CounterIncr)
            }
        }
        InjectionKind::InnerBeginning => (target.range.start, Emitter::InnerCounterIncr),
    };

    store.insert_or_add(position, weight, emitter);
}

/// Implements spec.md §4.3d: if `body` is not already a `BlockStatement`,
/// records the zero-weight guardrail pair that wraps it in `{ }` at
/// instrumentation time, without altering the original source's
/// structure. A no-op if `body` already is a block.
pub fn ensure_block(parsed: &ParsedScript, store: &mut Store, body: &Stmt) {
    if matches!(body, Stmt::Block(_)) {
        return;
    }
    let (start, end) = parsed.range_of(body);
    store.insert_or_add(start, 0, Emitter::BlockBegin);
    store.insert_or_add(end, 0, Emitter::BlockEnd);
}
