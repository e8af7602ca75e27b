//! Shared types threaded between the tree walker and the classifier
//! (spec.md §3, §4.2, §4.3): byte ranges, injection contexts, and the
//! parent-chain frames the walker carries during traversal.

/// A half-open byte range `[start, end)` into the original source
/// (spec.md §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

/// One of the three rules spec.md §3/§4.3c uses to derive an emission
/// position and emitter from a resolved target node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionKind {
    BeforeNode,
    /// Defined by spec.md §4.3c step 4 but never assigned by any
    /// control-flow table entry in §4.3b in the current version of this
    /// scheme — see DESIGN.md Open Question 3. Implemented in full anyway:
    /// this is a documented part of `InjectionContext`'s contract, not dead
    /// code.
    AtBeginning,
    InnerBeginning,
}

/// The node an injection context's position is ultimately resolved against
/// (spec.md §3's `target_node`).
#[derive(Debug, Clone, Copy)]
pub struct TargetNode {
    pub range: ByteRange,
    pub is_block_statement: bool,
    pub is_injectable_statement: bool,
}

/// The `(target_node, injection_type)` pair a parent propagates to a
/// particular child subtree (spec.md §3).
#[derive(Debug, Clone, Copy)]
pub struct InjectionContext {
    pub target: TargetNode,
    pub kind: InjectionKind,
}

/// One link in the parent chain the walker threads during traversal,
/// nearest parent last in the backing `Vec` (spec.md §4.2) — climbing
/// iterates it in reverse to search nearest-first.
#[derive(Debug, Clone, Copy)]
pub struct ParentFrame {
    pub target: TargetNode,
}

/// Appends `frame` to `parents`, returning a new chain for descending into
/// one more level of statement nesting. Only statement-to-statement
/// descent grows the chain: expressions never introduce a new injectable
/// anchor, so `walk_expr` always forwards its `parents` slice unchanged
/// (spec.md §4.3c step 3 only ever climbs *statement* ancestors).
#[must_use]
pub fn with_parent(parents: &[ParentFrame], frame: ParentFrame) -> Vec<ParentFrame> {
    let mut extended = Vec::with_capacity(parents.len() + 1);
    extended.extend_from_slice(parents);
    extended.push(frame);
    extended
}
