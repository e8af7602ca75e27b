//! Emitter (component E): splices injection-record output between
//! immutable slices of the original source (spec.md §4.5). Never deletes
//! or reorders a single original character.

use crate::store::Store;

/// Produces the instrumented program by walking `store`'s records in
/// ascending position order and interleaving their rendered text with the
/// untouched bytes of `source` between them.
///
/// Every record position is assumed to lie on a UTF-8 char boundary of
/// `source` — true by construction, since every position this crate ever
/// stores comes from a parsed node's byte range (spec.md §3) or from one
/// byte past a block-wrapped statement's end.
#[must_use]
pub fn emit(source: &str, store: &Store) -> String {
    let mut out = String::with_capacity(source.len());
    let mut cursor = 0usize;
    for (position, weight, emitter) in store.iter() {
        out.push_str(&source[cursor..position]);
        out.push_str(&emitter.render(weight));
        cursor = position;
    }
    out.push_str(&source[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Emitter;

    #[test]
    fn splices_without_deleting_or_reordering_source() {
        let source = "var a = 1;".to_owned();
        let mut store = Store::new();
        store.insert_or_add(0, 1, Emitter::CounterIncr);
        let out = emit(&source, &store);
        assert_eq!(out, "_instruction_counter.incr(1);var a = 1;");
    }

    #[test]
    fn empty_store_is_a_no_op() {
        let source = "var a = 1;".to_owned();
        let store = Store::new();
        assert_eq!(emit(&source, &store), source);
    }

    #[test]
    fn multiple_positions_interleave_in_ascending_order() {
        let source = "a;b;".to_owned();
        let mut store = Store::new();
        store.insert_or_add(2, 1, Emitter::CounterIncr);
        store.insert_or_add(0, 1, Emitter::CounterIncr);
        let out = emit(&source, &store);
        assert_eq!(
            out,
            "_instruction_counter.incr(1);a;_instruction_counter.incr(1);b;"
        );
    }
}
