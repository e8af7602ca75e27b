//! Injection-record store (component D): a position-keyed map of
//! `(weight, emitter)` pairs, coalesced by summing weights at the same
//! position (spec.md §4.4).

use std::collections::BTreeMap;

/// Which text a stored position emits (spec.md §4.5). The store records a
/// tag, not a closure, so that a position hit twice from unrelated call
/// sites coalesces into one entry instead of two competing writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emitter {
    /// `_instruction_counter.incr(W);`
    CounterIncr,
    /// `_instruction_counter.incr(W) && `
    InnerCounterIncr,
    /// `{` when `W == 0`, else `{_instruction_counter.incr(W);`
    BlockBegin,
    /// `}` when `W == 0`, else `_instruction_counter.incr(W);}`
    BlockEnd,
}

impl Emitter {
    #[must_use]
    pub fn render(self, weight: u32) -> String {
        match self {
            Self::CounterIncr => format!("_instruction_counter.incr({weight});"),
            Self::InnerCounterIncr => format!("_instruction_counter.incr({weight}) && "),
            Self::BlockBegin => {
                if weight == 0 {
                    "{".to_owned()
                } else {
                    format!("{{_instruction_counter.incr({weight});")
                }
            }
            Self::BlockEnd => {
                if weight == 0 {
                    "}".to_owned()
                } else {
                    format!("_instruction_counter.incr({weight});}}")
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Record {
    weight: u32,
    emitter: Emitter,
}

/// Accumulates injection records keyed by byte position, coalescing
/// repeated writes to the same position (spec.md §3 invariant 1, §4.4).
#[derive(Debug, Default)]
pub struct Store {
    records: BTreeMap<usize, Record>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `weight` at `position`. If a record already exists there its
    /// weight is summed; the emitter is whichever was written first and is
    /// never replaced by a later write to the same position.
    pub fn insert_or_add(&mut self, position: usize, weight: u32, emitter: Emitter) {
        self.records
            .entry(position)
            .and_modify(|r| r.weight += weight)
            .or_insert(Record { weight, emitter });
    }

    /// Enumerates records in ascending position order (spec.md §4.5's
    /// single forward emitter pass depends on this ordering).
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32, Emitter)> + '_ {
        self.records.iter().map(|(&pos, r)| (pos, r.weight, r.emitter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coalesces_weights_at_same_position_keeping_first_emitter() {
        let mut store = Store::new();
        store.insert_or_add(10, 1, Emitter::CounterIncr);
        store.insert_or_add(10, 1, Emitter::InnerCounterIncr);
        let records: Vec<_> = store.iter().collect();
        assert_eq!(records, vec![(10, 2, Emitter::CounterIncr)]);
    }

    #[test]
    fn iterates_in_ascending_position_order() {
        let mut store = Store::new();
        store.insert_or_add(50, 1, Emitter::CounterIncr);
        store.insert_or_add(5, 1, Emitter::CounterIncr);
        store.insert_or_add(20, 1, Emitter::CounterIncr);
        let positions: Vec<_> = store.iter().map(|(p, _, _)| p).collect();
        assert_eq!(positions, vec![5, 20, 50]);
    }

    #[test]
    fn block_emitters_omit_the_counter_call_at_zero_weight() {
        assert_eq!(Emitter::BlockBegin.render(0), "{");
        assert_eq!(Emitter::BlockEnd.render(0), "}");
        assert_eq!(Emitter::BlockBegin.render(2), "{_instruction_counter.incr(2);");
        assert_eq!(Emitter::BlockEnd.render(2), "_instruction_counter.incr(2);}");
    }
}
