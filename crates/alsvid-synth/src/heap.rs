//! The ancilla heap: a pool of currently-free bit indices.

use std::collections::BTreeSet;

use alsvid_ir::{BitId, BitSet, Circuit, State};

/// An ordered pool of free ancilla indices.
///
/// Conceptually the heap is the infinite sorted set `{k, k+1, …}` minus the
/// indices currently lent out. It is represented as a threshold plus a
/// finite set of "holes" below it: every index at or above the threshold is
/// free, and so is every hole. The invariant `hole < threshold` is
/// maintained by folding re-inserted indices back into the threshold, which
/// keeps the representation canonical and the derived equality extensional.
///
/// The heap is a value: cloning is cheap in the common case (few holes), and
/// the synthesis entry points take it by value and hand back the residual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncHeap {
    threshold: i64,
    holes: BTreeSet<i64>,
}

impl AncHeap {
    /// The heap of every index greater than or equal to `k`.
    pub fn above(k: i64) -> Self {
        Self {
            threshold: k,
            holes: BTreeSet::new(),
        }
    }

    /// Remove and return the numerically smallest free index.
    ///
    /// Never fails for this representation: past the holes there is always
    /// the threshold. Strictly shrinks the element set.
    pub fn pop_min(&mut self) -> BitId {
        match self.holes.pop_first() {
            Some(h) => BitId(h),
            None => {
                let t = self.threshold;
                self.threshold += 1;
                BitId(t)
            }
        }
    }

    /// Return an index to the pool. Inserting a free index is a no-op.
    pub fn insert(&mut self, bit: BitId) {
        let i = bit.0;
        if i >= self.threshold {
            return;
        }
        self.holes.insert(i);
        // Fold trailing holes back into the threshold.
        while self.holes.remove(&(self.threshold - 1)) {
            self.threshold -= 1;
        }
    }

    /// Check whether `bit` is currently free.
    pub fn contains(&self, bit: BitId) -> bool {
        bit.0 >= self.threshold || self.holes.contains(&bit.0)
    }

    /// The smallest free index, without removing it.
    pub fn min(&self) -> BitId {
        match self.holes.first() {
            Some(&h) => BitId(h),
            None => BitId(self.threshold),
        }
    }

    /// Check that no bit in `bits` is free in this heap.
    pub fn is_disjoint_from(&self, bits: &BitSet) -> bool {
        bits.iter().all(|&b| !self.contains(b))
    }

    /// Check that no bit used by `circuit` is free in this heap.
    pub fn uses_disjoint(&self, circuit: &Circuit) -> bool {
        self.is_disjoint_from(&circuit.uses())
    }

    /// The `zeroHeap` predicate: every free bit reads 0 in `st`.
    ///
    /// Exact even though the heap is infinite: a state with default `true`
    /// disagrees on all but finitely many free bits, and otherwise only the
    /// finitely many explicit entries of `st` can disagree.
    pub fn reads_zero(&self, st: &State) -> bool {
        if *st.default_value() {
            return false;
        }
        st.iter().all(|(bit, &v)| !v || !self.contains(bit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_min_is_smallest() {
        let mut h = AncHeap::above(3);
        assert_eq!(h.pop_min(), BitId(3));
        assert_eq!(h.pop_min(), BitId(4));
        assert_eq!(h.min(), BitId(5));
    }

    #[test]
    fn test_pop_strictly_shrinks() {
        let mut h = AncHeap::above(0);
        let i = h.pop_min();
        assert!(!h.contains(i));
        assert!(h.contains(BitId(1)));
    }

    #[test]
    fn test_insert_restores_after_pop() {
        let orig = AncHeap::above(3);
        let mut h = orig.clone();
        let i = h.pop_min();
        h.insert(i);
        assert_eq!(h, orig);
    }

    #[test]
    fn test_insert_out_of_order() {
        let mut h = AncHeap::above(3);
        let a = h.pop_min(); // 3
        let b = h.pop_min(); // 4
        h.insert(a);
        assert!(h.contains(a));
        assert!(!h.contains(b));
        assert_eq!(h.min(), a);

        // Popping again hands back the hole first.
        assert_eq!(h.pop_min(), a);
        h.insert(b);
        h.insert(a);
        assert_eq!(h, AncHeap::above(3));
    }

    #[test]
    fn test_insert_free_index_is_noop() {
        let mut h = AncHeap::above(3);
        h.insert(BitId(7));
        h.insert(BitId(3));
        assert_eq!(h, AncHeap::above(3));
    }

    #[test]
    fn test_membership() {
        let mut h = AncHeap::above(5);
        assert!(h.contains(BitId(5)));
        assert!(h.contains(BitId(1_000_000)));
        assert!(!h.contains(BitId(4)));

        let i = h.pop_min();
        assert!(!h.contains(i));
    }

    #[test]
    fn test_reads_zero() {
        let h = AncHeap::above(3);

        let mut st = State::zeroed();
        st.set(BitId(0), true);
        assert!(h.reads_zero(&st));

        st.set(BitId(5), true);
        assert!(!h.reads_zero(&st));

        assert!(!h.reads_zero(&State::new(true)));
    }
}
