//! Bit identifiers and sets over them.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a bit in a reversible circuit.
///
/// Identifiers are plain signed machine integers. Uniqueness is the
/// caller's responsibility; the synthesizer never reuses an index while
/// it is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BitId(pub i64);

impl fmt::Display for BitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b{}", self.0)
    }
}

impl From<i64> for BitId {
    fn from(id: i64) -> Self {
        BitId(id)
    }
}

impl From<i32> for BitId {
    fn from(id: i32) -> Self {
        BitId(i64::from(id))
    }
}

/// A set of bit identifiers.
///
/// Sets are compared extensionally; the usual union/intersection/disjointness
/// operations come from the underlying hash set.
pub type BitSet = FxHashSet<BitId>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_display() {
        assert_eq!(format!("{}", BitId(0)), "b0");
        assert_eq!(format!("{}", BitId(-3)), "b-3");
    }

    #[test]
    fn test_bit_ordering() {
        let mut bits = vec![BitId(5), BitId(-1), BitId(2)];
        bits.sort();
        assert_eq!(bits, vec![BitId(-1), BitId(2), BitId(5)]);
    }

    #[test]
    fn test_bitset_extensional() {
        let a: BitSet = [BitId(1), BitId(2)].into_iter().collect();
        let b: BitSet = [BitId(2), BitId(1)].into_iter().collect();
        assert_eq!(a, b);
    }
}
