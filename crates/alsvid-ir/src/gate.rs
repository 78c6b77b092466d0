//! Reversible gate types and their semantics.

use serde::{Deserialize, Serialize};

use crate::bit::BitId;
use crate::state::State;

/// A reversible gate.
///
/// Every gate flips a single target bit under zero, one, or two controls,
/// and is therefore its own inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// Unconditionally flip the target bit.
    Not(BitId),
    /// Flip the target (second) bit when the control (first) bit is set.
    Cnot(BitId, BitId),
    /// Flip the target (third) bit when both control bits are set.
    Toffoli(BitId, BitId, BitId),
}

impl Gate {
    /// Get the wire-format name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Not(_) => "NOT",
            Gate::Cnot(_, _) => "CNOT",
            Gate::Toffoli(_, _, _) => "TOFF",
        }
    }

    /// Get the number of bits this gate touches.
    #[inline]
    pub fn num_bits(&self) -> u32 {
        match self {
            Gate::Not(_) => 1,
            Gate::Cnot(_, _) => 2,
            Gate::Toffoli(_, _, _) => 3,
        }
    }

    /// The bit this gate writes.
    #[inline]
    pub fn target(&self) -> BitId {
        match *self {
            Gate::Not(a) | Gate::Cnot(_, a) | Gate::Toffoli(_, _, a) => a,
        }
    }

    /// The bits this gate reads but does not write.
    pub fn controls(&self) -> Vec<BitId> {
        match *self {
            Gate::Not(_) => vec![],
            Gate::Cnot(c, _) => vec![c],
            Gate::Toffoli(c1, c2, _) => vec![c1, c2],
        }
    }

    /// All bits mentioned by this gate, controls first.
    pub fn bits(&self) -> Vec<BitId> {
        match *self {
            Gate::Not(a) => vec![a],
            Gate::Cnot(c, a) => vec![c, a],
            Gate::Toffoli(c1, c2, a) => vec![c1, c2, a],
        }
    }

    /// Check that controls and target are pairwise distinct.
    pub fn is_well_formed(&self) -> bool {
        match *self {
            Gate::Not(_) => true,
            Gate::Cnot(c, a) => c != a,
            Gate::Toffoli(c1, c2, a) => c1 != c2 && c1 != a && c2 != a,
        }
    }

    /// Apply this gate to a state.
    pub fn apply(&self, st: &mut State) {
        match *self {
            Gate::Not(a) => st.toggle(a),
            Gate::Cnot(c, a) => {
                let v = *st.get(c);
                st.xor_in(a, v);
            }
            Gate::Toffoli(c1, c2, a) => {
                let v = *st.get(c1) && *st.get(c2);
                st.xor_in(a, v);
            }
        }
    }
}
