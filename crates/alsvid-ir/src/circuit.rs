//! Gate sequences and circuit-level operations.

use serde::{Deserialize, Serialize};

use crate::bit::{BitId, BitSet};
use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::state::State;

/// An ordered sequence of reversible gates.
///
/// Semantics is left-to-right application to a [`State`]. Since every gate
/// is its own inverse, the inverse of a circuit is the reversed sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit {
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new() -> Self {
        Self { gates: vec![] }
    }

    /// Append a gate.
    ///
    /// The caller is responsible for well-formedness; it is debug-asserted.
    /// Use the validating builder methods for unchecked operands.
    pub fn push(&mut self, gate: Gate) {
        debug_assert!(gate.is_well_formed(), "ill-formed {} gate", gate.name());
        self.gates.push(gate);
    }

    /// Append a NOT gate on `a`.
    pub fn not(&mut self, a: BitId) -> IrResult<&mut Self> {
        self.gates.push(Gate::Not(a));
        Ok(self)
    }

    /// Append a CNOT gate with control `c` and target `a`.
    pub fn cnot(&mut self, c: BitId, a: BitId) -> IrResult<&mut Self> {
        if c == a {
            return Err(IrError::DuplicateBit { gate: "CNOT", bit: c });
        }
        self.gates.push(Gate::Cnot(c, a));
        Ok(self)
    }

    /// Append a Toffoli gate with controls `c1`, `c2` and target `a`.
    pub fn toffoli(&mut self, c1: BitId, c2: BitId, a: BitId) -> IrResult<&mut Self> {
        let gate = Gate::Toffoli(c1, c2, a);
        if !gate.is_well_formed() {
            let bit = if c1 == c2 || c1 == a { c1 } else { c2 };
            return Err(IrError::DuplicateBit { gate: "TOFF", bit });
        }
        self.gates.push(gate);
        Ok(self)
    }

    /// Append every gate of `other`, in order.
    pub fn append(&mut self, other: &Circuit) {
        self.gates.extend_from_slice(&other.gates);
    }

    /// The gates, in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Iterate over the gates in application order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Gate> {
        self.gates.iter()
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check whether the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Apply the circuit to a state, left to right.
    pub fn run(&self, st: &mut State) {
        for gate in &self.gates {
            gate.apply(st);
        }
    }

    /// Apply the circuit to a copy of `st` and return the result.
    pub fn evaluate(&self, st: &State) -> State {
        let mut out = st.clone();
        self.run(&mut out);
        out
    }

    /// All bits mentioned by any gate.
    pub fn uses(&self) -> BitSet {
        self.gates.iter().flat_map(Gate::bits).collect()
    }

    /// All bits used as a control by some gate.
    pub fn controls(&self) -> BitSet {
        self.gates.iter().flat_map(Gate::controls).collect()
    }

    /// All bits written by some gate.
    pub fn targets(&self) -> BitSet {
        self.gates.iter().map(Gate::target).collect()
    }

    /// Check that every gate is individually well-formed.
    pub fn is_well_formed(&self) -> bool {
        self.gates.iter().all(Gate::is_well_formed)
    }

    /// The inverse circuit: the same gates in reverse order.
    pub fn reversed(&self) -> Circuit {
        Circuit {
            gates: self.gates.iter().rev().copied().collect(),
        }
    }

    /// The subsequence of this circuit that does not write `r`.
    ///
    /// If this circuit computes a value into `r` without ever using `r` as a
    /// control, then `uncompute(r).reversed()`, replayed after the circuit,
    /// restores every bit other than `r` to its prior value and leaves `r`
    /// untouched.
    pub fn uncompute(&self, r: BitId) -> Circuit {
        Circuit {
            gates: self
                .gates
                .iter()
                .filter(|g| g.target() != r)
                .copied()
                .collect(),
        }
    }
}

impl From<Vec<Gate>> for Circuit {
    fn from(gates: Vec<Gate>) -> Self {
        Self { gates }
    }
}

impl FromIterator<Gate> for Circuit {
    fn from_iter<I: IntoIterator<Item = Gate>>(iter: I) -> Self {
        Self {
            gates: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Gate;
    type IntoIter = std::slice::Iter<'a, Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}
