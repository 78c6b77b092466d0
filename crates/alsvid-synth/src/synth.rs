//! Lowering Boolean expressions to reversible circuits.
//!
//! The synthesizer recurses over an expression, XORing its value into a
//! target bit. Conjunctions need their operands on real wires, so each
//! `And` compiles its children *out of place* into bits borrowed from the
//! ancilla heap. The three strategies differ only in when (and whether)
//! those borrowed bits are restored to zero and returned to the heap.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

use alsvid_ir::{BExp, BitId, Circuit, Gate};

use crate::esop::Esop;
use crate::heap::AncHeap;

/// Ancilla-management strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Restore and return every ancilla at each conjunction. Lowest peak
    /// width, highest gate count.
    Pebbled,
    /// Compute freely, then restore and return every ancilla once at the
    /// end of the whole expression.
    Boundaries,
    /// Compute each XOR term out of place, copy into the target, and defer
    /// a mirrored uncompute suffix. Ancillas stay allocated.
    Bennett,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Pebbled => write!(f, "pebbled"),
            Strategy::Boundaries => write!(f, "boundaries"),
            Strategy::Bennett => write!(f, "bennett"),
        }
    }
}

/// The result of one synthesis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    /// The residual heap, reflecting net allocations.
    pub heap: AncHeap,
    /// The bit holding the result.
    pub result: BitId,
    /// Heap bits still allocated on return. Every other borrowed bit has
    /// been restored to zero and re-inserted into the heap.
    pub ancillas: Vec<BitId>,
    /// The synthesized gate sequence.
    pub circuit: Circuit,
}

/// XOR the value of `e` into `target`, with no cleanup.
///
/// Every ancilla used along the way is reported live in the returned
/// [`Synthesis::ancillas`] list.
pub fn lower(heap: AncHeap, target: BitId, e: &BExp) -> Synthesis {
    assert_preconditions(&heap, Some(target), e);
    let mut s = Synthesis {
        heap,
        result: target,
        ancillas: vec![],
        circuit: Circuit::new(),
    };
    lower_into(&mut s.heap, target, e, &mut s.ancillas, &mut s.circuit, false);
    s
}

/// Compute the value of `e` on a bit of its own, with no cleanup.
///
/// A bare variable is returned as-is; anything else is computed into a bit
/// popped from the heap, which heads the returned ancilla list.
pub fn lower_oop(heap: AncHeap, e: &BExp) -> Synthesis {
    assert_preconditions(&heap, None, e);
    if let BExp::Var(v) = e {
        return Synthesis {
            heap,
            result: *v,
            ancillas: vec![],
            circuit: Circuit::new(),
        };
    }
    let mut heap = heap;
    let target = heap.pop_min();
    let mut s = lower(heap, target, e);
    s.ancillas.insert(0, target);
    s
}

/// XOR the value of `e` into `target` under the given strategy.
#[instrument(skip(heap, e), fields(%strategy, size = e.size()))]
pub fn synthesize(heap: AncHeap, target: BitId, e: &BExp, strategy: Strategy) -> Synthesis {
    let s = match strategy {
        Strategy::Boundaries => boundaries(heap, target, e),
        Strategy::Pebbled => pebbled(heap, target, e),
        Strategy::Bennett => bennett(heap, target, e),
    };
    debug!(
        "synthesized {} gates, {} live ancillas",
        s.circuit.len(),
        s.ancillas.len()
    );
    s
}

/// Compute the value of `e` on a bit of its own under the given strategy.
#[instrument(skip(heap, e), fields(%strategy, size = e.size()))]
pub fn synthesize_oop(heap: AncHeap, e: &BExp, strategy: Strategy) -> Synthesis {
    assert_preconditions(&heap, None, e);
    if let BExp::Var(v) = e {
        return Synthesis {
            heap,
            result: *v,
            ancillas: vec![],
            circuit: Circuit::new(),
        };
    }
    let mut heap = heap;
    let target = heap.pop_min();
    let mut s = synthesize(heap, target, e, strategy);
    s.ancillas.insert(0, target);
    s
}

/// The "Boundaries" strategy: one uncompute pass at the end.
fn boundaries(heap: AncHeap, target: BitId, e: &BExp) -> Synthesis {
    let mut s = lower(heap, target, e);
    let cleanup = s.circuit.uncompute(s.result).reversed();
    s.circuit.append(&cleanup);
    for a in s.ancillas.drain(..) {
        s.heap.insert(a);
    }
    s
}

/// The "Pebbled" strategy: uncompute inline at every conjunction.
fn pebbled(heap: AncHeap, target: BitId, e: &BExp) -> Synthesis {
    assert_preconditions(&heap, Some(target), e);
    let mut s = Synthesis {
        heap,
        result: target,
        ancillas: vec![],
        circuit: Circuit::new(),
    };
    lower_into(&mut s.heap, target, e, &mut s.ancillas, &mut s.circuit, true);
    debug_assert!(s.ancillas.is_empty());
    s
}

/// The "Bennett" strategy: compute, copy, deferred mirrored uncompute.
///
/// The expression is first flattened to its XOR-of-ANDs term list (its
/// GF(2) polynomial); each term is computed out of place and copied into
/// the target, and each term's uncompute suffix is replayed in reverse term
/// order at the very end. Nothing is returned to the heap.
fn bennett(heap: AncHeap, target: BitId, e: &BExp) -> Synthesis {
    assert_preconditions(&heap, Some(target), e);
    let mut heap = heap;
    let mut ancillas = vec![];
    let mut forward = Circuit::new();
    let mut cleanups = vec![];

    for cube in Esop::from(e).cubes() {
        let term = cube.to_bexp();
        let t = lower_oop(heap, &term);
        heap = t.heap;
        ancillas.extend(t.ancillas);
        forward.append(&t.circuit);
        forward.push(Gate::Cnot(t.result, target));
        cleanups.push(t.circuit.uncompute(t.result).reversed());
    }

    for cleanup in cleanups.iter().rev() {
        forward.append(cleanup);
    }

    Synthesis {
        heap,
        result: target,
        ancillas,
        circuit: forward,
    }
}

/// In-place recursion shared by the basic and pebbled lowerings.
fn lower_into(
    heap: &mut AncHeap,
    target: BitId,
    e: &BExp,
    ancillas: &mut Vec<BitId>,
    circuit: &mut Circuit,
    pebble: bool,
) {
    match e {
        BExp::False => {}
        BExp::Var(v) => circuit.push(Gate::Cnot(*v, target)),
        BExp::Not(x) => {
            lower_into(heap, target, x, ancillas, circuit, pebble);
            circuit.push(Gate::Not(target));
        }
        BExp::Xor(x, y) => {
            lower_into(heap, target, x, ancillas, circuit, pebble);
            lower_into(heap, target, y, ancillas, circuit, pebble);
        }
        BExp::And(x, y) => {
            let gate_mark = circuit.len();
            let anc_mark = ancillas.len();
            let rx = alloc_for(heap, x, ancillas, circuit, pebble);
            let ry = alloc_for(heap, y, ancillas, circuit, pebble);
            let children: Option<Circuit> =
                pebble.then(|| circuit.gates()[gate_mark..].iter().copied().collect());
            if rx == ry {
                // Both operands resolved to the same variable; x & x = x,
                // and the degenerate Toffoli would be ill-formed.
                circuit.push(Gate::Cnot(rx, target));
            } else {
                circuit.push(Gate::Toffoli(rx, ry, target));
            }
            if let Some(children) = children {
                circuit.append(&children.uncompute(target).reversed());
                for a in ancillas.drain(anc_mark..) {
                    heap.insert(a);
                }
            }
        }
    }
}

/// Out-of-place recursion: a variable is its own wire, anything else gets
/// a bit popped from the heap.
fn alloc_for(
    heap: &mut AncHeap,
    e: &BExp,
    ancillas: &mut Vec<BitId>,
    circuit: &mut Circuit,
    pebble: bool,
) -> BitId {
    if let BExp::Var(v) = e {
        return *v;
    }
    let target = heap.pop_min();
    ancillas.push(target);
    lower_into(heap, target, e, ancillas, circuit, pebble);
    target
}

/// Caller-contract checks; debug builds only (release behaviour on violated
/// preconditions is undefined).
fn assert_preconditions(heap: &AncHeap, target: Option<BitId>, e: &BExp) {
    if cfg!(debug_assertions) {
        let vars = e.vars();
        assert!(
            heap.is_disjoint_from(&vars),
            "ancilla heap overlaps the expression's variables"
        );
        if let Some(t) = target {
            assert!(!heap.contains(t), "target {t} is free in the heap");
            assert!(!vars.contains(&t), "target {t} occurs in the expression");
        }
    }
}
