//! The compilation driver: normalisation plus heap setup.
//!
//! Front ends hand this module plain expression values; everything wire-ward
//! of that (fresh-index choice, normalisation, strategy dispatch, output-bit
//! bookkeeping) happens here.

use tracing::{debug, instrument};

use alsvid_ir::{BExp, BitId, Circuit};

use crate::heap::AncHeap;
use crate::simplify::simplify;
use crate::synth::{synthesize_oop, Strategy};
use crate::xdnf::to_xdnf;

/// The result of compiling one or more expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOutput {
    /// The combined gate sequence.
    pub circuit: Circuit,
    /// One output bit per input expression, in input order.
    pub outputs: Vec<BitId>,
    /// The residual heap.
    pub heap: AncHeap,
    /// Heap bits still allocated on return.
    pub ancillas: Vec<BitId>,
}

/// The standard pre-compilation normalisation: XDNF, then one simplifier
/// pass over the result.
pub fn xdnf_simplify(e: &BExp) -> BExp {
    simplify(&to_xdnf(e))
}

/// Compile a single expression out of place.
///
/// Fresh indices start just above the expression's largest variable. Under
/// `Bennett` this runs the genuine deferred-mirror lowering; for a single
/// already-normalised expression its result bit carries the same value as
/// under `Boundaries`, differing only in which scratch bits stay allocated.
#[instrument(skip(e), fields(%strategy))]
pub fn compile_expr(e: &BExp, strategy: Strategy) -> CompileOutput {
    let heap = AncHeap::above(e.var_max() + 1);
    let s = synthesize_oop(heap, &xdnf_simplify(e), strategy);
    debug!("compiled 1 expression to {} gates", s.circuit.len());
    CompileOutput {
        circuit: s.circuit,
        outputs: vec![s.result],
        heap: s.heap,
        ancillas: s.ancillas,
    }
}

/// Compile a fixed-length array of expressions, threading one heap.
///
/// Under `Pebbled` and `Boundaries` the expressions are compiled in order
/// of ascending AND-depth, which lets early, shallow expressions return
/// their scratch bits before the deep ones need them. The sort is purely an
/// internal heuristic: `outputs[i]` always holds the bit computed for
/// `exprs[i]`.
#[instrument(skip(exprs), fields(%strategy, count = exprs.len()))]
pub fn compile_exprs(exprs: &[BExp], strategy: Strategy) -> CompileOutput {
    let max_var = exprs.iter().map(BExp::var_max).max().unwrap_or(0);
    let mut heap = AncHeap::above(max_var + 1);

    let mut order: Vec<usize> = (0..exprs.len()).collect();
    if strategy != Strategy::Bennett {
        order.sort_by_key(|&i| exprs[i].and_depth());
    }

    let mut circuit = Circuit::new();
    let mut ancillas = vec![];
    let mut outputs = vec![BitId(0); exprs.len()];

    for &i in &order {
        let s = synthesize_oop(heap, &xdnf_simplify(&exprs[i]), strategy);
        heap = s.heap;
        circuit.append(&s.circuit);
        ancillas.extend(s.ancillas);
        outputs[i] = s.result;
    }

    debug!(
        "compiled {} expressions to {} gates",
        exprs.len(),
        circuit.len()
    );
    CompileOutput {
        circuit,
        outputs,
        heap,
        ancillas,
    }
}
