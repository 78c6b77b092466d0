//! Property-based tests for `.qc` roundtrip conversion.
//!
//! Tests that circuit → text → circuit is the identity, and that emission
//! is deterministic.

use alsvid_ir::{BitId, Circuit, Gate};
use alsvid_qc::{emit, parse};
use proptest::prelude::*;

/// Generate a random well-formed gate over a small signed index range.
fn arb_gate() -> impl Strategy<Value = Gate> {
    let idx = -4_i64..12;
    prop_oneof![
        idx.clone().prop_map(|a| Gate::Not(BitId(a))),
        (idx.clone(), idx.clone())
            .prop_filter("control and target must differ", |(c, a)| c != a)
            .prop_map(|(c, a)| Gate::Cnot(BitId(c), BitId(a))),
        (idx.clone(), idx.clone(), idx)
            .prop_filter("operands must be pairwise distinct", |(c1, c2, a)| {
                c1 != c2 && c1 != a && c2 != a
            })
            .prop_map(|(c1, c2, a)| Gate::Toffoli(BitId(c1), BitId(c2), BitId(a))),
    ]
}

/// Generate a random well-formed circuit.
fn arb_circuit() -> impl Strategy<Value = Circuit> {
    proptest::collection::vec(arb_gate(), 0..24).prop_map(Circuit::from)
}

proptest! {
    /// Emit then parse reproduces the circuit exactly.
    #[test]
    fn roundtrip_is_identity(circuit in arb_circuit()) {
        let text = emit(&circuit);
        let parsed = parse(&text).expect("emitted text failed to parse");
        prop_assert_eq!(parsed, circuit);
    }

    /// Emission is deterministic.
    #[test]
    fn emission_is_deterministic(circuit in arb_circuit()) {
        prop_assert_eq!(emit(&circuit), emit(&circuit));
    }

    /// Comments and blank lines do not change the parse.
    #[test]
    fn comments_are_ignored(circuit in arb_circuit()) {
        let text = emit(&circuit);
        let noisy: String = text
            .lines()
            .map(|l| format!("{l} # trailing\n\n"))
            .collect();
        let parsed = parse(&noisy).expect("noisy text failed to parse");
        prop_assert_eq!(parsed, circuit);
    }
}
