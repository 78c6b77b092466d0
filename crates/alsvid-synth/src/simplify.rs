//! Peephole simplification of Boolean expressions.

use alsvid_ir::BExp;

/// Simplify an expression in a single bottom-up pass.
///
/// Children are fully simplified before their parent is examined, so no
/// fixpoint iteration is needed. The rewrites are semantics-preserving:
/// conjunction with `False` collapses, XOR with `False` is dropped, double
/// negation cancels, and one level of AC-matched idempotence
/// (`x & (x & z) → x & z`) and self-cancellation (`x ^ (x ^ z) → z`) is
/// caught. Deeper idempotence is intentionally left alone.
pub fn simplify(e: &BExp) -> BExp {
    match e {
        BExp::False | BExp::Var(_) => e.clone(),
        BExp::Not(x) => match simplify(x) {
            BExp::Not(y) => *y,
            x => BExp::not_of(x),
        },
        BExp::And(x, y) => simplify_and(simplify(x), simplify(y)),
        BExp::Xor(x, y) => simplify_xor(simplify(x), simplify(y)),
    }
}

fn simplify_and(x: BExp, y: BExp) -> BExp {
    match (x, y) {
        (BExp::False, _) | (_, BExp::False) => BExp::False,
        (BExp::Var(v), BExp::And(a, b)) => match (*a, *b) {
            (BExp::Var(w), z) | (z, BExp::Var(w)) if w == v => {
                BExp::and(BExp::Var(v), z)
            }
            (a, b) => BExp::and(BExp::Var(v), BExp::and(a, b)),
        },
        (BExp::And(a, b), BExp::Var(v)) => match (*a, *b) {
            (BExp::Var(w), z) | (z, BExp::Var(w)) if w == v => {
                BExp::and(BExp::Var(v), z)
            }
            (a, b) => BExp::and(BExp::and(a, b), BExp::Var(v)),
        },
        (x, y) => BExp::and(x, y),
    }
}

fn simplify_xor(x: BExp, y: BExp) -> BExp {
    match (x, y) {
        (BExp::False, z) | (z, BExp::False) => z,
        (BExp::Var(v), BExp::Xor(a, b)) => match (*a, *b) {
            (BExp::Var(w), z) | (z, BExp::Var(w)) if w == v => z,
            (a, b) => BExp::xor(BExp::Var(v), BExp::xor(a, b)),
        },
        (BExp::Xor(a, b), BExp::Var(v)) => match (*a, *b) {
            (BExp::Var(w), z) | (z, BExp::Var(w)) if w == v => z,
            (a, b) => BExp::xor(BExp::xor(a, b), BExp::Var(v)),
        },
        (x, y) => BExp::xor(x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvid_ir::{BitId, State};

    #[test]
    fn test_and_false_collapses() {
        let e = BExp::and(BExp::False, BExp::var(3));
        assert_eq!(simplify(&e), BExp::False);

        let e = BExp::and(BExp::var(3), BExp::False);
        assert_eq!(simplify(&e), BExp::False);
    }

    #[test]
    fn test_xor_false_drops() {
        let e = BExp::xor(BExp::False, BExp::var(1));
        assert_eq!(simplify(&e), BExp::var(1));

        let e = BExp::xor(BExp::var(1), BExp::False);
        assert_eq!(simplify(&e), BExp::var(1));
    }

    #[test]
    fn test_xor_self_cancellation() {
        let e = BExp::xor(BExp::var(0), BExp::xor(BExp::var(0), BExp::var(1)));
        assert_eq!(simplify(&e), BExp::var(1));

        // All four rotations.
        let e = BExp::xor(BExp::var(0), BExp::xor(BExp::var(1), BExp::var(0)));
        assert_eq!(simplify(&e), BExp::var(1));
        let e = BExp::xor(BExp::xor(BExp::var(0), BExp::var(1)), BExp::var(0));
        assert_eq!(simplify(&e), BExp::var(1));
        let e = BExp::xor(BExp::xor(BExp::var(1), BExp::var(0)), BExp::var(0));
        assert_eq!(simplify(&e), BExp::var(1));
    }

    #[test]
    fn test_and_idempotence_one_level() {
        let e = BExp::and(BExp::var(0), BExp::and(BExp::var(0), BExp::var(1)));
        assert_eq!(simplify(&e), BExp::and(BExp::var(0), BExp::var(1)));

        let e = BExp::and(BExp::and(BExp::var(1), BExp::var(0)), BExp::var(0));
        assert_eq!(simplify(&e), BExp::and(BExp::var(0), BExp::var(1)));
    }

    #[test]
    fn test_deeper_idempotence_is_preserved() {
        // x & (y & x) with the shared variable two rotations away from the
        // matched shape stays as written.
        let e = BExp::and(
            BExp::var(0),
            BExp::and(BExp::var(1), BExp::and(BExp::var(0), BExp::var(2))),
        );
        assert_eq!(simplify(&e), e);
    }

    #[test]
    fn test_double_negation() {
        let e = BExp::not_of(BExp::not_of(BExp::var(7)));
        assert_eq!(simplify(&e), BExp::var(7));
    }

    #[test]
    fn test_nested_rewrites_compose() {
        // !!(0 ^ x) simplifies all the way to x.
        let e = BExp::not_of(BExp::not_of(BExp::xor(BExp::False, BExp::var(2))));
        assert_eq!(simplify(&e), BExp::var(2));
    }

    #[test]
    fn test_preserves_semantics_on_fixed_inputs() {
        let e = BExp::xor(
            BExp::and(BExp::var(0), BExp::xor(BExp::var(1), BExp::False)),
            BExp::xor(BExp::var(0), BExp::xor(BExp::var(0), BExp::var(2))),
        );
        let s = simplify(&e);
        for bits in 0..8 {
            let st: State = (0..3)
                .map(|i| (BitId(i), bits >> i & 1 == 1))
                .collect();
            assert_eq!(e.eval(&st), s.eval(&st), "differs on {bits:03b}");
        }
    }
}
