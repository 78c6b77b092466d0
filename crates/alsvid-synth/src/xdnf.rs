//! XOR-of-AND normalisation (XDNF / ESOP form).

use alsvid_ir::BExp;

/// Conjoin two already-normalised expressions, distributing over XOR.
///
/// If either argument is an `Xor`, the conjunction is pushed into its
/// branches (left side split first); otherwise the plain `And` is built.
pub fn distrib(x: BExp, y: BExp) -> BExp {
    match (x, y) {
        (BExp::Xor(a, b), y) => BExp::xor(distrib(*a, y.clone()), distrib(*b, y)),
        (x, BExp::Xor(a, b)) => BExp::xor(distrib(x.clone(), *a), distrib(x, *b)),
        (x, y) => BExp::and(x, y),
    }
}

/// Normalise an expression to an XOR of AND-of-literals.
///
/// Negation is rewritten to `1 ⊕ x` (with `1` spelled `!0`), so the result
/// contains `Not` only in that constant. Semantics is preserved.
pub fn to_xdnf(e: &BExp) -> BExp {
    match e {
        BExp::False | BExp::Var(_) => e.clone(),
        BExp::Not(x) => BExp::xor(BExp::truth(), to_xdnf(x)),
        BExp::And(x, y) => distrib(to_xdnf(x), to_xdnf(y)),
        BExp::Xor(x, y) => BExp::xor(to_xdnf(x), to_xdnf(y)),
    }
}

/// Partially invert [`to_xdnf`] by re-factoring shared conjuncts.
///
/// Bottom-up; at each `Xor` of two `And`s sharing an operand, the shared
/// operand is pulled out: `(a & b) ^ (a & d) → a & (b ^ d)`, in all four
/// symmetric positions. Semantics is preserved.
pub fn un_xdnf(e: &BExp) -> BExp {
    match e {
        BExp::False | BExp::Var(_) => e.clone(),
        BExp::Not(x) => BExp::not_of(un_xdnf(x)),
        BExp::And(x, y) => BExp::and(un_xdnf(x), un_xdnf(y)),
        BExp::Xor(x, y) => refactor(un_xdnf(x), un_xdnf(y)),
    }
}

fn refactor(x: BExp, y: BExp) -> BExp {
    match (x, y) {
        (BExp::And(a, b), BExp::And(c, d)) => {
            if a == c {
                BExp::and(*a, BExp::xor(*b, *d))
            } else if a == d {
                BExp::and(*a, BExp::xor(*b, *c))
            } else if b == c {
                BExp::and(*b, BExp::xor(*a, *d))
            } else if b == d {
                BExp::and(*b, BExp::xor(*a, *c))
            } else {
                BExp::Xor(
                    Box::new(BExp::And(a, b)),
                    Box::new(BExp::And(c, d)),
                )
            }
        }
        (x, y) => BExp::xor(x, y),
    }
}
