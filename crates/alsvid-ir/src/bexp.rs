//! Boolean expression trees.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bit::{BitId, BitSet};
use crate::state::State;

/// A Boolean expression over bit-indexed variables.
///
/// The connectives are the XOR-AND fragment: constants are built from
/// `False` and `Not`, and every expression denotes a polynomial over GF(2).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BExp {
    /// The constant false.
    False,
    /// A variable, read from the evaluation state.
    Var(BitId),
    /// Negation.
    Not(Box<BExp>),
    /// Conjunction.
    And(Box<BExp>, Box<BExp>),
    /// Exclusive or.
    Xor(Box<BExp>, Box<BExp>),
}

impl BExp {
    /// The constant true, spelled `!0`.
    pub fn truth() -> Self {
        BExp::Not(Box::new(BExp::False))
    }

    /// A variable reference.
    pub fn var(i: impl Into<BitId>) -> Self {
        BExp::Var(i.into())
    }

    /// Negate an expression.
    pub fn not_of(x: BExp) -> Self {
        BExp::Not(Box::new(x))
    }

    /// Conjoin two expressions.
    pub fn and(x: BExp, y: BExp) -> Self {
        BExp::And(Box::new(x), Box::new(y))
    }

    /// XOR two expressions.
    pub fn xor(x: BExp, y: BExp) -> Self {
        BExp::Xor(Box::new(x), Box::new(y))
    }

    /// Evaluate under a total state.
    pub fn eval(&self, st: &State) -> bool {
        match self {
            BExp::False => false,
            BExp::Var(i) => *st.get(*i),
            BExp::Not(x) => !x.eval(st),
            BExp::And(x, y) => x.eval(st) && y.eval(st),
            BExp::Xor(x, y) => x.eval(st) ^ y.eval(st),
        }
    }

    /// The set of free variables.
    pub fn vars(&self) -> BitSet {
        let mut out = BitSet::default();
        self.collect_vars(&mut out);
        out
    }

    fn collect_vars(&self, out: &mut BitSet) {
        match self {
            BExp::False => {}
            BExp::Var(i) => {
                out.insert(*i);
            }
            BExp::Not(x) => x.collect_vars(out),
            BExp::And(x, y) | BExp::Xor(x, y) => {
                x.collect_vars(out);
                y.collect_vars(out);
            }
        }
    }

    /// Check whether variable `i` occurs free.
    pub fn occurs_in(&self, i: BitId) -> bool {
        match self {
            BExp::False => false,
            BExp::Var(j) => *j == i,
            BExp::Not(x) => x.occurs_in(i),
            BExp::And(x, y) | BExp::Xor(x, y) => x.occurs_in(i) || y.occurs_in(i),
        }
    }

    /// The maximum variable index, or 0 for closed expressions.
    pub fn var_max(&self) -> i64 {
        match self {
            BExp::False => 0,
            BExp::Var(i) => i.0.max(0),
            BExp::Not(x) => x.var_max(),
            BExp::And(x, y) | BExp::Xor(x, y) => x.var_max().max(y.var_max()),
        }
    }

    /// The maximum number of `And` nodes on any root-to-leaf path.
    ///
    /// `Xor` takes the maximum of its children, `Not` is transparent, and
    /// leaves are 0. Used by the array driver to order compilations for
    /// better ancilla reuse.
    pub fn and_depth(&self) -> usize {
        match self {
            BExp::False | BExp::Var(_) => 0,
            BExp::Not(x) => x.and_depth(),
            BExp::Xor(x, y) => x.and_depth().max(y.and_depth()),
            BExp::And(x, y) => 1 + x.and_depth().max(y.and_depth()),
        }
    }

    /// Node count.
    pub fn size(&self) -> usize {
        match self {
            BExp::False | BExp::Var(_) => 1,
            BExp::Not(x) => 1 + x.size(),
            BExp::And(x, y) | BExp::Xor(x, y) => 1 + x.size() + y.size(),
        }
    }

    /// Replace each `Var(i)` by `sigma(i)`.
    ///
    /// The substitution is a total function on bit identifiers, so the
    /// replacement cannot fail.
    pub fn subst(&self, sigma: &impl Fn(BitId) -> BExp) -> BExp {
        match self {
            BExp::False => BExp::False,
            BExp::Var(i) => sigma(*i),
            BExp::Not(x) => BExp::not_of(x.subst(sigma)),
            BExp::And(x, y) => BExp::and(x.subst(sigma), y.subst(sigma)),
            BExp::Xor(x, y) => BExp::xor(x.subst(sigma), y.subst(sigma)),
        }
    }

    /// Rename each `Var(i)` to `Var(sigma(i))`.
    pub fn rename(&self, sigma: &impl Fn(BitId) -> BitId) -> BExp {
        self.subst(&|i| BExp::Var(sigma(i)))
    }
}

impl fmt::Display for BExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BExp::False => write!(f, "0"),
            BExp::Var(i) => write!(f, "{i}"),
            BExp::Not(x) => write!(f, "!{x}"),
            BExp::And(x, y) => write!(f, "({x} & {y})"),
            BExp::Xor(x, y) => write!(f, "({x} ^ {y})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BExp {
        // b0 ^ (b1 & !b2)
        BExp::xor(
            BExp::var(0),
            BExp::and(BExp::var(1), BExp::not_of(BExp::var(2))),
        )
    }

    #[test]
    fn test_eval() {
        let e = sample();
        let st: State = [(BitId(1), true)].into_iter().collect();
        assert!(e.eval(&st));

        let st: State = [(BitId(0), true), (BitId(1), true)].into_iter().collect();
        assert!(!e.eval(&st));
    }

    #[test]
    fn test_vars_and_occurs() {
        let e = sample();
        let expected: BitSet = [BitId(0), BitId(1), BitId(2)].into_iter().collect();
        assert_eq!(e.vars(), expected);
        assert!(e.occurs_in(BitId(2)));
        assert!(!e.occurs_in(BitId(3)));
    }

    #[test]
    fn test_var_max() {
        assert_eq!(sample().var_max(), 2);
        assert_eq!(BExp::False.var_max(), 0);
        assert_eq!(BExp::truth().var_max(), 0);
        assert_eq!(BExp::var(-4).var_max(), 0);
    }

    #[test]
    fn test_and_depth() {
        assert_eq!(BExp::var(0).and_depth(), 0);
        assert_eq!(sample().and_depth(), 1);

        let nested = BExp::and(sample(), BExp::var(3));
        assert_eq!(nested.and_depth(), 2);

        let spread = BExp::xor(nested.clone(), BExp::var(4));
        assert_eq!(spread.and_depth(), 2);
    }

    #[test]
    fn test_subst() {
        let e = BExp::xor(BExp::var(0), BExp::var(1));
        let swapped = e.subst(&|i| {
            if i == BitId(0) {
                BExp::and(BExp::var(5), BExp::var(6))
            } else {
                BExp::Var(i)
            }
        });
        assert_eq!(
            swapped,
            BExp::xor(BExp::and(BExp::var(5), BExp::var(6)), BExp::var(1))
        );
    }

    #[test]
    fn test_rename() {
        let e = sample();
        let shifted = e.rename(&|i| BitId(i.0 + 10));
        let expected: BitSet = [BitId(10), BitId(11), BitId(12)].into_iter().collect();
        assert_eq!(shifted.vars(), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", sample()), "(b0 ^ (b1 & !b2))");
    }
}
