//! An algebraic ESOP representation: XOR of AND-cubes.
//!
//! Expressions in the XOR-AND fragment are polynomials over GF(2); this
//! module represents them directly as a set of monomials ("cubes"). The
//! empty polynomial is `false`, the empty cube is `true`, XOR is symmetric
//! difference of cube sets, and AND is distributive cube multiplication.

use alsvid_ir::{BExp, BitId};

/// A conjunction of variables, kept sorted and duplicate-free.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cube(Vec<BitId>);

impl Cube {
    /// The empty cube, denoting `true`.
    pub fn one() -> Self {
        Cube(vec![])
    }

    /// A single-variable cube.
    pub fn var(i: impl Into<BitId>) -> Self {
        Cube(vec![i.into()])
    }

    /// The variables of this cube.
    pub fn vars(&self) -> &[BitId] {
        &self.0
    }

    /// Multiply two cubes: the union of their variables (x & x = x).
    pub fn product(&self, other: &Cube) -> Cube {
        let mut vars = self.0.clone();
        vars.extend_from_slice(&other.0);
        vars.sort_unstable();
        vars.dedup();
        Cube(vars)
    }

    /// Read this cube back as an AND-of-literals expression.
    ///
    /// The empty cube reads back as the constant `!0`.
    pub fn to_bexp(&self) -> BExp {
        let mut vars = self.0.iter().rev();
        match vars.next() {
            None => BExp::truth(),
            Some(&last) => vars.fold(BExp::Var(last), |acc, &v| BExp::and(BExp::Var(v), acc)),
        }
    }
}

impl FromIterator<BitId> for Cube {
    fn from_iter<I: IntoIterator<Item = BitId>>(iter: I) -> Self {
        let mut vars: Vec<BitId> = iter.into_iter().collect();
        vars.sort_unstable();
        vars.dedup();
        Cube(vars)
    }
}

/// An XOR of cubes, kept sorted so equality is canonical.
///
/// `[]` is `false`, `[[]]` is `true`, `[[v]]` is `Var v`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Esop {
    cubes: Vec<Cube>,
}

impl Esop {
    /// The zero polynomial, `false`.
    pub fn zero() -> Self {
        Self { cubes: vec![] }
    }

    /// The unit polynomial, `true`.
    pub fn one() -> Self {
        Self {
            cubes: vec![Cube::one()],
        }
    }

    /// The polynomial of a single variable.
    pub fn var(i: impl Into<BitId>) -> Self {
        Self {
            cubes: vec![Cube::var(i)],
        }
    }

    /// The cubes, in canonical order.
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    /// Number of cubes.
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    /// Check whether this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.cubes.is_empty()
    }

    /// XOR: symmetric difference of the cube sets.
    pub fn xor(&self, other: &Esop) -> Esop {
        let mut out = self.clone();
        for cube in &other.cubes {
            out.toggle(cube.clone());
        }
        out
    }

    /// AND: multiply out, cancelling duplicate products (c ^ c = 0).
    pub fn and(&self, other: &Esop) -> Esop {
        let mut out = Esop::zero();
        for a in &self.cubes {
            for b in &other.cubes {
                out.toggle(a.product(b));
            }
        }
        out
    }

    /// NOT: `1 ^ self`.
    pub fn not(&self) -> Esop {
        Esop::one().xor(self)
    }

    // Flip membership of a single cube.
    fn toggle(&mut self, cube: Cube) {
        match self.cubes.binary_search(&cube) {
            Ok(pos) => {
                self.cubes.remove(pos);
            }
            Err(pos) => {
                self.cubes.insert(pos, cube);
            }
        }
    }

    /// Read the polynomial back as an XOR-of-ANDs expression.
    pub fn to_bexp(&self) -> BExp {
        let mut cubes = self.cubes.iter().rev();
        match cubes.next() {
            None => BExp::False,
            Some(last) => cubes.fold(last.to_bexp(), |acc, c| BExp::xor(c.to_bexp(), acc)),
        }
    }
}

impl From<&BExp> for Esop {
    fn from(e: &BExp) -> Self {
        match e {
            BExp::False => Esop::zero(),
            BExp::Var(i) => Esop::var(*i),
            BExp::Not(x) => Esop::from(&**x).not(),
            BExp::And(x, y) => Esop::from(&**x).and(&Esop::from(&**y)),
            BExp::Xor(x, y) => Esop::from(&**x).xor(&Esop::from(&**y)),
        }
    }
}
