//! Alsvid Reversible Circuit Synthesis
//!
//! This crate lowers Boolean expressions ([`alsvid_ir::BExp`]) into
//! reversible circuits of NOT, CNOT, and Toffoli gates, tracking the
//! auxiliary "ancilla" bits the lowering borrows along the way.
//!
//! # Overview
//!
//! The synthesizer XORs the value of an expression into a target bit.
//! Conjunctions need their operands on wires of their own, so each `And`
//! borrows scratch bits from an [`AncHeap`]: a pool of indices the caller
//! guarantees to be zero-initialised and disjoint from live data. A
//! [`Strategy`] picks when that scratch is restored to zero and returned:
//!
//! | Strategy | Cleanup | Shape |
//! |----------|---------|-------|
//! | [`Strategy::Pebbled`] | at every conjunction | minimal peak width |
//! | [`Strategy::Boundaries`] | once, at the end | fewer gates |
//! | [`Strategy::Bennett`] | deferred mirror suffix | compute-copy-uncompute |
//!
//! All three produce circuits computing the same value on the result bit.
//!
//! # Example
//!
//! ```rust
//! use alsvid_ir::{BExp, BitId, State};
//! use alsvid_synth::{synthesize, AncHeap, Strategy};
//!
//! // (b0 ^ b1) & b2, XORed into bit 4, scratch drawn from {5, 6, ...}.
//! let e = BExp::and(BExp::xor(BExp::var(0), BExp::var(1)), BExp::var(2));
//! let s = synthesize(AncHeap::above(5), BitId(4), &e, Strategy::Pebbled);
//!
//! assert_eq!(s.result, BitId(4));
//! assert!(s.ancillas.is_empty()); // pebbling returned all scratch
//!
//! let input: State = [(BitId(0), true), (BitId(2), true)].into_iter().collect();
//! let output = s.circuit.evaluate(&input);
//! assert!(*output.get(BitId(4)));
//! ```
//!
//! # Pipeline
//!
//! The [`driver`] module provides the conventional front door: normalise
//! with [`xdnf_simplify`] (push `And` through `Xor`, then one simplifier
//! pass), set up a fresh-index heap above the expression's variables, and
//! synthesize out of place. Arrays of expressions are compiled
//! shallowest-first through a single threaded heap.

pub mod driver;
pub mod esop;
pub mod heap;
pub mod simplify;
pub mod synth;
pub mod xdnf;

pub use driver::{compile_expr, compile_exprs, xdnf_simplify, CompileOutput};
pub use esop::{Cube, Esop};
pub use heap::AncHeap;
pub use simplify::simplify;
pub use synth::{lower, lower_oop, synthesize, synthesize_oop, Strategy, Synthesis};
pub use xdnf::{distrib, to_xdnf, un_xdnf};
