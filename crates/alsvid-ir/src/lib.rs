//! Alsvid Reversible Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing reversible
//! classical circuits in Alsvid. It forms the foundation of the synthesis
//! stack.
//!
//! # Overview
//!
//! A circuit is a flat, ordered sequence of self-inverse gates over
//! integer-indexed bits. The crate also carries the Boolean expression IR
//! that the synthesizer lowers into circuits.
//!
//! # Core Components
//!
//! - **Bits and states**: [`BitId`] addresses a bit; [`State`] is a total
//!   assignment of Booleans to bits (lookup never fails)
//! - **Gates**: [`Gate`] for NOT, CNOT, and Toffoli, each its own inverse
//! - **Circuits**: [`Circuit`] for gate sequences, with evaluation,
//!   well-formedness, and the circuit-level [`Circuit::uncompute`] operation
//! - **Expressions**: [`BExp`], the `{false, not, and, xor}` expression
//!   tree with free-variable analysis and substitution
//!
//! # Example: Evaluating a circuit
//!
//! ```rust
//! use alsvid_ir::{BitId, Circuit, State};
//!
//! // b2 ^= b0; b2 ^= b0 & b1
//! let mut circuit = Circuit::new();
//! circuit.cnot(BitId(0), BitId(2)).unwrap();
//! circuit.toffoli(BitId(0), BitId(1), BitId(2)).unwrap();
//!
//! let input: State = [(BitId(0), true), (BitId(1), true)].into_iter().collect();
//! let output = circuit.evaluate(&input);
//!
//! // 0 ^ 1 ^ (1 & 1) = 0
//! assert!(!*output.get(BitId(2)));
//! ```
//!
//! # Example: Expressions
//!
//! ```rust
//! use alsvid_ir::{BExp, BitId, State};
//!
//! let e = BExp::xor(BExp::var(0), BExp::and(BExp::var(1), BExp::var(2)));
//!
//! let st: State = [(BitId(1), true), (BitId(2), true)].into_iter().collect();
//! assert!(e.eval(&st));
//! assert_eq!(e.var_max(), 2);
//! assert_eq!(e.and_depth(), 1);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Bits | Semantics |
//! |------|------|-----------|
//! | `NOT` | 1 | `a ^= 1` |
//! | `CNOT` | 2 | `a ^= c` |
//! | `TOFF` | 3 | `a ^= c1 & c2` |

pub mod bexp;
pub mod bit;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod state;

pub use bexp::BExp;
pub use bit::{BitId, BitSet};
pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::Gate;
pub use state::{State, TotalMap};
