//! `.qc` Parser and Emitter for Alsvid
//!
//! This crate reads and writes the line-per-gate textual format that
//! downstream printers consume. It is the sole wire format: one gate per
//! line, a keyword followed by one to three decimal bit indices.
//!
//! | Keyword | Operands | Gate |
//! |---------|----------|------|
//! | `NOT` | `a` | flip `a` |
//! | `CNOT` | `c a` | flip `a` if `c` |
//! | `TOFF` | `c1 c2 a` | flip `a` if `c1 & c2` |
//!
//! Indices may be negative. The parser additionally tolerates blank lines
//! and `#` line comments; the emitter writes gates only.
//!
//! # Example: Emitting
//!
//! ```rust
//! use alsvid_ir::{BitId, Circuit};
//! use alsvid_qc::emit;
//!
//! let mut circuit = Circuit::new();
//! circuit.cnot(BitId(0), BitId(2)).unwrap();
//! circuit.toffoli(BitId(0), BitId(1), BitId(2)).unwrap();
//!
//! assert_eq!(emit(&circuit), "CNOT 0 2\nTOFF 0 1 2\n");
//! ```
//!
//! # Example: Round-Trip
//!
//! ```rust
//! use alsvid_qc::{emit, parse};
//!
//! let src = "CNOT 0 5\nCNOT 1 5\nTOFF 5 2 4\nCNOT 1 5\nCNOT 0 5\n";
//! let circuit = parse(src).unwrap();
//! assert_eq!(circuit.len(), 5);
//! assert_eq!(emit(&circuit), src);
//! ```

mod emitter;
mod error;
mod lexer;
mod parser;

pub use emitter::emit;
pub use error::{ParseError, ParseResult};
pub use parser::parse;
