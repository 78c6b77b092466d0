//! Error types for the `.qc` parser.

use thiserror::Error;

/// Errors that can occur during parsing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Lexer error (invalid token).
    #[error("Lexer error at byte {position}: unrecognised input")]
    LexerError {
        /// Byte offset of the offending input.
        position: usize,
    },

    /// Unexpected token.
    #[error("Unexpected token at byte {position}: expected {expected}, found {found}")]
    UnexpectedToken {
        /// Byte offset of the offending token.
        position: usize,
        /// What the parser was looking for.
        expected: &'static str,
        /// What it found instead.
        found: String,
    },

    /// Unexpected end of input.
    #[error("Unexpected end of input: expected {0}")]
    UnexpectedEof(&'static str),

    /// IR error during circuit construction.
    #[error("Circuit error: {0}")]
    CircuitError(#[from] alsvid_ir::IrError),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
