//! Lexer for the `.qc` gate list format.

use logos::Logos;

/// Tokens of the `.qc` format.
///
/// Whitespace (including newlines) and `#` line comments are skipped; the
/// grammar needs no line structure because every gate keyword fixes its own
/// operand count.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"#[^\n]*")]
pub enum Token {
    // Gate keywords
    #[token("NOT")]
    Not,

    #[token("CNOT")]
    Cnot,

    #[token("TOFF")]
    Toff,

    // Bit indices (signed)
    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),
}
