//! Parser for the `.qc` gate list format.

use logos::{Lexer, Logos};

use alsvid_ir::{BitId, Circuit};

use crate::error::{ParseError, ParseResult};
use crate::lexer::Token;

/// Parse `.qc` source into a circuit.
///
/// Gates whose operands collide (for example `CNOT 1 1`) are rejected by
/// the validating circuit builder.
pub fn parse(src: &str) -> ParseResult<Circuit> {
    let mut lexer = Token::lexer(src);
    let mut circuit = Circuit::new();

    while let Some(token) = lexer.next() {
        let token = token.map_err(|()| ParseError::LexerError {
            position: lexer.span().start,
        })?;
        match token {
            Token::Not => {
                let a = expect_index(&mut lexer)?;
                circuit.not(a)?;
            }
            Token::Cnot => {
                let c = expect_index(&mut lexer)?;
                let a = expect_index(&mut lexer)?;
                circuit.cnot(c, a)?;
            }
            Token::Toff => {
                let c1 = expect_index(&mut lexer)?;
                let c2 = expect_index(&mut lexer)?;
                let a = expect_index(&mut lexer)?;
                circuit.toffoli(c1, c2, a)?;
            }
            Token::Int(i) => {
                return Err(ParseError::UnexpectedToken {
                    position: lexer.span().start,
                    expected: "gate keyword",
                    found: i.to_string(),
                });
            }
        }
    }

    Ok(circuit)
}

fn expect_index(lexer: &mut Lexer<'_, Token>) -> ParseResult<BitId> {
    match lexer.next() {
        Some(Ok(Token::Int(i))) => Ok(BitId(i)),
        Some(Ok(token)) => Err(ParseError::UnexpectedToken {
            position: lexer.span().start,
            expected: "bit index",
            found: format!("{token:?}"),
        }),
        Some(Err(())) => Err(ParseError::LexerError {
            position: lexer.span().start,
        }),
        None => Err(ParseError::UnexpectedEof("bit index")),
    }
}
