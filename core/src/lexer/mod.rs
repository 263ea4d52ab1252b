pub mod cursor;
pub mod keywords;
pub mod scanner;
pub mod token;

use crate::errors::SyntaxError;
use scanner::Scanner;
use token::{Token, TokenKind};

/// Tokenize source code into a list of tokens ending in a single `Eof`.
///
/// Illegal characters come back as `Illegal` tokens; this never fails.
pub fn lex(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}

/// Tokenize source code, rejecting the first illegal character.
pub fn lex_strict(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();

    loop {
        let (offset, token) = scanner.next_spanned();
        match token.kind {
            TokenKind::Illegal => {
                let ch = token.text.chars().next().unwrap_or_default();
                return Err(SyntaxError::illegal_character(ch, offset));
            }
            TokenKind::Eof => {
                tokens.push(token);
                return Ok(tokens);
            }
            _ => tokens.push(token),
        }
    }
}
