//! Lexical analysis for the Nula scripting language.
//!
//! The [`lexer::scanner::Scanner`] turns source text into [`Token`]s one at a
//! time; [`lexer::lex`] and [`lexer::lex_strict`] drain it in one call.

pub mod errors;
pub mod lexer;

pub use errors::{NulaError, SyntaxError};
pub use lexer::scanner::Scanner;
pub use lexer::token::{Token, TokenKind};
pub use lexer::{lex, lex_strict};
