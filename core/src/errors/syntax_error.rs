use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
#[error("SyntaxError: {message}")]
#[diagnostic(
    code(nulascript::illegal_character),
    help("remove the character or replace it with a supported symbol")
)]
pub struct SyntaxError {
    pub message: String,

    #[label("here")]
    pub span: miette::SourceSpan,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, offset: usize, length: usize) -> Self {
        Self {
            message: message.into(),
            span: (offset, length).into(),
        }
    }

    pub fn illegal_character(ch: char, offset: usize) -> Self {
        Self::new(format!("illegal character {ch:?}"), offset, ch.len_utf8())
    }
}
