use super::cursor::Cursor;
use super::keywords::lookup_ident;
use super::token::{Token, TokenKind};

/// Scans source code one token at a time.
///
/// Once the end of input is reached every further call to
/// [`Scanner::next_token`] returns another end-of-input token.
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    finished: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            finished: false,
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.next_spanned().1
    }

    /// Whether the cursor has run off the end of the input.
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Scan the next token together with the byte offset its lexeme starts at.
    pub(crate) fn next_spanned(&mut self) -> (usize, Token) {
        self.skip_whitespace();
        let start = self.cursor.pos();

        let Some(ch) = self.cursor.current() else {
            return (start, Token::eof());
        };

        let token = if let Some(kind) = u8::try_from(ch).ok().and_then(TokenKind::from_symbol) {
            self.cursor.advance();
            Token::new(kind, ch)
        } else if ch.is_ascii_alphabetic() {
            self.scan_identifier(start)
        } else if ch.is_ascii_digit() {
            self.scan_integer(start)
        } else {
            tracing::debug!(offset = start, ?ch, "illegal character");
            self.cursor.advance();
            Token::new(TokenKind::Illegal, ch)
        };

        tracing::trace!(offset = start, kind = %token.kind, text = %token.text, "token");
        (start, token)
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(|c| matches!(c, ' ' | '\t' | '\n' | '\r'));
    }

    fn scan_identifier(&mut self, start: usize) -> Token {
        self.cursor.eat_while(|c| c.is_ascii_alphanumeric());
        let text = self.cursor.slice_from(start);
        Token::new(lookup_ident(text), text)
    }

    fn scan_integer(&mut self, start: usize) -> Token {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        Token::new(TokenKind::Int, self.cursor.slice_from(start))
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yields every token including the terminal end-of-input, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}
