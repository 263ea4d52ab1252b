use std::fmt;

use serde::Serialize;

/// A single token: its kind and the exact lexeme it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The synthetic end-of-input token. Its text is always empty.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, String::new())
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}

/// Every kind of token the scanner can produce.
///
/// The discriminants are stable and may be relied on by downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum TokenKind {
    // Special
    Eof = 0,
    Illegal = 1,

    // Identifiers and literals
    Ident = 2,
    Int = 3,

    // Operators and punctuation
    Assign = 4,
    Plus = 5,
    Minus = 6,
    Comma = 7,
    Semicolon = 8,
    LeftParen = 9,
    RightParen = 10,
    LeftBrace = 11,
    RightBrace = 12,
    Asterisk = 13,
    Ampersand = 14,
    Pipe = 15,
    Bang = 16,
    Slash = 17,
    Less = 18,
    Greater = 19,

    // Keywords
    Function = 20,
    Let = 21,
    If = 22,
    Else = 23,
    True = 24,
    False = 25,
    Return = 26,
}

impl TokenKind {
    /// Map one of the fixed single-character symbols to its kind.
    pub fn from_symbol(ch: u8) -> Option<Self> {
        let kind = match ch {
            b'=' => Self::Assign,
            b'+' => Self::Plus,
            b'-' => Self::Minus,
            b',' => Self::Comma,
            b';' => Self::Semicolon,
            b'(' => Self::LeftParen,
            b')' => Self::RightParen,
            b'{' => Self::LeftBrace,
            b'}' => Self::RightBrace,
            b'*' => Self::Asterisk,
            b'&' => Self::Ampersand,
            b'|' => Self::Pipe,
            b'!' => Self::Bang,
            b'/' => Self::Slash,
            b'<' => Self::Less,
            b'>' => Self::Greater,
            _ => return None,
        };
        Some(kind)
    }

    /// Stable upper-case name, or the symbol itself for operators.
    pub fn name(self) -> &'static str {
        match self {
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Asterisk => "*",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Bang => "!",
            Self::Slash => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Return => "RETURN",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::Function
                | Self::Let
                | Self::If
                | Self::Else
                | Self::True
                | Self::False
                | Self::Return
        )
    }

    pub fn is_symbol(self) -> bool {
        (Self::Assign as u8..=Self::Greater as u8).contains(&(self as u8))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
