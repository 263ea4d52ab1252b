use std::collections::HashMap;
use std::sync::LazyLock;

use super::token::TokenKind;

const KEYWORDS: [(&str, TokenKind); 7] = [
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

static TABLE: LazyLock<HashMap<&'static str, TokenKind>> =
    LazyLock::new(|| KEYWORDS.into_iter().collect());

/// Resolve an identifier lexeme to its keyword kind, or `Ident`.
///
/// Matching is exact and case-sensitive.
pub fn lookup_ident(ident: &str) -> TokenKind {
    TABLE.get(ident).copied().unwrap_or(TokenKind::Ident)
}

/// Reserved spellings, in declaration order.
pub fn keywords() -> impl Iterator<Item = &'static str> {
    KEYWORDS.iter().map(|(spelling, _)| *spelling)
}
