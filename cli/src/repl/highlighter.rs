use std::borrow::Cow;

use nulascript::{Scanner, Token, TokenKind};
use owo_colors::OwoColorize;

/// Colour the line token by token, keeping its whitespace untouched.
pub fn highlight_line(line: &str) -> Cow<'_, str> {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    for token in Scanner::new(line) {
        let lexeme_start = rest
            .find(|c: char| !matches!(c, ' ' | '\t' | '\n' | '\r'))
            .unwrap_or(rest.len());
        out.push_str(&rest[..lexeme_start]);
        rest = &rest[lexeme_start..];

        if token.is_eof() {
            break;
        }
        out.push_str(&paint(&token));
        rest = &rest[token.text.len()..];
    }

    Cow::Owned(out)
}

fn paint(token: &Token) -> String {
    let text = token.text.as_str();
    match token.kind {
        TokenKind::Illegal => text.on_red().to_string(),
        TokenKind::Int => text.magenta().to_string(),
        TokenKind::True | TokenKind::False => text.yellow().to_string(),
        kind if kind.is_keyword() => text.blue().bold().to_string(),
        _ => text.to_owned(),
    }
}

pub fn highlight_prompt(prompt: &str) -> Cow<'_, str> {
    if prompt == super::PROMPT {
        return Cow::Owned(format!("{} ", ">".bright_green().bold()));
    }
    Cow::Borrowed(prompt)
}

pub fn highlight_hint(hint: &str) -> Cow<'_, str> {
    Cow::Owned(hint.bright_black().to_string())
}
