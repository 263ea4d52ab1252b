use std::fmt::Write as _;

use nulascript::{Token, TokenKind};
use owo_colors::OwoColorize;

use crate::Format;

/// Render a token stream for stdout.
pub fn render_tokens(tokens: &[Token], format: Format) -> Result<String, serde_json::Error> {
    match format {
        Format::Json => {
            let mut out = serde_json::to_string_pretty(tokens)?;
            out.push('\n');
            Ok(out)
        }
        Format::Text => Ok(tokens.iter().fold(String::new(), |mut out, token| {
            let _ = writeln!(out, "{}", paint_token(token));
            out
        })),
    }
}

/// One token as `KIND "text"`, coloured by kind.
pub fn paint_token(token: &Token) -> String {
    let kind = token.kind.name();
    let kind = match token.kind {
        TokenKind::Illegal => kind.red().bold().to_string(),
        TokenKind::Eof => kind.bright_black().to_string(),
        k if k.is_keyword() => kind.blue().bold().to_string(),
        TokenKind::Int => kind.magenta().to_string(),
        TokenKind::Ident => kind.cyan().to_string(),
        _ => kind.yellow().to_string(),
    };
    format!("{kind} {:?}", token.text)
}
