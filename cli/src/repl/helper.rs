use std::borrow::Cow;

use nulascript::lexer::keywords::keywords;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context as RustyContext, Helper, Result as RustyResult};

use super::highlighter;

/// Line-editor hooks: keyword completion, hints, highlighting and
/// multi-line entry while brackets are open.
#[derive(Clone, Default, Helper)]
pub struct ReplHelper;

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &RustyContext<'_>,
    ) -> RustyResult<(usize, Vec<Pair>)> {
        let (start, word) = word_before(line, pos);
        let pairs = keywords()
            .filter(|kw| kw.starts_with(word))
            .map(|kw| Pair {
                display: kw.to_owned(),
                replacement: kw.to_owned(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    /// Suggest the rest of a keyword once the prefix is unambiguous.
    fn hint(&self, line: &str, pos: usize, _ctx: &RustyContext<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let (_, word) = word_before(line, pos);
        if word.is_empty() {
            return None;
        }
        let mut matches = keywords().filter(|kw| kw.starts_with(word) && *kw != word);
        let only = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(only[word.len()..].to_owned())
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        highlighter::highlight_line(line)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        highlighter::highlight_prompt(prompt)
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        highlighter::highlight_hint(hint)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Validator for ReplHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> RustyResult<ValidationResult> {
        if super::needs_more_input(ctx.input()) {
            Ok(ValidationResult::Incomplete)
        } else {
            Ok(ValidationResult::Valid(None))
        }
    }
}

/// The run of ASCII letters ending at `pos`, and where it starts.
fn word_before(line: &str, pos: usize) -> (usize, &str) {
    let prefix = &line[..pos.min(line.len())];
    let start = prefix
        .char_indices()
        .rev()
        .find(|(_, ch)| !ch.is_ascii_alphabetic())
        .map_or(0, |(idx, ch)| idx + ch.len_utf8());
    (start, &prefix[start..])
}

#[cfg(test)]
mod tests {
    use rustyline::history::DefaultHistory;

    use super::*;

    #[test]
    fn word_before_stops_at_non_letters() {
        assert_eq!(word_before("let x = ret", 11), (8, "ret"));
        assert_eq!(word_before("fn(", 3), (3, ""));
        assert_eq!(word_before("el", 2), (0, "el"));
    }

    #[test]
    fn completes_keyword_prefixes() {
        let history = DefaultHistory::new();
        let ctx = RustyContext::new(&history);
        let (start, pairs) = ReplHelper.complete("x = f", 5, &ctx).expect("completes");
        assert_eq!(start, 4);
        let words: Vec<_> = pairs.iter().map(|p| p.replacement.as_str()).collect();
        assert_eq!(words, vec!["fn", "false"]);
    }

    #[test]
    fn hints_only_unique_keywords() {
        let history = DefaultHistory::new();
        let ctx = RustyContext::new(&history);
        assert_eq!(ReplHelper.hint("ret", 3, &ctx), Some("urn".to_owned()));
        assert_eq!(ReplHelper.hint("f", 1, &ctx), None);
        assert_eq!(ReplHelper.hint("let", 3, &ctx), None);
        assert_eq!(ReplHelper.hint("", 0, &ctx), None);
    }
}
