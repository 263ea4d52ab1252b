mod helper;
mod highlighter;

use std::fs;

use nulascript::{NulaError, Scanner, TokenKind};
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, EditMode, Editor};

use self::helper::ReplHelper;
use crate::render::paint_token;

const PROMPT: &str = "> ";

pub fn run() -> Result<(), NulaError> {
    let config = Config::builder()
        .history_ignore_dups(true)
        .map_err(to_repl_error)?
        .completion_type(rustyline::CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut rl: Editor<ReplHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config).map_err(to_repl_error)?;
    rl.set_helper(Some(ReplHelper));

    println!(
        "{} {}",
        "nula".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "Type .help for REPL commands".bright_black());

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match handle_command(trimmed) {
                    Command::Exit => break,
                    Command::Handled => continue,
                    Command::NotACommand => {}
                }

                let _ = rl.add_history_entry(trimmed);
                print_tokens(trimmed);
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "bye".bright_black());
                break;
            }
            Err(err) => {
                eprintln!("{} {err}", "repl error:".red().bold());
                break;
            }
        }
    }

    Ok(())
}

enum Command {
    Exit,
    Handled,
    NotACommand,
}

fn handle_command(trimmed: &str) -> Command {
    if trimmed == ".exit" || trimmed == "exit" {
        return Command::Exit;
    }
    if trimmed == ".help" {
        println!("{}", ".help                show commands".bright_blue());
        println!("{}", ".load <file.nula>    scan a file".bright_blue());
        println!("{}", ".exit                exit REPL".bright_blue());
        return Command::Handled;
    }
    if let Some(path) = trimmed.strip_prefix(".load ") {
        let path = path.trim();
        match fs::read_to_string(path) {
            Ok(source) => print_tokens(&source),
            Err(err) => eprintln!("{} {err}", "load error:".red().bold()),
        }
        return Command::Handled;
    }
    Command::NotACommand
}

fn print_tokens(source: &str) {
    let mut scanner = Scanner::new(source);
    loop {
        let token = scanner.next_token();
        if token.is_eof() {
            break;
        }
        println!("{}", paint_token(&token));
    }
}

/// Whether `source` still has unclosed parentheses or braces.
pub fn needs_more_input(source: &str) -> bool {
    let mut parens = 0i32;
    let mut braces = 0i32;

    for token in Scanner::new(source) {
        match token.kind {
            TokenKind::LeftParen => parens += 1,
            TokenKind::RightParen => parens -= 1,
            TokenKind::LeftBrace => braces += 1,
            TokenKind::RightBrace => braces -= 1,
            _ => {}
        }
    }

    parens > 0 || braces > 0
}

fn to_repl_error(err: ReadlineError) -> NulaError {
    NulaError::Repl {
        message: format!("failed to initialize REPL: {err}"),
    }
}
