use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use miette::NamedSource;
use nulascript::NulaError;
use owo_colors::OwoColorize;
use tracing::Level;

mod render;
mod repl;

#[derive(Parser)]
#[command(name = "nula", about = "Tokenizer for the Nula scripting language")]
struct Cli {
    /// Path to a .nula file to scan
    file: Option<PathBuf>,
    /// Scan inline source instead of a file
    #[arg(long)]
    eval: Option<String>,
    /// Output format for the token stream
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Fail on the first illegal character
    #[arg(long)]
    strict: bool,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.version {
        println!(
            "{} {}",
            "nula".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return;
    }

    let input = match (&cli.eval, &cli.file) {
        (Some(code), _) => Ok((code.clone(), "<eval>".to_owned())),
        (None, Some(path)) => read_file(path),
        (None, None) => {
            if let Err(err) = repl::run() {
                eprintln!("{} {err}", "error:".red().bold());
                process::exit(1);
            }
            return;
        }
    };
    let (source, name) = match input {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            process::exit(1);
        }
    };
    tracing::info!(source = %name, bytes = source.len(), "scanning");

    let tokens = if cli.strict {
        match nulascript::lex_strict(&source) {
            Ok(tokens) => tokens,
            Err(err) => {
                let report = miette::Report::new(NulaError::from(err))
                    .with_source_code(NamedSource::new(name, source));
                eprintln!("{report:?}");
                process::exit(1);
            }
        }
    } else {
        nulascript::lex(&source)
    };

    match render::render_tokens(&tokens, cli.format) {
        Ok(out) => print!("{out}"),
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            process::exit(1);
        }
    }
}

fn read_file(path: &Path) -> Result<(String, String), NulaError> {
    let source = fs::read_to_string(path).map_err(|source| NulaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((source, path.display().to_string()))
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
