mod syntax_error;

pub use syntax_error::SyntaxError;

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for everything that can go wrong around a scan.
#[derive(Debug, Error, Diagnostic)]
pub enum NulaError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("could not read '{}'", path.display())]
    #[diagnostic(code(nulascript::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("repl error: {message}")]
    #[diagnostic(code(nulascript::repl))]
    Repl { message: String },
}
