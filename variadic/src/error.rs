//! Error types for signature construction.

use snafu::Snafu;

/// Result type for signature construction.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while declaring a signature. Queries never fail.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Variadic element was neither a type nor a tuple of types.
    #[snafu(display(
        "variadic types must be a type or a tuple of types (Variadic[int] or Variadic[(int, float)]), got {found}"
    ))]
    InvalidSpec { found: String },

    #[snafu(display("parse error at line {line}, column {column}: {message}"))]
    Parse { line: usize, column: usize, message: String },

    /// Name resolved to neither a builtin nor a registered class.
    #[snafu(display("unknown type '{name}'"))]
    UnknownType { name: String },
}

impl Error {
    pub(crate) fn from_pest_error(err: pest::error::Error<crate::parse::Rule>) -> Self {
        let (line, column) = match err.line_col {
            pest::error::LineColLocation::Pos((l, c)) => (l, c),
            pest::error::LineColLocation::Span((l, c), _) => (l, c),
        };
        Error::Parse { line, column, message: err.variant.message().to_string() }
    }
}
