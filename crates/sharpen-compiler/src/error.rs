//! Error types for sharpen-compiler.

use miette::Diagnostic;
use sharpen_build::{ArgumentsError, BuildError};
use thiserror::Error;

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, CompileError>;

/// Errors raised while describing compile operations.
///
/// None of these are runtime failures: describing work performs no I/O, so
/// every error points at a caller handing over malformed input.
#[derive(Error, Debug, Diagnostic)]
pub enum CompileError {
    /// The compile arguments break an invariant the compiler relies on.
    #[error("Invalid compile arguments: {0}")]
    #[diagnostic(code(sharpen::invalid_arguments))]
    InvalidArguments(#[from] ArgumentsError),

    /// No backend is registered under the requested name.
    #[error("Unknown compiler backend: {0}")]
    #[diagnostic(
        code(sharpen::unknown_backend),
        help("known backends are `roslyn` and `mock`")
    )]
    UnknownBackend(String),

    /// The build arguments could not be mapped onto compile arguments.
    #[error(transparent)]
    #[diagnostic(code(sharpen::build))]
    Build(#[from] BuildError),
}
