//! Error types for sharpen-build.

use thiserror::Error;

/// Result type for sharpen-build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors that can occur while loading or resolving build arguments.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Failed to read the recipe file.
    #[error("Failed to read recipe file: {0}")]
    ReadRecipe(#[from] std::io::Error),

    /// Failed to parse the TOML recipe.
    #[error("Failed to parse TOML recipe: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// Recipe validation error.
    #[error("Recipe validation error: {0}")]
    Validation(String),

    /// The resolved compile arguments are malformed.
    #[error(transparent)]
    InvalidArguments(#[from] ArgumentsError),
}

/// Malformed compile arguments.
///
/// These are programming errors in whatever produced the arguments: a
/// compiler backend refuses to describe any operation for them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentsError {
    /// The target artifact path is empty.
    #[error("compile arguments have an empty target path")]
    MissingTarget,

    /// The object directory is empty.
    #[error("compile arguments have an empty object directory")]
    MissingObjectDirectory,

    /// A module target carries a reference target, which modules never produce.
    #[error("module target {target} must not declare a reference target ({reference_target})")]
    ModuleReferenceTarget {
        target: String,
        reference_target: String,
    },

    /// A library or executable target has no reference target.
    #[error("target {target} is missing its reference target")]
    MissingReferenceTarget { target: String },
}
