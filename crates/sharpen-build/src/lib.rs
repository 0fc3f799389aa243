//! Argument model for the sharpen compiler adapter.
//!
//! This crate provides:
//! - User-facing build arguments and the recipe format (`sharpen.toml`)
//! - Compiler-facing compile arguments, the cache key of a compilation
//! - Validation of compile arguments
//!
//! # Example
//!
//! ```toml
//! # sharpen.toml
//! name = "Opal"
//! type = "library"
//! source_root = "/repo/Opal"
//! target_root = "/repo/out/Opal"
//! object_directory = "obj"
//! binary_directory = "bin"
//! sources = ["Path.cs", "Utilities.cs"]
//! nullable = "enabled"
//! ```

mod build_arguments;
mod compile_arguments;
mod error;

pub use build_arguments::{
    BuildArguments, BuildNullableState, BuildOptimizationLevel, BuildTargetType,
};
pub use compile_arguments::{CompileArguments, LinkTarget, NullableState};
pub use error::{ArgumentsError, BuildError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_recipe() {
        let toml = r#"
name = "Opal"
type = "library"
sources = ["Path.cs"]
        "#;

        let arguments = BuildArguments::from_toml_str(toml).expect("Failed to parse recipe");
        assert_eq!(arguments.target_name, "Opal");
        assert_eq!(arguments.target_type, BuildTargetType::Library);
        assert_eq!(arguments.source_files.len(), 1);
    }
}
