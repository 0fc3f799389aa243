//! The compiler capability every backend implements.

use crate::mock::MockCompiler;
use crate::operation::BuildOperation;
use crate::roslyn::RoslynCompiler;
use crate::{CompileError, Result};
use sharpen_build::CompileArguments;
use std::path::PathBuf;

/// A compiler backend.
///
/// Backends only describe work. `create_compile_operations` must not touch
/// the filesystem or spawn processes, and identical arguments must always
/// produce identical operations.
pub trait Compiler {
    /// Unique, human-readable name of the compiler.
    fn name(&self) -> &str;

    fn object_file_extension(&self) -> &str;

    fn static_library_file_extension(&self) -> &str;

    fn dynamic_library_file_extension(&self) -> &str;

    fn module_file_extension(&self) -> &str;

    /// Describe the operations that compile `arguments`.
    ///
    /// On success the list is never empty.
    fn create_compile_operations(&self, arguments: &CompileArguments) -> Result<Vec<BuildOperation>>;
}

/// The known compiler backends.
#[derive(Debug)]
pub enum Backend {
    Roslyn(RoslynCompiler),
    Mock(MockCompiler),
}

impl Backend {
    /// Look up a backend by name (case-insensitive).
    ///
    /// `compiler_executable` is the program the backend invokes; the mock
    /// backend ignores it.
    pub fn from_name(name: &str, compiler_executable: impl Into<PathBuf>) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "roslyn" => Ok(Backend::Roslyn(RoslynCompiler::new(compiler_executable))),
            "mock" => Ok(Backend::Mock(MockCompiler::new())),
            _ => Err(CompileError::UnknownBackend(name.to_string())),
        }
    }
}

impl Compiler for Backend {
    fn name(&self) -> &str {
        match self {
            Backend::Roslyn(compiler) => compiler.name(),
            Backend::Mock(compiler) => compiler.name(),
        }
    }

    fn object_file_extension(&self) -> &str {
        match self {
            Backend::Roslyn(compiler) => compiler.object_file_extension(),
            Backend::Mock(compiler) => compiler.object_file_extension(),
        }
    }

    fn static_library_file_extension(&self) -> &str {
        match self {
            Backend::Roslyn(compiler) => compiler.static_library_file_extension(),
            Backend::Mock(compiler) => compiler.static_library_file_extension(),
        }
    }

    fn dynamic_library_file_extension(&self) -> &str {
        match self {
            Backend::Roslyn(compiler) => compiler.dynamic_library_file_extension(),
            Backend::Mock(compiler) => compiler.dynamic_library_file_extension(),
        }
    }

    fn module_file_extension(&self) -> &str {
        match self {
            Backend::Roslyn(compiler) => compiler.module_file_extension(),
            Backend::Mock(compiler) => compiler.module_file_extension(),
        }
    }

    fn create_compile_operations(&self, arguments: &CompileArguments) -> Result<Vec<BuildOperation>> {
        match self {
            Backend::Roslyn(compiler) => compiler.create_compile_operations(arguments),
            Backend::Mock(compiler) => compiler.create_compile_operations(arguments),
        }
    }
}
