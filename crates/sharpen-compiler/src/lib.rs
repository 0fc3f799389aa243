//! Compiler abstraction for the sharpen build tool.
//!
//! A compiler backend turns one set of [`CompileArguments`] into an ordered
//! list of [`BuildOperation`]s with exact input and output declarations. An
//! external build engine schedules, caches and runs them; nothing here
//! touches the filesystem.
//!
//! ```text
//! BuildArguments ──map_build_arguments──▶ CompileArguments
//!                                              │
//!                          Compiler::create_compile_operations
//!                                              │
//!                                              ▼
//!          [ Write File: obj/CompileArguments.rsp ]──▶[ Compile - bin/Lib.dll ]
//! ```
//!
//! # Usage
//!
//! ```
//! use sharpen_build::{CompileArguments, LinkTarget};
//! use sharpen_compiler::{Compiler, RoslynCompiler};
//!
//! let arguments = CompileArguments {
//!     target_root_directory: "/out".into(),
//!     object_directory: "obj".into(),
//!     source_files: vec!["Program.cs".into()],
//!     target_type: LinkTarget::Executable,
//!     target: "bin/App.dll".into(),
//!     reference_target: "bin/ref/App.dll".into(),
//!     ..CompileArguments::default()
//! };
//!
//! let compiler = RoslynCompiler::new("csc");
//! let operations = compiler.create_compile_operations(&arguments)?;
//! assert_eq!(operations.len(), 2);
//! # Ok::<(), sharpen_compiler::CompileError>(())
//! ```

mod argument_builder;
mod compiler;
mod error;
mod mapping;
mod mock;
mod operation;
mod roslyn;

pub use argument_builder::{build_shared_compiler_arguments, build_unique_compiler_arguments};
pub use compiler::{Backend, Compiler};
pub use error::{CompileError, Result};
pub use mapping::map_build_arguments;
pub use mock::MockCompiler;
pub use operation::{write_file_operation, BuildOperation, WRITE_FILE_EXECUTABLE};
pub use roslyn::{RoslynCompiler, RESPONSE_FILE_NAME, SYMBOL_FILE_EXTENSION};

pub use sharpen_build::CompileArguments;
