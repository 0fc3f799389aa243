//! The Roslyn (`csc`) compiler backend.

use crate::argument_builder::{build_shared_compiler_arguments, build_unique_compiler_arguments};
use crate::compiler::Compiler;
use crate::operation::{write_file_operation, BuildOperation};
use crate::Result;
use sharpen_build::{CompileArguments, LinkTarget};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Response file holding the shared switches, inside the object directory.
pub const RESPONSE_FILE_NAME: &str = "CompileArguments.rsp";

/// Extension of the portable debug symbol file written next to the target.
pub const SYMBOL_FILE_EXTENSION: &str = "pdb";

/// Roslyn compiler backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoslynCompiler {
    compiler_executable: PathBuf,
}

impl RoslynCompiler {
    /// Create a backend that invokes the given compiler executable.
    pub fn new(compiler_executable: impl Into<PathBuf>) -> Self {
        Self {
            compiler_executable: compiler_executable.into(),
        }
    }

    /// Get the path to the compiler being invoked.
    pub fn compiler_executable(&self) -> &Path {
        &self.compiler_executable
    }
}

impl Compiler for RoslynCompiler {
    fn name(&self) -> &str {
        "Roslyn"
    }

    fn object_file_extension(&self) -> &str {
        "obj"
    }

    fn static_library_file_extension(&self) -> &str {
        "lib"
    }

    fn dynamic_library_file_extension(&self) -> &str {
        "dll"
    }

    fn module_file_extension(&self) -> &str {
        "netmodule"
    }

    fn create_compile_operations(&self, arguments: &CompileArguments) -> Result<Vec<BuildOperation>> {
        arguments.validate()?;

        let mut operations = Vec::with_capacity(2);

        // Write the shared arguments to the response file
        let response_file = arguments.object_directory.join(RESPONSE_FILE_NAME);
        let shared_command_arguments = build_shared_compiler_arguments(arguments);
        let write_shared_arguments = write_file_operation(
            &arguments.target_root_directory,
            &response_file,
            &shared_command_arguments.join(" "),
        );
        operations.push(write_shared_arguments);

        let target_response_file = arguments.target_root_directory.join(&response_file);
        let symbol_file = arguments.target.with_extension(SYMBOL_FILE_EXTENSION);

        // Build up the input/output sets
        let mut input_files = Vec::with_capacity(
            1 + arguments.source_files.len()
                + arguments.reference_libraries.len()
                + arguments.module_references.len(),
        );
        input_files.push(target_response_file.clone());
        input_files.extend(arguments.source_files.iter().cloned());
        input_files.extend(arguments.reference_libraries.iter().cloned());
        input_files.extend(arguments.module_references.iter().cloned());

        let mut output_files = vec![
            arguments.target_root_directory.join(&arguments.target),
            arguments.target_root_directory.join(&symbol_file),
        ];

        match arguments.target_type {
            LinkTarget::Library | LinkTarget::Executable => {
                output_files.push(
                    arguments
                        .target_root_directory
                        .join(&arguments.reference_target),
                );
            }
            // Modules do not produce a reference assembly
            LinkTarget::Module => {}
        }

        debug!(
            artifact = %arguments.target.display(),
            response_file = %target_response_file.display(),
            inputs = input_files.len(),
            outputs = output_files.len(),
            "describing compile operations"
        );

        // Generate the compile build operation
        let unique_command_arguments = build_unique_compiler_arguments();
        let command_arguments = format!(
            "@{} {}",
            target_response_file.display(),
            unique_command_arguments.join(" ")
        );
        operations.push(BuildOperation::new(
            format!("Compile - {}", arguments.target.display()),
            &arguments.source_root_directory,
            &self.compiler_executable,
            command_arguments,
            input_files,
            output_files,
        ));

        Ok(operations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CompileError;
    use sharpen_build::ArgumentsError;

    fn arguments(target_type: LinkTarget) -> CompileArguments {
        CompileArguments {
            source_root_directory: PathBuf::from("/source"),
            target_root_directory: PathBuf::from("/target"),
            object_directory: PathBuf::from("obj"),
            source_files: vec![PathBuf::from("File.cs")],
            target_type,
            target: PathBuf::from("bin/Target.dll"),
            reference_target: match target_type {
                LinkTarget::Module => PathBuf::new(),
                _ => PathBuf::from("bin/ref/Target.dll"),
            },
            ..CompileArguments::default()
        }
    }

    #[test]
    fn test_compiler_metadata() {
        let compiler = RoslynCompiler::new("csc.exe");

        assert_eq!(compiler.name(), "Roslyn");
        assert_eq!(compiler.object_file_extension(), "obj");
        assert_eq!(compiler.static_library_file_extension(), "lib");
        assert_eq!(compiler.dynamic_library_file_extension(), "dll");
        assert_eq!(compiler.module_file_extension(), "netmodule");
        assert_eq!(compiler.compiler_executable(), Path::new("csc.exe"));
    }

    #[test]
    fn test_compile_operation_shape() {
        let compiler = RoslynCompiler::new("/dotnet/csc.exe");
        let operations = compiler
            .create_compile_operations(&arguments(LinkTarget::Library))
            .unwrap();

        assert_eq!(operations.len(), 2);

        let compile = &operations[1];
        assert_eq!(compile.title, "Compile - bin/Target.dll");
        assert_eq!(compile.working_directory, PathBuf::from("/source"));
        assert_eq!(compile.executable, PathBuf::from("/dotnet/csc.exe"));
        assert_eq!(
            compile.arguments,
            "@/target/obj/CompileArguments.rsp /noconfig"
        );
        assert_eq!(
            compile.inputs,
            vec![
                PathBuf::from("/target/obj/CompileArguments.rsp"),
                PathBuf::from("File.cs"),
            ]
        );
    }

    #[test]
    fn test_outputs_per_target_type() {
        let compiler = RoslynCompiler::new("csc.exe");

        for target_type in [LinkTarget::Library, LinkTarget::Executable] {
            let operations = compiler
                .create_compile_operations(&arguments(target_type))
                .unwrap();
            assert_eq!(
                operations[1].outputs,
                vec![
                    PathBuf::from("/target/bin/Target.dll"),
                    PathBuf::from("/target/bin/Target.pdb"),
                    PathBuf::from("/target/bin/ref/Target.dll"),
                ]
            );
        }

        let operations = compiler
            .create_compile_operations(&arguments(LinkTarget::Module))
            .unwrap();
        assert_eq!(
            operations[1].outputs,
            vec![
                PathBuf::from("/target/bin/Target.dll"),
                PathBuf::from("/target/bin/Target.pdb"),
            ]
        );
    }

    #[test]
    fn test_rejects_malformed_arguments() {
        let compiler = RoslynCompiler::new("csc.exe");
        let mut malformed = arguments(LinkTarget::Module);
        malformed.reference_target = PathBuf::from("bin/ref/Target.dll");

        let result = compiler.create_compile_operations(&malformed);

        assert!(matches!(
            result,
            Err(CompileError::InvalidArguments(
                ArgumentsError::ModuleReferenceTarget { .. }
            ))
        ));
    }
}
