//! Resolution of user build arguments into compile arguments.

use crate::compiler::Compiler;
use crate::Result;
use sharpen_build::{
    BuildArguments, BuildError, BuildNullableState, BuildOptimizationLevel, BuildTargetType,
    CompileArguments, LinkTarget, NullableState,
};
use tracing::debug;

/// Resolve `arguments` into the compile arguments `compiler` is invoked with.
///
/// Both libraries and executables are emitted as dynamic libraries into the
/// binary directory, with the reference assembly under `ref/`.
pub fn map_build_arguments<C: Compiler + ?Sized>(
    arguments: &BuildArguments,
    compiler: &C,
) -> Result<CompileArguments> {
    if arguments.target_name.is_empty() {
        return Err(BuildError::Validation("target name is empty".to_string()).into());
    }

    let file_name = format!(
        "{}.{}",
        arguments.target_name,
        compiler.dynamic_library_file_extension()
    );
    let target = arguments.binary_directory.join(&file_name);
    let reference_target = arguments.binary_directory.join("ref").join(&file_name);

    let target_type = match arguments.target_type {
        BuildTargetType::Library => LinkTarget::Library,
        BuildTargetType::Executable => LinkTarget::Executable,
    };

    let nullable_state = match arguments.nullable_state {
        BuildNullableState::Enabled => NullableState::Enabled,
        BuildNullableState::Disabled => NullableState::Disabled,
        BuildNullableState::Annotations => NullableState::Annotations,
        BuildNullableState::Warnings => NullableState::Warnings,
    };

    debug!(
        name = %arguments.target_name,
        compiler = compiler.name(),
        artifact = %target.display(),
        "resolved compile target"
    );

    Ok(CompileArguments {
        source_root_directory: arguments.source_root_directory.clone(),
        target_root_directory: arguments.target_root_directory.clone(),
        object_directory: arguments.object_directory.clone(),
        preprocessor_definitions: arguments.preprocessor_definitions.clone(),
        reference_libraries: arguments.link_dependencies.clone(),
        module_references: Vec::new(),
        source_files: arguments.source_files.clone(),
        enable_optimizations: arguments.optimization_level != BuildOptimizationLevel::None,
        generate_source_debug_info: arguments.generate_source_debug_info,
        target_type,
        target,
        reference_target,
        enable_warnings_as_errors: arguments.enable_warnings_as_errors,
        disabled_warnings: arguments.disabled_warnings.clone(),
        enabled_warnings: arguments.enabled_warnings.clone(),
        nullable_state,
        custom_properties: arguments.custom_properties.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CompileError, MockCompiler, RoslynCompiler};
    use std::path::PathBuf;

    #[test]
    fn test_map_library() {
        let mut arguments = BuildArguments::library("Opal")
            .with_sources(&["Path.cs", "Utilities.cs"])
            .with_link_dependencies(&["/dotnet/ref/System.Runtime.dll"])
            .with_directories("/repo/Opal", "/repo/out/Opal", "obj", "bin");
        arguments.optimization_level = BuildOptimizationLevel::Size;
        arguments.nullable_state = BuildNullableState::Annotations;
        arguments.preprocessor_definitions = vec!["RELEASE".to_string()];

        let compile = map_build_arguments(&arguments, &RoslynCompiler::new("csc.exe")).unwrap();

        assert_eq!(compile.target_type, LinkTarget::Library);
        assert_eq!(compile.target, PathBuf::from("bin/Opal.dll"));
        assert_eq!(compile.reference_target, PathBuf::from("bin/ref/Opal.dll"));
        assert_eq!(compile.object_directory, PathBuf::from("obj"));
        assert_eq!(compile.source_root_directory, PathBuf::from("/repo/Opal"));
        assert_eq!(
            compile.reference_libraries,
            vec![PathBuf::from("/dotnet/ref/System.Runtime.dll")]
        );
        assert!(compile.enable_optimizations);
        assert_eq!(compile.nullable_state, NullableState::Annotations);
        assert_eq!(compile.preprocessor_definitions, vec!["RELEASE"]);
        assert_eq!(compile.validate(), Ok(()));
    }

    #[test]
    fn test_map_executable_uses_compiler_extension() {
        let arguments = BuildArguments::executable("Tool")
            .with_sources(&["Program.cs"])
            .with_directories("/src", "/out", "obj", "bin");

        let compile = map_build_arguments(&arguments, &MockCompiler::new()).unwrap();

        assert_eq!(compile.target_type, LinkTarget::Executable);
        assert_eq!(compile.target, PathBuf::from("bin/Tool.mock.dll"));
        assert_eq!(compile.reference_target, PathBuf::from("bin/ref/Tool.mock.dll"));
        assert!(!compile.enable_optimizations);
    }

    #[test]
    fn test_map_rejects_empty_name() {
        let result = map_build_arguments(&BuildArguments::default(), &MockCompiler::new());

        assert!(matches!(
            result,
            Err(CompileError::Build(BuildError::Validation(_)))
        ));
    }
}
