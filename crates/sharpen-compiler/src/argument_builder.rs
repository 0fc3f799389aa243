//! Serialization of compile arguments into Roslyn (`csc`) switches.
//!
//! Everything that varies between compilations goes into the shared set,
//! which is staged into a response file. The unique set never varies.

use sharpen_build::{CompileArguments, LinkTarget, NullableState};

/// Build the switches that describe one compilation, in a fixed order.
pub fn build_shared_compiler_arguments(arguments: &CompileArguments) -> Vec<String> {
    let mut command_arguments = Vec::new();

    // Language and host behavior
    command_arguments.push("/unsafe-".to_string());
    command_arguments.push("/checked-".to_string());
    command_arguments.push("/fullpaths".to_string());
    command_arguments.push("/nostdlib+".to_string());
    command_arguments.push("/errorreport:prompt".to_string());
    command_arguments.push("/warn:5".to_string());

    if !arguments.preprocessor_definitions.is_empty() {
        command_arguments.push(format!(
            "/define:{}",
            arguments.preprocessor_definitions.join(";")
        ));
    }

    command_arguments.push("/errorendlocation".to_string());
    command_arguments.push("/preferreduilang:en-US".to_string());
    command_arguments.push("/highentropyva+".to_string());

    let nullable = match arguments.nullable_state {
        NullableState::Enabled => "enable",
        NullableState::Disabled => "disable",
        NullableState::Annotations => "annotations",
        NullableState::Warnings => "warnings",
    };
    command_arguments.push(format!("/nullable:{nullable}"));

    if !arguments.disabled_warnings.is_empty() {
        command_arguments.push(format!("/nowarn:{}", arguments.disabled_warnings.join(",")));
    }

    if arguments.enable_warnings_as_errors {
        command_arguments.push("/warnaserror+".to_string());
    } else {
        command_arguments.push("/warnaserror-".to_string());
    }

    if arguments.generate_source_debug_info {
        command_arguments.push("/debug+".to_string());
        command_arguments.push("/debug:portable".to_string());
    } else {
        command_arguments.push("/debug-".to_string());
    }

    command_arguments.push("/filealign:512".to_string());

    if arguments.enable_optimizations {
        command_arguments.push("/optimize+".to_string());
    } else {
        command_arguments.push("/optimize-".to_string());
    }

    // Outputs
    let target = arguments.target_root_directory.join(&arguments.target);
    command_arguments.push(format!("/out:\"{}\"", target.display()));

    let target_type = match arguments.target_type {
        LinkTarget::Library => "library",
        LinkTarget::Executable => "exe",
        LinkTarget::Module => "module",
    };
    if arguments.target_type != LinkTarget::Module {
        let reference_target = arguments
            .target_root_directory
            .join(&arguments.reference_target);
        command_arguments.push(format!("/refout:\"{}\"", reference_target.display()));
    }
    command_arguments.push(format!("/target:{target_type}"));

    command_arguments.push("/utf8output".to_string());
    command_arguments.push("/deterministic+".to_string());
    command_arguments.push("/langversion:9.0".to_string());

    // Inputs
    for reference in &arguments.reference_libraries {
        command_arguments.push(format!("/reference:\"{}\"", reference.display()));
    }

    for module in &arguments.module_references {
        command_arguments.push(format!("/addmodule:\"{}\"", module.display()));
    }

    command_arguments.extend(arguments.custom_properties.iter().cloned());

    for source in &arguments.source_files {
        command_arguments.push(format!("\"{}\"", source.display()));
    }

    command_arguments
}

/// Build the switches passed on the command line next to the response file.
pub fn build_unique_compiler_arguments() -> Vec<String> {
    // Keep csc from reading its default csc.rsp.
    vec!["/noconfig".to_string()]
}
