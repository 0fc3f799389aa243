//! Compiler-facing compile arguments.
//!
//! `CompileArguments` is the fully resolved description of one compilation.
//! It is also the key an incremental build engine uses to decide whether a
//! previously computed operation graph is still valid, so equality is
//! structural and sensitive to the order of every list.

use crate::error::ArgumentsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Kind of artifact the compiler links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    /// Dynamic library.
    #[default]
    Library,
    /// Executable.
    Executable,
    /// Intermediate module; has no reference assembly.
    Module,
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LinkTarget::Library => "Library",
            LinkTarget::Executable => "Executable",
            LinkTarget::Module => "Module",
        };
        f.write_str(name)
    }
}

/// Nullable reference type checking mode passed to the compiler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullableState {
    #[default]
    Enabled,
    Disabled,
    Annotations,
    Warnings,
}

impl fmt::Display for NullableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NullableState::Enabled => "Enabled",
            NullableState::Disabled => "Disabled",
            NullableState::Annotations => "Annotations",
            NullableState::Warnings => "Warnings",
        };
        f.write_str(name)
    }
}

/// The resolved arguments for a single compilation.
///
/// All paths except the root directories are relative to
/// `target_root_directory` unless they are absolute.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompileArguments {
    pub source_root_directory: PathBuf,
    pub target_root_directory: PathBuf,
    pub object_directory: PathBuf,
    pub preprocessor_definitions: Vec<String>,
    /// Assemblies referenced by the compilation.
    pub reference_libraries: Vec<PathBuf>,
    /// Intermediate modules linked into the compilation.
    pub module_references: Vec<PathBuf>,
    pub source_files: Vec<PathBuf>,
    pub enable_optimizations: bool,
    pub generate_source_debug_info: bool,
    pub target_type: LinkTarget,
    /// The main artifact.
    pub target: PathBuf,
    /// The reference assembly produced next to the target. Empty for modules.
    pub reference_target: PathBuf,
    pub enable_warnings_as_errors: bool,
    pub disabled_warnings: Vec<String>,
    pub enabled_warnings: Vec<String>,
    pub nullable_state: NullableState,
    /// Compiler-specific switches passed through verbatim.
    pub custom_properties: Vec<String>,
}

impl CompileArguments {
    /// Check the invariants every compiler relies on before describing any work.
    pub fn validate(&self) -> Result<(), ArgumentsError> {
        if is_empty(&self.target) {
            return Err(ArgumentsError::MissingTarget);
        }

        if is_empty(&self.object_directory) {
            return Err(ArgumentsError::MissingObjectDirectory);
        }

        match self.target_type {
            LinkTarget::Module => {
                if !is_empty(&self.reference_target) {
                    return Err(ArgumentsError::ModuleReferenceTarget {
                        target: self.target.display().to_string(),
                        reference_target: self.reference_target.display().to_string(),
                    });
                }
            }
            LinkTarget::Library | LinkTarget::Executable => {
                if is_empty(&self.reference_target) {
                    return Err(ArgumentsError::MissingReferenceTarget {
                        target: self.target.display().to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

fn is_empty(path: &Path) -> bool {
    path.as_os_str().is_empty()
}

// `Path` equality normalizes (`bin/./a` == `bin/a`, `obj/` == `obj`), but
// operations are built from the literal text, so compare that instead.
fn same_path(lhs: &Path, rhs: &Path) -> bool {
    lhs.as_os_str() == rhs.as_os_str()
}

fn same_paths(lhs: &[PathBuf], rhs: &[PathBuf]) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(l, r)| same_path(l, r))
}

impl PartialEq for CompileArguments {
    fn eq(&self, rhs: &Self) -> bool {
        // Common success case.
        if std::ptr::eq(self, rhs) {
            return true;
        }

        same_path(&self.source_root_directory, &rhs.source_root_directory)
            && same_path(&self.target_root_directory, &rhs.target_root_directory)
            && same_path(&self.object_directory, &rhs.object_directory)
            && self.preprocessor_definitions == rhs.preprocessor_definitions
            && same_paths(&self.reference_libraries, &rhs.reference_libraries)
            && same_paths(&self.module_references, &rhs.module_references)
            && same_paths(&self.source_files, &rhs.source_files)
            && self.enable_optimizations == rhs.enable_optimizations
            && self.generate_source_debug_info == rhs.generate_source_debug_info
            && self.target_type == rhs.target_type
            && same_path(&self.target, &rhs.target)
            && same_path(&self.reference_target, &rhs.reference_target)
            && self.enable_warnings_as_errors == rhs.enable_warnings_as_errors
            && self.disabled_warnings == rhs.disabled_warnings
            && self.enabled_warnings == rhs.enabled_warnings
            && self.nullable_state == rhs.nullable_state
            && self.custom_properties == rhs.custom_properties
    }
}

impl Eq for CompileArguments {}

/// Hashes only the identifying directories and target. Equal arguments
/// always share these, so the hash stays consistent with `Eq`.
impl Hash for CompileArguments {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source_root_directory.as_os_str().hash(state);
        self.target_root_directory.as_os_str().hash(state);
        self.object_directory.as_os_str().hash(state);
        self.target.as_os_str().hash(state);
    }
}

struct JoinPaths<'a>(&'a [PathBuf]);

impl fmt::Display for JoinPaths<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, path) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", path.display())?;
        }
        Ok(())
    }
}

impl fmt::Display for CompileArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CompileArguments {{ source_root_directory: \"{}\", target_root_directory: \"{}\", object_directory: \"{}\", ",
            self.source_root_directory.display(),
            self.target_root_directory.display(),
            self.object_directory.display(),
        )?;
        write!(
            f,
            "preprocessor_definitions: [{}], reference_libraries: [{}], module_references: [{}], source_files: [{}], ",
            self.preprocessor_definitions.join(","),
            JoinPaths(&self.reference_libraries),
            JoinPaths(&self.module_references),
            JoinPaths(&self.source_files),
        )?;
        write!(
            f,
            "enable_optimizations: {}, generate_source_debug_info: {}, target_type: {}, target: \"{}\", reference_target: \"{}\", ",
            self.enable_optimizations,
            self.generate_source_debug_info,
            self.target_type,
            self.target.display(),
            self.reference_target.display(),
        )?;
        write!(
            f,
            "enable_warnings_as_errors: {}, disabled_warnings: [{}], enabled_warnings: [{}], nullable_state: {}, custom_properties: [{}] }}",
            self.enable_warnings_as_errors,
            self.disabled_warnings.join(","),
            self.enabled_warnings.join(","),
            self.nullable_state,
            self.custom_properties.join(","),
        )
    }
}
