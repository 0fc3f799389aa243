//! User-facing build arguments (sharpen.toml format).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optimization level requested for a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildOptimizationLevel {
    /// Debug.
    #[default]
    None,
    /// Optimize for runtime speed, may sacrifice size.
    Speed,
    /// Optimize for speed and size.
    Size,
}

/// Kind of artifact a build produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildTargetType {
    /// Executable assembly.
    #[default]
    Executable,
    /// Library assembly.
    Library,
}

/// Nullable reference type checking mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildNullableState {
    #[default]
    Enabled,
    Disabled,
    Annotations,
    Warnings,
}

/// The set of arguments a caller assembles for one build.
///
/// A plain carrier: nothing is validated until the arguments are mapped
/// onto compile arguments for a specific compiler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildArguments {
    /// Target name, used to name the produced assembly.
    #[serde(rename = "name")]
    pub target_name: String,

    /// Target architecture (e.g., "x64").
    #[serde(rename = "architecture")]
    pub target_architecture: String,

    /// Target type (executable, library).
    #[serde(rename = "type")]
    pub target_type: BuildTargetType,

    /// Source root directory.
    #[serde(rename = "source_root")]
    pub source_root_directory: PathBuf,

    /// Target root directory; object and binary directories are relative to it.
    #[serde(rename = "target_root")]
    pub target_root_directory: PathBuf,

    /// Output object directory.
    pub object_directory: PathBuf,

    /// Output binary directory.
    pub binary_directory: PathBuf,

    /// Source files, in compilation order.
    #[serde(rename = "sources")]
    pub source_files: Vec<PathBuf>,

    /// Assemblies to reference.
    pub link_dependencies: Vec<PathBuf>,

    /// Library search paths.
    pub library_paths: Vec<PathBuf>,

    /// Preprocessor symbols.
    #[serde(rename = "defines")]
    pub preprocessor_definitions: Vec<String>,

    /// Files that must sit next to the built assembly at runtime.
    pub runtime_dependencies: Vec<PathBuf>,

    pub optimization_level: BuildOptimizationLevel,

    /// Generate source debug information.
    #[serde(rename = "debug_info")]
    pub generate_source_debug_info: bool,

    #[serde(rename = "warnings_as_errors")]
    pub enable_warnings_as_errors: bool,

    #[serde(rename = "nullable")]
    pub nullable_state: BuildNullableState,

    pub disabled_warnings: Vec<String>,

    pub enabled_warnings: Vec<String>,

    /// Compiler-specific switches passed through verbatim.
    pub custom_properties: Vec<String>,
}

impl BuildArguments {
    /// Load build arguments from a TOML recipe file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse build arguments from a TOML string.
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let arguments: BuildArguments = toml::from_str(content)?;
        Ok(arguments)
    }

    /// Create arguments for an executable target.
    pub fn executable(name: &str) -> Self {
        Self {
            target_name: name.to_string(),
            target_type: BuildTargetType::Executable,
            ..Self::default()
        }
    }

    /// Create arguments for a library target.
    pub fn library(name: &str) -> Self {
        Self {
            target_type: BuildTargetType::Library,
            ..Self::executable(name)
        }
    }

    /// Set the source files.
    pub fn with_sources(mut self, sources: &[&str]) -> Self {
        self.source_files = sources.iter().map(PathBuf::from).collect();
        self
    }

    /// Set the referenced assemblies.
    pub fn with_link_dependencies(mut self, dependencies: &[&str]) -> Self {
        self.link_dependencies = dependencies.iter().map(PathBuf::from).collect();
        self
    }

    /// Set the source, target, object and binary directories.
    pub fn with_directories(
        mut self,
        source_root: impl AsRef<Path>,
        target_root: impl AsRef<Path>,
        object_directory: impl AsRef<Path>,
        binary_directory: impl AsRef<Path>,
    ) -> Self {
        self.source_root_directory = source_root.as_ref().to_path_buf();
        self.target_root_directory = target_root.as_ref().to_path_buf();
        self.object_directory = object_directory.as_ref().to_path_buf();
        self.binary_directory = binary_directory.as_ref().to_path_buf();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_recipe() {
        let toml = r#"
name = "Opal"
architecture = "x64"
type = "library"
source_root = "/repo/Opal"
target_root = "/repo/out/Opal"
object_directory = "obj"
binary_directory = "bin"
sources = ["Path.cs", "Utilities.cs"]
link_dependencies = ["/dotnet/ref/System.Runtime.dll"]
defines = ["DEBUG", "TRACE"]
optimization_level = "speed"
debug_info = true
warnings_as_errors = true
nullable = "annotations"
disabled_warnings = ["1591"]
        "#;

        let arguments = BuildArguments::from_toml_str(toml).unwrap();

        assert_eq!(arguments.target_name, "Opal");
        assert_eq!(arguments.target_architecture, "x64");
        assert_eq!(arguments.target_type, BuildTargetType::Library);
        assert_eq!(arguments.object_directory, PathBuf::from("obj"));
        assert_eq!(
            arguments.source_files,
            vec![PathBuf::from("Path.cs"), PathBuf::from("Utilities.cs")]
        );
        assert_eq!(arguments.preprocessor_definitions, vec!["DEBUG", "TRACE"]);
        assert_eq!(arguments.optimization_level, BuildOptimizationLevel::Speed);
        assert!(arguments.generate_source_debug_info);
        assert!(arguments.enable_warnings_as_errors);
        assert_eq!(arguments.nullable_state, BuildNullableState::Annotations);
        assert_eq!(arguments.disabled_warnings, vec!["1591"]);
        assert!(arguments.enabled_warnings.is_empty());
        assert!(arguments.runtime_dependencies.is_empty());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let arguments = BuildArguments::from_toml_str(r#"name = "App""#).unwrap();

        assert_eq!(arguments.target_type, BuildTargetType::Executable);
        assert_eq!(arguments.optimization_level, BuildOptimizationLevel::None);
        assert_eq!(arguments.nullable_state, BuildNullableState::Enabled);
        assert!(arguments.source_files.is_empty());
        assert!(!arguments.generate_source_debug_info);
    }

    #[test]
    fn test_unknown_target_type_is_rejected() {
        let result = BuildArguments::from_toml_str(r#"type = "shared_library""#);
        assert!(matches!(result, Err(crate::BuildError::ParseToml(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "name = \"Tool\"\ntype = \"executable\"\nsources = [\"Program.cs\"]").unwrap();

        let arguments = BuildArguments::from_file(file.path()).unwrap();

        assert_eq!(arguments, BuildArguments::executable("Tool").with_sources(&["Program.cs"]));
    }

    #[test]
    fn test_from_missing_file() {
        let result = BuildArguments::from_file(Path::new("/nonexistent/sharpen.toml"));
        assert!(matches!(result, Err(crate::BuildError::ReadRecipe(_))));
    }

    #[test]
    fn test_library_builder() {
        let arguments = BuildArguments::library("Opal")
            .with_sources(&["A.cs"])
            .with_link_dependencies(&["System.dll"])
            .with_directories("src", "out", "obj", "bin");

        assert_eq!(arguments.target_type, BuildTargetType::Library);
        assert_eq!(arguments.target_name, "Opal");
        assert_eq!(arguments.link_dependencies, vec![PathBuf::from("System.dll")]);
        assert_eq!(arguments.binary_directory, PathBuf::from("bin"));
    }
}
