//! Declarative build operations handed to the build engine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the build engine's built-in file writer.
pub const WRITE_FILE_EXECUTABLE: &str = "writefile";

/// A single unit of work with fully declared inputs and outputs.
///
/// The engine runs `executable arguments` in `working_directory` and uses
/// `inputs`/`outputs` to order operations and to decide when one is stale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildOperation {
    pub title: String,
    pub working_directory: PathBuf,
    pub executable: PathBuf,
    /// Pre-serialized argument string.
    pub arguments: String,
    pub inputs: Vec<PathBuf>,
    pub outputs: Vec<PathBuf>,
}

impl BuildOperation {
    pub fn new(
        title: impl Into<String>,
        working_directory: impl Into<PathBuf>,
        executable: impl Into<PathBuf>,
        arguments: impl Into<String>,
        inputs: Vec<PathBuf>,
        outputs: Vec<PathBuf>,
    ) -> Self {
        Self {
            title: title.into(),
            working_directory: working_directory.into(),
            executable: executable.into(),
            arguments: arguments.into(),
            inputs,
            outputs,
        }
    }
}

/// Create an operation that writes `content` to `path`.
///
/// `path` is resolved against `working_directory`, and the resolved path is
/// the operation's only declared output.
pub fn write_file_operation(working_directory: &Path, path: &Path, content: &str) -> BuildOperation {
    let destination = working_directory.join(path);
    let arguments = format!("\"{}\" \"{}\"", path.display(), content);

    BuildOperation::new(
        format!("Write File: {}", path.display()),
        working_directory,
        WRITE_FILE_EXECUTABLE,
        arguments,
        Vec::new(),
        vec![destination],
    )
}
