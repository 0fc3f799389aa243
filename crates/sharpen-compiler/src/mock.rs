//! A compiler backend that records requests, for testing callers.

use crate::compiler::Compiler;
use crate::operation::BuildOperation;
use crate::Result;
use sharpen_build::CompileArguments;
use std::sync::{Mutex, PoisonError};

/// Mock compiler.
///
/// Every accepted request is recorded, and answered with a single operation
/// numbered after the request.
#[derive(Debug, Default)]
pub struct MockCompiler {
    requests: Mutex<Vec<CompileArguments>>,
}

impl MockCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The compile requests received so far, oldest first.
    pub fn requests(&self) -> Vec<CompileArguments> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Compiler for MockCompiler {
    fn name(&self) -> &str {
        "MockCompiler"
    }

    fn object_file_extension(&self) -> &str {
        "mock.obj"
    }

    fn static_library_file_extension(&self) -> &str {
        "mock.lib"
    }

    fn dynamic_library_file_extension(&self) -> &str {
        "mock.dll"
    }

    fn module_file_extension(&self) -> &str {
        "mock.netmodule"
    }

    fn create_compile_operations(&self, arguments: &CompileArguments) -> Result<Vec<BuildOperation>> {
        arguments.validate()?;

        let mut requests = self.requests.lock().unwrap_or_else(PoisonError::into_inner);
        requests.push(arguments.clone());

        Ok(vec![BuildOperation::new(
            format!("MockCompile: {}", requests.len()),
            "MockWorkingDirectory",
            "MockCompiler.exe",
            "Arguments",
            arguments.source_files.clone(),
            vec![arguments.target.clone()],
        )])
    }
}
