//! Test record model for rustdoc-generated kernel doctests
//!
//! A record is the `{body, name}` pair persisted as JSON for the build
//! system to pick up, one file per doctest.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Directory the build system expects records in, relative to the
/// build tree root.
pub const TESTS_DIR: &str = "rust/test/doctests/kernel";

/// Prefix every derived test name carries.
pub const NAME_PREFIX: &str = "rust_kernel_doctest_";

/// One persisted doctest record.
///
/// Fields are declared in alphabetical order so the derived serializer
/// emits sorted keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    /// Full stub source text, after the `Result` qualification rewrite
    pub body: String,
    /// Canonical test name (`rust_kernel_doctest_<id>`)
    pub name: String,
}

impl TestRecord {
    #[must_use]
    pub fn new(name: String, body: String) -> Self {
        Self { body, name }
    }

    /// File name the record is persisted under (`<name>.json`)
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name)
    }

    /// Render the record as JSON with 4-space indentation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::Io` if serialization fails
    pub fn to_json(&self) -> Result<String, BuilderError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .map_err(|e| BuilderError::Io(e.into()))?;
        // Serializer output of two string fields is always valid UTF-8
        String::from_utf8(buf).map_err(|e| {
            BuilderError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    /// Write the record into `dir`, creating or overwriting
    /// `<dir>/<name>.json`
    ///
    /// The directory is expected to exist; a missing directory surfaces
    /// as an I/O error.
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::Io` if the file cannot be written
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, BuilderError> {
        let path = dir.join(self.file_name());
        let mut file = std::fs::File::create(&path)?;
        file.write_all(self.to_json()?.as_bytes())?;
        Ok(path)
    }
}

/// Error types for record extraction and persistence
#[derive(thiserror::Error, Debug)]
pub enum BuilderError {
    #[error("No test name found.")]
    NoTestName,

    #[error("More than one test name found.")]
    AmbiguousTestName { count: usize },

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
