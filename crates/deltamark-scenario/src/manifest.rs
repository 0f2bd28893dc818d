//! Input manifest: a small CSV listing the MTM source files.

use std::path::{Path, PathBuf};

use crate::error::{ScenarioError, ScenarioResult};

/// The column of the manifest holding source file paths.
const FILE_COLUMN: &str = "File";

/// A manifest of MTM source files.
///
/// The manifest is itself a CSV with a header containing a `File` column,
/// one source path per row. Relative paths resolve against the manifest's
/// own directory, so a manifest can ship next to its data.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    files: Vec<PathBuf>,
}

impl Manifest {
    /// Builds a manifest directly from a list of paths.
    #[must_use]
    pub fn from_files(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    /// Loads a manifest from a CSV file.
    ///
    /// # Errors
    ///
    /// [`ScenarioError::MissingInput`] when the manifest itself does not
    /// exist, [`ScenarioError::Schema`] when it lacks the `File` column.
    pub fn load(path: impl AsRef<Path>) -> ScenarioResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ScenarioError::MissingInput {
                path: path.display().to_string(),
            });
        }

        let mut reader = csv::Reader::from_path(path)?;
        let column = reader
            .headers()?
            .iter()
            .position(|h| h.trim() == FILE_COLUMN)
            .ok_or_else(|| ScenarioError::Schema {
                path: path.display().to_string(),
                column: FILE_COLUMN,
            })?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let mut files = Vec::new();
        for record in reader.records() {
            let record = record?;
            let value = record.get(column).unwrap_or("").trim();
            if value.is_empty() {
                continue;
            }

            let file = PathBuf::from(value);
            files.push(if file.is_absolute() {
                file
            } else {
                base.join(file)
            });
        }

        Ok(Self { files })
    }

    /// Returns the configured source files.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Returns true when the manifest lists no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
