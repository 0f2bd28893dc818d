//! The one-shot scenario PnL batch run.

use std::path::{Path, PathBuf};

use deltamark_core::Date;

use crate::error::ScenarioResult;
use crate::loader;
use crate::manifest::Manifest;
use crate::pnl::compute_pnl;
use crate::records::PnlRecord;

/// Configuration of a scenario PnL run: the manifest of source files and
/// the externally supplied baseline date.
///
/// The baseline date is a collaborator input; it is never derived from
/// the data.
#[derive(Debug, Clone)]
pub struct ScenarioRun {
    manifest_path: PathBuf,
    baseline_date: Date,
}

impl ScenarioRun {
    /// Creates a run over the given manifest and baseline date.
    #[must_use]
    pub fn new(manifest_path: impl AsRef<Path>, baseline_date: Date) -> Self {
        Self {
            manifest_path: manifest_path.as_ref().to_path_buf(),
            baseline_date,
        }
    }

    /// Returns the baseline date.
    #[must_use]
    pub fn baseline_date(&self) -> Date {
        self.baseline_date
    }

    /// Executes the batch: load the manifest, read every source file to
    /// completion, then compute the PnL join. Any failure aborts the run
    /// with no partial output.
    pub fn run(&self) -> ScenarioResult<Vec<PnlRecord>> {
        let manifest = Manifest::load(&self.manifest_path)?;
        let records = loader::load_all(&manifest)?;
        log::debug!(
            "{} MTM records from {} files, baseline {}",
            records.len(),
            manifest.files().len(),
            self.baseline_date
        );
        compute_pnl(&records, self.baseline_date)
    }
}
