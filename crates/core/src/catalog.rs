use crate::classify::{classify, relative_path};
use crate::error::Result;
use crate::scanner::scan;
use asset_viewer_api::AssetRecord;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// Scan and classify entry point for one base directory.
///
/// Holds no results: every call walks the directory again, so the listing
/// always reflects what is on disk right now.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    base_dir: PathBuf,
}

impl AssetCatalog {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// All model and texture records, sorted by file name.
    pub fn list(&self) -> Result<Vec<AssetRecord>> {
        Ok(self.list_with_summary()?.0)
    }

    pub fn list_with_summary(&self) -> Result<(Vec<AssetRecord>, ScanSummary)> {
        let start = Instant::now();
        let files = scan(&self.base_dir)?;
        let total_files = files.len();
        let records = classify(&files, &self.base_dir);

        let summary = ScanSummary {
            total_files,
            assets: records.len(),
            skipped_files: total_files - records.len(),
            duration: start.elapsed(),
        };
        info!(
            "Asset scan complete: {} files, {} assets, {} skipped in {:?}",
            summary.total_files, summary.assets, summary.skipped_files, summary.duration
        );

        Ok((records, summary))
    }

    /// Every file under the base directory as a `/`-separated relative path,
    /// regardless of type.
    pub fn list_relative_paths(&self) -> Result<Vec<String>> {
        let files = scan(&self.base_dir)?;
        Ok(files
            .iter()
            .filter_map(|path| relative_path(path, &self.base_dir))
            .collect())
    }
}

/// Counters from one catalog scan
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub total_files: usize,
    pub assets: usize,
    /// Files present on disk but not previewable
    pub skipped_files: usize,
    pub duration: Duration,
}
