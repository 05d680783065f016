//! Run-directory enumeration.

use crate::error::{RegistryError, Result};
use crate::record::StationRecord;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Enumerate a run directory and parse every station record in it.
///
/// Only direct entries that are regular files are considered (symlinks to
/// files count); subdirectories are skipped, not recursed into. Record order
/// follows the platform's directory listing and carries no meaning.
///
/// A file that fails to parse is skipped with a warning rather than failing
/// the scan: the run directory is written to concurrently by uncoordinated
/// station processes, so partially written or foreign files are expected.
/// The file is left in place for the next scan. An unlistable directory
/// propagates as [`RegistryError::Io`].
pub fn enumerate_run_directory(directory: &Path) -> Result<Vec<StationRecord>> {
    let entries =
        fs::read_dir(directory).map_err(|e| RegistryError::io_with_path(e, directory))?;

    let mut records = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| RegistryError::io_with_path(e, directory))?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        match StationRecord::from_file(&path) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!("Skipping unparsable record file {}: {}", path.display(), err);
            }
        }
    }

    Ok(records)
}
