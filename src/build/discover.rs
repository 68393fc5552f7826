//! Discovery of record files under the source tree.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{BuildError, BuildResult};

/// Extension of record files.
pub const RECORD_EXTENSION: &str = "json";

/// Find every record file under `root`, recursively, sorted by path.
///
/// Sorting keeps entry order, and so the committed index, stable between runs.
pub fn find_records(root: &Path) -> BuildResult<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| BuildError::Discovery {
            path: root.to_path_buf(),
            source,
        })?;

        let is_record = entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext == RECORD_EXTENSION);

        if is_record {
            paths.push(entry.into_path());
        }
    }

    Ok(paths)
}
