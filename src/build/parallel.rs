// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel record loading and collision scanning.
//!
//! Reading and parsing JSON files is independent per file, and the collision
//! scan only unions sets, so both fan out over rayon. Everything after the
//! scan (entry building, disambiguation, writing) depends on the complete
//! map and stays sequential in `run_build`.
//!
//! `par_iter().collect()` keeps input order, so loaded records come back in
//! discovery order whichever thread parsed them.

use std::path::PathBuf;

#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{load_record, CollisionMap, LoadedRecord};
use crate::error::BuildResult;

/// Load every record file, failing on the first unreadable or malformed one.
#[cfg(feature = "parallel")]
pub fn load_records(paths: &[PathBuf]) -> BuildResult<Vec<LoadedRecord>> {
    paths.par_iter().map(|path| load_record(path)).collect()
}

#[cfg(not(feature = "parallel"))]
pub fn load_records(paths: &[PathBuf]) -> BuildResult<Vec<LoadedRecord>> {
    paths.iter().map(|path| load_record(path)).collect()
}

/// Load every record file with progress reporting.
#[cfg(feature = "parallel")]
pub fn load_records_with_progress(
    paths: &[PathBuf],
    progress: &ProgressBar,
) -> BuildResult<Vec<LoadedRecord>> {
    let counter = AtomicUsize::new(0);
    let total = paths.len();

    paths
        .par_iter()
        .map(|path| {
            let record = load_record(path)?;

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count.is_multiple_of(100) || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            Ok(record)
        })
        .collect()
}

/// Load every record file with progress reporting.
/// Non-parallel fallback (no-op progress).
#[cfg(not(feature = "parallel"))]
pub fn load_records_with_progress(paths: &[PathBuf]) -> BuildResult<Vec<LoadedRecord>> {
    load_records(paths)
}

/// Collision scan with per-thread partial maps merged pairwise.
#[cfg(feature = "parallel")]
pub fn scan_collisions_parallel(records: &[LoadedRecord]) -> CollisionMap {
    records
        .par_iter()
        .fold(CollisionMap::new, |mut map, loaded| {
            map.add_record(loaded);
            map
        })
        .reduce(CollisionMap::new, CollisionMap::merge)
}

#[cfg(not(feature = "parallel"))]
pub fn scan_collisions_parallel(records: &[LoadedRecord]) -> CollisionMap {
    super::scan_collisions(records)
}
