//! Index construction pipeline.
//!
//! ```text
//! recreate index ─▶ discover + load ─▶ scan collisions ─▶ build entries
//!                                                             │
//!                         commit ◀─ write entries ◀─ disambiguate
//! ```
//!
//! Disambiguation needs to know every lemma behind every word before a single
//! entry can be finalized, so the corpus is traversed twice: once to build the
//! [`CollisionMap`], once to flatten records into [`Entry`] values. Both
//! intermediate structures are owned here and handed to each stage.

pub mod collisions;
pub mod disambiguate;
pub mod discover;
pub mod entries;
pub mod parallel;
pub mod record;

use std::fmt;
use std::path::PathBuf;

#[cfg(feature = "parallel")]
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::error::BuildResult;
use crate::index::{IndexTarget, VerbIndex};

pub use collisions::*;
pub use disambiguate::*;
pub use discover::*;
pub use entries::*;
pub use parallel::*;
pub use record::*;

/// Where the index lives unless told otherwise.
pub const DEFAULT_INDEX_DIR: &str = "data/indexdir";

/// Inputs for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    /// Root of the record tree, searched recursively for `*.json`.
    pub json_dir: PathBuf,
    pub target: IndexTarget,
}

impl BuildConfig {
    /// Read `json_dir`, write to the default on-disk location.
    pub fn new(json_dir: impl Into<PathBuf>) -> Self {
        Self {
            json_dir: json_dir.into(),
            target: IndexTarget::Directory(PathBuf::from(DEFAULT_INDEX_DIR)),
        }
    }

    pub fn with_target(mut self, target: IndexTarget) -> Self {
        self.target = target;
        self
    }
}

/// Run progress. Stages only move forward; an error ends the run where it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Uninitialized,
    SchemaCreated,
    Scanning,
    Building,
    Disambiguating,
    Committing,
    Done,
}

/// Counts reported at the end of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Record files processed.
    pub files: usize,
    /// Entries committed (distinct words per record, summed).
    pub entries: usize,
    /// Distinct words shared by several lemmas and rewritten.
    pub collisions: usize,
}

impl fmt::Display for BuildSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {} files, indexed {} variants, disambiguated {} duplicated forms",
            self.files, self.entries, self.collisions
        )
    }
}

/// Result of a successful run: the counts and the committed index.
pub struct BuildOutput {
    pub summary: BuildSummary,
    pub index: VerbIndex,
}

struct Progress {
    stage: Stage,
}

impl Progress {
    fn advance(&mut self, next: Stage) {
        debug_assert!(next > self.stage, "{:?} -> {:?}", self.stage, next);
        debug!(from = ?self.stage, to = ?next, "stage");
        self.stage = next;
    }
}

/// Create a progress style for the main progress bars
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .map(|style| style.progress_chars("━━╸"))
    .unwrap_or_else(|_| ProgressStyle::default_bar())
}

#[cfg(feature = "parallel")]
fn stage_bar(
    multi: &MultiProgress,
    len: usize,
    prefix: &'static str,
    msg: &'static str,
) -> ProgressBar {
    let pb = multi.add(ProgressBar::new(len as u64));
    pb.set_style(create_progress_style());
    pb.set_prefix(prefix);
    pb.set_message(msg);
    pb
}

/// Rebuild the verb index from scratch.
///
/// Destroys whatever index exists at the target, then scans, builds,
/// disambiguates and commits once. Any error aborts before the commit.
pub fn run_build(config: &BuildConfig) -> BuildResult<BuildOutput> {
    let mut progress = Progress {
        stage: Stage::Uninitialized,
    };

    #[cfg(feature = "parallel")]
    let multi = MultiProgress::new();

    // 1. Fresh index
    let index = config.target.create()?;
    progress.advance(Stage::SchemaCreated);

    // 2. First pass: load everything and map words to lemmas
    progress.advance(Stage::Scanning);
    let paths = find_records(&config.json_dir)?;
    if paths.is_empty() {
        warn!(dir = %config.json_dir.display(), "no record files found");
        eprintln!("⚠️  No record files under {}", config.json_dir.display());
    }

    #[cfg(feature = "parallel")]
    let load_pb = stage_bar(&multi, paths.len(), "Loading", "records...");

    #[cfg(feature = "parallel")]
    let records = load_records_with_progress(&paths, &load_pb)?;
    #[cfg(not(feature = "parallel"))]
    let records = load_records_with_progress(&paths)?;

    #[cfg(feature = "parallel")]
    load_pb.finish_with_message(format!("loaded {} records", records.len()));

    let collisions = scan_collisions_parallel(&records);
    info!(
        words = collisions.len(),
        collisions = collisions.collisions().len(),
        "collision scan complete"
    );

    // 3. Second pass: flatten paradigms, per-record dedup
    progress.advance(Stage::Building);

    #[cfg(feature = "parallel")]
    let build_pb = stage_bar(&multi, records.len(), "Building", "entries...");

    let mut entries: Vec<Entry> = Vec::new();
    let mut indexed = 0;
    for loaded in &records {
        indexed += build_entries(loaded, &mut entries).len();

        #[cfg(feature = "parallel")]
        build_pb.inc(1);
    }

    #[cfg(feature = "parallel")]
    build_pb.finish_with_message(format!("built {} entries", entries.len()));

    // 4. Qualify words shared by several lemmas
    progress.advance(Stage::Disambiguating);
    let resolved = disambiguate(&mut entries, &collisions);

    // 5. Write and commit once
    progress.advance(Stage::Committing);

    #[cfg(feature = "parallel")]
    let write_pb = stage_bar(&multi, entries.len(), "Writing", "documents...");

    let mut writer = index.writer()?;
    for entry in &entries {
        writer.write_entry(entry)?;

        #[cfg(feature = "parallel")]
        write_pb.inc(1);
    }
    let committed = writer.commit()?;

    #[cfg(feature = "parallel")]
    write_pb.finish_with_message("committed");

    progress.advance(Stage::Done);
    debug_assert_eq!(committed, indexed);

    let summary = BuildSummary {
        files: paths.len(),
        entries: committed,
        collisions: resolved,
    };
    eprintln!("{}", summary);

    Ok(BuildOutput { summary, index })
}
