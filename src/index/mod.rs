// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Persisted verb index: destructive recreate, bulk add, single commit.
//!
//! Each run throws away whatever sits at the target directory and starts from
//! an empty schema. Entries are added through one [`EntryWriter`] and become
//! visible only when [`EntryWriter::commit`] succeeds; dropping the writer
//! before that discards everything added.

pub mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use tantivy::collector::DocSetCollector;
use tantivy::query::AllQuery;
use tantivy::schema::Value;
use tantivy::{Index, IndexWriter, TantivyDocument};
use tracing::debug;

use crate::build::Entry;
use crate::error::{BuildError, BuildResult};
use crate::letter::letter_key;

pub use schema::{build_schema, register_analyzer, VerbFields};

/// Writer heap budget. One indexing thread keeps document order stable.
const WRITER_HEAP_BYTES: usize = 50_000_000;

/// A document as read back from a committed index.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct IndexedEntry {
    pub verb_form: String,
    pub file_path: String,
    pub index_letter: Option<String>,
}

pub struct VerbIndex {
    index: Index,
    fields: VerbFields,
}

impl VerbIndex {
    /// Delete any storage at `dir` and create an empty index there.
    pub fn recreate(dir: &Path) -> BuildResult<Self> {
        let conflict = |reason: String| BuildError::StorageConflict {
            path: dir.to_path_buf(),
            reason,
        };

        if dir.exists() {
            debug!(dir = %dir.display(), "removing existing index");
            fs::remove_dir_all(dir).map_err(|e| conflict(e.to_string()))?;
        }
        fs::create_dir_all(dir).map_err(|e| conflict(e.to_string()))?;

        let index =
            Index::create_in_dir(dir, build_schema()).map_err(|e| conflict(e.to_string()))?;
        Self::from_index(index)
    }

    /// Empty in-memory index with the same schema.
    pub fn in_ram() -> BuildResult<Self> {
        Self::from_index(Index::create_in_ram(build_schema()))
    }

    /// Open an index previously committed at `dir`.
    pub fn open(dir: &Path) -> BuildResult<Self> {
        Self::from_index(Index::open_in_dir(dir)?)
    }

    fn from_index(index: Index) -> BuildResult<Self> {
        register_analyzer(&index)?;
        let fields = VerbFields::from_schema(&index.schema())?;
        Ok(Self { index, fields })
    }

    pub fn writer(&self) -> BuildResult<EntryWriter> {
        let writer = self.index.writer_with_num_threads(1, WRITER_HEAP_BYTES)?;
        Ok(EntryWriter {
            writer,
            fields: self.fields,
            written: 0,
        })
    }

    /// Every committed document, sorted by verb form then file path.
    pub fn committed_entries(&self) -> BuildResult<Vec<IndexedEntry>> {
        let reader = self.index.reader()?;
        let searcher = reader.searcher();
        let addresses = searcher.search(&AllQuery, &DocSetCollector)?;

        let text = |doc: &TantivyDocument, field| {
            doc.get_first(field)
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        let mut entries = Vec::with_capacity(addresses.len());
        for address in addresses {
            let doc: TantivyDocument = searcher.doc(address)?;
            entries.push(IndexedEntry {
                verb_form: text(&doc, self.fields.verb_form).unwrap_or_default(),
                file_path: text(&doc, self.fields.file_path).unwrap_or_default(),
                index_letter: text(&doc, self.fields.index_letter),
            });
        }
        entries.sort();
        Ok(entries)
    }
}

/// Adds entries to a [`VerbIndex`] until the single final commit.
pub struct EntryWriter {
    writer: IndexWriter,
    fields: VerbFields,
    written: usize,
}

impl EntryWriter {
    /// Add one entry. Only infinitives get a navigation letter.
    pub fn write_entry(&mut self, entry: &Entry) -> BuildResult<()> {
        let mut doc = TantivyDocument::default();
        doc.add_text(self.fields.verb_form, &entry.word);
        doc.add_text(self.fields.file_path, &entry.source_file);
        if entry.is_infinitive {
            doc.add_text(self.fields.index_letter, letter_key(Some(entry.word.as_str())));
        }
        self.writer.add_document(doc)?;
        self.written += 1;
        Ok(())
    }

    /// Commit everything written so far and release the writer.
    pub fn commit(mut self) -> BuildResult<usize> {
        self.writer.commit()?;
        self.writer.wait_merging_threads()?;
        Ok(self.written)
    }
}

/// Where a run puts its index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexTarget {
    Directory(PathBuf),
    Ram,
}

impl IndexTarget {
    /// Fresh, empty index for this target.
    pub fn create(&self) -> BuildResult<VerbIndex> {
        match self {
            IndexTarget::Directory(dir) => VerbIndex::recreate(dir),
            IndexTarget::Ram => VerbIndex::in_ram(),
        }
    }
}
