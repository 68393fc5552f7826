//! Flattening of loaded records into index entries.

use std::collections::HashSet;

use tracing::trace;

use super::LoadedRecord;

/// One searchable verb form, the unit written to the index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Display form; rewritten to "word (lemma)" when the word collides.
    pub word: String,
    pub source_file: String,
    pub is_infinitive: bool,
    pub lemma: String,
    /// Form that produced the word first, kept for provenance logging.
    pub form: String,
}

/// Second pass: flatten one record into entries, appended to `entries`.
///
/// Forms are walked in source order and slots in canonical order. A word is
/// emitted once per record; later repeats in other forms or slots are dropped.
/// Returns the words emitted for this record.
pub fn build_entries(loaded: &LoadedRecord, entries: &mut Vec<Entry>) -> HashSet<String> {
    let source_file = loaded.source_file();
    let lemma = &loaded.record.lemma;
    let mut indexed = HashSet::new();

    for form in &loaded.record.forms {
        let is_infinitive = form.is_infinitive();
        for word in form.surface_words() {
            if indexed.contains(&word) {
                continue;
            }
            trace!(%word, form = %form.name, file = %source_file, "indexing");
            indexed.insert(word.clone());
            entries.push(Entry {
                word,
                source_file: source_file.clone(),
                is_infinitive,
                lemma: lemma.clone(),
                form: form.name.clone(),
            });
        }
    }

    indexed
}
