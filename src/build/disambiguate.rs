//! Qualification of words that several lemmas produce.

use std::collections::BTreeMap;

use tracing::debug;

use super::{CollisionMap, Entry};

/// Display form of a word that more than one lemma produces.
pub fn qualified(word: &str, lemma: &str) -> String {
    format!("{} ({})", word, lemma)
}

/// Rewrite every colliding entry to "word (lemma)", in place.
///
/// Each entry is qualified with its own lemma. Returns the number of distinct
/// colliding words that had at least one entry rewritten.
pub fn disambiguate(entries: &mut [Entry], collisions: &CollisionMap) -> usize {
    let mut positions: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (i, entry) in entries.iter().enumerate() {
        if collisions.is_collision(&entry.word) {
            positions.entry(entry.word.clone()).or_default().push(i);
        }
    }

    for (word, indices) in &positions {
        for &i in indices {
            let entry = &mut entries[i];
            entry.word = qualified(word, &entry.lemma);
            debug!(
                word = %word,
                lemma = %entry.lemma,
                form = %entry.form,
                file = %entry.source_file,
                "disambiguated"
            );
        }
    }

    positions.len()
}
