//! First pass: which lemmas produce each surface word.
//!
//! Every form counts, not just the infinitive. A word produced by two or more
//! lemmas is a collision and gets disambiguated before it is indexed.

use std::collections::{BTreeSet, HashMap};

use super::LoadedRecord;

/// Surface word → lemmas that produce it anywhere in the corpus.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollisionMap {
    lemmas_by_word: HashMap<String, BTreeSet<String>>,
}

impl CollisionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every surface word of one record under its lemma.
    pub fn add_record(&mut self, loaded: &LoadedRecord) {
        let lemma = &loaded.record.lemma;
        for form in &loaded.record.forms {
            for word in form.surface_words() {
                self.lemmas_by_word
                    .entry(word)
                    .or_default()
                    .insert(lemma.clone());
            }
        }
    }

    /// Set union with another map. Commutative, so partial maps can be merged in any order.
    pub fn merge(mut self, other: CollisionMap) -> CollisionMap {
        if self.lemmas_by_word.len() < other.lemmas_by_word.len() {
            return other.merge(self);
        }
        for (word, lemmas) in other.lemmas_by_word {
            self.lemmas_by_word.entry(word).or_default().extend(lemmas);
        }
        self
    }

    pub fn lemmas(&self, word: &str) -> Option<&BTreeSet<String>> {
        self.lemmas_by_word.get(word)
    }

    /// True when `word` is produced by at least two distinct lemmas.
    pub fn is_collision(&self, word: &str) -> bool {
        self.lemmas(word).is_some_and(|lemmas| lemmas.len() > 1)
    }

    /// Colliding words, sorted.
    pub fn collisions(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .lemmas_by_word
            .iter()
            .filter(|(_, lemmas)| lemmas.len() > 1)
            .map(|(word, _)| word.as_str())
            .collect();
        words.sort_unstable();
        words
    }

    /// Number of distinct surface words seen.
    pub fn len(&self) -> usize {
        self.lemmas_by_word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas_by_word.is_empty()
    }
}

/// Build the collision map over the whole corpus, one record at a time.
pub fn scan_collisions(records: &[LoadedRecord]) -> CollisionMap {
    records.iter().fold(CollisionMap::new(), |mut map, loaded| {
        map.add_record(loaded);
        map
    })
}
