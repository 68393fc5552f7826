//! Conjugation records as stored on disk, one lemma per JSON file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BuildError, BuildResult};
use crate::letter::surface_words;

/// Form name that marks the infinitive of a paradigm.
pub const INFINITIVE_FORM: &str = "Infinitiu";

/// Person/number position inside a form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Singular1,
    Singular2,
    Singular3,
    Plural1,
    Plural2,
    Plural3,
}

impl Slot {
    /// Canonical traversal order.
    pub const ALL: [Slot; 6] = [
        Slot::Singular1,
        Slot::Singular2,
        Slot::Singular3,
        Slot::Plural1,
        Slot::Plural2,
        Slot::Plural3,
    ];
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Conjugation {
    pub word: String,
}

/// One named grammatical form of a paradigm and its six slots.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Form {
    #[serde(rename = "form")]
    pub name: String,
    pub singular1: Vec<Conjugation>,
    pub singular2: Vec<Conjugation>,
    pub singular3: Vec<Conjugation>,
    pub plural1: Vec<Conjugation>,
    pub plural2: Vec<Conjugation>,
    pub plural3: Vec<Conjugation>,
}

impl Form {
    pub fn slot(&self, slot: Slot) -> &[Conjugation] {
        match slot {
            Slot::Singular1 => &self.singular1,
            Slot::Singular2 => &self.singular2,
            Slot::Singular3 => &self.singular3,
            Slot::Plural1 => &self.plural1,
            Slot::Plural2 => &self.plural2,
            Slot::Plural3 => &self.plural3,
        }
    }

    pub fn is_infinitive(&self) -> bool {
        self.name == INFINITIVE_FORM
    }

    /// Split and trimmed surface words, slots in canonical order.
    pub fn surface_words(&self) -> impl Iterator<Item = String> + '_ {
        Slot::ALL
            .into_iter()
            .flat_map(move |slot| self.slot(slot))
            .flat_map(|conjugation| surface_words(&conjugation.word))
    }
}

/// A lemma and its paradigm, as stored in one record file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub lemma: String,
    pub forms: Vec<Form>,
}

impl Record {
    /// Parse a record from JSON text: `{ "<lemma>": [<form>, ...] }`.
    ///
    /// Exactly one top-level key is accepted.
    pub fn from_json(content: impl AsRef<[u8]>) -> Result<Self, String> {
        let mut top: HashMap<String, Vec<Form>> =
            serde_json::from_slice(content.as_ref()).map_err(|e| e.to_string())?;

        if top.len() != 1 {
            return Err(format!(
                "expected exactly one lemma key, found {}",
                top.len()
            ));
        }

        let (lemma, forms) = top.drain().next().ok_or("missing lemma key")?;
        Ok(Record { lemma, forms })
    }
}

/// A record together with the file it was loaded from.
#[derive(Clone, Debug)]
pub struct LoadedRecord {
    pub path: PathBuf,
    pub record: Record,
}

impl LoadedRecord {
    /// Provenance string stored in the index.
    pub fn source_file(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// Read and parse one record file.
pub fn load_record(path: &Path) -> BuildResult<LoadedRecord> {
    let content = fs::read(path).map_err(|source| BuildError::ReadRecord {
        path: path.to_path_buf(),
        source,
    })?;
    let record = Record::from_json(&content).map_err(|reason| BuildError::MalformedRecord {
        path: path.to_path_buf(),
        reason,
    })?;

    Ok(LoadedRecord {
        path: path.to_path_buf(),
        record,
    })
}
