//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical record builders so tests, benches and property
//! tests describe corpora the same way.

#![doc(hidden)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::build::{Conjugation, Form, LoadedRecord, Record, INFINITIVE_FORM};

/// Create a form whose slots hold `words` in canonical order.
///
/// Missing trailing slots are empty; an empty string leaves that slot empty.
pub fn make_form(name: &str, words: &[&str]) -> Form {
    let slot = |i: usize| -> Vec<Conjugation> {
        match words.get(i) {
            Some(w) if !w.is_empty() => vec![Conjugation {
                word: (*w).to_string(),
            }],
            _ => Vec::new(),
        }
    };
    Form {
        name: name.to_string(),
        singular1: slot(0),
        singular2: slot(1),
        singular3: slot(2),
        plural1: slot(3),
        plural2: slot(4),
        plural3: slot(5),
    }
}

/// Create the infinitive form of a lemma.
pub fn make_infinitive(lemma: &str) -> Form {
    make_form(INFINITIVE_FORM, &[lemma])
}

/// Create a loaded record with a synthetic `<lemma>.json` path.
pub fn make_record(lemma: &str, forms: Vec<Form>) -> LoadedRecord {
    LoadedRecord {
        path: PathBuf::from(format!("{}.json", lemma)),
        record: Record {
            lemma: lemma.to_string(),
            forms,
        },
    }
}

/// Serialize a record to the on-disk JSON shape.
pub fn record_json(lemma: &str, forms: &[Form]) -> serde_json::Result<String> {
    let mut top = Map::new();
    top.insert(lemma.to_string(), serde_json::to_value(forms)?);
    serde_json::to_string(&Value::Object(top))
}

/// Write a record file `<dir>/<lemma>.json` and return its path.
pub fn write_record(dir: &Path, lemma: &str, forms: &[Form]) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", lemma));
    fs::write(&path, record_json(lemma, forms)?)?;
    Ok(path)
}
