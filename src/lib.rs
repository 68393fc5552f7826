//! Searchable index of inflected verb forms.
//!
//! Input is a tree of JSON records, one lemma each, holding the full
//! conjugation paradigm. Output is a tantivy index with one document per
//! surface word form, where forms shared by several lemmas are qualified with
//! their lemma ("canta (cantar)", "canta (plantar)").
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌────────────────┐
//! │ build/record │────▶│ build/collisions │────▶│ build/entries  │
//! │  (Record,    │     │  (CollisionMap)  │     │  (Entry)       │
//! │   Form)      │     └──────────────────┘     └────────────────┘
//! └──────────────┘              │                        │
//!                               ▼                        ▼
//!                     ┌───────────────────┐     ┌────────────────┐
//!                     │build/disambiguate │────▶│ index          │
//!                     │ ("w (lemma)")     │     │ (tantivy, the  │
//!                     └───────────────────┘     │  letter key)   │
//!                                               └────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use verbindex::build::{run_build, BuildConfig};
//!
//! let output = run_build(&BuildConfig::new("data/jsons"))?;
//! println!("{}", output.summary);
//! ```

pub mod build;
pub mod error;
pub mod index;
pub mod letter;
pub mod testing;

pub use build::{
    run_build, BuildConfig, BuildOutput, BuildSummary, CollisionMap, Entry, Form, LoadedRecord,
    Record, Stage, DEFAULT_INDEX_DIR,
};
pub use error::{BuildError, BuildResult};
pub use index::{IndexTarget, IndexedEntry, VerbIndex};
pub use letter::{letter_key, surface_words};
