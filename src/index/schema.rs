// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Schema and text analysis for the verb index.
//!
//! Three fields: `verb_form` (searchable, stored, sortable), `index_letter`
//! (searchable, stored, only set for infinitives) and `file_path` (stored,
//! sortable). Both searchable fields go through the `verb` analyzer, a regex
//! tokenizer that keeps the Catalan middle dot inside words so "col·lecció"
//! stays one token, followed by lowercasing. No stop words, no minimum length.

use tantivy::schema::{
    Field, IndexRecordOption, Schema, TextFieldIndexing, TextOptions, FAST, STORED, STRING,
};
use tantivy::tokenizer::{LowerCaser, RegexTokenizer, TextAnalyzer};
use tantivy::Index;

pub const VERB_FORM: &str = "verb_form";
pub const INDEX_LETTER: &str = "index_letter";
pub const FILE_PATH: &str = "file_path";

/// Name the analyzer is registered under.
pub const VERB_TOKENIZER: &str = "verb";

/// Word characters and `·`, optionally joined by single dots.
pub const TOKEN_PATTERN: &str = r"[\w·]+(?:\.?[\w·]+)*";

pub fn build_schema() -> Schema {
    let mut builder = Schema::builder();

    let analyzed = TextFieldIndexing::default()
        .set_tokenizer(VERB_TOKENIZER)
        .set_index_option(IndexRecordOption::WithFreqsAndPositions);

    builder.add_text_field(
        VERB_FORM,
        TextOptions::default()
            .set_indexing_options(analyzed.clone())
            .set_stored()
            .set_fast(None),
    );
    builder.add_text_field(
        INDEX_LETTER,
        TextOptions::default()
            .set_indexing_options(analyzed)
            .set_stored(),
    );
    builder.add_text_field(FILE_PATH, STRING | STORED | FAST);

    builder.build()
}

pub fn build_analyzer() -> tantivy::Result<TextAnalyzer> {
    let tokenizer = RegexTokenizer::new(TOKEN_PATTERN)?;
    Ok(TextAnalyzer::builder(tokenizer).filter(LowerCaser).build())
}

/// Make the `verb` analyzer available to an index. Needed after every create or open.
pub fn register_analyzer(index: &Index) -> tantivy::Result<()> {
    index.tokenizers().register(VERB_TOKENIZER, build_analyzer()?);
    Ok(())
}

/// Field handles resolved from the schema.
#[derive(Clone, Copy, Debug)]
pub struct VerbFields {
    pub verb_form: Field,
    pub index_letter: Field,
    pub file_path: Field,
}

impl VerbFields {
    pub fn from_schema(schema: &Schema) -> tantivy::Result<Self> {
        Ok(Self {
            verb_form: schema.get_field(VERB_FORM)?,
            index_letter: schema.get_field(INDEX_LETTER)?,
            file_path: schema.get_field(FILE_PATH)?,
        })
    }
}
