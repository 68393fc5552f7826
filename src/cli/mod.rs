// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definition for the verbindex command-line interface.
//!
//! One positional argument: the directory of conjugation records. The index
//! always lands in `data/indexdir`, rebuilt from scratch on every run.

use std::path::PathBuf;

use clap::Parser;

use verbindex::build::BuildConfig;

#[derive(Parser)]
#[command(
    name = "verbindex",
    about = "Build a disambiguated search index of conjugated verb forms",
    version
)]
pub struct Cli {
    /// Directory containing the per-lemma JSON records (searched recursively)
    pub json_dir: PathBuf,
}

impl Cli {
    pub fn config(&self) -> BuildConfig {
        BuildConfig::new(&self.json_dir)
    }
}
