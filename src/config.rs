/*
 *
 *  *
 *  *      Copyright (c) 2018-2025, SnackCloud All rights reserved.
 *  *
 *  *   Redistribution and use in source and binary forms, with or without
 *  *   modification, are permitted provided that the following conditions are met:
 *  *
 *  *   Redistributions of source code must retain the above copyright notice,
 *  *   this list of conditions and the following disclaimer.
 *  *   Redistributions in binary form must reproduce the above copyright
 *  *   notice, this list of conditions and the following disclaimer in the
 *  *   documentation and/or other materials provided with the distribution.
 *  *   Neither the name of the www.snackcloud.cn developer nor the names of its
 *  *   contributors may be used to endorse or promote products derived from
 *  *   this software without specific prior written permission.
 *  *   Author: SnackCloud
 *  *
 *
 */

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::corpus::PatternCorpus;
use crate::errors::KishuError;

/// One corpus source, line-oriented, one signature per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorpusSource {
    /// A signature file on disk.
    File(PathBuf),
    /// Inline signature text.
    Text(String),
}

/// Corpus configuration for a [`Scanner`](crate::Scanner).
///
/// Sources are loaded in the order they were added, after the embedded
/// lists when those are enabled. Loading happens once, when the scanner is
/// built; any unreadable source aborts construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerConfig {
    builtin: bool,
    sources: Vec<CorpusSource>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            builtin: true,
            sources: Vec::new(),
        }
    }
}

impl ScannerConfig {
    pub fn new() -> Self {
        ScannerConfig::default()
    }

    /// Enable or disable the embedded payload lists.
    pub fn set_builtin(mut self, builtin: bool) -> Self {
        self.builtin = builtin;
        self
    }

    /// Append a signature file source.
    pub fn add_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.sources.push(CorpusSource::File(path.into()));
        self
    }

    /// Append an inline signature text source.
    pub fn add_text<S: Into<String>>(mut self, text: S) -> Self {
        self.sources.push(CorpusSource::Text(text.into()));
        self
    }

    /// Load and concatenate all configured sources.
    pub fn build_corpus(&self) -> Result<PatternCorpus, KishuError> {
        let mut corpus = if self.builtin {
            PatternCorpus::builtin().clone()
        } else {
            PatternCorpus::default()
        };
        for source in &self.sources {
            let loaded = match source {
                CorpusSource::File(path) => PatternCorpus::from_file(path)?,
                CorpusSource::Text(text) => PatternCorpus::from_lines(text.lines()),
            };
            corpus.concat(loaded);
        }
        Ok(corpus)
    }
}
