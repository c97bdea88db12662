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

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;

use crate::comm::normalize;
use crate::errors::KishuError;

// Known payload lists, one signature per line, shipped with the crate.
const GENERIC_SQLI: &str = include_str!("../resources/generic_sqli.txt");
const GENERIC_UNION_SELECT: &str = include_str!("../resources/generic_union_select.txt");

static BUILTIN: Lazy<PatternCorpus> = Lazy::new(|| {
    PatternCorpus::from_lines(GENERIC_SQLI.lines().chain(GENERIC_UNION_SELECT.lines()))
});

/// One attack signature: the raw line as loaded (lowercased) plus the
/// normalized form actually compared against candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    raw: String,
    normalized: String,
}

impl Signature {
    fn from_line(line: &str) -> Self {
        let raw = line.trim_end_matches(&['\r', '\n'][..]).to_lowercase();
        let normalized = normalize(&raw);
        Signature { raw, normalized }
    }

    /// The signature as loaded, lowercased. Reported as match evidence.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The form compared against normalized candidates. Empty forms never
    /// match.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// Ordered, immutable list of attack signatures.
///
/// Built once, read-only afterwards; load order is match-priority order.
/// Safe to share across any number of concurrent scans. Reloading means
/// building a new corpus and a new [`Scanner`](crate::Scanner).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternCorpus {
    signatures: Vec<Signature>,
}

impl PatternCorpus {
    /// Build a corpus from raw signature lines, preserving their order.
    /// Blank lines are kept but normalize to empty and can never match.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        PatternCorpus {
            signatures: lines
                .into_iter()
                .map(|line| Signature::from_line(line.as_ref()))
                .collect(),
        }
    }

    /// Build a corpus from a line-oriented reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, KishuError> {
        let mut signatures = Vec::new();
        for line in reader.lines() {
            signatures.push(Signature::from_line(&line?));
        }
        Ok(PatternCorpus { signatures })
    }

    /// Build a corpus from a line-oriented signature file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, KishuError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            KishuError::CorpusSource(format!(
                "unable to read corpus file {}: {}",
                path.display(),
                err
            ))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// The payload lists embedded in the crate, loaded once per process.
    pub fn builtin() -> &'static PatternCorpus {
        &BUILTIN
    }

    /// Append another corpus; its signatures rank after the existing ones.
    pub fn concat(&mut self, other: PatternCorpus) {
        self.signatures.extend(other.signatures);
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Signature> {
        self.signatures.iter()
    }
}
