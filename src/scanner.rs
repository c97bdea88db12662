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

use once_cell::sync::Lazy;

use crate::comm::now_str;
use crate::config::ScannerConfig;
use crate::corpus::PatternCorpus;
use crate::errors::KishuError;
use crate::inspect::Inspect;
use crate::matcher::SignatureMatcher;
use crate::walker::Walker;

static DEFAULT_SCANNER: Lazy<Scanner> = Lazy::new(Scanner::default);

/// SQL injection inspection over arbitrary value graphs.
///
/// Walks every string reachable from a root value and tests each one
/// against the corpus. The corpus is fixed at construction; a scanner is
/// immutable and safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanner {
    corpus: PatternCorpus,
}

impl Default for Scanner {
    /// A scanner over the embedded payload lists.
    fn default() -> Self {
        Scanner {
            corpus: PatternCorpus::builtin().clone(),
        }
    }
}

impl Scanner {
    /// Build a scanner over an explicit corpus. Tests substitute small
    /// corpora this way.
    pub fn new(corpus: PatternCorpus) -> Self {
        Scanner { corpus }
    }

    /// Build a scanner from configured corpus sources. Any unreadable
    /// source is fatal here; there is no degraded-corpus mode.
    pub fn with_config(config: &ScannerConfig) -> Result<Self, KishuError> {
        Ok(Scanner {
            corpus: config.build_corpus()?,
        })
    }

    pub fn corpus(&self) -> &PatternCorpus {
        &self.corpus
    }

    /// Scan every string reachable from `root`.
    ///
    /// Returns the first matched signature in (leaf order, corpus order)
    /// priority, or `None` when nothing matches. The walk stops as soon as
    /// a leaf matches.
    pub fn scan(&self, root: &dyn Inspect) -> Option<&str> {
        let matcher = SignatureMatcher::new(&self.corpus);
        let mut hit: Option<&str> = None;
        let mut sink = |leaf: &str| match matcher.matches(leaf) {
            Some(signature) => {
                tracing::warn!(
                    "{} [Kishu] injection signature [ {} ] matched in value: {}",
                    now_str(),
                    signature,
                    leaf
                );
                hit = Some(signature);
                false
            }
            None => true,
        };
        Walker::walk(root, &mut sink);
        if hit.is_none() {
            tracing::trace!("{} [Kishu] no injection signature matched", now_str());
        }
        hit
    }
}

/// Scan against the embedded payload lists.
///
/// Convenience over a process-wide default [`Scanner`]; the returned
/// signature is the match evidence.
pub fn contains_injection_pattern(root: &dyn Inspect) -> Option<&'static str> {
    DEFAULT_SCANNER.scan(root)
}
