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

use crate::comm::normalize;
use crate::corpus::PatternCorpus;

/// Tests candidate strings against a corpus.
///
/// Payloads are usually embedded inside larger surrounding text (a form
/// field, a header value), so matching is substring containment over the
/// normalized forms, not equality and not an anchored comparison.
#[derive(Debug, Clone, Copy)]
pub struct SignatureMatcher<'c> {
    corpus: &'c PatternCorpus,
}

impl<'c> SignatureMatcher<'c> {
    pub fn new(corpus: &'c PatternCorpus) -> Self {
        SignatureMatcher { corpus }
    }

    /// The first signature, in corpus order, whose normalized form is
    /// contained in the normalized candidate. Signatures or candidates that
    /// normalize to empty never match.
    pub fn matches(&self, candidate: &str) -> Option<&'c str> {
        let normalized = normalize(candidate);
        if normalized.is_empty() {
            return None;
        }
        for signature in self.corpus.iter() {
            if !signature.normalized().is_empty() && normalized.contains(signature.normalized()) {
                return Some(signature.raw());
            }
        }
        None
    }
}
