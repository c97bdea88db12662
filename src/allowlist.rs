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

use std::collections::HashMap;
use std::sync::Arc;

use regex::Regex;

use crate::comm::now_str;
use crate::errors::KishuError;

/// A capability answering "is this candidate an approved value?".
///
/// Providers hold only immutable configuration after construction and are
/// safe for unsynchronized concurrent reads.
pub trait AllowListProvider: Send + Sync {
    fn is_valid(&self, candidate: &str) -> bool;
}

/// A fixed vocabulary of accepted words.
///
/// Case-sensitive mode compares exact equality; case-insensitive mode
/// compares equality ignoring case.
#[derive(Debug, Clone)]
pub struct ExactWordProvider {
    case_sensitive: bool,
    words: Vec<String>,
}

impl ExactWordProvider {
    pub fn new<I, S>(case_sensitive: bool, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExactWordProvider {
            case_sensitive,
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl AllowListProvider for ExactWordProvider {
    fn is_valid(&self, candidate: &str) -> bool {
        self.words.iter().any(|word| {
            if self.case_sensitive {
                word == candidate
            } else {
                word.to_lowercase() == candidate.to_lowercase()
            }
        })
    }
}

/// Whole-string pattern acceptance.
#[derive(Debug, Clone)]
pub struct RegexProvider {
    pattern: Regex,
}

impl RegexProvider {
    /// Compile `pattern`; the candidate must satisfy it as a whole, not as
    /// a substring. A malformed pattern is a configuration error surfaced
    /// here, never from `is_valid`.
    pub fn new(pattern: &str) -> Result<Self, KishuError> {
        let anchored = format!("^(?:{})$", pattern);
        Ok(RegexProvider {
            pattern: Regex::new(&anchored)?,
        })
    }
}

impl AllowListProvider for RegexProvider {
    fn is_valid(&self, candidate: &str) -> bool {
        self.pattern.is_match(candidate)
    }
}

/// Unanimous AND over a list of providers.
///
/// A checker with no providers accepts everything (vacuous AND); building
/// one with at least one provider is the caller's responsibility.
pub struct AllowListChecker {
    providers: Vec<Box<dyn AllowListProvider>>,
}

impl AllowListChecker {
    pub fn new(providers: Vec<Box<dyn AllowListProvider>>) -> Self {
        AllowListChecker { providers }
    }

    /// True iff every configured provider accepts the candidate.
    pub fn is_valid(&self, candidate: &str) -> bool {
        self.providers
            .iter()
            .all(|provider| provider.is_valid(candidate))
    }
}

/// Named allow-list rules registered once and queried by name.
///
/// Where [`AllowListChecker`] composes with AND, a registry query accepts a
/// candidate when at least one of the named rules accepts it, so one value
/// can be, say, a fixed table name or a generated log-table name. A name
/// with no registered rule rejects.
#[derive(Default)]
pub struct AllowListRegistry {
    providers: HashMap<String, Arc<dyn AllowListProvider>>,
}

impl AllowListRegistry {
    pub fn new() -> Self {
        AllowListRegistry::default()
    }

    /// Register a rule under `name`, replacing any previous rule.
    pub fn register<S: Into<String>>(&mut self, name: S, provider: Arc<dyn AllowListProvider>) {
        self.providers.insert(name.into(), provider);
    }

    /// True iff at least one of the named rules accepts the candidate.
    pub fn is_valid(&self, candidate: &str, names: &[&str]) -> bool {
        names.iter().any(|name| match self.providers.get(*name) {
            Some(provider) => provider.is_valid(candidate),
            None => {
                tracing::warn!(
                    "{} [Kishu] no allow-list rule registered under `{}`",
                    now_str(),
                    name
                );
                false
            }
        })
    }
}
