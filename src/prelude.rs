//!
//! Convenience re-exports.
//!
pub use crate::{
    collect_strings, contains_injection_pattern, AllowListChecker, AllowListProvider,
    AllowListRegistry, CorpusSource, ExactWordProvider, Inspect, KishuError, PatternCorpus,
    RegexProvider, Scanner, ScannerConfig, Signature, SignatureMatcher, Walker,
};
