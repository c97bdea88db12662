// Copyright (c) 2026 kishu contributors
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! This crate offers:
//!
//! *   A structural scanner that walks an arbitrary, possibly cyclic value
//!     graph and tests every reachable string against a corpus of known
//!     SQL-injection signatures;
//! *   An allow-list toolkit for identifiers (column names, table names,
//!     sort directives) that have to be interpolated literally into
//!     generated SQL.
//!
//! Neither piece replaces parameterized queries. The scanner is a
//! best-effort auditor for values that are about to reach a query builder;
//! the allow-list is defense in depth for the spots a placeholder cannot
//! cover.
//!
//! ## Installation
//!
//! Put the desired version of the crate into the `dependencies` section of
//! your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! kishu = "0.1"
//! ```
//!
//! ## Scanning values
//!
//! Any type deriving [`Inspect`] can be scanned, fields of every visibility
//! included. Containers, maps, smart pointers and `serde_json::Value` are
//! covered out of the box.
//!
//! ```rust
//! use kishu::{contains_injection_pattern, Inspect};
//!
//! #[derive(Inspect, Default)]
//! struct LoginForm {
//!     username: String,
//!     remember: bool,
//! }
//!
//! let mut form = LoginForm::default();
//! form.username = "guest".to_string();
//! assert!(contains_injection_pattern(&form).is_none());
//!
//! form.username = "' or 1=1 --".to_string();
//! assert!(contains_injection_pattern(&form).is_some());
//! ```
//!
//! The free function scans against the embedded payload lists. Use
//! [`Scanner::new`] with your own [`PatternCorpus`], or
//! [`Scanner::with_config`] with a [`ScannerConfig`], to control the corpus.
//!
//! ## Allow-listing identifiers
//!
//! ```rust
//! use kishu::{AllowListChecker, ExactWordProvider};
//!
//! let sort = AllowListChecker::new(vec![
//!     Box::new(ExactWordProvider::new(false, ["ASC", "DESC"])),
//! ]);
//! assert!(sort.is_valid("asc"));
//! assert!(!sort.is_valid("10 ORDER BY 10"));
//! ```

extern crate self as kishu;

mod allowlist;
pub mod comm;
mod config;
mod corpus;
mod errors;
mod inspect;
mod matcher;
pub mod prelude;
mod scanner;
mod walker;

#[doc(inline)]
pub use allowlist::*;
#[doc(inline)]
pub use config::*;
#[doc(inline)]
pub use corpus::*;
#[doc(inline)]
pub use errors::*;
#[doc(inline)]
pub use inspect::*;
#[doc(inline)]
pub use matcher::*;
#[doc(inline)]
pub use scanner::*;
#[doc(inline)]
pub use walker::*;

pub use kishu_derive::Inspect;
pub use serde_json;
