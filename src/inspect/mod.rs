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

use crate::walker::Walker;

mod impls;
mod tuple;

/// The traversal capability: a value reveals its textual leaves and its
/// children to a [`Walker`].
///
/// Implementations exist for the standard textual types, scalars,
/// containers, maps, smart pointers, cells, locks and `serde_json::Value`.
/// Derive it for your own structs with `#[derive(Inspect)]`; every field is
/// visited in declaration order, whatever its visibility, since injected
/// payloads can live in any field. `#[inspect(skip)]` excludes a field and
/// `#[inspect(display)]` on the struct additionally emits its `Display`
/// rendering as a leaf.
///
/// Hand-written impls for composites should wrap their body in
/// [`Walker::guarded`] so shared and self-referential values terminate:
///
/// ```rust
/// use kishu::{Inspect, Walker};
///
/// struct Credentials {
///     user: String,
///     token: String,
/// }
///
/// impl Inspect for Credentials {
///     fn inspect(&self, walker: &mut Walker<'_>) {
///         walker.guarded(self, |walker| {
///             walker.field("user", &self.user);
///             // The token never reaches generated SQL; leave it out.
///         });
///     }
/// }
/// ```
pub trait Inspect {
    /// Reveal this value to the walker.
    fn inspect(&self, walker: &mut Walker<'_>);
}
