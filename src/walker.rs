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

use std::collections::HashSet;

use crate::inspect::Inspect;

/// Per-walk cycle guard.
///
/// Keyed by value identity (the address of the examined value) and the
/// concrete type being examined. Identity, not equality: two structurally
/// equal values at different addresses are visited independently. The type
/// half keeps a struct and its first embedded field apart, since both can
/// sit at the same address.
#[derive(Debug, Default)]
struct VisitedGuard {
    seen: HashSet<(usize, &'static str)>,
}

impl VisitedGuard {
    /// Record the pair; false when it was already recorded during this walk.
    fn enter(&mut self, identity: usize, type_tag: &'static str) -> bool {
        self.seen.insert((identity, type_tag))
    }
}

/// Depth-first traversal state for a single walk.
///
/// [`Inspect`] implementations reveal their textual leaves and children
/// through the methods below; the walker owns the visited set and the leaf
/// sink. A fresh walker (and a fresh visited set) is created for every
/// [`Walker::walk`] call and dropped at its end, so walks never contaminate
/// each other.
pub struct Walker<'w> {
    guard: VisitedGuard,
    sink: &'w mut dyn FnMut(&str) -> bool,
    halted: bool,
}

impl<'w> Walker<'w> {
    /// Walk every value reachable from `root`, feeding each textual leaf to
    /// `sink` in traversal order. The sink returns `false` to halt the walk
    /// early.
    pub fn walk(root: &dyn Inspect, sink: &'w mut dyn FnMut(&str) -> bool) {
        let mut walker = Walker {
            guard: VisitedGuard::default(),
            sink,
            halted: false,
        };
        walker.visit(root);
    }

    /// Emit a textual leaf.
    pub fn text(&mut self, leaf: &str) {
        if self.halted {
            return;
        }
        if !(self.sink)(leaf) {
            self.halted = true;
        }
    }

    /// Descend into a child value.
    pub fn visit(&mut self, child: &dyn Inspect) {
        if self.halted {
            return;
        }
        child.inspect(self);
    }

    /// Descend into a named field.
    pub fn field(&mut self, name: &'static str, value: &dyn Inspect) {
        if self.halted {
            return;
        }
        tracing::trace!("[Kishu] visiting field `{}`", name);
        value.inspect(self);
    }

    /// Descend into one entry of a mapping. Keys are candidates too.
    pub fn entry(&mut self, key: &dyn Inspect, value: &dyn Inspect) {
        self.visit(key);
        self.visit(value);
    }

    /// Run `scope` at most once per (identity, type) pair of `value`.
    ///
    /// The pair is recorded before `scope` runs, so self-referential values
    /// terminate. A value reachable through several paths contributes its
    /// leaves through the first path only.
    pub fn guarded<T: ?Sized>(&mut self, value: &T, scope: impl FnOnce(&mut Self)) {
        if self.halted {
            return;
        }
        let identity = value as *const T as *const () as usize;
        if self.guard.enter(identity, core::any::type_name::<T>()) {
            scope(self);
        }
    }

    /// True once the sink has stopped the walk.
    pub fn halted(&self) -> bool {
        self.halted
    }
}

/// Collect every textual leaf reachable from `root`, in traversal order.
///
/// Composite fields come in declaration order and container elements in
/// iteration order; for unordered containers that order is
/// implementation-defined, so callers should rely on membership rather
/// than position.
pub fn collect_strings(root: &dyn Inspect) -> Vec<String> {
    let mut leaves = Vec::new();
    let mut sink = |leaf: &str| {
        leaves.push(leaf.to_string());
        true
    };
    Walker::walk(root, &mut sink);
    leaves
}
