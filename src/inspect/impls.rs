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

use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::{Arc, Mutex, RwLock};

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::inspect::Inspect;
use crate::walker::Walker;

// Scalars carry no text and have no structure to descend into.
macro_rules! impl_opaque_inspect {
    ($($ty:ty),*) => {
        $(
            impl Inspect for $ty {
                fn inspect(&self, _walker: &mut Walker<'_>) {}
            }
        )*
    };
}

impl_opaque_inspect! {
    bool, i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, ()
}

// Textual values are leaves.

impl Inspect for str {
    fn inspect(&self, walker: &mut Walker<'_>) {
        walker.text(self);
    }
}

impl Inspect for String {
    fn inspect(&self, walker: &mut Walker<'_>) {
        walker.text(self);
    }
}

impl Inspect for char {
    fn inspect(&self, walker: &mut Walker<'_>) {
        let mut buf = [0u8; 4];
        walker.text(self.encode_utf8(&mut buf));
    }
}

impl<'a> Inspect for Cow<'a, str> {
    fn inspect(&self, walker: &mut Walker<'_>) {
        walker.text(self.as_ref());
    }
}

// References and smart pointers delegate to the pointee, so identity and
// cycle tracking see the shared value rather than the handle.

impl<'a, T: Inspect + ?Sized> Inspect for &'a T {
    fn inspect(&self, walker: &mut Walker<'_>) {
        (**self).inspect(walker);
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn inspect(&self, walker: &mut Walker<'_>) {
        (**self).inspect(walker);
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    fn inspect(&self, walker: &mut Walker<'_>) {
        (**self).inspect(walker);
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn inspect(&self, walker: &mut Walker<'_>) {
        (**self).inspect(walker);
    }
}

// Absent values contribute nothing.
impl<T: Inspect> Inspect for Option<T> {
    fn inspect(&self, walker: &mut Walker<'_>) {
        if let Some(value) = self {
            value.inspect(walker);
        }
    }
}

// Sequence containers visit every element.
macro_rules! impl_seq_inspect {
    ($($ty:ident),*) => {
        $(
            impl<T: Inspect> Inspect for $ty<T> {
                fn inspect(&self, walker: &mut Walker<'_>) {
                    walker.guarded(self, |walker| {
                        for item in self {
                            walker.visit(item);
                        }
                    });
                }
            }
        )*
    };
}

impl_seq_inspect! { Vec, VecDeque, BTreeSet }

impl<T: Inspect> Inspect for [T] {
    fn inspect(&self, walker: &mut Walker<'_>) {
        walker.guarded(self, |walker| {
            for item in self {
                walker.visit(item);
            }
        });
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn inspect(&self, walker: &mut Walker<'_>) {
        walker.guarded(self, |walker| {
            for item in self {
                walker.visit(item);
            }
        });
    }
}

impl<T: Inspect, S> Inspect for HashSet<T, S> {
    fn inspect(&self, walker: &mut Walker<'_>) {
        walker.guarded(self, |walker| {
            for item in self {
                walker.visit(item);
            }
        });
    }
}

// Mappings visit every key and every value; both sides are candidates.
macro_rules! impl_map_inspect {
    ($($ty:ident),*) => {
        $(
            impl<K: Inspect, V: Inspect, S> Inspect for $ty<K, V, S> {
                fn inspect(&self, walker: &mut Walker<'_>) {
                    walker.guarded(self, |walker| {
                        for (key, value) in self {
                            walker.entry(key, value);
                        }
                    });
                }
            }
        )*
    };
}

impl_map_inspect! { HashMap, IndexMap }

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn inspect(&self, walker: &mut Walker<'_>) {
        walker.guarded(self, |walker| {
            for (key, value) in self {
                walker.entry(key, value);
            }
        });
    }
}

// Cells and locks are the one place a value can be unreadable at walk
// time; an unreadable value is skipped and the walk carries on.

impl<T: Inspect> Inspect for RefCell<T> {
    fn inspect(&self, walker: &mut Walker<'_>) {
        walker.guarded(self, |walker| {
            if let Ok(inner) = self.try_borrow() {
                inner.inspect(walker);
            }
        });
    }
}

impl<T: Inspect> Inspect for Mutex<T> {
    fn inspect(&self, walker: &mut Walker<'_>) {
        walker.guarded(self, |walker| {
            if let Ok(inner) = self.try_lock() {
                inner.inspect(walker);
            }
        });
    }
}

impl<T: Inspect> Inspect for RwLock<T> {
    fn inspect(&self, walker: &mut Walker<'_>) {
        walker.guarded(self, |walker| {
            if let Ok(inner) = self.try_read() {
                inner.inspect(walker);
            }
        });
    }
}

// Dynamic JSON trees: strings and object keys are leaves, containers
// recurse, everything else is opaque.
impl Inspect for JsonValue {
    fn inspect(&self, walker: &mut Walker<'_>) {
        match self {
            JsonValue::Null | JsonValue::Bool(_) | JsonValue::Number(_) => {}
            JsonValue::String(text) => walker.text(text),
            JsonValue::Array(items) => walker.guarded(self, |walker| {
                for item in items {
                    walker.visit(item);
                }
            }),
            JsonValue::Object(entries) => walker.guarded(self, |walker| {
                for (key, value) in entries {
                    walker.text(key);
                    walker.visit(value);
                }
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::collect_strings;
    use serde_json::json;

    #[test]
    fn test_textual_types_are_leaves() {
        assert_eq!(collect_strings(&"hello"), vec!["hello"]);
        assert_eq!(collect_strings(&"hello".to_string()), vec!["hello"]);
        assert_eq!(collect_strings(&'x'), vec!["x"]);
        let cow: Cow<'_, str> = Cow::Borrowed("borrowed");
        assert_eq!(collect_strings(&cow), vec!["borrowed"]);
    }

    #[test]
    fn test_scalars_are_opaque() {
        assert!(collect_strings(&42_i64).is_empty());
        assert!(collect_strings(&true).is_empty());
        assert!(collect_strings(&3.5_f64).is_empty());
    }

    #[test]
    fn test_option_none_contributes_nothing() {
        let missing: Option<String> = None;
        assert!(collect_strings(&missing).is_empty());
        assert_eq!(collect_strings(&Some("here".to_string())), vec!["here"]);
    }

    #[test]
    fn test_sequences_visit_every_element() {
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(collect_strings(&items), vec!["a", "b"]);
        let arr = ["one", "two"];
        assert_eq!(collect_strings(&arr), vec!["one", "two"]);
    }

    #[test]
    fn test_maps_visit_keys_and_values() {
        let mut map = IndexMap::new();
        map.insert("key".to_string(), "value".to_string());
        assert_eq!(collect_strings(&map), vec!["key", "value"]);
    }

    #[test]
    fn test_nested_containers_recurse() {
        let nested = vec![vec!["deep".to_string()]];
        assert_eq!(collect_strings(&nested), vec!["deep"]);
    }

    #[test]
    fn test_locks_delegate_when_free() {
        let locked = Mutex::new("guarded".to_string());
        assert_eq!(collect_strings(&locked), vec!["guarded"]);
        let shared = RwLock::new("readable".to_string());
        assert_eq!(collect_strings(&shared), vec!["readable"]);
    }

    #[test]
    fn test_held_mutex_is_skipped() {
        let locked = Mutex::new("held".to_string());
        let guard = locked.lock().unwrap();
        assert!(collect_strings(&locked).is_empty());
        drop(guard);
    }

    #[test]
    fn test_json_strings_and_keys_are_leaves() {
        let value = json!({
            "filter": "name = ?",
            "limit": 10,
            "tags": ["alpha", "beta"],
            "extra": null
        });
        let leaves = collect_strings(&value);
        assert!(leaves.contains(&"filter".to_string()));
        assert!(leaves.contains(&"name = ?".to_string()));
        assert!(leaves.contains(&"alpha".to_string()));
        assert!(leaves.contains(&"beta".to_string()));
        assert!(!leaves.contains(&"10".to_string()));
    }
}
