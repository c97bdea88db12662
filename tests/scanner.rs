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

//!
//! Tests.
//!
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

use kishu::{collect_strings, contains_injection_pattern, Inspect, PatternCorpus, Scanner};

#[derive(Debug, Default, Inspect)]
struct User {
    id: i64,
    name: String,
    groups: Vec<String>,
    roles: Vec<String>,
}

fn user(name: &str, groups: &[&str], roles: &[&str]) -> User {
    User {
        id: 1,
        name: name.to_string(),
        groups: groups.iter().map(|s| s.to_string()).collect(),
        roles: roles.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn nowhere() {
    let user = user("My Name", &["group1", "group2"], &["role1"]);
    assert_eq!(contains_injection_pattern(&user), None);
}

#[test]
fn list() {
    let user = user("User 1", &["or 1=1", "grp2"], &["role1"]);
    assert!(contains_injection_pattern(&user).is_some());
}

#[test]
fn map() {
    let mut map = HashMap::new();
    map.insert("role1".to_string(), "'%20or%20'x'='x".to_string());
    // The value is matched, not just the key.
    assert!(contains_injection_pattern(&map).is_some());
}

#[test]
fn set() {
    let mut set = HashSet::new();
    set.insert("role1".to_string());
    set.insert("1' or 3=3 --".to_string());
    assert!(contains_injection_pattern(&set).is_some());
}

#[test]
fn array() {
    let arr = ["role1", "10 or 1=1"];
    assert!(contains_injection_pattern(&arr).is_some());
}

#[test]
fn member_variable_of_struct() {
    let user = user("or 1=1", &["", "grp2"], &["role1"]);
    assert!(contains_injection_pattern(&user).is_some());
}

#[test]
fn member_variable_of_embedded_parent() {
    #[derive(Default, Inspect)]
    struct Parent {
        parent_name: String,
    }

    #[derive(Default, Inspect)]
    struct Child {
        base: Parent,
        child_name: String,
    }

    let mut child = Child::default();
    child.base.parent_name = "or 1=1".to_string();
    child.child_name = "no name".to_string();
    assert!(contains_injection_pattern(&child).is_some());
}

#[test]
fn return_from_display() {
    #[derive(Inspect)]
    #[inspect(display)]
    struct Opaque {
        code: u32,
    }

    impl fmt::Display for Opaque {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "or 1=1")
        }
    }

    let value = Opaque { code: 7 };
    assert!(contains_injection_pattern(&value).is_some());
}

#[test]
fn skipped_field_is_not_scanned() {
    #[derive(Default, Inspect)]
    struct Form {
        subject: String,
        #[inspect(skip)]
        raw_body: String,
    }

    let mut form = Form::default();
    form.subject = "hello".to_string();
    form.raw_body = "' or 1=1 --".to_string();
    assert_eq!(contains_injection_pattern(&form), None);
}

// Four classic attack shapes against the embedded corpus.

#[test]
fn error_based1() {
    let user = user("1' or '1' = '1", &["grp1"], &["role1"]);
    let matched = contains_injection_pattern(&user);
    assert!(matched.is_some());
}

#[test]
fn error_based2() {
    let user = user("10 AND 1=2", &["grp1"], &["role1"]);
    assert!(contains_injection_pattern(&user).is_some());
}

#[test]
fn error_based3() {
    let user = user("10; INSERT INTO users …", &["grp1"], &["role1"]);
    assert!(contains_injection_pattern(&user).is_some());
}

#[test]
fn error_based4() {
    let user = user("10 ORDER BY 10", &["grp1"], &["role1"]);
    assert!(contains_injection_pattern(&user).is_some());
}

#[test]
fn union_based1() {
    let user = user(
        "1 UNION ALL SELECT creditCardNumber,1,1 FROM CreditCardTable",
        &["grp1"],
        &["role1"],
    );
    assert!(contains_injection_pattern(&user).is_some());
}

#[test]
fn union_based2() {
    let user = user("10 UNION SELECT 1,null,null—", &["grp1"], &["role1"]);
    assert!(contains_injection_pattern(&user).is_some());
}

#[test]
fn blind1() {
    let user = user(
        "1' AND ASCII(SUBSTRING(username,1,1))=97 AND '1'='1",
        &["grp1"],
        &["role1"],
    );
    assert!(contains_injection_pattern(&user).is_some());
}

#[test]
fn blind2() {
    let user = user("1' AND LENGTH(username)=4 AND '1' = '1", &["grp1"], &["role1"]);
    assert!(contains_injection_pattern(&user).is_some());
}

#[test]
fn time_based1() {
    let user = user(
        "10 AND IF(version() like ‘5%’, sleep(10), ‘false’))--",
        &["grp1"],
        &["role1"],
    );
    assert!(contains_injection_pattern(&user).is_some());
}

// Graph-shape properties.

#[derive(Default, Inspect)]
struct TreeNode {
    name: String,
    parent: Option<Rc<RefCell<TreeNode>>>,
    children: Vec<Rc<RefCell<TreeNode>>>,
}

#[test]
fn self_referential_graph_terminates() {
    let root = Rc::new(RefCell::new(TreeNode {
        name: "root".to_string(),
        ..TreeNode::default()
    }));
    let child = Rc::new(RefCell::new(TreeNode {
        name: "child".to_string(),
        parent: Some(Rc::clone(&root)),
        ..TreeNode::default()
    }));
    root.borrow_mut().children.push(Rc::clone(&child));

    assert_eq!(contains_injection_pattern(&root), None);

    child.borrow_mut().name = "' or 1=1 --".to_string();
    assert!(contains_injection_pattern(&root).is_some());
}

#[test]
fn mutually_referential_values_terminate() {
    #[derive(Default, Inspect)]
    struct Left {
        tag: String,
        right: Option<Rc<RefCell<Right>>>,
    }

    #[derive(Default, Inspect)]
    struct Right {
        tag: String,
        left: Option<Rc<RefCell<Left>>>,
    }

    let left = Rc::new(RefCell::new(Left {
        tag: "left".to_string(),
        right: None,
    }));
    let right = Rc::new(RefCell::new(Right {
        tag: "right".to_string(),
        left: Some(Rc::clone(&left)),
    }));
    left.borrow_mut().right = Some(Rc::clone(&right));

    let leaves = collect_strings(&left);
    assert_eq!(leaves, vec!["left", "right"]);
}

#[test]
fn diamond_shared_node_contributes_once() {
    // Two distinct paths reach the same node; its leaves come through the
    // first path only. Documented limitation of identity-based guarding.
    #[derive(Inspect)]
    struct Holder {
        first: Rc<TreeNode>,
        second: Rc<TreeNode>,
    }

    let shared = Rc::new(TreeNode {
        name: "shared".to_string(),
        ..TreeNode::default()
    });
    let holder = Holder {
        first: Rc::clone(&shared),
        second: Rc::clone(&shared),
    };
    let leaves = collect_strings(&holder);
    assert_eq!(leaves, vec!["shared"]);
}

#[test]
fn scan_is_idempotent() {
    let user = user("10 UNION SELECT 1,null,null", &["grp1"], &["role1"]);
    let first = contains_injection_pattern(&user);
    let second = contains_injection_pattern(&user);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn clean_record_yields_none() {
    let user = user("Alice", &[], &[]);
    assert_eq!(contains_injection_pattern(&user), None);
}

#[test]
fn json_value_graphs_are_scanned() {
    let dirty = kishu::serde_json::json!({
        "filter": {"name": "1 or 1=1"},
        "page": 3
    });
    assert!(contains_injection_pattern(&dirty).is_some());

    let clean = kishu::serde_json::json!({
        "filter": {"name": "Alice"},
        "page": 3
    });
    assert_eq!(contains_injection_pattern(&clean), None);
}

#[test]
fn leaves_follow_declaration_order() {
    let user = user("first", &["second"], &["third"]);
    assert_eq!(collect_strings(&user), vec!["first", "second", "third"]);
}

#[test]
fn matched_signature_is_reported_as_evidence() {
    let scanner = Scanner::new(PatternCorpus::from_lines(["UNION SELECT", "or 1=1"]));
    let user = user("10 union select 1", &[], &[]);
    // Evidence is the stored, lowercased signature line.
    assert_eq!(scanner.scan(&user), Some("union select"));
}
