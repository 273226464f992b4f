// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! End-to-end behavior of the status registry against an in-memory record.

use std::{collections::HashMap, fmt};

use status_behavior::prelude::*;

/// In-memory stand-in for a persisted record.
#[derive(Debug, Default)]
struct Post {
    attributes:   HashMap<String, StatusCode>,
    saved_fields: Vec<String>,
    fail_save:    bool
}

#[derive(Debug)]
struct SaveError;

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("save failed")
    }
}

impl std::error::Error for SaveError {}

#[async_trait]
impl StatusRecord for Post {
    type Error = SaveError;

    fn get(&self, field: &str) -> Option<StatusCode> {
        self.attributes.get(field).cloned()
    }

    fn set(&mut self, field: &str, value: StatusCode) {
        self.attributes.insert(field.to_owned(), value);
    }

    async fn save(&mut self, only: &[&str]) -> Result<bool, SaveError> {
        if self.fail_save {
            return Err(SaveError);
        }

        self.saved_fields = only.iter().map(|f| (*f).to_owned()).collect();
        Ok(true)
    }
}

#[test]
fn assignment_scenario() {
    let mut registry =
        StatusRegistry::with_statuses("status", StatusMap::indexed(["draft", "published"]))
            .expect("valid field name");
    let mut post = Post::default();

    registry.set_status(1, &mut post).expect("1 is a valid code");
    assert_eq!(registry.status(), Some(&StatusCode::Index(1)));
    assert_eq!(registry.status_text(), "published");

    registry
        .set_status("draft", &mut post)
        .expect("draft is a valid label");
    assert_eq!(registry.status(), Some(&StatusCode::Index(0)));

    let err = registry.set_status("archived", &mut post).unwrap_err();
    assert!(err.is_invalid_status());
    assert_eq!(err.to_string(), "status \"archived\" is not allowed");

    registry.load_status(5);
    assert_eq!(registry.status(), Some(&StatusCode::Index(5)));
    assert_eq!(registry.status_text(), "unknown");
}

#[test]
fn loading_round_trip_through_record() {
    let mut registry = StatusRegistry::new("status").expect("valid field name");
    let mut post = Post::default();

    registry.set_status("archived", &mut post).expect("valid label");

    // A fresh registry picks the code back up from the record, as the
    // host's after-load hook would.
    let mut reloaded = StatusRegistry::new("status").expect("valid field name");
    reloaded.load_from(&post);

    assert_eq!(reloaded.status(), Some(&StatusCode::Index(2)));
    assert_eq!(reloaded.status_text(), "archived");
}

#[test]
fn membership_accepts_comma_strings_and_collections() {
    let registry = StatusRegistry::new("status").expect("valid field name");
    let mut post = Post::default();
    post.set("status", StatusCode::from("b"));

    let as_string = registry.has_status(&post, "a,b,c");
    let as_vec = registry.has_status(
        &post,
        vec![
            StatusCode::from("a"),
            StatusCode::from("b"),
            StatusCode::from("c"),
        ]
    );

    assert!(as_string);
    assert_eq!(as_string, as_vec);
}

#[test]
fn filter_condition_is_parameterized() {
    let registry = StatusRegistry::new("status").expect("valid field name");
    let mut placeholders = Placeholders::new();

    let (sql, param) = registry
        .filter(StatusCode::from("published"))
        .condition(&mut placeholders);

    assert_eq!(sql, "\"status\" = $1");
    assert_eq!(param, StatusCode::from("published"));
}

#[tokio::test]
async fn save_status_persists_only_backing_field() {
    let mut registry = StatusRegistry::new("status").expect("valid field name");
    let mut post = Post::default();
    registry.set_status(1, &mut post).expect("valid code");

    let saved = registry.save_status(&mut post).await.expect("save succeeds");

    assert!(saved);
    assert_eq!(post.saved_fields, vec!["status".to_owned()]);
}

#[tokio::test]
async fn save_status_propagates_host_error() {
    let registry = StatusRegistry::new("status").expect("valid field name");
    let mut post = Post {
        fail_save: true,
        ..Post::default()
    };

    let err = registry.save_status(&mut post).await.unwrap_err();

    assert_eq!(err.to_string(), "save failed");
}
