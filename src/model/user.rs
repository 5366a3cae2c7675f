// src/model/user.rs
//! Workspace members and integration bots.

use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// A fully-resolved user object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub object: String,
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(flatten)]
    pub kind: Option<UserKind>,
}

/// Person vs. bot payload. Endpoints that return partial users omit this
/// entirely, so it is optional on [`User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UserKind {
    Person { person: Person },
    Bot { bot: serde_json::Value },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// The `{ "object": "user", "id": ... }` stub that appears in
/// `created_by`/`last_edited_by` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialUser {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub object: String,
    pub id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_person() {
        let json = r#"{
            "object": "user",
            "id": "6794760a-1f15-45cd-9c65-0dfe42f5135a",
            "name": "Ada",
            "avatar_url": null,
            "type": "person",
            "person": { "email": "ada@example.com" }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name.as_deref(), Some("Ada"));
        match user.kind {
            Some(UserKind::Person { person }) => {
                assert_eq!(person.email.as_deref(), Some("ada@example.com"))
            }
            other => panic!("expected a person, got {:?}", other),
        }
    }

    #[test]
    fn partial_users_parse_without_a_kind() {
        let json = r#"{"object": "user", "id": "6794760a1f1545cd9c650dfe42f5135a"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.kind.is_none());
    }
}
