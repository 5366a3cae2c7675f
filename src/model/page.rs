// src/model/page.rs
//! Pages — the rows and documents of a workspace.

use super::common::{FileObject, Icon, Parent};
use super::properties::PropertyValue;
use super::user::PartialUser;
use crate::types::PageId;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A page object as returned by the API.
///
/// Properties keep the order the service sent them in, which mirrors the
/// column order users see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub object: String,
    pub id: PageId,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<PartialUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_by: Option<PartialUser>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub in_trash: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<FileObject>,
    pub parent: Parent,
    pub properties: IndexMap<String, PropertyValue>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
}

impl Page {
    /// The page title, taken from its title property if present.
    pub fn title(&self) -> Option<String> {
        self.properties
            .values()
            .find_map(|prop| match &prop.value {
                super::properties::PropertyData::Title { .. } => prop.as_plain_text(),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_page() {
        let json = r#"{
            "object": "page",
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
            "created_time": "2022-03-01T19:05:00.000Z",
            "last_edited_time": "2022-07-06T19:16:00.000Z",
            "created_by": {"object": "user", "id": "ee5f0f84-409a-440f-983a-a5315961c6e4"},
            "archived": false,
            "parent": {"type": "database_id", "database_id": "d9824bdc-8445-4327-be8b-5b47500af6ce"},
            "properties": {
                "Name": {
                    "id": "title",
                    "type": "title",
                    "title": [{"type": "text", "text": {"content": "Tuscan kale"}, "plain_text": "Tuscan kale"}]
                }
            },
            "url": "https://www.notion.so/Tuscan-kale-598337872cf94fdf8782e53db20768a5"
        }"#;

        let page: Page = serde_json::from_str(json).unwrap();
        assert_eq!(page.id.as_str(), "598337872cf94fdf8782e53db20768a5");
        assert_eq!(page.title().as_deref(), Some("Tuscan kale"));
        assert!(!page.archived);
    }
}
