// src/model/database.rs
//! Databases and their property schemas.

use super::common::{FileObject, Icon, Parent};
use super::rich_text::RichText;
use super::user::PartialUser;
use crate::types::{DataSourceId, DatabaseId};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A database object as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub object: String,
    pub id: DatabaseId,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<PartialUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_by: Option<PartialUser>,
    #[serde(default)]
    pub title: Vec<RichText>,
    #[serde(default)]
    pub description: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<FileObject>,
    /// Property schema: column name to column definition, in display
    /// order. Empty for multi-source databases, whose schemas live on
    /// their data sources.
    #[serde(default)]
    pub properties: IndexMap<String, DatabaseProperty>,
    pub parent: Parent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub in_trash: bool,
    #[serde(default)]
    pub is_inline: bool,
    /// The database's data sources, for API versions that expose them.
    #[serde(default)]
    pub data_sources: Vec<DataSourceRef>,
}

impl Database {
    /// The database title as plain text.
    pub fn title_text(&self) -> String {
        super::rich_text::plain_text(&self.title)
    }
}

/// Name + ID stub for a data source listed on its database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceRef {
    pub id: DataSourceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One column definition in a database schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseProperty {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub kind: DatabasePropertyKind,
}

/// Column type and its configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DatabasePropertyKind {
    Title {
        title: super::common::EmptyObject,
    },
    RichText {
        rich_text: super::common::EmptyObject,
    },
    Number {
        number: NumberConfig,
    },
    Select {
        select: OptionsConfig,
    },
    MultiSelect {
        multi_select: OptionsConfig,
    },
    Status {
        status: serde_json::Value,
    },
    Date {
        date: super::common::EmptyObject,
    },
    People {
        people: super::common::EmptyObject,
    },
    Checkbox {
        checkbox: super::common::EmptyObject,
    },
    Url {
        url: super::common::EmptyObject,
    },
    Email {
        email: super::common::EmptyObject,
    },
    PhoneNumber {
        phone_number: super::common::EmptyObject,
    },
    Relation {
        relation: serde_json::Value,
    },
    CreatedTime {
        created_time: super::common::EmptyObject,
    },
    LastEditedTime {
        last_edited_time: super::common::EmptyObject,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsConfig {
    #[serde(default)]
    pub options: Vec<super::common::SelectOption>,
}
