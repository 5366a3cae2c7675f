// src/model/properties.rs
//! Page property values.
//!
//! Each property on a page is `{ "id": ..., "type": ..., <type>: ... }`;
//! the payload lives under a key named after its type, which maps onto an
//! internally-tagged enum. Property types this client does not model are
//! preserved as [`PropertyValue::value`] = `Unsupported` rather than
//! failing the whole page parse.

use super::common::{DateValue, ObjectRef, SelectOption};
use super::rich_text::{self, RichText};
use super::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One property slot on a page: its stable ID plus the typed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    pub id: String,
    #[serde(flatten)]
    pub value: PropertyData,
}

impl PropertyValue {
    /// The property's text content, for title and rich-text properties.
    pub fn as_plain_text(&self) -> Option<String> {
        match &self.value {
            PropertyData::Title { title } => Some(rich_text::plain_text(title)),
            PropertyData::RichText { rich_text: spans } => Some(rich_text::plain_text(spans)),
            _ => None,
        }
    }
}

/// The typed payload of a page property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyData {
    Title {
        title: Vec<RichText>,
    },
    RichText {
        rich_text: Vec<RichText>,
    },
    Number {
        number: Option<f64>,
    },
    Select {
        select: Option<SelectOption>,
    },
    MultiSelect {
        multi_select: Vec<SelectOption>,
    },
    Status {
        status: Option<SelectOption>,
    },
    Date {
        date: Option<DateValue>,
    },
    People {
        people: Vec<User>,
    },
    Checkbox {
        checkbox: bool,
    },
    Url {
        url: Option<String>,
    },
    Email {
        email: Option<String>,
    },
    PhoneNumber {
        phone_number: Option<String>,
    },
    Relation {
        relation: Vec<ObjectRef>,
    },
    CreatedTime {
        created_time: DateTime<Utc>,
    },
    LastEditedTime {
        last_edited_time: DateTime<Utc>,
    },
    /// A property type this client doesn't model; the raw payload is
    /// dropped but the page still parses.
    #[serde(other)]
    Unsupported,
}
