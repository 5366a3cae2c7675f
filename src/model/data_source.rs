// src/model/data_source.rs
//! Data sources — the queryable tables behind a database.

use super::common::Parent;
use super::database::DatabaseProperty;
use super::rich_text::RichText;
use crate::types::DataSourceId;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A data source object as returned by the API.
///
/// Shares its row shape with [`super::page::Page`]: querying a data source
/// returns pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub object: String,
    pub id: DataSourceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Vec<RichText>,
    #[serde(default)]
    pub description: Vec<RichText>,
    #[serde(default)]
    pub properties: IndexMap<String, DatabaseProperty>,
    pub parent: Parent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub in_trash: bool,
}
