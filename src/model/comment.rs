// src/model/comment.rs
//! Comments on pages and blocks.

use super::common::Parent;
use super::rich_text::RichText;
use super::user::PartialUser;
use crate::types::CommentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment object as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub object: String,
    pub id: CommentId,
    pub parent: Parent,
    /// Comments on the same thread share a discussion ID.
    pub discussion_id: String,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    pub created_by: PartialUser,
    pub rich_text: Vec<RichText>,
}

impl Comment {
    /// The comment body as plain text.
    pub fn text(&self) -> String {
        super::rich_text::plain_text(&self.rich_text)
    }
}
