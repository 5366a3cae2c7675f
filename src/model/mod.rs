// src/model/mod.rs
//! Typed models mirroring the Notion API's wire schema.
//!
//! Parsing is deliberately forgiving at the edges: unknown block types,
//! property types, and colors degrade to `Unsupported`/`Unknown` variants
//! instead of failing whole responses, because the remote schema grows
//! faster than any client.

mod block;
mod comment;
mod common;
mod data_source;
mod database;
mod file_upload;
mod page;
mod properties;
mod rich_text;
mod user;

pub use block::{
    Block, BlockKind, BookmarkBlock, CalloutBlock, ChildTitle, CodeBlock, EmbedBlock,
    EquationBlock, HeadingBlock, TextBlock, ToDoBlock,
};
pub use comment::Comment;
pub use common::{
    DateValue, EmptyObject, ExternalFile, FileObject, FileUploadRef, HostedFile, Icon, ObjectRef,
    Parent, SelectOption,
};
pub use data_source::DataSource;
pub use database::{
    DataSourceRef, Database, DatabaseProperty, DatabasePropertyKind, NumberConfig, OptionsConfig,
};
pub use file_upload::{FileUpload, FileUploadMode, FileUploadStatus, PartProgress};
pub use page::Page;
pub use properties::{PropertyData, PropertyValue};
pub use rich_text::{
    plain_text, Annotations, Color, EquationContent, Link, RichText, RichTextKind, TextContent,
};
pub use user::{PartialUser, Person, User, UserKind};

use serde::{Deserialize, Serialize};

/// Any top-level object the search endpoint can return, discriminated by
/// its `object` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "object", rename_all = "snake_case")]
pub enum Object {
    Page(Box<Page>),
    Database(Box<Database>),
    DataSource(Box<DataSource>),
}

impl Object {
    /// The object's title, whichever shape it is.
    pub fn title(&self) -> Option<String> {
        match self {
            Object::Page(page) => page.title(),
            Object::Database(database) => Some(database.title_text()),
            Object::DataSource(source) => source
                .name
                .clone()
                .or_else(|| Some(plain_text(&source.title))),
        }
    }
}
