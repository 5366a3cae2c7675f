// src/model/rich_text.rs
//! Rich text spans and their annotations.

use serde::{Deserialize, Serialize};

/// One span of styled text inside a block, property, or comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(flatten)]
    pub kind: RichTextKind,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub plain_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl RichText {
    /// A plain unstyled text span — the common case when building request
    /// payloads.
    pub fn text(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            plain_text: content.clone(),
            kind: RichTextKind::Text {
                text: TextContent {
                    content,
                    link: None,
                },
            },
            annotations: Annotations::default(),
            href: None,
        }
    }
}

/// The payload side of a rich text span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextKind {
    Text { text: TextContent },
    Mention { mention: serde_json::Value },
    Equation { equation: EquationContent },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationContent {
    pub expression: String,
}

/// Styling flags for a rich text span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default)]
    pub color: Color,
}

impl Default for Annotations {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            strikethrough: false,
            underline: false,
            code: false,
            color: Color::Default,
        }
    }
}

/// Text and background colors the API understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
    GrayBackground,
    BrownBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
    RedBackground,
    /// A color this client doesn't recognize yet.
    #[serde(other)]
    Unknown,
}

/// Concatenates the plain text of a span sequence.
pub fn plain_text(spans: &[RichText]) -> String {
    spans.iter().map(|s| s.plain_text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_a_text_span() {
        let json = r#"{
            "type": "text",
            "text": { "content": "Hello", "link": null },
            "annotations": {
                "bold": true, "italic": false, "strikethrough": false,
                "underline": false, "code": false, "color": "default"
            },
            "plain_text": "Hello",
            "href": null
        }"#;

        let span: RichText = serde_json::from_str(json).unwrap();
        assert_eq!(span.plain_text, "Hello");
        assert!(span.annotations.bold);
        match span.kind {
            RichTextKind::Text { text } => assert_eq!(text.content, "Hello"),
            other => panic!("expected a text span, got {:?}", other),
        }
    }

    #[test]
    fn unknown_colors_do_not_fail_parsing() {
        let color: Color = serde_json::from_str(r#""ultraviolet""#).unwrap();
        assert_eq!(color, Color::Unknown);
    }

    #[test]
    fn plain_text_concatenates_spans() {
        let spans = vec![RichText::text("Hello, "), RichText::text("world")];
        assert_eq!(plain_text(&spans), "Hello, world");
    }
}
