use serde::{Deserialize, Serialize};

/// Who gets to see a reply in the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Only the user who ran the command.
    Ephemeral,
    InChannel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextType {
    Mrkdwn,
    PlainText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub kind: TextType,
    pub text: String,
}

/// Message fragment of a chat reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section { text: TextObject },
    Image { image_url: String, alt_text: String },
}

impl Block {
    pub fn markdown_section(text: impl Into<String>) -> Self {
        Block::Section {
            text: TextObject {
                kind: TextType::Mrkdwn,
                text: text.into(),
            },
        }
    }

    pub fn image(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Block::Image {
            image_url: image_url.into(),
            alt_text: alt_text.into(),
        }
    }
}

/// Body returned to the chat platform for a slash command.
///
/// Fields left as `None` (or an empty block list) are not serialized, so a
/// plain error reply only carries `response_type` and `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
}

impl ChatResponse {
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: Some(ResponseType::Ephemeral),
            text: Some(text.into()),
            blocks: Vec::new(),
        }
    }

    pub fn with_blocks(response_type: Option<ResponseType>, blocks: Vec<Block>) -> Self {
        Self {
            response_type,
            text: None,
            blocks,
        }
    }
}
