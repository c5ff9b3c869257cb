//! Components v2 payloads.
//!
//! serenity 0.12 has no builders for containers, text displays or
//! separators, so layout-mode messages are serialized from these types and
//! sent through the raw interaction endpoints.

use serde::Serialize;

/// `IS_COMPONENTS_V2` message flag.
pub const IS_COMPONENTS_V2: u64 = 1 << 15;
/// `EPHEMERAL` message flag.
pub const EPHEMERAL: u64 = 1 << 6;

const CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;

const ACTION_ROW: u8 = 1;
const BUTTON: u8 = 2;
const TEXT_DISPLAY: u8 = 10;
const SEPARATOR: u8 = 14;
const CONTAINER: u8 = 17;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeparatorSpacing {
    Small,
    Large,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextDisplay {
    #[serde(rename = "type")]
    kind: u8,
    pub content: String,
}

impl TextDisplay {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            kind: TEXT_DISPLAY,
            content: content.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Separator {
    #[serde(rename = "type")]
    kind: u8,
    pub divider: bool,
    pub spacing: u8,
}

impl Separator {
    pub fn divider(spacing: SeparatorSpacing) -> Self {
        Self {
            kind: SEPARATOR,
            divider: true,
            spacing: match spacing {
                SeparatorSpacing::Small => 1,
                SeparatorSpacing::Large => 2,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContainerItem {
    Text(TextDisplay),
    Separator(Separator),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Container {
    #[serde(rename = "type")]
    kind: u8,
    pub accent_color: u32,
    pub components: Vec<ContainerItem>,
}

impl Container {
    pub fn new(accent_color: u32) -> Self {
        Self {
            kind: CONTAINER,
            accent_color,
            components: Vec::new(),
        }
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.components
            .push(ContainerItem::Text(TextDisplay::new(content)));
        self
    }

    pub fn separator(mut self, spacing: SeparatorSpacing) -> Self {
        self.components
            .push(ContainerItem::Separator(Separator::divider(spacing)));
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PartialEmoji {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LayoutButton {
    #[serde(rename = "type")]
    kind: u8,
    pub style: u8,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<PartialEmoji>,
}

impl LayoutButton {
    /// Secondary (grey) button carrying a custom id.
    pub fn secondary(custom_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: BUTTON,
            style: 2,
            label: label.into(),
            custom_id: Some(custom_id.into()),
            url: None,
            emoji: None,
        }
    }

    pub fn link(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: BUTTON,
            style: 5,
            label: label.into(),
            custom_id: None,
            url: Some(url.into()),
            emoji: None,
        }
    }

    pub fn emoji(mut self, name: impl Into<String>) -> Self {
        self.emoji = Some(PartialEmoji { name: name.into() });
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActionRow {
    #[serde(rename = "type")]
    kind: u8,
    pub components: Vec<LayoutButton>,
}

impl ActionRow {
    pub fn new(components: Vec<LayoutButton>) -> Self {
        Self {
            kind: ACTION_ROW,
            components,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LayoutComponent {
    Container(Container),
    ActionRow(ActionRow),
}

/// Message body for a layout-mode send or edit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LayoutMessage {
    pub flags: u64,
    pub components: Vec<LayoutComponent>,
}

impl LayoutMessage {
    pub fn new(components: Vec<LayoutComponent>, ephemeral: bool) -> Self {
        let flags = if ephemeral {
            IS_COMPONENTS_V2 | EPHEMERAL
        } else {
            IS_COMPONENTS_V2
        };

        Self { flags, components }
    }

    pub fn is_ephemeral(&self) -> bool {
        self.flags & EPHEMERAL != 0
    }

    /// Edits cannot toggle visibility, so the ephemeral bit is dropped.
    pub fn for_edit(&self) -> Self {
        Self {
            flags: self.flags & !EPHEMERAL,
            components: self.components.clone(),
        }
    }

    /// Wrap as an initial interaction response.
    pub fn as_response(&self) -> LayoutResponse<'_> {
        LayoutResponse {
            kind: CHANNEL_MESSAGE_WITH_SOURCE,
            data: self,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse<'a> {
    #[serde(rename = "type")]
    kind: u8,
    data: &'a LayoutMessage,
}
