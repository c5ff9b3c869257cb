use poise::serenity_prelude as serenity;

use herald_utils::formatting::{
    TimestampStyle, discord_timestamp, profile_url, user_mention, user_tag,
};

use crate::config::AckConfig;
use crate::layout::{
    ActionRow, Container, LayoutButton, LayoutComponent, LayoutMessage, SeparatorSpacing,
};
use crate::reason::{DEFAULT_REASON, reason_button_id, reason_line};

pub const REASON_BUTTON_LABEL: &str = "Reason Details";
pub const EDIT_REASON_BUTTON_LABEL: &str = "Edit Reason";
pub const PROFILE_BUTTON_LABEL: &str = "View Profile";

const REASON_EMOJI: char = '📝';
const PROFILE_EMOJI: char = '👤';

/// Which rendering reached the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AckFormat {
    /// Components v2 container with stacked text blocks.
    Layout,
    /// Single embed with thumbnail and timestamp footer.
    Embed,
}

/// Per-call knobs for [`crate::AcknowledgementService::send`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AckOptions {
    pub ephemeral: bool,
    pub reason_button: bool,
    /// Correlation id for the reason button; defaults to the send time in
    /// milliseconds.
    pub correlation_id: Option<String>,
    pub follow_up: bool,
    pub prefer_layout: bool,
}

impl Default for AckOptions {
    fn default() -> Self {
        Self {
            ephemeral: false,
            reason_button: false,
            correlation_id: None,
            follow_up: false,
            prefer_layout: true,
        }
    }
}

impl AckOptions {
    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }

    pub fn with_reason_button(mut self, correlation_id: Option<String>) -> Self {
        self.reason_button = true;
        self.correlation_id = correlation_id;
        self
    }

    pub fn follow_up(mut self) -> Self {
        self.follow_up = true;
        self
    }

    pub fn embed_only(mut self) -> Self {
        self.prefer_layout = false;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AckButton {
    /// Opens the reason form for this acknowledgement.
    Reason {
        correlation_id: String,
        label: &'static str,
    },
    /// Link to a user's public profile.
    Profile { user_id: serenity::UserId },
}

impl AckButton {
    pub fn custom_id(&self) -> Option<String> {
        match self {
            AckButton::Reason { correlation_id, .. } => Some(reason_button_id(correlation_id)),
            AckButton::Profile { .. } => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AckButton::Reason { label, .. } => *label,
            AckButton::Profile { .. } => PROFILE_BUTTON_LABEL,
        }
    }

    fn to_button(&self) -> serenity::CreateButton {
        match self {
            AckButton::Reason { correlation_id, label } => {
                serenity::CreateButton::new(reason_button_id(correlation_id))
                    .label(*label)
                    .style(serenity::ButtonStyle::Secondary)
                    .emoji(REASON_EMOJI)
            }
            AckButton::Profile { user_id } => serenity::CreateButton::new_link(profile_url(*user_id))
                .label(PROFILE_BUTTON_LABEL)
                .emoji(PROFILE_EMOJI),
        }
    }

    fn to_layout_button(&self) -> LayoutButton {
        match self {
            AckButton::Reason { correlation_id, label } => {
                LayoutButton::secondary(reason_button_id(correlation_id), *label)
                    .emoji(REASON_EMOJI.to_string())
            }
            AckButton::Profile { user_id } => {
                LayoutButton::link(profile_url(*user_id), PROFILE_BUTTON_LABEL)
                    .emoji(PROFILE_EMOJI.to_string())
            }
        }
    }
}

/// A rendered acknowledgement, independent of the format it is sent in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedMessage {
    /// Unix seconds shown in the time line and the embed footer.
    pub issued_at: u64,
    pub executor: serenity::UserId,
    pub body: String,
    pub thumbnail_url: String,
    pub accent_color: u32,
    pub buttons: Vec<AckButton>,
    pub ephemeral: bool,
}

impl RenderedMessage {
    /// Time and executor lines.
    pub fn header(&self) -> String {
        format!(
            "**Time:** {}\n**Executed by:** {}",
            discord_timestamp(self.issued_at, TimestampStyle::LongTime),
            user_mention(self.executor)
        )
    }

    pub fn description(&self) -> String {
        format!("{}\n{}", self.header(), self.body)
    }

    /// Ids of every button that carries one, in display order.
    pub fn button_ids(&self) -> Vec<String> {
        self.buttons.iter().filter_map(AckButton::custom_id).collect()
    }

    pub fn to_embed(&self) -> serenity::CreateEmbed {
        let timestamp = i64::try_from(self.issued_at)
            .ok()
            .and_then(|secs| serenity::Timestamp::from_unix_timestamp(secs).ok())
            .unwrap_or_else(serenity::Timestamp::now);

        serenity::CreateEmbed::new()
            .color(self.accent_color)
            .description(self.description())
            .thumbnail(self.thumbnail_url.clone())
            .timestamp(timestamp)
    }

    /// Zero rows when there are no buttons; Discord rejects empty rows.
    pub fn action_rows(&self) -> Vec<serenity::CreateActionRow> {
        if self.buttons.is_empty() {
            return Vec::new();
        }

        vec![serenity::CreateActionRow::Buttons(
            self.buttons.iter().map(AckButton::to_button).collect(),
        )]
    }

    pub fn to_layout(&self) -> LayoutMessage {
        let container = Container::new(self.accent_color)
            .text(self.header())
            .separator(SeparatorSpacing::Large)
            .text(self.body.clone());

        let mut components = vec![LayoutComponent::Container(container)];
        if !self.buttons.is_empty() {
            components.push(LayoutComponent::ActionRow(ActionRow::new(
                self.buttons.iter().map(AckButton::to_layout_button).collect(),
            )));
        }

        LayoutMessage::new(components, self.ephemeral)
    }
}

/// Render an acknowledgement issued at `issued_at_millis`.
pub fn render_at(
    config: &AckConfig,
    executor: serenity::UserId,
    body: &str,
    options: &AckOptions,
    issued_at_millis: u128,
) -> RenderedMessage {
    let mut buttons = Vec::new();
    if options.reason_button {
        let correlation_id = options
            .correlation_id
            .clone()
            .unwrap_or_else(|| issued_at_millis.to_string());
        buttons.push(AckButton::Reason {
            correlation_id,
            label: REASON_BUTTON_LABEL,
        });
    }

    RenderedMessage {
        issued_at: u64::try_from(issued_at_millis / 1000).unwrap_or(u64::MAX),
        executor,
        body: body.to_owned(),
        thumbnail_url: config.image_url.clone(),
        accent_color: config.accent_color,
        buttons,
        ephemeral: options.ephemeral,
    }
}

/// The user an unban acknowledgement is about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnbanSubject {
    pub id: serenity::UserId,
    pub tag: String,
}

impl From<&serenity::User> for UnbanSubject {
    fn from(user: &serenity::User) -> Self {
        Self {
            id: user.id,
            tag: user_tag(user),
        }
    }
}

/// Body line for an unban, with the reason line the form edits.
pub fn unban_body(subject: &UnbanSubject, reason: Option<&str>) -> String {
    format!(
        "User {} ({}) has been unbanned\n{}",
        user_mention(subject.id),
        subject.tag,
        reason_line(reason.unwrap_or(DEFAULT_REASON))
    )
}

/// Unban acknowledgement: edit-reason and view-profile buttons, embed only.
pub fn render_unban_at(
    config: &AckConfig,
    subject: &UnbanSubject,
    executor: serenity::UserId,
    reason: Option<&str>,
    issued_at_millis: u128,
) -> RenderedMessage {
    let mut message = render_at(
        config,
        executor,
        &unban_body(subject, reason),
        &AckOptions::default().embed_only(),
        issued_at_millis,
    );

    message.buttons = vec![
        AckButton::Reason {
            correlation_id: format!("unban_{}_{}", subject.id.get(), issued_at_millis),
            label: EDIT_REASON_BUTTON_LABEL,
        },
        AckButton::Profile {
            user_id: subject.id,
        },
    ];

    message
}
