//! The editable `**Reason:**` line and the identifiers that route edits back
//! to it.

use std::sync::LazyLock;

use poise::serenity_prelude as serenity;
use regex::Regex;

/// Custom id prefix of the button that opens the reason form.
pub const REASON_PREFIX: &str = "reason_";
/// Custom id prefix of the reason form itself. Must be matched before
/// [`REASON_PREFIX`], which it contains.
pub const REASON_MODAL_PREFIX: &str = "reason_modal_";
/// Custom id of the paragraph input inside the reason form.
pub const REASON_INPUT_ID: &str = "reason_input";

pub const REASON_MARKER: &str = "**Reason:**";
/// Lines containing this phrase describe the action; a missing reason line is
/// inserted right after the first one.
pub const ACTION_MARKER: &str = "has been";
pub const DEFAULT_REASON: &str = "No reason provided";

pub const REASON_FORM_TITLE: &str = "Reason Details";
pub const REASON_MAX_LENGTH: u16 = 1000;

static REASON_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Reason:\*\*\s*(.+)").expect("valid reason regex"));

pub fn reason_button_id(correlation_id: &str) -> String {
    format!("{REASON_PREFIX}{correlation_id}")
}

pub fn reason_modal_id(correlation_id: &str) -> String {
    format!("{REASON_MODAL_PREFIX}{correlation_id}")
}

/// Multi-line reasons are folded onto the single line later edits replace.
pub fn reason_line(reason: &str) -> String {
    let reason = reason
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{REASON_MARKER} {reason}")
}

/// Replace the first reason line, or insert one after the first action line,
/// or append one. Every other line keeps its position.
pub fn upsert_reason_line(description: &str, reason: &str) -> String {
    let mut lines: Vec<String> = description.split('\n').map(str::to_owned).collect();
    let new_line = reason_line(reason);

    if let Some(index) = lines.iter().position(|line| line.starts_with(REASON_MARKER)) {
        lines[index] = new_line;
    } else if let Some(index) = lines.iter().position(|line| line.contains(ACTION_MARKER)) {
        lines.insert(index + 1, new_line);
    } else {
        lines.push(new_line);
    }

    lines.join("\n")
}

/// Text following the first `**Reason:**` marker, if any.
pub fn extract_reason(description: &str) -> Option<String> {
    REASON_PATTERN
        .captures(description)
        .and_then(|captures| captures.get(1))
        .map(|reason| reason.as_str().to_owned())
}

/// Pop-up form pre-filled with the current reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReasonForm {
    pub custom_id: String,
    pub existing_reason: String,
}

impl ReasonForm {
    pub fn new(correlation_id: &str, existing_reason: impl Into<String>) -> Self {
        Self {
            custom_id: reason_modal_id(correlation_id),
            existing_reason: existing_reason.into(),
        }
    }

    pub fn to_modal(&self) -> serenity::CreateModal {
        let input = serenity::CreateInputText::new(
            serenity::InputTextStyle::Paragraph,
            "Enter or modify the reason",
            REASON_INPUT_ID,
        )
        .placeholder("Provide reason here...")
        .value(self.existing_reason.clone())
        .max_length(REASON_MAX_LENGTH)
        .required(true);

        serenity::CreateModal::new(self.custom_id.clone(), REASON_FORM_TITLE)
            .components(vec![serenity::CreateActionRow::InputText(input)])
    }
}
