use poise::serenity_prelude as serenity;

use herald_utils::formatting::parse_hex_color;

/// Thumbnail used on every embed-mode acknowledgement.
pub const DEFAULT_IMAGE_URL: &str = "https://cdn.discordapp.com/attachments/1438520973300338871/1448547405271142481/Gemini_Generated_Image_ws15xkws15xkws15.png?ex=693ba866&is=693a56e6&hm=9af2ef7bc5c8a2fc72f1b83920a7fccaae3c70d384b5a9faa50ac9c1fc6a6c6e&";

/// Log channel that receives unban acknowledgements.
pub const DEFAULT_UNBAN_CHANNEL_ID: u64 = 1_378_464_794_499_092_581;

/// Accent color for embeds and layout containers.
pub const DEFAULT_ACCENT_COLOR: u32 = 0x00_00_00;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AckConfig {
    pub image_url: String,
    pub unban_channel_id: serenity::ChannelId,
    pub accent_color: u32,
    /// Try the components v2 layout before the embed format.
    pub prefer_layout: bool,
}

impl Default for AckConfig {
    fn default() -> Self {
        Self {
            image_url: DEFAULT_IMAGE_URL.to_owned(),
            unban_channel_id: serenity::ChannelId::new(DEFAULT_UNBAN_CHANNEL_ID),
            accent_color: DEFAULT_ACCENT_COLOR,
            prefer_layout: true,
        }
    }
}

impl AckConfig {
    /// Read overrides from the process environment.
    ///
    /// Recognized keys: `ACK_IMAGE_URL`, `ACK_UNBAN_CHANNEL_ID`,
    /// `ACK_ACCENT_COLOR`, `ACK_PREFER_LAYOUT`. Missing or unparsable values
    /// keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let image_url = lookup("ACK_IMAGE_URL")
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.image_url);

        let unban_channel_id = lookup("ACK_UNBAN_CHANNEL_ID")
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|id| *id != 0)
            .map_or(defaults.unban_channel_id, serenity::ChannelId::new);

        let accent_color = lookup("ACK_ACCENT_COLOR")
            .and_then(|value| parse_hex_color(&value))
            .unwrap_or(defaults.accent_color);

        let prefer_layout = lookup("ACK_PREFER_LAYOUT")
            .and_then(|value| parse_flag(&value))
            .unwrap_or(defaults.prefer_layout);

        Self {
            image_url,
            unban_channel_id,
            accent_color,
            prefer_layout,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use poise::serenity_prelude as serenity;

    use super::{AckConfig, DEFAULT_UNBAN_CHANNEL_ID};

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_keeps_defaults() {
        let config = AckConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AckConfig::default());
        assert_eq!(config.unban_channel_id.get(), DEFAULT_UNBAN_CHANNEL_ID);
        assert!(config.prefer_layout);
    }

    #[test]
    fn overrides_are_applied() {
        let config = AckConfig::from_lookup(lookup_from(&[
            ("ACK_IMAGE_URL", "https://example.com/a.png"),
            ("ACK_UNBAN_CHANNEL_ID", "1234"),
            ("ACK_ACCENT_COLOR", "#36454F"),
            ("ACK_PREFER_LAYOUT", "off"),
        ]));

        assert_eq!(config.image_url, "https://example.com/a.png");
        assert_eq!(config.unban_channel_id, serenity::ChannelId::new(1234));
        assert_eq!(config.accent_color, 0x36_45_4F);
        assert!(!config.prefer_layout);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = AckConfig::from_lookup(lookup_from(&[
            ("ACK_IMAGE_URL", "   "),
            ("ACK_UNBAN_CHANNEL_ID", "not-a-number"),
            ("ACK_ACCENT_COLOR", "blue"),
            ("ACK_PREFER_LAYOUT", "maybe"),
        ]));

        assert_eq!(config, AckConfig::default());
    }

    #[test]
    fn layout_flag_accepts_explicit_words_only() {
        let on = AckConfig::from_lookup(lookup_from(&[("ACK_PREFER_LAYOUT", " YES ")]));
        let off = AckConfig::from_lookup(lookup_from(&[("ACK_PREFER_LAYOUT", "0")]));
        let unknown = AckConfig::from_lookup(lookup_from(&[("ACK_PREFER_LAYOUT", "maybe")]));

        assert!(on.prefer_layout);
        assert!(!off.prefer_layout);
        assert!(unknown.prefer_layout);
    }
}
