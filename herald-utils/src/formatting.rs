use poise::serenity_prelude as serenity;

/// Discord timestamp rendering styles (`<t:SECS:STYLE>`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimestampStyle {
    LongTime,
    ShortDateTime,
    Relative,
}

impl TimestampStyle {
    fn code(self) -> char {
        match self {
            TimestampStyle::LongTime => 'T',
            TimestampStyle::ShortDateTime => 'f',
            TimestampStyle::Relative => 'R',
        }
    }
}

/// Format a unix timestamp as a client-rendered Discord timestamp token.
pub fn discord_timestamp(unix_secs: u64, style: TimestampStyle) -> String {
    format!("<t:{}:{}>", unix_secs, style.code())
}

/// Format a user mention token (e.g. 42 -> "<@42>").
pub fn user_mention(user_id: serenity::UserId) -> String {
    format!("<@{}>", user_id.get())
}

/// Public profile link for a user.
pub fn profile_url(user_id: serenity::UserId) -> String {
    format!("https://discord.com/users/{}", user_id.get())
}

/// Human-readable account tag: `name#1234` for legacy accounts, plain username otherwise.
pub fn user_tag(user: &serenity::User) -> String {
    match user.discriminator {
        Some(discriminator) => format!("{}#{:04}", user.name, discriminator.get()),
        None => user.name.clone(),
    }
}

/// Parse a hex color like `#36454F`, `0x36454F` or `36454f`.
pub fn parse_hex_color(raw: &str) -> Option<u32> {
    let value = raw.trim();
    let digits = value
        .strip_prefix('#')
        .or_else(|| value.strip_prefix("0x"))
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    if digits.is_empty() || digits.len() > 6 {
        return None;
    }

    u32::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::{
        TimestampStyle, discord_timestamp, parse_hex_color, profile_url, user_mention,
    };
    use poise::serenity_prelude as serenity;
    use rstest::rstest;

    #[rstest]
    #[case(TimestampStyle::LongTime, "<t:1700000000:T>")]
    #[case(TimestampStyle::ShortDateTime, "<t:1700000000:f>")]
    #[case(TimestampStyle::Relative, "<t:1700000000:R>")]
    fn timestamps_use_style_codes(#[case] style: TimestampStyle, #[case] expected: &str) {
        assert_eq!(discord_timestamp(1_700_000_000, style), expected);
    }

    #[test]
    fn mentions_and_profile_links() {
        let user_id = serenity::UserId::new(99);
        assert_eq!(user_mention(user_id), "<@99>");
        assert_eq!(profile_url(user_id), "https://discord.com/users/99");
    }

    #[rstest]
    #[case("000000", Some(0))]
    #[case("#36454F", Some(0x36_45_4F))]
    #[case("0x905530", Some(0x90_55_30))]
    #[case("  ffffff ", Some(0xFF_FF_FF))]
    #[case("", None)]
    #[case("#", None)]
    #[case("1234567", None)]
    #[case("zzzzzz", None)]
    fn parses_hex_colors(#[case] raw: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_hex_color(raw), expected);
    }
}
