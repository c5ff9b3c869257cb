pub mod moderation;
pub mod utility;

use herald_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::ping::META,
    moderation::ban::META,
    moderation::kick::META,
    moderation::unban::META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        utility::ping::ping(),
        moderation::ban::ban(),
        moderation::kick::kick(),
        moderation::unban::unban(),
    ]
}
