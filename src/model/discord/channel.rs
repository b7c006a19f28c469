//! Discord guild channel domain model.

use serenity::all::{ChannelId, ChannelType, GuildChannel};

use crate::model::channel_config::ChannelConfig;

/// Coarse channel kind; only the distinction between voice and text matters here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Text,
    Voice,
    Other,
}

impl From<ChannelType> for ChannelKind {
    fn from(kind: ChannelType) -> Self {
        match kind {
            ChannelType::Text | ChannelType::News => ChannelKind::Text,
            ChannelType::Voice | ChannelType::Stage => ChannelKind::Voice,
            _ => ChannelKind::Other,
        }
    }
}

/// Channel within a guild with the fields needed for name lookups and topic config.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildChannelInfo {
    /// Discord channel ID.
    pub id: ChannelId,
    /// Channel display name.
    pub name: String,
    /// Voice, text or anything else.
    pub kind: ChannelKind,
    /// Free-text topic, only set on text channels.
    pub topic: Option<String>,
}

impl GuildChannelInfo {
    #[cfg(test)]
    pub fn new(id: ChannelId, name: impl Into<String>, kind: ChannelKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            topic: None,
        }
    }

    #[cfg(test)]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Parses the `key:value` settings from this channel's topic.
    pub fn config(&self) -> ChannelConfig {
        ChannelConfig::parse(self.topic.as_deref())
    }

    /// Finds the first text channel with exactly the given name.
    ///
    /// Voice and other channels sharing the name are skipped, since only text
    /// channels can hold messages.
    pub fn find_text_by_name<'a>(
        channels: &'a [GuildChannelInfo],
        name: &str,
    ) -> Option<&'a GuildChannelInfo> {
        channels
            .iter()
            .find(|channel| channel.kind == ChannelKind::Text && channel.name == name)
    }
}

impl From<&GuildChannel> for GuildChannelInfo {
    fn from(channel: &GuildChannel) -> Self {
        Self {
            id: channel.id,
            name: channel.name.clone(),
            kind: channel.kind.into(),
            topic: channel.topic.clone(),
        }
    }
}
