//! Per-channel configuration stored in a text channel's topic.
//!
//! A topic such as `Waiting room log tz:Europe/Stockholm` configures the channel
//! with `tz = Europe/Stockholm`. Tokens are `key:value` pairs where the key is
//! made of lowercase letters, digits, `-` and `_`, and the value runs until the
//! next whitespace. There is no quoting or escaping, so values cannot contain
//! spaces. Everything in the topic that is not a token is ignored.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-z0-9_-]+):(\S*)").expect("channel config token pattern is valid")
});

/// Key/value settings parsed from a channel topic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelConfig {
    values: HashMap<String, String>,
}

impl ChannelConfig {
    /// Parses all `key:value` tokens from a channel topic.
    ///
    /// Tokens are matched left to right; when a key appears more than once the
    /// last occurrence wins.
    ///
    /// # Arguments
    /// - `topic` - Channel topic, `None` when the channel has no topic set
    ///
    /// # Returns
    /// - `ChannelConfig` - Parsed settings, empty when the topic is absent or has
    ///   no tokens
    pub fn parse(topic: Option<&str>) -> Self {
        let Some(topic) = topic else {
            return Self::default();
        };

        let values = TOKEN_PATTERN
            .captures_iter(topic)
            .map(|caps| (caps[1].to_string(), caps[2].to_string()))
            .collect();

        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
