//! In-memory guild used to exercise behaviors without Discord.
//!
//! `MockGuild` keeps roles, channels and messages in memory and records every
//! mutating call so tests can assert on exactly what would have been sent to the
//! platform. Individual operations can be made to fail or hang.

use std::collections::HashSet;
use std::future;
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use serenity::all::{ChannelId, MessageId, RoleId, UserId};
use serenity::async_trait;

use crate::data::discord::GuildApi;
use crate::error::AppError;
use crate::model::discord::{ChannelKind, ChatMessage, GuildChannelInfo, GuildMember, GuildRole};
use crate::util::clock::Clock;


pub const BOT_ID: UserId = UserId::new(1);
pub const ADMIN_ID: UserId = UserId::new(10);
pub const USER_ID: UserId = UserId::new(20);

/// A platform mutation performed through the mock.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    AddRole(UserId, RoleId),
    RemoveRole(UserId, RoleId),
    Send {
        channel_id: ChannelId,
        content: String,
    },
    Edit {
        channel_id: ChannelId,
        message_id: MessageId,
        content: String,
    },
    Delete {
        channel_id: ChannelId,
        message_id: MessageId,
    },
    DeleteAfter {
        channel_id: ChannelId,
        message_id: MessageId,
        delay: Duration,
    },
    FileReply {
        channel_id: ChannelId,
        reply_to: MessageId,
        filename: String,
        data: Vec<u8>,
    },
}

#[derive(Default)]
struct MockState {
    /// Stored oldest first.
    messages: Vec<ChatMessage>,
    next_message_id: u64,
    calls: Vec<Call>,
}

pub struct MockGuild {
    roles: Vec<GuildRole>,
    channels: Vec<GuildChannelInfo>,
    admins: Vec<UserId>,
    failing: HashSet<&'static str>,
    hanging: HashSet<&'static str>,
    state: Mutex<MockState>,
}

impl MockGuild {
    pub fn new() -> Self {
        Self {
            roles: Vec::new(),
            channels: Vec::new(),
            admins: vec![ADMIN_ID],
            failing: HashSet::new(),
            hanging: HashSet::new(),
            state: Mutex::new(MockState {
                next_message_id: 1000,
                ..Default::default()
            }),
        }
    }

    pub fn with_role(mut self, id: u64, name: &str) -> Self {
        self.roles.push(GuildRole::new(RoleId::new(id), name));
        self
    }

    pub fn with_channel(mut self, channel: GuildChannelInfo) -> Self {
        self.channels.push(channel);
        self
    }

    /// Makes the named operation return an error.
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    /// Makes the named operation never complete.
    pub fn hanging(mut self, operation: &'static str) -> Self {
        self.hanging.insert(operation);
        self
    }

    /// Stores a message as if it had been posted earlier.
    pub fn insert_message(
        &self,
        channel_id: ChannelId,
        author_id: UserId,
        content: &str,
        reference: Option<MessageId>,
    ) -> MessageId {
        let mut state = self.state.lock().unwrap();
        let id = MessageId::new(state.next_message_id);
        state.next_message_id += 1;
        state.messages.push(ChatMessage {
            id,
            channel_id,
            author_id,
            content: content.to_string(),
            reference,
            mentions: Vec::new(),
        });
        id
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn message_content(&self, message_id: MessageId) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .messages
            .iter()
            .find(|m| m.id == message_id)
            .map(|m| m.content.clone())
    }

    /// Messages in a channel, oldest first.
    pub fn channel_messages(&self, channel_id: ChannelId) -> Vec<ChatMessage> {
        self.state
            .lock()
            .unwrap()
            .messages
            .iter()
            .filter(|m| m.channel_id == channel_id)
            .cloned()
            .collect()
    }

    async fn check(&self, operation: &'static str) -> Result<(), AppError> {
        if self.hanging.contains(operation) {
            future::pending::<()>().await;
        }
        if self.failing.contains(operation) {
            return Err(serenity::Error::Other("Missing Permissions").into());
        }
        Ok(())
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }
}

#[async_trait]
impl GuildApi for MockGuild {
    fn bot_user_id(&self) -> UserId {
        BOT_ID
    }

    async fn roles(&self) -> Result<Vec<GuildRole>, AppError> {
        self.check("roles").await?;
        Ok(self.roles.clone())
    }

    async fn channels(&self) -> Result<Vec<GuildChannelInfo>, AppError> {
        self.check("channels").await?;
        Ok(self.channels.clone())
    }

    async fn member(&self, user_id: UserId) -> Result<Option<GuildMember>, AppError> {
        self.check("member").await?;
        Ok(Some(GuildMember::new(user_id, format!("user{}", user_id))))
    }

    async fn is_administrator(&self, user_id: UserId) -> Result<bool, AppError> {
        self.check("is_administrator").await?;
        Ok(self.admins.contains(&user_id))
    }

    async fn add_member_role(&self, user_id: UserId, role_id: RoleId) -> Result<(), AppError> {
        self.check("add_member_role").await?;
        self.record(Call::AddRole(user_id, role_id));
        Ok(())
    }

    async fn remove_member_role(&self, user_id: UserId, role_id: RoleId) -> Result<(), AppError> {
        self.check("remove_member_role").await?;
        self.record(Call::RemoveRole(user_id, role_id));
        Ok(())
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        content: &str,
    ) -> Result<ChatMessage, AppError> {
        self.check("send_message").await?;
        self.record(Call::Send {
            channel_id,
            content: content.to_string(),
        });

        let id = self.insert_message(channel_id, BOT_ID, content, None);
        Ok(ChatMessage {
            id,
            channel_id,
            author_id: BOT_ID,
            content: content.to_string(),
            reference: None,
            mentions: Vec::new(),
        })
    }

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<(), AppError> {
        self.check("edit_message").await?;

        let mut state = self.state.lock().unwrap();
        let message = state
            .messages
            .iter_mut()
            .find(|m| m.id == message_id && m.channel_id == channel_id)
            .ok_or(serenity::Error::Other("Unknown Message"))?;
        message.content = content.to_string();

        state.calls.push(Call::Edit {
            channel_id,
            message_id,
            content: content.to_string(),
        });
        Ok(())
    }

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError> {
        self.check("delete_message").await?;

        let mut state = self.state.lock().unwrap();
        state.messages.retain(|m| m.id != message_id);
        state.calls.push(Call::Delete {
            channel_id,
            message_id,
        });
        Ok(())
    }

    fn delete_message_after(&self, channel_id: ChannelId, message_id: MessageId, delay: Duration) {
        self.record(Call::DeleteAfter {
            channel_id,
            message_id,
            delay,
        });
    }

    async fn message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Option<ChatMessage>, AppError> {
        self.check("message").await?;

        Ok(self
            .state
            .lock()
            .unwrap()
            .messages
            .iter()
            .find(|m| m.id == message_id && m.channel_id == channel_id)
            .cloned())
    }

    async fn message_history(
        &self,
        channel_id: ChannelId,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, AppError> {
        self.check("message_history").await?;

        Ok(self
            .state
            .lock()
            .unwrap()
            .messages
            .iter()
            .rev()
            .filter(|m| m.channel_id == channel_id)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn send_file_reply(
        &self,
        channel_id: ChannelId,
        reply_to: MessageId,
        filename: &str,
        data: Vec<u8>,
    ) -> Result<ChatMessage, AppError> {
        self.check("send_file_reply").await?;
        self.record(Call::FileReply {
            channel_id,
            reply_to,
            filename: filename.to_string(),
            data,
        });

        let id = self.insert_message(channel_id, BOT_ID, "", Some(reply_to));
        Ok(ChatMessage {
            id,
            channel_id,
            author_id: BOT_ID,
            content: String::new(),
            reference: Some(reply_to),
            mentions: Vec::new(),
        })
    }
}

/// Clock pinned to a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(hour: u32, minute: u32, second: u32) -> Self {
        Self(
            Utc.with_ymd_and_hms(2024, 1, 15, hour, minute, second)
                .unwrap(),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn voice_channel(id: u64, name: &str) -> GuildChannelInfo {
    GuildChannelInfo::new(ChannelId::new(id), name, ChannelKind::Voice)
}

pub fn text_channel(id: u64, name: &str) -> GuildChannelInfo {
    GuildChannelInfo::new(ChannelId::new(id), name, ChannelKind::Text)
}

pub fn member(user_id: UserId) -> GuildMember {
    GuildMember::new(user_id, format!("user{}", user_id))
}
