use serenity::all::{ChannelId, GuildId, MessageId, RoleId, UserId};
use test_utils::serenity::{
    create_test_channel, create_test_member, create_test_message, create_test_role,
    message::create_test_message_with_mentions,
};

use crate::data::discord::permission::is_administrator;
use crate::model::discord::{ChannelKind, ChatMessage, GuildChannelInfo, GuildMember, GuildRole};

mod conversion;
