pub mod channel;
pub mod member;
pub mod message;
pub mod role;

pub use channel::{ChannelKind, GuildChannelInfo};
pub use member::GuildMember;
pub use message::ChatMessage;
pub use role::GuildRole;
