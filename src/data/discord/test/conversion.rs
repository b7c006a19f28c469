use super::*;

/// Tests converting a reply message.
///
/// Expected: IDs, author, raw content and reply target carried over
#[test]
fn converts_reply_message() {
    let message = create_test_message(101, 5, 42, "-static **bold**", Some(100));

    let converted = ChatMessage::from(&message);

    assert_eq!(converted.id, MessageId::new(101));
    assert_eq!(converted.channel_id, ChannelId::new(5));
    assert_eq!(converted.author_id, UserId::new(42));
    assert_eq!(converted.content, "-static **bold**");
    assert_eq!(converted.reference, Some(MessageId::new(100)));
}

/// Tests converting a message that is not a reply.
///
/// Expected: no reference
#[test]
fn converts_plain_message() {
    let message = create_test_message(100, 5, 42, "hello", None);

    assert_eq!(ChatMessage::from(&message).reference, None);
}

/// Tests mention detection from the mention list and from the content.
///
/// Expected: both sources recognised, other users not matched
#[test]
fn detects_mentions() {
    let listed = ChatMessage::from(&create_test_message_with_mentions(
        1,
        5,
        42,
        "join 10:00:00 UTC  someone",
        &[77],
    ));
    assert!(listed.mentions_user(UserId::new(77)));
    assert!(!listed.mentions_user(UserId::new(7)));

    let inline = ChatMessage::from(&create_test_message(2, 5, 42, "join 10:00:00 UTC  <@77>", None));
    assert!(inline.mentions_user(UserId::new(77)));
    assert!(!inline.mentions_user(UserId::new(7)));

    let nickname = ChatMessage::from(&create_test_message(3, 5, 42, "join <@!77>", None));
    assert!(nickname.mentions_user(UserId::new(77)));
}

/// Tests converting text, voice and category channels.
///
/// Expected: kind mapped, topic kept and parsed as config
#[test]
fn converts_channels() {
    let text = GuildChannelInfo::from(&create_test_channel(
        10,
        1,
        "stats-lobby",
        0,
        Some("Lobby log tz:Asia/Tokyo"),
    ));
    assert_eq!(text.kind, ChannelKind::Text);
    assert_eq!(text.name, "stats-lobby");
    assert_eq!(text.config().get("tz"), Some("Asia/Tokyo"));

    let voice = GuildChannelInfo::from(&create_test_channel(11, 1, "Lobby", 2, None));
    assert_eq!(voice.kind, ChannelKind::Voice);
    assert!(voice.config().is_empty());

    let stage = GuildChannelInfo::from(&create_test_channel(12, 1, "Stage", 13, None));
    assert_eq!(stage.kind, ChannelKind::Voice);

    let category = GuildChannelInfo::from(&create_test_channel(13, 1, "Voice", 4, None));
    assert_eq!(category.kind, ChannelKind::Other);
}

/// Tests converting a member with a nickname and roles.
///
/// Expected: nickname preferred as display name, roles kept
#[test]
fn converts_member() {
    let member = GuildMember::from(&create_test_member(1, 42, "pengi", Some("Pengi"), &[500, 501]));

    assert_eq!(member.user_id, UserId::new(42));
    assert_eq!(member.display_name, "Pengi");
    assert_eq!(member.roles, vec![RoleId::new(500), RoleId::new(501)]);
    assert_eq!(member.mention(), "<@42>");
}

/// Tests first-match-wins role lookup on converted roles.
///
/// Expected: first role with the exact name returned
#[test]
fn finds_first_role_by_name() {
    let roles: Vec<GuildRole> = [
        create_test_role(600, "voice Lobby", 0, 2),
        create_test_role(500, "voice Lobby", 0, 1),
        create_test_role(501, "voice Stage", 0, 1),
    ]
    .iter()
    .map(GuildRole::from)
    .collect();

    let found = GuildRole::find_by_name(&roles, "voice Lobby").unwrap();
    assert_eq!(found.id, RoleId::new(600));
    assert!(GuildRole::find_by_name(&roles, "voice lobby").is_none());
}
