/// Location options
mod locations;
/// Media, comment and like options
mod media;
/// Relationship options
mod relationships;
/// Tag options
mod tags;
/// User options
mod users;

pub use self::{
    locations::{
        LocationOptions,
        LocationRecentMediaOptions,
        LocationSearchOptions,
    },
    media::{
        AddCommentOptions,
        CommentsOptions,
        DeleteCommentOptions,
        LikesOptions,
        MediaOptions,
        MediaSearchOptions,
        MediaShortcodeOptions,
    },
    relationships::{
        ModifyRelationshipOptions,
        RelationshipAction,
        RelationshipList,
        RelationshipListOptions,
        RelationshipOptions,
    },
    tags::{
        TagOptions,
        TagRecentMediaOptions,
        TagSearchOptions,
    },
    users::{
        LikedMediaOptions,
        UserOptions,
        UserRecentMediaOptions,
        UserSearchOptions,
    },
};

/// The path segment for a user, `self` if no id is given.
fn user_segment(user_id: Option<u64>) -> String {
    match user_id {
        Some(user_id) => {
            let mut buffer = itoa::Buffer::new();
            buffer.format(user_id).to_string()
        }
        None => "self".to_string(),
    }
}
