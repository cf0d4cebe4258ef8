/// Comment endpoints
mod comments;
/// Hashtag endpoints
mod hashtags;
/// Media endpoints
mod media;
/// User endpoints
mod users;

pub use self::{
    comments::{
        CommentsEndpoint,
        CommentsRawEndpoint,
    },
    hashtags::{
        HashtagsEndpoint,
        HashtagsRawEndpoint,
    },
    media::{
        MediaEndpoint,
        MediaRawEndpoint,
    },
    users::{
        UsersEndpoint,
        UsersRawEndpoint,
    },
};
