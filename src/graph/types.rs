/// Comment types
pub mod comment;
/// The [`Hashtag`] type
pub mod hashtag;
/// The [`Media`] type
pub mod media;
/// Small response types
pub mod response;
/// The [`User`] type
pub mod user;

pub use self::{
    comment::{
        Comment,
        CommentAuthor,
    },
    hashtag::Hashtag,
    media::Media,
    response::{
        AccessToken,
        IdResponse,
        ObjectRef,
        SuccessResponse,
    },
    user::User,
};
