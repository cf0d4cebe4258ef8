/// Comment options
mod comments;
/// Hashtag options
mod hashtags;
/// Media options
mod media;
/// User options
mod users;

pub use self::{
    comments::{
        CommentOptions,
        CommentRepliesOptions,
        DeleteCommentOptions,
        HideCommentOptions,
        ReplyOptions,
    },
    hashtags::{
        HashtagMediaKind,
        HashtagMediaOptions,
        HashtagOptions,
        HashtagSearchOptions,
    },
    media::{
        MediaChildrenOptions,
        MediaCommentsOptions,
        MediaOptions,
    },
    users::{
        UserMediaOptions,
        UserOptions,
        UserStoriesOptions,
        UserTagsOptions,
    },
};
use crate::ApiRequest;

/// Add the cursor paging parameters shared by every graph edge.
fn append_paging(
    request: &mut ApiRequest,
    limit: Option<u32>,
    before: Option<&str>,
    after: Option<&str>,
) {
    request
        .append_query_int("limit", limit)
        .append_query_opt("before", before)
        .append_query_opt("after", after);
}
