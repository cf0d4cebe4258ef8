use super::ObjectRef;
use crate::DataList;
use time::OffsetDateTime;

/// A comment on a media object.
///
/// Only the requested fields are present.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    /// The comment id
    pub id: String,

    /// The author
    pub from: Option<CommentAuthor>,

    /// Whether the comment is hidden
    pub hidden: Option<bool>,

    /// The number of likes
    pub like_count: Option<u64>,

    /// The media the comment is on
    pub media: Option<ObjectRef>,

    /// The comment this replies to
    pub parent_id: Option<String>,

    /// The first page of replies
    pub replies: Option<DataList<Comment>>,

    /// The comment text
    pub text: Option<String>,

    /// When the comment was made
    #[serde(default, with = "crate::util::graph_timestamp::option")]
    pub timestamp: Option<OffsetDateTime>,

    /// The author's username
    pub username: Option<String>,
}

/// The author of a comment
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct CommentAuthor {
    /// The author's id
    pub id: String,

    /// The author's username
    pub username: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    const COMMENTS: &str = include_str!("../../../test_data/graph/comments.json");

    #[test]
    fn parse_comments() {
        let comments: DataList<Comment> = serde_json::from_str(COMMENTS).expect("failed to parse");

        assert!(comments.data.len() == 2);
        assert!(comments.next_cursor() == Some("QVFIUmtx"));

        let first = &comments.data[0];
        assert!(first.timestamp.map(OffsetDateTime::unix_timestamp) == Some(1588338300));
        assert!(first.hidden == Some(false));
        assert!(
            first.from.as_ref().and_then(|from| from.username.as_deref()) == Some("pourover_fan")
        );

        let replies = first.replies.as_ref().expect("missing replies");
        assert!(replies.data[0].parent_id.as_deref() == Some("17881770991003328"));

        let second = &comments.data[1];
        assert!(second.hidden == Some(true));
        assert!(second.from.is_none());
        assert!(second.replies.is_none());
    }
}
