use super::{
    Comment,
    ObjectRef,
};
use crate::{
    DataList,
    MediaType,
};
use time::OffsetDateTime;
use url::Url;

/// A graph media object.
///
/// Only the requested fields are present.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Media {
    /// The media id
    pub id: String,

    /// The legacy instagram id
    pub ig_id: Option<String>,

    /// The caption
    pub caption: Option<String>,

    /// The number of comments
    pub comments_count: Option<u64>,

    /// Whether comments are enabled
    pub is_comment_enabled: Option<bool>,

    /// The number of likes
    pub like_count: Option<u64>,

    /// The media type
    pub media_type: Option<MediaType>,

    /// The url of the image or video
    pub media_url: Option<Url>,

    /// The owner
    pub owner: Option<ObjectRef>,

    /// The permalink
    pub permalink: Option<Url>,

    /// The shortcode
    pub shortcode: Option<String>,

    /// The video thumbnail url
    pub thumbnail_url: Option<Url>,

    /// When this was published
    #[serde(default, with = "crate::util::graph_timestamp::option")]
    pub timestamp: Option<OffsetDateTime>,

    /// The owner's username
    pub username: Option<String>,

    /// The children of a carousel
    pub children: Option<DataList<Media>>,

    /// The first page of comments
    pub comments: Option<DataList<Comment>>,
}

impl Media {
    /// Whether this is a carousel.
    pub fn is_carousel(&self) -> bool {
        self.media_type.map_or(false, MediaType::is_carousel)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const MEDIA: &str = include_str!("../../../test_data/graph/media.json");

    #[test]
    fn parse_media() {
        let media: Media = serde_json::from_str(MEDIA).expect("failed to parse");

        assert!(media.id == "17918195224117851");
        assert!(media.is_carousel());
        assert!(media.like_count == Some(1480));
        assert!(media.owner.as_ref().map(|owner| owner.id.as_str()) == Some("17841405822304914"));
        assert!(media.timestamp.map(OffsetDateTime::unix_timestamp) == Some(1588327200));

        let children = media.children.expect("missing children");
        assert!(children.data[0].media_type == Some(MediaType::Image));
        assert!(children.data[1].media_type == Some(MediaType::Unspecified));

        let comments = media.comments.expect("missing comments");
        assert!(comments.data.len() == 1);
        assert!(comments.data[0].text.as_deref() == Some("Looks great"));
        assert!(comments.next_cursor().is_none());
    }
}
