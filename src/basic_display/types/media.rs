use crate::{
    DataList,
    MediaType,
};
use time::OffsetDateTime;
use url::Url;

/// A basic display media object.
///
/// Only the requested fields are present.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Media {
    /// The media id
    pub id: String,

    /// The caption
    pub caption: Option<String>,

    /// The media type
    pub media_type: Option<MediaType>,

    /// The url of the image or video
    pub media_url: Option<Url>,

    /// The permalink
    pub permalink: Option<Url>,

    /// The video thumbnail url
    pub thumbnail_url: Option<Url>,

    /// When this was published
    #[serde(default, with = "crate::util::graph_timestamp::option")]
    pub timestamp: Option<OffsetDateTime>,

    /// The owner's username
    pub username: Option<String>,

    /// The children of a carousel
    pub children: Option<DataList<Media>>,
}

#[cfg(test)]
mod test {
    use super::*;

    const MEDIA: &str = include_str!("../../../test_data/basic_display/media.json");

    #[test]
    fn parse_carousel() {
        let media: Media = serde_json::from_str(MEDIA).expect("failed to parse");

        assert!(media.id == "17895695668004550");
        assert!(media.media_type == Some(MediaType::CarouselAlbum));
        assert!(media.timestamp.map(OffsetDateTime::unix_timestamp) == Some(1504203000));
        assert!(media.username.as_deref() == Some("jayposiris"));

        let children = media.children.expect("missing children");
        assert!(children.data.len() == 2);
        assert!(children.data[1].media_type == Some(MediaType::Video));
        assert!(children.next_cursor().is_none());
    }

    #[test]
    fn parse_ids_only() {
        let media: Media = serde_json::from_str(r#"{"id":"1"}"#).expect("failed to parse");
        assert!(media.media_type.is_none());
        assert!(media.timestamp.is_none());
    }
}
