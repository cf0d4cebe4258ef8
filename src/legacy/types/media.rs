use super::{
    Comment,
    Location,
    User,
};
use crate::MediaType;
use time::OffsetDateTime;
use url::Url;

/// A legacy media object
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Media {
    /// The media id, like `22721881_3`
    pub id: String,

    /// The media type
    #[serde(rename = "type")]
    pub kind: MediaType,

    /// The author
    pub user: User,

    /// When this was posted
    #[serde(with = "crate::util::unix_timestamp")]
    pub created_time: OffsetDateTime,

    /// The permalink
    pub link: Option<Url>,

    /// The caption
    pub caption: Option<Comment>,

    /// Hashtags in the caption
    #[serde(default)]
    pub tags: Vec<String>,

    /// The location
    pub location: Option<Location>,

    /// The comment count
    pub comments: Option<Count>,

    /// The like count
    pub likes: Option<Count>,

    /// Image versions
    pub images: Option<Images>,

    /// Video versions.
    ///
    /// Only present on videos.
    pub videos: Option<Videos>,

    /// Carousel children.
    ///
    /// Only present on carousels.
    #[serde(default)]
    pub carousel_media: Vec<CarouselMedia>,

    /// Tagged users
    #[serde(default)]
    pub users_in_photo: Vec<UserInPhoto>,

    /// The filter name
    pub filter: Option<String>,

    /// Whether the authenticated user liked this
    #[serde(default)]
    pub user_has_liked: bool,
}

impl Media {
    /// Get the best quality image url.
    pub fn best_image_url(&self) -> Option<&Url> {
        Some(&self.images.as_ref()?.best()?.url)
    }
}

/// A count
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Count {
    /// The count
    pub count: u64,
}

/// A version of an image or video
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct MediaVersion {
    /// The url
    pub url: Url,

    /// The width
    pub width: u32,

    /// The height
    pub height: u32,
}

/// Image versions
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Images {
    /// 150x150
    pub thumbnail: Option<MediaVersion>,

    /// 320x320
    pub low_resolution: Option<MediaVersion>,

    /// 640x640
    pub standard_resolution: Option<MediaVersion>,
}

impl Images {
    /// Get the largest version.
    pub fn best(&self) -> Option<&MediaVersion> {
        [
            self.thumbnail.as_ref(),
            self.low_resolution.as_ref(),
            self.standard_resolution.as_ref(),
        ]
        .into_iter()
        .flatten()
        .max_by_key(|version| u64::from(version.width) * u64::from(version.height))
    }
}

/// Video versions
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Videos {
    /// 480x480
    pub low_bandwidth: Option<MediaVersion>,

    /// 480x480
    pub low_resolution: Option<MediaVersion>,

    /// 640x640
    pub standard_resolution: Option<MediaVersion>,
}

/// A carousel child
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct CarouselMedia {
    /// The media type
    #[serde(rename = "type")]
    pub kind: MediaType,

    /// Image versions
    pub images: Option<Images>,

    /// Video versions
    pub videos: Option<Videos>,

    /// Tagged users
    #[serde(default)]
    pub users_in_photo: Vec<UserInPhoto>,
}

/// A tagged user
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct UserInPhoto {
    /// The user
    pub user: User,

    /// Where in the photo
    pub position: Position,
}

/// A position in a photo, from `0.0` to `1.0` on each axis
#[derive(Debug, Copy, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Position {
    /// x
    pub x: f64,

    /// y
    pub y: f64,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::legacy::Envelope;

    const MEDIA: &str = include_str!("../../../test_data/legacy/media.json");
    const RECENT_MEDIA: &str = include_str!("../../../test_data/legacy/recent_media.json");

    #[test]
    fn parse_media() {
        let envelope: Envelope<Media> = serde_json::from_str(MEDIA).expect("failed to parse");
        let media = envelope.data;

        assert!(media.id == "22721881");
        assert!(media.kind == MediaType::Image);
        assert!(media.user.id == 3);
        assert!(media.created_time.unix_timestamp() == 1296710327);
        assert!(media.likes == Some(Count { count: 15 }));
        assert!(media.tags == ["snow"]);
        assert!(media.location.as_ref().and_then(|location| location.id) == Some(520640));
        assert!(media.users_in_photo.len() == 1);
        assert!(
            media.caption.as_ref().map(|caption| caption.text.as_str())
                == Some("Inside le truc #foodtruck")
        );
        assert!(
            media.best_image_url().map(Url::as_str)
                == Some("https://scontent.cdninstagram.com/t51.2885-15/s640x640/22721881_7.jpg")
        );
    }

    #[test]
    fn parse_recent_media() {
        let envelope: Envelope<Vec<Media>> =
            serde_json::from_str(RECENT_MEDIA).expect("failed to parse");

        assert!(envelope.data.len() == 2);

        let video = &envelope.data[0];
        assert!(video.kind == MediaType::Video);
        assert!(video.videos.is_some());
        assert!(video.caption.is_none());

        let carousel = &envelope.data[1];
        assert!(carousel.kind.is_carousel());
        assert!(carousel.carousel_media.len() == 2);
        assert!(carousel.carousel_media[1].kind == MediaType::Video);

        let pagination = envelope.pagination.expect("missing pagination");
        assert!(pagination.next_max_id.as_deref() == Some("1313455925958301311_3"));
    }
}
