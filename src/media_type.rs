/// The type of a piece of media.
///
/// Every api generation uses this type.
/// Unrecognized values become [`MediaType::Unspecified`] instead of failing,
/// since the platform adds new types without notice.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, serde::Deserialize, serde::Serialize)]
pub enum MediaType {
    /// A photo
    #[serde(rename = "IMAGE", alias = "image")]
    Image,

    /// A video
    #[serde(rename = "VIDEO", alias = "video")]
    Video,

    /// A carousel of photos and videos
    #[serde(rename = "CAROUSEL_ALBUM", alias = "carousel")]
    CarouselAlbum,

    /// A type this library does not know about
    #[serde(rename = "UNSPECIFIED", other)]
    Unspecified,
}

impl MediaType {
    /// Get the graph api name of this media type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
            Self::CarouselAlbum => "CAROUSEL_ALBUM",
            Self::Unspecified => "UNSPECIFIED",
        }
    }

    /// Parse a media type from any api generation's representation.
    pub fn from_api_str(value: &str) -> Self {
        match value {
            "IMAGE" | "image" => Self::Image,
            "VIDEO" | "video" => Self::Video,
            "CAROUSEL_ALBUM" | "carousel" => Self::CarouselAlbum,
            _ => Self::Unspecified,
        }
    }

    /// Whether this media has children.
    pub fn is_carousel(self) -> bool {
        matches!(self, Self::CarouselAlbum)
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_all_generations() {
        let parsed: Vec<MediaType> =
            serde_json::from_str(r#"["IMAGE","image","VIDEO","video","CAROUSEL_ALBUM","carousel"]"#)
                .expect("failed to parse");
        assert!(
            parsed
                == [
                    MediaType::Image,
                    MediaType::Image,
                    MediaType::Video,
                    MediaType::Video,
                    MediaType::CarouselAlbum,
                    MediaType::CarouselAlbum,
                ]
        );
    }

    #[test]
    fn unknown_is_unspecified() {
        let parsed: MediaType = serde_json::from_str(r#""REELS""#).expect("failed to parse");
        assert!(parsed == MediaType::Unspecified);
        assert!(MediaType::from_api_str("REELS") == MediaType::Unspecified);
        assert!(MediaType::from_api_str("carousel") == MediaType::CarouselAlbum);
    }

    #[test]
    fn serializes_graph_names() {
        let value = serde_json::to_string(&MediaType::CarouselAlbum).expect("failed to serialize");
        assert!(value == r#""CAROUSEL_ALBUM""#);
    }
}
