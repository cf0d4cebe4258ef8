use super::User;
use time::OffsetDateTime;

/// A comment.
///
/// Media captions use the same shape.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    /// The comment id
    pub id: String,

    /// The text
    pub text: String,

    /// The author
    pub from: User,

    /// When the comment was made
    #[serde(with = "crate::util::unix_timestamp")]
    pub created_time: OffsetDateTime,
}

/// A hashtag
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Tag {
    /// The tag name, without the `#`
    pub name: String,

    /// The number of media with this tag
    pub media_count: u64,
}

/// A location
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Location {
    /// The location id.
    ///
    /// Locations attached to media may only have coordinates.
    #[serde(default, with = "crate::util::string_or_u64::option")]
    pub id: Option<u64>,

    /// The name
    pub name: Option<String>,

    /// The latitude
    pub latitude: Option<f64>,

    /// The longitude
    pub longitude: Option<f64>,

    /// The street address
    pub street_address: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::legacy::Envelope;

    const COMMENTS: &str = include_str!("../../../test_data/legacy/comments.json");

    #[test]
    fn parse_comments() {
        let envelope: Envelope<Vec<Comment>> =
            serde_json::from_str(COMMENTS).expect("failed to parse");

        assert!(envelope.data.len() == 2);
        let comment = &envelope.data[0];
        assert!(comment.id == "420");
        assert!(comment.from.id == 1574083);
        assert!(comment.created_time.unix_timestamp() == 1280780324);
    }

    #[test]
    fn parse_location() {
        let location: Location = serde_json::from_str(
            r#"{"id":"514276","name":"Dogpatch Labs","latitude":37.782,"longitude":-122.387}"#,
        )
        .expect("failed to parse");
        assert!(location.id == Some(514276));

        let location: Location =
            serde_json::from_str(r#"{"latitude":37.782,"longitude":-122.387}"#)
                .expect("failed to parse");
        assert!(location.id.is_none());
        assert!(location.name.is_none());
    }

    #[test]
    fn parse_tag() {
        let tag: Tag = serde_json::from_str(r#"{"media_count":472,"name":"nofilter"}"#)
            .expect("failed to parse");
        assert!(tag.name == "nofilter");
        assert!(tag.media_count == 472);
    }
}
