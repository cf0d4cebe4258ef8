use super::Media;
use crate::DataList;
use url::Url;

/// An instagram professional account.
///
/// Only the requested fields are present.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct User {
    /// The user id
    pub id: String,

    /// The legacy instagram id
    pub ig_id: Option<u64>,

    /// The username
    pub username: Option<String>,

    /// The profile name
    pub name: Option<String>,

    /// The biography
    pub biography: Option<String>,

    /// The website.
    ///
    /// This is whatever the user typed, so it is not parsed as a url.
    pub website: Option<String>,

    /// The profile picture url
    pub profile_picture_url: Option<Url>,

    /// The number of followers
    pub followers_count: Option<u64>,

    /// The number of follows
    pub follows_count: Option<u64>,

    /// The number of media
    pub media_count: Option<u64>,

    /// The first page of media
    pub media: Option<DataList<Media>>,
}

#[cfg(test)]
mod test {
    use super::*;

    const USER: &str = include_str!("../../../test_data/graph/user.json");

    #[test]
    fn parse_user() {
        let user: User = serde_json::from_str(USER).expect("failed to parse");

        assert!(user.id == "17841405822304914");
        assert!(user.ig_id == Some(5382746123));
        assert!(user.username.as_deref() == Some("bluebottle"));
        assert!(user.followers_count == Some(267788));
        assert!(user.media_count == Some(1205));
        assert!(user.media.is_none());
    }

    #[test]
    fn null_is_none() {
        let user: Option<User> =
            crate::util::parse_optional(serde_json::Value::Null).expect("null should parse");
        assert!(user.is_none());
    }
}
