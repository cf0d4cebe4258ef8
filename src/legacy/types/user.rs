/// A legacy user
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct User {
    /// The user id
    #[serde(with = "crate::util::string_or_u64")]
    pub id: u64,

    /// The username
    pub username: String,

    /// The display name
    pub full_name: Option<String>,

    /// Profile picture url
    pub profile_picture: Option<String>,

    /// The bio
    pub bio: Option<String>,

    /// The website
    pub website: Option<String>,

    /// Whether this is a business account
    pub is_business: Option<bool>,

    /// Media and follower counts.
    ///
    /// Only present when fetching a single user.
    pub counts: Option<UserCounts>,
}

/// User counts
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct UserCounts {
    /// The number of posts
    pub media: u64,

    /// The number of users this user follows
    pub follows: u64,

    /// The number of followers
    pub followed_by: u64,
}

/// The response to a code exchange
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct AccessTokenResponse {
    /// The access token
    pub access_token: String,

    /// The user the token belongs to
    pub user: User,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::legacy::Envelope;

    const USER: &str = include_str!("../../../test_data/legacy/user.json");

    #[test]
    fn parse_minimal() {
        let user: User =
            serde_json::from_str(r#"{"id":"123","username":"alice"}"#).expect("failed to parse");
        assert!(user.id == 123);
        assert!(user.username == "alice");
        assert!(user.full_name.is_none());
        assert!(user.bio.is_none());
        assert!(user.counts.is_none());
    }

    #[test]
    fn parse_null() {
        let user: Option<User> =
            crate::util::parse_optional(serde_json::Value::Null).expect("null should parse");
        assert!(user.is_none());
    }

    #[test]
    fn parse_user() {
        let envelope: Envelope<User> = serde_json::from_str(USER).expect("failed to parse");
        let user = envelope.data;

        assert!(user.id == 1574083);
        assert!(user.username == "snoopdogg");
        assert!(user.full_name.as_deref() == Some("Snoop Dogg"));
        assert!(
            user.counts
                == Some(UserCounts {
                    media: 1320,
                    follows: 420,
                    followed_by: 3410,
                })
        );
    }
}
