use super::Media;
use crate::DataList;

/// A basic display user.
///
/// Only the requested fields are present.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct User {
    /// The user id
    pub id: String,

    /// The username
    pub username: Option<String>,

    /// The account type
    pub account_type: Option<AccountType>,

    /// The number of media
    pub media_count: Option<u64>,

    /// The first page of media
    pub media: Option<DataList<Media>>,
}

/// The type of an account
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// A business account
    Business,

    /// A creator account
    MediaCreator,

    /// A personal account
    Personal,

    /// A type this library does not know about
    #[serde(other)]
    Unspecified,
}

#[cfg(test)]
mod test {
    use super::*;

    const ME: &str = include_str!("../../../test_data/basic_display/me.json");

    #[test]
    fn parse_minimal() {
        let user: User =
            serde_json::from_str(r#"{"id":"123","username":"alice"}"#).expect("failed to parse");

        assert!(user.id == "123");
        assert!(user.username.as_deref() == Some("alice"));
        assert!(user.account_type.is_none());
        assert!(user.media_count.is_none());
        assert!(user.media.is_none());
    }

    #[test]
    fn parse_null() {
        let user: Option<User> =
            crate::util::parse_optional(serde_json::Value::Null).expect("null should parse");
        assert!(user.is_none());
    }

    #[test]
    fn parse_me() {
        let user: User = serde_json::from_str(ME).expect("failed to parse");

        assert!(user.account_type == Some(AccountType::Personal));
        assert!(user.media_count == Some(3));

        let media = user.media.expect("missing media");
        assert!(media.data.len() == 2);
        assert!(media.next_cursor() == Some("QVFIUm1u"));
    }

    #[test]
    fn unknown_account_type() {
        let user: User = serde_json::from_str(r#"{"id":"1","account_type":"CREATOR_PLUS"}"#)
            .expect("failed to parse");
        assert!(user.account_type == Some(AccountType::Unspecified));
    }
}
