/// User fields
pub mod user {
    use crate::{
        Field,
        FieldList,
    };

    /// The user id
    pub const ID: Field = Field::from_static("id");

    /// The instagram user id of a business discovery target
    pub const IG_ID: Field = Field::from_static("ig_id");

    /// The username
    pub const USERNAME: Field = Field::from_static("username");

    /// The profile name
    pub const NAME: Field = Field::from_static("name");

    /// The biography
    pub const BIOGRAPHY: Field = Field::from_static("biography");

    /// The website
    pub const WEBSITE: Field = Field::from_static("website");

    /// The profile picture url
    pub const PROFILE_PICTURE_URL: Field = Field::from_static("profile_picture_url");

    /// The number of followers
    pub const FOLLOWERS_COUNT: Field = Field::from_static("followers_count");

    /// The number of follows
    pub const FOLLOWS_COUNT: Field = Field::from_static("follows_count");

    /// The number of media
    pub const MEDIA_COUNT: Field = Field::from_static("media_count");

    /// Every user field
    pub fn all() -> FieldList {
        FieldList::of([
            ID,
            IG_ID,
            USERNAME,
            NAME,
            BIOGRAPHY,
            WEBSITE,
            PROFILE_PICTURE_URL,
            FOLLOWERS_COUNT,
            FOLLOWS_COUNT,
            MEDIA_COUNT,
        ])
    }
}

/// Media fields
pub mod media {
    use crate::{
        Field,
        FieldList,
    };

    /// The media id
    pub const ID: Field = Field::from_static("id");

    /// The instagram id
    pub const IG_ID: Field = Field::from_static("ig_id");

    /// The caption
    pub const CAPTION: Field = Field::from_static("caption");

    /// The number of comments
    pub const COMMENTS_COUNT: Field = Field::from_static("comments_count");

    /// Whether comments are enabled
    pub const IS_COMMENT_ENABLED: Field = Field::from_static("is_comment_enabled");

    /// The number of likes
    pub const LIKE_COUNT: Field = Field::from_static("like_count");

    /// `IMAGE`, `VIDEO` or `CAROUSEL_ALBUM`
    pub const MEDIA_TYPE: Field = Field::from_static("media_type");

    /// The url of the image or video
    pub const MEDIA_URL: Field = Field::from_static("media_url");

    /// The owner
    pub const OWNER: Field = Field::from_static("owner");

    /// The permalink
    pub const PERMALINK: Field = Field::from_static("permalink");

    /// The shortcode
    pub const SHORTCODE: Field = Field::from_static("shortcode");

    /// The video thumbnail url
    pub const THUMBNAIL_URL: Field = Field::from_static("thumbnail_url");

    /// When the media was published
    pub const TIMESTAMP: Field = Field::from_static("timestamp");

    /// The owner's username
    pub const USERNAME: Field = Field::from_static("username");

    /// The children of a carousel
    pub const CHILDREN: Field = Field::from_static("children");

    /// The comments edge
    pub const COMMENTS: Field = Field::from_static("comments");

    /// Every media field
    pub fn all() -> FieldList {
        FieldList::of([
            ID,
            IG_ID,
            CAPTION,
            COMMENTS_COUNT,
            IS_COMMENT_ENABLED,
            LIKE_COUNT,
            MEDIA_TYPE,
            MEDIA_URL,
            OWNER,
            PERMALINK,
            SHORTCODE,
            THUMBNAIL_URL,
            TIMESTAMP,
            USERNAME,
            CHILDREN,
            COMMENTS,
        ])
    }
}

/// Comment fields
pub mod comment {
    use crate::{
        Field,
        FieldList,
    };

    /// The comment id
    pub const ID: Field = Field::from_static("id");

    /// The author
    pub const FROM: Field = Field::from_static("from");

    /// Whether the comment is hidden
    pub const HIDDEN: Field = Field::from_static("hidden");

    /// The number of likes
    pub const LIKE_COUNT: Field = Field::from_static("like_count");

    /// The media the comment is on
    pub const MEDIA: Field = Field::from_static("media");

    /// The comment this replies to
    pub const PARENT_ID: Field = Field::from_static("parent_id");

    /// The replies edge
    pub const REPLIES: Field = Field::from_static("replies");

    /// The comment text
    pub const TEXT: Field = Field::from_static("text");

    /// When the comment was made
    pub const TIMESTAMP: Field = Field::from_static("timestamp");

    /// The author's username
    pub const USERNAME: Field = Field::from_static("username");

    /// Every comment field
    pub fn all() -> FieldList {
        FieldList::of([
            ID, FROM, HIDDEN, LIKE_COUNT, MEDIA, PARENT_ID, REPLIES, TEXT, TIMESTAMP, USERNAME,
        ])
    }
}

/// Hashtag fields
pub mod hashtag {
    use crate::{
        Field,
        FieldList,
    };

    /// The hashtag id
    pub const ID: Field = Field::from_static("id");

    /// The hashtag name, without the `#`
    pub const NAME: Field = Field::from_static("name");

    /// Every hashtag field
    pub fn all() -> FieldList {
        FieldList::of([ID, NAME])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn all_fields() {
        assert!(user::all().len() == 10);
        assert!(media::all().contains("like_count"));
        assert!(comment::all().contains(comment::PARENT_ID.name()));
        assert!(hashtag::all().to_string() == "id,name");
    }

    #[test]
    fn nested_edges() {
        let fields = media::ID + media::CAPTION + crate::Field::new("children{media_url}");
        assert!(fields.to_string() == "id,caption,children{media_url}");
    }
}
