/// User fields
pub mod user {
    use crate::{
        Field,
        FieldList,
    };

    /// The user id
    pub const ID: Field = Field::from_static("id");

    /// The username
    pub const USERNAME: Field = Field::from_static("username");

    /// `BUSINESS`, `MEDIA_CREATOR` or `PERSONAL`
    pub const ACCOUNT_TYPE: Field = Field::from_static("account_type");

    /// The number of media
    pub const MEDIA_COUNT: Field = Field::from_static("media_count");

    /// The media edge
    pub const MEDIA: Field = Field::from_static("media");

    /// Every user field
    pub fn all() -> FieldList {
        FieldList::of([ID, USERNAME, ACCOUNT_TYPE, MEDIA_COUNT, MEDIA])
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

    /// The caption
    pub const CAPTION: Field = Field::from_static("caption");

    /// `IMAGE`, `VIDEO` or `CAROUSEL_ALBUM`
    pub const MEDIA_TYPE: Field = Field::from_static("media_type");

    /// The url of the image or video
    pub const MEDIA_URL: Field = Field::from_static("media_url");

    /// The permalink
    pub const PERMALINK: Field = Field::from_static("permalink");

    /// The video thumbnail url
    pub const THUMBNAIL_URL: Field = Field::from_static("thumbnail_url");

    /// When the media was published
    pub const TIMESTAMP: Field = Field::from_static("timestamp");

    /// The owner's username
    pub const USERNAME: Field = Field::from_static("username");

    /// The children of a carousel
    pub const CHILDREN: Field = Field::from_static("children");

    /// Every media field
    pub fn all() -> FieldList {
        FieldList::of([
            ID,
            CAPTION,
            MEDIA_TYPE,
            MEDIA_URL,
            PERMALINK,
            THUMBNAIL_URL,
            TIMESTAMP,
            USERNAME,
            CHILDREN,
        ])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn all_fields() {
        assert!(user::all().to_string() == "id,username,account_type,media_count,media");
        assert!(media::all().len() == 9);
        assert!(media::all().contains(media::THUMBNAIL_URL.name()));
    }
}
