use crate::{
    util::required,
    ApiRequest,
    Error,
};

/// Options for getting a media object by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaOptions {
    /// The media id
    pub media_id: Option<String>,
}

impl MediaOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the media id.
    pub fn media_id(&mut self, media_id: impl Into<String>) -> &mut Self {
        self.media_id = Some(media_id.into());
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the media id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let media_id = required(self.media_id.as_deref(), "media_id")?;
        Ok(ApiRequest::get(format!("/media/{media_id}")))
    }
}

/// Options for getting a media object by its shortcode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaShortcodeOptions {
    /// The shortcode, the part of the permalink after `/p/`
    pub shortcode: Option<String>,
}

impl MediaShortcodeOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shortcode.
    pub fn shortcode(&mut self, shortcode: impl Into<String>) -> &mut Self {
        self.shortcode = Some(shortcode.into());
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the shortcode is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let shortcode = required(self.shortcode.as_deref(), "shortcode")?;
        Ok(ApiRequest::get(format!("/media/shortcode/{shortcode}")))
    }
}

/// Options for searching media near a point
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaSearchOptions {
    /// The latitude
    pub lat: Option<f64>,

    /// The longitude
    pub lng: Option<f64>,

    /// The search radius in meters
    pub distance: Option<u32>,
}

impl MediaSearchOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the point to search around.
    pub fn point(&mut self, lat: f64, lng: f64) -> &mut Self {
        self.lat = Some(lat);
        self.lng = Some(lng);
        self
    }

    /// Set the distance.
    pub fn distance(&mut self, distance: u32) -> &mut Self {
        self.distance = Some(distance);
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the point is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let lat = self.lat.ok_or(Error::MissingProperty("lat"))?;
        let lng = self.lng.ok_or(Error::MissingProperty("lng"))?;

        let mut request = ApiRequest::get("/media/search")
            .with_query("lat", lat.to_string())
            .with_query("lng", lng.to_string());
        request.append_query_int("distance", self.distance);
        Ok(request)
    }
}

/// Options for listing the comments on a media object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentsOptions {
    /// The media id
    pub media_id: Option<String>,
}

impl CommentsOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the media id.
    pub fn media_id(&mut self, media_id: impl Into<String>) -> &mut Self {
        self.media_id = Some(media_id.into());
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the media id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let media_id = required(self.media_id.as_deref(), "media_id")?;
        Ok(ApiRequest::get(format!("/media/{media_id}/comments")))
    }
}

/// Options for commenting on a media object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddCommentOptions {
    /// The media id
    pub media_id: Option<String>,

    /// The comment text
    pub text: Option<String>,
}

impl AddCommentOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the media id.
    pub fn media_id(&mut self, media_id: impl Into<String>) -> &mut Self {
        self.media_id = Some(media_id.into());
        self
    }

    /// Set the text.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the media id or text is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let media_id = required(self.media_id.as_deref(), "media_id")?;
        let text = required(self.text.as_deref(), "text")?;

        let mut request = ApiRequest::post(format!("/media/{media_id}/comments"));
        request.append_form("text", text);
        Ok(request)
    }
}

/// Options for deleting a comment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteCommentOptions {
    /// The media id
    pub media_id: Option<String>,

    /// The comment id
    pub comment_id: Option<String>,
}

impl DeleteCommentOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the media id.
    pub fn media_id(&mut self, media_id: impl Into<String>) -> &mut Self {
        self.media_id = Some(media_id.into());
        self
    }

    /// Set the comment id.
    pub fn comment_id(&mut self, comment_id: impl Into<String>) -> &mut Self {
        self.comment_id = Some(comment_id.into());
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the media id or comment id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let media_id = required(self.media_id.as_deref(), "media_id")?;
        let comment_id = required(self.comment_id.as_deref(), "comment_id")?;
        Ok(ApiRequest::delete(format!(
            "/media/{media_id}/comments/{comment_id}"
        )))
    }
}

/// Options for the likes of a media object.
///
/// The same options list, add and remove likes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikesOptions {
    /// The media id
    pub media_id: Option<String>,
}

impl LikesOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the media id.
    pub fn media_id(&mut self, media_id: impl Into<String>) -> &mut Self {
        self.media_id = Some(media_id.into());
        self
    }

    fn path(&self) -> Result<String, Error> {
        let media_id = required(self.media_id.as_deref(), "media_id")?;
        Ok(format!("/media/{media_id}/likes"))
    }

    /// Build the request to list likes.
    ///
    /// # Errors
    /// Fails if the media id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        Ok(ApiRequest::get(self.path()?))
    }

    /// Build the request to like the media.
    ///
    /// # Errors
    /// Fails if the media id is not set.
    pub fn like_request(&self) -> Result<ApiRequest, Error> {
        Ok(ApiRequest::post(self.path()?))
    }

    /// Build the request to remove a like.
    ///
    /// # Errors
    /// Fails if the media id is not set.
    pub fn unlike_request(&self) -> Result<ApiRequest, Error> {
        Ok(ApiRequest::delete(self.path()?))
    }
}
