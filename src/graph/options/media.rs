use super::append_paging;
use crate::{
    util::required,
    ApiRequest,
    Error,
    Field,
    FieldList,
};

/// Options for getting a media object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaOptions {
    /// The media id
    pub media_id: Option<String>,

    /// The fields to return
    pub fields: FieldList,
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

    /// Set the fields.
    pub fn fields(&mut self, fields: impl Into<FieldList>) -> &mut Self {
        self.fields = fields.into();
        self
    }

    /// Add a field.
    pub fn field(&mut self, field: impl Into<Field>) -> &mut Self {
        self.fields.push(field);
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the media id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let media_id = required(self.media_id.as_deref(), "media_id")?;

        let mut request = ApiRequest::get(format!("/{media_id}"));
        request.append_fields(&self.fields);
        Ok(request)
    }
}

/// Options for listing the children of a carousel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaChildrenOptions {
    /// The carousel media id
    pub media_id: Option<String>,

    /// The fields to return for each child
    pub fields: FieldList,
}

impl MediaChildrenOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the media id.
    pub fn media_id(&mut self, media_id: impl Into<String>) -> &mut Self {
        self.media_id = Some(media_id.into());
        self
    }

    /// Set the fields.
    pub fn fields(&mut self, fields: impl Into<FieldList>) -> &mut Self {
        self.fields = fields.into();
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the media id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let media_id = required(self.media_id.as_deref(), "media_id")?;

        let mut request = ApiRequest::get(format!("/{media_id}/children"));
        request.append_fields(&self.fields);
        Ok(request)
    }
}

/// Options for listing the comments on a media object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaCommentsOptions {
    /// The media id
    pub media_id: Option<String>,

    /// The fields to return for each comment
    pub fields: FieldList,

    /// The page size
    pub limit: Option<u32>,

    /// Return the page before this cursor
    pub before: Option<String>,

    /// Return the page after this cursor
    pub after: Option<String>,
}

impl MediaCommentsOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the media id.
    pub fn media_id(&mut self, media_id: impl Into<String>) -> &mut Self {
        self.media_id = Some(media_id.into());
        self
    }

    /// Set the fields.
    pub fn fields(&mut self, fields: impl Into<FieldList>) -> &mut Self {
        self.fields = fields.into();
        self
    }

    /// Set the page size.
    pub fn limit(&mut self, limit: u32) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    /// Set the before cursor.
    pub fn before(&mut self, before: impl Into<String>) -> &mut Self {
        self.before = Some(before.into());
        self
    }

    /// Set the after cursor.
    pub fn after(&mut self, after: impl Into<String>) -> &mut Self {
        self.after = Some(after.into());
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the media id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let media_id = required(self.media_id.as_deref(), "media_id")?;

        let mut request = ApiRequest::get(format!("/{media_id}/comments"));
        request.append_fields(&self.fields);
        append_paging(
            &mut request,
            self.limit,
            self.before.as_deref(),
            self.after.as_deref(),
        );
        Ok(request)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::fields::{
        comment,
        media,
    };

    #[test]
    fn get_media() {
        let request = MediaOptions::new()
            .media_id("17918195224117851")
            .fields(media::all())
            .get_request()
            .expect("failed to build");

        assert!(request.url == "/17918195224117851");
        assert!(request
            .query_value("fields")
            .map_or(false, |fields| fields.starts_with("id,ig_id,caption")));
    }

    #[test]
    fn comments_page() {
        let request = MediaCommentsOptions::new()
            .media_id("17918195224117851")
            .fields(comment::ID + comment::TEXT)
            .limit(2)
            .get_request()
            .expect("failed to build");

        assert!(request.url == "/17918195224117851/comments");
        assert!(request.query_value("fields") == Some("id,text"));
        assert!(request.query_value("limit") == Some("2"));
        assert!(request.query_value("after").is_none());
    }

    #[test]
    fn media_id_is_required() {
        let error = MediaChildrenOptions::new()
            .get_request()
            .expect_err("built without an id");
        assert!(matches!(error, Error::MissingProperty("media_id")));

        let error = MediaCommentsOptions::new()
            .media_id("")
            .get_request()
            .expect_err("built with an empty id");
        assert!(matches!(error, Error::MissingProperty("media_id")));
    }
}
