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

#[cfg(test)]
mod test {
    use super::*;
    use crate::basic_display::fields::media;

    #[test]
    fn requires_media_id() {
        let error = MediaOptions::new()
            .fields(media::all())
            .get_request()
            .expect_err("built without an id");
        assert!(matches!(error, Error::MissingProperty("media_id")));

        let error = MediaChildrenOptions::new()
            .media_id("")
            .get_request()
            .expect_err("built with an empty id");
        assert!(matches!(error, Error::MissingProperty("media_id")));
    }

    #[test]
    fn children() {
        let request = MediaChildrenOptions::new()
            .media_id("17895695668004550")
            .fields(media::ID + media::MEDIA_URL)
            .get_request()
            .expect("failed to build");

        assert!(request.url == "/17895695668004550/children");
        assert!(request.query_value("fields") == Some("id,media_url"));
    }
}
