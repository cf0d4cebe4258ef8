use crate::{
    basic_display::{
        options::{
            MediaChildrenOptions,
            MediaOptions,
        },
        BasicDisplay,
        BasicDisplayClient,
        Media,
    },
    DataList,
    Error,
    FieldList,
    RawResponse,
    Response,
};

/// Raw media endpoints
#[derive(Debug, Copy, Clone)]
pub struct MediaRawEndpoint<'a> {
    client: &'a BasicDisplayClient,
}

impl<'a> MediaRawEndpoint<'a> {
    /// Make a new [`MediaRawEndpoint`].
    pub fn new(client: &'a BasicDisplayClient) -> Self {
        Self { client }
    }

    /// Get a media object by id.
    pub async fn get(
        &self,
        media_id: &str,
        fields: impl Into<FieldList>,
    ) -> Result<RawResponse, Error> {
        let mut options = MediaOptions::new();
        options.media_id(media_id).fields(fields);
        self.get_with_options(&options).await
    }

    /// Get a media object.
    pub async fn get_with_options(&self, options: &MediaOptions) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// List the children of a carousel.
    pub async fn children(
        &self,
        media_id: &str,
        fields: impl Into<FieldList>,
    ) -> Result<RawResponse, Error> {
        let mut options = MediaChildrenOptions::new();
        options.media_id(media_id).fields(fields);
        self.children_with_options(&options).await
    }

    /// List the children of a carousel.
    pub async fn children_with_options(
        &self,
        options: &MediaChildrenOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }
}

/// Media endpoints
#[derive(Debug, Copy, Clone)]
pub struct MediaEndpoint<'a> {
    raw: MediaRawEndpoint<'a>,
}

impl<'a> MediaEndpoint<'a> {
    /// Make a new [`MediaEndpoint`].
    pub fn new(raw: MediaRawEndpoint<'a>) -> Self {
        Self { raw }
    }

    /// The raw endpoints
    pub fn raw(&self) -> &MediaRawEndpoint<'a> {
        &self.raw
    }

    /// Get a media object by id.
    pub async fn get(
        &self,
        media_id: &str,
        fields: impl Into<FieldList>,
    ) -> Result<Response<Media>, Error> {
        Response::parse::<BasicDisplay>(self.raw.get(media_id, fields).await?)
    }

    /// Get a media object.
    pub async fn get_with_options(&self, options: &MediaOptions) -> Result<Response<Media>, Error> {
        Response::parse::<BasicDisplay>(self.raw.get_with_options(options).await?)
    }

    /// List the children of a carousel.
    pub async fn children(
        &self,
        media_id: &str,
        fields: impl Into<FieldList>,
    ) -> Result<Response<DataList<Media>>, Error> {
        Response::parse::<BasicDisplay>(self.raw.children(media_id, fields).await?)
    }

    /// List the children of a carousel.
    pub async fn children_with_options(
        &self,
        options: &MediaChildrenOptions,
    ) -> Result<Response<DataList<Media>>, Error> {
        Response::parse::<BasicDisplay>(self.raw.children_with_options(options).await?)
    }
}
