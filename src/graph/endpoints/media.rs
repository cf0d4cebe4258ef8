use crate::{
    graph::{
        options::{
            MediaChildrenOptions,
            MediaCommentsOptions,
            MediaOptions,
        },
        Comment,
        Graph,
        GraphClient,
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
    client: &'a GraphClient,
}

impl<'a> MediaRawEndpoint<'a> {
    /// Make a new [`MediaRawEndpoint`].
    pub fn new(client: &'a GraphClient) -> Self {
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

    /// Get a page of comments on a media object.
    pub async fn comments(
        &self,
        media_id: &str,
        fields: impl Into<FieldList>,
        limit: Option<u32>,
        after: Option<&str>,
    ) -> Result<RawResponse, Error> {
        let options = MediaCommentsOptions {
            media_id: Some(media_id.to_string()),
            fields: fields.into(),
            limit,
            after: after.map(String::from),
            ..Default::default()
        };
        self.comments_with_options(&options).await
    }

    /// Get a page of comments on a media object.
    pub async fn comments_with_options(
        &self,
        options: &MediaCommentsOptions,
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
        Response::parse::<Graph>(self.raw.get(media_id, fields).await?)
    }

    /// Get a media object.
    pub async fn get_with_options(&self, options: &MediaOptions) -> Result<Response<Media>, Error> {
        Response::parse::<Graph>(self.raw.get_with_options(options).await?)
    }

    /// List the children of a carousel.
    pub async fn children(
        &self,
        media_id: &str,
        fields: impl Into<FieldList>,
    ) -> Result<Response<DataList<Media>>, Error> {
        Response::parse::<Graph>(self.raw.children(media_id, fields).await?)
    }

    /// List the children of a carousel.
    pub async fn children_with_options(
        &self,
        options: &MediaChildrenOptions,
    ) -> Result<Response<DataList<Media>>, Error> {
        Response::parse::<Graph>(self.raw.children_with_options(options).await?)
    }

    /// Get a page of comments on a media object.
    pub async fn comments(
        &self,
        media_id: &str,
        fields: impl Into<FieldList>,
        limit: Option<u32>,
        after: Option<&str>,
    ) -> Result<Response<DataList<Comment>>, Error> {
        Response::parse::<Graph>(self.raw.comments(media_id, fields, limit, after).await?)
    }

    /// Get a page of comments on a media object.
    pub async fn comments_with_options(
        &self,
        options: &MediaCommentsOptions,
    ) -> Result<Response<DataList<Comment>>, Error> {
        Response::parse::<Graph>(self.raw.comments_with_options(options).await?)
    }
}
