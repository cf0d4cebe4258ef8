use super::LegacyResponse;
use crate::{
    legacy::{
        options::{
            TagOptions,
            TagRecentMediaOptions,
            TagSearchOptions,
        },
        Legacy,
        LegacyClient,
        Media,
        Tag,
    },
    Error,
    RawResponse,
    Response,
};

/// Raw tag endpoints
#[derive(Debug, Copy, Clone)]
pub struct TagsRawEndpoint<'a> {
    client: &'a LegacyClient,
}

impl<'a> TagsRawEndpoint<'a> {
    /// Make a new [`TagsRawEndpoint`].
    pub fn new(client: &'a LegacyClient) -> Self {
        Self { client }
    }

    /// Get a tag by name.
    pub async fn get(&self, tag_name: &str) -> Result<RawResponse, Error> {
        let mut options = TagOptions::new();
        options.tag_name(tag_name);
        self.get_with_options(&options).await
    }

    /// Get a tag.
    pub async fn get_with_options(&self, options: &TagOptions) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Get recent media with a tag.
    pub async fn recent_media(
        &self,
        tag_name: &str,
        count: Option<u32>,
    ) -> Result<RawResponse, Error> {
        let options = TagRecentMediaOptions {
            tag_name: Some(tag_name.to_string()),
            count,
            ..Default::default()
        };
        self.recent_media_with_options(&options).await
    }

    /// Get recent media with a tag.
    pub async fn recent_media_with_options(
        &self,
        options: &TagRecentMediaOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Search for tags by name.
    pub async fn search(&self, query: &str) -> Result<RawResponse, Error> {
        let mut options = TagSearchOptions::new();
        options.query(query);
        self.search_with_options(&options).await
    }

    /// Search for tags by name.
    pub async fn search_with_options(
        &self,
        options: &TagSearchOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }
}

/// Tag endpoints
#[derive(Debug, Copy, Clone)]
pub struct TagsEndpoint<'a> {
    raw: TagsRawEndpoint<'a>,
}

impl<'a> TagsEndpoint<'a> {
    /// Make a new [`TagsEndpoint`].
    pub fn new(raw: TagsRawEndpoint<'a>) -> Self {
        Self { raw }
    }

    /// The raw endpoints
    pub fn raw(&self) -> &TagsRawEndpoint<'a> {
        &self.raw
    }

    /// Get a tag by name.
    pub async fn get(&self, tag_name: &str) -> Result<LegacyResponse<Tag>, Error> {
        Response::parse::<Legacy>(self.raw.get(tag_name).await?)
    }

    /// Get a tag.
    pub async fn get_with_options(&self, options: &TagOptions) -> Result<LegacyResponse<Tag>, Error> {
        Response::parse::<Legacy>(self.raw.get_with_options(options).await?)
    }

    /// Get recent media with a tag.
    pub async fn recent_media(
        &self,
        tag_name: &str,
        count: Option<u32>,
    ) -> Result<LegacyResponse<Vec<Media>>, Error> {
        Response::parse::<Legacy>(self.raw.recent_media(tag_name, count).await?)
    }

    /// Get recent media with a tag.
    pub async fn recent_media_with_options(
        &self,
        options: &TagRecentMediaOptions,
    ) -> Result<LegacyResponse<Vec<Media>>, Error> {
        Response::parse::<Legacy>(self.raw.recent_media_with_options(options).await?)
    }

    /// Search for tags by name.
    pub async fn search(&self, query: &str) -> Result<LegacyResponse<Vec<Tag>>, Error> {
        Response::parse::<Legacy>(self.raw.search(query).await?)
    }

    /// Search for tags by name.
    pub async fn search_with_options(
        &self,
        options: &TagSearchOptions,
    ) -> Result<LegacyResponse<Vec<Tag>>, Error> {
        Response::parse::<Legacy>(self.raw.search_with_options(options).await?)
    }
}
