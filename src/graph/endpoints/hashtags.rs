use crate::{
    graph::{
        options::{
            HashtagMediaKind,
            HashtagMediaOptions,
            HashtagOptions,
            HashtagSearchOptions,
        },
        Graph,
        GraphClient,
        Hashtag,
        Media,
    },
    DataList,
    Error,
    FieldList,
    RawResponse,
    Response,
};

/// Raw hashtag endpoints
#[derive(Debug, Copy, Clone)]
pub struct HashtagsRawEndpoint<'a> {
    client: &'a GraphClient,
}

impl<'a> HashtagsRawEndpoint<'a> {
    /// Make a new [`HashtagsRawEndpoint`].
    pub fn new(client: &'a GraphClient) -> Self {
        Self { client }
    }

    /// Look up a hashtag id by name.
    pub async fn search(&self, user_id: &str, query: &str) -> Result<RawResponse, Error> {
        let mut options = HashtagSearchOptions::new();
        options.user_id(user_id).query(query);
        self.search_with_options(&options).await
    }

    /// Look up a hashtag id by name.
    pub async fn search_with_options(
        &self,
        options: &HashtagSearchOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Get a hashtag by id.
    pub async fn get(
        &self,
        hashtag_id: &str,
        fields: impl Into<FieldList>,
    ) -> Result<RawResponse, Error> {
        let mut options = HashtagOptions::new();
        options.hashtag_id(hashtag_id).fields(fields);
        self.get_with_options(&options).await
    }

    /// Get a hashtag.
    pub async fn get_with_options(&self, options: &HashtagOptions) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Get a page of recent media with a hashtag.
    pub async fn recent_media(
        &self,
        hashtag_id: &str,
        user_id: &str,
        fields: impl Into<FieldList>,
        after: Option<&str>,
    ) -> Result<RawResponse, Error> {
        let options = media_options(HashtagMediaKind::Recent, hashtag_id, user_id, fields, after);
        self.media_with_options(&options).await
    }

    /// Get a page of top media with a hashtag.
    pub async fn top_media(
        &self,
        hashtag_id: &str,
        user_id: &str,
        fields: impl Into<FieldList>,
        after: Option<&str>,
    ) -> Result<RawResponse, Error> {
        let options = media_options(HashtagMediaKind::Top, hashtag_id, user_id, fields, after);
        self.media_with_options(&options).await
    }

    /// Get a page of media with a hashtag.
    pub async fn media_with_options(
        &self,
        options: &HashtagMediaOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }
}

fn media_options(
    kind: HashtagMediaKind,
    hashtag_id: &str,
    user_id: &str,
    fields: impl Into<FieldList>,
    after: Option<&str>,
) -> HashtagMediaOptions {
    HashtagMediaOptions {
        hashtag_id: Some(hashtag_id.to_string()),
        user_id: Some(user_id.to_string()),
        fields: fields.into(),
        after: after.map(String::from),
        ..HashtagMediaOptions::new(kind)
    }
}

/// Hashtag endpoints
#[derive(Debug, Copy, Clone)]
pub struct HashtagsEndpoint<'a> {
    raw: HashtagsRawEndpoint<'a>,
}

impl<'a> HashtagsEndpoint<'a> {
    /// Make a new [`HashtagsEndpoint`].
    pub fn new(raw: HashtagsRawEndpoint<'a>) -> Self {
        Self { raw }
    }

    /// The raw endpoints
    pub fn raw(&self) -> &HashtagsRawEndpoint<'a> {
        &self.raw
    }

    /// Look up a hashtag id by name.
    pub async fn search(
        &self,
        user_id: &str,
        query: &str,
    ) -> Result<Response<DataList<Hashtag>>, Error> {
        Response::parse::<Graph>(self.raw.search(user_id, query).await?)
    }

    /// Look up a hashtag id by name.
    pub async fn search_with_options(
        &self,
        options: &HashtagSearchOptions,
    ) -> Result<Response<DataList<Hashtag>>, Error> {
        Response::parse::<Graph>(self.raw.search_with_options(options).await?)
    }

    /// Get a hashtag by id.
    pub async fn get(
        &self,
        hashtag_id: &str,
        fields: impl Into<FieldList>,
    ) -> Result<Response<Hashtag>, Error> {
        Response::parse::<Graph>(self.raw.get(hashtag_id, fields).await?)
    }

    /// Get a hashtag.
    pub async fn get_with_options(
        &self,
        options: &HashtagOptions,
    ) -> Result<Response<Hashtag>, Error> {
        Response::parse::<Graph>(self.raw.get_with_options(options).await?)
    }

    /// Get a page of recent media with a hashtag.
    pub async fn recent_media(
        &self,
        hashtag_id: &str,
        user_id: &str,
        fields: impl Into<FieldList>,
        after: Option<&str>,
    ) -> Result<Response<DataList<Media>>, Error> {
        Response::parse::<Graph>(
            self.raw
                .recent_media(hashtag_id, user_id, fields, after)
                .await?,
        )
    }

    /// Get a page of top media with a hashtag.
    pub async fn top_media(
        &self,
        hashtag_id: &str,
        user_id: &str,
        fields: impl Into<FieldList>,
        after: Option<&str>,
    ) -> Result<Response<DataList<Media>>, Error> {
        Response::parse::<Graph>(self.raw.top_media(hashtag_id, user_id, fields, after).await?)
    }

    /// Get a page of media with a hashtag.
    pub async fn media_with_options(
        &self,
        options: &HashtagMediaOptions,
    ) -> Result<Response<DataList<Media>>, Error> {
        Response::parse::<Graph>(self.raw.media_with_options(options).await?)
    }
}
