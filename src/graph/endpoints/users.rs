use crate::{
    graph::{
        options::{
            UserMediaOptions,
            UserOptions,
            UserStoriesOptions,
            UserTagsOptions,
        },
        Graph,
        GraphClient,
        Media,
        User,
    },
    DataList,
    Error,
    FieldList,
    RawResponse,
    Response,
};

/// Raw user endpoints
#[derive(Debug, Copy, Clone)]
pub struct UsersRawEndpoint<'a> {
    client: &'a GraphClient,
}

impl<'a> UsersRawEndpoint<'a> {
    /// Make a new [`UsersRawEndpoint`].
    pub fn new(client: &'a GraphClient) -> Self {
        Self { client }
    }

    /// Get a user by id.
    pub async fn get(
        &self,
        user_id: &str,
        fields: impl Into<FieldList>,
    ) -> Result<RawResponse, Error> {
        let mut options = UserOptions::new();
        options.user_id(user_id).fields(fields);
        self.get_with_options(&options).await
    }

    /// Get a user.
    pub async fn get_with_options(&self, options: &UserOptions) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Get a page of a user's media.
    pub async fn media(
        &self,
        user_id: &str,
        fields: impl Into<FieldList>,
        limit: Option<u32>,
        after: Option<&str>,
    ) -> Result<RawResponse, Error> {
        let options = UserMediaOptions {
            user_id: Some(user_id.to_string()),
            fields: fields.into(),
            limit,
            after: after.map(String::from),
            ..Default::default()
        };
        self.media_with_options(&options).await
    }

    /// Get a page of a user's media.
    pub async fn media_with_options(
        &self,
        options: &UserMediaOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Get a user's live stories.
    pub async fn stories(
        &self,
        user_id: &str,
        fields: impl Into<FieldList>,
    ) -> Result<RawResponse, Error> {
        let mut options = UserStoriesOptions::new();
        options.user_id(user_id).fields(fields);
        self.stories_with_options(&options).await
    }

    /// Get a user's live stories.
    pub async fn stories_with_options(
        &self,
        options: &UserStoriesOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Get a page of the media a user is tagged in.
    pub async fn tags(
        &self,
        user_id: &str,
        fields: impl Into<FieldList>,
        limit: Option<u32>,
        after: Option<&str>,
    ) -> Result<RawResponse, Error> {
        let options = UserTagsOptions {
            user_id: Some(user_id.to_string()),
            fields: fields.into(),
            limit,
            after: after.map(String::from),
            ..Default::default()
        };
        self.tags_with_options(&options).await
    }

    /// Get a page of the media a user is tagged in.
    pub async fn tags_with_options(&self, options: &UserTagsOptions) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }
}

/// User endpoints
#[derive(Debug, Copy, Clone)]
pub struct UsersEndpoint<'a> {
    raw: UsersRawEndpoint<'a>,
}

impl<'a> UsersEndpoint<'a> {
    /// Make a new [`UsersEndpoint`].
    pub fn new(raw: UsersRawEndpoint<'a>) -> Self {
        Self { raw }
    }

    /// The raw endpoints
    pub fn raw(&self) -> &UsersRawEndpoint<'a> {
        &self.raw
    }

    /// Get a user by id.
    pub async fn get(
        &self,
        user_id: &str,
        fields: impl Into<FieldList>,
    ) -> Result<Response<User>, Error> {
        Response::parse::<Graph>(self.raw.get(user_id, fields).await?)
    }

    /// Get a user.
    pub async fn get_with_options(&self, options: &UserOptions) -> Result<Response<User>, Error> {
        Response::parse::<Graph>(self.raw.get_with_options(options).await?)
    }

    /// Get a page of a user's media.
    pub async fn media(
        &self,
        user_id: &str,
        fields: impl Into<FieldList>,
        limit: Option<u32>,
        after: Option<&str>,
    ) -> Result<Response<DataList<Media>>, Error> {
        Response::parse::<Graph>(self.raw.media(user_id, fields, limit, after).await?)
    }

    /// Get a page of a user's media.
    pub async fn media_with_options(
        &self,
        options: &UserMediaOptions,
    ) -> Result<Response<DataList<Media>>, Error> {
        Response::parse::<Graph>(self.raw.media_with_options(options).await?)
    }

    /// Get a user's live stories.
    pub async fn stories(
        &self,
        user_id: &str,
        fields: impl Into<FieldList>,
    ) -> Result<Response<DataList<Media>>, Error> {
        Response::parse::<Graph>(self.raw.stories(user_id, fields).await?)
    }

    /// Get a user's live stories.
    pub async fn stories_with_options(
        &self,
        options: &UserStoriesOptions,
    ) -> Result<Response<DataList<Media>>, Error> {
        Response::parse::<Graph>(self.raw.stories_with_options(options).await?)
    }

    /// Get a page of the media a user is tagged in.
    pub async fn tags(
        &self,
        user_id: &str,
        fields: impl Into<FieldList>,
        limit: Option<u32>,
        after: Option<&str>,
    ) -> Result<Response<DataList<Media>>, Error> {
        Response::parse::<Graph>(self.raw.tags(user_id, fields, limit, after).await?)
    }

    /// Get a page of the media a user is tagged in.
    pub async fn tags_with_options(
        &self,
        options: &UserTagsOptions,
    ) -> Result<Response<DataList<Media>>, Error> {
        Response::parse::<Graph>(self.raw.tags_with_options(options).await?)
    }
}
