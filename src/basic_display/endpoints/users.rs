use crate::{
    basic_display::{
        options::{
            UserMediaOptions,
            UserOptions,
        },
        BasicDisplay,
        BasicDisplayClient,
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
    client: &'a BasicDisplayClient,
}

impl<'a> UsersRawEndpoint<'a> {
    /// Make a new [`UsersRawEndpoint`].
    pub fn new(client: &'a BasicDisplayClient) -> Self {
        Self { client }
    }

    /// Get the authenticated user.
    pub async fn get_me(&self, fields: impl Into<FieldList>) -> Result<RawResponse, Error> {
        let mut options = UserOptions::new();
        options.fields(fields);
        self.get_with_options(&options).await
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

    /// Get the authenticated user's media.
    pub async fn media(
        &self,
        fields: impl Into<FieldList>,
        limit: Option<u32>,
        after: Option<&str>,
    ) -> Result<RawResponse, Error> {
        let options = UserMediaOptions {
            fields: fields.into(),
            limit,
            after: after.map(String::from),
            ..Default::default()
        };
        self.media_with_options(&options).await
    }

    /// Get a user's media.
    pub async fn media_with_options(
        &self,
        options: &UserMediaOptions,
    ) -> Result<RawResponse, Error> {
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

    /// Get the authenticated user.
    pub async fn get_me(&self, fields: impl Into<FieldList>) -> Result<Response<User>, Error> {
        Response::parse::<BasicDisplay>(self.raw.get_me(fields).await?)
    }

    /// Get a user by id.
    pub async fn get(
        &self,
        user_id: &str,
        fields: impl Into<FieldList>,
    ) -> Result<Response<User>, Error> {
        Response::parse::<BasicDisplay>(self.raw.get(user_id, fields).await?)
    }

    /// Get a user.
    pub async fn get_with_options(&self, options: &UserOptions) -> Result<Response<User>, Error> {
        Response::parse::<BasicDisplay>(self.raw.get_with_options(options).await?)
    }

    /// Get the authenticated user's media.
    pub async fn media(
        &self,
        fields: impl Into<FieldList>,
        limit: Option<u32>,
        after: Option<&str>,
    ) -> Result<Response<DataList<Media>>, Error> {
        Response::parse::<BasicDisplay>(self.raw.media(fields, limit, after).await?)
    }

    /// Get a user's media.
    pub async fn media_with_options(
        &self,
        options: &UserMediaOptions,
    ) -> Result<Response<DataList<Media>>, Error> {
        Response::parse::<BasicDisplay>(self.raw.media_with_options(options).await?)
    }
}
