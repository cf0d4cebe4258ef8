use super::LegacyResponse;
use crate::{
    legacy::{
        options::{
            LikedMediaOptions,
            UserOptions,
            UserRecentMediaOptions,
            UserSearchOptions,
        },
        Legacy,
        LegacyClient,
        Media,
        User,
    },
    Error,
    RawResponse,
    Response,
};

/// Raw user endpoints
#[derive(Debug, Copy, Clone)]
pub struct UsersRawEndpoint<'a> {
    client: &'a LegacyClient,
}

impl<'a> UsersRawEndpoint<'a> {
    /// Make a new [`UsersRawEndpoint`].
    pub fn new(client: &'a LegacyClient) -> Self {
        Self { client }
    }

    /// Get the authenticated user.
    pub async fn get_self(&self) -> Result<RawResponse, Error> {
        self.get_with_options(&UserOptions::new()).await
    }

    /// Get a user by id.
    pub async fn get(&self, user_id: u64) -> Result<RawResponse, Error> {
        let mut options = UserOptions::new();
        options.user_id(user_id);
        self.get_with_options(&options).await
    }

    /// Get a user.
    pub async fn get_with_options(&self, options: &UserOptions) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Get the recent media of a user, or the authenticated user if `user_id` is `None`.
    pub async fn recent_media(
        &self,
        user_id: Option<u64>,
        count: Option<u32>,
    ) -> Result<RawResponse, Error> {
        let options = UserRecentMediaOptions {
            user_id,
            count,
            ..Default::default()
        };
        self.recent_media_with_options(&options).await
    }

    /// Get the recent media of a user.
    pub async fn recent_media_with_options(
        &self,
        options: &UserRecentMediaOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Get the media the authenticated user liked.
    pub async fn liked_media(&self, count: Option<u32>) -> Result<RawResponse, Error> {
        let options = LikedMediaOptions {
            count,
            ..Default::default()
        };
        self.liked_media_with_options(&options).await
    }

    /// Get the media the authenticated user liked.
    pub async fn liked_media_with_options(
        &self,
        options: &LikedMediaOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Search for users by name.
    pub async fn search(&self, query: &str) -> Result<RawResponse, Error> {
        let mut options = UserSearchOptions::new();
        options.query(query);
        self.search_with_options(&options).await
    }

    /// Search for users by name.
    pub async fn search_with_options(
        &self,
        options: &UserSearchOptions,
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
    pub async fn get_self(&self) -> Result<LegacyResponse<User>, Error> {
        Response::parse::<Legacy>(self.raw.get_self().await?)
    }

    /// Get a user by id.
    pub async fn get(&self, user_id: u64) -> Result<LegacyResponse<User>, Error> {
        Response::parse::<Legacy>(self.raw.get(user_id).await?)
    }

    /// Get a user.
    pub async fn get_with_options(
        &self,
        options: &UserOptions,
    ) -> Result<LegacyResponse<User>, Error> {
        Response::parse::<Legacy>(self.raw.get_with_options(options).await?)
    }

    /// Get the recent media of a user, or the authenticated user if `user_id` is `None`.
    pub async fn recent_media(
        &self,
        user_id: Option<u64>,
        count: Option<u32>,
    ) -> Result<LegacyResponse<Vec<Media>>, Error> {
        Response::parse::<Legacy>(self.raw.recent_media(user_id, count).await?)
    }

    /// Get the recent media of a user.
    pub async fn recent_media_with_options(
        &self,
        options: &UserRecentMediaOptions,
    ) -> Result<LegacyResponse<Vec<Media>>, Error> {
        Response::parse::<Legacy>(self.raw.recent_media_with_options(options).await?)
    }

    /// Get the media the authenticated user liked.
    pub async fn liked_media(&self, count: Option<u32>) -> Result<LegacyResponse<Vec<Media>>, Error> {
        Response::parse::<Legacy>(self.raw.liked_media(count).await?)
    }

    /// Get the media the authenticated user liked.
    pub async fn liked_media_with_options(
        &self,
        options: &LikedMediaOptions,
    ) -> Result<LegacyResponse<Vec<Media>>, Error> {
        Response::parse::<Legacy>(self.raw.liked_media_with_options(options).await?)
    }

    /// Search for users by name.
    pub async fn search(&self, query: &str) -> Result<LegacyResponse<Vec<User>>, Error> {
        Response::parse::<Legacy>(self.raw.search(query).await?)
    }

    /// Search for users by name.
    pub async fn search_with_options(
        &self,
        options: &UserSearchOptions,
    ) -> Result<LegacyResponse<Vec<User>>, Error> {
        Response::parse::<Legacy>(self.raw.search_with_options(options).await?)
    }
}
