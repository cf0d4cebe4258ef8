use super::user_segment;
use crate::{
    ApiRequest,
    Error,
};

/// Options for getting a user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserOptions {
    /// The user id.
    ///
    /// `None` means the authenticated user.
    pub user_id: Option<u64>,
}

impl UserOptions {
    /// Make options for the authenticated user.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user id.
    pub fn user_id(&mut self, user_id: u64) -> &mut Self {
        self.user_id = Some(user_id);
        self
    }

    /// Build the request.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        Ok(ApiRequest::get(format!(
            "/users/{}",
            user_segment(self.user_id)
        )))
    }
}

/// Options for getting a user's recent media
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecentMediaOptions {
    /// The user id.
    ///
    /// `None` means the authenticated user.
    pub user_id: Option<u64>,

    /// The number of media to return
    pub count: Option<u32>,

    /// Return media later than this id
    pub min_id: Option<String>,

    /// Return media earlier than this id
    pub max_id: Option<String>,
}

impl UserRecentMediaOptions {
    /// Make new options for the authenticated user.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user id.
    pub fn user_id(&mut self, user_id: u64) -> &mut Self {
        self.user_id = Some(user_id);
        self
    }

    /// Set the count.
    pub fn count(&mut self, count: u32) -> &mut Self {
        self.count = Some(count);
        self
    }

    /// Set the min id.
    pub fn min_id(&mut self, min_id: impl Into<String>) -> &mut Self {
        self.min_id = Some(min_id.into());
        self
    }

    /// Set the max id.
    pub fn max_id(&mut self, max_id: impl Into<String>) -> &mut Self {
        self.max_id = Some(max_id.into());
        self
    }

    /// Build the request.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let mut request = ApiRequest::get(format!(
            "/users/{}/media/recent",
            user_segment(self.user_id)
        ));
        request
            .append_query_int("count", self.count)
            .append_query_opt("min_id", self.min_id.as_deref())
            .append_query_opt("max_id", self.max_id.as_deref());
        Ok(request)
    }
}

/// Options for getting the media the authenticated user liked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedMediaOptions {
    /// The number of media to return
    pub count: Option<u32>,

    /// Return media liked before this one
    pub max_like_id: Option<String>,
}

impl LikedMediaOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count.
    pub fn count(&mut self, count: u32) -> &mut Self {
        self.count = Some(count);
        self
    }

    /// Set the max like id.
    pub fn max_like_id(&mut self, max_like_id: impl Into<String>) -> &mut Self {
        self.max_like_id = Some(max_like_id.into());
        self
    }

    /// Build the request.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let mut request = ApiRequest::get("/users/self/media/liked");
        request
            .append_query_int("count", self.count)
            .append_query_opt("max_like_id", self.max_like_id.as_deref());
        Ok(request)
    }
}

/// Options for searching users by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearchOptions {
    /// The search query
    pub query: Option<String>,

    /// The number of users to return
    pub count: Option<u32>,
}

impl UserSearchOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query.
    pub fn query(&mut self, query: impl Into<String>) -> &mut Self {
        self.query = Some(query.into());
        self
    }

    /// Set the count.
    pub fn count(&mut self, count: u32) -> &mut Self {
        self.count = Some(count);
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the query is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let query = crate::util::required(self.query.as_deref(), "query")?;

        let mut request = ApiRequest::get("/users/search").with_query("q", query);
        request.append_query_int("count", self.count);
        Ok(request)
    }
}
