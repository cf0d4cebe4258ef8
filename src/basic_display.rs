//! The basic display api, hosted at `graph.instagram.com`.

/// The basic display client
mod client;
/// Typed and raw endpoints
pub mod endpoints;
/// Field names per model
pub mod fields;
/// Per-endpoint request options
pub mod options;
/// Basic display scopes
pub mod scopes;
/// Basic display api types
pub mod types;

pub use self::{
    client::BasicDisplayClient,
    endpoints::{
        MediaEndpoint,
        MediaRawEndpoint,
        UsersEndpoint,
        UsersRawEndpoint,
    },
    types::{
        AccountType,
        LongLivedToken,
        Media,
        ShortLivedToken,
        User,
    },
};
use crate::{
    http::{
        ApiGeneration,
        RawResponse,
    },
    ApiError,
    Error,
};

/// Error classification for the basic display api.
///
/// The oauth host answers with legacy shaped errors, the rest with graph shaped ones.
#[derive(Debug, Copy, Clone)]
pub struct BasicDisplay;

impl ApiGeneration for BasicDisplay {
    const NAME: &'static str = "basic display";

    fn classify_error(response: &RawResponse) -> Error {
        let error = ApiError::from_graph_body(&response.body)
            .or_else(|| ApiError::from_legacy_body(&response.body));
        crate::graph::classify_error(response.status, error)
    }
}

/// The basic display api service.
#[derive(Debug, Clone)]
pub struct BasicDisplayService {
    client: BasicDisplayClient,
}

impl BasicDisplayService {
    /// Make a service from a client.
    pub fn from_client(client: BasicDisplayClient) -> Self {
        Self { client }
    }

    /// Make a service from an access token.
    pub fn from_access_token(access_token: &str) -> Result<Self, Error> {
        crate::util::require_non_empty(access_token, "access_token")?;
        Ok(Self::from_client(
            BasicDisplayClient::new().with_access_token(access_token),
        ))
    }

    /// The underlying client.
    pub fn client(&self) -> &BasicDisplayClient {
        &self.client
    }

    /// User endpoints
    pub fn users(&self) -> UsersEndpoint<'_> {
        UsersEndpoint::new(self.client.users())
    }

    /// Media endpoints
    pub fn media(&self) -> MediaEndpoint<'_> {
        MediaEndpoint::new(self.client.media())
    }
}
