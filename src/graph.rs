//! The graph api, hosted at `graph.facebook.com`.

/// The graph client
mod client;
/// Typed and raw endpoints
pub mod endpoints;
/// Field names per model
pub mod fields;
/// Per-endpoint request options
pub mod options;
/// Graph scopes
pub mod scopes;
/// Graph api types
pub mod types;

pub use self::{
    client::{
        GraphClient,
        DEFAULT_VERSION,
    },
    endpoints::{
        CommentsEndpoint,
        CommentsRawEndpoint,
        HashtagsEndpoint,
        HashtagsRawEndpoint,
        MediaEndpoint,
        MediaRawEndpoint,
        UsersEndpoint,
        UsersRawEndpoint,
    },
    types::{
        AccessToken,
        Comment,
        CommentAuthor,
        Hashtag,
        IdResponse,
        Media,
        ObjectRef,
        SuccessResponse,
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
    OAuthErrorKind,
};
use reqwest::StatusCode;

/// Error classification for the graph api.
#[derive(Debug, Copy, Clone)]
pub struct Graph;

impl ApiGeneration for Graph {
    const NAME: &'static str = "graph";

    fn classify_error(response: &RawResponse) -> Error {
        classify_error(response.status, ApiError::from_graph_body(&response.body))
    }
}

/// Classify a graph style error by its code.
pub(crate) fn classify_error(status: StatusCode, error: Option<ApiError>) -> Error {
    let error = match error {
        Some(error) => error,
        None if status == StatusCode::NOT_FOUND => {
            return Error::NotFound {
                status,
                error: None,
            }
        }
        None => {
            return Error::Http {
                status,
                error: None,
            }
        }
    };

    let is_oauth = error.kind() == Some("OAuthException");
    let kind = match (error.code, error.subcode) {
        (Some(4 | 17 | 32 | 613), _) => return Error::RateLimit { status, error },
        (Some(190 | 102), _) => OAuthErrorKind::AccessToken,
        (Some(10 | 200..=299), _) => OAuthErrorKind::Permissions,
        (Some(803), _) | (Some(100), Some(33)) => {
            return Error::NotFound {
                status,
                error: Some(error),
            }
        }
        (Some(100), _) => OAuthErrorKind::Parameter,
        _ if status == StatusCode::TOO_MANY_REQUESTS => return Error::RateLimit { status, error },
        _ if is_oauth => OAuthErrorKind::Other,
        _ if status == StatusCode::NOT_FOUND => {
            return Error::NotFound {
                status,
                error: Some(error),
            }
        }
        _ => {
            return Error::Http {
                status,
                error: Some(error),
            }
        }
    };

    Error::OAuth {
        kind,
        status,
        error,
    }
}

/// The graph api service.
#[derive(Debug, Clone)]
pub struct GraphService {
    client: GraphClient,
}

impl GraphService {
    /// Make a service from a client.
    pub fn from_client(client: GraphClient) -> Self {
        Self { client }
    }

    /// Make a service from an access token.
    pub fn from_access_token(access_token: &str) -> Result<Self, Error> {
        crate::util::require_non_empty(access_token, "access_token")?;
        Ok(Self::from_client(
            GraphClient::new().with_access_token(access_token),
        ))
    }

    /// The underlying client.
    pub fn client(&self) -> &GraphClient {
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

    /// Comment endpoints
    pub fn comments(&self) -> CommentsEndpoint<'_> {
        CommentsEndpoint::new(self.client.comments())
    }

    /// Hashtag endpoints
    pub fn hashtags(&self) -> HashtagsEndpoint<'_> {
        HashtagsEndpoint::new(self.client.hashtags())
    }
}
