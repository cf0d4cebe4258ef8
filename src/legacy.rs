//! The legacy v1 REST api.
//!
//! Responses are wrapped in a `{"meta": ..., "data": ..., "pagination": ...}` envelope.

/// The legacy client
mod client;
/// Typed and raw endpoints
pub mod endpoints;
/// Per-endpoint request options
pub mod options;
/// Legacy scopes
pub mod scopes;
/// Legacy api types
pub mod types;

pub use self::{
    client::{
        sign,
        LegacyClient,
    },
    endpoints::{
        LegacyResponse,
        LocationsEndpoint,
        LocationsRawEndpoint,
        MediaEndpoint,
        MediaRawEndpoint,
        RelationshipsEndpoint,
        RelationshipsRawEndpoint,
        TagsEndpoint,
        TagsRawEndpoint,
        UsersEndpoint,
        UsersRawEndpoint,
    },
    types::{
        AccessTokenResponse,
        Comment,
        EmptyEnvelope,
        Envelope,
        Location,
        Media,
        Meta,
        Pagination,
        Relationship,
        Tag,
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

/// Error classification for the legacy api.
#[derive(Debug, Copy, Clone)]
pub struct Legacy;

impl ApiGeneration for Legacy {
    const NAME: &'static str = "legacy";

    fn classify_error(response: &RawResponse) -> Error {
        let status = response.status;
        let error = match ApiError::from_legacy_body(&response.body) {
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

        let error_type = error.kind.clone().unwrap_or_default();
        let kind = match error_type.as_str() {
            "APINotFoundError" => {
                return Error::NotFound {
                    status,
                    error: Some(error),
                }
            }
            "OAuthRateLimitException" => return Error::RateLimit { status, error },
            "OAuthAccessTokenException" => OAuthErrorKind::AccessToken,
            "OAuthForbiddenException" => OAuthErrorKind::Forbidden,
            "OAuthParameterException" | "APIInvalidParametersError" => OAuthErrorKind::Parameter,
            "OAuthPermissionsException" => OAuthErrorKind::Permissions,
            "OAuthException" => OAuthErrorKind::Other,
            _ if status == StatusCode::TOO_MANY_REQUESTS => {
                return Error::RateLimit { status, error }
            }
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
}

/// The rate limit headers sent with legacy responses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RateLimit {
    /// The number of calls allowed per hour
    pub limit: u32,

    /// The number of calls left this hour
    pub remaining: u32,
}

impl RateLimit {
    /// Read the rate limit headers from a response.
    pub fn from_response(response: &RawResponse) -> Option<Self> {
        let limit = response.header("x-ratelimit-limit")?.trim().parse().ok()?;
        let remaining = response
            .header("x-ratelimit-remaining")?
            .trim()
            .parse()
            .ok()?;

        Some(Self { limit, remaining })
    }
}

/// The legacy api service.
///
/// This exposes the typed endpoints.
/// Use [`LegacyService::client`] for the raw ones.
#[derive(Debug, Clone)]
pub struct LegacyService {
    client: LegacyClient,
}

impl LegacyService {
    /// Make a service from a client.
    pub fn from_client(client: LegacyClient) -> Self {
        Self { client }
    }

    /// Make a service from an access token.
    pub fn from_access_token(access_token: &str) -> Result<Self, Error> {
        crate::util::require_non_empty(access_token, "access_token")?;
        Ok(Self::from_client(
            LegacyClient::new().with_access_token(access_token),
        ))
    }

    /// Make a service for unauthenticated requests, identified by a client id.
    pub fn from_client_id(client_id: &str) -> Result<Self, Error> {
        crate::util::require_non_empty(client_id, "client_id")?;
        Ok(Self::from_client(
            LegacyClient::new().with_client_id(client_id),
        ))
    }

    /// The underlying client.
    pub fn client(&self) -> &LegacyClient {
        &self.client
    }

    /// User endpoints
    pub fn users(&self) -> UsersEndpoint<'_> {
        UsersEndpoint::new(self.client.users())
    }

    /// Relationship endpoints
    pub fn relationships(&self) -> RelationshipsEndpoint<'_> {
        RelationshipsEndpoint::new(self.client.relationships())
    }

    /// Media endpoints
    pub fn media(&self) -> MediaEndpoint<'_> {
        MediaEndpoint::new(self.client.media())
    }

    /// Tag endpoints
    pub fn tags(&self) -> TagsEndpoint<'_> {
        TagsEndpoint::new(self.client.tags())
    }

    /// Location endpoints
    pub fn locations(&self) -> LocationsEndpoint<'_> {
        LocationsEndpoint::new(self.client.locations())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use reqwest::header::{
        HeaderMap,
        HeaderValue,
        CONTENT_TYPE,
    };

    fn classify(status: StatusCode, body: &str) -> Error {
        Legacy::classify_error(&RawResponse::json_body(status, body))
    }

    #[test]
    fn access_token_error() {
        let error = classify(
            StatusCode::BAD_REQUEST,
            r#"{"meta":{"error_type":"OAuthAccessTokenException","code":400,"error_message":"The access_token provided is invalid."}}"#,
        );
        assert!(error.oauth_kind() == Some(OAuthErrorKind::AccessToken));
        assert!(error.api_error().and_then(|error| error.code) == Some(400));
    }

    #[test]
    fn oauth_kinds() {
        let kinds = [
            ("OAuthForbiddenException", OAuthErrorKind::Forbidden),
            ("OAuthParameterException", OAuthErrorKind::Parameter),
            ("APIInvalidParametersError", OAuthErrorKind::Parameter),
            ("OAuthPermissionsException", OAuthErrorKind::Permissions),
            ("OAuthException", OAuthErrorKind::Other),
        ];

        for (error_type, expected) in kinds {
            let body = format!(
                r#"{{"meta":{{"error_type":"{error_type}","code":400,"error_message":"nope"}}}}"#
            );
            let error = classify(StatusCode::BAD_REQUEST, &body);
            assert!(
                error.oauth_kind() == Some(expected),
                "{error_type} was classified as {error:?}"
            );
        }
    }

    #[test]
    fn rate_limit_error() {
        let error = classify(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"meta":{"error_type":"OAuthRateLimitException","code":429,"error_message":"The maximum number of requests per hour has been exceeded."}}"#,
        );
        assert!(matches!(error, Error::RateLimit { .. }));
    }

    #[test]
    fn not_found_error() {
        let error = classify(
            StatusCode::BAD_REQUEST,
            r#"{"meta":{"error_type":"APINotFoundError","code":400,"error_message":"this user does not exist"}}"#,
        );
        assert!(matches!(error, Error::NotFound { error: Some(_), .. }));
    }

    #[test]
    fn unknown_error_type() {
        let error = classify(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"meta":{"error_type":"APIError","code":500,"error_message":"oops"}}"#,
        );
        assert!(matches!(
            error,
            Error::Http {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: Some(_)
            }
        ));
    }

    #[test]
    fn unreadable_envelope() {
        let error = classify(StatusCode::NOT_FOUND, "{}");
        assert!(matches!(error, Error::NotFound { error: None, .. }));

        let error = classify(StatusCode::BAD_REQUEST, "[]");
        assert!(matches!(error, Error::Http { error: None, .. }));
    }

    #[test]
    fn rate_limit_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("5000"));
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("4999"));
        let response = RawResponse::new(StatusCode::OK, headers, "{}");

        let rate_limit = RateLimit::from_response(&response).expect("missing rate limit");
        assert!(rate_limit.limit == 5000);
        assert!(rate_limit.remaining == 4999);

        let response = RawResponse::json_body(StatusCode::OK, "{}");
        assert!(RateLimit::from_response(&response).is_none());
    }

    #[test]
    fn service_requires_token() {
        assert!(matches!(
            LegacyService::from_access_token(""),
            Err(Error::InvalidArgument("access_token"))
        ));
        assert!(LegacyService::from_access_token("token").is_ok());
        assert!(matches!(
            LegacyService::from_client_id(" "),
            Err(Error::InvalidArgument("client_id"))
        ));
    }
}
