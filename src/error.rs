use reqwest::StatusCode;

/// An error payload returned by the platform.
///
/// This is a projection of the api's own error envelope.
/// The legacy api reports `error_type`/`error_message`,
/// while the graph and basic display apis report `type`/`message`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ApiError {
    /// The error code.
    #[serde(default)]
    pub code: Option<i64>,

    /// The error subcode.
    #[serde(default, rename = "error_subcode")]
    pub subcode: Option<i64>,

    /// The error type string, like `OAuthException`.
    #[serde(default, rename = "type", alias = "error_type")]
    pub kind: Option<String>,

    /// The error message.
    #[serde(default, alias = "error_message")]
    pub message: String,

    /// The trace id, useful when reporting issues to the platform.
    #[serde(default, rename = "fbtrace_id")]
    pub trace_id: Option<String>,
}

impl ApiError {
    /// Get the error type string, if present.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Try to read a graph style envelope, `{"error": {...}}`.
    pub(crate) fn from_graph_body(body: &str) -> Option<Self> {
        #[derive(serde::Deserialize)]
        struct Envelope {
            error: ApiError,
        }

        serde_json::from_str::<Envelope>(body)
            .ok()
            .map(|envelope| envelope.error)
    }

    /// Try to read a legacy style envelope.
    ///
    /// Most legacy endpoints nest the error in a `meta` object,
    /// but the oauth endpoints return the same fields at the top level.
    pub(crate) fn from_legacy_body(body: &str) -> Option<Self> {
        #[derive(serde::Deserialize)]
        struct Envelope {
            meta: Option<ApiError>,
            #[serde(flatten)]
            top_level: ApiError,
        }

        let envelope = serde_json::from_str::<Envelope>(body).ok()?;
        match envelope.meta {
            Some(meta) if meta.kind.is_some() => Some(meta),
            _ if envelope.top_level.kind.is_some() => Some(envelope.top_level),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.kind.as_deref(), self.code) {
            (Some(kind), Some(code)) => write!(f, "{kind} ({code}): {}", self.message),
            (Some(kind), None) => write!(f, "{kind}: {}", self.message),
            (None, Some(code)) => write!(f, "({code}): {}", self.message),
            (None, None) => write!(f, "{}", self.message),
        }
    }
}

/// The kind of an oauth error
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OAuthErrorKind {
    /// The access token is missing, invalid or expired.
    AccessToken,

    /// The request is not allowed for this token.
    Forbidden,

    /// A parameter is missing or invalid.
    Parameter,

    /// The token lacks a required permission.
    Permissions,

    /// Any other oauth error.
    Other,
}

/// Library Error Type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reqwest HTTP Error
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// Url Parse Error
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// The response body was expected to be json but could not be parsed
    #[error("invalid json response")]
    InvalidJson {
        /// The parse error
        #[source]
        error: serde_json::Error,

        /// The offending body
        body: Box<str>,
    },

    /// An options value is missing a required property
    #[error("required property `{0}` is not set")]
    MissingProperty(&'static str),

    /// An argument was empty or otherwise invalid
    #[error("argument `{0}` must not be empty")]
    InvalidArgument(&'static str),

    /// The resource does not exist
    #[error("not found ({status})")]
    NotFound {
        /// The http status
        status: StatusCode,

        /// The api error, if the body could be read
        error: Option<ApiError>,
    },

    /// An oauth error
    #[error("oauth error ({kind:?}): {error}")]
    OAuth {
        /// The kind of oauth error
        kind: OAuthErrorKind,

        /// The http status
        status: StatusCode,

        /// The api error
        error: ApiError,
    },

    /// The rate limit was hit
    #[error("rate limit exceeded: {error}")]
    RateLimit {
        /// The http status
        status: StatusCode,

        /// The api error
        error: ApiError,
    },

    /// Any other unsuccessful response
    #[error("invalid http status {status}")]
    Http {
        /// The http status
        status: StatusCode,

        /// The api error, if the body could be read
        error: Option<ApiError>,
    },
}

impl Error {
    /// Get the http status of the response that caused this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Reqwest(error) => error.status(),
            Self::NotFound { status, .. }
            | Self::OAuth { status, .. }
            | Self::RateLimit { status, .. }
            | Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the api error payload, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::OAuth { error, .. } | Self::RateLimit { error, .. } => Some(error),
            Self::NotFound { error, .. } | Self::Http { error, .. } => error.as_ref(),
            _ => None,
        }
    }

    /// Get the kind of oauth error, if this is one.
    pub fn oauth_kind(&self) -> Option<OAuthErrorKind> {
        match self {
            Self::OAuth { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn graph_envelope() {
        let body = r#"{"error":{"message":"Invalid OAuth access token.","type":"OAuthException","code":190,"error_subcode":460,"fbtrace_id":"AbCdEf"}}"#;
        let error = ApiError::from_graph_body(body).expect("missing error");

        assert!(error.code == Some(190));
        assert!(error.subcode == Some(460));
        assert!(error.kind() == Some("OAuthException"));
        assert!(error.message == "Invalid OAuth access token.");
        assert!(error.trace_id.as_deref() == Some("AbCdEf"));
    }

    #[test]
    fn legacy_meta_envelope() {
        let body = r#"{"meta":{"error_type":"OAuthAccessTokenException","code":400,"error_message":"The access_token provided is invalid."}}"#;
        let error = ApiError::from_legacy_body(body).expect("missing error");

        assert!(error.code == Some(400));
        assert!(error.kind() == Some("OAuthAccessTokenException"));
        assert!(error.message == "The access_token provided is invalid.");
        assert!(error.subcode.is_none());
    }

    #[test]
    fn legacy_top_level_envelope() {
        let body = r#"{"error_type":"OAuthException","code":400,"error_message":"Matching code was not found or was already used."}"#;
        let error = ApiError::from_legacy_body(body).expect("missing error");

        assert!(error.kind() == Some("OAuthException"));
        assert!(error.code == Some(400));
    }

    #[test]
    fn success_meta_is_not_an_error() {
        let body = r#"{"meta":{"code":200},"data":{}}"#;
        assert!(ApiError::from_legacy_body(body).is_none());
        assert!(ApiError::from_graph_body(body).is_none());
    }

    #[test]
    fn accessors() {
        let error = Error::RateLimit {
            status: StatusCode::TOO_MANY_REQUESTS,
            error: ApiError {
                code: Some(4),
                subcode: None,
                kind: Some("OAuthException".into()),
                message: "Application request limit reached".into(),
                trace_id: None,
            },
        };

        assert!(error.status() == Some(StatusCode::TOO_MANY_REQUESTS));
        assert!(error.api_error().and_then(|error| error.code) == Some(4));
        assert!(error.oauth_kind().is_none());
        assert!(Error::MissingProperty("media_id").status().is_none());
    }
}
