//! A typed client for the legacy, basic display and graph Instagram apis.

/// The basic display api
pub mod basic_display;
mod error;
/// Field names
pub mod field;
/// The graph api
pub mod graph;
/// Requests, responses and the shared http client
pub mod http;
/// The legacy v1 api
pub mod legacy;
mod media_type;
mod paging;
/// Oauth scopes
pub mod scope;
/// Serde and request helpers
pub mod util;

pub use crate::{
    error::{
        ApiError,
        Error,
        OAuthErrorKind,
    },
    field::{
        Field,
        FieldList,
    },
    http::{
        ApiGeneration,
        ApiRequest,
        HttpClient,
        RawResponse,
        Response,
    },
    media_type::MediaType,
    paging::{
        Cursors,
        DataList,
        Paging,
    },
    scope::{
        Scope,
        ScopeList,
    },
};
pub use url::Url;
