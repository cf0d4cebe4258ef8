use url::Url;

/// The `meta` object every legacy response carries.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Meta {
    /// The status code
    pub code: u16,

    /// The error type, on failure
    pub error_type: Option<String>,

    /// The error message, on failure
    pub error_message: Option<String>,
}

/// A legacy response envelope.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Envelope<T> {
    /// Response metadata
    pub meta: Meta,

    /// The payload
    pub data: T,

    /// Continuation info, for list endpoints
    pub pagination: Option<Pagination>,
}

impl<T> Envelope<T> {
    /// Take the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// An envelope with no payload, returned by endpoints that modify things.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct EmptyEnvelope {
    /// Response metadata
    pub meta: Meta,
}

/// Legacy pagination.
///
/// Which fields are present depends on the endpoint.
/// Pass the `next_*` value back as the matching option to get the next page.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
pub struct Pagination {
    /// The full url of the next page
    pub next_url: Option<Url>,

    /// `max_id` for the next page
    pub next_max_id: Option<String>,

    /// `min_id` for the next page
    pub next_min_id: Option<String>,

    /// `cursor` for the next page of a relationship list
    pub next_cursor: Option<String>,

    /// `max_like_id` for the next page of liked media
    pub next_max_like_id: Option<String>,

    /// `max_tag_id` for the next page of tagged media
    pub next_max_tag_id: Option<String>,

    /// `min_tag_id` for the next page of tagged media
    pub next_min_tag_id: Option<String>,
}

impl Pagination {
    /// Whether there is another page.
    pub fn has_next(&self) -> bool {
        self.next_url.is_some()
    }
}
