use crate::{
    Error,
    FieldList,
};
use reqwest::{
    header::{
        HeaderMap,
        HeaderValue,
        CONTENT_TYPE,
    },
    Method,
    StatusCode,
};
use std::time::Duration;
use tracing::debug;
use url::Url;

const USER_AGENT_STR: &str = concat!("insta-api/", env!("CARGO_PKG_VERSION"));

/// A description of a request to send.
///
/// The url is either a path relative to the api's base url, starting with `/`,
/// or an absolute url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// The http method
    pub method: Method,

    /// The relative path or absolute url
    pub url: String,

    /// Query parameters, in insertion order
    pub query: Vec<(String, String)>,

    /// Form parameters, sent as `application/x-www-form-urlencoded`
    pub form: Option<Vec<(String, String)>>,

    /// Whether the client should attach its credentials
    pub authenticate: bool,
}

impl ApiRequest {
    /// Make a new [`ApiRequest`].
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            form: None,
            authenticate: true,
        }
    }

    /// Make a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Make a POST request.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Make a DELETE request.
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Add a query parameter, returning self.
    pub fn with_query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.append_query(key, value);
        self
    }

    /// Add a query parameter.
    pub fn append_query(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    /// Add a query parameter if a value is present.
    pub fn append_query_opt<V>(&mut self, key: &str, value: Option<V>) -> &mut Self
    where
        V: Into<String>,
    {
        if let Some(value) = value {
            self.append_query(key, value);
        }
        self
    }

    /// Add an integer query parameter if a value is present.
    pub fn append_query_int<I>(&mut self, key: &str, value: Option<I>) -> &mut Self
    where
        I: itoa::Integer,
    {
        if let Some(value) = value {
            let mut buffer = itoa::Buffer::new();
            self.append_query(key, buffer.format(value));
        }
        self
    }

    /// Add the `fields` query parameter, unless the list is empty.
    pub fn append_fields(&mut self, fields: &FieldList) -> &mut Self {
        if !fields.is_empty() {
            self.append_query("fields", fields.to_string());
        }
        self
    }

    /// Add a form parameter.
    pub fn append_form(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.form
            .get_or_insert_with(Vec::new)
            .push((key.to_string(), value.into()));
        self
    }

    /// Mark this request as one that should not carry the client's credentials.
    pub fn unauthenticated(mut self) -> Self {
        self.authenticate = false;
        self
    }

    /// Get the first query value for a key.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get the first form value for a key.
    pub fn form_value(&self, key: &str) -> Option<&str> {
        self.form
            .as_ref()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the url is relative to the api base url.
    pub fn is_relative(&self) -> bool {
        self.url.starts_with('/')
    }

    /// Whether a parameter is present in the query or form.
    pub(crate) fn has_param(&self, key: &str) -> bool {
        self.query_value(key).is_some() || self.form_value(key).is_some()
    }

    /// Resolve this request into an absolute url with the query applied.
    ///
    /// Relative urls are appended to `base_url`, keeping any path the base has.
    pub fn resolve(&self, base_url: &str) -> Result<Url, Error> {
        let mut url = if self.is_relative() {
            Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), self.url))?
        } else {
            Url::parse(&self.url)?
        };

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }

        Ok(url)
    }
}

/// An unparsed response.
///
/// The body has already been read in full.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The http status
    pub status: StatusCode,

    /// The response headers
    pub headers: HeaderMap,

    /// The response body
    pub body: String,
}

impl RawResponse {
    /// Make a new [`RawResponse`].
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Make a new json [`RawResponse`].
    ///
    /// Mostly useful for tests.
    pub fn json_body(status: StatusCode, body: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=UTF-8"),
        );
        Self::new(status, headers, body)
    }

    /// Read a reqwest response in full.
    pub(crate) async fn from_reqwest(response: reqwest::Response) -> Result<Self, Error> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Get a header as a str.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    /// Get the content type.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE)?.to_str().ok()
    }

    /// Whether the status is a success.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Whether the body looks like json.
    ///
    /// The graph api sometimes labels json as `text/javascript`.
    /// Without a content type, the first non-whitespace byte decides.
    pub fn is_json(&self) -> bool {
        match self.content_type() {
            Some(content_type) => {
                content_type.contains("json") || content_type.contains("javascript")
            }
            None => matches!(self.body.trim_start().as_bytes().first(), Some(b'{' | b'[')),
        }
    }

    /// Parse the body as json.
    pub fn json<T>(&self) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_str(&self.body).map_err(|error| Error::InvalidJson {
            error,
            body: self.body.as_str().into(),
        })
    }
}

/// The per-generation piece of response validation.
pub trait ApiGeneration {
    /// The name of this api generation, used in logs.
    const NAME: &'static str;

    /// Turn an unsuccessful json response into an error.
    fn classify_error(response: &RawResponse) -> Error;
}

/// Check a raw response, turning it into an error if it was not successful.
///
/// Non-json error bodies are not parsed.
pub fn validate<G>(response: RawResponse) -> Result<RawResponse, Error>
where
    G: ApiGeneration,
{
    if response.is_success() {
        return Ok(response);
    }

    let status = response.status;
    let error = if !response.is_json() {
        if status == StatusCode::NOT_FOUND {
            Error::NotFound {
                status,
                error: None,
            }
        } else {
            Error::Http {
                status,
                error: None,
            }
        }
    } else {
        G::classify_error(&response)
    };

    debug!("{} request failed with status {}: {}", G::NAME, status, error);

    Err(error)
}

/// A validated and parsed response.
#[derive(Debug, Clone)]
pub struct Response<T> {
    raw: RawResponse,
    body: T,
}

impl<T> Response<T>
where
    T: serde::de::DeserializeOwned,
{
    /// Validate a raw response and parse its body.
    pub fn parse<G>(raw: RawResponse) -> Result<Self, Error>
    where
        G: ApiGeneration,
    {
        let raw = validate::<G>(raw)?;
        let body = raw.json()?;
        Ok(Self { raw, body })
    }
}

impl<T> Response<T> {
    /// The parsed body.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Take the parsed body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// The raw response.
    pub fn raw(&self) -> &RawResponse {
        &self.raw
    }

    /// The http status.
    pub fn status(&self) -> StatusCode {
        self.raw.status
    }
}

/// The http client shared by every api generation.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// The inner http client.
    ///
    /// This probably shouldn't be used by you.
    pub client: reqwest::Client,
}

impl HttpClient {
    /// Make a new [`HttpClient`].
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT_STR)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("failed to build insta-api client");

        Self::from_reqwest(client)
    }

    /// Make a new [`HttpClient`] from a reqwest client.
    pub fn from_reqwest(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Send a prepared request and read the whole response.
    ///
    /// Unsuccessful statuses are not errors at this level.
    pub async fn execute(
        &self,
        method: Method,
        url: Url,
        form: Option<&[(String, String)]>,
    ) -> Result<RawResponse, Error> {
        debug!("sending {} request to `{}`", method, url.path());

        let mut request = self.client.request(method, url);
        if let Some(form) = form {
            request = request.form(form);
        }
        let response = request.send().await?;

        RawResponse::from_reqwest(response).await
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct TestApi;

    impl ApiGeneration for TestApi {
        const NAME: &'static str = "test";

        fn classify_error(response: &RawResponse) -> Error {
            Error::Http {
                status: response.status,
                error: crate::ApiError::from_graph_body(&response.body),
            }
        }
    }

    #[test]
    fn resolve_relative() {
        let mut request = ApiRequest::get("/42/media");
        request
            .append_query_int("limit", Some(10_u32))
            .append_query_opt("after", Some("cursor123"))
            .append_query_opt::<&str>("before", None);

        let url = request
            .resolve("https://graph.facebook.com/v19.0/")
            .expect("failed to resolve");
        assert!(url.as_str() == "https://graph.facebook.com/v19.0/42/media?limit=10&after=cursor123");
    }

    #[test]
    fn resolve_absolute() {
        let request = ApiRequest::get("https://api.instagram.com/oauth/access_token")
            .with_query("a", "b c");
        assert!(!request.is_relative());

        let url = request
            .resolve("https://graph.instagram.com")
            .expect("failed to resolve");
        assert!(url.as_str() == "https://api.instagram.com/oauth/access_token?a=b+c");
    }

    #[test]
    fn json_detection() {
        let json = RawResponse::json_body(StatusCode::OK, "{}");
        assert!(json.is_json());

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
        let html = RawResponse::new(StatusCode::NOT_FOUND, headers, "<html></html>");
        assert!(!html.is_json());

        let sniffed = RawResponse::new(StatusCode::OK, HeaderMap::new(), "  {\"a\":1}");
        assert!(sniffed.is_json());

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/javascript; charset=UTF-8"),
        );
        let javascript = RawResponse::new(StatusCode::BAD_REQUEST, headers, "{}");
        assert!(javascript.is_json());
    }

    #[test]
    fn success_is_accepted_as_is() {
        let raw = RawResponse::json_body(StatusCode::OK, "not even json");
        let raw = validate::<TestApi>(raw).expect("success should validate");
        assert!(raw.body == "not even json");

        let error = Response::<serde_json::Value>::parse::<TestApi>(raw)
            .expect_err("body is not json");
        match error {
            Error::InvalidJson { body, .. } => assert!(&*body == "not even json"),
            error => panic!("unexpected error: {error:?}"),
        }
    }

    #[test]
    fn html_not_found_skips_parsing() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
        let raw = RawResponse::new(StatusCode::NOT_FOUND, headers, "<html>gone</html>");

        let error = validate::<TestApi>(raw).expect_err("404 should fail");
        assert!(matches!(
            error,
            Error::NotFound {
                status: StatusCode::NOT_FOUND,
                error: None
            }
        ));
    }

    #[test]
    fn html_server_error_is_generic() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
        let raw = RawResponse::new(StatusCode::BAD_GATEWAY, headers, "<html></html>");

        let error = validate::<TestApi>(raw).expect_err("502 should fail");
        assert!(matches!(error, Error::Http { error: None, .. }));
    }

    #[test]
    fn json_errors_are_classified() {
        let raw = RawResponse::json_body(
            StatusCode::BAD_REQUEST,
            r#"{"error":{"message":"bad","type":"X","code":1}}"#,
        );
        let error = validate::<TestApi>(raw).expect_err("400 should fail");
        assert!(error.api_error().map(|error| error.message.as_str()) == Some("bad"));
    }

    #[test]
    fn empty_fields_are_skipped() {
        let mut request = ApiRequest::get("/42/media");
        request.append_fields(&FieldList::new());
        assert!(request.query.is_empty());

        request.append_fields(&FieldList::parse("id,caption"));
        assert!(request.query_value("fields") == Some("id,caption"));
    }

    #[test]
    fn form_params() {
        let mut request = ApiRequest::post("/media/1/comments");
        request.append_form("text", "hello");

        assert!(request.form_value("text") == Some("hello"));
        assert!(request.has_param("text"));
        assert!(!request.has_param("access_token"));
    }
}
