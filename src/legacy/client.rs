use super::{
    endpoints::{
        LocationsRawEndpoint,
        MediaRawEndpoint,
        RelationshipsRawEndpoint,
        TagsRawEndpoint,
        UsersRawEndpoint,
    },
    AccessTokenResponse,
    Legacy,
};
use crate::{
    http::{
        ApiRequest,
        HttpClient,
        RawResponse,
        Response,
    },
    util::{
        hmac_sha256_hex,
        require_non_empty,
        required,
    },
    Error,
    ScopeList,
};
use std::sync::Arc;
use url::Url;

/// The default base url of the legacy api.
pub const DEFAULT_BASE_URL: &str = "https://api.instagram.com/v1";

/// The default base url of the legacy oauth endpoints.
pub const DEFAULT_OAUTH_URL: &str = "https://api.instagram.com/oauth";

/// Compute the legacy request signature.
///
/// The signed message is the endpoint followed by every `key=value` pair sorted by key,
/// all joined with `|`.
pub fn sign<'a, I>(endpoint: &str, params: I, client_secret: &str) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut params: Vec<_> = params.into_iter().collect();
    params.sort_unstable();

    let mut message = String::from(endpoint);
    for (key, value) in params {
        message.push('|');
        message.push_str(key);
        message.push('=');
        message.push_str(value);
    }

    hmac_sha256_hex(client_secret, &message)
}

/// A legacy api client
#[derive(Debug, Clone)]
pub struct LegacyClient {
    /// The inner http client.
    ///
    /// This probably shouldn't be used by you.
    pub http: HttpClient,

    access_token: Option<Arc<str>>,
    client_id: Option<Arc<str>>,
    client_secret: Option<Arc<str>>,
    redirect_uri: Option<Arc<str>>,
    signed_requests: bool,

    base_url: Arc<str>,
    oauth_url: Arc<str>,
}

impl LegacyClient {
    /// Make a new [`LegacyClient`] with no credentials.
    pub fn new() -> Self {
        Self::from_http_client(HttpClient::new())
    }

    /// Make a new [`LegacyClient`] from an http client.
    pub fn from_http_client(http: HttpClient) -> Self {
        Self {
            http,
            access_token: None,
            client_id: None,
            client_secret: None,
            redirect_uri: None,
            signed_requests: false,
            base_url: DEFAULT_BASE_URL.into(),
            oauth_url: DEFAULT_OAUTH_URL.into(),
        }
    }

    /// Set the access token.
    pub fn with_access_token(mut self, access_token: &str) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Set the client id.
    pub fn with_client_id(mut self, client_id: &str) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set the client secret.
    pub fn with_client_secret(mut self, client_secret: &str) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Set the redirect uri used in the oauth flow.
    pub fn with_redirect_uri(mut self, redirect_uri: &str) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Enable or disable request signing.
    ///
    /// Signing requires a client secret.
    pub fn with_signed_requests(mut self, signed_requests: bool) -> Self {
        self.signed_requests = signed_requests;
        self
    }

    /// Override the api base url.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').into();
        self
    }

    /// Override the oauth base url.
    pub fn with_oauth_url(mut self, oauth_url: &str) -> Self {
        self.oauth_url = oauth_url.trim_end_matches('/').into();
        self
    }

    /// The access token, if set.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// The client id, if set.
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// The redirect uri, if set.
    pub fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uri.as_deref()
    }

    /// Whether requests are signed.
    pub fn signed_requests(&self) -> bool {
        self.signed_requests
    }

    /// The api base url.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attach credentials to a request and resolve its url.
    ///
    /// The access token is preferred over the client id.
    /// Credentials already present on the request are left alone.
    pub fn prepare_request(&self, request: &mut ApiRequest) -> Result<Url, Error> {
        if request.authenticate {
            match (self.access_token.as_deref(), self.client_id.as_deref()) {
                (Some(access_token), _) => {
                    if !request.has_param("access_token") {
                        request.append_query("access_token", access_token);
                    }
                }
                (None, Some(client_id)) => {
                    if !request.has_param("client_id") {
                        request.append_query("client_id", client_id);
                    }
                }
                (None, None) => {}
            }
        }

        if self.signed_requests && request.is_relative() && !request.has_param("sig") {
            let client_secret = required(self.client_secret.as_deref(), "client_secret")?;
            let params = request
                .query
                .iter()
                .chain(request.form.iter().flatten())
                .map(|(key, value)| (key.as_str(), value.as_str()));
            let sig = sign(&request.url, params, client_secret);
            request.append_query("sig", sig);
        }

        request.resolve(&self.base_url)
    }

    /// Prepare and send a request, returning the unvalidated response.
    pub async fn send(&self, mut request: ApiRequest) -> Result<RawResponse, Error> {
        let url = self.prepare_request(&mut request)?;
        self.http
            .execute(request.method, url, request.form.as_deref())
            .await
    }

    /// Get the url to send a user to in order to authorize this app.
    pub fn authorization_url(&self, state: Option<&str>, scopes: &ScopeList) -> Result<Url, Error> {
        let client_id = required(self.client_id.as_deref(), "client_id")?;
        let redirect_uri = required(self.redirect_uri.as_deref(), "redirect_uri")?;

        let mut url = Url::parse_with_params(
            &format!("{}/authorize", self.oauth_url),
            &[
                ("client_id", client_id),
                ("redirect_uri", redirect_uri),
                ("response_type", "code"),
            ],
        )?;
        {
            let mut query_pairs = url.query_pairs_mut();
            if !scopes.is_empty() {
                query_pairs.append_pair("scope", &scopes.join(" "));
            }
            if let Some(state) = state {
                query_pairs.append_pair("state", state);
            }
        }

        Ok(url)
    }

    /// Exchange an authorization code for an access token.
    pub async fn exchange_code(&self, code: &str) -> Result<AccessTokenResponse, Error> {
        require_non_empty(code, "code")?;
        let client_id = required(self.client_id.as_deref(), "client_id")?;
        let client_secret = required(self.client_secret.as_deref(), "client_secret")?;
        let redirect_uri = required(self.redirect_uri.as_deref(), "redirect_uri")?;

        let mut request =
            ApiRequest::post(format!("{}/access_token", self.oauth_url)).unauthenticated();
        request
            .append_form("client_id", client_id)
            .append_form("client_secret", client_secret)
            .append_form("grant_type", "authorization_code")
            .append_form("redirect_uri", redirect_uri)
            .append_form("code", code);

        let raw = self.send(request).await?;
        Ok(Response::parse::<Legacy>(raw)?.into_body())
    }

    /// User endpoints
    pub fn users(&self) -> UsersRawEndpoint<'_> {
        UsersRawEndpoint::new(self)
    }

    /// Relationship endpoints
    pub fn relationships(&self) -> RelationshipsRawEndpoint<'_> {
        RelationshipsRawEndpoint::new(self)
    }

    /// Media endpoints
    pub fn media(&self) -> MediaRawEndpoint<'_> {
        MediaRawEndpoint::new(self)
    }

    /// Tag endpoints
    pub fn tags(&self) -> TagsRawEndpoint<'_> {
        TagsRawEndpoint::new(self)
    }

    /// Location endpoints
    pub fn locations(&self) -> LocationsRawEndpoint<'_> {
        LocationsRawEndpoint::new(self)
    }
}

impl Default for LegacyClient {
    fn default() -> Self {
        Self::new()
    }
}
