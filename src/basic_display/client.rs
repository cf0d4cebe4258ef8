use super::{
    endpoints::{
        MediaRawEndpoint,
        UsersRawEndpoint,
    },
    BasicDisplay,
    LongLivedToken,
    ShortLivedToken,
};
use crate::{
    http::{
        ApiRequest,
        HttpClient,
        RawResponse,
        Response,
    },
    util::{
        require_non_empty,
        required,
    },
    Error,
    ScopeList,
};
use std::sync::Arc;
use url::Url;

/// The default base url of the basic display api.
pub const DEFAULT_BASE_URL: &str = "https://graph.instagram.com";

/// The default base url of the basic display oauth endpoints.
pub const DEFAULT_OAUTH_URL: &str = "https://api.instagram.com/oauth";

/// A basic display api client
#[derive(Debug, Clone)]
pub struct BasicDisplayClient {
    /// The inner http client.
    ///
    /// This probably shouldn't be used by you.
    pub http: HttpClient,

    access_token: Option<Arc<str>>,
    client_id: Option<Arc<str>>,
    client_secret: Option<Arc<str>>,
    redirect_uri: Option<Arc<str>>,

    base_url: Arc<str>,
    oauth_url: Arc<str>,
}

impl BasicDisplayClient {
    /// Make a new [`BasicDisplayClient`] with no credentials.
    pub fn new() -> Self {
        Self::from_http_client(HttpClient::new())
    }

    /// Make a new [`BasicDisplayClient`] from an http client.
    pub fn from_http_client(http: HttpClient) -> Self {
        Self {
            http,
            access_token: None,
            client_id: None,
            client_secret: None,
            redirect_uri: None,
            base_url: DEFAULT_BASE_URL.into(),
            oauth_url: DEFAULT_OAUTH_URL.into(),
        }
    }

    /// Set the access token.
    pub fn with_access_token(mut self, access_token: &str) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Set the app id.
    pub fn with_client_id(mut self, client_id: &str) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set the app secret.
    pub fn with_client_secret(mut self, client_secret: &str) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Set the redirect uri used in the oauth flow.
    pub fn with_redirect_uri(mut self, redirect_uri: &str) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
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

    /// The api base url.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attach the access token to a request and resolve its url.
    pub fn prepare_request(&self, request: &mut ApiRequest) -> Result<Url, Error> {
        if request.authenticate {
            if let Some(access_token) = self.access_token.as_deref() {
                if !request.has_param("access_token") {
                    request.append_query("access_token", access_token);
                }
            }
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
                query_pairs.append_pair("scope", &scopes.join(","));
            }
            if let Some(state) = state {
                query_pairs.append_pair("state", state);
            }
        }

        Ok(url)
    }

    /// Exchange an authorization code for a short-lived access token.
    pub async fn exchange_code(&self, code: &str) -> Result<ShortLivedToken, Error> {
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
        Ok(Response::parse::<BasicDisplay>(raw)?.into_body())
    }

    /// Exchange a short-lived access token for a long-lived one.
    pub async fn exchange_for_long_lived(&self, access_token: &str) -> Result<LongLivedToken, Error> {
        require_non_empty(access_token, "access_token")?;
        let client_secret = required(self.client_secret.as_deref(), "client_secret")?;

        let request = ApiRequest::get("/access_token")
            .unauthenticated()
            .with_query("grant_type", "ig_exchange_token")
            .with_query("client_secret", client_secret)
            .with_query("access_token", access_token);

        let raw = self.send(request).await?;
        Ok(Response::parse::<BasicDisplay>(raw)?.into_body())
    }

    /// Refresh a long-lived access token.
    pub async fn refresh_long_lived(&self, access_token: &str) -> Result<LongLivedToken, Error> {
        require_non_empty(access_token, "access_token")?;

        let request = ApiRequest::get("/refresh_access_token")
            .unauthenticated()
            .with_query("grant_type", "ig_refresh_token")
            .with_query("access_token", access_token);

        let raw = self.send(request).await?;
        Ok(Response::parse::<BasicDisplay>(raw)?.into_body())
    }

    /// User endpoints
    pub fn users(&self) -> UsersRawEndpoint<'_> {
        UsersRawEndpoint::new(self)
    }

    /// Media endpoints
    pub fn media(&self) -> MediaRawEndpoint<'_> {
        MediaRawEndpoint::new(self)
    }
}

impl Default for BasicDisplayClient {
    fn default() -> Self {
        Self::new()
    }
}
