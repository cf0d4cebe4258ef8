use super::{
    endpoints::{
        CommentsRawEndpoint,
        HashtagsRawEndpoint,
        MediaRawEndpoint,
        UsersRawEndpoint,
    },
    AccessToken,
    Graph,
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

/// The default graph api version.
pub const DEFAULT_VERSION: &str = "v19.0";

const GRAPH_HOST: &str = "https://graph.facebook.com";
const DIALOG_HOST: &str = "https://www.facebook.com";

/// A graph api client
#[derive(Debug, Clone)]
pub struct GraphClient {
    /// The inner http client.
    ///
    /// This probably shouldn't be used by you.
    pub http: HttpClient,

    access_token: Option<Arc<str>>,
    client_id: Option<Arc<str>>,
    client_secret: Option<Arc<str>>,
    redirect_uri: Option<Arc<str>>,
    appsecret_proof: bool,

    version: Arc<str>,
    base_url: Arc<str>,
}

impl GraphClient {
    /// Make a new [`GraphClient`] with no credentials.
    pub fn new() -> Self {
        Self::from_http_client(HttpClient::new())
    }

    /// Make a new [`GraphClient`] from an http client.
    pub fn from_http_client(http: HttpClient) -> Self {
        Self {
            http,
            access_token: None,
            client_id: None,
            client_secret: None,
            redirect_uri: None,
            appsecret_proof: false,
            version: DEFAULT_VERSION.into(),
            base_url: format!("{GRAPH_HOST}/{DEFAULT_VERSION}").into(),
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

    /// Send an `appsecret_proof` with every authenticated request.
    ///
    /// This needs the app secret.
    pub fn with_appsecret_proof(mut self, appsecret_proof: bool) -> Self {
        self.appsecret_proof = appsecret_proof;
        self
    }

    /// Set the api version, like `v19.0`.
    ///
    /// This also resets the base url to the graph host for that version.
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.into();
        self.base_url = format!("{GRAPH_HOST}/{version}").into();
        self
    }

    /// Override the api base url.
    ///
    /// The version is not appended to an overridden base url.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').into();
        self
    }

    /// The access token, if set.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// The api version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The api base url.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attach the access token and proof to a request and resolve its url.
    pub fn prepare_request(&self, request: &mut ApiRequest) -> Result<Url, Error> {
        if request.authenticate {
            if let Some(access_token) = self.access_token.as_deref() {
                if !request.has_param("access_token") {
                    request.append_query("access_token", access_token);
                }
            }

            // The proof must sign the token that is actually sent.
            let access_token = request
                .query_value("access_token")
                .or_else(|| request.form_value("access_token"));
            if let Some(access_token) = access_token {
                if self.appsecret_proof && !request.has_param("appsecret_proof") {
                    let client_secret = required(self.client_secret.as_deref(), "client_secret")?;
                    let appsecret_proof = hmac_sha256_hex(client_secret, access_token);
                    request.append_query("appsecret_proof", appsecret_proof);
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

    /// Get the url of the login dialog for this app.
    pub fn authorization_url(&self, state: Option<&str>, scopes: &ScopeList) -> Result<Url, Error> {
        let client_id = required(self.client_id.as_deref(), "client_id")?;
        let redirect_uri = required(self.redirect_uri.as_deref(), "redirect_uri")?;

        let mut url = Url::parse_with_params(
            &format!("{DIALOG_HOST}/{}/dialog/oauth", self.version),
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

    /// Exchange an authorization code for a user access token.
    pub async fn exchange_code(&self, code: &str) -> Result<AccessToken, Error> {
        require_non_empty(code, "code")?;
        let client_id = required(self.client_id.as_deref(), "client_id")?;
        let client_secret = required(self.client_secret.as_deref(), "client_secret")?;
        let redirect_uri = required(self.redirect_uri.as_deref(), "redirect_uri")?;

        let request = ApiRequest::get("/oauth/access_token")
            .unauthenticated()
            .with_query("client_id", client_id)
            .with_query("redirect_uri", redirect_uri)
            .with_query("client_secret", client_secret)
            .with_query("code", code);

        let raw = self.send(request).await?;
        Ok(Response::parse::<Graph>(raw)?.into_body())
    }

    /// Exchange a short-lived user access token for a long-lived one.
    pub async fn exchange_for_long_lived(&self, access_token: &str) -> Result<AccessToken, Error> {
        require_non_empty(access_token, "access_token")?;
        let client_id = required(self.client_id.as_deref(), "client_id")?;
        let client_secret = required(self.client_secret.as_deref(), "client_secret")?;

        let request = ApiRequest::get("/oauth/access_token")
            .unauthenticated()
            .with_query("grant_type", "fb_exchange_token")
            .with_query("client_id", client_id)
            .with_query("client_secret", client_secret)
            .with_query("fb_exchange_token", access_token);

        let raw = self.send(request).await?;
        Ok(Response::parse::<Graph>(raw)?.into_body())
    }

    /// User endpoints
    pub fn users(&self) -> UsersRawEndpoint<'_> {
        UsersRawEndpoint::new(self)
    }

    /// Media endpoints
    pub fn media(&self) -> MediaRawEndpoint<'_> {
        MediaRawEndpoint::new(self)
    }

    /// Comment endpoints
    pub fn comments(&self) -> CommentsRawEndpoint<'_> {
        CommentsRawEndpoint::new(self)
    }

    /// Hashtag endpoints
    pub fn hashtags(&self) -> HashtagsRawEndpoint<'_> {
        HashtagsRawEndpoint::new(self)
    }
}

impl Default for GraphClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::scopes;

    #[test]
    fn default_base_url() {
        let client = GraphClient::new().with_access_token("EAAB");
        assert!(client.base_url() == "https://graph.facebook.com/v19.0");

        let mut request = ApiRequest::get("/17841405822304914").with_query("fields", "id,username");
        let url = client
            .prepare_request(&mut request)
            .expect("failed to prepare");
        assert!(url.as_str() == "https://graph.facebook.com/v19.0/17841405822304914?fields=id%2Cusername&access_token=EAAB");
    }

    #[test]
    fn version_changes_base_url() {
        let client = GraphClient::new().with_version("v18.0");
        assert!(client.version() == "v18.0");
        assert!(client.base_url() == "https://graph.facebook.com/v18.0");
    }

    #[test]
    fn appsecret_proof() {
        let client = GraphClient::new()
            .with_access_token("graph-token")
            .with_client_secret("app-secret")
            .with_appsecret_proof(true);
        let mut request = ApiRequest::get("/me");

        client
            .prepare_request(&mut request)
            .expect("failed to prepare");
        assert!(request.query_value("access_token") == Some("graph-token"));
        assert!(
            request.query_value("appsecret_proof")
                == Some("3649a13ce85e1c568be8b90219db3a616c307f89dac694e9acae38ad9a76148b")
        );
    }

    #[test]
    fn appsecret_proof_needs_secret() {
        let client = GraphClient::new()
            .with_access_token("graph-token")
            .with_appsecret_proof(true);
        let mut request = ApiRequest::get("/me");

        let error = client
            .prepare_request(&mut request)
            .expect_err("proof without a secret");
        assert!(matches!(error, Error::MissingProperty("client_secret")));
    }

    #[test]
    fn existing_token_is_kept() {
        let client = GraphClient::new().with_access_token("client-token");
        let mut request = ApiRequest::get("/me").with_query("access_token", "request-token");

        client
            .prepare_request(&mut request)
            .expect("failed to prepare");
        assert!(request.query.len() == 1);
        assert!(request.query_value("access_token") == Some("request-token"));
    }

    #[test]
    fn proof_signs_request_token() {
        let client = GraphClient::new()
            .with_access_token("client-token")
            .with_client_secret("app-secret")
            .with_appsecret_proof(true);
        let mut request = ApiRequest::get("/me").with_query("access_token", "request-token");

        client
            .prepare_request(&mut request)
            .expect("failed to prepare");
        assert!(request.query_value("access_token") == Some("request-token"));
        assert!(
            request.query_value("appsecret_proof")
                == Some("4ac9c969a9b15d65dad8bf7f8742c2ce8ff8cb9104778c53588451e28d0e011b")
        );
    }

    #[test]
    fn authorization_url() {
        let client = GraphClient::new()
            .with_client_id("1234")
            .with_redirect_uri("https://example.com/cb");
        let scopes = ScopeList::new()
            .with(scopes::INSTAGRAM_BASIC)
            .with(scopes::PAGES_SHOW_LIST);

        let url = client
            .authorization_url(Some("xyz"), &scopes)
            .expect("failed to build url");
        assert!(url.as_str() == "https://www.facebook.com/v19.0/dialog/oauth?client_id=1234&redirect_uri=https%3A%2F%2Fexample.com%2Fcb&response_type=code&scope=instagram_basic%2Cpages_show_list&state=xyz");
    }

    #[test]
    fn authorization_url_needs_credentials() {
        let error = GraphClient::new()
            .with_client_id("1234")
            .authorization_url(None, &ScopeList::new())
            .expect_err("missing redirect uri");
        assert!(matches!(error, Error::MissingProperty("redirect_uri")));
    }

    #[tokio::test]
    async fn exchange_arguments_are_checked() {
        let client = GraphClient::new().with_client_id("1234");

        let error = client.exchange_code("").await.expect_err("empty code");
        assert!(matches!(error, Error::InvalidArgument("code")));

        let error = client
            .exchange_for_long_lived("token")
            .await
            .expect_err("missing secret");
        assert!(matches!(error, Error::MissingProperty("client_secret")));
    }
}
