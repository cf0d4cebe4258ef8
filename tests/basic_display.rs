use insta_api::{
    basic_display::{
        fields,
        BasicDisplayClient,
        BasicDisplayService,
    },
    Error,
    MediaType,
    OAuthErrorKind,
};
use wiremock::{
    matchers::{
        body_string_contains,
        method,
        path,
        query_param,
    },
    Mock,
    MockServer,
    ResponseTemplate,
};

const ME: &str = include_str!("../test_data/basic_display/me.json");
const MEDIA: &str = include_str!("../test_data/basic_display/media.json");

fn json(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body, "application/json")
}

fn service(server: &MockServer) -> BasicDisplayService {
    BasicDisplayService::from_client(
        BasicDisplayClient::new()
            .with_access_token("IGQV")
            .with_base_url(&server.uri()),
    )
}

#[tokio::test]
async fn get_me() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .and(query_param("fields", "id,username,account_type,media_count,media"))
        .and(query_param("access_token", "IGQV"))
        .respond_with(json(200, ME))
        .expect(1)
        .mount(&server)
        .await;

    let user = service(&server)
        .users()
        .get_me(fields::user::all())
        .await
        .expect("failed to get user")
        .into_body();

    assert!(user.media_count == Some(3));
    let media = user.media.expect("missing media");
    assert!(media.data.len() == 2);
    assert!(media.next_cursor() == Some("QVFIUm1u"));
}

#[tokio::test]
async fn carousel_children() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/17895695668004550"))
        .respond_with(json(200, MEDIA))
        .expect(1)
        .mount(&server)
        .await;

    let media = service(&server)
        .media()
        .get("17895695668004550", fields::media::all())
        .await
        .expect("failed to get media")
        .into_body();

    assert!(media.media_type == Some(MediaType::CarouselAlbum));
    let children = media.children.expect("missing children");
    assert!(children.data.len() == 2);
}

#[tokio::test]
async fn media_without_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me/media"))
        .respond_with(json(200, r#"{"data":[{"id":"1"}]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let media = service(&server)
        .users()
        .media(insta_api::FieldList::new(), Some(10), Some("QVFI"))
        .await
        .expect("failed to get media")
        .into_body();
    assert!(media.data.len() == 1);
    assert!(media.paging.is_none());

    let requests = server.received_requests().await.expect("recording is disabled");
    assert!(requests[0].url.query() == Some("limit=10&after=QVFI&access_token=IGQV"));
}

#[tokio::test]
async fn expired_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(json(
            400,
            r#"{"error":{"message":"Error validating access token: Session has expired","type":"OAuthException","code":190,"fbtrace_id":"A1b2"}}"#,
        ))
        .mount(&server)
        .await;

    let error = service(&server)
        .users()
        .get_me(fields::user::ID)
        .await
        .expect_err("expired token should fail");

    assert!(error.oauth_kind() == Some(OAuthErrorKind::AccessToken));
    assert!(error.api_error().and_then(|error| error.trace_id.as_deref()) == Some("A1b2"));
}

#[tokio::test]
async fn exchange_code_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .and(body_string_contains("code=USED"))
        .respond_with(json(
            400,
            r#"{"error_type":"OAuthException","code":400,"error_message":"This authorization code has been used"}"#,
        ))
        .mount(&server)
        .await;

    let client = BasicDisplayClient::new()
        .with_client_id("990602627938098")
        .with_client_secret("eb8c7...")
        .with_redirect_uri("https://example.com/auth/")
        .with_oauth_url(&format!("{}/oauth", server.uri()));

    let error = client
        .exchange_code("USED")
        .await
        .expect_err("used code should fail");
    match error {
        Error::OAuth { kind, error, .. } => {
            assert!(kind == OAuthErrorKind::Other);
            assert!(error.message == "This authorization code has been used");
        }
        error => panic!("unexpected error: {error:?}"),
    }
}

#[tokio::test]
async fn long_lived_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/access_token"))
        .and(query_param("grant_type", "ig_exchange_token"))
        .and(query_param("client_secret", "secret"))
        .and(query_param("access_token", "short"))
        .respond_with(json(
            200,
            r#"{"access_token":"long","token_type":"bearer","expires_in":5183944}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/refresh_access_token"))
        .and(query_param("grant_type", "ig_refresh_token"))
        .and(query_param("access_token", "long"))
        .respond_with(json(
            200,
            r#"{"access_token":"longer","token_type":"bearer","expires_in":5183944}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = BasicDisplayClient::new()
        .with_access_token("unused")
        .with_client_secret("secret")
        .with_base_url(&server.uri());

    let token = client
        .exchange_for_long_lived("short")
        .await
        .expect("failed to exchange");
    assert!(token.access_token == "long");

    let token = client
        .refresh_long_lived(&token.access_token)
        .await
        .expect("failed to refresh");
    assert!(token.access_token == "longer");
    assert!(token.expires_in == Some(5183944));
}
