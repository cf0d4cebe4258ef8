use insta_api::{
    legacy::{
        LegacyClient,
        LegacyService,
        RateLimit,
    },
    Error,
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

const USER: &str = include_str!("../test_data/legacy/user.json");
const RECENT_MEDIA: &str = include_str!("../test_data/legacy/recent_media.json");

const ACCESS_TOKEN: &str = "fb2e77d.47a0479900504cb3ab4a1f626d174d2d";
const CLIENT_SECRET: &str = "6dc1787668c64c939929c17683d7cb74";

fn json(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body, "application/json")
}

fn service(server: &MockServer) -> LegacyService {
    LegacyService::from_client(
        LegacyClient::new()
            .with_access_token(ACCESS_TOKEN)
            .with_base_url(&server.uri()),
    )
}

#[tokio::test]
async fn get_self() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/self"))
        .and(query_param("access_token", ACCESS_TOKEN))
        .respond_with(
            json(200, USER)
                .insert_header("x-ratelimit-limit", "5000")
                .insert_header("x-ratelimit-remaining", "4999"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = service(&server)
        .users()
        .get_self()
        .await
        .expect("failed to get user");

    let rate_limit = RateLimit::from_response(response.raw()).expect("missing rate limit");
    assert!(rate_limit.limit == 5000);
    assert!(rate_limit.remaining == 4999);

    let user = response.into_body().into_data();
    assert!(user.id == 1574083);
    assert!(user.username == "snoopdogg");
}

#[tokio::test]
async fn signed_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/self"))
        .and(query_param(
            "sig",
            "cbf5a1f41db44412506cb6563a3218b50f45a710c7a8a65a3e9b18315bb338bf",
        ))
        .respond_with(json(200, USER))
        .expect(1)
        .mount(&server)
        .await;

    let client = LegacyClient::new()
        .with_access_token(ACCESS_TOKEN)
        .with_client_secret(CLIENT_SECRET)
        .with_signed_requests(true)
        .with_base_url(&server.uri());

    LegacyService::from_client(client)
        .users()
        .get_self()
        .await
        .expect("failed to get user");
}

#[tokio::test]
async fn signed_form_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/media/1_2/comments"))
        .and(query_param(
            "sig",
            "1db7aafc6ab801158b0a8347fdac7ec7c51c7e4795eb84e4c48bffc2f9d71a43",
        ))
        .and(body_string_contains("text=hello+world"))
        .respond_with(json(200, r#"{"meta":{"code":200},"data":null}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = LegacyClient::new()
        .with_access_token("token")
        .with_client_secret("secret")
        .with_signed_requests(true)
        .with_base_url(&server.uri());

    let response = LegacyService::from_client(client)
        .media()
        .add_comment("1_2", "hello world")
        .await
        .expect("failed to comment");
    assert!(response.body().meta.code == 200);
}

#[tokio::test]
async fn recent_media_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/self/media/recent"))
        .and(query_param("count", "2"))
        .respond_with(json(200, RECENT_MEDIA))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = service(&server)
        .users()
        .recent_media(None, Some(2))
        .await
        .expect("failed to get media")
        .into_body();

    assert!(!envelope.data.is_empty());
    let pagination = envelope.pagination.expect("missing pagination");
    assert!(pagination.has_next());
    assert!(pagination.next_max_id.as_deref() == Some("1313455925958301311_3"));
}

#[tokio::test]
async fn access_token_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/self"))
        .respond_with(json(
            400,
            r#"{"meta":{"error_type":"OAuthAccessTokenException","code":400,"error_message":"The access_token provided is invalid."}}"#,
        ))
        .mount(&server)
        .await;

    let error = service(&server)
        .users()
        .get_self()
        .await
        .expect_err("invalid token should fail");

    assert!(error.oauth_kind() == Some(OAuthErrorKind::AccessToken));
    assert!(
        error.api_error().map(|error| error.message.as_str())
            == Some("The access_token provided is invalid.")
    );
}

#[tokio::test]
async fn rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tags/nofilter"))
        .respond_with(json(
            429,
            r#"{"meta":{"error_type":"OAuthRateLimitException","code":429,"error_message":"The maximum number of requests per hour has been exceeded."}}"#,
        ))
        .mount(&server)
        .await;

    let error = service(&server)
        .tags()
        .get("#nofilter")
        .await
        .expect_err("rate limit should fail");
    assert!(matches!(error, Error::RateLimit { .. }));
}

#[tokio::test]
async fn html_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/media/404_1"))
        .respond_with(
            ResponseTemplate::new(404).set_body_raw("<html><body>Not Found</body></html>", "text/html"),
        )
        .mount(&server)
        .await;

    let error = service(&server)
        .media()
        .get("404_1")
        .await
        .expect_err("missing media should fail");
    assert!(matches!(error, Error::NotFound { error: None, .. }));
}

#[tokio::test]
async fn exchange_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=CODE"))
        .respond_with(json(
            200,
            r#"{"access_token":"fb2e77d.47a0479900504cb3ab4a1f626d174d2d","user":{"id":"1574083","username":"snoopdogg"}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = LegacyClient::new()
        .with_client_id("client-id")
        .with_client_secret(CLIENT_SECRET)
        .with_redirect_uri("https://example.com/cb")
        .with_oauth_url(&format!("{}/oauth", server.uri()));

    let token = client.exchange_code("CODE").await.expect("failed to exchange");
    assert!(token.access_token == ACCESS_TOKEN);
    assert!(token.user.id == 1574083);

    let requests = server.received_requests().await.expect("recording is disabled");
    assert!(requests[0].url.query_pairs().all(|(key, _)| key != "access_token"));
}
