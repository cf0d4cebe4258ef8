use super::print_json;
use crate::config::Config;
use anyhow::Context;
use insta_api::{
    legacy::{
        LegacyService,
        RateLimit,
    },
    Response,
};
use tracing::info;

/// Options
#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "legacy", description = "use the legacy api")]
pub struct Options {
    #[argh(subcommand)]
    subcommand: Subcommand,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand)]
enum Subcommand {
    User(UserOptions),
    RecentMedia(RecentMediaOptions),
    Media(MediaOptions),
    Comments(CommentsOptions),
    Tag(TagOptions),
    ExchangeCode(ExchangeCodeOptions),
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "user", description = "get a user")]
struct UserOptions {
    #[argh(option, description = "the user id, the authenticated user if missing")]
    id: Option<u64>,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "recent-media", description = "get a user's recent media")]
struct RecentMediaOptions {
    #[argh(option, description = "the user id, the authenticated user if missing")]
    id: Option<u64>,

    #[argh(option, description = "the number of media to return")]
    count: Option<u32>,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "media", description = "get a media object")]
struct MediaOptions {
    #[argh(positional, description = "the media id")]
    id: String,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "comments", description = "get the comments on a media object")]
struct CommentsOptions {
    #[argh(positional, description = "the media id")]
    id: String,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "tag", description = "get a tag")]
struct TagOptions {
    #[argh(positional, description = "the tag name")]
    name: String,
}

#[derive(Debug, argh::FromArgs)]
#[argh(
    subcommand,
    name = "exchange-code",
    description = "exchange an authorization code for an access token"
)]
struct ExchangeCodeOptions {
    #[argh(positional, description = "the authorization code")]
    code: String,
}

/// Log the rate limit headers of a response, if present.
fn log_rate_limit<T>(response: &Response<T>) {
    if let Some(rate_limit) = RateLimit::from_response(response.raw()) {
        info!(
            "{} of {} legacy calls left this hour",
            rate_limit.remaining, rate_limit.limit
        );
    }
}

pub async fn exec(config: &Config, options: Options) -> anyhow::Result<()> {
    let service = LegacyService::from_client(config.legacy()?.client());

    match options.subcommand {
        Subcommand::User(options) => {
            let response = match options.id {
                Some(id) => service.users().get(id).await,
                None => service.users().get_self().await,
            }
            .context("failed to get user")?;
            log_rate_limit(&response);
            print_json(&response.into_body().data)?;
        }
        Subcommand::RecentMedia(options) => {
            let response = service
                .users()
                .recent_media(options.id, options.count)
                .await
                .context("failed to get recent media")?;
            log_rate_limit(&response);
            print_json(&response.into_body())?;
        }
        Subcommand::Media(options) => {
            let response = service
                .media()
                .get(&options.id)
                .await
                .context("failed to get media")?;
            log_rate_limit(&response);
            print_json(&response.into_body().data)?;
        }
        Subcommand::Comments(options) => {
            let response = service
                .media()
                .comments(&options.id)
                .await
                .context("failed to get comments")?;
            log_rate_limit(&response);
            print_json(&response.into_body().data)?;
        }
        Subcommand::Tag(options) => {
            let response = service
                .tags()
                .get(&options.name)
                .await
                .context("failed to get tag")?;
            log_rate_limit(&response);
            print_json(&response.into_body().data)?;
        }
        Subcommand::ExchangeCode(options) => {
            let token = service
                .client()
                .exchange_code(&options.code)
                .await
                .context("failed to exchange code")?;
            print_json(&token)?;
        }
    }

    Ok(())
}
