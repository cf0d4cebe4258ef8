use super::{
    fields_or,
    print_json,
};
use crate::config::Config;
use anyhow::Context;
use insta_api::basic_display::{
    fields,
    options::UserMediaOptions,
    BasicDisplayService,
};

/// Options
#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "basic-display", description = "use the basic display api")]
pub struct Options {
    #[argh(subcommand)]
    subcommand: Subcommand,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand)]
enum Subcommand {
    Me(MeOptions),
    UserMedia(UserMediaCommandOptions),
    Media(MediaOptions),
    ExchangeCode(ExchangeCodeOptions),
    LongLived(LongLivedOptions),
    Refresh(RefreshOptions),
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "me", description = "get the authenticated user")]
struct MeOptions {
    #[argh(option, description = "the fields to return, separated by commas")]
    fields: Option<String>,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "user-media", description = "get a page of a user's media")]
struct UserMediaCommandOptions {
    #[argh(option, description = "the user id, the authenticated user if missing")]
    id: Option<String>,

    #[argh(option, description = "the fields to return, separated by commas")]
    fields: Option<String>,

    #[argh(option, description = "the page size")]
    limit: Option<u32>,

    #[argh(option, description = "the cursor of the previous page")]
    after: Option<String>,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "media", description = "get a media object")]
struct MediaOptions {
    #[argh(positional, description = "the media id")]
    id: String,

    #[argh(option, description = "the fields to return, separated by commas")]
    fields: Option<String>,
}

#[derive(Debug, argh::FromArgs)]
#[argh(
    subcommand,
    name = "exchange-code",
    description = "exchange an authorization code for a short-lived token"
)]
struct ExchangeCodeOptions {
    #[argh(positional, description = "the authorization code")]
    code: String,
}

#[derive(Debug, argh::FromArgs)]
#[argh(
    subcommand,
    name = "long-lived",
    description = "exchange a short-lived token for a long-lived one"
)]
struct LongLivedOptions {
    #[argh(positional, description = "the short-lived token")]
    token: String,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "refresh", description = "refresh a long-lived token")]
struct RefreshOptions {
    #[argh(positional, description = "the long-lived token")]
    token: String,
}

pub async fn exec(config: &Config, options: Options) -> anyhow::Result<()> {
    let service = BasicDisplayService::from_client(config.basic_display()?.client());

    match options.subcommand {
        Subcommand::Me(options) => {
            let fields = fields_or(options.fields.as_deref(), fields::user::all);
            let user = service
                .users()
                .get_me(fields)
                .await
                .context("failed to get user")?
                .into_body();
            print_json(&user)?;
        }
        Subcommand::UserMedia(options) => {
            let media_options = UserMediaOptions {
                user_id: options.id,
                fields: fields_or(options.fields.as_deref(), fields::media::all),
                limit: options.limit,
                before: None,
                after: options.after,
            };
            let media = service
                .users()
                .media_with_options(&media_options)
                .await
                .context("failed to get media")?
                .into_body();
            print_json(&media)?;
        }
        Subcommand::Media(options) => {
            let fields = fields_or(options.fields.as_deref(), fields::media::all);
            let media = service
                .media()
                .get(&options.id, fields)
                .await
                .context("failed to get media")?
                .into_body();
            print_json(&media)?;
        }
        Subcommand::ExchangeCode(options) => {
            let token = service
                .client()
                .exchange_code(&options.code)
                .await
                .context("failed to exchange code")?;
            print_json(&token)?;
        }
        Subcommand::LongLived(options) => {
            let token = service
                .client()
                .exchange_for_long_lived(&options.token)
                .await
                .context("failed to exchange token")?;
            print_json(&token)?;
        }
        Subcommand::Refresh(options) => {
            let token = service
                .client()
                .refresh_long_lived(&options.token)
                .await
                .context("failed to refresh token")?;
            print_json(&token)?;
        }
    }

    Ok(())
}
