use super::{
    fields_or,
    print_json,
};
use crate::config::Config;
use anyhow::Context;
use insta_api::graph::{
    fields,
    options::{
        HashtagMediaKind,
        HashtagMediaOptions,
        MediaCommentsOptions,
        UserMediaOptions,
    },
    GraphService,
};

/// Options
#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "graph", description = "use the graph api")]
pub struct Options {
    #[argh(subcommand)]
    subcommand: Subcommand,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand)]
enum Subcommand {
    User(UserOptions),
    UserMedia(UserMediaCommandOptions),
    Media(MediaOptions),
    Comments(CommentsOptions),
    Hashtag(HashtagOptions),
    ExchangeCode(ExchangeCodeOptions),
    LongLived(LongLivedOptions),
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "user", description = "get an instagram account")]
struct UserOptions {
    #[argh(positional, description = "the instagram user id")]
    id: String,

    #[argh(option, description = "the fields to return, separated by commas")]
    fields: Option<String>,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "user-media", description = "get a page of an account's media")]
struct UserMediaCommandOptions {
    #[argh(positional, description = "the instagram user id")]
    id: String,

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
#[argh(subcommand, name = "comments", description = "get a page of comments on a media object")]
struct CommentsOptions {
    #[argh(positional, description = "the media id")]
    id: String,

    #[argh(option, description = "the fields to return, separated by commas")]
    fields: Option<String>,

    #[argh(option, description = "the page size")]
    limit: Option<u32>,

    #[argh(option, description = "the cursor of the previous page")]
    after: Option<String>,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "hashtag", description = "get media tagged with a hashtag")]
struct HashtagOptions {
    #[argh(positional, description = "the hashtag name")]
    name: String,

    #[argh(option, description = "the instagram user id making the search")]
    user_id: Option<String>,

    #[argh(switch, description = "list top media instead of recent media")]
    top: bool,

    #[argh(option, description = "the fields to return, separated by commas")]
    fields: Option<String>,
}

#[derive(Debug, argh::FromArgs)]
#[argh(
    subcommand,
    name = "exchange-code",
    description = "exchange an authorization code for a user token"
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

pub async fn exec(config: &Config, options: Options) -> anyhow::Result<()> {
    let graph_config = config.graph()?;
    let service = GraphService::from_client(graph_config.client());

    match options.subcommand {
        Subcommand::User(options) => {
            let fields = fields_or(options.fields.as_deref(), fields::user::all);
            let user = service
                .users()
                .get(&options.id, fields)
                .await
                .context("failed to get user")?
                .into_body();
            print_json(&user)?;
        }
        Subcommand::UserMedia(options) => {
            let media_options = UserMediaOptions {
                user_id: Some(options.id),
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
        Subcommand::Comments(options) => {
            let comments_options = MediaCommentsOptions {
                media_id: Some(options.id),
                fields: fields_or(options.fields.as_deref(), fields::comment::all),
                limit: options.limit,
                before: None,
                after: options.after,
            };
            let comments = service
                .media()
                .comments_with_options(&comments_options)
                .await
                .context("failed to get comments")?
                .into_body();
            print_json(&comments)?;
        }
        Subcommand::Hashtag(options) => {
            let user_id = options
                .user_id
                .as_deref()
                .or_else(|| graph_config.user_id())
                .context("a user id is needed, pass `--user-id` or set `graph.user_id`")?;

            let search = service
                .hashtags()
                .search(user_id, &options.name)
                .await
                .context("failed to search for hashtag")?
                .into_body();
            let hashtag = search
                .data
                .first()
                .with_context(|| format!("no hashtag named `{}`", options.name))?;

            let kind = if options.top {
                HashtagMediaKind::Top
            } else {
                HashtagMediaKind::Recent
            };
            let mut media_options = HashtagMediaOptions::new(kind);
            media_options
                .hashtag_id(hashtag.id.as_str())
                .user_id(user_id)
                .fields(fields_or(options.fields.as_deref(), || {
                    fields::media::ID
                        + fields::media::CAPTION
                        + fields::media::MEDIA_TYPE
                        + fields::media::PERMALINK
                }));
            let media = service
                .hashtags()
                .media_with_options(&media_options)
                .await
                .context("failed to get hashtag media")?
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
    }

    Ok(())
}
