use super::LegacyResponse;
use crate::{
    legacy::{
        options::{
            AddCommentOptions,
            CommentsOptions,
            DeleteCommentOptions,
            LikesOptions,
            MediaOptions,
            MediaSearchOptions,
            MediaShortcodeOptions,
        },
        Comment,
        EmptyEnvelope,
        Legacy,
        LegacyClient,
        Media,
        User,
    },
    Error,
    RawResponse,
    Response,
};

/// Raw media endpoints
#[derive(Debug, Copy, Clone)]
pub struct MediaRawEndpoint<'a> {
    client: &'a LegacyClient,
}

impl<'a> MediaRawEndpoint<'a> {
    /// Make a new [`MediaRawEndpoint`].
    pub fn new(client: &'a LegacyClient) -> Self {
        Self { client }
    }

    /// Get a media object by id.
    pub async fn get(&self, media_id: &str) -> Result<RawResponse, Error> {
        let mut options = MediaOptions::new();
        options.media_id(media_id);
        self.get_with_options(&options).await
    }

    /// Get a media object by id.
    pub async fn get_with_options(&self, options: &MediaOptions) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Get a media object by shortcode.
    pub async fn get_by_shortcode(&self, shortcode: &str) -> Result<RawResponse, Error> {
        let mut options = MediaShortcodeOptions::new();
        options.shortcode(shortcode);
        self.get_by_shortcode_with_options(&options).await
    }

    /// Get a media object by shortcode.
    pub async fn get_by_shortcode_with_options(
        &self,
        options: &MediaShortcodeOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Search for media near a point.
    pub async fn search(
        &self,
        lat: f64,
        lng: f64,
        distance: Option<u32>,
    ) -> Result<RawResponse, Error> {
        let options = MediaSearchOptions {
            lat: Some(lat),
            lng: Some(lng),
            distance,
        };
        self.search_with_options(&options).await
    }

    /// Search for media near a point.
    pub async fn search_with_options(
        &self,
        options: &MediaSearchOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// List the comments on a media object.
    pub async fn comments(&self, media_id: &str) -> Result<RawResponse, Error> {
        let mut options = CommentsOptions::new();
        options.media_id(media_id);
        self.comments_with_options(&options).await
    }

    /// List the comments on a media object.
    pub async fn comments_with_options(
        &self,
        options: &CommentsOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Comment on a media object.
    pub async fn add_comment(&self, media_id: &str, text: &str) -> Result<RawResponse, Error> {
        let mut options = AddCommentOptions::new();
        options.media_id(media_id).text(text);
        self.add_comment_with_options(&options).await
    }

    /// Comment on a media object.
    pub async fn add_comment_with_options(
        &self,
        options: &AddCommentOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Delete a comment.
    pub async fn delete_comment(
        &self,
        media_id: &str,
        comment_id: &str,
    ) -> Result<RawResponse, Error> {
        let mut options = DeleteCommentOptions::new();
        options.media_id(media_id).comment_id(comment_id);
        self.delete_comment_with_options(&options).await
    }

    /// Delete a comment.
    pub async fn delete_comment_with_options(
        &self,
        options: &DeleteCommentOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// List the users who liked a media object.
    pub async fn likes(&self, media_id: &str) -> Result<RawResponse, Error> {
        self.likes_with_options(&likes_options(media_id)).await
    }

    /// List the users who liked a media object.
    pub async fn likes_with_options(&self, options: &LikesOptions) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Like a media object as the authenticated user.
    pub async fn like(&self, media_id: &str) -> Result<RawResponse, Error> {
        self.like_with_options(&likes_options(media_id)).await
    }

    /// Like a media object as the authenticated user.
    pub async fn like_with_options(&self, options: &LikesOptions) -> Result<RawResponse, Error> {
        self.client.send(options.like_request()?).await
    }

    /// Remove the authenticated user's like.
    pub async fn unlike(&self, media_id: &str) -> Result<RawResponse, Error> {
        self.unlike_with_options(&likes_options(media_id)).await
    }

    /// Remove the authenticated user's like.
    pub async fn unlike_with_options(&self, options: &LikesOptions) -> Result<RawResponse, Error> {
        self.client.send(options.unlike_request()?).await
    }
}

fn likes_options(media_id: &str) -> LikesOptions {
    let mut options = LikesOptions::new();
    options.media_id(media_id);
    options
}

/// Media endpoints
#[derive(Debug, Copy, Clone)]
pub struct MediaEndpoint<'a> {
    raw: MediaRawEndpoint<'a>,
}

impl<'a> MediaEndpoint<'a> {
    /// Make a new [`MediaEndpoint`].
    pub fn new(raw: MediaRawEndpoint<'a>) -> Self {
        Self { raw }
    }

    /// The raw endpoints
    pub fn raw(&self) -> &MediaRawEndpoint<'a> {
        &self.raw
    }

    /// Get a media object by id.
    pub async fn get(&self, media_id: &str) -> Result<LegacyResponse<Media>, Error> {
        Response::parse::<Legacy>(self.raw.get(media_id).await?)
    }

    /// Get a media object by id.
    pub async fn get_with_options(
        &self,
        options: &MediaOptions,
    ) -> Result<LegacyResponse<Media>, Error> {
        Response::parse::<Legacy>(self.raw.get_with_options(options).await?)
    }

    /// Get a media object by shortcode.
    pub async fn get_by_shortcode(&self, shortcode: &str) -> Result<LegacyResponse<Media>, Error> {
        Response::parse::<Legacy>(self.raw.get_by_shortcode(shortcode).await?)
    }

    /// Get a media object by shortcode.
    pub async fn get_by_shortcode_with_options(
        &self,
        options: &MediaShortcodeOptions,
    ) -> Result<LegacyResponse<Media>, Error> {
        Response::parse::<Legacy>(self.raw.get_by_shortcode_with_options(options).await?)
    }

    /// Search for media near a point.
    pub async fn search(
        &self,
        lat: f64,
        lng: f64,
        distance: Option<u32>,
    ) -> Result<LegacyResponse<Vec<Media>>, Error> {
        Response::parse::<Legacy>(self.raw.search(lat, lng, distance).await?)
    }

    /// Search for media near a point.
    pub async fn search_with_options(
        &self,
        options: &MediaSearchOptions,
    ) -> Result<LegacyResponse<Vec<Media>>, Error> {
        Response::parse::<Legacy>(self.raw.search_with_options(options).await?)
    }

    /// List the comments on a media object.
    pub async fn comments(&self, media_id: &str) -> Result<LegacyResponse<Vec<Comment>>, Error> {
        Response::parse::<Legacy>(self.raw.comments(media_id).await?)
    }

    /// List the comments on a media object.
    pub async fn comments_with_options(
        &self,
        options: &CommentsOptions,
    ) -> Result<LegacyResponse<Vec<Comment>>, Error> {
        Response::parse::<Legacy>(self.raw.comments_with_options(options).await?)
    }

    /// Comment on a media object.
    pub async fn add_comment(
        &self,
        media_id: &str,
        text: &str,
    ) -> Result<Response<EmptyEnvelope>, Error> {
        Response::parse::<Legacy>(self.raw.add_comment(media_id, text).await?)
    }

    /// Comment on a media object.
    pub async fn add_comment_with_options(
        &self,
        options: &AddCommentOptions,
    ) -> Result<Response<EmptyEnvelope>, Error> {
        Response::parse::<Legacy>(self.raw.add_comment_with_options(options).await?)
    }

    /// Delete a comment.
    pub async fn delete_comment(
        &self,
        media_id: &str,
        comment_id: &str,
    ) -> Result<Response<EmptyEnvelope>, Error> {
        Response::parse::<Legacy>(self.raw.delete_comment(media_id, comment_id).await?)
    }

    /// Delete a comment.
    pub async fn delete_comment_with_options(
        &self,
        options: &DeleteCommentOptions,
    ) -> Result<Response<EmptyEnvelope>, Error> {
        Response::parse::<Legacy>(self.raw.delete_comment_with_options(options).await?)
    }

    /// List the users who liked a media object.
    pub async fn likes(&self, media_id: &str) -> Result<LegacyResponse<Vec<User>>, Error> {
        Response::parse::<Legacy>(self.raw.likes(media_id).await?)
    }

    /// List the users who liked a media object.
    pub async fn likes_with_options(
        &self,
        options: &LikesOptions,
    ) -> Result<LegacyResponse<Vec<User>>, Error> {
        Response::parse::<Legacy>(self.raw.likes_with_options(options).await?)
    }

    /// Like a media object as the authenticated user.
    pub async fn like(&self, media_id: &str) -> Result<Response<EmptyEnvelope>, Error> {
        Response::parse::<Legacy>(self.raw.like(media_id).await?)
    }

    /// Like a media object as the authenticated user.
    pub async fn like_with_options(
        &self,
        options: &LikesOptions,
    ) -> Result<Response<EmptyEnvelope>, Error> {
        Response::parse::<Legacy>(self.raw.like_with_options(options).await?)
    }

    /// Remove the authenticated user's like.
    pub async fn unlike(&self, media_id: &str) -> Result<Response<EmptyEnvelope>, Error> {
        Response::parse::<Legacy>(self.raw.unlike(media_id).await?)
    }

    /// Remove the authenticated user's like.
    pub async fn unlike_with_options(
        &self,
        options: &LikesOptions,
    ) -> Result<Response<EmptyEnvelope>, Error> {
        Response::parse::<Legacy>(self.raw.unlike_with_options(options).await?)
    }
}
