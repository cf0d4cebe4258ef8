use crate::{
    graph::{
        options::{
            CommentOptions,
            CommentRepliesOptions,
            DeleteCommentOptions,
            HideCommentOptions,
            ReplyOptions,
        },
        Comment,
        Graph,
        GraphClient,
        IdResponse,
        SuccessResponse,
    },
    DataList,
    Error,
    FieldList,
    RawResponse,
    Response,
};

/// Raw comment endpoints
#[derive(Debug, Copy, Clone)]
pub struct CommentsRawEndpoint<'a> {
    client: &'a GraphClient,
}

impl<'a> CommentsRawEndpoint<'a> {
    /// Make a new [`CommentsRawEndpoint`].
    pub fn new(client: &'a GraphClient) -> Self {
        Self { client }
    }

    /// Get a comment by id.
    pub async fn get(
        &self,
        comment_id: &str,
        fields: impl Into<FieldList>,
    ) -> Result<RawResponse, Error> {
        let mut options = CommentOptions::new();
        options.comment_id(comment_id).fields(fields);
        self.get_with_options(&options).await
    }

    /// Get a comment.
    pub async fn get_with_options(&self, options: &CommentOptions) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Get a page of replies to a comment.
    pub async fn replies(
        &self,
        comment_id: &str,
        fields: impl Into<FieldList>,
        limit: Option<u32>,
        after: Option<&str>,
    ) -> Result<RawResponse, Error> {
        let options = CommentRepliesOptions {
            comment_id: Some(comment_id.to_string()),
            fields: fields.into(),
            limit,
            after: after.map(String::from),
            ..Default::default()
        };
        self.replies_with_options(&options).await
    }

    /// Get a page of replies to a comment.
    pub async fn replies_with_options(
        &self,
        options: &CommentRepliesOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Reply to a comment.
    pub async fn reply(&self, comment_id: &str, message: &str) -> Result<RawResponse, Error> {
        let mut options = ReplyOptions::new();
        options.comment_id(comment_id).message(message);
        self.reply_with_options(&options).await
    }

    /// Reply to a comment.
    pub async fn reply_with_options(&self, options: &ReplyOptions) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Hide or unhide a comment.
    pub async fn hide(&self, comment_id: &str, hide: bool) -> Result<RawResponse, Error> {
        let mut options = HideCommentOptions::new();
        options.comment_id(comment_id).hide(hide);
        self.hide_with_options(&options).await
    }

    /// Hide or unhide a comment.
    pub async fn hide_with_options(
        &self,
        options: &HideCommentOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Delete a comment.
    pub async fn delete(&self, comment_id: &str) -> Result<RawResponse, Error> {
        let mut options = DeleteCommentOptions::new();
        options.comment_id(comment_id);
        self.delete_with_options(&options).await
    }

    /// Delete a comment.
    pub async fn delete_with_options(
        &self,
        options: &DeleteCommentOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }
}

/// Comment endpoints
#[derive(Debug, Copy, Clone)]
pub struct CommentsEndpoint<'a> {
    raw: CommentsRawEndpoint<'a>,
}

impl<'a> CommentsEndpoint<'a> {
    /// Make a new [`CommentsEndpoint`].
    pub fn new(raw: CommentsRawEndpoint<'a>) -> Self {
        Self { raw }
    }

    /// The raw endpoints
    pub fn raw(&self) -> &CommentsRawEndpoint<'a> {
        &self.raw
    }

    /// Get a comment by id.
    pub async fn get(
        &self,
        comment_id: &str,
        fields: impl Into<FieldList>,
    ) -> Result<Response<Comment>, Error> {
        Response::parse::<Graph>(self.raw.get(comment_id, fields).await?)
    }

    /// Get a comment.
    pub async fn get_with_options(
        &self,
        options: &CommentOptions,
    ) -> Result<Response<Comment>, Error> {
        Response::parse::<Graph>(self.raw.get_with_options(options).await?)
    }

    /// Get a page of replies to a comment.
    pub async fn replies(
        &self,
        comment_id: &str,
        fields: impl Into<FieldList>,
        limit: Option<u32>,
        after: Option<&str>,
    ) -> Result<Response<DataList<Comment>>, Error> {
        Response::parse::<Graph>(self.raw.replies(comment_id, fields, limit, after).await?)
    }

    /// Get a page of replies to a comment.
    pub async fn replies_with_options(
        &self,
        options: &CommentRepliesOptions,
    ) -> Result<Response<DataList<Comment>>, Error> {
        Response::parse::<Graph>(self.raw.replies_with_options(options).await?)
    }

    /// Reply to a comment, returning the id of the reply.
    pub async fn reply(
        &self,
        comment_id: &str,
        message: &str,
    ) -> Result<Response<IdResponse>, Error> {
        Response::parse::<Graph>(self.raw.reply(comment_id, message).await?)
    }

    /// Reply to a comment, returning the id of the reply.
    pub async fn reply_with_options(
        &self,
        options: &ReplyOptions,
    ) -> Result<Response<IdResponse>, Error> {
        Response::parse::<Graph>(self.raw.reply_with_options(options).await?)
    }

    /// Hide or unhide a comment.
    pub async fn hide(
        &self,
        comment_id: &str,
        hide: bool,
    ) -> Result<Response<SuccessResponse>, Error> {
        Response::parse::<Graph>(self.raw.hide(comment_id, hide).await?)
    }

    /// Hide or unhide a comment.
    pub async fn hide_with_options(
        &self,
        options: &HideCommentOptions,
    ) -> Result<Response<SuccessResponse>, Error> {
        Response::parse::<Graph>(self.raw.hide_with_options(options).await?)
    }

    /// Delete a comment.
    pub async fn delete(&self, comment_id: &str) -> Result<Response<SuccessResponse>, Error> {
        Response::parse::<Graph>(self.raw.delete(comment_id).await?)
    }

    /// Delete a comment.
    pub async fn delete_with_options(
        &self,
        options: &DeleteCommentOptions,
    ) -> Result<Response<SuccessResponse>, Error> {
        Response::parse::<Graph>(self.raw.delete_with_options(options).await?)
    }
}
