use super::append_paging;
use crate::{
    util::required,
    ApiRequest,
    Error,
    Field,
    FieldList,
};

/// Options for getting a comment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentOptions {
    /// The comment id
    pub comment_id: Option<String>,

    /// The fields to return
    pub fields: FieldList,
}

impl CommentOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment id.
    pub fn comment_id(&mut self, comment_id: impl Into<String>) -> &mut Self {
        self.comment_id = Some(comment_id.into());
        self
    }

    /// Set the fields.
    pub fn fields(&mut self, fields: impl Into<FieldList>) -> &mut Self {
        self.fields = fields.into();
        self
    }

    /// Add a field.
    pub fn field(&mut self, field: impl Into<Field>) -> &mut Self {
        self.fields.push(field);
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the comment id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let comment_id = required(self.comment_id.as_deref(), "comment_id")?;

        let mut request = ApiRequest::get(format!("/{comment_id}"));
        request.append_fields(&self.fields);
        Ok(request)
    }
}

/// Options for listing the replies to a comment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentRepliesOptions {
    /// The comment id
    pub comment_id: Option<String>,

    /// The fields to return for each reply
    pub fields: FieldList,

    /// The page size
    pub limit: Option<u32>,

    /// Return the page before this cursor
    pub before: Option<String>,

    /// Return the page after this cursor
    pub after: Option<String>,
}

impl CommentRepliesOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment id.
    pub fn comment_id(&mut self, comment_id: impl Into<String>) -> &mut Self {
        self.comment_id = Some(comment_id.into());
        self
    }

    /// Set the fields.
    pub fn fields(&mut self, fields: impl Into<FieldList>) -> &mut Self {
        self.fields = fields.into();
        self
    }

    /// Set the page size.
    pub fn limit(&mut self, limit: u32) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    /// Set the before cursor.
    pub fn before(&mut self, before: impl Into<String>) -> &mut Self {
        self.before = Some(before.into());
        self
    }

    /// Set the after cursor.
    pub fn after(&mut self, after: impl Into<String>) -> &mut Self {
        self.after = Some(after.into());
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the comment id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let comment_id = required(self.comment_id.as_deref(), "comment_id")?;

        let mut request = ApiRequest::get(format!("/{comment_id}/replies"));
        request.append_fields(&self.fields);
        append_paging(
            &mut request,
            self.limit,
            self.before.as_deref(),
            self.after.as_deref(),
        );
        Ok(request)
    }
}

/// Options for replying to a comment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyOptions {
    /// The comment to reply to
    pub comment_id: Option<String>,

    /// The reply text
    pub message: Option<String>,
}

impl ReplyOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment id.
    pub fn comment_id(&mut self, comment_id: impl Into<String>) -> &mut Self {
        self.comment_id = Some(comment_id.into());
        self
    }

    /// Set the reply text.
    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = Some(message.into());
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the comment id or message is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let comment_id = required(self.comment_id.as_deref(), "comment_id")?;
        let message = required(self.message.as_deref(), "message")?;

        let mut request = ApiRequest::post(format!("/{comment_id}/replies"));
        request.append_form("message", message);
        Ok(request)
    }
}

/// Options for hiding or unhiding a comment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HideCommentOptions {
    /// The comment id
    pub comment_id: Option<String>,

    /// Whether the comment should be hidden
    pub hide: bool,
}

impl HideCommentOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment id.
    pub fn comment_id(&mut self, comment_id: impl Into<String>) -> &mut Self {
        self.comment_id = Some(comment_id.into());
        self
    }

    /// Set whether the comment should be hidden.
    pub fn hide(&mut self, hide: bool) -> &mut Self {
        self.hide = hide;
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the comment id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let comment_id = required(self.comment_id.as_deref(), "comment_id")?;

        let mut request = ApiRequest::post(format!("/{comment_id}"));
        request.append_form("hide", if self.hide { "true" } else { "false" });
        Ok(request)
    }
}

/// Options for deleting a comment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteCommentOptions {
    /// The comment id
    pub comment_id: Option<String>,
}

impl DeleteCommentOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment id.
    pub fn comment_id(&mut self, comment_id: impl Into<String>) -> &mut Self {
        self.comment_id = Some(comment_id.into());
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the comment id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let comment_id = required(self.comment_id.as_deref(), "comment_id")?;
        Ok(ApiRequest::delete(format!("/{comment_id}")))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use reqwest::Method;

    #[test]
    fn reply() {
        let request = ReplyOptions::new()
            .comment_id("17881770991003328")
            .message("Thanks!")
            .get_request()
            .expect("failed to build");

        assert!(request.method == Method::POST);
        assert!(request.url == "/17881770991003328/replies");
        assert!(request.form_value("message") == Some("Thanks!"));
        assert!(request.query.is_empty());
    }

    #[test]
    fn reply_needs_message() {
        let error = ReplyOptions::new()
            .comment_id("17881770991003328")
            .get_request()
            .expect_err("built without a message");
        assert!(matches!(error, Error::MissingProperty("message")));
    }

    #[test]
    fn hide_and_unhide() {
        let request = HideCommentOptions::new()
            .comment_id("17873440459141021")
            .hide(true)
            .get_request()
            .expect("failed to build");
        assert!(request.method == Method::POST);
        assert!(request.url == "/17873440459141021");
        assert!(request.form_value("hide") == Some("true"));

        let request = HideCommentOptions::new()
            .comment_id("17873440459141021")
            .get_request()
            .expect("failed to build");
        assert!(request.form_value("hide") == Some("false"));
    }

    #[test]
    fn delete() {
        let request = DeleteCommentOptions::new()
            .comment_id("17873440459141021")
            .get_request()
            .expect("failed to build");
        assert!(request.method == Method::DELETE);
        assert!(request.url == "/17873440459141021");

        let error = DeleteCommentOptions::new()
            .get_request()
            .expect_err("built without an id");
        assert!(matches!(error, Error::MissingProperty("comment_id")));
    }

    #[test]
    fn replies_page() {
        let request = CommentRepliesOptions::new()
            .comment_id("17881770991003328")
            .limit(50)
            .get_request()
            .expect("failed to build");
        assert!(request.url == "/17881770991003328/replies");
        assert!(request.query_value("limit") == Some("50"));
    }
}
