use super::append_paging;
use crate::{
    util::required,
    ApiRequest,
    Error,
    Field,
    FieldList,
};

/// Options for getting a user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserOptions {
    /// The instagram user id
    pub user_id: Option<String>,

    /// The fields to return
    pub fields: FieldList,
}

impl UserOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user id.
    pub fn user_id(&mut self, user_id: impl Into<String>) -> &mut Self {
        self.user_id = Some(user_id.into());
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
    /// Fails if the user id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let user_id = required(self.user_id.as_deref(), "user_id")?;

        let mut request = ApiRequest::get(format!("/{user_id}"));
        request.append_fields(&self.fields);
        Ok(request)
    }
}

/// Options for listing a user's media
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserMediaOptions {
    /// The instagram user id
    pub user_id: Option<String>,

    /// The fields to return for each media object
    pub fields: FieldList,

    /// The page size
    pub limit: Option<u32>,

    /// Return the page before this cursor
    pub before: Option<String>,

    /// Return the page after this cursor
    pub after: Option<String>,
}

impl UserMediaOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user id.
    pub fn user_id(&mut self, user_id: impl Into<String>) -> &mut Self {
        self.user_id = Some(user_id.into());
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
    /// Fails if the user id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let user_id = required(self.user_id.as_deref(), "user_id")?;

        let mut request = ApiRequest::get(format!("/{user_id}/media"));
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

/// Options for listing a user's live stories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStoriesOptions {
    /// The instagram user id
    pub user_id: Option<String>,

    /// The fields to return for each story
    pub fields: FieldList,
}

impl UserStoriesOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user id.
    pub fn user_id(&mut self, user_id: impl Into<String>) -> &mut Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set the fields.
    pub fn fields(&mut self, fields: impl Into<FieldList>) -> &mut Self {
        self.fields = fields.into();
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the user id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let user_id = required(self.user_id.as_deref(), "user_id")?;

        let mut request = ApiRequest::get(format!("/{user_id}/stories"));
        request.append_fields(&self.fields);
        Ok(request)
    }
}

/// Options for listing the media a user is tagged in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTagsOptions {
    /// The instagram user id
    pub user_id: Option<String>,

    /// The fields to return for each media object
    pub fields: FieldList,

    /// The page size
    pub limit: Option<u32>,

    /// Return the page before this cursor
    pub before: Option<String>,

    /// Return the page after this cursor
    pub after: Option<String>,
}

impl UserTagsOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user id.
    pub fn user_id(&mut self, user_id: impl Into<String>) -> &mut Self {
        self.user_id = Some(user_id.into());
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
    /// Fails if the user id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let user_id = required(self.user_id.as_deref(), "user_id")?;

        let mut request = ApiRequest::get(format!("/{user_id}/tags"));
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

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::fields;

    #[test]
    fn media_page() {
        let request = UserMediaOptions::new()
            .user_id("42")
            .limit(10)
            .after("cursor123")
            .get_request()
            .expect("failed to build");

        assert!(request.method == reqwest::Method::GET);
        assert!(request.url == "/42/media");
        assert!(request.query_value("fields").is_none());

        let url = request
            .resolve("https://graph.facebook.com/v19.0")
            .expect("failed to resolve");
        assert!(url.as_str() == "https://graph.facebook.com/v19.0/42/media?limit=10&after=cursor123");
    }

    #[test]
    fn user_fields() {
        let request = UserOptions::new()
            .user_id("17841405822304914")
            .fields(fields::user::USERNAME + fields::user::FOLLOWERS_COUNT)
            .get_request()
            .expect("failed to build");

        assert!(request.url == "/17841405822304914");
        assert!(request.query_value("fields") == Some("username,followers_count"));
    }

    #[test]
    fn user_id_is_required() {
        let error = UserOptions::new()
            .get_request()
            .expect_err("built without an id");
        assert!(matches!(error, Error::MissingProperty("user_id")));

        let error = UserStoriesOptions::new()
            .user_id(" ")
            .get_request()
            .expect_err("built with an empty id");
        assert!(matches!(error, Error::MissingProperty("user_id")));

        let error = UserTagsOptions::new()
            .limit(5)
            .get_request()
            .expect_err("built without an id");
        assert!(matches!(error, Error::MissingProperty("user_id")));
    }

    #[test]
    fn user_id_is_trimmed() {
        let request = UserOptions::new()
            .user_id(" 42 ")
            .get_request()
            .expect("failed to build");
        assert!(request.url == "/42");

        let url = request
            .resolve("https://graph.facebook.com/v19.0")
            .expect("failed to resolve");
        assert!(url.as_str() == "https://graph.facebook.com/v19.0/42");
    }

    #[test]
    fn stories_and_tags() {
        let request = UserStoriesOptions::new()
            .user_id("42")
            .get_request()
            .expect("failed to build");
        assert!(request.url == "/42/stories");

        let request = UserTagsOptions::new()
            .user_id("42")
            .before("QVFI")
            .get_request()
            .expect("failed to build");
        assert!(request.url == "/42/tags");
        assert!(request.query_value("before") == Some("QVFI"));
        assert!(request.query_value("limit").is_none());
    }
}
