use crate::{
    ApiRequest,
    Error,
    Field,
    FieldList,
};

/// The path segment for a user, `me` if no id is given.
fn user_segment(user_id: Option<&str>) -> &str {
    match user_id {
        Some(user_id) if !user_id.trim().is_empty() => user_id,
        _ => "me",
    }
}

/// Options for getting a user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserOptions {
    /// The user id.
    ///
    /// `None` means the authenticated user.
    pub user_id: Option<String>,

    /// The fields to return
    pub fields: FieldList,
}

impl UserOptions {
    /// Make options for the authenticated user.
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
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let mut request = ApiRequest::get(format!("/{}", user_segment(self.user_id.as_deref())));
        request.append_fields(&self.fields);
        Ok(request)
    }
}

/// Options for listing a user's media
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserMediaOptions {
    /// The user id.
    ///
    /// `None` means the authenticated user.
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
    /// Make options for the authenticated user.
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
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let mut request = ApiRequest::get(format!(
            "/{}/media",
            user_segment(self.user_id.as_deref())
        ));
        request.append_fields(&self.fields);
        request
            .append_query_int("limit", self.limit)
            .append_query_opt("before", self.before.as_deref())
            .append_query_opt("after", self.after.as_deref());
        Ok(request)
    }
}
