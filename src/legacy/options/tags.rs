use crate::{
    util::required,
    ApiRequest,
    Error,
};

/// Get a tag name without a leading `#`.
fn tag_name(tag_name: Option<&str>) -> Result<&str, Error> {
    let tag_name = required(tag_name, "tag_name")?;
    let tag_name = tag_name.trim_start_matches('#');
    if tag_name.is_empty() {
        return Err(Error::MissingProperty("tag_name"));
    }
    Ok(tag_name)
}

/// Options for getting a tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagOptions {
    /// The tag name, without the `#`
    pub tag_name: Option<String>,
}

impl TagOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tag name.
    pub fn tag_name(&mut self, tag_name: impl Into<String>) -> &mut Self {
        self.tag_name = Some(tag_name.into());
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the tag name is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let tag_name = tag_name(self.tag_name.as_deref())?;
        Ok(ApiRequest::get(format!("/tags/{tag_name}")))
    }
}

/// Options for getting recent media with a tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRecentMediaOptions {
    /// The tag name, without the `#`
    pub tag_name: Option<String>,

    /// The number of media to return
    pub count: Option<u32>,

    /// Return media before this tag id
    pub min_tag_id: Option<String>,

    /// Return media after this tag id
    pub max_tag_id: Option<String>,
}

impl TagRecentMediaOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tag name.
    pub fn tag_name(&mut self, tag_name: impl Into<String>) -> &mut Self {
        self.tag_name = Some(tag_name.into());
        self
    }

    /// Set the count.
    pub fn count(&mut self, count: u32) -> &mut Self {
        self.count = Some(count);
        self
    }

    /// Set the min tag id.
    pub fn min_tag_id(&mut self, min_tag_id: impl Into<String>) -> &mut Self {
        self.min_tag_id = Some(min_tag_id.into());
        self
    }

    /// Set the max tag id.
    pub fn max_tag_id(&mut self, max_tag_id: impl Into<String>) -> &mut Self {
        self.max_tag_id = Some(max_tag_id.into());
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the tag name is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let tag_name = tag_name(self.tag_name.as_deref())?;

        let mut request = ApiRequest::get(format!("/tags/{tag_name}/media/recent"));
        request
            .append_query_int("count", self.count)
            .append_query_opt("min_tag_id", self.min_tag_id.as_deref())
            .append_query_opt("max_tag_id", self.max_tag_id.as_deref());
        Ok(request)
    }
}

/// Options for searching tags by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSearchOptions {
    /// The search query
    pub query: Option<String>,
}

impl TagSearchOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query.
    pub fn query(&mut self, query: impl Into<String>) -> &mut Self {
        self.query = Some(query.into());
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the query is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let query = required(self.query.as_deref(), "query")?;
        Ok(ApiRequest::get("/tags/search").with_query("q", query))
    }
}
