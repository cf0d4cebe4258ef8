use super::append_paging;
use crate::{
    util::required,
    ApiRequest,
    Error,
    FieldList,
};

/// Strip a leading `#` from a hashtag query.
fn strip_hash(name: &str) -> &str {
    name.trim().trim_start_matches('#')
}

/// Options for looking up a hashtag id by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashtagSearchOptions {
    /// The instagram user making the search
    pub user_id: Option<String>,

    /// The hashtag name
    pub query: Option<String>,
}

impl HashtagSearchOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user id.
    pub fn user_id(&mut self, user_id: impl Into<String>) -> &mut Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set the hashtag name.
    pub fn query(&mut self, query: impl Into<String>) -> &mut Self {
        self.query = Some(query.into());
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the user id or query is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let user_id = required(self.user_id.as_deref(), "user_id")?;
        let query = required(self.query.as_deref().map(strip_hash), "query")?;

        Ok(ApiRequest::get("/ig_hashtag_search")
            .with_query("user_id", user_id)
            .with_query("q", query))
    }
}

/// Options for getting a hashtag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashtagOptions {
    /// The hashtag id
    pub hashtag_id: Option<String>,

    /// The fields to return
    pub fields: FieldList,
}

impl HashtagOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hashtag id.
    pub fn hashtag_id(&mut self, hashtag_id: impl Into<String>) -> &mut Self {
        self.hashtag_id = Some(hashtag_id.into());
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
    /// Fails if the hashtag id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let hashtag_id = required(self.hashtag_id.as_deref(), "hashtag_id")?;

        let mut request = ApiRequest::get(format!("/{hashtag_id}"));
        request.append_fields(&self.fields);
        Ok(request)
    }
}

/// Which media edge of a hashtag to list
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum HashtagMediaKind {
    /// The most recently published media
    #[default]
    Recent,

    /// The most popular media
    Top,
}

impl HashtagMediaKind {
    /// The edge name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recent => "recent_media",
            Self::Top => "top_media",
        }
    }
}

/// Options for listing the media tagged with a hashtag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashtagMediaOptions {
    /// The hashtag id
    pub hashtag_id: Option<String>,

    /// The instagram user making the request
    pub user_id: Option<String>,

    /// Recent or top media
    pub kind: HashtagMediaKind,

    /// The fields to return for each media object
    pub fields: FieldList,

    /// The page size
    pub limit: Option<u32>,

    /// Return the page before this cursor
    pub before: Option<String>,

    /// Return the page after this cursor
    pub after: Option<String>,
}

impl HashtagMediaOptions {
    /// Make new options.
    pub fn new(kind: HashtagMediaKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Set the hashtag id.
    pub fn hashtag_id(&mut self, hashtag_id: impl Into<String>) -> &mut Self {
        self.hashtag_id = Some(hashtag_id.into());
        self
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
    /// Fails if the hashtag id or user id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let hashtag_id = required(self.hashtag_id.as_deref(), "hashtag_id")?;
        let user_id = required(self.user_id.as_deref(), "user_id")?;

        let mut request = ApiRequest::get(format!("/{hashtag_id}/{}", self.kind.as_str()));
        request.append_query("user_id", user_id);
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
    use crate::graph::fields::media;

    #[test]
    fn search() {
        let request = HashtagSearchOptions::new()
            .user_id("17841405822304914")
            .query("#coke")
            .get_request()
            .expect("failed to build");

        assert!(request.url == "/ig_hashtag_search");
        assert!(request.query_value("user_id") == Some("17841405822304914"));
        assert!(request.query_value("q") == Some("coke"));
    }

    #[test]
    fn search_needs_a_name() {
        let error = HashtagSearchOptions::new()
            .user_id("17841405822304914")
            .query("#")
            .get_request()
            .expect_err("built with an empty name");
        assert!(matches!(error, Error::MissingProperty("query")));
    }

    #[test]
    fn top_media() {
        let request = HashtagMediaOptions::new(HashtagMediaKind::Top)
            .hashtag_id("17843857450040591")
            .user_id("17841405822304914")
            .fields(media::ID + media::PERMALINK)
            .after("QVFI")
            .get_request()
            .expect("failed to build");

        assert!(request.url == "/17843857450040591/top_media");
        assert!(
            request.query
                == [
                    ("user_id".to_string(), "17841405822304914".to_string()),
                    ("fields".to_string(), "id,permalink".to_string()),
                    ("after".to_string(), "QVFI".to_string()),
                ]
        );
    }

    #[test]
    fn recent_media_needs_user() {
        let error = HashtagMediaOptions::default()
            .hashtag_id("17843857450040591")
            .get_request()
            .expect_err("built without a user");
        assert!(matches!(error, Error::MissingProperty("user_id")));
    }
}
