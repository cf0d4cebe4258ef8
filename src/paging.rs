use url::Url;

/// A page of results, as returned by the graph and basic display apis.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct DataList<T> {
    /// The items on this page
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,

    /// Continuation info
    #[serde(default)]
    pub paging: Option<Paging>,
}

impl<T> DataList<T> {
    /// The cursor to pass as `after` to get the next page.
    ///
    /// This is `None` if the api reported no next page.
    pub fn next_cursor(&self) -> Option<&str> {
        let paging = self.paging.as_ref()?;
        paging.next.as_ref()?;
        paging.after()
    }

    /// The cursor to pass as `before` to get the previous page.
    pub fn previous_cursor(&self) -> Option<&str> {
        let paging = self.paging.as_ref()?;
        paging.previous.as_ref()?;
        paging.before()
    }
}

/// Paging info.
///
/// Cursors are opaque and only meaningful to the api.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Paging {
    /// The cursors
    #[serde(default)]
    pub cursors: Option<Cursors>,

    /// The url of the next page
    #[serde(default)]
    pub next: Option<Url>,

    /// The url of the previous page
    #[serde(default)]
    pub previous: Option<Url>,
}

impl Paging {
    /// The `before` cursor
    pub fn before(&self) -> Option<&str> {
        self.cursors.as_ref()?.before.as_deref()
    }

    /// The `after` cursor
    pub fn after(&self) -> Option<&str> {
        self.cursors.as_ref()?.after.as_deref()
    }
}

/// Paging cursors
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Cursors {
    /// Points to the start of the page
    #[serde(default)]
    pub before: Option<String>,

    /// Points to the end of the page
    #[serde(default)]
    pub after: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cursors() {
        let list: DataList<serde_json::Value> = serde_json::from_str(
            r#"{
                "data": [{"id": "1"}],
                "paging": {
                    "cursors": {"before": "QVFI", "after": "QVFJ"},
                    "next": "https://graph.instagram.com/v19.0/me/media?after=QVFJ"
                }
            }"#,
        )
        .expect("failed to parse");

        assert!(list.data.len() == 1);
        assert!(list.next_cursor() == Some("QVFJ"));
        assert!(list.previous_cursor().is_none());
    }

    #[test]
    fn last_page() {
        let list: DataList<serde_json::Value> =
            serde_json::from_str(r#"{"data": [], "paging": {"cursors": {"after": "x"}}}"#)
                .expect("failed to parse");

        assert!(list.next_cursor().is_none());
        assert!(list.paging.as_ref().and_then(Paging::after) == Some("x"));
    }

    #[test]
    fn missing_paging() {
        let list: DataList<serde_json::Value> =
            serde_json::from_str("{}").expect("failed to parse");
        assert!(list.data.is_empty());
        assert!(list.paging.is_none());
    }
}
